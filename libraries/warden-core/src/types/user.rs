/// User domain types
use super::UserId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Username reserved for the bootstrap administrator
pub const ADMIN_USERNAME: &str = "admin";

/// Account role
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    User,
}

impl Role {
    /// Stable lowercase name, as persisted
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::User => "user",
        }
    }

    pub fn is_admin(&self) -> bool {
        matches!(self, Role::Admin)
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "admin" => Ok(Role::Admin),
            "user" => Ok(Role::User),
            other => Err(format!("unknown role: {other}")),
        }
    }
}

/// Opaque bearer secret
///
/// `Debug` is redacted so tokens never end up in log lines.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct AccessToken(String);

impl AccessToken {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    /// Reveal the secret, e.g. to hand it to the account holder once
    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for AccessToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("AccessToken(<redacted>)")
    }
}

/// Stored user account
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct User {
    /// Store-assigned identifier
    pub id: UserId,

    /// Unique login name
    pub username: String,

    pub role: Role,

    /// Never serialized; shown to the holder only at creation
    #[serde(skip_serializing)]
    pub access_token: AccessToken,

    /// Account creation timestamp
    pub created_at: DateTime<Utc>,
}

/// User record ready to be inserted; the store assigns `id` and `created_at`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    pub username: String,
    pub role: Role,
    pub access_token: AccessToken,
}

impl NewUser {
    pub fn new(username: impl Into<String>, role: Role, access_token: AccessToken) -> Self {
        Self {
            username: username.into(),
            role,
            access_token,
        }
    }

    /// Materialize the record with store-assigned fields
    pub fn into_user(self, id: UserId, created_at: DateTime<Utc>) -> User {
        User {
            id,
            username: self.username,
            role: self.role,
            access_token: self.access_token,
            created_at,
        }
    }
}
