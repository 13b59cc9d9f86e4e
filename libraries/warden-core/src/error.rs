/// Error kinds raised by the collaborators of the account service
use std::fmt;
use thiserror::Error;

/// Result type alias using `StoreError`
pub type Result<T> = std::result::Result<T, StoreError>;

/// Field whose uniqueness rule rejected an insert
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UniqueField {
    Username,
    AccessToken,
    /// A second record with the admin role
    AdminRole,
}

impl fmt::Display for UniqueField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            UniqueField::Username => "username",
            UniqueField::AccessToken => "access token",
            UniqueField::AdminRole => "admin role",
        };
        f.write_str(name)
    }
}

/// Errors surfaced by a `UserStore` implementation
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// Insert collided with an existing record
    #[error("Unique constraint violated on {0}")]
    UniqueViolation(UniqueField),

    /// No record matches the given key
    #[error("{entity} not found: {key}")]
    NotFound { entity: String, key: String },

    /// Backend failure (connection, query, decoding)
    #[error("Store error: {0}")]
    Backend(String),
}

impl StoreError {
    /// Create a not found error
    pub fn not_found(entity: impl Into<String>, key: impl Into<String>) -> Self {
        Self::NotFound {
            entity: entity.into(),
            key: key.into(),
        }
    }

    /// Create a backend error
    pub fn backend(msg: impl Into<String>) -> Self {
        Self::Backend(msg.into())
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

/// Errors surfaced by a `TokenGenerator`
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TokenError {
    /// The secure randomness source could not be read
    #[error("Secure randomness unavailable: {0}")]
    EntropyUnavailable(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_message_names_entity_and_key() {
        let err = StoreError::not_found("User", "ghost");
        assert!(err.is_not_found());
        assert_eq!(err.to_string(), "User not found: ghost");
    }

    #[test]
    fn unique_violation_names_field() {
        let err = StoreError::UniqueViolation(UniqueField::AccessToken);
        assert_eq!(err.to_string(), "Unique constraint violated on access token");
    }
}
