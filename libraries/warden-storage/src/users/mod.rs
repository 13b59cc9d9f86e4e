//! User account queries

use crate::{Result, StorageError};
use chrono::{DateTime, Utc};
use sqlx::{FromRow, SqlitePool};
use warden_core::types::{AccessToken, NewUser, Role, User, UserId};

#[derive(Debug, FromRow)]
struct UserRow {
    id: String,
    username: String,
    role: String,
    access_token: String,
    created_at: i64,
}

impl TryFrom<UserRow> for User {
    type Error = StorageError;

    fn try_from(row: UserRow) -> Result<Self> {
        let role = row
            .role
            .parse::<Role>()
            .map_err(|e| StorageError::CorruptRow(format!("user {}: {}", row.id, e)))?;
        let created_at = DateTime::<Utc>::from_timestamp(row.created_at, 0).ok_or_else(|| {
            StorageError::CorruptRow(format!("user {}: bad timestamp {}", row.id, row.created_at))
        })?;

        Ok(User {
            id: UserId::new(row.id),
            username: row.username,
            role,
            access_token: AccessToken::new(row.access_token),
            created_at,
        })
    }
}

const SELECT_USER: &str = "SELECT id, username, role, access_token, created_at FROM users";

/// Insert a new user
///
/// Uniqueness of username, token and the admin role is enforced by the
/// schema, so a collision comes back as a database error.
pub async fn create(pool: &SqlitePool, user: NewUser) -> Result<User> {
    let id = UserId::generate();
    // Second precision, matching what is read back
    let created_at = DateTime::<Utc>::from_timestamp(Utc::now().timestamp(), 0)
        .unwrap_or_else(Utc::now);

    sqlx::query(
        "INSERT INTO users (id, username, role, access_token, created_at)
         VALUES (?, ?, ?, ?, ?)",
    )
    .bind(id.as_str())
    .bind(&user.username)
    .bind(user.role.as_str())
    .bind(user.access_token.expose())
    .bind(created_at.timestamp())
    .execute(pool)
    .await?;

    Ok(user.into_user(id, created_at))
}

/// Get user owning an access token
pub async fn get_by_token(pool: &SqlitePool, token: &str) -> Result<Option<User>> {
    let row = sqlx::query_as::<_, UserRow>(&format!("{SELECT_USER} WHERE access_token = ?"))
        .bind(token)
        .fetch_optional(pool)
        .await?;

    row.map(User::try_from).transpose()
}

/// Get user by username
pub async fn get_by_username(pool: &SqlitePool, username: &str) -> Result<Option<User>> {
    let row = sqlx::query_as::<_, UserRow>(&format!("{SELECT_USER} WHERE username = ?"))
        .bind(username)
        .fetch_optional(pool)
        .await?;

    row.map(User::try_from).transpose()
}

/// Get all users
pub async fn get_all(pool: &SqlitePool) -> Result<Vec<User>> {
    let rows = sqlx::query_as::<_, UserRow>(&format!(
        "{SELECT_USER} ORDER BY created_at, username"
    ))
    .fetch_all(pool)
    .await?;

    rows.into_iter().map(User::try_from).collect()
}

/// Hard-delete a user by username
///
/// Performs no role check.
pub async fn delete_by_username(pool: &SqlitePool, username: &str) -> Result<()> {
    let result = sqlx::query("DELETE FROM users WHERE username = ?")
        .bind(username)
        .execute(pool)
        .await?;

    if result.rows_affected() == 0 {
        return Err(StorageError::not_found("User", username));
    }

    Ok(())
}
