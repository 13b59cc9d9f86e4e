//! Storage trait for user accounts

use crate::error::Result;
use crate::types::{AccessToken, NewUser, User};
use async_trait::async_trait;

/// Durable keyed storage for user records
///
/// Implementations enforce uniqueness of `username`, `access_token` and of
/// the admin role atomically inside `insert`. Callers never check before
/// inserting.
#[async_trait]
pub trait UserStore: Send + Sync {
    /// Insert a new record and return it with store-assigned fields
    ///
    /// # Errors
    /// `StoreError::UniqueViolation` on any collision, `StoreError::Backend` otherwise
    async fn insert(&self, user: NewUser) -> Result<User>;

    /// Find the user owning `token`
    async fn find_by_token(&self, token: &AccessToken) -> Result<User>;

    /// Find a user by exact username
    async fn find_by_username(&self, username: &str) -> Result<User>;

    /// All users, ordered by creation time then username
    async fn list_all(&self) -> Result<Vec<User>>;

    /// Unconditionally delete the user with `username`
    ///
    /// No role check happens here.
    async fn delete_by_username(&self, username: &str) -> Result<()>;
}
