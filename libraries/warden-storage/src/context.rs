use crate::users;
use async_trait::async_trait;
use sqlx::SqlitePool;
use warden_core::{
    error::{Result, StoreError},
    storage::UserStore,
    types::{AccessToken, NewUser, User},
};

/// `UserStore` backed by an `SQLite` pool
#[derive(Clone)]
pub struct SqliteUserStore {
    pool: SqlitePool,
}

impl SqliteUserStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}

#[async_trait]
impl UserStore for SqliteUserStore {
    async fn insert(&self, user: NewUser) -> Result<User> {
        let username = user.username.clone();
        let created = users::create(&self.pool, user).await?;
        tracing::debug!(username = %username, id = %created.id, "inserted user row");
        Ok(created)
    }

    async fn find_by_token(&self, token: &AccessToken) -> Result<User> {
        users::get_by_token(&self.pool, token.expose())
            .await?
            .ok_or_else(|| StoreError::not_found("User", "<token>"))
    }

    async fn find_by_username(&self, username: &str) -> Result<User> {
        users::get_by_username(&self.pool, username)
            .await?
            .ok_or_else(|| StoreError::not_found("User", username))
    }

    async fn list_all(&self) -> Result<Vec<User>> {
        Ok(users::get_all(&self.pool).await?)
    }

    async fn delete_by_username(&self, username: &str) -> Result<()> {
        users::delete_by_username(&self.pool, username).await?;
        tracing::debug!(username = %username, "deleted user row");
        Ok(())
    }
}
