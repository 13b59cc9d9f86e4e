//! In-process `UserStore`
//!
//! Enforces the same uniqueness rules as the `SQLite` schema, all under a
//! single write lock, so services can be exercised without a database.

use async_trait::async_trait;
use chrono::Utc;
use std::collections::HashMap;
use tokio::sync::RwLock;
use warden_core::{
    error::{Result, StoreError, UniqueField},
    storage::UserStore,
    types::{AccessToken, NewUser, User, UserId},
};

#[derive(Default)]
pub struct MemoryUserStore {
    users: RwLock<HashMap<UserId, User>>,
}

impl MemoryUserStore {
    pub fn new() -> Self {
        Self::default()
    }
}

fn check_unique(users: &HashMap<UserId, User>, candidate: &NewUser) -> Result<()> {
    for existing in users.values() {
        if existing.username == candidate.username {
            return Err(StoreError::UniqueViolation(UniqueField::Username));
        }
        if existing.access_token == candidate.access_token {
            return Err(StoreError::UniqueViolation(UniqueField::AccessToken));
        }
        if existing.role.is_admin() && candidate.role.is_admin() {
            return Err(StoreError::UniqueViolation(UniqueField::AdminRole));
        }
    }
    Ok(())
}

#[async_trait]
impl UserStore for MemoryUserStore {
    async fn insert(&self, user: NewUser) -> Result<User> {
        let mut users = self.users.write().await;
        check_unique(&users, &user)?;

        let created = user.into_user(UserId::generate(), Utc::now());
        users.insert(created.id.clone(), created.clone());
        Ok(created)
    }

    async fn find_by_token(&self, token: &AccessToken) -> Result<User> {
        self.users
            .read()
            .await
            .values()
            .find(|u| &u.access_token == token)
            .cloned()
            .ok_or_else(|| StoreError::not_found("User", "<token>"))
    }

    async fn find_by_username(&self, username: &str) -> Result<User> {
        self.users
            .read()
            .await
            .values()
            .find(|u| u.username == username)
            .cloned()
            .ok_or_else(|| StoreError::not_found("User", username))
    }

    async fn list_all(&self) -> Result<Vec<User>> {
        let mut all: Vec<User> = self.users.read().await.values().cloned().collect();
        all.sort_by(|a, b| {
            a.created_at
                .cmp(&b.created_at)
                .then_with(|| a.username.cmp(&b.username))
        });
        Ok(all)
    }

    async fn delete_by_username(&self, username: &str) -> Result<()> {
        let mut users = self.users.write().await;
        let id = users
            .values()
            .find(|u| u.username == username)
            .map(|u| u.id.clone())
            .ok_or_else(|| StoreError::not_found("User", username))?;
        users.remove(&id);
        Ok(())
    }
}
