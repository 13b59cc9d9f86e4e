/// Common test utilities and fixtures
use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tempfile::TempDir;
use warden_cli::services::UserService;
use warden_core::{
    error::Result as StoreResult,
    types::{AccessToken, NewUser, User},
    StoreError, TokenError, TokenGenerator, UserStore,
};
use warden_storage::{MemoryUserStore, SqliteUserStore};

/// Service backed by the in-memory store and real random tokens
pub fn memory_service() -> UserService {
    UserService::with_os_tokens(Arc::new(MemoryUserStore::new()))
}

/// Service backed by a file SQLite database; keep the `TempDir` alive
pub async fn sqlite_service() -> (UserService, TempDir) {
    let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
    let db_url = format!("sqlite://{}", temp_dir.path().join("test.db").display());

    let pool = warden_storage::create_pool(&db_url, 5)
        .await
        .expect("Failed to create pool");
    warden_storage::run_migrations(&pool)
        .await
        .expect("Failed to run migrations");

    let service = UserService::with_os_tokens(Arc::new(SqliteUserStore::new(pool)));
    (service, temp_dir)
}

/// Token generator whose randomness source is always unavailable
pub struct BrokenEntropy;

impl TokenGenerator for BrokenEntropy {
    fn generate(&self) -> Result<AccessToken, TokenError> {
        Err(TokenError::EntropyUnavailable("no entropy".to_string()))
    }
}

/// Token generator that returns the same token every time and counts calls
#[derive(Default)]
pub struct FixedTokens {
    pub calls: AtomicUsize,
}

impl TokenGenerator for FixedTokens {
    fn generate(&self) -> Result<AccessToken, TokenError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(AccessToken::new("fixed-token"))
    }
}

/// Store whose backend is down for every operation
pub struct UnavailableStore;

fn down() -> StoreError {
    StoreError::backend("connection refused")
}

#[async_trait]
impl UserStore for UnavailableStore {
    async fn insert(&self, _user: NewUser) -> StoreResult<User> {
        Err(down())
    }

    async fn find_by_token(&self, _token: &AccessToken) -> StoreResult<User> {
        Err(down())
    }

    async fn find_by_username(&self, _username: &str) -> StoreResult<User> {
        Err(down())
    }

    async fn list_all(&self) -> StoreResult<Vec<User>> {
        Err(down())
    }

    async fn delete_by_username(&self, _username: &str) -> StoreResult<()> {
        Err(down())
    }
}

/// Store that reads normally but fails every delete
pub struct DeleteFailsStore {
    pub inner: MemoryUserStore,
}

#[async_trait]
impl UserStore for DeleteFailsStore {
    async fn insert(&self, user: NewUser) -> StoreResult<User> {
        self.inner.insert(user).await
    }

    async fn find_by_token(&self, token: &AccessToken) -> StoreResult<User> {
        self.inner.find_by_token(token).await
    }

    async fn find_by_username(&self, username: &str) -> StoreResult<User> {
        self.inner.find_by_username(username).await
    }

    async fn list_all(&self) -> StoreResult<Vec<User>> {
        self.inner.list_all().await
    }

    async fn delete_by_username(&self, _username: &str) -> StoreResult<()> {
        Err(down())
    }
}

/// Store whose rows disappear between lookup and delete, as if another
/// caller deleted them first
pub struct RowVanishesStore {
    pub inner: MemoryUserStore,
}

#[async_trait]
impl UserStore for RowVanishesStore {
    async fn insert(&self, user: NewUser) -> StoreResult<User> {
        self.inner.insert(user).await
    }

    async fn find_by_token(&self, token: &AccessToken) -> StoreResult<User> {
        self.inner.find_by_token(token).await
    }

    async fn find_by_username(&self, username: &str) -> StoreResult<User> {
        self.inner.find_by_username(username).await
    }

    async fn list_all(&self) -> StoreResult<Vec<User>> {
        self.inner.list_all().await
    }

    async fn delete_by_username(&self, username: &str) -> StoreResult<()> {
        Err(StoreError::not_found("User", username))
    }
}
