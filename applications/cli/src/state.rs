/// Shared application state
use crate::{config::WardenConfig, error::Result, services::UserService};
use std::sync::Arc;
use warden_storage::SqliteUserStore;

/// Services wired to their configured backends
#[derive(Clone)]
pub struct AppState {
    pub users: UserService,
}

impl AppState {
    pub fn new(users: UserService) -> Self {
        Self { users }
    }

    /// Open the configured database, apply migrations and build services
    pub async fn connect(config: &WardenConfig) -> Result<Self> {
        let pool = warden_storage::create_pool(
            &config.storage.database_url,
            config.storage.max_connections,
        )
        .await?;
        warden_storage::run_migrations(&pool).await?;
        tracing::info!("Database connected");

        let store = Arc::new(SqliteUserStore::new(pool));
        Ok(Self::new(UserService::with_os_tokens(store)))
    }
}
