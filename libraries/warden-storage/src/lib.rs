//! Warden Storage
//!
//! Persistence for Warden user accounts.
//!
//! Two `UserStore` implementations live here:
//!
//! - [`SqliteUserStore`]: durable `SQLite` storage; uniqueness of username,
//!   token and the admin role is enforced by the schema
//! - [`MemoryUserStore`]: in-process double with identical uniqueness rules
//!
//! # Example
//!
//! ```rust,no_run
//! use warden_storage::{create_pool, run_migrations, SqliteUserStore};
//! use warden_core::storage::UserStore;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let pool = create_pool("sqlite://warden.db", 5).await?;
//! run_migrations(&pool).await?;
//!
//! let store = SqliteUserStore::new(pool);
//! let users = store.list_all().await?;
//! # Ok(())
//! # }
//! ```

mod context;
mod error;
mod memory;

pub mod users;

pub use context::SqliteUserStore;
pub use error::{Result, StorageError};
pub use memory::MemoryUserStore;

use sqlx::migrate::Migrator;
use sqlx::sqlite::SqlitePool;

// Embed migrations into binary
static MIGRATOR: Migrator = sqlx::migrate!("./migrations");

/// Run database migrations
///
/// Call once at startup, before the pool is handed to a store.
pub async fn run_migrations(pool: &SqlitePool) -> Result<()> {
    MIGRATOR.run(pool).await?;
    Ok(())
}

/// Create a new `SQLite` pool
///
/// # Arguments
///
/// * `database_url` - `SQLite` connection string (e.g., `<sqlite://warden.db>`)
/// * `max_connections` - Upper bound on pooled connections
pub async fn create_pool(database_url: &str, max_connections: u32) -> Result<SqlitePool> {
    use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions};
    use std::str::FromStr;

    tracing::debug!(url = %database_url, "creating sqlite pool");

    let options = SqliteConnectOptions::from_str(database_url)?
        .create_if_missing(true)
        .journal_mode(SqliteJournalMode::Wal)
        .busy_timeout(std::time::Duration::from_secs(30));

    let pool = SqlitePoolOptions::new()
        .max_connections(max_connections)
        .connect_with(options)
        .await?;

    tracing::debug!("sqlite pool ready");

    Ok(pool)
}
