/// Storage-specific errors
use thiserror::Error;
use warden_core::{StoreError, UniqueField};

/// Result type alias using `StorageError`
pub type Result<T> = std::result::Result<T, StorageError>;

/// Storage error types
#[derive(Error, Debug)]
pub enum StorageError {
    /// Entity not found
    #[error("{entity} not found: {id}")]
    NotFound { entity: String, id: String },

    /// Row could not be mapped to a domain type
    #[error("Corrupt row: {0}")]
    CorruptRow(String),

    /// Migration error
    #[error(transparent)]
    Migration(#[from] sqlx::migrate::MigrateError),

    /// Database error from `SQLx`
    #[error(transparent)]
    Database(#[from] sqlx::Error),
}

impl StorageError {
    /// Create a not found error
    pub fn not_found(entity: impl Into<String>, id: impl Into<String>) -> Self {
        Self::NotFound {
            entity: entity.into(),
            id: id.into(),
        }
    }
}

/// Map an SQLite unique-constraint message onto the field it guards
fn unique_field(message: &str) -> Option<UniqueField> {
    if message.contains("users.username") {
        Some(UniqueField::Username)
    } else if message.contains("users.access_token") {
        Some(UniqueField::AccessToken)
    } else if message.contains("users.role") || message.contains("idx_users_single_admin") {
        Some(UniqueField::AdminRole)
    } else {
        None
    }
}

impl From<StorageError> for StoreError {
    fn from(err: StorageError) -> Self {
        match err {
            StorageError::NotFound { entity, id } => StoreError::not_found(entity, id),
            StorageError::Database(sqlx::Error::Database(db_err)) if db_err.is_unique_violation() => {
                match unique_field(db_err.message()) {
                    Some(field) => StoreError::UniqueViolation(field),
                    None => StoreError::backend(db_err.message().to_string()),
                }
            }
            other => StoreError::backend(other.to_string()),
        }
    }
}
