/// User service - account lifecycle and bearer-token authentication
use std::sync::Arc;
use thiserror::Error;
use warden_core::{
    types::{AccessToken, NewUser, Role, User, ADMIN_USERNAME},
    StoreError, TokenError, TokenGenerator, UniqueField, UserStore,
};

use super::token::OsTokenGenerator;

pub type Result<T> = std::result::Result<T, UserServiceError>;

/// Why an account could not be created
#[derive(Debug, Error)]
pub enum CreateFailure {
    #[error(transparent)]
    Entropy(#[from] TokenError),

    #[error(transparent)]
    Store(#[from] StoreError),

    /// An admin account already exists, by name or by role
    #[error("an admin user already exists")]
    AdminExists(#[source] StoreError),
}

#[derive(Debug, Error)]
pub enum UserServiceError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Failed to create {}: {cause}", account_label(.role))]
    CreateFailed {
        role: Role,
        #[source]
        cause: CreateFailure,
    },

    #[error("Invalid access token")]
    InvalidToken,

    #[error("User with username {0} not found")]
    NotFound(String),

    #[error("Permission denied: {0}")]
    PermissionDenied(String),

    #[error("Failed to list users: {0}")]
    ListFailed(#[source] StoreError),

    #[error("Failed to delete user: {0}")]
    DeleteFailed(#[source] StoreError),

    #[error("Failed to find user: {0}")]
    LookupFailed(#[source] StoreError),
}

fn account_label(role: &Role) -> &'static str {
    match role {
        Role::Admin => "admin user",
        Role::User => "user",
    }
}

/// Error kinds callers branch on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    InvalidArgument,
    CreateFailed,
    InvalidToken,
    NotFound,
    PermissionDenied,
    ListFailed,
    DeleteFailed,
    LookupFailed,
}

impl UserServiceError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            UserServiceError::InvalidArgument(_) => ErrorKind::InvalidArgument,
            UserServiceError::CreateFailed { .. } => ErrorKind::CreateFailed,
            UserServiceError::InvalidToken => ErrorKind::InvalidToken,
            UserServiceError::NotFound(_) => ErrorKind::NotFound,
            UserServiceError::PermissionDenied(_) => ErrorKind::PermissionDenied,
            UserServiceError::ListFailed(_) => ErrorKind::ListFailed,
            UserServiceError::DeleteFailed(_) => ErrorKind::DeleteFailed,
            UserServiceError::LookupFailed(_) => ErrorKind::LookupFailed,
        }
    }
}

/// Orchestrates token generation and the user store
///
/// Holds no mutable state of its own; clones share the same collaborators
/// and can be used from any number of tasks.
#[derive(Clone)]
pub struct UserService {
    store: Arc<dyn UserStore>,
    tokens: Arc<dyn TokenGenerator>,
}

impl UserService {
    pub fn new(store: Arc<dyn UserStore>, tokens: Arc<dyn TokenGenerator>) -> Self {
        Self { store, tokens }
    }

    /// Service using the operating system RNG for tokens
    pub fn with_os_tokens(store: Arc<dyn UserStore>) -> Self {
        Self::new(store, Arc::new(OsTokenGenerator::new()))
    }

    /// Create the bootstrap admin account
    ///
    /// Fails with `CreateFailure::AdminExists`, wrapping the store's unique
    /// violation, if a user named `admin` or any admin-role user is already
    /// stored.
    pub async fn create_admin_user(&self) -> Result<User> {
        let token = self.generate_token(Role::Admin)?;
        let pending = NewUser::new(ADMIN_USERNAME, Role::Admin, token);

        let user = self.store.insert(pending).await.map_err(|e| {
            let cause = match e {
                e @ StoreError::UniqueViolation(UniqueField::Username | UniqueField::AdminRole) => {
                    CreateFailure::AdminExists(e)
                }
                other => CreateFailure::Store(other),
            };
            UserServiceError::CreateFailed {
                role: Role::Admin,
                cause,
            }
        })?;

        tracing::info!(username = %user.username, id = %user.id, "created admin user");
        Ok(user)
    }

    /// Resolve the user owning a bearer token
    ///
    /// Any failure, including a store outage, is reported as `InvalidToken`.
    pub async fn authenticate_by_token(&self, token: &str) -> Result<User> {
        if token.is_empty() {
            return Err(UserServiceError::InvalidToken);
        }

        match self.store.find_by_token(&AccessToken::new(token)).await {
            Ok(user) => {
                tracing::debug!(username = %user.username, role = %user.role, "token authenticated");
                Ok(user)
            }
            Err(StoreError::NotFound { .. }) => {
                tracing::warn!("authentication with unknown token");
                Err(UserServiceError::InvalidToken)
            }
            Err(e) => {
                tracing::warn!(error = %e, "token lookup failed");
                Err(UserServiceError::InvalidToken)
            }
        }
    }

    /// Create a standard (non-admin) user
    pub async fn create_user(&self, username: &str) -> Result<User> {
        if username.trim().is_empty() {
            return Err(UserServiceError::InvalidArgument(
                "username must not be empty".to_string(),
            ));
        }

        let token = self.generate_token(Role::User)?;
        let pending = NewUser::new(username, Role::User, token);

        let user = self
            .store
            .insert(pending)
            .await
            .map_err(|e| UserServiceError::CreateFailed {
                role: Role::User,
                cause: e.into(),
            })?;

        tracing::info!(username = %user.username, id = %user.id, "created user");
        Ok(user)
    }

    /// Every stored user; an empty list is not an error
    pub async fn list_users(&self) -> Result<Vec<User>> {
        self.store
            .list_all()
            .await
            .map_err(UserServiceError::ListFailed)
    }

    pub async fn find_by_username(&self, username: &str) -> Result<User> {
        self.store
            .find_by_username(username)
            .await
            .map_err(|e| match e {
                StoreError::NotFound { .. } => UserServiceError::NotFound(username.to_string()),
                other => UserServiceError::LookupFailed(other),
            })
    }

    /// Delete a user by username
    ///
    /// The admin account is never deleted through this path. Role is immutable
    /// once stored, so the read and the delete need no shared transaction.
    pub async fn delete_user(&self, username: &str) -> Result<()> {
        let user = self
            .store
            .find_by_username(username)
            .await
            .map_err(|e| match e {
                StoreError::NotFound { .. } => UserServiceError::NotFound(username.to_string()),
                other => UserServiceError::DeleteFailed(other),
            })?;

        if user.role.is_admin() {
            tracing::warn!(username = %username, "refused to delete admin user");
            return Err(UserServiceError::PermissionDenied(
                "cannot delete an admin user".to_string(),
            ));
        }

        self.store
            .delete_by_username(username)
            .await
            .map_err(|e| match e {
                StoreError::NotFound { .. } => UserServiceError::NotFound(username.to_string()),
                other => UserServiceError::DeleteFailed(other),
            })?;

        tracing::info!(username = %username, "deleted user");
        Ok(())
    }

    fn generate_token(&self, role: Role) -> Result<AccessToken> {
        self.tokens.generate().map_err(|e| {
            tracing::error!(error = %e, "token generation failed");
            UserServiceError::CreateFailed {
                role,
                cause: e.into(),
            }
        })
    }
}
