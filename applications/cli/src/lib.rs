//! Warden CLI Library
//!
//! Account lifecycle for the registry gateway: bootstrap of the single admin,
//! creation of standard users, bearer-token authentication and guarded
//! deletion.
//!
//! This library exposes the core components for testing purposes.

pub mod config;
pub mod error;
pub mod services;
pub mod state;
pub mod version;

// Re-export commonly used types for convenience
pub use config::WardenConfig;
pub use error::{AppError, Result};
pub use services::{
    token::OsTokenGenerator,
    users::{CreateFailure, ErrorKind, UserService, UserServiceError},
};
pub use state::AppState;
