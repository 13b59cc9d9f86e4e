//! Warden Core
//!
//! Domain types and collaborator contracts for the Warden identity service.
//!
//! This crate holds no I/O of its own. Persistence backends implement
//! [`UserStore`] and secret sources implement [`TokenGenerator`]; the account
//! service composes the two.
//!
//! # Architecture
//!
//! The core crate defines:
//! - **Domain Types**: `User`, `NewUser`, `UserId`, `Role`, `AccessToken`
//! - **Core Traits**: `UserStore`, `TokenGenerator`
//! - **Error Handling**: `StoreError` and `TokenError` kinds raised by collaborators
//!
//! # Example
//!
//! ```rust
//! use warden_core::types::{AccessToken, NewUser, Role};
//!
//! let pending = NewUser::new("alice", Role::User, AccessToken::new("s3cret"));
//! assert_eq!(pending.username, "alice");
//! assert!(!pending.role.is_admin());
//! ```

#![forbid(unsafe_code)]

pub mod error;
pub mod storage;
pub mod traits;
pub mod types;

pub use error::{StoreError, TokenError, UniqueField};
pub use storage::UserStore;
pub use traits::TokenGenerator;
pub use types::{AccessToken, NewUser, Role, User, UserId, ADMIN_USERNAME};
