/// Core traits for Warden
use crate::error::TokenError;
use crate::types::AccessToken;

/// Source of opaque bearer secrets
///
/// Implementers must draw from a cryptographically secure source; outputs
/// must not be predictable from earlier ones.
pub trait TokenGenerator: Send + Sync {
    /// Produce a fresh token
    ///
    /// # Errors
    /// Returns `TokenError::EntropyUnavailable` if the randomness source fails
    fn generate(&self) -> Result<AccessToken, TokenError>;
}
