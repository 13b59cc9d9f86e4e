/// Access token generation backed by the operating system RNG
use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine as _};
use rand::{rngs::OsRng, RngCore};
use warden_core::{types::AccessToken, TokenError, TokenGenerator};

/// Random bytes per token (256 bits)
pub const TOKEN_BYTES: usize = 32;

/// Length of the encoded token: unpadded base64 of `TOKEN_BYTES`
pub const TOKEN_LENGTH: usize = 43;

#[derive(Debug, Clone, Copy, Default)]
pub struct OsTokenGenerator;

impl OsTokenGenerator {
    pub fn new() -> Self {
        Self
    }
}

impl TokenGenerator for OsTokenGenerator {
    fn generate(&self) -> Result<AccessToken, TokenError> {
        let mut bytes = [0u8; TOKEN_BYTES];
        OsRng
            .try_fill_bytes(&mut bytes)
            .map_err(|e| TokenError::EntropyUnavailable(e.to_string()))?;

        Ok(AccessToken::new(URL_SAFE_NO_PAD.encode(bytes)))
    }
}
