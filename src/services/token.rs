use base64::{engine::general_purpose::STANDARD, Engine as _};
use rand::{rngs::OsRng, TryRngCore};

use crate::error::{AppError, AppResult};
use crate::models::token::MAX_TOKEN_LENGTH;

/// Random bytes drawn for every token, regardless of requested length
const MIN_RANDOM_BYTES: usize = 64;

#[derive(Debug, thiserror::Error)]
pub enum TokenError {
    #[error("failed to read from OS random source: {0}")]
    Entropy(String),

    #[error("encoded {available} characters, {requested} requested")]
    ShortEncoding { available: usize, requested: usize },
}

impl From<TokenError> for AppError {
    fn from(err: TokenError) -> Self {
        AppError::Internal(format!("Token generation failed: {}", err))
    }
}

pub struct TokenService;

impl TokenService {
    /// Generates a token of exactly `length` characters.
    ///
    /// The token is a prefix of the padded standard base64 encoding of fresh
    /// OS randomness. Callers validate `length` first.
    pub fn generate(length: usize) -> AppResult<String> {
        let token = generate_token(length)?;
        Ok(token)
    }
}

/// Number of random bytes whose base64 encoding covers `length` characters
pub fn random_byte_count(length: usize) -> usize {
    MIN_RANDOM_BYTES.max(length.div_ceil(4) * 3)
}

/// Generates a base64 token prefix of `length` characters from the OS CSPRNG
pub fn generate_token(length: usize) -> Result<String, TokenError> {
    debug_assert!(length <= MAX_TOKEN_LENGTH);

    let mut bytes = vec![0u8; random_byte_count(length)];
    OsRng
        .try_fill_bytes(&mut bytes)
        .map_err(|e| TokenError::Entropy(e.to_string()))?;

    let mut encoded = STANDARD.encode(&bytes);
    if encoded.len() < length {
        return Err(TokenError::ShortEncoding {
            available: encoded.len(),
            requested: length,
        });
    }

    // base64 output is ASCII, so byte and char boundaries agree
    encoded.truncate(length);
    Ok(encoded)
}
