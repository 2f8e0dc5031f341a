use serde::{Deserialize, Serialize};
use validator::Validate;

/// Token length used when the request doesn't specify one
pub const DEFAULT_TOKEN_LENGTH: usize = 20;
pub const MAX_TOKEN_LENGTH: usize = 128;

/// DTO for POST /api/v1/generate
#[derive(Debug, Default, Deserialize, Validate)]
pub struct TokenRequest {
    /// Requested token length; absent or `null` means the default
    #[serde(default)]
    #[validate(range(
        min = 1,
        max = 128,
        message = "length must be between 1 and 128"
    ))]
    pub length: Option<i64>,
}

impl TokenRequest {
    /// Length to generate. Values outside the valid range fall back to the
    /// default; validation rejects them before this is reached.
    pub fn effective_length(&self) -> usize {
        self.length
            .and_then(|l| usize::try_from(l).ok())
            .filter(|&l| l <= MAX_TOKEN_LENGTH)
            .unwrap_or(DEFAULT_TOKEN_LENGTH)
    }
}

#[derive(Debug, Serialize)]
pub struct TokenResponse {
    pub token: String,
}
