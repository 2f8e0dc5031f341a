use serde::{Deserialize, Serialize};
use validator::Validate;

/// DTO for POST /api/v1/checksum
///
/// The length bound is checked on the raw text, before any trimming.
#[derive(Debug, Deserialize, Validate)]
pub struct ChecksumRequest {
    #[validate(length(
        min = 1,
        max = 1000,
        message = "text must be between 1 and 1000 characters"
    ))]
    pub text: String,
    #[serde(default)]
    pub hash_type: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ChecksumResponse {
    pub checksum: String,
    pub hash_type: &'static str,
}
