use std::fmt;
use std::str::FromStr;

use md5::Md5;
use sha1::Sha1;
use sha2::{Digest, Sha256};

use crate::error::{AppError, AppResult};
use crate::models::{ChecksumRequest, ChecksumResponse};

/// Message returned when `hash_type` names an algorithm we don't offer
pub const UNSUPPORTED_HASH_TYPE: &str = "hash_type must be one of: md5, sha1, sha256.";

/// Supported checksum algorithms
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HashType {
    Md5,
    Sha1,
    #[default]
    Sha256,
}

impl HashType {
    pub const ALL: [HashType; 3] = [HashType::Md5, HashType::Sha1, HashType::Sha256];

    pub fn as_str(&self) -> &'static str {
        match self {
            HashType::Md5 => "md5",
            HashType::Sha1 => "sha1",
            HashType::Sha256 => "sha256",
        }
    }

    /// Length of the hex digest produced by this algorithm
    pub fn hex_len(&self) -> usize {
        match self {
            HashType::Md5 => 32,
            HashType::Sha1 => 40,
            HashType::Sha256 => 64,
        }
    }

    /// Computes the lowercase hex digest of `data`
    pub fn digest_hex(&self, data: &[u8]) -> String {
        match self {
            HashType::Md5 => hex::encode(Md5::digest(data)),
            HashType::Sha1 => hex::encode(Sha1::digest(data)),
            HashType::Sha256 => hex::encode(Sha256::digest(data)),
        }
    }

    /// Resolves an optional, case-insensitive algorithm name.
    /// An empty name counts as absent.
    pub fn from_optional(name: Option<&str>) -> AppResult<Self> {
        match name {
            Some(name) if !name.is_empty() => name.parse(),
            _ => Ok(HashType::default()),
        }
    }
}

impl fmt::Display for HashType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for HashType {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "md5" => Ok(HashType::Md5),
            "sha1" => Ok(HashType::Sha1),
            "sha256" => Ok(HashType::Sha256),
            _ => Err(AppError::Validation(UNSUPPORTED_HASH_TYPE.to_string())),
        }
    }
}

/// Whitespace stripped from both ends of the text before hashing.
///
/// Unicode whitespace plus the ASCII information separators U+001C..=U+001F.
pub fn is_trimmed_char(c: char) -> bool {
    c.is_whitespace() || ('\u{1c}'..='\u{1f}').contains(&c)
}

/// Strips leading and trailing whitespace as defined by [`is_trimmed_char`]
pub fn trim_text(text: &str) -> &str {
    text.trim_matches(is_trimmed_char)
}

pub struct ChecksumService;

impl ChecksumService {
    /// Computes the checksum for an already schema-validated request.
    ///
    /// The text is trimmed only after its length was validated, so a
    /// whitespace-only text hashes as the empty string.
    pub fn compute(input: &ChecksumRequest) -> AppResult<ChecksumResponse> {
        let hash_type = HashType::from_optional(input.hash_type.as_deref())?;
        let text = trim_text(&input.text);

        let checksum = hash_type.digest_hex(text.as_bytes());
        if checksum.len() != hash_type.hex_len() {
            return Err(AppError::Internal(format!(
                "{} digest has length {}",
                hash_type,
                checksum.len()
            )));
        }

        Ok(ChecksumResponse {
            checksum,
            hash_type: hash_type.as_str(),
        })
    }
}
