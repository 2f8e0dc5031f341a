pub mod checksum;
pub mod token;

pub use checksum::{ChecksumRequest, ChecksumResponse};
pub use token::{TokenRequest, TokenResponse};
