pub mod checksum;
pub mod token;

pub use checksum::{ChecksumService, HashType};
pub use token::TokenService;
