//! Error types for cipher construction

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CipherError {
    #[error("Encryption key must be between {min} and {max} (both inclusive): {key}")]
    KeyOutOfBounds { key: u8, min: u8, max: u8 },
}

pub type Result<T> = std::result::Result<T, CipherError>;
