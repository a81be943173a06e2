//! Error types for key recovery

use std::path::PathBuf;

use caesar_cipher::CipherError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum BreakerError {
    #[error("Failed to load dictionary {}: {source}", path.display())]
    DictionaryLoad {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Cipher error: {0}")]
    Cipher(#[from] CipherError),
}

pub type Result<T> = std::result::Result<T, BreakerError>;
