//! # Caesar Cipher Library
//!
//! Shift-based substitution cipher in two flavours:
//!
//! - **One key**: every letter is rotated by the same key.
//! - **Two keys**: letters at even character positions are rotated by the
//!   first key, letters at odd positions by the second one. Positions count
//!   every character, not only letters.
//!
//! Case is preserved and anything that is not an ASCII letter passes
//! through unchanged.
//!
//! ## Usage
//!
//! ```rust
//! use caesar_cipher::CaesarCipher;
//!
//! let cipher = CaesarCipher::new(2)?;
//! assert_eq!(cipher.encrypt("xyz"), "zab");
//! assert_eq!(cipher.decrypt("zab"), "xyz");
//!
//! let cipher = CaesarCipher::with_two_keys(12, 6)?;
//! assert_eq!(cipher.encrypt("abc xyz"), "mho jel");
//! # Ok::<(), caesar_cipher::CipherError>(())
//! ```

pub mod error;

pub use error::{CipherError, Result};

/// 26 lower case English letters, the index space of every shift.
pub const ALPHABET: &str = "abcdefghijklmnopqrstuvwxyz";

/// Number of letters in [`ALPHABET`].
pub const ALPHABET_LEN: u8 = 26;

/// Smallest accepted key.
pub const MIN_KEY: u8 = 0;

/// Largest accepted key. A key of 26 is a full rotation and behaves like 0.
pub const MAX_KEY: u8 = 26;

/// Returns the key that undoes a shift by `key`.
///
/// ```rust
/// assert_eq!(caesar_cipher::complement(17), 9);
/// assert_eq!(caesar_cipher::complement(0), 0);
/// ```
pub fn complement(key: u8) -> u8 {
    (ALPHABET_LEN - key % ALPHABET_LEN) % ALPHABET_LEN
}

/// A keyed Caesar cipher.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CaesarCipher {
    even_key: u8,
    odd_key: Option<u8>,
}

impl CaesarCipher {
    /// Creates a one-key cipher.
    ///
    /// # Errors
    ///
    /// [`CipherError::KeyOutOfBounds`] if `key > 26`.
    pub fn new(key: u8) -> Result<Self> {
        check_key(key)?;
        Ok(Self {
            even_key: key,
            odd_key: None,
        })
    }

    /// Creates a two-key cipher. `key1` shifts even positions, `key2` odd ones.
    pub fn with_two_keys(key1: u8, key2: u8) -> Result<Self> {
        check_key(key1)?;
        check_key(key2)?;
        Ok(Self {
            even_key: key1,
            odd_key: Some(key2),
        })
    }

    /// Encrypts the message.
    pub fn encrypt(&self, msg: &str) -> String {
        msg.chars()
            .enumerate()
            .map(|(i, c)| {
                if c.is_ascii_alphabetic() {
                    let base = if c.is_ascii_uppercase() { b'A' } else { b'a' };
                    let key = self.key_at(i) % ALPHABET_LEN;
                    (((c as u8 - base + key) % ALPHABET_LEN) + base) as char
                } else {
                    c
                }
            })
            .collect()
    }

    /// Decrypts a secret produced by [`CaesarCipher::encrypt`] with the same keys.
    ///
    /// This is encryption with the complementary key(s).
    pub fn decrypt(&self, secret: &str) -> String {
        let inverse = Self {
            even_key: complement(self.even_key),
            odd_key: self.odd_key.map(complement),
        };
        inverse.encrypt(secret)
    }

    fn key_at(&self, position: usize) -> u8 {
        match self.odd_key {
            Some(odd) if position % 2 == 1 => odd,
            _ => self.even_key,
        }
    }
}

fn check_key(key: u8) -> Result<()> {
    if key > MAX_KEY {
        return Err(CipherError::KeyOutOfBounds {
            key,
            min: MIN_KEY,
            max: MAX_KEY,
        });
    }
    Ok(())
}
