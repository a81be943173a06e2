//! # Caesar Breaker Library
//!
//! Recovers the plaintext and key(s) of text encrypted with a one-key or an
//! alternating two-key Caesar cipher, without knowing the key.
//!
//! ## Strategies
//!
//! - **Brute force**: try every key (26) or key pair (676) in ascending order.
//! - **Frequency analysis**: assume the most frequent secret letter stands for
//!   `e`, then `t`, `a`, ... and derive the key from that.
//!
//! Secrets shorter than [`WORD_LIMIT`] words are brute forced, longer ones go
//! through frequency analysis. A candidate is accepted when its words are
//! found in a [`Dictionary`] often enough for the threshold derived from the
//! secret's length.
//!
//! ## Usage
//!
//! ```rust
//! use std::sync::Arc;
//!
//! use caesar_breaker::{Breaker, CaesarBreakerTwoKey, Dictionary, KeyPair};
//! use caesar_cipher::CaesarCipher;
//!
//! let dictionary = Arc::new(Dictionary::from_words(["meet", "me", "at", "noon"]));
//! let mut breaker = CaesarBreakerTwoKey::with_dictionary(dictionary);
//!
//! let secret = CaesarCipher::with_two_keys(5, 11)?.encrypt("meet me at noon");
//! breaker.decrypt(&secret)?;
//! assert!(breaker.can_decrypt());
//! assert_eq!(breaker.key(), Some(KeyPair::new(5, 11)));
//! assert_eq!(breaker.decrypted(), "meet me at noon");
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod breaker;
pub mod dictionary;
pub mod error;
pub mod one_key;
pub mod secret;
pub mod two_key;

pub use breaker::{
    calc_key, calc_threshold, count, max_count, Breaker, Decryption, Strategy, FREQ_LETTERS,
    SAFE_WORD_LEN, WORD_LIMIT,
};
pub use caesar_cipher::ALPHABET;
pub use dictionary::Dictionary;
pub use error::{BreakerError, Result};
pub use one_key::CaesarBreakerOneKey;
pub use secret::read_secret;
pub use two_key::{CaesarBreakerTwoKey, KeyPair};
