//! One-key Caesar breaker

use std::path::Path;
use std::sync::Arc;

use caesar_cipher::{complement, CaesarCipher, ALPHABET_LEN};

use crate::breaker::sealed::Store;
use crate::breaker::{calc_key, count, max_count, Breaker, Decryption, FREQ_LETTERS};
use crate::dictionary::Dictionary;
use crate::error::Result;

/// Recovers the key of a one-key Caesar cipher.
///
/// ```rust
/// use caesar_breaker::{Breaker, CaesarBreakerOneKey, Dictionary};
/// use caesar_cipher::CaesarCipher;
///
/// let dictionary = Dictionary::from_words(["attack", "at", "dawn"]);
/// let mut breaker = CaesarBreakerOneKey::with_dictionary(dictionary.into());
///
/// let secret = CaesarCipher::new(3)?.encrypt("Attack at dawn");
/// let outcome = breaker.decrypt(&secret)?;
/// assert_eq!(outcome.key(), Some(3));
/// assert_eq!(outcome.plaintext(), "Attack at dawn");
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Clone)]
pub struct CaesarBreakerOneKey {
    dictionary: Arc<Dictionary>,
    outcome: Decryption<u8>,
}

impl CaesarBreakerOneKey {
    /// Creates a breaker with the word list at `dictionary_path`.
    pub fn new(dictionary_path: impl AsRef<Path>) -> Result<Self> {
        Ok(Self::with_dictionary(Arc::new(Dictionary::from_path(
            dictionary_path,
        )?)))
    }

    /// Creates a breaker sharing an already loaded dictionary.
    pub fn with_dictionary(dictionary: Arc<Dictionary>) -> Self {
        Self {
            dictionary,
            outcome: Decryption::NotFound,
        }
    }
}

impl Store for CaesarBreakerOneKey {
    type Key = u8;

    fn set_outcome(&mut self, outcome: Decryption<u8>) {
        self.outcome = outcome;
    }
}

impl Breaker for CaesarBreakerOneKey {
    fn dictionary(&self) -> &Dictionary {
        &self.dictionary
    }

    fn outcome(&self) -> &Decryption<u8> {
        &self.outcome
    }

    fn brute_force(&self, secret: &str, threshold: usize) -> Result<Decryption<u8>> {
        for shift in 0..ALPHABET_LEN {
            let candidate = CaesarCipher::new(shift)?.encrypt(secret);
            if self.is_english(&candidate, threshold) {
                return Ok(Decryption::Found {
                    key: complement(shift),
                    plaintext: candidate,
                });
            }
        }
        Ok(Decryption::NotFound)
    }

    /// Assumes the most frequent secret letter stands for each of
    /// [`FREQ_LETTERS`] in turn.
    fn frequency_analysis(&self, secret: &str, threshold: usize) -> Result<Decryption<u8>> {
        let target = max_count(&count(secret));

        for letter in FREQ_LETTERS.bytes() {
            let shift = calc_key(target, (letter - b'a') as usize);
            let candidate = CaesarCipher::new(shift)?.encrypt(secret);
            if self.is_english(&candidate, threshold) {
                return Ok(Decryption::Found {
                    key: complement(shift),
                    plaintext: candidate,
                });
            }
        }
        Ok(Decryption::NotFound)
    }
}
