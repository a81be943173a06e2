//! Two-key (alternating) Caesar breaker
//!
//! Characters at even positions were shifted by one key and characters at
//! odd positions by another, so the secret is split into its even and odd
//! halves, each half is decrypted as a one-key secret and the halves are
//! interleaved again before the English check.

use std::fmt;
use std::path::Path;
use std::sync::Arc;

use caesar_cipher::{complement, CaesarCipher, ALPHABET_LEN};

use crate::breaker::sealed::Store;
use crate::breaker::{calc_key, count, max_count, Breaker, Decryption, FREQ_LETTERS};
use crate::dictionary::Dictionary;
use crate::error::Result;

/// Encryption keys of the two-key cipher.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyPair {
    /// Key of even character positions.
    pub even: u8,
    /// Key of odd character positions.
    pub odd: u8,
}

impl KeyPair {
    pub fn new(even: u8, odd: u8) -> Self {
        Self { even, odd }
    }
}

impl fmt::Display for KeyPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.even, self.odd)
    }
}

/// Recovers both keys of an alternating two-key Caesar cipher.
#[derive(Debug, Clone)]
pub struct CaesarBreakerTwoKey {
    dictionary: Arc<Dictionary>,
    outcome: Decryption<KeyPair>,
}

impl CaesarBreakerTwoKey {
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

    fn found(even_shift: u8, odd_shift: u8, plaintext: String) -> Decryption<KeyPair> {
        Decryption::Found {
            key: KeyPair::new(complement(even_shift), complement(odd_shift)),
            plaintext,
        }
    }
}

impl Store for CaesarBreakerTwoKey {
    type Key = KeyPair;

    fn set_outcome(&mut self, outcome: Decryption<KeyPair>) {
        self.outcome = outcome;
    }
}

impl Breaker for CaesarBreakerTwoKey {
    fn dictionary(&self) -> &Dictionary {
        &self.dictionary
    }

    fn outcome(&self) -> &Decryption<KeyPair> {
        &self.outcome
    }

    /// Decrypts each half with all 26 keys, then checks all 676 pairs.
    /// The even key is the outer loop, so ties go to the lowest even key and
    /// then the lowest odd key.
    fn brute_force(&self, secret: &str, threshold: usize) -> Result<Decryption<KeyPair>> {
        let (even, odd) = split(secret);

        let mut even_candidates = Vec::with_capacity(ALPHABET_LEN as usize);
        let mut odd_candidates = Vec::with_capacity(ALPHABET_LEN as usize);
        for shift in 0..ALPHABET_LEN {
            let cipher = CaesarCipher::new(shift)?;
            even_candidates.push(cipher.encrypt(&even));
            odd_candidates.push(cipher.encrypt(&odd));
        }

        for (even_shift, even_text) in (0..ALPHABET_LEN).zip(&even_candidates) {
            for (odd_shift, odd_text) in (0..ALPHABET_LEN).zip(&odd_candidates) {
                let candidate = join(even_text, odd_text);
                if self.is_english(&candidate, threshold) {
                    return Ok(Self::found(even_shift, odd_shift, candidate));
                }
            }
        }
        Ok(Decryption::NotFound)
    }

    /// Both halves assume the same letter of [`FREQ_LETTERS`] at each step,
    /// so only 26 pairs are tried.
    fn frequency_analysis(&self, secret: &str, threshold: usize) -> Result<Decryption<KeyPair>> {
        let (even, odd) = split(secret);
        let even_target = max_count(&count(&even));
        let odd_target = max_count(&count(&odd));

        for letter in FREQ_LETTERS.bytes() {
            let assumed = (letter - b'a') as usize;

            let even_shift = calc_key(even_target, assumed);
            let even_text = CaesarCipher::new(even_shift)?.encrypt(&even);

            let odd_shift = calc_key(odd_target, assumed);
            let odd_text = CaesarCipher::new(odd_shift)?.encrypt(&odd);

            let candidate = join(&even_text, &odd_text);
            if self.is_english(&candidate, threshold) {
                return Ok(Self::found(even_shift, odd_shift, candidate));
            }
        }
        Ok(Decryption::NotFound)
    }
}

/// Splits text into the characters at even and at odd positions.
pub fn split(text: &str) -> (String, String) {
    let mut even = String::with_capacity(text.len() / 2 + 1);
    let mut odd = String::with_capacity(text.len() / 2);
    for (i, c) in text.chars().enumerate() {
        if i % 2 == 0 {
            even.push(c);
        } else {
            odd.push(c);
        }
    }
    (even, odd)
}

/// Interleaves two halves produced by [`split`].
///
/// `first` is the even half and never shorter than `second`.
pub fn join(first: &str, second: &str) -> String {
    let mut joined = String::with_capacity(first.len() + second.len());
    let mut second = second.chars();
    for c in first.chars() {
        joined.push(c);
        if let Some(o) = second.next() {
            joined.push(o);
        }
    }
    joined
}
