//! Capabilities shared by the one-key and two-key breakers
//!
//! Every breaker follows the same flow: resolve the secret, derive an
//! acceptance threshold from its word-length profile, pick a strategy from
//! its size, then try candidate keys until one decrypts to text the
//! [`Dictionary`] accepts as English.

use std::cmp::Reverse;
use std::fmt::Debug;

use caesar_cipher::ALPHABET_LEN;
use tracing::{debug, info};

use crate::dictionary::Dictionary;
use crate::error::Result;
use crate::secret::read_secret;

/// 26 lower case English letters ordered by descending usage frequency.
pub const FREQ_LETTERS: &str = "etaoinsrhdlucmfywgpbvkxqjz";

/// Secrets with fewer whitespace-separated tokens than this are brute forced.
pub const WORD_LIMIT: usize = 50;

/// Minimum length of a token that counts as a distinguishable word.
pub const SAFE_WORD_LEN: usize = 4;

/// Outcome of a decryption attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Decryption<K> {
    Found { key: K, plaintext: String },
    NotFound,
}

impl<K: Copy> Decryption<K> {
    /// The recovered encryption key, `None` when nothing was recovered.
    pub fn key(&self) -> Option<K> {
        match self {
            Decryption::Found { key, .. } => Some(*key),
            Decryption::NotFound => None,
        }
    }

    /// The recovered plaintext, empty when nothing was recovered.
    pub fn plaintext(&self) -> &str {
        match self {
            Decryption::Found { plaintext, .. } => plaintext,
            Decryption::NotFound => "",
        }
    }

    /// Whether a key was recovered.
    pub fn is_found(&self) -> bool {
        matches!(self, Decryption::Found { .. })
    }
}

/// Key recovery strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    /// Try every key (or key pair) in ascending order.
    BruteForce,
    /// Map the most frequent ciphertext letter onto common English letters.
    FrequencyAnalysis,
}

impl Strategy {
    /// Frequency analysis needs enough letters to be reliable; shorter
    /// secrets are cheap to brute force.
    pub fn select(secret: &str) -> Self {
        if secret.split_whitespace().count() < WORD_LIMIT {
            Strategy::BruteForce
        } else {
            Strategy::FrequencyAnalysis
        }
    }
}

/// Counts the occurrences of each ASCII letter, case-insensitively.
pub fn count(text: &str) -> [u32; 26] {
    let mut counter = [0u32; 26];
    for c in text.chars().filter(char::is_ascii_alphabetic) {
        counter[(c.to_ascii_lowercase() as u8 - b'a') as usize] += 1;
    }
    counter
}

/// Index of the most frequent letter. Ties go to the lowest index.
pub fn max_count(counter: &[u32]) -> usize {
    let mut max = 0;
    for (i, &n) in counter.iter().enumerate() {
        if n > counter[max] {
            max = i;
        }
    }
    max
}

/// Shift that turns the letter at `target` back into the letter at `assumed`.
///
/// ```rust
/// use caesar_breaker::breaker::calc_key;
///
/// assert_eq!(calc_key(15, 21), 6);
/// assert_eq!(calc_key(15, 6), 17);
/// assert_eq!(calc_key(15, 15), 0);
/// ```
pub fn calc_key(target: usize, assumed: usize) -> u8 {
    let len = ALPHABET_LEN as usize;
    let distance = (target % len + len - assumed % len) % len;
    ((len - distance) % len) as u8
}

/// Maximum number of unknown words tolerated in a candidate decryption of
/// `text`.
///
/// Texts with few distinguishable words get close to zero tolerance, longer
/// texts may miss more words (names, dictionary gaps) in absolute terms.
pub fn calc_threshold(text: &str) -> usize {
    let safe_words = text
        .split_whitespace()
        .filter(|w| w.chars().count() >= SAFE_WORD_LEN)
        .count();

    let percent = match safe_words {
        0..=5 => 90,
        6..=30 => 50,
        31..=80 => 40,
        81..=130 => 30,
        _ => 20,
    };
    safe_words * percent / 100
}

/// Trims leading and trailing non-letter characters.
fn sanitize(word: &str) -> &str {
    word.trim_matches(|c: char| !c.is_ascii_alphabetic())
}

pub(crate) mod sealed {
    use std::fmt::Debug;

    use super::Decryption;

    /// Outcome storage of a breaker. Only the breaker's own decrypt flow
    /// writes it; the trait is not reachable from outside the crate.
    pub trait Store {
        type Key: Copy + Debug;

        fn set_outcome(&mut self, outcome: Decryption<Self::Key>);
    }
}

/// Shared behaviour of the Caesar breakers.
///
/// Implemented by [`CaesarBreakerOneKey`](crate::CaesarBreakerOneKey) and
/// [`CaesarBreakerTwoKey`](crate::CaesarBreakerTwoKey). The stored outcome
/// can only change through [`Breaker::decrypt`]:
///
/// ```compile_fail
/// use caesar_breaker::{Breaker, CaesarBreakerOneKey, Decryption, Dictionary};
///
/// let mut breaker = CaesarBreakerOneKey::with_dictionary(Dictionary::default().into());
/// breaker.set_outcome(Decryption::Found { key: 1, plaintext: "a".to_string() });
/// ```
pub trait Breaker: sealed::Store {
    /// The dictionary candidates are checked against.
    fn dictionary(&self) -> &Dictionary;

    /// The latest decryption outcome.
    fn outcome(&self) -> &Decryption<Self::Key>;

    /// Tries every key in ascending order; the first accepted one wins.
    fn brute_force(&self, secret: &str, threshold: usize) -> Result<Decryption<Self::Key>>;

    /// Tries the keys implied by [`FREQ_LETTERS`], most common letter first.
    fn frequency_analysis(&self, secret: &str, threshold: usize)
        -> Result<Decryption<Self::Key>>;

    /// Decrypts `secret`, a file path or the secret text itself, choosing the
    /// strategy from its size.
    fn decrypt(&mut self, secret: &str) -> Result<&Decryption<Self::Key>> {
        self.decrypt_with(secret, None)
    }

    /// Like [`Breaker::decrypt`], with an optional forced strategy.
    ///
    /// A blank `secret` leaves the previous outcome untouched.
    fn decrypt_with(
        &mut self,
        secret: &str,
        strategy: Option<Strategy>,
    ) -> Result<&Decryption<Self::Key>> {
        if secret.trim().is_empty() {
            return Ok(self.outcome());
        }

        self.set_outcome(Decryption::NotFound);

        let secret = read_secret(secret);
        let threshold = calc_threshold(&secret);
        let strategy = strategy.unwrap_or_else(|| Strategy::select(&secret));
        debug!(?strategy, threshold, chars = secret.len(), "breaking secret");

        let outcome = match strategy {
            Strategy::BruteForce => self.brute_force(&secret, threshold)?,
            Strategy::FrequencyAnalysis => self.frequency_analysis(&secret, threshold)?,
        };

        match outcome.key() {
            Some(key) => info!(?key, ?strategy, "key recovered"),
            None => info!(?strategy, "no key produced English text"),
        }

        self.set_outcome(outcome);
        Ok(self.outcome())
    }

    /// Whether the latest call recovered a key and a non-blank plaintext.
    fn can_decrypt(&self) -> bool {
        self.outcome().is_found() && !self.outcome().plaintext().trim().is_empty()
    }

    fn key(&self) -> Option<Self::Key> {
        self.outcome().key()
    }

    fn decrypted(&self) -> &str {
        self.outcome().plaintext()
    }

    /// Checks whether `text` reads as English.
    ///
    /// Words are checked longest first since short ones (articles,
    /// prepositions) are hard to tell from gibberish. The text is rejected
    /// as soon as `threshold` words are unknown, so a threshold of 0 rejects
    /// on the first unknown word. A text without any known word is never
    /// English.
    ///
    /// Words are whitespace-separated tokens and never empty: leading or
    /// trailing whitespace is not a word, so it counts neither as a miss
    /// here nor toward [`WORD_LIMIT`]. A regex split on `\s+` would instead
    /// yield an empty leading token, which counts as a miss and rejects
    /// `" hello"` at threshold 1.
    fn is_english(&self, text: &str, threshold: usize) -> bool {
        let mut words: Vec<&str> = text.split_whitespace().collect();
        words.sort_by_key(|w| Reverse(w.chars().count()));

        let dictionary = self.dictionary();
        let mut matched = false;
        let mut misses = 0;

        for word in words {
            if dictionary.lookup(sanitize(word)) {
                matched = true;
            } else {
                misses += 1;
                if misses >= threshold {
                    return false;
                }
            }
        }
        matched
    }
}
