//! Word-membership oracle bucketed by first letter and word length

use std::collections::{HashMap, HashSet};
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

use tracing::debug;

use crate::error::{BreakerError, Result};

/// Longest English word has 45 letters; longer words share one bucket.
pub const MAX_WORD_LEN: usize = 45;

/// Length bucket for words longer than [`MAX_WORD_LEN`].
const OVERFLOW_LEN: usize = 0;

/// First-letter bucket of a word.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
enum Initial {
    Letter(char),
    Other,
}

/// A set of lowercase words.
///
/// Words are grouped first by their initial (`a..=z` or a catch-all for
/// anything else) and then by length, so a lookup only ever compares against
/// words that already share both.
#[derive(Debug, Default, Clone)]
pub struct Dictionary {
    words: HashMap<Initial, HashMap<usize, HashSet<String>>>,
    len: usize,
}

impl Dictionary {
    /// Loads a line-oriented word list from `path`.
    ///
    /// # Errors
    ///
    /// [`BreakerError::DictionaryLoad`] if the file cannot be opened or read.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let load_error = |source| BreakerError::DictionaryLoad {
            path: path.to_path_buf(),
            source,
        };

        let file = File::open(path).map_err(load_error)?;
        let dictionary = Self::from_reader(BufReader::new(file)).map_err(load_error)?;
        debug!(path = %path.display(), words = dictionary.len(), "dictionary loaded");
        Ok(dictionary)
    }

    /// Builds a dictionary from a line-oriented reader.
    pub fn from_reader<R: BufRead>(reader: R) -> io::Result<Self> {
        let mut dictionary = Self::default();
        for line in reader.lines() {
            dictionary.insert(&line?);
        }
        Ok(dictionary)
    }

    /// Builds a dictionary from in-memory lines.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut dictionary = Self::default();
        for word in words {
            dictionary.insert(word.as_ref());
        }
        dictionary
    }

    /// Case-insensitive exact lookup. Blank input is never a member.
    pub fn lookup(&self, word: &str) -> bool {
        if word.trim().is_empty() {
            return false;
        }

        let word = word.to_lowercase();
        self.words
            .get(&initial(&word))
            .and_then(|by_len| by_len.get(&length_bucket(&word)))
            .is_some_and(|group| group.contains(&word))
    }

    /// Number of distinct words.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    fn insert(&mut self, line: &str) {
        if line.trim().is_empty() {
            return;
        }

        let word = line.to_lowercase().trim().to_string();
        let inserted = self
            .words
            .entry(initial(&word))
            .or_default()
            .entry(length_bucket(&word))
            .or_default()
            .insert(word);
        if inserted {
            self.len += 1;
        }
    }
}

fn initial(word: &str) -> Initial {
    match word.chars().next() {
        Some(c) if c.is_ascii_lowercase() => Initial::Letter(c),
        _ => Initial::Other,
    }
}

fn length_bucket(word: &str) -> usize {
    let len = word.chars().count();
    if len > MAX_WORD_LEN {
        OVERFLOW_LEN
    } else {
        len
    }
}
