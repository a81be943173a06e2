//! Shared fixtures for the breaker integration tests.

#![allow(dead_code)]

use std::sync::Arc;

use caesar_breaker::Dictionary;

pub const DICTIONARY_PATH: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/tests/data/dictionary.txt");

/// An excerpt from Romeo and Juliet (59 words).
pub const PROLOGUE: &str = "Prince. Rebellious subjects, enemies to peace,
    Profaners of this neighbour-stained steel-
    Will they not hear? What, ho! you men, you beasts,
    That quench the fire of your pernicious rage
    With purple fountains issuing from your veins!
    On pain of torture, from those bloody hands
    Throw your mistempered weapons to the ground
    And hear the sentence of your moved prince.";

pub fn dictionary() -> Arc<Dictionary> {
    Arc::new(Dictionary::from_path(DICTIONARY_PATH).expect("fixture dictionary"))
}
