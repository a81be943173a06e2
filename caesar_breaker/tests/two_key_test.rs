//! End-to-end key recovery for the alternating two-key cipher.

mod common;

use std::sync::Arc;

use caesar_breaker::{
    calc_threshold, Breaker, CaesarBreakerTwoKey, Decryption, Dictionary, KeyPair, Strategy,
};
use caesar_cipher::CaesarCipher;
use common::{dictionary, DICTIONARY_PATH, PROLOGUE};

fn encrypt(msg: &str, key1: u8, key2: u8) -> String {
    CaesarCipher::with_two_keys(key1, key2).unwrap().encrypt(msg)
}

#[test]
fn test_new_loads_dictionary() {
    let breaker = CaesarBreakerTwoKey::new(DICTIONARY_PATH).unwrap();
    assert!(!breaker.can_decrypt());
    assert_eq!(breaker.key(), None);
}

#[test]
fn test_decrypt_frequency_analysis() {
    let mut breaker = CaesarBreakerTwoKey::with_dictionary(dictionary());

    breaker.decrypt(&encrypt(PROLOGUE, 7, 17)).unwrap();
    assert_eq!(breaker.decrypted(), PROLOGUE);
    assert_eq!(breaker.key(), Some(KeyPair::new(7, 17)));

    breaker.decrypt(&encrypt(&"x1y ".repeat(51), 7, 17)).unwrap();
    assert_eq!(breaker.decrypted(), "");
    assert_eq!(breaker.key(), None);
}

#[test]
fn test_decrypt_brute_force() {
    let mut breaker = CaesarBreakerTwoKey::with_dictionary(dictionary());

    let msg = "I me my mine myself.";
    breaker.decrypt(&encrypt(msg, 17, 1)).unwrap();
    assert_eq!(breaker.decrypted(), msg);
    assert_eq!(breaker.key(), Some(KeyPair::new(17, 1)));

    breaker.decrypt(&encrypt("I me my mi1ne.", 17, 1)).unwrap();
    assert_eq!(breaker.decrypted(), "");
    assert_eq!(breaker.key(), None);
}

#[test]
fn test_brute_force_long_text() {
    let breaker = CaesarBreakerTwoKey::with_dictionary(dictionary());
    let secret = encrypt(PROLOGUE, 7, 17);
    let threshold = calc_threshold(&secret);

    let outcome = breaker.brute_force(&secret, threshold).unwrap();
    assert_eq!(outcome.key(), Some(KeyPair::new(7, 17)));
    assert_eq!(outcome.plaintext(), PROLOGUE);

    let frequency = breaker.frequency_analysis(&secret, threshold).unwrap();
    assert_eq!(outcome, frequency);
}

#[test]
fn test_forced_strategy() {
    let mut breaker = CaesarBreakerTwoKey::with_dictionary(dictionary());
    let secret = encrypt(PROLOGUE, 0, 25);

    let outcome = breaker
        .decrypt_with(&secret, Some(Strategy::BruteForce))
        .unwrap();
    assert_eq!(outcome.key(), Some(KeyPair::new(0, 25)));
    assert_eq!(outcome.plaintext(), PROLOGUE);
}

#[test]
fn test_decrypt_blank_secret() {
    let mut breaker = CaesarBreakerTwoKey::with_dictionary(dictionary());

    breaker.decrypt(&encrypt("  ", 7, 17)).unwrap();
    assert_eq!(breaker.decrypted(), "");
    assert_eq!(breaker.key(), None);
}

#[test]
fn test_decrypt_ambiguous_short_text() {
    // "I me my mine." with keys 7 and 17 also decrypts to the dictionary
    // words "H le mx lime." with keys 8 and 17, which brute force meets
    // first.
    let mut breaker = CaesarBreakerTwoKey::with_dictionary(dictionary());
    let msg = "I me my mine.";

    for _ in 0..3 {
        breaker.decrypt(&encrypt(msg, 7, 17)).unwrap();
        assert!(breaker.can_decrypt());
        assert_ne!(breaker.decrypted(), msg);
        assert_eq!(breaker.decrypted(), "H le mx lime.");
        assert_eq!(breaker.key(), Some(KeyPair::new(8, 17)));
    }
}

#[test]
fn test_recovered_keys_round_trip() {
    let mut breaker = CaesarBreakerTwoKey::with_dictionary(dictionary());

    for (key1, key2) in [(7, 17), (0, 0), (3, 20), (13, 13), (25, 1)] {
        let msg = "I me my mine myself.";
        let secret = encrypt(msg, key1, key2);
        breaker.decrypt(&secret).unwrap();

        let keys = breaker.key().unwrap();
        assert_eq!(breaker.decrypted(), msg, "keys {} {}", key1, key2);
        assert_eq!(encrypt(breaker.decrypted(), keys.even, keys.odd), secret);
    }
}

#[test]
fn test_brute_force_even_key_is_outer_loop() {
    // "aa" becomes "bz" with shifts (1, 25) and "cb" with shifts (2, 1).
    // Even shift 1 comes first, although odd shift 1 is lower than 25.
    let dictionary = Arc::new(Dictionary::from_words(["bz", "cb"]));
    let breaker = CaesarBreakerTwoKey::with_dictionary(dictionary);

    let outcome = breaker.brute_force("aa", 0).unwrap();
    assert_eq!(
        outcome,
        Decryption::Found {
            key: KeyPair::new(25, 1),
            plaintext: "bz".to_string()
        }
    );
}

#[test]
fn test_frequency_analysis_assumes_same_rank_for_both_halves() {
    // Even positions peak on 'e', odd positions on 't'. Both halves always
    // assume the same letter, so frequency analysis never pairs them up.
    let dictionary = Arc::new(Dictionary::from_words(["etetete"]));
    let mut breaker = CaesarBreakerTwoKey::with_dictionary(dictionary);
    let secret = encrypt(&"etetete ".repeat(60), 3, 5);

    assert_eq!(breaker.frequency_analysis(&secret, 1).unwrap().key(), None);
    assert_eq!(
        breaker.brute_force(&secret, 1).unwrap().key(),
        Some(KeyPair::new(3, 5))
    );

    assert_eq!(Strategy::select(&secret), Strategy::FrequencyAnalysis);
    assert_eq!(breaker.decrypt(&secret).unwrap(), &Decryption::NotFound);

    let outcome = breaker
        .decrypt_with(&secret, Some(Strategy::BruteForce))
        .unwrap();
    assert_eq!(outcome.key(), Some(KeyPair::new(3, 5)));
}
