//! RNG tests for initiative-engine
//!
//! Эти тесты проверяют:
//! - детерминированность DeterministicRng
//! - различие seed → различие колод
//! - отдельные потоки случайности для сессий
//! - выбор SessionRng по конфигу
//! - работу Deck + shuffle + RandomSource

use initiative_engine::domain::{is_full_card_set, Deck};
use initiative_engine::engine::RandomSource;
use initiative_engine::infra::{DeterministicRng, SessionRng, SystemRng};

//
// TEST 1 — DeterministicRng reproducibility
//
#[test]
fn deterministic_rng_same_seed_same_shuffle() {
    let mut r1 = DeterministicRng::from_seed(123);
    let mut r2 = DeterministicRng::from_seed(123);

    let mut a: Vec<u32> = (0..54).collect();
    let mut b: Vec<u32> = (0..54).collect();

    r1.shuffle(&mut a);
    r2.shuffle(&mut b);

    assert_eq!(a, b, "Same seed must produce identical shuffle");
}

//
// TEST 2 — different seeds produce different shuffle
//
#[test]
fn deterministic_rng_different_seeds_different_shuffle() {
    let mut r1 = DeterministicRng::from_seed(111);
    let mut r2 = DeterministicRng::from_seed(222);

    let mut a: Vec<u32> = (0..54).collect();
    let mut b: Vec<u32> = (0..54).collect();

    r1.shuffle(&mut a);
    r2.shuffle(&mut b);

    assert_ne!(a, b, "Different seeds must produce different shuffle");
}

//
// TEST 3 — sessions with one base seed get different decks
//
#[test]
fn per_session_streams_differ() {
    let d1 = Deck::shuffled(&mut DeterministicRng::for_session(42, 1));
    let d2 = Deck::shuffled(&mut DeterministicRng::for_session(42, 2));
    let d1_again = Deck::shuffled(&mut DeterministicRng::for_session(42, 1));

    assert_ne!(d1, d2, "Different sessions must get different decks");
    assert_eq!(d1, d1_again, "Same session + seed must be reproducible");
}

//
// TEST 4 — shuffled deck is still the full deck
//
#[test]
fn deck_shuffle_keeps_composition() {
    let mut rng = DeterministicRng::from_seed(999);
    let deck = Deck::shuffled(&mut rng);

    assert_eq!(deck.remaining(), 54);
    assert!(is_full_card_set(deck.draw_pile()));
    assert_ne!(deck, Deck::build_full());
}

//
// TEST 5 — SessionRng: seed → deterministic, no seed → system
//
#[test]
fn session_rng_follows_config_seed() {
    assert!(matches!(SessionRng::new(None, 1), SessionRng::System(_)));
    assert!(matches!(
        SessionRng::new(Some(5), 1),
        SessionRng::Deterministic(_)
    ));

    let a = Deck::shuffled(&mut SessionRng::new(Some(5), 1));
    let b = Deck::shuffled(&mut DeterministicRng::for_session(5, 1));
    assert_eq!(a, b);
}

//
// TEST 6 — SystemRng keeps composition
//
#[test]
fn system_rng_shuffle_keeps_composition() {
    let mut rng = SystemRng;
    let deck = Deck::shuffled(&mut rng);
    assert!(is_full_card_set(deck.draw_pile()));
}

//
// TEST 7 — shuffle on empty / 1-element slice must not crash
//
#[test]
fn shuffle_tiny_slices_ok() {
    let mut rng = DeterministicRng::from_seed(42);

    let mut empty: Vec<u32> = vec![];
    rng.shuffle(&mut empty);
    assert!(empty.is_empty());

    let mut one = vec![123];
    rng.shuffle(&mut one);
    assert_eq!(one, vec![123]);
}
