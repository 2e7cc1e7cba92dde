//! Тесты колоды: состав, добор, сброс, перетасовка, флаг Джокера.

use std::collections::HashSet;

use initiative_engine::domain::{is_full_card_set, Card, Deck, FULL_DECK_SIZE};
use initiative_engine::engine::{EngineError, RandomSource};
use initiative_engine::infra::DeterministicRng;
use proptest::prelude::*;

/// RNG, который ничего не перемешивает: порядок колоды полностью предсказуем.
struct NoShuffle;

impl RandomSource for NoShuffle {
    fn shuffle<T>(&mut self, _slice: &mut [T]) {}
}

fn assert_conserved(deck: &Deck) {
    assert_eq!(deck.remaining() + deck.discarded(), FULL_DECK_SIZE);
    let mut all = deck.draw_pile().to_vec();
    all.extend_from_slice(deck.discard_pile());
    assert!(is_full_card_set(&all), "draw ∪ discard must be the full deck");
}

#[test]
fn full_deck_has_52_unique_plus_two_jokers() {
    let deck = Deck::build_full();
    assert_eq!(deck.remaining(), 54);
    assert_eq!(deck.discarded(), 0);
    assert!(!deck.joker_drawn());

    let jokers = deck.draw_pile().iter().filter(|c| c.is_joker()).count();
    assert_eq!(jokers, 2);

    let standard: HashSet<_> = deck.draw_pile().iter().filter(|c| !c.is_joker()).collect();
    assert_eq!(standard.len(), 52);
}

#[test]
fn draw_moves_top_card_to_discard() {
    let mut deck = Deck::build_full();
    let top = *deck.draw_pile().last().expect("non-empty");

    let card = deck.draw(&mut NoShuffle).expect("draw");
    assert_eq!(card, top);
    assert_eq!(deck.remaining(), 53);
    assert_eq!(deck.discard_pile(), &[card]);
    assert_conserved(&deck);
}

#[test]
fn drawing_joker_sets_round_flag() {
    // В неперетасованной колоде Джокеры лежат сверху.
    let mut deck = Deck::build_full();
    let card = deck.draw(&mut NoShuffle).expect("draw");
    assert!(card.is_joker());
    assert!(deck.joker_drawn());

    // Перетасовка флаг не трогает, сбрасывает его раунд.
    deck.reshuffle(&mut NoShuffle);
    assert!(deck.joker_drawn());
    deck.reset_joker_flag();
    assert!(!deck.joker_drawn());
}

#[test]
fn reshuffle_returns_discard_to_draw_pile() {
    let mut rng = DeterministicRng::from_seed(7);
    let mut deck = Deck::shuffled(&mut rng);
    for _ in 0..20 {
        deck.draw(&mut rng).expect("draw");
    }
    assert_eq!(deck.remaining(), 34);

    deck.reshuffle(&mut rng);
    assert_eq!(deck.remaining(), 54);
    assert_eq!(deck.discarded(), 0);
    assert_conserved(&deck);
}

#[test]
fn ensure_available_reshuffles_only_when_short() {
    let mut deck = Deck::build_full();
    for _ in 0..50 {
        deck.draw(&mut NoShuffle).expect("draw");
    }
    deck.ensure_available(4, &mut NoShuffle);
    assert_eq!(deck.remaining(), 4, "exactly enough cards: no reshuffle");

    deck.ensure_available(5, &mut NoShuffle);
    assert_eq!(deck.remaining(), 54);
}

#[test]
fn draw_never_fails_across_many_cycles() {
    let mut rng = DeterministicRng::from_seed(99);
    let mut deck = Deck::shuffled(&mut rng);
    for _ in 0..(FULL_DECK_SIZE * 5 + 3) {
        deck.draw(&mut rng).expect("draw from conserved deck");
        assert_conserved(&deck);
    }
}

#[test]
fn from_draw_pile_validates_composition() {
    let mut cards = Deck::build_full().draw_pile().to_vec();
    cards.reverse();
    let deck = Deck::from_draw_pile(cards.clone()).expect("permutation is fine");
    assert_eq!(deck.draw_pile(), cards.as_slice());

    let short: Vec<Card> = cards[1..].to_vec();
    assert_eq!(
        Deck::from_draw_pile(short),
        Err(EngineError::InvalidDeck(53))
    );

    // Третий Джокер вместо туза: размер верный, состав нет.
    let mut wrong = cards.clone();
    let ace = wrong.iter().position(|c| !c.is_joker()).expect("standard card");
    wrong[ace] = Card::Joker;
    assert!(Deck::from_draw_pile(wrong).is_err());
}

proptest! {
    /// Ни одна последовательность draw/reshuffle не теряет и не дублирует карты.
    #[test]
    fn conservation_under_any_draw_reshuffle_sequence(
        seed in any::<u64>(),
        ops in proptest::collection::vec(any::<bool>(), 0..300),
    ) {
        let mut rng = DeterministicRng::from_seed(seed);
        let mut deck = Deck::shuffled(&mut rng);

        for draw in ops {
            if draw {
                deck.draw(&mut rng).expect("draw");
            } else {
                deck.reshuffle(&mut rng);
            }
            prop_assert_eq!(deck.remaining() + deck.discarded(), FULL_DECK_SIZE);
        }

        let mut all = deck.draw_pile().to_vec();
        all.extend_from_slice(deck.discard_pile());
        prop_assert!(is_full_card_set(&all));
    }
}
