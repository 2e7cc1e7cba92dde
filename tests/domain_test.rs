//! Интеграционные тесты для доменной модели (crate::domain).

use std::cmp::Ordering;

use initiative_engine::domain::*;
use proptest::prelude::*;

fn c(s: &str) -> Card {
    s.parse().expect("parse card")
}

/// Joker старше любой обычной карты, Джокеры равны между собой.
#[test]
fn joker_outranks_everything() {
    assert!(Card::Joker > c("A♠"));
    assert!(Card::Joker > c("2♣"));
    assert_eq!(Card::Joker.cmp(&Card::Joker), Ordering::Equal);
    assert_eq!(Card::Joker.rank(), None);
    assert_eq!(Card::Joker.suit(), None);
    assert_eq!(c("Q♦").suit(), Some(Suit::Diamonds));
}

/// Ранг важнее масти, масть решает при равном ранге.
#[test]
fn rank_then_suit_ordering() {
    assert!(c("3♣") > c("2♠"));
    assert!(c("10♦") > c("9♠"));
    assert!(c("K♣") < c("K♦"));
    assert!(c("K♦") < c("K♥"));
    assert!(c("K♥") < c("K♠"));
    assert!(c("A♣") > c("K♠"));
}

#[test]
fn low_ranks_are_two_to_five() {
    let low: Vec<Rank> = Rank::ALL.into_iter().filter(|r| r.is_low()).collect();
    assert_eq!(low, vec![Rank::Two, Rank::Three, Rank::Four, Rank::Five]);
    assert_eq!(Rank::Two.index(), 0);
    assert_eq!(Rank::Ace.index(), 12);
}

/// Card: Display + FromStr roundtrip.
#[test]
fn card_display_and_parse_roundtrip() {
    let cards = [
        Card::new(Rank::Ace, Suit::Hearts),
        Card::new(Rank::Ten, Suit::Spades),
        Card::new(Rank::Two, Suit::Clubs),
        Card::new(Rank::Nine, Suit::Diamonds),
        Card::Joker,
    ];

    for card in cards {
        let s = card.to_string();
        let parsed: Card = s.parse().expect("parse Card from Display string");
        assert_eq!(parsed, card);
    }

    assert_eq!(Card::new(Rank::Ten, Suit::Clubs).to_string(), "10♣");
    assert_eq!(c("Qh"), Card::new(Rank::Queen, Suit::Hearts));

    // Неверные строки
    assert!("".parse::<Card>().is_err());
    assert!("1♣".parse::<Card>().is_err());
    assert!("A?".parse::<Card>().is_err());
}

#[test]
fn format_card_emphasizes_joker() {
    assert_eq!(format_card(&Card::Joker), "**Joker**");
    assert_eq!(format_card(&c("J♥")), "J♥");
}

#[test]
fn format_cards_brackets_and_empty() {
    assert_eq!(format_cards(&[]), "");
    assert_eq!(format_cards(&[c("5♦")]), "[5♦]");
    assert_eq!(
        format_cards(&[c("A♠"), Card::Joker, c("3♦")]),
        "[A♠, **Joker**, 3♦]"
    );
}

#[test]
fn round_entry_keeps_what_it_was_given() {
    let traits = Traits {
        quick: true,
        ..Traits::default()
    };
    let entry = RoundEntry::new("Alice", c("8♦"), vec![c("3♣"), c("8♦")], traits);
    assert_eq!(entry.name, "Alice");
    assert_eq!(entry.active, c("8♦"));
    assert_eq!(entry.drawn.len(), 2);
    assert!(entry.traits.quick);
}

#[test]
fn trait_base_draw_counts() {
    let mut t = Traits::default();
    assert_eq!(t.base_draw_count(), 1);
    t.level_headed = true;
    assert_eq!(t.base_draw_count(), 2);
    t.improved_level_headed = true;
    assert_eq!(t.base_draw_count(), 3);
}

#[test]
fn parse_participant_trims_and_strips() {
    let (name, traits) = parse_participant(" Eve-l-h ");
    // Пробелы снаружи суффиксов мешают срезанию: токены приходят уже без них.
    assert_eq!(name, "Eve-l-h");
    assert!(traits.is_empty());

    let (name, traits) = parse_participant("Eve-l-h");
    assert_eq!(name, "Eve");
    assert!(traits.level_headed && traits.hesitant);
}

fn any_card() -> impl Strategy<Value = Card> {
    let deck = Deck::build_full().draw_pile().to_vec();
    proptest::sample::select(deck)
}

proptest! {
    /// Ровно одно из a<b, a==b, a>b; порядок согласован с обеих сторон.
    #[test]
    fn ranking_is_total_and_antisymmetric(a in any_card(), b in any_card()) {
        let ab = a.cmp(&b);
        let ba = b.cmp(&a);
        prop_assert_eq!(ab, ba.reverse());
        prop_assert_eq!(ab == Ordering::Equal, a == b);
        if a.is_joker() && !b.is_joker() {
            prop_assert_eq!(ab, Ordering::Greater);
        }
    }

    /// Порядок и повторы суффиксов не влияют на результат.
    #[test]
    fn trait_suffixes_are_order_independent(
        flags in proptest::collection::vec(proptest::sample::select(vec!["-q", "-l", "-i", "-h"]), 0..8)
    ) {
        let forward = format!("Name{}", flags.concat());
        let mut reversed = flags.clone();
        reversed.reverse();
        let backward = format!("Name{}", reversed.concat());

        let (n1, t1) = parse_participant(&forward);
        let (n2, t2) = parse_participant(&backward);
        prop_assert_eq!(&n1, "Name");
        prop_assert_eq!(n1, n2);
        prop_assert_eq!(t1, t2);
        prop_assert_eq!(t1.quick, flags.contains(&"-q"));
        prop_assert_eq!(t1.hesitant, flags.contains(&"-h"));
    }
}
