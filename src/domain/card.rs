use core::cmp::Ordering;
use core::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Масть карты. Порядок объявления = порядок старшинства при равном ранге:
/// ♣ < ♦ < ♥ < ♠.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, Ord, PartialOrd)]
pub enum Suit {
    Clubs,    // ♣
    Diamonds, // ♦
    Hearts,   // ♥
    Spades,   // ♠
}

impl Suit {
    pub const ALL: [Suit; 4] = [Suit::Clubs, Suit::Diamonds, Suit::Hearts, Suit::Spades];
}

/// Ранг карты.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, Ord, PartialOrd)]
pub enum Rank {
    Two = 2,
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
    Nine,
    Ten,
    Jack,
    Queen,
    King,
    Ace,
}

impl Rank {
    pub const ALL: [Rank; 13] = [
        Rank::Two,
        Rank::Three,
        Rank::Four,
        Rank::Five,
        Rank::Six,
        Rank::Seven,
        Rank::Eight,
        Rank::Nine,
        Rank::Ten,
        Rank::Jack,
        Rank::Queen,
        Rank::King,
        Rank::Ace,
    ];

    /// Индекс ранга от нуля: 2 → 0, ..., A → 12.
    pub const fn index(self) -> u8 {
        self as u8 - 2
    }

    /// «Низкая» карта для черты «стремительность»: 2, 3, 4 или 5.
    pub const fn is_low(self) -> bool {
        self.index() <= 3
    }
}

/// Карта колоды инициативы: обычная карта или Джокер.
///
/// Джокер старше любой обычной карты, два Джокера равны между собой.
/// Среди обычных карт сначала сравнивается ранг, затем масть.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Card {
    Standard { rank: Rank, suit: Suit },
    Joker,
}

impl Card {
    pub const fn new(rank: Rank, suit: Suit) -> Self {
        Card::Standard { rank, suit }
    }

    pub const fn is_joker(&self) -> bool {
        matches!(self, Card::Joker)
    }

    /// Ранг обычной карты. У Джокера ранга нет.
    pub const fn rank(&self) -> Option<Rank> {
        match self {
            Card::Standard { rank, .. } => Some(*rank),
            Card::Joker => None,
        }
    }

    pub const fn suit(&self) -> Option<Suit> {
        match self {
            Card::Standard { suit, .. } => Some(*suit),
            Card::Joker => None,
        }
    }
}

impl Ord for Card {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Card::Joker, Card::Joker) => Ordering::Equal,
            (Card::Joker, _) => Ordering::Greater,
            (_, Card::Joker) => Ordering::Less,
            (
                Card::Standard { rank: r1, suit: s1 },
                Card::Standard { rank: r2, suit: s2 },
            ) => r1.cmp(r2).then(s1.cmp(s2)),
        }
    }
}

impl PartialOrd for Card {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let ch = match self {
            Suit::Clubs => '♣',
            Suit::Diamonds => '♦',
            Suit::Hearts => '♥',
            Suit::Spades => '♠',
        };
        write!(f, "{ch}")
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Rank::Two => "2",
            Rank::Three => "3",
            Rank::Four => "4",
            Rank::Five => "5",
            Rank::Six => "6",
            Rank::Seven => "7",
            Rank::Eight => "8",
            Rank::Nine => "9",
            Rank::Ten => "10",
            Rank::Jack => "J",
            Rank::Queen => "Q",
            Rank::King => "K",
            Rank::Ace => "A",
        };
        f.write_str(s)
    }
}

impl fmt::Display for Card {
    /// Формат вида `10♣`, `A♠`, `Joker`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Card::Standard { rank, suit } => write!(f, "{rank}{suit}"),
            Card::Joker => f.write_str("Joker"),
        }
    }
}

/// Парсинг строки вида "10♣", "Q♥", "Joker".
impl FromStr for Card {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("joker") {
            return Ok(Card::Joker);
        }

        let mut chars = s.chars();
        let suit_ch = chars.next_back().ok_or_else(|| "Empty card string".to_string())?;
        let rank_str = chars.as_str();

        let suit = match suit_ch {
            '♣' | 'c' | 'C' => Suit::Clubs,
            '♦' | 'd' | 'D' => Suit::Diamonds,
            '♥' | 'h' | 'H' => Suit::Hearts,
            '♠' | 's' | 'S' => Suit::Spades,
            _ => return Err(format!("Invalid suit: {suit_ch}")),
        };

        let rank = match rank_str {
            "2" => Rank::Two,
            "3" => Rank::Three,
            "4" => Rank::Four,
            "5" => Rank::Five,
            "6" => Rank::Six,
            "7" => Rank::Seven,
            "8" => Rank::Eight,
            "9" => Rank::Nine,
            "10" | "T" | "t" => Rank::Ten,
            "J" | "j" => Rank::Jack,
            "Q" | "q" => Rank::Queen,
            "K" | "k" => Rank::King,
            "A" | "a" => Rank::Ace,
            _ => return Err(format!("Invalid rank: {rank_str}")),
        };

        Ok(Card::new(rank, suit))
    }
}

/// Карта для сообщения в чат: Джокер выделяется жирным.
pub fn format_card(card: &Card) -> String {
    match card {
        Card::Joker => "**Joker**".to_string(),
        c => c.to_string(),
    }
}

/// Список карт в виде `[A♠, **Joker**, 3♦]`. Пустой список → пустая строка.
pub fn format_cards(cards: &[Card]) -> String {
    if cards.is_empty() {
        return String::new();
    }
    let parts: Vec<String> = cards.iter().map(format_card).collect();
    format!("[{}]", parts.join(", "))
}
