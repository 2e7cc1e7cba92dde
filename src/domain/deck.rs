use serde::{Deserialize, Serialize};

use crate::domain::card::{Card, Rank, Suit};
use crate::engine::{EngineError, RandomSource};

/// Сколько Джокеров в колоде инициативы.
pub const JOKERS_IN_DECK: usize = 2;

/// Полный размер колоды: 52 обычные карты + 2 Джокера.
pub const FULL_DECK_SIZE: usize = 52 + JOKERS_IN_DECK;

/// Колода инициативы: добор + сброс.
///
/// Инвариант: `draw_pile ∪ discard_pile` всегда ровно полная колода из 54 карт.
/// Поля приватные, менять колоду можно только через методы ниже,
/// поэтому карты не теряются и не дублируются.
///
/// Верх колоды — конец `draw_pile`.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Deck {
    draw_pile: Vec<Card>,
    discard_pile: Vec<Card>,
    /// Выходил ли Джокер в текущем раунде. Сбрасывает раунд, не перетасовка.
    joker_drawn: bool,
}

impl Deck {
    /// Полная неперетасованная колода в порядке:
    /// Clubs 2..A, Diamonds 2..A, Hearts 2..A, Spades 2..A, Joker, Joker.
    /// Перемешивает вызывающий код.
    pub fn build_full() -> Self {
        Deck {
            draw_pile: full_card_set(),
            discard_pile: Vec::new(),
            joker_drawn: false,
        }
    }

    /// Перетасованная полная колода.
    pub fn shuffled<R: RandomSource>(rng: &mut R) -> Self {
        let mut deck = Self::build_full();
        rng.shuffle(&mut deck.draw_pile);
        deck
    }

    /// Колода с заданным порядком добора (верх — последний элемент).
    ///
    /// Карты должны быть ровно полной колодой, иначе `InvalidDeck`.
    /// Удобно для «заряженных» колод в тестах и реплеях.
    pub fn from_draw_pile(cards: Vec<Card>) -> Result<Self, EngineError> {
        if !is_full_card_set(&cards) {
            return Err(EngineError::InvalidDeck(cards.len()));
        }
        Ok(Deck {
            draw_pile: cards,
            discard_pile: Vec::new(),
            joker_drawn: false,
        })
    }

    /// Сколько карт осталось в доборе.
    pub fn remaining(&self) -> usize {
        self.draw_pile.len()
    }

    /// Сколько карт в сбросе.
    pub fn discarded(&self) -> usize {
        self.discard_pile.len()
    }

    pub fn draw_pile(&self) -> &[Card] {
        &self.draw_pile
    }

    pub fn discard_pile(&self) -> &[Card] {
        &self.discard_pile
    }

    pub fn joker_drawn(&self) -> bool {
        self.joker_drawn
    }

    pub fn reset_joker_flag(&mut self) {
        self.joker_drawn = false;
    }

    /// Если в доборе меньше `needed` карт — перетасовать.
    pub fn ensure_available<R: RandomSource>(&mut self, needed: usize, rng: &mut R) {
        if self.draw_pile.len() < needed {
            self.reshuffle(rng);
        }
    }

    /// Сброс возвращается в добор, всё перемешивается, сброс пустеет.
    pub fn reshuffle<R: RandomSource>(&mut self, rng: &mut R) {
        self.draw_pile.append(&mut self.discard_pile);
        rng.shuffle(&mut self.draw_pile);
        tracing::debug!(remaining = self.draw_pile.len(), "deck reshuffled");
    }

    /// Взять верхнюю карту. Карта уходит в сброс, Джокер поднимает флаг раунда.
    ///
    /// При пустом доборе колода перетасовывается, поэтому для полной колоды
    /// ошибка невозможна.
    pub fn draw<R: RandomSource>(&mut self, rng: &mut R) -> Result<Card, EngineError> {
        self.ensure_available(1, rng);

        let card = self
            .draw_pile
            .pop()
            .ok_or(EngineError::Internal("колода пуста после перетасовки"))?;

        self.discard_pile.push(card);
        if card.is_joker() {
            self.joker_drawn = true;
        }
        Ok(card)
    }
}

fn full_card_set() -> Vec<Card> {
    let mut cards = Vec::with_capacity(FULL_DECK_SIZE);
    for suit in Suit::ALL {
        for rank in Rank::ALL {
            cards.push(Card::new(rank, suit));
        }
    }
    cards.extend([Card::Joker; JOKERS_IN_DECK]);
    cards
}

/// Совпадает ли мультимножество карт с полной колодой.
pub fn is_full_card_set(cards: &[Card]) -> bool {
    if cards.len() != FULL_DECK_SIZE {
        return false;
    }
    let mut sorted = cards.to_vec();
    sorted.sort_unstable();
    let mut expected = full_card_set();
    expected.sort_unstable();
    sorted == expected
}
