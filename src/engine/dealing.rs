// src/engine/dealing.rs

use serde::{Deserialize, Serialize};

use crate::domain::card::{Card, Rank};
use crate::domain::deck::Deck;
use crate::domain::traits::Traits;
use crate::engine::{EngineError, RandomSource};

/// Результат раздачи одному участнику.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct DealOutcome {
    /// Карта, определяющая место в порядке хода.
    pub active: Card,
    /// Все вытянутые карты в порядке добора.
    pub drawn: Vec<Card>,
}

/// Раздача карт участнику с учётом черт.
///
/// Порядок правил фиксирован:
/// 1. базовый добор (1 / 2 / 3 карты), активная — первая вытянутая;
/// 2. медлительность: минимум 2 карты, Джокер побеждает, иначе худшая карта;
/// 3. стремительность (если активная не Джокер): пока последняя карта 5 или ниже,
///    тянем ещё и берём лучшую.
pub fn deal_cards<R: RandomSource>(
    deck: &mut Deck,
    rng: &mut R,
    traits: &Traits,
) -> Result<DealOutcome, EngineError> {
    let base = traits.base_draw_count();
    let mut drawn = Vec::with_capacity(base + 1);
    for _ in 0..base {
        drawn.push(deck.draw(rng)?);
    }

    let mut active = drawn[0];

    if traits.hesitant {
        active = apply_hesitant(deck, rng, &mut drawn)?;
    }

    if traits.quick && !active.is_joker() {
        active = apply_quick(deck, rng, &mut drawn, active)?;
    }

    Ok(DealOutcome { active, drawn })
}

/// Медлительность. Добирает до двух карт; при Джокере активным становится Джокер,
/// иначе — младшая из обычных карт.
fn apply_hesitant<R: RandomSource>(
    deck: &mut Deck,
    rng: &mut R,
    drawn: &mut Vec<Card>,
) -> Result<Card, EngineError> {
    if drawn.len() < 2 {
        drawn.push(deck.draw(rng)?);
    }

    if drawn.iter().any(Card::is_joker) {
        return Ok(Card::Joker);
    }

    drawn
        .iter()
        .copied()
        .min()
        .ok_or(EngineError::Internal("медлительность без карт"))
}

/// Стремительность. Пока проверяемая карта 2..5, тянем ещё одну; лучшая
/// становится активной. Джокер завершает добор.
fn apply_quick<R: RandomSource>(
    deck: &mut Deck,
    rng: &mut R,
    drawn: &mut Vec<Card>,
    mut active: Card,
) -> Result<Card, EngineError> {
    let mut current: Option<Rank> = active.rank();

    while current.is_some_and(Rank::is_low) {
        let extra = deck.draw(rng)?;
        drawn.push(extra);

        if extra > active {
            active = extra;
        }
        if extra.is_joker() {
            break;
        }
        current = extra.rank();
    }

    Ok(active)
}
