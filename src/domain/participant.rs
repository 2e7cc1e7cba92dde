use serde::{Deserialize, Serialize};

use crate::domain::card::Card;
use crate::domain::traits::Traits;

/// Запись участника в текущем раунде.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct RoundEntry {
    pub name: String,
    /// Карта, по которой участник стоит в порядке хода.
    pub active: Card,
    /// Все карты, вытянутые в этой раздаче (для показа).
    pub drawn: Vec<Card>,
    pub traits: Traits,
}

impl RoundEntry {
    pub fn new(name: impl Into<String>, active: Card, drawn: Vec<Card>, traits: Traits) -> Self {
        Self {
            name: name.into(),
            active,
            drawn,
            traits,
        }
    }
}
