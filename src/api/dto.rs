use serde::{Deserialize, Serialize};

use crate::domain::card::Card;
use crate::engine::{
    DealReport, DropReport, HoldReport, InitiativeView, NewRoundReport, RedrawReport,
};

/// Ответ API на команду. Текст из него собирает `render`.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum CommandResponse {
    /// Бой начат, колода собрана заново.
    FightStarted { deck_size: usize },

    /// Карты розданы + актуальная таблица.
    Dealt {
        report: DealReport,
        view: InitiativeView,
    },

    /// Таблица инициативы.
    Initiative(InitiativeView),

    NewRound {
        report: NewRoundReport,
        view: InitiativeView,
    },

    Redrawn {
        report: RedrawReport,
        view: InitiativeView,
    },

    Dropped {
        report: DropReport,
        view: InitiativeView,
    },

    Held {
        report: HoldReport,
        view: InitiativeView,
    },

    /// Разовый добор из отдельной колоды.
    CardsDrawn { cards: Vec<Card> },
}
