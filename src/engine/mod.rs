//! Движок инициативы: раздача карт с учётом черт, раунды, реестр сессий.
//!
//! Высокоуровневый объект: `InitiativeState`
//! Основные операции:
//!   - `start_fight` – новый бой, свежая колода
//!   - `deal` – раздать карты участникам
//!   - `advance_round` – следующий раунд (с переносом участников или без)

pub mod dealing;
pub mod errors;
pub mod registry;
pub mod round;

pub use dealing::{deal_cards, DealOutcome};
pub use errors::EngineError;
pub use registry::SessionRegistry;
pub use round::{
    DealReport, DropReport, HoldChange, HoldReport, InitiativeRow, InitiativeState, InitiativeView,
    NewRoundReport, RedrawReport,
};

/// RNG интерфейс для engine.
/// Реализации лежат в infra (обёртки над `rand`).
pub trait RandomSource {
    fn shuffle<T>(&mut self, slice: &mut [T]);
}
