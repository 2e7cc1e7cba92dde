//! Трекер инициативы на игральных картах.
//!
//! Участникам раздаются карты из общей колоды, порядок хода определяется
//! старшей картой с учётом черт (стремительность, хладнокровие, медлительность).
//! Колода живёт между раундами через сброс и тасуется после Джокера
//! или когда в ней остаётся мало карт.
//!
//! Слои:
//! - `domain` — карты, колода, черты, записи раунда;
//! - `engine` — раздача, раунды, реестр сессий;
//! - `infra` — RNG и конфиг;
//! - `api` — команды чата и текст ответов.

pub mod api;
pub mod domain;
pub mod engine;
pub mod infra;

pub use api::{handle_command, Command, CommandResponse};
pub use domain::{Card, Deck, SessionId, Traits};
pub use engine::{InitiativeState, SessionRegistry};
pub use infra::{registry_from_config, EngineConfig};
