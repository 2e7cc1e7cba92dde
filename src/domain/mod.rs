//! Доменная модель инициативы: карты, колода, черты участников, записи раунда.

pub mod card;
pub mod deck;
pub mod participant;
pub mod traits;

// Идентификатор сессии (гильдии / группы чата). 0 — личные сообщения.
pub type SessionId = u64;

// Удобные реэкспорты, чтобы в других модулях писать crate::domain::Card и т.п.
pub use card::*;
pub use deck::*;
pub use participant::*;
pub use traits::*;
