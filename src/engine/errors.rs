use thiserror::Error;

/// Ошибки движка инициативы.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EngineError {
    #[error("Персонаж {0} не найден")]
    ParticipantNotFound(String),

    #[error("Колода должна состоять ровно из 54 карт (передано {0})")]
    InvalidDeck(usize),

    #[error("Внутренняя ошибка: {0}")]
    Internal(&'static str),
}
