use serde::{Deserialize, Serialize};

use crate::engine::EngineError;

/// Ошибки внешнего API (то, что уходит обратно в чат).
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum ApiError {
    /// Неизвестное имя команды.
    UnknownCommand(String),

    /// Обязательный аргумент пуст.
    MissingArgument { command: String },

    /// Аргумент не разобран или вне допустимого диапазона.
    BadArgument(String),

    /// Персонаж не найден в текущем раунде.
    ParticipantNotFound(String),

    /// Ошибка движка.
    EngineError(String),
}

impl From<EngineError> for ApiError {
    fn from(err: EngineError) -> Self {
        match err {
            EngineError::ParticipantNotFound(name) => ApiError::ParticipantNotFound(name),
            other => ApiError::EngineError(other.to_string()),
        }
    }
}
