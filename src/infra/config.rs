//! Конфигурация движка (JSON).
//!
//! Все поля необязательные, отсутствующие берутся по умолчанию:
//! ```json
//! { "reshuffle_threshold": 10, "seed": 42, "max_draw_cards": 10 }
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Порог остатка колоды, ниже которого она тасуется при смене раунда.
pub const DEFAULT_RESHUFFLE_THRESHOLD: usize = 10;

/// Максимум карт для разовой команды `drawcard`.
pub const DEFAULT_MAX_DRAW_CARDS: usize = 10;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Не удалось прочитать конфиг {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Некорректный JSON конфига: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Некорректное значение {field}: {reason}")]
    Invalid {
        field: &'static str,
        reason: &'static str,
    },
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct EngineConfig {
    pub reshuffle_threshold: usize,
    /// Если задан — у каждой сессии детерминированный RNG (seed + id сессии).
    pub seed: Option<u64>,
    pub max_draw_cards: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            reshuffle_threshold: DEFAULT_RESHUFFLE_THRESHOLD,
            seed: None,
            max_draw_cards: DEFAULT_MAX_DRAW_CARDS,
        }
    }
}

impl EngineConfig {
    pub fn from_json_str(s: &str) -> Result<Self, ConfigError> {
        let cfg: EngineConfig = serde_json::from_str(s)?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json_str(&raw)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.reshuffle_threshold > crate::domain::FULL_DECK_SIZE {
            return Err(ConfigError::Invalid {
                field: "reshuffle_threshold",
                reason: "больше размера колоды",
            });
        }
        if self.max_draw_cards == 0 || self.max_draw_cards > crate::domain::FULL_DECK_SIZE {
            return Err(ConfigError::Invalid {
                field: "max_draw_cards",
                reason: "должно быть от 1 до 54",
            });
        }
        Ok(())
    }
}
