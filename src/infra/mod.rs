//! Инфраструктурный слой вокруг движка инициативы:
//! - RNG-реализации для движка;
//! - конфигурация;
//! - сборка реестра сессий из конфига.

pub mod config;
pub mod rng;

pub use config::{ConfigError, EngineConfig};
pub use rng::*;

use crate::engine::SessionRegistry;

/// Реестр сессий по конфигу: с seed — детерминированные колоды, без — системный RNG.
pub fn registry_from_config(config: &EngineConfig) -> SessionRegistry<SessionRng> {
    let seed = config.seed;
    SessionRegistry::with_threshold(
        move |session| SessionRng::new(seed, session),
        config.reshuffle_threshold,
    )
}
