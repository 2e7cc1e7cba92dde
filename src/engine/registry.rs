// src/engine/registry.rs

use std::collections::HashMap;

use tracing::debug;

use crate::domain::SessionId;
use crate::engine::round::InitiativeState;
use crate::engine::RandomSource;
use crate::infra::config::DEFAULT_RESHUFFLE_THRESHOLD;

/// Фабрика RNG для новой сессии.
pub type RngFactory<R> = Box<dyn Fn(SessionId) -> R + Send + Sync>;

/// Реестр сессий:
/// - хранит независимое `InitiativeState` на каждый SessionId;
/// - создаёт состояние лениво, при первом обращении;
/// - ничего не удаляет: сессия живёт, пока живёт процесс.
pub struct SessionRegistry<R: RandomSource> {
    sessions: HashMap<SessionId, InitiativeState<R>>,
    make_rng: RngFactory<R>,
    reshuffle_threshold: usize,
}

impl<R: RandomSource> SessionRegistry<R> {
    /// Создать пустой реестр. `make_rng` вызывается один раз на сессию.
    pub fn new(make_rng: impl Fn(SessionId) -> R + Send + Sync + 'static) -> Self {
        Self::with_threshold(make_rng, DEFAULT_RESHUFFLE_THRESHOLD)
    }

    pub fn with_threshold(
        make_rng: impl Fn(SessionId) -> R + Send + Sync + 'static,
        reshuffle_threshold: usize,
    ) -> Self {
        Self {
            sessions: HashMap::new(),
            make_rng: Box::new(make_rng),
            reshuffle_threshold,
        }
    }

    /// Есть ли уже состояние для сессии.
    pub fn has_session(&self, session: SessionId) -> bool {
        self.sessions.contains_key(&session)
    }

    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }

    /// Получить состояние сессии (read-only), не создавая его.
    pub fn session(&self, session: SessionId) -> Option<&InitiativeState<R>> {
        self.sessions.get(&session)
    }

    /// Получить состояние сессии, создав его при первом обращении.
    pub fn session_mut(&mut self, session: SessionId) -> &mut InitiativeState<R> {
        let make_rng = &self.make_rng;
        let threshold = self.reshuffle_threshold;
        self.sessions.entry(session).or_insert_with(|| {
            debug!(session, "new initiative session");
            InitiativeState::with_threshold(make_rng(session), threshold)
        })
    }
}
