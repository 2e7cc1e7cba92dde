use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use crate::domain::SessionId;
use crate::engine::RandomSource;

/// Системный RNG (`thread_rng`) для боевого режима.
#[derive(Clone, Debug, Default)]
pub struct SystemRng;

impl RandomSource for SystemRng {
    fn shuffle<T>(&mut self, slice: &mut [T]) {
        slice.shuffle(&mut rand::thread_rng());
    }
}

/// Детерминированный RNG для тестов и реплея.
/// Позволяет воспроизводить одни и те же колоды при одинаковом seed.
#[derive(Clone, Debug)]
pub struct DeterministicRng {
    inner: StdRng,
}

impl DeterministicRng {
    pub fn from_seed(seed: u64) -> Self {
        Self {
            inner: StdRng::seed_from_u64(seed),
        }
    }

    /// Отдельный поток случайности для каждой сессии из общего seed.
    pub fn for_session(seed: u64, session: SessionId) -> Self {
        Self::from_seed(mix_seed(seed, session))
    }
}

impl RandomSource for DeterministicRng {
    fn shuffle<T>(&mut self, slice: &mut [T]) {
        slice.shuffle(&mut self.inner);
    }
}

/// RNG сессии: выбирается конфигом (есть seed → детерминированный).
#[derive(Clone, Debug)]
pub enum SessionRng {
    System(SystemRng),
    Deterministic(DeterministicRng),
}

impl SessionRng {
    pub fn new(seed: Option<u64>, session: SessionId) -> Self {
        match seed {
            Some(seed) => SessionRng::Deterministic(DeterministicRng::for_session(seed, session)),
            None => SessionRng::System(SystemRng),
        }
    }
}

impl RandomSource for SessionRng {
    fn shuffle<T>(&mut self, slice: &mut [T]) {
        match self {
            SessionRng::System(rng) => rng.shuffle(slice),
            SessionRng::Deterministic(rng) => rng.shuffle(slice),
        }
    }
}

// splitmix64: разные сессии с одним seed не должны получать одинаковые колоды.
fn mix_seed(seed: u64, session: SessionId) -> u64 {
    let mut z = seed ^ session.wrapping_mul(0x9E37_79B9_7F4A_7C15);
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    z ^ (z >> 31)
}
