//! Injectable random source.
//!
//! Gameplay randomness (the punch variant) draws from [`GameRng`] instead of
//! a global generator so sessions and tests can be replayed from a seed.

use bevy_ecs::prelude::Resource;
use fastrand::Rng;

#[derive(Resource, Debug, Clone)]
pub struct GameRng {
    pub rng: Rng,
}

impl GameRng {
    /// Seeded generator, or one seeded from entropy when `seed` is `None`.
    pub fn new(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => Rng::with_seed(seed),
            None => Rng::new(),
        };
        Self { rng }
    }

    pub fn with_seed(seed: u64) -> Self {
        Self::new(Some(seed))
    }
}

impl Default for GameRng {
    fn default() -> Self {
        Self::new(None)
    }
}
