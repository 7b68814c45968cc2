use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::domain::historical_pool::HistoricalPool;

/// Draws one historical value per call.
pub trait ThroughputSampler {
    fn draw(&mut self, pool: &HistoricalPool) -> u32;
}

/// Picks a pool position with probability `1 / pool.len()`, so a value that
/// appears twice in the history is twice as likely to be drawn.
pub struct UniformSampler<R: Rng> {
    rng: R,
}

impl<R: Rng> UniformSampler<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl UniformSampler<StdRng> {
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }

    pub fn from_entropy() -> Self {
        Self::new(StdRng::from_entropy())
    }

    pub fn with_optional_seed(seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => Self::seeded(seed),
            None => Self::from_entropy(),
        }
    }
}

impl<R: Rng> ThroughputSampler for UniformSampler<R> {
    fn draw(&mut self, pool: &HistoricalPool) -> u32 {
        // HistoricalPool is never empty, so the range is never empty either.
        let index = self.rng.gen_range(0..pool.len());
        pool.values()[index]
    }
}
