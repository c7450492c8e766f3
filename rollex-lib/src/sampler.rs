use crate::roll;
use rand::rngs::StdRng;
use rand::Rng;
use rand::SeedableRng;
use std::time::SystemTime;
use std::time::UNIX_EPOCH;
use tracing::debug;

/// Draw uniformly in `[min, max]` with the degenerate cases every source shares
pub(crate) fn uniform<R: Rng>(generator: &mut R, min: i64, max: i64) -> i64 {
    match min.cmp(&max) {
        std::cmp::Ordering::Greater => 0,
        std::cmp::Ordering::Equal => min,
        std::cmp::Ordering::Less => generator.gen_range(min..=max),
    }
}

/// Seedable dice source, the same seed always replays the same throws
#[derive(Debug, Clone)]
pub struct Sampler {
    seed: u64,
    generator: StdRng,
}

impl Sampler {
    pub fn new(seed: u64) -> Self {
        Sampler {
            seed,
            generator: StdRng::seed_from_u64(seed),
        }
    }

    /// New seeded from the wall clock
    pub fn from_clock() -> Self {
        let seed = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|elapsed| elapsed.as_nanos() as u64)
            .unwrap_or_default();
        debug!(seed, "sampler seeded from clock");
        Self::new(seed)
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Switch to another seed and restart its stream
    pub fn reseed(&mut self, seed: u64) {
        self.seed = seed;
        self.reset();
    }

    /// Restart the stream of the current seed
    pub fn reset(&mut self) {
        self.generator = StdRng::seed_from_u64(self.seed);
    }
}

impl Default for Sampler {
    fn default() -> Self {
        Self::from_clock()
    }
}

impl roll::Source for Sampler {
    fn range(&mut self, min: i64, max: i64) -> i64 {
        uniform(&mut self.generator, min, max)
    }
}
