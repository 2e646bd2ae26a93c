//! Random input generation.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use sortbench_config::RunConfig;

/// Produces bounded random integer arrays.
///
/// Each generator owns its random source. Seeded generators replay the
/// same sequence of arrays; unseeded ones draw their seed from the thread
/// RNG.
///
/// # Example
///
/// ```
/// use sortbench_benchmark::RandomArrayGenerator;
///
/// let mut generator = RandomArrayGenerator::with_seed(7);
/// let values = generator.generate(100, 1, 10);
///
/// assert_eq!(values.len(), 100);
/// assert!(values.iter().all(|v| (1..10).contains(v)));
/// ```
#[derive(Debug, Clone)]
pub struct RandomArrayGenerator {
    rng: ChaCha8Rng,
}

impl RandomArrayGenerator {
    /// Creates a generator with a fresh random seed.
    pub fn new() -> Self {
        Self {
            rng: ChaCha8Rng::from_rng(&mut rand::rng()),
        }
    }

    /// Creates a reproducible generator.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Creates a generator honoring the configured seed, if any.
    pub fn from_config(config: &RunConfig) -> Self {
        match config.random_seed {
            Some(seed) => Self::with_seed(seed),
            None => Self::new(),
        }
    }

    /// Draws `size` values independently and uniformly from
    /// `[lower_bound, upper_bound)`.
    ///
    /// # Panics
    ///
    /// Panics if `lower_bound >= upper_bound`; callers validate bounds
    /// before generating.
    pub fn generate(&mut self, size: usize, lower_bound: i64, upper_bound: i64) -> Vec<i64> {
        (0..size)
            .map(|_| self.rng.random_range(lower_bound..upper_bound))
            .collect()
    }
}

impl Default for RandomArrayGenerator {
    fn default() -> Self {
        Self::new()
    }
}
