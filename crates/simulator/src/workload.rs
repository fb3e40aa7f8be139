//! Random burst-list generation.

use crate::WorkloadConfig;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::info;

/// Generates burst lists from a seeded ChaCha RNG.
///
/// The same config always yields the same list.
pub struct BurstWorkload {
    config: WorkloadConfig,
}

impl BurstWorkload {
    /// Create a new workload generator.
    pub fn new(config: WorkloadConfig) -> Self {
        Self { config }
    }

    /// Generate one burst per process.
    pub fn generate(&self) -> Vec<i64> {
        let mut rng = ChaCha8Rng::seed_from_u64(self.config.seed);
        let bursts: Vec<i64> = (0..self.config.num_processes)
            .map(|_| i64::from(rng.gen_range(self.config.min_burst..=self.config.max_burst)))
            .collect();

        info!(
            num_processes = self.config.num_processes,
            seed = self.config.seed,
            total_burst = bursts.iter().sum::<i64>(),
            "Generated burst workload"
        );
        bursts
    }
}
