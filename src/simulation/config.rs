//! Configuration for Monte Carlo estimation.

/// Trials run when no count is configured.
pub const DEFAULT_TRIALS: usize = 100_000;

/// Settings for a Monte Carlo run.
#[derive(Clone, Debug, PartialEq)]
pub struct EstimateConfig {
    /// Number of walks to sample.
    pub trials: usize,
    /// Seed for reproducible runs; `None` draws from entropy.
    pub seed: Option<u64>,
    /// Fan trials out across the rayon thread pool.
    pub parallel: bool,
    /// Per-walk step bound; walks that hit it count as invalid.
    pub max_steps: Option<usize>,
}

impl Default for EstimateConfig {
    fn default() -> Self {
        Self {
            trials: DEFAULT_TRIALS,
            seed: None,
            parallel: false,
            max_steps: None,
        }
    }
}

impl EstimateConfig {
    pub fn builder() -> EstimateBuilder {
        EstimateBuilder::new()
    }
}

/// Builder for [`EstimateConfig`].
#[derive(Clone, Debug, Default)]
pub struct EstimateBuilder {
    config: EstimateConfig,
}

impl EstimateBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the number of trials
    pub fn trials(mut self, n: usize) -> Self {
        self.config.trials = n;
        self
    }

    /// Seed the random source
    pub fn seed(mut self, seed: u64) -> Self {
        self.config.seed = Some(seed);
        self
    }

    /// Run trials on the rayon thread pool
    pub fn parallel(mut self, parallel: bool) -> Self {
        self.config.parallel = parallel;
        self
    }

    /// Bound the length of each walk
    pub fn max_steps(mut self, steps: usize) -> Self {
        self.config.max_steps = Some(steps);
        self
    }

    pub fn build(self) -> EstimateConfig {
        self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_reference_run() {
        let config = EstimateConfig::default();
        assert_eq!(config.trials, 100_000);
        assert_eq!(config.seed, None);
        assert!(!config.parallel);
        assert_eq!(config.max_steps, None);
    }

    #[test]
    fn builder_sets_every_field() {
        let config = EstimateConfig::builder()
            .trials(500)
            .seed(7)
            .parallel(true)
            .max_steps(64)
            .build();

        assert_eq!(
            config,
            EstimateConfig {
                trials: 500,
                seed: Some(7),
                parallel: true,
                max_steps: Some(64),
            }
        );
    }
}
