//! Run configuration.

use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};

use super::Algorithm;
use crate::error::{Error, Result};
use crate::local_search::TwoOptConfig;
use crate::metaheuristics::{AnnealingConfig, AntColonyConfig};

/// Settings shared by one coordinated run of several algorithms.
///
/// Every field has a default, so partial JSON documents are accepted.
///
/// # Examples
///
/// ```
/// use geo_tsp::runner::RunConfig;
///
/// let config = RunConfig::from_json(r#"{
///     "seed": 42,
///     "ant_colony": { "num_ants": 20 }
/// }"#).unwrap();
/// assert_eq!(config.seed, Some(42));
/// assert_eq!(config.ant_colony.num_ants, 20);
/// assert_eq!(config.min_locations, 3);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RunConfig {
    /// Base seed; `None` draws every algorithm's generator from OS entropy.
    pub seed: Option<u64>,
    /// Run the selected algorithms concurrently on the rayon pool.
    pub parallel: bool,
    /// Smallest matrix the coordinator accepts.
    pub min_locations: usize,
    /// 2-opt settings.
    pub two_opt: TwoOptConfig,
    /// Simulated annealing settings.
    pub annealing: AnnealingConfig,
    /// Ant colony settings.
    pub ant_colony: AntColonyConfig,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            seed: None,
            parallel: false,
            min_locations: 3,
            two_opt: TwoOptConfig::default(),
            annealing: AnnealingConfig::default(),
            ant_colony: AntColonyConfig::default(),
        }
    }
}

impl RunConfig {
    /// Parses a JSON document.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Sets the base seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Enables or disables concurrent execution.
    #[must_use]
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Sets the minimum accepted number of locations.
    #[must_use]
    pub fn with_min_locations(mut self, min_locations: usize) -> Self {
        self.min_locations = min_locations;
        self
    }

    /// Replaces the 2-opt settings.
    #[must_use]
    pub fn with_two_opt(mut self, two_opt: TwoOptConfig) -> Self {
        self.two_opt = two_opt;
        self
    }

    /// Replaces the simulated annealing settings.
    #[must_use]
    pub fn with_annealing(mut self, annealing: AnnealingConfig) -> Self {
        self.annealing = annealing;
        self
    }

    /// Replaces the ant colony settings.
    #[must_use]
    pub fn with_ant_colony(mut self, ant_colony: AntColonyConfig) -> Self {
        self.ant_colony = ant_colony;
        self
    }

    /// Validates every algorithm's settings.
    pub fn validate(&self) -> Result<()> {
        if self.min_locations == 0 {
            return Err(Error::invalid_config("min_locations must be at least 1"));
        }
        self.two_opt.validate()?;
        self.annealing.validate()?;
        self.ant_colony.validate()
    }

    /// Random generator dedicated to one algorithm.
    ///
    /// With a base seed, each algorithm gets its own derived stream, so the
    /// results do not depend on which other algorithms run or in what order.
    pub fn rng_for(&self, algorithm: Algorithm) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed ^ algorithm.slot() as u64),
            None => StdRng::from_os_rng(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;

    #[test]
    fn test_defaults() {
        let config = RunConfig::default();
        assert_eq!(config.seed, None);
        assert!(!config.parallel);
        assert_eq!(config.min_locations, 3);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_from_json_empty_document() {
        let config = RunConfig::from_json("{}").expect("defaults");
        assert_eq!(config, RunConfig::default());
    }

    #[test]
    fn test_from_json_rejects_bad_values() {
        let err = RunConfig::from_json(r#"{"annealing": {"cooling_rate": 2.0}}"#)
            .expect_err("cooling rate above 1");
        assert!(matches!(err, Error::InvalidConfig(_)));
    }

    #[test]
    fn test_from_json_rejects_malformed() {
        let err = RunConfig::from_json(r#"{"seed": "abc"}"#).expect_err("seed must be a number");
        assert!(matches!(err, Error::Json(_)));
    }

    #[test]
    fn test_validate_min_locations() {
        assert!(RunConfig::default().with_min_locations(0).validate().is_err());
    }

    #[test]
    fn test_rng_for_is_seeded_per_algorithm() {
        let config = RunConfig::default().with_seed(42);
        let a: u64 = config.rng_for(Algorithm::TwoOpt).random();
        let b: u64 = config.rng_for(Algorithm::TwoOpt).random();
        let c: u64 = config.rng_for(Algorithm::AntColony).random();
        assert_eq!(a, b);
        assert_ne!(a, c);
    }
}
