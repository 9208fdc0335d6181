//! Real-coded GA configuration.
//!
//! [`RealGaConfig`] holds the construction parameters of a
//! [`GenerationController`](super::GenerationController).

use crate::error::{RealGaError, Result};
use crate::random::create_rng;
use rand::rngs::StdRng;

/// Configuration for a real-coded generational-gap GA.
///
/// # Defaults
///
/// [`RealGaConfig::new`] follows the settings commonly used for UNDX+MGG and
/// REX+JGG on `n`-dimensional benchmarks: a population of `14n` and `5n`
/// offspring per generation, minimizing.
///
/// ```
/// use u_realcoded::ga::RealGaConfig;
///
/// let config = RealGaConfig::new(20);
/// assert_eq!(config.population_size, 280);
/// assert_eq!(config.no_of_kids, 100);
/// assert!(config.minimization);
/// ```
///
/// # Builder Pattern
///
/// ```
/// use u_realcoded::ga::RealGaConfig;
///
/// let config = RealGaConfig::new(2)
///     .with_population_size(6)
///     .with_no_of_kids(4)
///     .with_seed(42);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RealGaConfig {
    /// `true` to minimize the evaluation value, `false` to maximize it.
    pub minimization: bool,

    /// Dimension of the search space.
    pub dimension: usize,

    /// Number of individuals in the population. Constant for the whole run.
    ///
    /// Must be at least the crossover's parent count; this is checked when
    /// parents are selected.
    pub population_size: usize,

    /// Number of offspring generated per generation.
    pub no_of_kids: usize,

    /// Random seed used by [`rng`](Self::rng).
    ///
    /// `None` draws a fresh seed.
    pub seed: Option<u64>,
}

impl RealGaConfig {
    /// Creates a configuration for a `dimension`-space with recommended sizes.
    pub fn new(dimension: usize) -> Self {
        Self {
            minimization: true,
            dimension,
            population_size: 14 * dimension,
            no_of_kids: 5 * dimension,
            seed: None,
        }
    }

    pub fn with_minimization(mut self, minimization: bool) -> Self {
        self.minimization = minimization;
        self
    }

    pub fn with_population_size(mut self, n: usize) -> Self {
        self.population_size = n;
        self
    }

    pub fn with_no_of_kids(mut self, n: usize) -> Self {
        self.no_of_kids = n;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Builds the random source for this configuration.
    pub fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => create_rng(seed),
            None => create_rng(rand::random()),
        }
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<()> {
        if self.dimension == 0 {
            return Err(RealGaError::InvalidConfig(
                "dimension must be at least 1".into(),
            ));
        }
        if self.population_size == 0 {
            return Err(RealGaError::InvalidConfig(
                "population_size must be at least 1".into(),
            ));
        }
        if self.no_of_kids == 0 {
            return Err(RealGaError::InvalidConfig(
                "no_of_kids must be at least 1".into(),
            ));
        }
        Ok(())
    }
}
