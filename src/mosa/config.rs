//! MOSA-EA configuration.
//!
//! [`MosaConfig`] holds all parameters that control the evolutionary loop.

use super::error::ConfigError;

/// Configuration for MOSA-EA.
///
/// Controls the problem size, the (μ,λ) population scheme, the
/// self-adaptation of mutation rates, and the evaluation budget.
///
/// # Defaults
///
/// ```
/// use mosa_ea::mosa::MosaConfig;
///
/// let config = MosaConfig::default();
/// assert_eq!(config.population_size, 5000);
/// assert_eq!(config.parent_pool, 625);
/// ```
///
/// # Builder Pattern
///
/// ```
/// use mosa_ea::mosa::MosaConfig;
///
/// let config = MosaConfig::new(50)
///     .with_population_size(200)
///     .with_parent_pool(25)
///     .with_growth_factor(1.05)
///     .with_max_evaluations(100_000)
///     .with_seed(42);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MosaConfig {
    /// Bitstring length `n`.
    pub problem_size: usize,

    /// Number of offspring per generation (λ), which is also the
    /// population size.
    pub population_size: usize,

    /// Parent pool bound μ for (μ,λ) selection.
    ///
    /// Offspring are drawn from front-sorted positions `0..=μ`.
    /// Must be below `population_size`.
    pub parent_pool: usize,

    /// Probability `p_inc` that an offspring moves one step up the
    /// mutation ladder; otherwise it moves one step down.
    pub increase_probability: f64,

    /// Ladder growth factor `A` (> 1). Consecutive mutation rates differ
    /// by this factor.
    pub growth_factor: f64,

    /// Minimum-rate parameter `c` (> 0). The lowest mutation rate is `c / n`.
    pub min_rate_param: f64,

    /// Evaluation budget. The run stops at the first generation boundary
    /// where the objective has been called more often than this.
    pub max_evaluations: usize,

    /// Random seed for reproducibility.
    ///
    /// `None` uses a random seed.
    pub seed: Option<u64>,
}

impl Default for MosaConfig {
    fn default() -> Self {
        Self {
            problem_size: 100,
            population_size: 5000,
            parent_pool: 625,
            increase_probability: 0.4,
            growth_factor: 1.01,
            min_rate_param: 0.1,
            max_evaluations: 100_000_000,
            seed: None,
        }
    }
}

impl MosaConfig {
    /// Default configuration for bitstrings of length `n`.
    pub fn new(n: usize) -> Self {
        Self {
            problem_size: n,
            ..Self::default()
        }
    }

    /// Configuration scaled to the problem size.
    ///
    /// Uses `c = 0.5 / ln(n)` for the minimum-rate parameter (kept at the
    /// default for `n < 3`, where the logarithm is too small) and
    /// `μ = λ / 8`.
    pub fn for_problem_size(n: usize) -> Self {
        let mut config = Self::new(n);
        if n >= 3 {
            config.min_rate_param = 0.5 / (n as f64).ln();
        }
        config.parent_pool = config.population_size / 8;
        config
    }

    /// Sets the bitstring length.
    pub fn with_problem_size(mut self, n: usize) -> Self {
        self.problem_size = n;
        self
    }

    /// Sets the population size λ.
    pub fn with_population_size(mut self, lambda: usize) -> Self {
        self.population_size = lambda;
        self
    }

    /// Sets the parent pool bound μ.
    pub fn with_parent_pool(mut self, mu: usize) -> Self {
        self.parent_pool = mu;
        self
    }

    /// Sets the probability of stepping up the mutation ladder.
    pub fn with_increase_probability(mut self, p_inc: f64) -> Self {
        self.increase_probability = p_inc;
        self
    }

    /// Sets the ladder growth factor `A`.
    pub fn with_growth_factor(mut self, a: f64) -> Self {
        self.growth_factor = a;
        self
    }

    /// Sets the minimum-rate parameter `c`.
    pub fn with_min_rate_param(mut self, c: f64) -> Self {
        self.min_rate_param = c;
        self
    }

    /// Sets the evaluation budget.
    pub fn with_max_evaluations(mut self, max: usize) -> Self {
        self.max_evaluations = max;
        self
    }

    /// Sets the random seed for reproducibility.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration.
    ///
    /// Returns the first offending parameter. NaN values are rejected
    /// along with out-of-range ones.
    #[allow(clippy::neg_cmp_op_on_partial_ord)] // negated comparisons also reject NaN
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.problem_size == 0 {
            return Err(ConfigError::ZeroProblemSize);
        }
        if self.population_size == 0 {
            return Err(ConfigError::ZeroPopulationSize);
        }
        if self.parent_pool >= self.population_size {
            return Err(ConfigError::ParentPoolTooLarge {
                mu: self.parent_pool,
                lambda: self.population_size,
            });
        }
        if !(0.0..=1.0).contains(&self.increase_probability) {
            return Err(ConfigError::IncreaseProbabilityOutOfRange(
                self.increase_probability,
            ));
        }
        if !(self.growth_factor > 1.0) {
            return Err(ConfigError::GrowthFactorTooSmall(self.growth_factor));
        }
        if !(self.min_rate_param > 0.0) {
            return Err(ConfigError::NonPositiveMinRate(self.min_rate_param));
        }
        let first_rate = self.min_rate_param / self.problem_size as f64;
        if first_rate > 0.5 {
            return Err(ConfigError::MinRateAboveHalf {
                c: self.min_rate_param,
                rate: first_rate,
            });
        }
        if self.max_evaluations == 0 {
            return Err(ConfigError::ZeroEvaluationBudget);
        }
        Ok(())
    }
}
