//! Error types for MOSA-EA.

use thiserror::Error;

/// An invalid [`MosaConfig`](super::MosaConfig) parameter.
///
/// Each variant names the offending parameter so that bad input is
/// reported at construction, never mid-run.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("problem_size (n) must be at least 1")]
    ZeroProblemSize,

    #[error("population_size (lambda) must be at least 1")]
    ZeroPopulationSize,

    #[error("parent_pool (mu) = {mu} must be below population_size (lambda) = {lambda}")]
    ParentPoolTooLarge { mu: usize, lambda: usize },

    #[error("increase_probability (p_inc) = {0} must lie in [0, 1]")]
    IncreaseProbabilityOutOfRange(f64),

    #[error("growth_factor (A) = {0} must be greater than 1")]
    GrowthFactorTooSmall(f64),

    #[error("min_rate_param (c) = {0} must be positive")]
    NonPositiveMinRate(f64),

    #[error("min_rate_param (c) = {c} gives a first mutation rate c/n = {rate} above 0.5")]
    MinRateAboveHalf { c: f64, rate: f64 },

    #[error("max_evaluations must be at least 1")]
    ZeroEvaluationBudget,
}

/// Failure of a MOSA-EA run.
#[derive(Debug, Error)]
pub enum MosaError {
    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),

    /// The objective function failed; the run is aborted.
    #[error("objective evaluation failed: {0}")]
    Objective(#[source] Box<dyn std::error::Error + Send + Sync>),
}
