//! Multi-Objective Self-Adaptive Evolutionary Algorithm (MOSA-EA).
//!
//! A (μ,λ) evolutionary algorithm on bitstrings in which every individual
//! carries its own mutation rate. Selection ranks the population on two
//! objectives at once: task fitness and mutation rate. Keeping fit *and*
//! highly mutating individuals in the parent pool lets the population
//! raise its own mutation rate on plateaus and local optima, then lower
//! it again once progress resumes.
//!
//! Users supply a problem by implementing [`Objective`]; ready-made
//! benchmark problems live in [`crate::problem`].
//!
//! # Key Types
//!
//! - [`MosaConfig`]: Algorithm parameters (n, λ, μ, p_inc, A, c, budget)
//! - [`MosaEngine`]: Owns the population and executes generations
//! - [`MosaResult`]: Final result with per-generation history
//! - [`MutationLadder`]: The discretized log-scale mutation rates
//! - [`front_sort`]: The (fitness, mutation rate) front-peeling sort
//!
//! # References
//!
//! - Qin & Lehre (2022), "Self-adaptation via Multi-objectivisation: A Theoretical
//!   Study", GECCO '22

mod config;
mod error;
mod front;
mod individual;
mod ladder;
mod population;
mod runner;
mod types;

pub use config::MosaConfig;
pub use error::{ConfigError, MosaError};
pub use front::{fitness_cmp, front_sort, rate_precedence, FrontSortResult};
pub use individual::Individual;
pub use ladder::MutationLadder;
pub use population::Population;
pub use runner::{
    run_experiment, EngineState, GenerationStats, MosaEngine, MosaResult, RunSummary,
    TerminationReason,
};
pub use types::Objective;
