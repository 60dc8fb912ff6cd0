//! Self-adaptive evolutionary optimization of pseudo-boolean functions.
//!
//! Provides MOSA-EA, a (μ,λ) evolutionary algorithm that evolves a
//! population of bitstrings together with a per-individual mutation rate:
//!
//! - **MOSA-EA** ([`mosa`]): the engine, its configuration, the mutation
//!   ladder, and the bi-objective front sort that ranks individuals by
//!   fitness and mutation rate.
//! - **Problems** ([`problem`]): a counting wrapper for fitness functions
//!   and the OneMax / LeadingOnes benchmarks.
//! - **Randomness** ([`random`]): seeded random sources for reproducible runs.
//!
//! # Architecture
//!
//! The objective function is an external collaborator behind the
//! [`mosa::Objective`] trait; it owns evaluation counting and optimum
//! detection. Everything stochastic draws from an explicit `Rng`, so a
//! seed fully determines a run. Progress is reported through `tracing`
//! events; the crate installs no subscriber.
//!
//! # Example
//!
//! ```
//! use mosa_ea::mosa::{MosaConfig, MosaEngine};
//! use mosa_ea::problem::PboProblem;
//!
//! let config = MosaConfig::new(10)
//!     .with_population_size(4)
//!     .with_parent_pool(1)
//!     .with_growth_factor(1.5)
//!     .with_max_evaluations(40)
//!     .with_seed(42);
//!
//! let mut engine = MosaEngine::new(config).unwrap();
//! let mut problem = PboProblem::one_max(10);
//! let result = engine.run(&mut problem).unwrap();
//!
//! assert!(result.evaluations <= 44);
//! ```

pub mod mosa;
pub mod problem;
pub mod random;
