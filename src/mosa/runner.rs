//! MOSA-EA generation loop.
//!
//! [`MosaEngine`] drives the cycle:
//! evaluate → front sort → check termination → (μ,λ) select → mutate → repeat.

use super::config::MosaConfig;
use super::error::{ConfigError, MosaError};
use super::individual::Individual;
use super::ladder::MutationLadder;
use super::population::Population;
use super::types::Objective;
use crate::random::create_rng;
use rand::rngs::StdRng;
use rand::Rng;
use std::time::{Duration, Instant};
use tracing::{debug, info};

/// Lifecycle of a [`MosaEngine`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngineState {
    /// Fresh population, no generation run yet.
    Init,
    /// At least one generation has run and the run has not ended.
    Running,
    /// The optimum was found, the budget ran out, or the objective failed.
    Terminated,
}

/// Why a run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TerminationReason {
    /// The objective reported its optimum.
    OptimumFound,
    /// The evaluation counter exceeded `max_evaluations`.
    BudgetExhausted,
}

/// Status record of one generation, taken right after front sorting.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GenerationStats {
    /// Generation number, starting at 1.
    pub generation: usize,

    /// Objective evaluations performed so far, including this generation.
    pub evaluations: usize,

    /// Best fitness the objective has seen so far.
    pub best_fitness: f64,

    /// Fitness of the first-ranked individual of this generation.
    pub leader_fitness: f64,

    /// Mutation strength of the first-ranked individual: its ladder rate × n.
    pub mutation_strength: f64,

    /// Number of fronts peeled by the sort.
    pub fronts: usize,
}

/// Result of a MOSA-EA run.
#[derive(Debug, Clone)]
pub struct MosaResult {
    /// Best individual ranked first in any generation of the run.
    ///
    /// `None` when the budget was already spent before the first generation.
    pub best: Option<Individual>,

    /// Best fitness reported by the objective.
    pub best_fitness: f64,

    /// Number of generations executed.
    pub generations: usize,

    /// Objective evaluations at termination.
    pub evaluations: usize,

    /// Why the run stopped.
    pub termination: TerminationReason,

    /// Wall-clock duration of the run.
    pub elapsed: Duration,

    /// One record per generation.
    pub history: Vec<GenerationStats>,
}

impl MosaResult {
    /// Whether the objective's optimum was reached.
    pub fn optimum_found(&self) -> bool {
        self.termination == TerminationReason::OptimumFound
    }

    /// Average wall-clock time per generation.
    pub fn time_per_generation(&self) -> Duration {
        let generations = u32::try_from(self.generations.max(1)).unwrap_or(u32::MAX);
        self.elapsed / generations
    }
}

/// Per-run summary produced by [`run_experiment`].
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RunSummary {
    /// Run number, starting at 1.
    pub run: usize,

    /// Best fitness reported by the objective.
    pub best_fitness: f64,

    /// Objective evaluations at termination.
    pub evaluations: usize,

    /// Number of generations executed.
    pub generations: usize,

    /// Whether the objective's optimum was reached.
    pub optimum_found: bool,

    /// Wall-clock duration of the run.
    pub elapsed: Duration,
}

/// The MOSA-EA engine.
///
/// Owns the mutation ladder, the population, and the random source.
/// The objective is borrowed per call, so the same engine can be run
/// repeatedly against a resettable objective.
///
/// # Usage
///
/// ```
/// use mosa_ea::mosa::{MosaConfig, MosaEngine};
/// use mosa_ea::problem::PboProblem;
///
/// let config = MosaConfig::new(16)
///     .with_population_size(40)
///     .with_parent_pool(5)
///     .with_growth_factor(1.2)
///     .with_max_evaluations(200_000)
///     .with_seed(42);
/// let mut engine = MosaEngine::new(config).unwrap();
/// let mut problem = PboProblem::one_max(16);
///
/// let result = engine.run(&mut problem).unwrap();
/// assert!(result.best_fitness <= 16.0);
/// ```
#[derive(Debug)]
pub struct MosaEngine<R = StdRng> {
    config: MosaConfig,
    ladder: MutationLadder,
    population: Population,
    rng: R,
    generation: usize,
    state: EngineState,
    termination: Option<TerminationReason>,
    best: Option<Individual>,
}

impl MosaEngine<StdRng> {
    /// Creates an engine seeded from `config.seed`, or from a random seed
    /// when none is set.
    pub fn new(config: MosaConfig) -> Result<Self, ConfigError> {
        let rng = create_rng(config.seed.unwrap_or_else(rand::random));
        Self::with_rng(config, rng)
    }
}

impl<R: Rng> MosaEngine<R> {
    /// Creates an engine drawing all randomness from `rng`.
    ///
    /// `config.seed` is ignored.
    pub fn with_rng(config: MosaConfig, mut rng: R) -> Result<Self, ConfigError> {
        config.validate()?;

        let ladder = MutationLadder::build(
            config.problem_size,
            config.min_rate_param,
            config.growth_factor,
        );
        let population = Population::new(
            config.problem_size,
            config.population_size,
            ladder.len(),
            &mut rng,
        );
        debug!(
            n = config.problem_size,
            lambda = config.population_size,
            mu = config.parent_pool,
            rates = ladder.len(),
            "MOSA-EA initialised"
        );

        Ok(Self {
            config,
            ladder,
            population,
            rng,
            generation: 0,
            state: EngineState::Init,
            termination: None,
            best: None,
        })
    }

    pub fn config(&self) -> &MosaConfig {
        &self.config
    }

    pub fn ladder(&self) -> &MutationLadder {
        &self.ladder
    }

    pub fn population(&self) -> &Population {
        &self.population
    }

    /// Generations run since the last reset.
    pub fn generation(&self) -> usize {
        self.generation
    }

    pub fn state(&self) -> EngineState {
        self.state
    }

    /// Why the engine terminated, if it terminated normally.
    pub fn termination(&self) -> Option<TerminationReason> {
        self.termination
    }

    /// Returns the engine to [`EngineState::Init`] with a fresh random
    /// population. The ladder is kept; the random stream continues.
    pub fn reset(&mut self) {
        self.population = Population::new(
            self.config.problem_size,
            self.config.population_size,
            self.ladder.len(),
            &mut self.rng,
        );
        self.generation = 0;
        self.state = EngineState::Init;
        self.termination = None;
        self.best = None;
        debug!(rates = self.ladder.len(), "MOSA-EA reset");
    }

    /// Runs one generation.
    ///
    /// Returns `Ok(None)` without touching the objective once the engine
    /// has terminated, including when the evaluation budget is found
    /// exceeded on entry. An objective error terminates the engine and is
    /// returned as [`MosaError::Objective`].
    pub fn step<O: Objective>(
        &mut self,
        objective: &mut O,
    ) -> Result<Option<GenerationStats>, MosaError> {
        if self.state == EngineState::Terminated {
            return Ok(None);
        }
        if objective.evaluations() > self.config.max_evaluations {
            self.finish(TerminationReason::BudgetExhausted);
            return Ok(None);
        }
        self.state = EngineState::Running;
        self.generation += 1;

        if let Err(e) = evaluate_population(objective, self.population.individuals_mut()) {
            self.state = EngineState::Terminated;
            return Err(MosaError::Objective(Box::new(e)));
        }

        let sorted = self.population.sort_fronts();
        let leader = self
            .population
            .leader()
            .expect("population must not be empty");
        if self.best.as_ref().map_or(true, |b| leader.fitness > b.fitness) {
            self.best = Some(leader.clone());
        }

        let stats = GenerationStats {
            generation: self.generation,
            evaluations: objective.evaluations(),
            best_fitness: objective.best_fitness(),
            leader_fitness: leader.fitness,
            mutation_strength: self.ladder.rate(leader.rate_index)
                * self.config.problem_size as f64,
            fronts: sorted.front_count(),
        };
        info!(
            generation = stats.generation,
            evaluations = stats.evaluations,
            best_fitness = stats.best_fitness,
            mutation_strength = stats.mutation_strength,
            "generation complete"
        );

        if objective.optimum_found() {
            self.finish(TerminationReason::OptimumFound);
            return Ok(Some(stats));
        }

        self.population.comma_select(self.config.parent_pool, &mut self.rng);
        self.population.mutate_population(
            self.config.increase_probability,
            &self.ladder,
            &mut self.rng,
        );

        Ok(Some(stats))
    }

    /// Runs generations until the optimum is found or the budget is spent.
    ///
    /// An engine that is not in [`EngineState::Init`] is reset first, so
    /// consecutive calls are independent runs.
    pub fn run<O: Objective>(&mut self, objective: &mut O) -> Result<MosaResult, MosaError> {
        if self.state != EngineState::Init {
            self.reset();
        }
        let start = Instant::now();

        let mut history = Vec::new();
        while let Some(stats) = self.step(objective)? {
            history.push(stats);
        }

        let result = MosaResult {
            best: self.best.clone(),
            best_fitness: objective.best_fitness(),
            generations: self.generation,
            evaluations: objective.evaluations(),
            termination: self
                .termination
                .unwrap_or(TerminationReason::BudgetExhausted),
            elapsed: start.elapsed(),
            history,
        };
        info!(
            generations = result.generations,
            evaluations = result.evaluations,
            best_fitness = result.best_fitness,
            elapsed_s = result.elapsed.as_secs_f64(),
            per_generation_s = result.time_per_generation().as_secs_f64(),
            "MOSA-EA finished"
        );
        Ok(result)
    }

    fn finish(&mut self, reason: TerminationReason) {
        self.state = EngineState::Terminated;
        self.termination = Some(reason);
    }
}

/// Runs `engine` `runs` times against `objective`, resetting the objective
/// after each run.
pub fn run_experiment<O: Objective, R: Rng>(
    engine: &mut MosaEngine<R>,
    objective: &mut O,
    runs: usize,
) -> Result<Vec<RunSummary>, MosaError> {
    let mut summaries = Vec::with_capacity(runs);
    for run in 1..=runs {
        let result = engine.run(objective)?;
        let summary = RunSummary {
            run,
            best_fitness: result.best_fitness,
            evaluations: result.evaluations,
            generations: result.generations,
            optimum_found: result.optimum_found(),
            elapsed: result.elapsed,
        };
        info!(
            run,
            best_fitness = summary.best_fitness,
            evaluations = summary.evaluations,
            "run complete"
        );
        summaries.push(summary);
        objective.reset();
    }
    Ok(summaries)
}

/// Scores every individual in order.
fn evaluate_population<O: Objective>(
    objective: &mut O,
    population: &mut [Individual],
) -> Result<(), O::Error> {
    for ind in population.iter_mut() {
        ind.fitness = objective.evaluate(&ind.bits)?;
    }
    Ok(())
}

// ============================================================================
// Tests
// ============================================================================
