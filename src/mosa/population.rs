//! Fixed-size population with double buffering.
//!
//! Three equally sized buffers are allocated once and recycled every
//! generation: the current generation, an offspring buffer written by
//! selection, and a sorted buffer written by front sorting. Phases swap
//! buffers instead of reallocating, and copies reuse each slot's bit
//! vector through [`Clone::clone_from`].

use super::front::{front_sort, FrontSortResult};
use super::individual::Individual;
use super::ladder::MutationLadder;
use rand::Rng;

/// The MOSA-EA population.
#[derive(Debug, Clone)]
pub struct Population {
    problem_size: usize,
    individuals: Vec<Individual>,
    offspring: Vec<Individual>,
    sorted: Vec<Individual>,
}

impl Population {
    /// Creates `size` random individuals of length `n` with rate indices
    /// drawn from `0..ladder_len`.
    pub fn new<R: Rng>(n: usize, size: usize, ladder_len: usize, rng: &mut R) -> Self {
        let individuals: Vec<Individual> = (0..size)
            .map(|_| Individual::random(n, ladder_len, rng))
            .collect();
        let offspring = individuals.clone();
        let sorted = individuals.clone();
        Self {
            problem_size: n,
            individuals,
            offspring,
            sorted,
        }
    }

    /// Bitstring length `n`.
    pub fn problem_size(&self) -> usize {
        self.problem_size
    }

    /// Number of individuals (λ).
    pub fn len(&self) -> usize {
        self.individuals.len()
    }

    /// Whether the population holds no individuals.
    pub fn is_empty(&self) -> bool {
        self.individuals.is_empty()
    }

    /// The current generation.
    pub fn individuals(&self) -> &[Individual] {
        &self.individuals
    }

    /// Mutable access to the current generation, e.g. for fitness assignment.
    pub fn individuals_mut(&mut self) -> &mut [Individual] {
        &mut self.individuals
    }

    /// The first individual of the current order; after
    /// [`sort_fronts`](Self::sort_fronts) this is the fittest.
    pub fn leader(&self) -> Option<&Individual> {
        self.individuals.first()
    }

    /// Reorders the current generation into (fitness, rate) fronts.
    ///
    /// Individuals are copied into the sorted buffer in front order, which
    /// then becomes the current generation.
    pub fn sort_fronts(&mut self) -> FrontSortResult {
        let result = front_sort(&self.individuals);
        for (slot, &src) in self.sorted.iter_mut().zip(result.order.iter()) {
            slot.clone_from(&self.individuals[src]);
        }
        std::mem::swap(&mut self.individuals, &mut self.sorted);
        result
    }

    /// (μ,λ) selection: every offspring slot copies an individual drawn
    /// uniformly, with replacement, from current positions `0..=mu`.
    ///
    /// # Panics
    /// Panics if `mu >= len()`.
    pub fn comma_select<R: Rng>(&mut self, mu: usize, rng: &mut R) {
        assert!(
            mu < self.individuals.len(),
            "parent pool {mu} exceeds population of {}",
            self.individuals.len()
        );
        for slot in self.offspring.iter_mut() {
            let parent = rng.random_range(0..=mu);
            slot.clone_from(&self.individuals[parent]);
        }
    }

    /// Mutates every offspring, then makes the offspring the current
    /// generation.
    ///
    /// Each offspring first steps its rate index, then flips bits at the
    /// ladder rate of its new index.
    pub fn mutate_population<R: Rng>(&mut self, p_inc: f64, ladder: &MutationLadder, rng: &mut R) {
        for child in self.offspring.iter_mut() {
            child.mutate_rate_index(p_inc, ladder.len(), rng);
            child.mutate_bits(ladder.rate(child.rate_index), rng);
        }
        std::mem::swap(&mut self.individuals, &mut self.offspring);
    }
}
