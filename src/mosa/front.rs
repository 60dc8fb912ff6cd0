//! Bi-objective front sorting over (fitness, mutation rate).
//!
//! MOSA-EA ranks individuals by two criteria at once: task fitness
//! (higher is better) and ladder index (higher is better). Keeping high
//! mutation rates alive next to high fitness is what lets the population
//! self-adapt out of local optima.
//!
//! # Algorithm
//!
//! 1. Order all individuals by fitness (descending), then rate index
//!    (descending). Equal-fitness runs form *fitness levels*.
//! 2. Each level acts as a max-structure keyed on rate index: a cursor
//!    into the shared index arena, so popping the top is `O(1)`.
//! 3. Peel fronts: scan levels from best to worst fitness with a
//!    threshold starting below every index. A level whose top exceeds
//!    the threshold gives up that individual, which raises the threshold.
//! 4. Repeat until every individual is placed.
//!
//! Within one front, fitness strictly decreases while rate index strictly
//! increases, so no member dominates another.
//!
//! # Complexity
//!
//! `O(λ log λ)` for the initial sort plus `O(L)` per front, where `L` is
//! the number of non-exhausted levels.
//!
//! # Reference
//!
//! Qin & Lehre (2022), "Self-adaptation via Multi-objectivisation: A Theoretical
//! Study", GECCO '22.

use super::individual::Individual;
use std::cmp::Ordering;
use std::ops::Range;

/// Result of front sorting.
///
/// `order[i]` is the input position of the individual ranked `i`-th.
/// `fronts[k]` is the range of `order` occupied by the `k`-th front.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrontSortResult {
    /// Permutation of input positions, best first.
    pub order: Vec<usize>,

    /// Consecutive ranges of `order`, one per peeled front.
    pub fronts: Vec<Range<usize>>,
}

impl FrontSortResult {
    /// Number of fronts.
    pub fn front_count(&self) -> usize {
        self.fronts.len()
    }

    /// Input positions belonging to front `k`, in placement order.
    pub fn front(&self, k: usize) -> &[usize] {
        &self.order[self.fronts[k].clone()]
    }
}

/// One fitness level: the unpopped part of its arena range.
#[derive(Debug, Clone, Copy)]
struct Level {
    next: usize,
    end: usize,
}

/// Orders `a` before `b` when `a` has the larger rate index.
///
/// This is the per-level heap ordering: the top of a level is always its
/// highest-rate remaining member.
pub fn rate_precedence(a: &Individual, b: &Individual) -> Ordering {
    b.rate_index.cmp(&a.rate_index)
}

/// Compares two fitness values, larger is better.
///
/// `-0.0` and `0.0` are equal. NaN ranks below every number and equal to
/// any other NaN, which keeps the comparison a total order.
pub fn fitness_cmp(a: f64, b: f64) -> Ordering {
    match (a.is_nan(), b.is_nan()) {
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Less,
        (false, true) => Ordering::Greater,
        // adding +0.0 turns -0.0 into 0.0
        (false, false) => (a + 0.0).total_cmp(&(b + 0.0)),
    }
}

/// Sorts individuals into (fitness, rate index) fronts.
///
/// Fitness values are compared with [`fitness_cmp`]: signed zeros share a
/// level, and NaN fitness forms the lowest level.
///
/// # Panics
/// Panics if a peeling pass places nobody, which would mean a level was
/// lost. This cannot happen for any input.
///
/// # Example
///
/// ```
/// use mosa_ea::mosa::{front_sort, Individual};
///
/// let ind = |fitness: f64, rate_index: usize| Individual { bits: vec![], rate_index, fitness };
/// let population = vec![ind(5.0, 0), ind(4.0, 2), ind(5.0, 1), ind(3.0, 1)];
///
/// let result = front_sort(&population);
///
/// // Front 0: (5, r1) then (4, r2); (3, r1) must wait for a later pass.
/// assert_eq!(result.front(0), &[2, 1]);
/// assert_eq!(result.front(1), &[0, 3]);
/// ```
pub fn front_sort(individuals: &[Individual]) -> FrontSortResult {
    let n = individuals.len();

    let mut arena: Vec<usize> = (0..n).collect();
    arena.sort_by(|&a, &b| {
        fitness_cmp(individuals[b].fitness, individuals[a].fitness)
            .then_with(|| rate_precedence(&individuals[a], &individuals[b]))
    });

    let mut levels = Vec::new();
    let mut start = 0;
    while start < n {
        let fitness = individuals[arena[start]].fitness;
        let mut end = start + 1;
        while end < n && fitness_cmp(individuals[arena[end]].fitness, fitness).is_eq() {
            end += 1;
        }
        levels.push(Level { next: start, end });
        start = end;
    }

    let mut order = Vec::with_capacity(n);
    let mut fronts = Vec::new();
    while order.len() < n {
        let front_start = order.len();
        // None stands below every rate index
        let mut threshold: Option<usize> = None;

        for level in levels.iter_mut() {
            let top = arena[level.next];
            let rate_index = individuals[top].rate_index;
            if threshold.map_or(true, |t| rate_index > t) {
                order.push(top);
                level.next += 1;
                threshold = Some(rate_index);
            }
        }

        assert!(
            order.len() > front_start,
            "front peeling placed no individual with {} remaining",
            n - front_start
        );
        fronts.push(front_start..order.len());
        levels.retain(|level| level.next < level.end);
    }

    FrontSortResult { order, fronts }
}

// ============================================================================
// Tests
// ============================================================================
