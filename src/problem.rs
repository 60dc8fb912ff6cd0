//! Pseudo-boolean benchmark problems.
//!
//! [`PboProblem`] wraps a plain fitness function over bitstrings and adds
//! the bookkeeping that [`Objective`] requires: an evaluation counter, the
//! best value seen so far, and optimum detection against a known optimal
//! value.
//!
//! # Built-in functions
//!
//! - [`one_max`]: number of one-bits
//! - [`leading_ones`]: length of the all-ones prefix
//!
//! Both are maximized with optimum `n`.

use crate::mosa::Objective;
use std::convert::Infallible;

/// Number of one-bits.
pub fn one_max(bits: &[bool]) -> f64 {
    bits.iter().filter(|&&b| b).count() as f64
}

/// Number of consecutive one-bits from the start of the string.
pub fn leading_ones(bits: &[bool]) -> f64 {
    bits.iter().take_while(|&&b| b).count() as f64
}

/// A counting objective over a fixed fitness function.
///
/// # Example
///
/// ```
/// use mosa_ea::mosa::Objective;
/// use mosa_ea::problem::PboProblem;
///
/// let mut problem = PboProblem::one_max(4);
/// assert_eq!(problem.evaluate(&[true, false, true, true]).unwrap(), 3.0);
/// assert_eq!(problem.evaluations(), 1);
/// assert!(!problem.optimum_found());
///
/// problem.evaluate(&[true; 4]).unwrap();
/// assert!(problem.optimum_found());
///
/// problem.reset();
/// assert_eq!(problem.evaluations(), 0);
/// ```
#[derive(Debug, Clone)]
pub struct PboProblem<F> {
    dimension: usize,
    optimum: f64,
    function: F,
    evaluations: usize,
    best: f64,
}

impl<F> PboProblem<F>
where
    F: Fn(&[bool]) -> f64,
{
    /// Wraps `function` over bitstrings of length `dimension`; the run is
    /// solved once a value of at least `optimum` is seen.
    pub fn new(dimension: usize, optimum: f64, function: F) -> Self {
        Self {
            dimension,
            optimum,
            function,
            evaluations: 0,
            best: f64::NEG_INFINITY,
        }
    }

    /// Bitstring length this problem is defined on.
    pub fn dimension(&self) -> usize {
        self.dimension
    }

    /// The known optimal value.
    pub fn optimum(&self) -> f64 {
        self.optimum
    }
}

impl PboProblem<fn(&[bool]) -> f64> {
    /// OneMax on `n` bits.
    pub fn one_max(n: usize) -> Self {
        Self::new(n, n as f64, one_max)
    }

    /// LeadingOnes on `n` bits.
    pub fn leading_ones(n: usize) -> Self {
        Self::new(n, n as f64, leading_ones)
    }
}

impl<F> Objective for PboProblem<F>
where
    F: Fn(&[bool]) -> f64,
{
    type Error = Infallible;

    fn evaluate(&mut self, bits: &[bool]) -> Result<f64, Infallible> {
        debug_assert_eq!(bits.len(), self.dimension, "bitstring length mismatch");
        self.evaluations += 1;
        let fitness = (self.function)(bits);
        if fitness > self.best {
            self.best = fitness;
        }
        Ok(fitness)
    }

    fn evaluations(&self) -> usize {
        self.evaluations
    }

    fn optimum_found(&self) -> bool {
        self.best >= self.optimum
    }

    fn best_fitness(&self) -> f64 {
        self.best
    }

    fn reset(&mut self) {
        self.evaluations = 0;
        self.best = f64::NEG_INFINITY;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_one_max() {
        assert_eq!(one_max(&[]), 0.0);
        assert_eq!(one_max(&[true, false, true]), 2.0);
        assert_eq!(one_max(&[true; 7]), 7.0);
    }

    #[test]
    fn test_leading_ones() {
        assert_eq!(leading_ones(&[false, true, true]), 0.0);
        assert_eq!(leading_ones(&[true, true, false, true]), 2.0);
        assert_eq!(leading_ones(&[true; 5]), 5.0);
    }

    #[test]
    fn test_counting_and_best() {
        let mut problem = PboProblem::leading_ones(3);
        assert_eq!(problem.best_fitness(), f64::NEG_INFINITY);

        problem.evaluate(&[true, false, false]).unwrap();
        problem.evaluate(&[false, true, true]).unwrap();
        assert_eq!(problem.evaluations(), 2);
        assert_eq!(problem.best_fitness(), 1.0);
        assert!(!problem.optimum_found());

        problem.evaluate(&[true, true, true]).unwrap();
        assert!(problem.optimum_found());
    }

    #[test]
    fn test_reset() {
        let mut problem = PboProblem::one_max(2);
        problem.evaluate(&[true, true]).unwrap();
        problem.reset();
        assert_eq!(problem.evaluations(), 0);
        assert_eq!(problem.best_fitness(), f64::NEG_INFINITY);
        assert!(!problem.optimum_found());
    }

    #[test]
    fn test_custom_function() {
        let mut problem = PboProblem::new(4, 1.0, |bits: &[bool]| {
            if bits.iter().all(|&b| !b) { 1.0 } else { 0.0 }
        });
        assert_eq!(problem.dimension(), 4);
        assert_eq!(problem.optimum(), 1.0);
        assert_eq!(problem.evaluate(&[false; 4]).unwrap(), 1.0);
        assert!(problem.optimum_found());
    }
}
