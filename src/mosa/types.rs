//! The objective contract between MOSA-EA and a pseudo-boolean problem.
//!
//! MOSA-EA treats the objective as a black box. Besides scoring
//! bitstrings it owns the run bookkeeping: the evaluation counter, the
//! best value seen, and the signal that the optimum was hit.

/// A pseudo-boolean objective to be **maximized**.
///
/// Each call to [`evaluate`](Objective::evaluate) counts as one
/// evaluation against the engine's budget.
///
/// # Implementing
///
/// ```ignore
/// struct Trap { n: usize, evaluations: usize, best: f64 }
///
/// impl Objective for Trap {
///     type Error = std::convert::Infallible;
///
///     fn evaluate(&mut self, bits: &[bool]) -> Result<f64, Self::Error> {
///         self.evaluations += 1;
///         let ones = bits.iter().filter(|&&b| b).count();
///         let f = if ones == self.n { 2.0 * self.n as f64 } else { (self.n - ones) as f64 };
///         self.best = self.best.max(f);
///         Ok(f)
///     }
///     fn evaluations(&self) -> usize { self.evaluations }
///     fn optimum_found(&self) -> bool { self.best >= 2.0 * self.n as f64 }
///     fn best_fitness(&self) -> f64 { self.best }
///     fn reset(&mut self) { self.evaluations = 0; self.best = f64::NEG_INFINITY; }
/// }
/// ```
pub trait Objective {
    /// Error raised by a failed evaluation. It aborts the run.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Scores a bitstring and increments the evaluation counter.
    fn evaluate(&mut self, bits: &[bool]) -> Result<f64, Self::Error>;

    /// Number of evaluations performed since construction or the last reset.
    fn evaluations(&self) -> usize;

    /// Whether an optimal bitstring has been evaluated.
    fn optimum_found(&self) -> bool;

    /// Best fitness seen since construction or the last reset.
    fn best_fitness(&self) -> f64;

    /// Restores the counter and best value to their initial state.
    fn reset(&mut self);
}
