//! Discretized log-scale mutation rates.
//!
//! Individuals do not carry a raw mutation rate; they carry an index into
//! a [`MutationLadder`] of geometrically spaced rates, so self-adaptation
//! is a random walk over a fixed grid.

/// Geometric sequence of per-bit mutation rates.
///
/// `rates[0] = c / n`, `rates[i + 1] = rates[i] * A`, extended for as long
/// as the next rate stays at or below 0.5. The ladder always holds at
/// least one rate.
///
/// # Example
///
/// ```
/// use mosa_ea::mosa::MutationLadder;
///
/// let ladder = MutationLadder::build(10, 0.1, 1.5);
/// assert!((ladder.rate(0) - 0.01).abs() < 1e-12);
/// assert!(ladder.max_rate() <= 0.5);
/// assert!(ladder.max_rate() * 1.5 > 0.5);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct MutationLadder {
    rates: Vec<f64>,
}

impl MutationLadder {
    /// Builds the ladder for bitstring length `n`, minimum-rate parameter
    /// `c`, and growth factor `a`.
    ///
    /// # Panics
    /// Panics if `n == 0` or `a <= 1.0` (validated by
    /// [`MosaConfig::validate`](super::MosaConfig::validate)).
    pub fn build(n: usize, c: f64, a: f64) -> Self {
        assert!(n > 0, "problem size must be positive");
        assert!(a > 1.0, "growth factor must exceed 1");

        let mut rate = c / n as f64;
        let mut rates = vec![rate];
        while rate * a <= 0.5 {
            rate *= a;
            rates.push(rate);
        }
        Self { rates }
    }

    /// Number of rates `K`.
    pub fn len(&self) -> usize {
        self.rates.len()
    }

    /// Always `false`; kept for the `len`/`is_empty` convention.
    pub fn is_empty(&self) -> bool {
        self.rates.is_empty()
    }

    /// Rate at `index`.
    ///
    /// # Panics
    /// Panics if `index >= len()`.
    pub fn rate(&self, index: usize) -> f64 {
        self.rates[index]
    }

    /// The highest rate, `rates[K - 1]`.
    pub fn max_rate(&self) -> f64 {
        self.rates[self.rates.len() - 1]
    }

    /// Highest valid index, `K - 1`.
    pub fn max_index(&self) -> usize {
        self.rates.len() - 1
    }

    /// All rates, lowest first.
    pub fn rates(&self) -> &[f64] {
        &self.rates
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_geometric_progression() {
        let ladder = MutationLadder::build(10, 0.1, 1.5);
        assert_eq!(ladder.rate(0), 0.1 / 10.0);
        for w in ladder.rates().windows(2) {
            assert_eq!(w[1], w[0] * 1.5);
        }
        assert!(ladder.max_rate() <= 0.5);
        assert!(ladder.max_rate() * 1.5 > 0.5);
    }

    #[test]
    fn test_known_length() {
        // 0.01 * 1.5^k <= 0.5  <=>  k <= ln(50)/ln(1.5) ~ 9.65
        let ladder = MutationLadder::build(10, 0.1, 1.5);
        assert_eq!(ladder.len(), 10);
        assert_eq!(ladder.max_index(), 9);
    }

    #[test]
    fn test_degenerate_single_rate() {
        // First rate 0.4, next would be 0.8
        let ladder = MutationLadder::build(1, 0.4, 2.0);
        assert_eq!(ladder.len(), 1);
        assert!(!ladder.is_empty());
        assert_eq!(ladder.max_index(), 0);
        assert_eq!(ladder.rate(0), 0.4);
    }

    #[test]
    fn test_exact_half_is_included() {
        let ladder = MutationLadder::build(1, 0.25, 2.0);
        assert_eq!(ladder.rates(), &[0.25, 0.5]);
    }

    #[test]
    fn test_many_parameter_combinations() {
        for n in [1usize, 7, 100, 1000] {
            for c in [0.01, 0.1, 0.5] {
                for a in [1.01, 1.2, 2.0, 3.0] {
                    let ladder = MutationLadder::build(n, c, a);
                    assert!(ladder.len() >= 1);
                    assert_eq!(ladder.rate(0), c / n as f64);
                    assert!(ladder.max_rate() * a > 0.5);
                    for w in ladder.rates().windows(2) {
                        assert!(w[1] > w[0]);
                        assert!(w[1] <= 0.5);
                    }
                }
            }
        }
    }

    #[test]
    #[should_panic(expected = "growth factor")]
    fn test_rejects_non_growing_factor() {
        MutationLadder::build(10, 0.1, 1.0);
    }
}
