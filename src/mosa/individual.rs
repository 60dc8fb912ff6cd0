//! Bitstring individuals with a self-adapted mutation rate.

use rand::Rng;

/// A candidate solution: a bitstring, the index of its mutation rate on
/// the [`MutationLadder`](super::MutationLadder), and its last fitness.
///
/// Fitness is only ever written by the engine after an objective call.
#[derive(Debug, Clone, PartialEq)]
pub struct Individual {
    /// The solution bits.
    pub bits: Vec<bool>,

    /// Index into the mutation ladder, in `0..K`.
    pub rate_index: usize,

    /// Fitness from the most recent evaluation (0 before the first one).
    pub fitness: f64,
}

impl Individual {
    /// Creates an individual with uniformly random bits and a uniformly
    /// random rate index in `0..ladder_len`.
    ///
    /// # Panics
    /// Panics if `ladder_len == 0`.
    pub fn random<R: Rng>(n: usize, ladder_len: usize, rng: &mut R) -> Self {
        let rate_index = rng.random_range(0..ladder_len);
        let bits = (0..n).map(|_| rng.random_bool(0.5)).collect();
        Self {
            bits,
            rate_index,
            fitness: 0.0,
        }
    }

    /// Flips each bit independently with probability `rate`.
    ///
    /// # Panics
    /// Panics if `rate` is outside `[0, 1]`.
    pub fn mutate_bits<R: Rng>(&mut self, rate: f64, rng: &mut R) {
        for bit in self.bits.iter_mut() {
            if rng.random_bool(rate) {
                *bit = !*bit;
            }
        }
    }

    /// Moves one step along the ladder: up with probability `p_inc`
    /// (capped at `ladder_len - 1`), otherwise down (floored at 0).
    pub fn mutate_rate_index<R: Rng>(&mut self, p_inc: f64, ladder_len: usize, rng: &mut R) {
        if rng.random_bool(p_inc) {
            self.rate_index = (self.rate_index + 1).min(ladder_len - 1);
        } else {
            self.rate_index = self.rate_index.saturating_sub(1);
        }
    }

    /// Number of set bits.
    pub fn ones(&self) -> usize {
        self.bits.iter().filter(|&&b| b).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::create_rng;

    #[test]
    fn test_random_shape() {
        let mut rng = create_rng(42);
        for _ in 0..200 {
            let ind = Individual::random(16, 5, &mut rng);
            assert_eq!(ind.bits.len(), 16);
            assert!(ind.rate_index < 5);
            assert_eq!(ind.fitness, 0.0);
        }
    }

    #[test]
    fn test_random_covers_every_rate_index() {
        let mut rng = create_rng(42);
        let mut seen = [false; 4];
        for _ in 0..400 {
            seen[Individual::random(1, 4, &mut rng).rate_index] = true;
        }
        assert!(seen.iter().all(|&s| s));
    }

    #[test]
    fn test_zero_rate_keeps_bits() {
        let mut rng = create_rng(42);
        let mut ind = Individual::random(32, 3, &mut rng);
        let original = ind.bits.clone();
        for _ in 0..1000 {
            ind.mutate_bits(0.0, &mut rng);
            assert_eq!(ind.bits, original);
        }
    }

    #[test]
    fn test_full_rate_flips_every_bit() {
        let mut rng = create_rng(7);
        let mut ind = Individual::random(32, 3, &mut rng);
        let original = ind.bits.clone();
        ind.mutate_bits(1.0, &mut rng);
        for (after, before) in ind.bits.iter().zip(original.iter()) {
            assert_ne!(after, before);
        }
    }

    #[test]
    fn test_rate_index_moves_up_and_caps() {
        let mut rng = create_rng(42);
        let mut ind = Individual {
            bits: vec![false; 4],
            rate_index: 2,
            fitness: 0.0,
        };
        ind.mutate_rate_index(1.0, 4, &mut rng);
        assert_eq!(ind.rate_index, 3);
        ind.mutate_rate_index(1.0, 4, &mut rng);
        assert_eq!(ind.rate_index, 3);
    }

    #[test]
    fn test_rate_index_moves_down_and_floors() {
        let mut rng = create_rng(42);
        let mut ind = Individual {
            bits: vec![false; 4],
            rate_index: 1,
            fitness: 0.0,
        };
        ind.mutate_rate_index(0.0, 4, &mut rng);
        assert_eq!(ind.rate_index, 0);
        ind.mutate_rate_index(0.0, 4, &mut rng);
        assert_eq!(ind.rate_index, 0);
    }

    #[test]
    fn test_rate_index_single_rate_ladder() {
        let mut rng = create_rng(42);
        let mut ind = Individual::random(4, 1, &mut rng);
        for _ in 0..50 {
            ind.mutate_rate_index(0.5, 1, &mut rng);
            assert_eq!(ind.rate_index, 0);
        }
    }

    #[test]
    fn test_ones() {
        let ind = Individual {
            bits: vec![true, false, true, true],
            rate_index: 0,
            fitness: 0.0,
        };
        assert_eq!(ind.ones(), 3);
    }
}
