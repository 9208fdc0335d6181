//! Numeric random source consumed by the GA components.
//!
//! The engine does not implement a generator. It needs uniform reals in
//! `[0, 1)` and standard-normal draws, expressed by [`RandomSource`]. Every
//! [`rand::Rng`] is a `RandomSource`, so any seeded `rand` generator plugs in.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rand_distr::{Distribution, StandardNormal};

/// Capability providing the draws the real-coded GA consumes.
///
/// Draw order is part of the reproducibility contract: the same seed and the
/// same external evaluations yield the same sequence of populations.
pub trait RandomSource {
    /// Uniform real in `[0, 1)`.
    fn uniform(&mut self) -> f64;

    /// Standard normal draw, `N(0, 1)`.
    fn standard_normal(&mut self) -> f64;

    /// Uniform index in `0..n`, derived from a single [`uniform`](Self::uniform) draw.
    ///
    /// `n` must be positive.
    fn index(&mut self, n: usize) -> usize {
        debug_assert!(n > 0, "index range must not be empty");
        ((self.uniform() * n as f64) as usize).min(n - 1)
    }
}

impl<R: Rng> RandomSource for R {
    fn uniform(&mut self) -> f64 {
        self.random::<f64>()
    }

    fn standard_normal(&mut self) -> f64 {
        StandardNormal.sample(self)
    }
}

/// Creates a seeded generator.
pub fn create_rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}
