//! Selection schemes shared by reproduction and survival.
//!
//! # References
//!
//! - Baker (1985), "Adaptive Selection Methods for Genetic Algorithms"
//! - Satoh, Yamamura & Kobayashi (1996), "Minimal Generation Gap Model
//!   for GAs Considering Both Exploration and Exploitation"

use super::types::ReproductionSelection;
use crate::error::{RealGaError, Result};
use crate::random::RandomSource;
use crate::solution::SolutionSet;

/// Uniform random parent selection without replacement.
///
/// Draws `k` distinct population indices with a partial Fisher–Yates
/// shuffle, consuming exactly `k` uniform draws. The first two selected
/// parents form the primary pair of UNDX.
///
/// # Complexity
/// O(N) per call for a population of size N
///
/// # Examples
///
/// ```
/// use u_realcoded::ga::{RandomWithoutReplacement, ReproductionSelection};
/// use u_realcoded::random::create_rng;
/// use u_realcoded::solution::{Solution, SolutionSet};
///
/// let population = SolutionSet::with_size(Solution::new(2), 6);
/// let mut parents = SolutionSet::new(Solution::new(2));
/// let mut rng = create_rng(42);
///
/// let indices = RandomWithoutReplacement
///     .select(&population, 3, &mut parents, &mut rng)
///     .unwrap();
/// assert_eq!(indices.len(), 3);
/// assert_eq!(parents.len(), 3);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RandomWithoutReplacement;

impl ReproductionSelection for RandomWithoutReplacement {
    fn select<R: RandomSource + ?Sized>(
        &self,
        population: &SolutionSet,
        no_of_parents: usize,
        parents: &mut SolutionSet,
        rng: &mut R,
    ) -> Result<Vec<usize>> {
        let n = population.len();
        if no_of_parents > n {
            return Err(RealGaError::InsufficientPopulation {
                required: no_of_parents,
                available: n,
            });
        }

        let mut order: Vec<usize> = (0..n).collect();
        for i in 0..no_of_parents {
            let j = i + rng.index(n - i);
            order.swap(i, j);
        }
        order.truncate(no_of_parents);

        parents.clear();
        for &idx in &order {
            parents.push_copy(&population[idx]);
        }

        tracing::trace!(parents = ?order, "reproduction selection");
        Ok(order)
    }
}

/// Linear rank-based roulette over `n` candidates sorted best first.
///
/// Rank `r` (0 = best) gets weight `n - r`, so the total weight is
/// `n(n + 1)/2`. Consumes one uniform draw. Returns the chosen rank.
///
/// `n` must be positive.
pub(crate) fn rank_roulette<R: RandomSource + ?Sized>(n: usize, rng: &mut R) -> usize {
    debug_assert!(n > 0, "rank roulette needs at least one candidate");
    let total = (n * (n + 1)) as f64 / 2.0;
    let threshold = rng.uniform() * total;
    let mut cumulative = 0.0;
    for rank in 0..n {
        cumulative += (n - rank) as f64;
        if cumulative > threshold {
            return rank;
        }
    }
    n - 1 // floating-point fallback
}
