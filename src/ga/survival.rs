//! Survival selection for generational-gap models.
//!
//! Only the population slots the parents came from are rewritten; the rest
//! of the population is untouched, so the population size never changes.
//!
//! - [`BestAndRankBasedRoulette`]: MGG, elite plus one rank-roulette pick
//!   from the whole family
//! - [`JggBestKids`]: JGG, every parent slot receives one of the best
//!   offspring

use super::selection::rank_roulette;
use super::types::SurvivalSelection;
use crate::error::{RealGaError, Result};
use crate::random::RandomSource;
use crate::solution::{EvaluationComparator, Solution, SolutionSet};

/// Best-and-rank-based roulette selection from the family (MGG).
///
/// # Algorithm
///
/// 1. The family is `parents ∪ kids`, parents first
/// 2. The family is sorted best first; ties keep family order
/// 3. The best member survives into the slot of `parents[0]`
/// 4. A rank-based roulette over the remaining members (weight `F - rank`)
///    picks the survivor for the slot of `parents[1]`
///
/// Exactly two population slots are written per call. Secondary parents
/// keep their slots.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BestAndRankBasedRoulette {
    comparator: EvaluationComparator,
}

impl BestAndRankBasedRoulette {
    pub fn new(comparator: EvaluationComparator) -> Self {
        Self { comparator }
    }
}

impl SurvivalSelection for BestAndRankBasedRoulette {
    fn select<R: RandomSource + ?Sized>(
        &self,
        population: &mut SolutionSet,
        parent_indices: &[usize],
        parents: &SolutionSet,
        kids: &SolutionSet,
        rng: &mut R,
    ) -> Result<()> {
        if parents.len() < 2 || parent_indices.len() != parents.len() {
            return Err(RealGaError::InvalidFamily {
                parents: parents.len(),
                kids: kids.len(),
                required: 2,
            });
        }
        check_slots(population, &parent_indices[..2])?;

        let family: Vec<&Solution> = parents.iter().chain(kids.iter()).collect();
        check_evaluated(&family, 0)?;
        let order = sorted_order(&self.comparator, &family);

        let best = order[0];
        let second = order[1 + rank_roulette(order.len() - 1, rng)];

        population.replace(parent_indices[0], family[best]);
        population.replace(parent_indices[1], family[second]);

        tracing::trace!(
            best_family_index = best,
            roulette_family_index = second,
            replaced = ?&parent_indices[..2],
            "mgg survival"
        );
        Ok(())
    }
}

/// Just Generation Gap survival: parents are replaced by the best offspring.
///
/// Offspring are sorted best first and the `i`-th best is written into the
/// slot of `parents[i]`. Parents never survive, so at least as many kids as
/// parents are needed. Consumes no random draws.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct JggBestKids {
    comparator: EvaluationComparator,
}

impl JggBestKids {
    pub fn new(comparator: EvaluationComparator) -> Self {
        Self { comparator }
    }
}

impl SurvivalSelection for JggBestKids {
    fn select<R: RandomSource + ?Sized>(
        &self,
        population: &mut SolutionSet,
        parent_indices: &[usize],
        parents: &SolutionSet,
        kids: &SolutionSet,
        _rng: &mut R,
    ) -> Result<()> {
        let np = parents.len();
        if np == 0 || kids.len() < np || parent_indices.len() != np {
            return Err(RealGaError::InvalidFamily {
                parents: np,
                kids: kids.len(),
                required: np.max(1),
            });
        }
        check_slots(population, parent_indices)?;

        let offspring: Vec<&Solution> = kids.iter().collect();
        check_evaluated(&offspring, np)?;
        let order = sorted_order(&self.comparator, &offspring);

        for (&slot, &k) in parent_indices.iter().zip(&order) {
            population.replace(slot, offspring[k]);
        }

        tracing::trace!(replaced = np, "jgg survival");
        Ok(())
    }
}

/// Indices of `members`, best first. The sort is stable.
fn sorted_order(comparator: &EvaluationComparator, members: &[&Solution]) -> Vec<usize> {
    let mut order: Vec<usize> = (0..members.len()).collect();
    order.sort_by(|&a, &b| comparator.compare(members[a], members[b]));
    order
}

fn check_evaluated(members: &[&Solution], offset: usize) -> Result<()> {
    match members.iter().position(|s| !s.is_evaluated()) {
        Some(i) => Err(RealGaError::Unevaluated {
            family_index: offset + i,
        }),
        None => Ok(()),
    }
}

fn check_slots(population: &SolutionSet, slots: &[usize]) -> Result<()> {
    match slots.iter().max() {
        Some(&max) if max >= population.len() => Err(RealGaError::InsufficientPopulation {
            required: max + 1,
            available: population.len(),
        }),
        _ => Ok(()),
    }
}
