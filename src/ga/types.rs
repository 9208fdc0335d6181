//! Strategy traits for the generational-gap GA.
//!
//! Each role of a generation is swappable behind a narrow contract:
//!
//! - [`ReproductionSelection`]: picks the parents from the population
//! - [`Crossover`]: turns the parents into unevaluated offspring
//! - [`SurvivalSelection`]: writes survivors of the family back into the
//!   population
//!
//! The random source is lent to every call so that the draw order within a
//! generation is fixed: reproduction, then crossover, then survival.

use crate::error::Result;
use crate::random::RandomSource;
use crate::solution::SolutionSet;

/// Selects parents from the population.
pub trait ReproductionSelection {
    /// Fills `parents` (cleared first) with copies of `no_of_parents`
    /// individuals of `population` and returns their population indices,
    /// in selection order.
    ///
    /// `population` is not modified.
    ///
    /// # Errors
    ///
    /// [`InsufficientPopulation`](crate::error::RealGaError::InsufficientPopulation)
    /// if `no_of_parents > population.len()`.
    fn select<R: RandomSource + ?Sized>(
        &self,
        population: &SolutionSet,
        no_of_parents: usize,
        parents: &mut SolutionSet,
        rng: &mut R,
    ) -> Result<Vec<usize>>;
}

/// Generates offspring from a parent set.
pub trait Crossover {
    /// Number of parents the operator consumes in a `dimension`-space.
    fn no_of_parents(&self, dimension: usize) -> usize;

    /// Appends `no_of_kids` fresh, unevaluated solutions to `kids`
    /// (cleared first). `parents` is not modified.
    fn make_offspring<R: RandomSource + ?Sized>(
        &self,
        parents: &SolutionSet,
        no_of_kids: usize,
        kids: &mut SolutionSet,
        rng: &mut R,
    ) -> Result<()>;
}

/// Chooses which family members re-enter the population.
pub trait SurvivalSelection {
    /// Overwrites population slots listed in `parent_indices` with
    /// survivors drawn from the family `parents ∪ kids`.
    ///
    /// `parent_indices[i]` is the population slot `parents[i]` was copied
    /// from. The population length never changes.
    fn select<R: RandomSource + ?Sized>(
        &self,
        population: &mut SolutionSet,
        parent_indices: &[usize],
        parents: &SolutionSet,
        kids: &SolutionSet,
        rng: &mut R,
    ) -> Result<()>;
}
