//! Generation management for real-coded generational-gap GAs.
//!
//! [`GenerationController`] wires the three strategies into the cycle
//! `initialize → {make_offspring → evaluate (caller) → next_generation}*`.
//! Evaluation and termination stay with the caller.

use super::config::RealGaConfig;
use super::operators::{Rex, Undx};
use super::selection::RandomWithoutReplacement;
use super::survival::{BestAndRankBasedRoulette, JggBestKids};
use super::types::{Crossover, ReproductionSelection, SurvivalSelection};
use crate::error::{RealGaError, Result};
use crate::random::RandomSource;
use crate::solution::{EvaluationComparator, Solution, SolutionSet};

/// Lifecycle state of a [`GenerationController`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControllerState {
    /// `initialize()` has not been called.
    Uninitialized,
    /// Population exists; `make_offspring()` is next.
    Ready,
    /// Offspring handed out; `next_generation()` is next.
    OffspringMade,
}

/// UNDX crossover with the Minimal Generation Gap model.
pub type UndxMgg<R> =
    GenerationController<RandomWithoutReplacement, Undx, BestAndRankBasedRoulette, R>;

/// REX crossover with the Just Generation Gap model.
pub type RexJgg<R> = GenerationController<RandomWithoutReplacement, Rex, JggBestKids, R>;

/// Drives one population through generational-gap generations.
///
/// The controller owns the random source and lends it to reproduction,
/// crossover, and survival in that order, so a fixed seed and fixed
/// evaluations reproduce the same populations.
///
/// # Usage
///
/// ```
/// use u_realcoded::ga::{RealGaConfig, UndxMgg};
/// use u_realcoded::random::RandomSource;
/// use u_realcoded::solution::Status;
///
/// let config = RealGaConfig::new(2)
///     .with_population_size(6)
///     .with_no_of_kids(4)
///     .with_seed(42);
/// let rng = config.rng();
/// let mut ga = UndxMgg::undx_mgg(config, rng).unwrap();
///
/// ga.initialize();
/// let (population, rng) = ga.population_and_random_mut().unwrap();
/// for s in population.iter_mut() {
///     for x in s.vector_mut() {
///         *x = rng.uniform() * 10.0 - 5.0;
///     }
///     let value = s.vector().iter().map(|x| x * x).sum();
///     s.set_evaluation(value, Status::Feasible);
/// }
/// let initial_best = ga.best_evaluation_value().unwrap();
///
/// for _ in 0..50 {
///     for kid in ga.make_offspring().unwrap().iter_mut() {
///         let value = kid.vector().iter().map(|x| x * x).sum();
///         kid.set_evaluation(value, Status::Feasible);
///     }
///     ga.next_generation().unwrap();
/// }
/// assert!(ga.best_evaluation_value().unwrap() <= initial_best);
/// ```
#[derive(Debug, Clone)]
pub struct GenerationController<P, C, S, R> {
    config: RealGaConfig,
    comparator: EvaluationComparator,
    reproduction: P,
    crossover: C,
    survival: S,
    rng: R,
    population: SolutionSet,
    parents: SolutionSet,
    kids: SolutionSet,
    parent_indices: Vec<usize>,
    state: ControllerState,
    generation: u64,
}

impl<R: RandomSource> UndxMgg<R> {
    /// UNDX (3 parents) + MGG with the configured comparator direction.
    pub fn undx_mgg(config: RealGaConfig, rng: R) -> Result<Self> {
        let survival =
            BestAndRankBasedRoulette::new(EvaluationComparator::new(config.minimization));
        Self::new(config, RandomWithoutReplacement, Undx::default(), survival, rng)
    }
}

impl<R: RandomSource> RexJgg<R> {
    /// REX (`n + 1` parents) + JGG with the configured comparator direction.
    pub fn rex_jgg(config: RealGaConfig, rng: R) -> Result<Self> {
        let survival = JggBestKids::new(EvaluationComparator::new(config.minimization));
        Self::new(config, RandomWithoutReplacement, Rex::default(), survival, rng)
    }
}

impl<P, C, S, R> GenerationController<P, C, S, R>
where
    P: ReproductionSelection,
    C: Crossover,
    S: SurvivalSelection,
    R: RandomSource,
{
    /// Creates an uninitialized controller from explicit strategies.
    ///
    /// # Errors
    /// [`InvalidConfig`](RealGaError::InvalidConfig) if `config` fails validation.
    pub fn new(
        config: RealGaConfig,
        reproduction: P,
        crossover: C,
        survival: S,
        rng: R,
    ) -> Result<Self> {
        config.validate()?;
        let template = Solution::new(config.dimension);
        Ok(Self {
            comparator: EvaluationComparator::new(config.minimization),
            config,
            reproduction,
            crossover,
            survival,
            rng,
            population: SolutionSet::new(template.clone()),
            parents: SolutionSet::new(template.clone()),
            kids: SolutionSet::new(template),
            parent_indices: Vec::new(),
            state: ControllerState::Uninitialized,
            generation: 0,
        })
    }

    /// Builds a fresh population of `population_size` unevaluated solutions
    /// and empties the parent and offspring sets.
    ///
    /// Calling it again starts a new run. The random source keeps its state.
    pub fn initialize(&mut self) -> &mut SolutionSet {
        let template = Solution::new(self.config.dimension);
        self.population = SolutionSet::with_size(template.clone(), self.config.population_size);
        self.parents = SolutionSet::new(template.clone());
        self.kids = SolutionSet::new(template);
        self.parent_indices.clear();
        self.state = ControllerState::Ready;
        self.generation = 0;

        tracing::debug!(
            dimension = self.config.dimension,
            population_size = self.config.population_size,
            no_of_kids = self.config.no_of_kids,
            no_of_parents = self.no_of_parents(),
            "population initialized"
        );
        &mut self.population
    }

    /// Selects parents and generates `no_of_kids` unevaluated offspring.
    ///
    /// The returned set must be evaluated before [`next_generation`](Self::next_generation).
    /// Calling it again before `next_generation` discards the previous offspring.
    ///
    /// # Errors
    /// - [`Uninitialized`](RealGaError::Uninitialized) before `initialize()`
    /// - [`InsufficientPopulation`](RealGaError::InsufficientPopulation) if the
    ///   population is smaller than the crossover's parent count
    /// - any crossover error, e.g. [`DegenerateParents`](RealGaError::DegenerateParents)
    ///
    /// On error the controller returns to the ready state.
    pub fn make_offspring(&mut self) -> Result<&mut SolutionSet> {
        self.require_initialized()?;
        self.state = ControllerState::Ready;
        self.parents.clear();
        self.kids.clear();

        let k = self.no_of_parents();
        self.parent_indices = self
            .reproduction
            .select(&self.population, k, &mut self.parents, &mut self.rng)?;
        self.crossover.make_offspring(
            &self.parents,
            self.config.no_of_kids,
            &mut self.kids,
            &mut self.rng,
        )?;

        self.state = ControllerState::OffspringMade;
        Ok(&mut self.kids)
    }

    /// Runs survival selection on the family of the last `make_offspring()`.
    ///
    /// # Errors
    /// - [`Uninitialized`](RealGaError::Uninitialized) before `initialize()`
    /// - [`OutOfSequence`](RealGaError::OutOfSequence) unless `make_offspring()`
    ///   succeeded since the last generation
    /// - [`Unevaluated`](RealGaError::Unevaluated) if a family member carries
    ///   no evaluation; the controller stays in the offspring state so the
    ///   caller can finish evaluating through [`kids_mut`](Self::kids_mut)
    ///   and call it again
    pub fn next_generation(&mut self) -> Result<()> {
        self.require_initialized()?;
        if self.state != ControllerState::OffspringMade {
            return Err(RealGaError::OutOfSequence {
                operation: "next_generation",
                state: self.state,
            });
        }

        self.survival.select(
            &mut self.population,
            &self.parent_indices,
            &self.parents,
            &self.kids,
            &mut self.rng,
        )?;

        self.state = ControllerState::Ready;
        self.generation += 1;
        tracing::debug!(
            generation = self.generation,
            replaced = ?self.parent_indices,
            "generation advanced"
        );
        Ok(())
    }

    /// Best individual of the population under the comparator.
    ///
    /// The population is scanned, not sorted, so slot positions stay valid
    /// between `make_offspring()` and `next_generation()`. Ties return the
    /// lowest slot.
    pub fn best_individual(&self) -> Result<&Solution> {
        self.require_initialized()?;
        let population = self.population.as_slice();
        self.comparator
            .best_index(population)
            .map(|i| &population[i])
            .ok_or(RealGaError::InsufficientPopulation {
                required: 1,
                available: 0,
            })
    }

    pub fn best_evaluation_value(&self) -> Result<f64> {
        self.best_individual().map(Solution::evaluation_value)
    }

    pub fn population(&self) -> Result<&SolutionSet> {
        self.require_initialized()?;
        Ok(&self.population)
    }

    /// Mutable population, for bootstrapping and evaluation by the caller.
    pub fn population_mut(&mut self) -> Result<&mut SolutionSet> {
        self.require_initialized()?;
        Ok(&mut self.population)
    }

    /// Population together with the random source, so the caller can draw
    /// initial coordinates from the same stream the GA consumes.
    pub fn population_and_random_mut(&mut self) -> Result<(&mut SolutionSet, &mut R)> {
        self.require_initialized()?;
        Ok((&mut self.population, &mut self.rng))
    }

    pub fn random_mut(&mut self) -> &mut R {
        &mut self.rng
    }

    /// Parents selected by the last `make_offspring()`.
    pub fn parents(&self) -> &SolutionSet {
        &self.parents
    }

    /// Population slots of [`parents`](Self::parents), in the same order.
    pub fn parent_indices(&self) -> &[usize] {
        &self.parent_indices
    }

    /// Offspring generated by the last `make_offspring()`.
    pub fn kids(&self) -> &SolutionSet {
        &self.kids
    }

    /// Offspring awaiting evaluation before `next_generation()`.
    ///
    /// # Errors
    /// [`OutOfSequence`](RealGaError::OutOfSequence) unless the last
    /// `make_offspring()` succeeded and no generation followed it.
    pub fn kids_mut(&mut self) -> Result<&mut SolutionSet> {
        self.require_initialized()?;
        if self.state != ControllerState::OffspringMade {
            return Err(RealGaError::OutOfSequence {
                operation: "kids_mut",
                state: self.state,
            });
        }
        Ok(&mut self.kids)
    }

    pub fn config(&self) -> &RealGaConfig {
        &self.config
    }

    pub fn comparator(&self) -> &EvaluationComparator {
        &self.comparator
    }

    pub fn state(&self) -> ControllerState {
        self.state
    }

    /// Number of completed `next_generation()` calls since `initialize()`.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Parent count of the configured crossover.
    pub fn no_of_parents(&self) -> usize {
        self.crossover.no_of_parents(self.config.dimension)
    }

    fn require_initialized(&self) -> Result<()> {
        match self.state {
            ControllerState::Uninitialized => Err(RealGaError::Uninitialized),
            _ => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ga::DegenerateAxis;
    use crate::random::create_rng;
    use crate::solution::Status;
    use proptest::prelude::*;
    use rand::rngs::StdRng;

    fn sphere(x: &[f64]) -> f64 {
        x.iter().map(|v| v * v).sum()
    }

    /// k-tablet with k = n/4: the first k axes weigh 1, the rest 10^4.
    fn ktablet(x: &[f64]) -> f64 {
        let k = x.len() / 4;
        x.iter()
            .enumerate()
            .map(|(i, v)| if i < k { v * v } else { 10_000.0 * v * v })
            .sum()
    }

    fn evaluate(set: &mut SolutionSet, f: fn(&[f64]) -> f64) {
        for s in set.iter_mut() {
            let value = f(s.vector());
            s.set_evaluation(value, Status::Feasible);
        }
    }

    fn bootstrap<P, C, S>(ga: &mut GenerationController<P, C, S, StdRng>, f: fn(&[f64]) -> f64)
    where
        P: ReproductionSelection,
        C: Crossover,
        S: SurvivalSelection,
    {
        ga.initialize();
        let (population, rng) = ga.population_and_random_mut().unwrap();
        for s in population.iter_mut() {
            for x in s.vector_mut() {
                *x = rng.uniform() * 10.0 - 5.0;
            }
        }
        evaluate(population, f);
    }

    fn step<P, C, S>(ga: &mut GenerationController<P, C, S, StdRng>, f: fn(&[f64]) -> f64)
    where
        P: ReproductionSelection,
        C: Crossover,
        S: SurvivalSelection,
    {
        evaluate(ga.make_offspring().unwrap(), f);
        ga.next_generation().unwrap();
    }

    fn small_config(seed: u64) -> RealGaConfig {
        RealGaConfig::new(2)
            .with_population_size(6)
            .with_no_of_kids(4)
            .with_seed(seed)
    }

    fn undx_mgg(config: RealGaConfig) -> UndxMgg<StdRng> {
        let rng = config.rng();
        UndxMgg::undx_mgg(config, rng).unwrap()
    }

    #[test]
    fn test_small_scenario_never_worsens() {
        let mut ga = undx_mgg(small_config(42));
        bootstrap(&mut ga, sphere);
        let initial = ga.best_evaluation_value().unwrap();

        step(&mut ga, sphere);
        let after = ga.best_evaluation_value().unwrap();
        assert!(after <= initial, "best worsened: {after} > {initial}");
        assert_eq!(ga.population().unwrap().len(), 6);
        assert_eq!(ga.generation(), 1);
    }

    #[test]
    fn test_best_is_monotone_over_many_generations() {
        let mut ga = undx_mgg(RealGaConfig::new(5).with_seed(7));
        bootstrap(&mut ga, sphere);

        let mut best = ga.best_evaluation_value().unwrap();
        for _ in 0..300 {
            step(&mut ga, sphere);
            let current = ga.best_evaluation_value().unwrap();
            assert!(current <= best);
            best = current;
        }
    }

    #[test]
    fn test_same_seed_same_history() {
        let run = |seed| {
            let mut ga = undx_mgg(RealGaConfig::new(4).with_seed(seed));
            bootstrap(&mut ga, sphere);
            (0..100)
                .map(|_| {
                    step(&mut ga, sphere);
                    ga.best_evaluation_value().unwrap().to_bits()
                })
                .collect::<Vec<u64>>()
        };
        assert_eq!(run(3), run(3));
        assert_ne!(run(3), run(4));
    }

    #[test]
    fn test_undx_mgg_converges_on_ktablet() {
        let mut ga = undx_mgg(RealGaConfig::new(8).with_seed(42));
        bootstrap(&mut ga, ktablet);
        let initial = ga.best_evaluation_value().unwrap();

        for _ in 0..3000 {
            step(&mut ga, ktablet);
        }
        let best = ga.best_evaluation_value().unwrap();
        assert!(
            best < initial * 1e-2,
            "expected strong progress on 8-D k-tablet: {initial} -> {best}"
        );
    }

    #[test]
    fn test_rex_jgg_converges_on_sphere() {
        let config = RealGaConfig::new(5).with_seed(42);
        let rng = config.rng();
        let mut ga = RexJgg::rex_jgg(config, rng).unwrap();
        assert_eq!(ga.no_of_parents(), 6);

        bootstrap(&mut ga, sphere);
        let initial = ga.best_evaluation_value().unwrap();
        for _ in 0..1500 {
            step(&mut ga, sphere);
            assert_eq!(ga.population().unwrap().len(), 70);
        }
        let best = ga.best_evaluation_value().unwrap();
        assert!(best < initial * 1e-3, "expected REX/JGG to approach the optimum, got {best}");
    }

    #[test]
    fn test_maximization() {
        let config = small_config(5).with_minimization(false).with_population_size(10);
        let mut ga = undx_mgg(config);
        let neg_sphere: fn(&[f64]) -> f64 = |x| -sphere(x);
        bootstrap(&mut ga, neg_sphere);

        let mut best = ga.best_evaluation_value().unwrap();
        for _ in 0..100 {
            step(&mut ga, neg_sphere);
            let current = ga.best_evaluation_value().unwrap();
            assert!(current >= best);
            best = current;
        }
    }

    #[test]
    fn test_operations_before_initialize_fail() {
        let mut ga = undx_mgg(small_config(1));
        assert_eq!(ga.state(), ControllerState::Uninitialized);
        assert_eq!(ga.make_offspring().unwrap_err(), RealGaError::Uninitialized);
        assert_eq!(ga.next_generation().unwrap_err(), RealGaError::Uninitialized);
        assert_eq!(ga.best_individual().unwrap_err(), RealGaError::Uninitialized);
        assert!(ga.population().is_err());
    }

    #[test]
    fn test_next_generation_requires_offspring() {
        let mut ga = undx_mgg(small_config(1));
        bootstrap(&mut ga, sphere);

        assert_eq!(
            ga.next_generation().unwrap_err(),
            RealGaError::OutOfSequence {
                operation: "next_generation",
                state: ControllerState::Ready
            }
        );

        step(&mut ga, sphere);
        assert!(matches!(
            ga.next_generation(),
            Err(RealGaError::OutOfSequence { .. })
        ));
    }

    #[test]
    fn test_unevaluated_kids_can_be_finished_in_place() {
        let mut ga = undx_mgg(small_config(2));
        bootstrap(&mut ga, sphere);
        let mut reference = ga.clone();

        ga.make_offspring().unwrap();
        assert!(matches!(
            ga.next_generation(),
            Err(RealGaError::Unevaluated { .. })
        ));
        assert_eq!(ga.state(), ControllerState::OffspringMade);

        evaluate(ga.kids_mut().unwrap(), sphere);
        ga.next_generation().unwrap();

        // Same stream position as a run that evaluated before the first call.
        step(&mut reference, sphere);
        assert_eq!(
            ga.population().unwrap().as_slice(),
            reference.population().unwrap().as_slice()
        );
        assert_eq!(ga.random_mut().uniform(), reference.random_mut().uniform());
    }

    #[test]
    fn test_kids_mut_requires_fresh_offspring() {
        let mut ga = undx_mgg(small_config(2));
        assert_eq!(ga.kids_mut().unwrap_err(), RealGaError::Uninitialized);

        bootstrap(&mut ga, sphere);
        assert!(matches!(
            ga.kids_mut(),
            Err(RealGaError::OutOfSequence { operation: "kids_mut", .. })
        ));

        step(&mut ga, sphere);
        assert!(matches!(
            ga.kids_mut(),
            Err(RealGaError::OutOfSequence { .. })
        ));
    }

    #[test]
    fn test_population_too_small_for_parents() {
        let mut ga = undx_mgg(small_config(1).with_population_size(2));
        bootstrap(&mut ga, sphere);
        assert_eq!(
            ga.make_offspring().unwrap_err(),
            RealGaError::InsufficientPopulation {
                required: 3,
                available: 2
            }
        );
        assert_eq!(ga.state(), ControllerState::Ready);
    }

    #[test]
    fn test_population_equal_to_parent_count() {
        let mut ga = undx_mgg(small_config(1).with_population_size(3));
        bootstrap(&mut ga, sphere);
        for _ in 0..10 {
            step(&mut ga, sphere);
        }
        assert_eq!(ga.population().unwrap().len(), 3);
    }

    #[test]
    fn test_degenerate_population_surfaces_error_when_asked() {
        let config = small_config(1).with_population_size(3);
        let survival = BestAndRankBasedRoulette::new(EvaluationComparator::minimizing());
        let undx = Undx::default().with_degenerate_axis(DegenerateAxis::Fail);
        let mut ga = GenerationController::new(
            config,
            RandomWithoutReplacement,
            undx,
            survival,
            create_rng(1),
        )
        .unwrap();
        ga.initialize();
        evaluate(ga.population_mut().unwrap(), sphere);

        // All solutions sit at the origin, so the primary pair coincides.
        assert_eq!(
            ga.make_offspring().unwrap_err(),
            RealGaError::DegenerateParents
        );
        assert_eq!(ga.state(), ControllerState::Ready);
    }

    #[test]
    fn test_degenerate_population_falls_back_by_default() {
        let mut ga = undx_mgg(small_config(1).with_population_size(3));
        ga.initialize();
        evaluate(ga.population_mut().unwrap(), sphere);

        let kids = ga.make_offspring().unwrap();
        assert!(kids.iter().all(|k| k.vector() == [0.0, 0.0]));
    }

    #[test]
    fn test_reinitialize_resets_run() {
        let mut ga = undx_mgg(small_config(9));
        bootstrap(&mut ga, sphere);
        step(&mut ga, sphere);
        ga.make_offspring().unwrap();

        ga.initialize();
        assert_eq!(ga.state(), ControllerState::Ready);
        assert_eq!(ga.generation(), 0);
        assert!(ga.kids().is_empty());
        assert!(ga.parents().is_empty());
        assert!(ga.population().unwrap().iter().all(|s| !s.is_evaluated()));
    }

    #[test]
    fn test_parent_indices_match_parents() {
        let mut ga = undx_mgg(small_config(4));
        bootstrap(&mut ga, sphere);
        ga.make_offspring().unwrap();

        assert_eq!(ga.parent_indices().len(), 3);
        let population = ga.population().unwrap();
        for (p, &i) in ga.parents().iter().zip(ga.parent_indices()) {
            assert_eq!(p, &population[i]);
        }
        assert_eq!(ga.kids().len(), 4);
    }

    #[test]
    fn test_invalid_config_rejected() {
        let config = RealGaConfig::new(0);
        let rng = create_rng(1);
        assert!(matches!(
            UndxMgg::undx_mgg(config, rng),
            Err(RealGaError::InvalidConfig(_))
        ));
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(32))]

        #[test]
        fn prop_population_size_invariant(
            dimension in 1usize..6,
            extra in 0usize..10,
            kids in 1usize..8,
            generations in 0usize..40,
            seed: u64,
        ) {
            let config = RealGaConfig::new(dimension)
                .with_population_size(3 + extra)
                .with_no_of_kids(kids)
                .with_seed(seed);
            let mut ga = undx_mgg(config);
            bootstrap(&mut ga, sphere);

            for _ in 0..generations {
                step(&mut ga, sphere);
                prop_assert_eq!(ga.population().unwrap().len(), 3 + extra);
            }
            prop_assert!(ga.population().unwrap().iter().all(|s| s.dimension() == dimension));
        }
    }
}
