//! Real-coded generational-gap genetic algorithms.
//!
//! A population of real vectors evolves by replacing only a small family
//! each generation. The caller evaluates solutions; the engine selects,
//! recombines, and decides survival.
//!
//! # Core Traits
//!
//! - [`ReproductionSelection`]: parent selection from the population
//! - [`Crossover`]: offspring generation from the parents
//! - [`SurvivalSelection`]: replacement of parent slots by family members
//!
//! # Key Types
//!
//! - [`RealGaConfig`]: dimension, population size, offspring count, direction
//! - [`GenerationController`]: the `make_offspring → next_generation` cycle
//! - [`UndxMgg`] / [`RexJgg`]: ready-made strategy combinations
//!
//! # References
//!
//! - Ono & Kobayashi (1997), "A Real-coded Genetic Algorithm for Function
//!   Optimization Using Unimodal Normal Distribution Crossover"
//! - Satoh, Yamamura & Kobayashi (1996), "Minimal Generation Gap Model for
//!   GAs Considering Both Exploration and Exploitation"
//! - Akimoto, Hasada, Sakuma, Ono & Kobayashi (2007), "Generation Alternation
//!   Model for Real-coded GA Using Multi-parent: Proposal and Evaluation of
//!   Just Generation Gap (JGG)"

mod config;
mod controller;
mod operators;
mod selection;
mod survival;
mod types;

pub use config::RealGaConfig;
pub use controller::{ControllerState, GenerationController, RexJgg, UndxMgg};
pub use operators::{DegenerateAxis, Rex, Undx};
pub use selection::RandomWithoutReplacement;
pub use survival::{BestAndRankBasedRoulette, JggBestKids};
pub use types::{Crossover, ReproductionSelection, SurvivalSelection};
