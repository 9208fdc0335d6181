//! Real-coded genetic algorithms for continuous search spaces.
//!
//! Provides generational-gap evolutionary engines over `n`-dimensional real
//! vectors:
//!
//! - **UNDX + MGG**: Unimodal Normal Distribution Crossover with the
//!   Minimal Generation Gap model. Two parents span a primary axis, further
//!   parents set the orthogonal spread, and only two population slots change
//!   per generation.
//! - **REX + JGG**: Real-coded Ensemble Crossover with the Just Generation
//!   Gap model. `n + 1` parents are replaced by their best offspring.
//!
//! # Architecture
//!
//! The engine owns selection, recombination, and survival. Objective
//! evaluation, population bootstrapping, and termination are left to the
//! caller, which evaluates every solution handed out by
//! [`GenerationController::initialize`](ga::GenerationController::initialize)
//! and [`GenerationController::make_offspring`](ga::GenerationController::make_offspring).
//!
//! - [`solution`]: candidates, containers, and ordering
//! - [`ga`]: configuration, strategy traits, operators, and the controller
//! - [`random`]: the random source capability
//! - [`error`]: the crate error type

pub mod error;
pub mod ga;
pub mod random;
pub mod solution;

pub use error::{RealGaError, Result};
