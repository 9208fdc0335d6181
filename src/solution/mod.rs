//! Candidate solutions and the containers the GA operates on.
//!
//! - [`Solution`]: a real vector with an evaluation value and a [`Status`]
//! - [`SolutionSet`]: slot-reusing collection used as population, parent
//!   set, and offspring set
//! - [`EvaluationComparator`]: best-first order under minimization or
//!   maximization

mod comparator;
mod set;
mod types;

pub use comparator::EvaluationComparator;
pub use set::SolutionSet;
pub use types::{Solution, Status};
