//! A single real-valued candidate solution.

/// Evaluation status of a [`Solution`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Status {
    /// Not yet evaluated. Every freshly created offspring starts here.
    #[default]
    Unevaluated,
    /// Evaluated and satisfies the problem's constraints.
    Feasible,
    /// Evaluated but violates the problem's constraints.
    Infeasible,
}

/// A candidate: a real vector, its evaluation value, and a status.
///
/// Solutions are never created individually by the engine; slots of a
/// [`SolutionSet`](super::SolutionSet) are cloned from a template and then
/// overwritten by the crossover (vector) and the external evaluator
/// (value and status).
///
/// # Examples
///
/// ```
/// use u_realcoded::solution::{Solution, Status};
///
/// let mut s = Solution::new(3);
/// s.vector_mut().copy_from_slice(&[1.0, 2.0, 3.0]);
/// s.set_evaluation(14.0, Status::Feasible);
/// assert_eq!(s.evaluation_value(), 14.0);
/// assert!(s.is_evaluated());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Solution {
    vector: Vec<f64>,
    evaluation_value: f64,
    status: Status,
}

impl Solution {
    /// Creates an unevaluated solution at the origin of a `dimension`-space.
    pub fn new(dimension: usize) -> Self {
        Self {
            vector: vec![0.0; dimension],
            evaluation_value: 0.0,
            status: Status::Unevaluated,
        }
    }

    /// Creates an unevaluated solution with the given coordinates.
    pub fn from_vector(vector: Vec<f64>) -> Self {
        Self {
            vector,
            evaluation_value: 0.0,
            status: Status::Unevaluated,
        }
    }

    pub fn dimension(&self) -> usize {
        self.vector.len()
    }

    pub fn vector(&self) -> &[f64] {
        &self.vector
    }

    pub fn vector_mut(&mut self) -> &mut [f64] {
        &mut self.vector
    }

    pub fn evaluation_value(&self) -> f64 {
        self.evaluation_value
    }

    pub fn set_evaluation_value(&mut self, value: f64) {
        self.evaluation_value = value;
    }

    pub fn status(&self) -> Status {
        self.status
    }

    /// Records the result of an external evaluation.
    pub fn set_evaluation(&mut self, value: f64, status: Status) {
        self.evaluation_value = value;
        self.status = status;
    }

    pub fn is_evaluated(&self) -> bool {
        self.status != Status::Unevaluated
    }

    /// Overwrites this solution with `other`, reusing the vector allocation.
    pub fn copy_from(&mut self, other: &Solution) {
        self.vector.clone_from(&other.vector);
        self.evaluation_value = other.evaluation_value;
        self.status = other.status;
    }
}
