//! Total order over solutions by evaluation value.

use super::types::{Solution, Status};
use std::cmp::Ordering;

/// Orders solutions best-first.
///
/// The direction (ascending for minimization, descending for maximization)
/// is fixed at construction. Ranking, from best to worst:
///
/// 1. feasible solutions, by evaluation value in the configured direction
/// 2. infeasible solutions, likewise
/// 3. unevaluated solutions
///
/// A `NaN` evaluation value ranks after every number in its status group.
///
/// # Examples
///
/// ```
/// use std::cmp::Ordering;
/// use u_realcoded::solution::{EvaluationComparator, Solution, Status};
///
/// let mut a = Solution::new(1);
/// let mut b = Solution::new(1);
/// a.set_evaluation(1.0, Status::Feasible);
/// b.set_evaluation(2.0, Status::Feasible);
///
/// assert_eq!(EvaluationComparator::minimizing().compare(&a, &b), Ordering::Less);
/// assert_eq!(EvaluationComparator::maximizing().compare(&a, &b), Ordering::Greater);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EvaluationComparator {
    minimization: bool,
}

impl EvaluationComparator {
    pub fn new(minimization: bool) -> Self {
        Self { minimization }
    }

    pub fn minimizing() -> Self {
        Self::new(true)
    }

    pub fn maximizing() -> Self {
        Self::new(false)
    }

    pub fn is_minimization(&self) -> bool {
        self.minimization
    }

    /// `Less` means `a` is better than `b`.
    pub fn compare(&self, a: &Solution, b: &Solution) -> Ordering {
        status_rank(a.status())
            .cmp(&status_rank(b.status()))
            .then_with(|| {
                if a.status() == Status::Unevaluated {
                    Ordering::Equal
                } else {
                    self.compare_values(a.evaluation_value(), b.evaluation_value())
                }
            })
    }

    /// Whether `a` is strictly better than `b`.
    pub fn is_better(&self, a: &Solution, b: &Solution) -> bool {
        self.compare(a, b) == Ordering::Less
    }

    /// Index of the best solution, the earliest one on ties. `None` if empty.
    pub fn best_index(&self, solutions: &[Solution]) -> Option<usize> {
        let mut best: Option<usize> = None;
        for (i, s) in solutions.iter().enumerate() {
            match best {
                Some(b) if !self.is_better(s, &solutions[b]) => {}
                _ => best = Some(i),
            }
        }
        best
    }

    fn compare_values(&self, a: f64, b: f64) -> Ordering {
        match (a.is_nan(), b.is_nan()) {
            (true, true) => Ordering::Equal,
            (true, false) => Ordering::Greater,
            (false, true) => Ordering::Less,
            (false, false) => {
                let ord = a.partial_cmp(&b).unwrap_or(Ordering::Equal);
                if self.minimization {
                    ord
                } else {
                    ord.reverse()
                }
            }
        }
    }
}

fn status_rank(status: Status) -> u8 {
    match status {
        Status::Feasible => 0,
        Status::Infeasible => 1,
        Status::Unevaluated => 2,
    }
}
