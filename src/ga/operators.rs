//! Real-coded crossover operators.
//!
//! Both operators sample offspring around the parents' distribution in
//! continuous space. Offspring are fresh, unevaluated copies of the offspring
//! set's template; evaluation is the caller's job.
//!
//! # Crossover Operators
//!
//! - [`Undx`]: Unimodal Normal Distribution Crossover, 3 or more parents
//! - [`Rex`]: Real-coded Ensemble Crossover, `n + 1` parents by default
//!
//! # References
//!
//! - Ono & Kobayashi (1997), "A Real-coded Genetic Algorithm for Function
//!   Optimization Using Unimodal Normal Distribution Crossover"
//! - Kita, Ono & Kobayashi (1999), "Multi-parental extension of the unimodal
//!   normal distribution crossover for real-coded genetic algorithms"
//! - Kobayashi (2009), "The Frontiers of Real-coded Genetic Algorithms"

use super::types::Crossover;
use crate::error::{RealGaError, Result};
use crate::random::RandomSource;
use crate::solution::SolutionSet;

// ============================================================================
// UNDX
// ============================================================================

/// Unimodal Normal Distribution Crossover (Ono–Kobayashi form).
///
/// # Algorithm
///
/// 1. `p1 = parents[0]`, `p2 = parents[1]` form the primary pair; midpoint
///    `m = (p1 + p2)/2`, primary axis `d = p2 - p1`
/// 2. The secondary spread `D` is the mean distance of `parents[2..]` from
///    the line through `p1` and `p2`
/// 3. Each child is `m + ξ·d + D·t⊥` with `ξ ~ N(0, α²)`, where `t` has `n`
///    independent `N(0, β²)` components and `t⊥` is `t` with its component
///    along `d` removed
///
/// `t⊥` is an isotropic Gaussian on the complement of `d`, the same
/// distribution as a sum of `n - 1` orthonormal complement directions. Each
/// child consumes `n + 1` normal draws: `ξ` first, then `t_1..t_n`.
///
/// When the primary parents coincide the axis is undefined; see
/// [`DegenerateAxis`] for the two available policies.
///
/// # Examples
///
/// ```
/// use u_realcoded::ga::{Crossover, Undx};
///
/// let undx = Undx::default();
/// assert_eq!(undx.no_of_parents(10), 3);
/// assert!((undx.beta(4) - 0.175).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Undx {
    alpha: f64,
    beta: Option<f64>,
    no_of_parents: usize,
    degenerate_axis: DegenerateAxis,
}

/// What UNDX does when the two primary parents coincide.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DegenerateAxis {
    /// The primary term vanishes and the whole space is treated as
    /// secondary: `D` becomes the mean distance of the secondary parents
    /// from the common point and `t` is used without projection. The draw
    /// count per child is unchanged.
    #[default]
    Isotropic,
    /// Fail with [`DegenerateParents`](RealGaError::DegenerateParents).
    Fail,
}

impl Default for Undx {
    fn default() -> Self {
        Self {
            alpha: 0.5,
            beta: None,
            no_of_parents: 3,
            degenerate_axis: DegenerateAxis::default(),
        }
    }
}

impl Undx {
    /// Sets the standard deviation scale along the primary axis.
    pub fn with_alpha(mut self, alpha: f64) -> Self {
        self.alpha = alpha.max(0.0);
        self
    }

    /// Fixes the secondary standard deviation scale.
    ///
    /// By default it is `0.35 / sqrt(n)`.
    pub fn with_beta(mut self, beta: f64) -> Self {
        self.beta = Some(beta.max(0.0));
        self
    }

    /// Sets the parent count (at least 3).
    ///
    /// Parents beyond the primary pair all contribute to the secondary spread.
    pub fn with_no_of_parents(mut self, k: usize) -> Self {
        self.no_of_parents = k.max(3);
        self
    }

    pub fn with_degenerate_axis(mut self, policy: DegenerateAxis) -> Self {
        self.degenerate_axis = policy;
        self
    }

    pub fn alpha(&self) -> f64 {
        self.alpha
    }

    /// Secondary scale for a `dimension`-space.
    pub fn beta(&self, dimension: usize) -> f64 {
        self.beta
            .unwrap_or_else(|| 0.35 / (dimension.max(1) as f64).sqrt())
    }
}

impl Crossover for Undx {
    fn no_of_parents(&self, _dimension: usize) -> usize {
        self.no_of_parents
    }

    fn make_offspring<R: RandomSource + ?Sized>(
        &self,
        parents: &SolutionSet,
        no_of_kids: usize,
        kids: &mut SolutionSet,
        rng: &mut R,
    ) -> Result<()> {
        if parents.len() < 3 {
            return Err(RealGaError::NotEnoughParents {
                required: 3,
                found: parents.len(),
            });
        }
        let n = check_dimensions(parents, kids)?;

        let p1 = parents[0].vector();
        let p2 = parents[1].vector();
        let d: Vec<f64> = p1.iter().zip(p2).map(|(a, b)| b - a).collect();
        let midpoint: Vec<f64> = p1.iter().zip(p2).map(|(a, b)| 0.5 * (a + b)).collect();
        let d_norm2 = dot(&d, &d);

        let unit_axis = if d_norm2 > 0.0 && d_norm2.is_finite() {
            let norm = d_norm2.sqrt();
            Some(d.iter().map(|x| x / norm).collect::<Vec<f64>>())
        } else if d_norm2 == 0.0 && self.degenerate_axis == DegenerateAxis::Isotropic {
            tracing::debug!("undx primary parents coincide, sampling isotropically");
            None
        } else {
            return Err(RealGaError::DegenerateParents);
        };

        // Distance from the primary line, or from p1 when the line collapsed.
        let secondary = &parents.as_slice()[2..];
        let spread = secondary
            .iter()
            .map(|p| {
                let v: Vec<f64> = p.vector().iter().zip(p1).map(|(x, a)| x - a).collect();
                let along = if d_norm2 > 0.0 { dot(&v, &d) } else { 0.0 };
                let off_axis = if d_norm2 > 0.0 { along * along / d_norm2 } else { 0.0 };
                (dot(&v, &v) - off_axis).max(0.0).sqrt()
            })
            .sum::<f64>()
            / secondary.len() as f64;

        let beta = self.beta(n);
        tracing::trace!(axis_length = d_norm2.sqrt(), spread, no_of_kids, "undx");

        kids.clear();
        let mut t = vec![0.0; n];
        for _ in 0..no_of_kids {
            let xi = self.alpha * rng.standard_normal();
            for x in t.iter_mut() {
                *x = beta * rng.standard_normal();
            }
            if let Some(u) = &unit_axis {
                project_out(&mut t, u);
            }
            let child = kids.push_template().vector_mut();
            for k in 0..n {
                child[k] = midpoint[k] + xi * d[k] + spread * t[k];
            }
        }
        Ok(())
    }
}

// ============================================================================
// REX
// ============================================================================

/// Real-coded Ensemble Crossover.
///
/// With parent centroid `g`, each child is `g + Σ ξ_i·(p_i - g)` where
/// `ξ_i ~ N(0, 1/n_p)` and `n_p` is the number of parents. The offspring
/// distribution keeps the parents' mean and covariance.
///
/// The parent count defaults to `n + 1`. Each child consumes `n_p` normal
/// draws.
///
/// # Examples
///
/// ```
/// use u_realcoded::ga::{Crossover, Rex};
///
/// assert_eq!(Rex::default().no_of_parents(20), 21);
/// assert_eq!(Rex::default().with_no_of_parents(5).no_of_parents(20), 5);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Rex {
    no_of_parents: Option<usize>,
}

impl Rex {
    /// Fixes the parent count (at least 2) instead of `n + 1`.
    pub fn with_no_of_parents(mut self, k: usize) -> Self {
        self.no_of_parents = Some(k.max(2));
        self
    }
}

impl Crossover for Rex {
    fn no_of_parents(&self, dimension: usize) -> usize {
        self.no_of_parents.unwrap_or(dimension + 1)
    }

    fn make_offspring<R: RandomSource + ?Sized>(
        &self,
        parents: &SolutionSet,
        no_of_kids: usize,
        kids: &mut SolutionSet,
        rng: &mut R,
    ) -> Result<()> {
        let np = parents.len();
        if np < 2 {
            return Err(RealGaError::NotEnoughParents {
                required: 2,
                found: np,
            });
        }
        let n = check_dimensions(parents, kids)?;

        let mut centroid = vec![0.0; n];
        for p in parents {
            for (c, x) in centroid.iter_mut().zip(p.vector()) {
                *c += x;
            }
        }
        centroid.iter_mut().for_each(|c| *c /= np as f64);

        let sigma = (1.0 / np as f64).sqrt();
        tracing::trace!(parents = np, no_of_kids, "rex");

        kids.clear();
        for _ in 0..no_of_kids {
            let child = kids.push_template().vector_mut();
            child.copy_from_slice(&centroid);
            for p in parents {
                let xi = sigma * rng.standard_normal();
                for k in 0..n {
                    child[k] += xi * (p.vector()[k] - centroid[k]);
                }
            }
        }
        Ok(())
    }
}

// ============================================================================
// Helpers
// ============================================================================

/// Common dimension of the parents, which must match the offspring template.
fn check_dimensions(parents: &SolutionSet, kids: &SolutionSet) -> Result<usize> {
    let n = kids.template().dimension();
    match parents.iter().find(|p| p.dimension() != n) {
        Some(p) => Err(RealGaError::DimensionMismatch {
            expected: n,
            found: p.dimension(),
        }),
        None => Ok(n),
    }
}

fn dot(a: &[f64], b: &[f64]) -> f64 {
    a.iter().zip(b).map(|(x, y)| x * y).sum()
}

/// Subtracts the component of `v` along the unit vector `u`.
fn project_out(v: &mut [f64], u: &[f64]) {
    let c = dot(v, u);
    for (x, y) in v.iter_mut().zip(u) {
        *x -= c * y;
    }
}

// ============================================================================
// Tests
// ============================================================================
