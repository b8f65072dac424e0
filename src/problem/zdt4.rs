//! ZDT4 benchmark.

use super::types::MultiObjectiveProblem;
use crate::error::ParetoError;
use std::f64::consts::PI;

/// The ZDT4 two-objective benchmark.
///
/// ```text
/// f1 = x[0]
/// g  = 1 + 10 (D - 1) + Σ_{i=1}^{D-1} (x[i]² - 10 cos(4π x[i]))
/// h  = 1 - sqrt(f1 / g)
/// f2 = g h
/// ```
///
/// The auxiliary term `g` is a shifted Rastrigin function, which gives ZDT4
/// `21^9` local Pareto-optimal fronts on the canonical 10-variable domain
/// `[0, 1] × [-5, 5]^9`. The global front is reached at `x[1..] = 0`, where
/// `g = 1` and `f2 = 1 - sqrt(f1)`.
///
/// # Example
///
/// ```
/// use u_pareto::problem::{MultiObjectiveProblem, Zdt4};
///
/// let objectives = Zdt4.evaluate(&[0.25, 0.0, 0.0]).unwrap();
/// assert_eq!(objectives, vec![0.25, 0.5]);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Zdt4;

/// Intermediate terms of one ZDT4 evaluation.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Zdt4Terms {
    pub f1: f64,
    pub g: f64,
    pub h: f64,
    pub f2: f64,
}

impl Zdt4Terms {
    /// The objective vector `[f1, f2]`.
    pub fn objectives(&self) -> [f64; 2] {
        [self.f1, self.f2]
    }
}

impl Zdt4 {
    /// Canonical problem name.
    pub const NAME: &'static str = "ZDT4";

    /// Number of decision variables in the canonical formulation.
    pub const DEFAULT_DIMENSIONS: usize = 10;

    /// Canonical bounds for `dimensions` variables: `[0, 1]` for `x[0]`,
    /// `[-5, 5]` for the rest.
    pub fn canonical_bounds(dimensions: usize) -> (Vec<f64>, Vec<f64>) {
        let mut lower = vec![-5.0; dimensions];
        let mut upper = vec![5.0; dimensions];
        if dimensions > 0 {
            lower[0] = 0.0;
            upper[0] = 1.0;
        }
        (lower, upper)
    }

    /// Evaluates `x` and returns every intermediate term.
    ///
    /// # Errors
    ///
    /// - [`ParetoError::Dimension`] if `x.len() < 2`
    /// - [`ParetoError::Domain`] if `f1 / g` is negative or not finite, which
    ///   only happens outside the canonical domain
    pub fn evaluate_terms(&self, x: &[f64]) -> Result<Zdt4Terms, ParetoError> {
        if x.len() < 2 {
            return Err(ParetoError::Dimension {
                required: 2,
                actual: x.len(),
            });
        }

        let f1 = x[0];
        let g = 1.0
            + 10.0 * (x.len() - 1) as f64
            + x[1..]
                .iter()
                .map(|&xi| xi * xi - 10.0 * (4.0 * PI * xi).cos())
                .sum::<f64>();

        let ratio = f1 / g;
        if !ratio.is_finite() || ratio < 0.0 {
            return Err(ParetoError::Domain { ratio });
        }

        let h = 1.0 - ratio.sqrt();
        Ok(Zdt4Terms {
            f1,
            g,
            h,
            f2: g * h,
        })
    }
}

impl MultiObjectiveProblem for Zdt4 {
    fn name(&self) -> &str {
        Self::NAME
    }

    fn num_objectives(&self) -> usize {
        2
    }

    fn min_dimensions(&self) -> usize {
        2
    }

    fn evaluate(&self, x: &[f64]) -> Result<Vec<f64>, ParetoError> {
        self.evaluate_terms(x).map(|t| t.objectives().to_vec())
    }
}
