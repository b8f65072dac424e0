//! The problem trait.

use crate::error::ParetoError;

/// A multi-objective minimization problem over real decision vectors.
///
/// # Thread Safety
///
/// `MultiObjectiveProblem` must be `Send + Sync` because populations may be
/// evaluated in parallel using rayon.
pub trait MultiObjectiveProblem: Send + Sync {
    /// Canonical problem name, as used by the registry.
    fn name(&self) -> &str;

    /// Number of objectives produced by [`evaluate`](Self::evaluate).
    fn num_objectives(&self) -> usize;

    /// Smallest decision-vector length the problem accepts.
    fn min_dimensions(&self) -> usize {
        1
    }

    /// Evaluates one decision vector.
    ///
    /// Lower objective values are better.
    fn evaluate(&self, x: &[f64]) -> Result<Vec<f64>, ParetoError>;
}
