//! Sampler configuration.

use crate::error::ParetoError;

/// Configuration for Latin hypercube sampling.
///
/// # Defaults
///
/// ```
/// use u_pareto::sampling::SamplingConfig;
///
/// let config = SamplingConfig::default();
/// assert_eq!(config.population_size, 100);
/// assert!(config.lower_bounds.is_empty());
/// ```
///
/// # Builder Pattern
///
/// ```
/// use u_pareto::sampling::SamplingConfig;
///
/// let config = SamplingConfig::default()
///     .with_population_size(50)
///     .with_bounds(vec![0.0, -5.0], vec![1.0, 5.0])
///     .with_seed(42);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SamplingConfig {
    /// Number of individuals to sample.
    pub population_size: usize,

    /// Lower bound of each dimension.
    pub lower_bounds: Vec<f64>,

    /// Upper bound of each dimension.
    pub upper_bounds: Vec<f64>,

    /// Random seed for reproducibility.
    ///
    /// `None` uses a random seed.
    pub seed: Option<u64>,
}

impl Default for SamplingConfig {
    fn default() -> Self {
        Self {
            population_size: 100,
            lower_bounds: Vec::new(),
            upper_bounds: Vec::new(),
            seed: None,
        }
    }
}

impl SamplingConfig {
    /// Sets the population size.
    pub fn with_population_size(mut self, n: usize) -> Self {
        self.population_size = n;
        self
    }

    /// Sets the per-dimension bounds.
    pub fn with_bounds(mut self, lower: Vec<f64>, upper: Vec<f64>) -> Self {
        self.lower_bounds = lower;
        self.upper_bounds = upper;
        self
    }

    /// Sets the random seed for reproducibility.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Number of decision variables.
    pub fn dimensions(&self) -> usize {
        self.lower_bounds.len()
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), ParetoError> {
        validate_bounds(self.population_size, &self.lower_bounds, &self.upper_bounds)
    }
}

pub(super) fn validate_bounds(n: usize, lower: &[f64], upper: &[f64]) -> Result<(), ParetoError> {
    if n < 1 {
        return Err(ParetoError::Configuration(
            "population_size must be at least 1".into(),
        ));
    }
    if lower.len() != upper.len() {
        return Err(ParetoError::Configuration(format!(
            "lower bounds ({}) and upper bounds ({}) differ in length",
            lower.len(),
            upper.len()
        )));
    }
    for (d, (&lo, &hi)) in lower.iter().zip(upper).enumerate() {
        if !lo.is_finite() || !hi.is_finite() {
            return Err(ParetoError::Configuration(format!(
                "bounds of dimension {d} must be finite"
            )));
        }
        if lo > hi {
            return Err(ParetoError::Configuration(format!(
                "lower bound {lo} exceeds upper bound {hi} in dimension {d}"
            )));
        }
    }
    Ok(())
}
