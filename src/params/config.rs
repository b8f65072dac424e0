//! Run parameters.
//!
//! [`OptimizationParameters`] holds everything needed to sample, evaluate
//! and classify one population. The generational fields (offspring size,
//! generation count, operator rates) are carried for reporting only.

use crate::error::ParameterError;
use crate::problem::Zdt4;
use crate::sampling::SamplingConfig;

/// Parameters for one sampling/evaluation/classification run.
///
/// # Defaults
///
/// The default problem is ZDT4 over its canonical 10-variable domain.
///
/// ```
/// use u_pareto::params::OptimizationParameters;
///
/// let params = OptimizationParameters::default();
/// assert_eq!(params.problem_name, "ZDT4");
/// assert_eq!(params.population_size, 100);
/// assert_eq!(params.random_seed, 42);
/// assert_eq!(params.dimensions(), 10);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OptimizationParameters {
    /// Problem name, resolved through the problem registry.
    pub problem_name: String,

    /// Number of individuals to sample.
    pub population_size: usize,

    pub offspring_population_size: usize,
    pub max_generations: usize,
    pub crossover_probability: f64,
    pub mutation_probability: f64,

    /// SBX distribution index.
    pub crossover_distribution_index: f64,

    /// Polynomial mutation distribution index.
    pub mutation_distribution_index: f64,

    /// Seed of the sampler's RNG.
    pub random_seed: u64,

    pub lower_bounds: Vec<f64>,
    pub upper_bounds: Vec<f64>,
    pub variable_names: Vec<String>,
    pub objective_names: Vec<String>,

    /// Whether to evaluate and classify in parallel using rayon.
    ///
    /// Ignored unless the `parallel` feature is enabled.
    pub parallel: bool,
}

impl Default for OptimizationParameters {
    fn default() -> Self {
        let (lower_bounds, upper_bounds) = Zdt4::canonical_bounds(Zdt4::DEFAULT_DIMENSIONS);
        Self {
            problem_name: Zdt4::NAME.to_string(),
            population_size: 100,
            offspring_population_size: 100,
            max_generations: 250,
            crossover_probability: 0.9,
            mutation_probability: 0.1,
            crossover_distribution_index: 15.0,
            mutation_distribution_index: 20.0,
            random_seed: 42,
            lower_bounds,
            upper_bounds,
            variable_names: default_variable_names(Zdt4::DEFAULT_DIMENSIONS),
            objective_names: vec!["f1".to_string(), "f2".to_string()],
            parallel: false,
        }
    }
}

impl OptimizationParameters {
    /// Sets the problem name.
    pub fn with_problem(mut self, name: impl Into<String>) -> Self {
        self.problem_name = name.into();
        self
    }

    /// Sets the population size.
    pub fn with_population_size(mut self, n: usize) -> Self {
        self.population_size = n;
        self
    }

    /// Sets the per-variable bounds and resets the variable names to `x1..xD`.
    pub fn with_bounds(mut self, lower: Vec<f64>, upper: Vec<f64>) -> Self {
        self.variable_names = default_variable_names(lower.len());
        self.lower_bounds = lower;
        self.upper_bounds = upper;
        self
    }

    /// Sets the variable names.
    pub fn with_variable_names(mut self, names: Vec<String>) -> Self {
        self.variable_names = names;
        self
    }

    /// Sets the objective names.
    pub fn with_objective_names(mut self, names: Vec<String>) -> Self {
        self.objective_names = names;
        self
    }

    /// Sets the random seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.random_seed = seed;
        self
    }

    /// Enables or disables parallel evaluation and classification.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Number of decision variables.
    pub fn dimensions(&self) -> usize {
        self.lower_bounds.len().max(self.upper_bounds.len())
    }

    /// The sampler configuration for these parameters.
    pub fn sampling_config(&self) -> SamplingConfig {
        SamplingConfig::default()
            .with_population_size(self.population_size)
            .with_bounds(self.lower_bounds.clone(), self.upper_bounds.clone())
            .with_seed(self.random_seed)
    }

    /// Validates the parameters.
    ///
    /// Bound lengths are left to the sampler, which reports a mismatch as a
    /// configuration error.
    pub fn validate(&self) -> Result<(), ParameterError> {
        if self.problem_name.trim().is_empty() {
            return Err(ParameterError::MissingProblem);
        }
        if self.population_size == 0 {
            return Err(ParameterError::ZeroPopulation);
        }
        if self.lower_bounds.len() == self.upper_bounds.len() {
            if let Some(index) = self
                .lower_bounds
                .iter()
                .zip(&self.upper_bounds)
                .position(|(lo, hi)| lo > hi)
            {
                return Err(ParameterError::InvertedBounds { index });
            }
        }
        Ok(())
    }
}

/// Names `x1..x{n}`.
pub(crate) fn default_variable_names(n: usize) -> Vec<String> {
    (1..=n).map(|i| format!("x{i}")).collect()
}
