//! Sample → evaluate → classify, end to end.

use crate::error::ParetoError;
use crate::params::OptimizationParameters;
use crate::pareto::{self, ParetoFronts};
use crate::problem::{self, MultiObjectiveProblem};
use crate::sampling::{self, Population};

/// The evaluated and classified population of one run.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PipelineResult {
    /// Sampled decision vectors.
    pub population: Population,

    /// Objective vector of each individual, in population order.
    pub objectives: Vec<Vec<f64>>,

    /// Front membership and rank of each individual.
    pub fronts: ParetoFronts,
}

/// Samples a Latin hypercube population, evaluates it against the named
/// problem and sorts it into Pareto fronts.
///
/// # Errors
///
/// Any [`ParetoError`] raised by the sampler, the problem registry, the
/// evaluator or the classifier, unchanged.
///
/// # Example
///
/// ```
/// use u_pareto::params::OptimizationParameters;
/// use u_pareto::pipeline;
///
/// let params = OptimizationParameters::default().with_population_size(30);
/// let result = pipeline::run(&params).unwrap();
///
/// assert_eq!(result.population.len(), 30);
/// assert_eq!(result.fronts.ranks.len(), 30);
/// assert!(!result.fronts.first_front().is_empty());
/// ```
pub fn run(params: &OptimizationParameters) -> Result<PipelineResult, ParetoError> {
    let problem = problem::resolve_problem(&params.problem_name)?;
    run_with_problem(problem.as_ref(), params)
}

/// Like [`run`], with an explicit problem instead of a registry lookup.
pub fn run_with_problem<P>(
    problem: &P,
    params: &OptimizationParameters,
) -> Result<PipelineResult, ParetoError>
where
    P: MultiObjectiveProblem + ?Sized,
{
    let population = sampling::latin_hypercube(&params.sampling_config())?;
    let (objectives, fronts) = evaluate_and_sort(problem, &population, params.parallel)?;

    Ok(PipelineResult {
        population,
        objectives,
        fronts,
    })
}

#[cfg(feature = "parallel")]
fn evaluate_and_sort<P>(
    problem: &P,
    population: &[Vec<f64>],
    parallel: bool,
) -> Result<(Vec<Vec<f64>>, ParetoFronts), ParetoError>
where
    P: MultiObjectiveProblem + ?Sized,
{
    if parallel {
        let objectives = problem::evaluate_population_par(problem, population)?;
        let fronts = pareto::fast_non_dominated_sort_par(&objectives)?;
        Ok((objectives, fronts))
    } else {
        let objectives = problem::evaluate_population(problem, population)?;
        let fronts = pareto::fast_non_dominated_sort(&objectives)?;
        Ok((objectives, fronts))
    }
}

#[cfg(not(feature = "parallel"))]
fn evaluate_and_sort<P>(
    problem: &P,
    population: &[Vec<f64>],
    _parallel: bool,
) -> Result<(Vec<Vec<f64>>, ParetoFronts), ParetoError>
where
    P: MultiObjectiveProblem + ?Sized,
{
    let objectives = problem::evaluate_population(problem, population)?;
    let fronts = pareto::fast_non_dominated_sort(&objectives)?;
    Ok((objectives, fronts))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::problem::Zdt4;

    #[test]
    fn test_run_default_zdt4() {
        let params = OptimizationParameters::default().with_population_size(50);
        let result = run(&params).unwrap();

        assert_eq!(result.population.len(), 50);
        assert!(result.population.iter().all(|x| x.len() == 10));
        assert!(result.objectives.iter().all(|o| o.len() == 2));

        let mut members: Vec<usize> = result.fronts.fronts.concat();
        members.sort_unstable();
        assert_eq!(members, (0..50).collect::<Vec<_>>());
    }

    #[test]
    fn test_run_is_deterministic() {
        let params = OptimizationParameters::default()
            .with_population_size(20)
            .with_seed(5);
        assert_eq!(run(&params).unwrap(), run(&params).unwrap());
    }

    #[test]
    fn test_objectives_match_population() {
        let params = OptimizationParameters::default().with_population_size(10);
        let result = run(&params).unwrap();
        for (x, f) in result.population.iter().zip(&result.objectives) {
            assert_eq!(f, &Zdt4.evaluate(x).unwrap());
        }
    }

    #[test]
    fn test_unknown_problem() {
        let params = OptimizationParameters::default().with_problem("nope");
        assert!(matches!(run(&params), Err(ParetoError::UnknownProblem(_))));
    }

    #[test]
    fn test_unimplemented_problem() {
        let params = OptimizationParameters::default().with_problem("CFD");
        assert!(matches!(
            run(&params),
            Err(ParetoError::UnimplementedProblem(_))
        ));
    }

    #[test]
    fn test_bounds_mismatch_is_configuration_error() {
        let mut params = OptimizationParameters::default();
        params.upper_bounds.pop();
        assert!(matches!(run(&params), Err(ParetoError::Configuration(_))));
    }

    #[test]
    fn test_single_variable_is_dimension_error() {
        let params = OptimizationParameters::default().with_bounds(vec![0.0], vec![1.0]);
        assert!(matches!(
            run(&params),
            Err(ParetoError::Dimension { actual: 1, .. })
        ));
    }

    #[test]
    fn test_out_of_domain_bounds() {
        let params = OptimizationParameters::default().with_bounds(vec![-1.0, 0.0], vec![-0.5, 0.0]);
        assert!(matches!(run(&params), Err(ParetoError::Domain { .. })));
    }

    #[cfg(feature = "parallel")]
    #[test]
    fn test_parallel_matches_sequential() {
        let params = OptimizationParameters::default().with_population_size(120);
        let seq = run(&params).unwrap();
        let par = run(&params.clone().with_parallel(true)).unwrap();
        assert_eq!(seq, par);
    }
}
