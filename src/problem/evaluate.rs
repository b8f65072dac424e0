//! Population-level evaluation.

use super::types::MultiObjectiveProblem;
use crate::error::ParetoError;
#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Evaluates every individual, returning one objective vector per individual
/// in population order.
///
/// Individuals shorter than [`MultiObjectiveProblem::min_dimensions`] are
/// rejected with [`ParetoError::Dimension`] before the problem sees them.
/// Stops at the first individual whose evaluation fails.
///
/// # Example
///
/// ```
/// use u_pareto::problem::{evaluate_population, Zdt4};
///
/// let population = vec![vec![0.0, 0.0], vec![1.0, 0.0]];
/// let objectives = evaluate_population(&Zdt4, &population).unwrap();
/// assert_eq!(objectives, vec![vec![0.0, 1.0], vec![1.0, 0.0]]);
/// ```
pub fn evaluate_population<P, X>(problem: &P, population: &[X]) -> Result<Vec<Vec<f64>>, ParetoError>
where
    P: MultiObjectiveProblem + ?Sized,
    X: AsRef<[f64]>,
{
    population
        .iter()
        .map(|x| evaluate_one(problem, x.as_ref()))
        .collect()
}

/// Parallel counterpart of [`evaluate_population`].
///
/// Produces the same objective vectors in the same order. When several
/// individuals fail, which error is reported is unspecified.
#[cfg(feature = "parallel")]
pub fn evaluate_population_par<P, X>(
    problem: &P,
    population: &[X],
) -> Result<Vec<Vec<f64>>, ParetoError>
where
    P: MultiObjectiveProblem + ?Sized,
    X: AsRef<[f64]> + Sync,
{
    population
        .par_iter()
        .map(|x| evaluate_one(problem, x.as_ref()))
        .collect()
}

fn evaluate_one<P>(problem: &P, x: &[f64]) -> Result<Vec<f64>, ParetoError>
where
    P: MultiObjectiveProblem + ?Sized,
{
    let required = problem.min_dimensions();
    if x.len() < required {
        return Err(ParetoError::Dimension {
            required,
            actual: x.len(),
        });
    }
    problem.evaluate(x)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::problem::Zdt4;

    /// Sums the first three variables; indexes without checking the length.
    struct SumOfThree;

    impl MultiObjectiveProblem for SumOfThree {
        fn name(&self) -> &str {
            "SUM3"
        }

        fn num_objectives(&self) -> usize {
            1
        }

        fn min_dimensions(&self) -> usize {
            3
        }

        fn evaluate(&self, x: &[f64]) -> Result<Vec<f64>, ParetoError> {
            Ok(vec![x[0] + x[1] + x[2]])
        }
    }

    #[test]
    fn test_preserves_order() {
        let population = vec![vec![0.1, 0.0], vec![0.9, 0.0], vec![0.4, 0.0]];
        let objectives = evaluate_population(&Zdt4, &population).unwrap();
        let f1: Vec<f64> = objectives.iter().map(|o| o[0]).collect();
        assert_eq!(f1, vec![0.1, 0.9, 0.4]);
    }

    #[test]
    fn test_first_error_wins() {
        let population = vec![vec![0.1, 0.0], vec![0.5], vec![-1.0, 0.0]];
        assert!(matches!(
            evaluate_population(&Zdt4, &population),
            Err(ParetoError::Dimension { actual: 1, .. })
        ));
    }

    #[test]
    fn test_min_dimensions_checked_before_evaluate() {
        let population = vec![vec![1.0, 2.0, 3.0], vec![1.0, 2.0]];
        assert_eq!(
            evaluate_population(&SumOfThree, &population),
            Err(ParetoError::Dimension {
                required: 3,
                actual: 2
            })
        );
        assert_eq!(
            evaluate_population(&SumOfThree, &[[1.0, 2.0, 3.0, 4.0]]).unwrap(),
            vec![vec![6.0]]
        );
    }

    #[test]
    fn test_empty_population() {
        let population: Vec<Vec<f64>> = Vec::new();
        assert!(evaluate_population(&Zdt4, &population).unwrap().is_empty());
    }

    #[test]
    fn test_dyn_problem() {
        let problem: Box<dyn MultiObjectiveProblem> = Box::new(Zdt4);
        let objectives = evaluate_population(problem.as_ref(), &[[0.5, 0.0]]).unwrap();
        assert_eq!(objectives.len(), 1);
    }

    #[cfg(feature = "parallel")]
    #[test]
    fn test_parallel_matches_sequential() {
        let population: Vec<Vec<f64>> = (0..200)
            .map(|i| vec![i as f64 / 200.0, (i % 7) as f64 - 3.0, 0.5])
            .collect();
        let seq = evaluate_population(&Zdt4, &population).unwrap();
        let par = evaluate_population_par(&Zdt4, &population).unwrap();
        assert_eq!(seq, par);
    }

    #[cfg(feature = "parallel")]
    #[test]
    fn test_parallel_checks_min_dimensions() {
        let population = vec![vec![1.0]; 4];
        assert!(matches!(
            evaluate_population_par(&SumOfThree, &population),
            Err(ParetoError::Dimension { required: 3, actual: 1 })
        ));
    }
}
