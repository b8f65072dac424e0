//! Problem lookup by name.

use super::evaluate::evaluate_population;
use super::types::MultiObjectiveProblem;
use super::zdt4::Zdt4;
use crate::error::ParetoError;

/// Problems with a known name. Only those with an entry in
/// [`resolve_problem`] can be evaluated.
const RECORDED_PROBLEMS: &[&str] = &[Zdt4::NAME, "CFD"];

/// Strips all whitespace and upper-cases ASCII letters.
///
/// ```
/// use u_pareto::problem::canonicalize_problem_name;
///
/// assert_eq!(canonicalize_problem_name(" zd t4 "), "ZDT4");
/// ```
pub fn canonicalize_problem_name(name: &str) -> String {
    name.chars()
        .filter(|c| !c.is_whitespace())
        .map(|c| c.to_ascii_uppercase())
        .collect()
}

/// Returns `true` if the problem name is known, whether or not it can be evaluated.
pub fn is_problem_recorded(name: &str) -> bool {
    let canonical = canonicalize_problem_name(name);
    RECORDED_PROBLEMS.contains(&canonical.as_str())
}

/// Returns `true` if the problem name resolves to an evaluator.
pub fn has_problem_implementation(name: &str) -> bool {
    resolve_problem(name).is_ok()
}

/// Resolves a problem name to its evaluator.
///
/// # Errors
///
/// - [`ParetoError::UnimplementedProblem`] for recorded names without an evaluator
/// - [`ParetoError::UnknownProblem`] for anything else
pub fn resolve_problem(name: &str) -> Result<Box<dyn MultiObjectiveProblem>, ParetoError> {
    let canonical = canonicalize_problem_name(name);
    match canonical.as_str() {
        Zdt4::NAME => Ok(Box::new(Zdt4)),
        other if RECORDED_PROBLEMS.contains(&other) => {
            Err(ParetoError::UnimplementedProblem(name.to_string()))
        }
        _ => Err(ParetoError::UnknownProblem(name.to_string())),
    }
}

/// Resolves `name` and evaluates the population against it.
pub fn evaluate_problem_population<X: AsRef<[f64]>>(
    name: &str,
    population: &[X],
) -> Result<Vec<Vec<f64>>, ParetoError> {
    let problem = resolve_problem(name)?;
    evaluate_population(problem.as_ref(), population)
}
