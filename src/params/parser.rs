//! Parameter file reader.
//!
//! The format is line-oriented: `key value...`, whitespace separated, with
//! `#` starting a comment. Keys are case-insensitive.
//!
//! ```text
//! # ZDT4 run
//! problem            ZDT4
//! population_size    100
//! random_seed        42
//! ```

use super::config::{default_variable_names, OptimizationParameters};
use crate::error::ParameterError;
use crate::problem::{canonicalize_problem_name, is_problem_recorded, Zdt4};
use std::path::Path;
use std::str::FromStr;
use tracing::{debug, warn};

const ZDT4_OBJECTIVES: usize = 2;
const BOUND_TOLERANCE: f64 = 1e-9;

/// Reads and parses a parameter file.
pub fn load_parameters(path: impl AsRef<Path>) -> Result<OptimizationParameters, ParameterError> {
    let path = path.as_ref();
    debug!("Loading parameters from {}", path.display());
    let input = std::fs::read_to_string(path)?;
    parse_parameters(&input)
}

/// Parses parameter file contents.
///
/// Keys not present in the input keep their [`OptimizationParameters`]
/// defaults, except bounds and names, which start empty. A ZDT4 problem is
/// forced onto its canonical 10-variable, 2-objective formulation.
///
/// # Errors
///
/// - [`ParameterError::Parse`] / [`ParameterError::TokenCount`] for malformed lines
/// - [`ParameterError::CountMismatch`] when a list disagrees with a declared count
/// - [`ParameterError::MissingProblem`], [`ParameterError::ZeroPopulation`],
///   [`ParameterError::InvertedBounds`] from final validation
///
/// # Example
///
/// ```
/// use u_pareto::params::parse_parameters;
///
/// let params = parse_parameters("problem zdt4\npopulation_size 24 # small\n").unwrap();
/// assert_eq!(params.population_size, 24);
/// assert_eq!(params.dimensions(), 10);
/// ```
pub fn parse_parameters(input: &str) -> Result<OptimizationParameters, ParameterError> {
    let mut params = OptimizationParameters {
        problem_name: String::new(),
        lower_bounds: Vec::new(),
        upper_bounds: Vec::new(),
        variable_names: Vec::new(),
        objective_names: Vec::new(),
        ..OptimizationParameters::default()
    };
    let mut declared_variables = 0usize;
    let mut declared_objectives = 0usize;

    for (i, raw) in input.lines().enumerate() {
        let line = i + 1;
        let content = raw.split('#').next().unwrap_or_default();
        let mut tokens = content.split_whitespace();
        let Some(key) = tokens.next() else {
            continue;
        };
        let values: Vec<&str> = tokens.collect();
        let field = Field { key, line };

        match key.to_ascii_lowercase().as_str() {
            "problem" | "problem_name" => {
                let name = values.first().ok_or_else(|| field.count_error(1, 0))?;
                params.problem_name = (*name).to_string();
            }
            "num_variables" | "number_of_variables" => {
                declared_variables = field.single(&values)?;
            }
            "variable_names" => {
                field.ensure_count(&values, declared_variables)?;
                params.variable_names = values.iter().map(|s| s.to_string()).collect();
                if declared_variables == 0 {
                    declared_variables = params.variable_names.len();
                }
            }
            "variable_lower_bounds" | "lower_bounds" => {
                field.ensure_count(&values, declared_variables)?;
                params.lower_bounds = field.list(&values)?;
                if declared_variables == 0 {
                    declared_variables = params.lower_bounds.len();
                }
            }
            "variable_upper_bounds" | "upper_bounds" => {
                field.ensure_count(&values, declared_variables)?;
                params.upper_bounds = field.list(&values)?;
                if declared_variables == 0 {
                    declared_variables = params.upper_bounds.len();
                }
            }
            "num_objectives" | "number_of_objectives" => {
                declared_objectives = field.single(&values)?;
            }
            "objective_names" => {
                field.ensure_count(&values, declared_objectives)?;
                params.objective_names = values.iter().map(|s| s.to_string()).collect();
                if declared_objectives == 0 {
                    declared_objectives = params.objective_names.len();
                }
            }
            "population_size" | "parent_population_size" => {
                params.population_size = field.single(&values)?;
            }
            "offspring_population_size" => {
                params.offspring_population_size = field.single(&values)?;
            }
            "max_generations" | "max_generation" => {
                params.max_generations = field.single(&values)?;
            }
            "crossover_probability" => {
                params.crossover_probability = field.single(&values)?;
            }
            "mutation_probability" | "mutation_porbability" => {
                params.mutation_probability = field.single(&values)?;
            }
            "crossover_distribution_index" => {
                params.crossover_distribution_index = field.single(&values)?;
            }
            "mutation_distribution_index" => {
                params.mutation_distribution_index = field.single(&values)?;
            }
            "random_seed" => {
                params.random_seed = field.single(&values)?;
            }
            _ => warn!("Unrecognized parameter key '{}' on line {}", key, line),
        }
    }

    if canonicalize_problem_name(&params.problem_name) == Zdt4::NAME {
        apply_zdt4_defaults(&mut params, &mut declared_variables, &mut declared_objectives);
    }

    check_count("variable name", declared_variables, params.variable_names.len())?;
    check_count("lower bound", declared_variables, params.lower_bounds.len())?;
    check_count("upper bound", declared_variables, params.upper_bounds.len())?;
    check_count("objective name", declared_objectives, params.objective_names.len())?;

    params.validate()?;

    if params.variable_names.is_empty() && declared_variables != 0 {
        params.variable_names = default_variable_names(declared_variables);
    }

    if params.offspring_population_size != params.population_size {
        warn!(
            "Offspring population size ({}) differs from parent population size ({})",
            params.offspring_population_size, params.population_size
        );
    }
    if !is_problem_recorded(&params.problem_name) {
        warn!(
            "Problem '{}' is not recorded and cannot be evaluated",
            params.problem_name
        );
    }

    Ok(params)
}

/// An empty list is not checked; it means the key was never given.
fn check_count(what: &'static str, declared: usize, actual: usize) -> Result<(), ParameterError> {
    if actual != 0 && actual != declared {
        return Err(ParameterError::CountMismatch {
            what,
            declared,
            actual,
        });
    }
    Ok(())
}

/// Forces the canonical ZDT4 formulation, warning about each override.
fn apply_zdt4_defaults(
    params: &mut OptimizationParameters,
    declared_variables: &mut usize,
    declared_objectives: &mut usize,
) {
    let n = Zdt4::DEFAULT_DIMENSIONS;

    if *declared_variables != 0 && *declared_variables != n {
        warn!(
            "ZDT4 expects {} decision variables; overriding declared count of {}",
            n, declared_variables
        );
    }
    *declared_variables = n;

    if params.variable_names.len() != n {
        if !params.variable_names.is_empty() {
            warn!("Overriding ZDT4 variable names to x1..x{}", n);
        }
        params.variable_names = default_variable_names(n);
    }

    let (lower, upper) = Zdt4::canonical_bounds(n);
    if !bounds_match(&params.lower_bounds, &lower) {
        if !params.lower_bounds.is_empty() {
            warn!("Overriding ZDT4 lower bounds to [0,1] for x1 and [-5,5] for the rest");
        }
        params.lower_bounds = lower;
    }
    if !bounds_match(&params.upper_bounds, &upper) {
        if !params.upper_bounds.is_empty() {
            warn!("Overriding ZDT4 upper bounds to [0,1] for x1 and [-5,5] for the rest");
        }
        params.upper_bounds = upper;
    }

    if *declared_objectives != 0 && *declared_objectives != ZDT4_OBJECTIVES {
        warn!(
            "ZDT4 uses {} objectives; overriding declared count of {}",
            ZDT4_OBJECTIVES, declared_objectives
        );
    }
    *declared_objectives = ZDT4_OBJECTIVES;

    if params.objective_names.len() != ZDT4_OBJECTIVES {
        if !params.objective_names.is_empty() {
            warn!("Overriding ZDT4 objective names to f1 and f2");
        }
        params.objective_names = vec!["f1".to_string(), "f2".to_string()];
    }
}

fn bounds_match(actual: &[f64], expected: &[f64]) -> bool {
    actual.len() == expected.len()
        && actual
            .iter()
            .zip(expected)
            .all(|(a, e)| (a - e).abs() <= BOUND_TOLERANCE)
}

/// The key and line a group of values came from, for error reporting.
struct Field<'a> {
    key: &'a str,
    line: usize,
}

impl Field<'_> {
    fn count_error(&self, expected: usize, actual: usize) -> ParameterError {
        ParameterError::TokenCount {
            line: self.line,
            field: self.key.to_string(),
            expected,
            actual,
        }
    }

    fn ensure_count(&self, values: &[&str], expected: usize) -> Result<(), ParameterError> {
        if expected != 0 && values.len() != expected {
            return Err(self.count_error(expected, values.len()));
        }
        Ok(())
    }

    fn parse<T>(&self, token: &str) -> Result<T, ParameterError>
    where
        T: FromStr,
        T::Err: std::fmt::Display,
    {
        token.parse().map_err(|e: T::Err| ParameterError::Parse {
            line: self.line,
            field: self.key.to_string(),
            token: token.to_string(),
            reason: e.to_string(),
        })
    }

    fn single<T>(&self, values: &[&str]) -> Result<T, ParameterError>
    where
        T: FromStr,
        T::Err: std::fmt::Display,
    {
        match values {
            [token] => self.parse(token),
            _ => Err(self.count_error(1, values.len())),
        }
    }

    fn list(&self, values: &[&str]) -> Result<Vec<f64>, ParameterError> {
        values.iter().map(|token| self.parse(token)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const GENERIC: &str = "\
# custom problem
problem          CFD
num_variables    3
variable_names   a b c
lower_bounds     0 -1 -2
upper_bounds     1  1  2
num_objectives   2
objective_names  drag lift
population_size  20
offspring_population_size 20
max_generation   10
crossover_probability 0.8
mutation_porbability  0.05
crossover_distribution_index 10
mutation_distribution_index  30
random_seed      7
";

    #[test]
    fn test_parse_generic_problem() {
        let params = parse_parameters(GENERIC).unwrap();
        assert_eq!(params.problem_name, "CFD");
        assert_eq!(params.variable_names, vec!["a", "b", "c"]);
        assert_eq!(params.lower_bounds, vec![0.0, -1.0, -2.0]);
        assert_eq!(params.upper_bounds, vec![1.0, 1.0, 2.0]);
        assert_eq!(params.objective_names, vec!["drag", "lift"]);
        assert_eq!(params.population_size, 20);
        assert_eq!(params.offspring_population_size, 20);
        assert_eq!(params.max_generations, 10);
        assert!((params.crossover_probability - 0.8).abs() < 1e-12);
        assert!((params.mutation_probability - 0.05).abs() < 1e-12);
        assert!((params.crossover_distribution_index - 10.0).abs() < 1e-12);
        assert!((params.mutation_distribution_index - 30.0).abs() < 1e-12);
        assert_eq!(params.random_seed, 7);
    }

    #[test]
    fn test_keys_case_insensitive_and_comments() {
        let params = parse_parameters("PROBLEM zdt4 # trailing\n\n   # only comment\nPopulation_Size 5").unwrap();
        assert_eq!(params.population_size, 5);
        assert_eq!(params.problem_name, "zdt4");
    }

    #[test]
    fn test_zdt4_forces_canonical_formulation() {
        let input = "problem ZDT4\nnum_variables 3\nlower_bounds 0 0 0\nupper_bounds 1 1 1\nobjective_names a b c\n";
        let params = parse_parameters(input).unwrap();
        let (lower, upper) = Zdt4::canonical_bounds(10);
        assert_eq!(params.lower_bounds, lower);
        assert_eq!(params.upper_bounds, upper);
        assert_eq!(params.variable_names.len(), 10);
        assert_eq!(params.variable_names[9], "x10");
        assert_eq!(params.objective_names, vec!["f1", "f2"]);
    }

    #[test]
    fn test_zdt4_keeps_matching_bounds() {
        let input = "problem zdt4\n\
                     lower_bounds 0 -5 -5 -5 -5 -5 -5 -5 -5 -5\n\
                     upper_bounds 1 5 5 5 5 5 5 5 5 5.0000000001\n";
        let params = parse_parameters(input).unwrap();
        assert_eq!(params.upper_bounds[9], 5.0000000001);
    }

    #[test]
    fn test_generated_variable_names() {
        let params = parse_parameters("problem cfd\nnum_variables 2\n").unwrap();
        assert_eq!(params.variable_names, vec!["x1", "x2"]);
    }

    #[test]
    fn test_list_declares_count() {
        let err = parse_parameters("problem cfd\nlower_bounds 0 0\nupper_bounds 1 1 1\n").unwrap_err();
        assert!(matches!(
            err,
            ParameterError::TokenCount {
                line: 3,
                expected: 2,
                actual: 3,
                ..
            }
        ));
    }

    #[test]
    fn test_count_mismatch_after_late_declaration() {
        let err = parse_parameters("problem cfd\nlower_bounds 0 0\nnum_variables 3\n").unwrap_err();
        assert!(matches!(
            err,
            ParameterError::CountMismatch {
                what: "lower bound",
                declared: 3,
                actual: 2
            }
        ));
    }

    #[test]
    fn test_parse_error_reports_line_and_field() {
        let err = parse_parameters("problem zdt4\npopulation_size ten\n").unwrap_err();
        match err {
            ParameterError::Parse {
                line, field, token, ..
            } => {
                assert_eq!(line, 2);
                assert_eq!(field, "population_size");
                assert_eq!(token, "ten");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_scalar_requires_single_value() {
        assert!(matches!(
            parse_parameters("problem zdt4\nrandom_seed 1 2\n"),
            Err(ParameterError::TokenCount { expected: 1, actual: 2, .. })
        ));
        assert!(matches!(
            parse_parameters("problem\n"),
            Err(ParameterError::TokenCount { line: 1, expected: 1, actual: 0, .. })
        ));
    }

    #[test]
    fn test_missing_problem() {
        assert!(matches!(
            parse_parameters("population_size 10\n"),
            Err(ParameterError::MissingProblem)
        ));
    }

    #[test]
    fn test_zero_population() {
        assert!(matches!(
            parse_parameters("problem zdt4\npopulation_size 0\n"),
            Err(ParameterError::ZeroPopulation)
        ));
    }

    #[test]
    fn test_inverted_bounds() {
        assert!(matches!(
            parse_parameters("problem cfd\nlower_bounds 0 2\nupper_bounds 1 1\n"),
            Err(ParameterError::InvertedBounds { index: 1 })
        ));
    }

    #[test]
    fn test_unknown_key_is_skipped() {
        let params = parse_parameters("problem zdt4\nelitism on\n").unwrap();
        assert_eq!(params.population_size, 100);
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "problem ZDT4\npopulation_size 16\nrandom_seed 3").unwrap();

        let params = load_parameters(file.path()).unwrap();
        assert_eq!(params.population_size, 16);
        assert_eq!(params.random_seed, 3);
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_parameters(dir.path().join("absent.txt")).unwrap_err();
        assert!(matches!(err, ParameterError::Io(_)));
    }
}
