//! Error types for u-pareto.
//!
//! [`ParetoError`] covers the numeric core (sampling, evaluation,
//! classification). [`ParameterError`] and [`ExportError`] belong to the
//! parameter-file reader and the report writer respectively.

use std::io;
use thiserror::Error;

/// Errors raised by the sampler, the objective evaluators and the classifier.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ParetoError {
    /// Malformed population size or bounds.
    #[error("invalid configuration: {0}")]
    Configuration(String),

    /// Objective evaluation received too few decision variables.
    #[error("objective requires at least {required} decision variables, got {actual}")]
    Dimension { required: usize, actual: usize },

    /// The square root in the objective received a negative or non-finite argument.
    #[error("objective evaluation left its domain: sqrt argument f1/g = {ratio}")]
    Domain { ratio: f64 },

    /// Classification of zero individuals.
    #[error("cannot classify an empty population")]
    EmptyInput,

    /// Objective vectors of different lengths were passed to the classifier.
    #[error("objective vector {index} has {actual} objectives, expected {expected}")]
    ObjectiveMismatch {
        index: usize,
        expected: usize,
        actual: usize,
    },

    /// An objective value passed to the classifier is NaN or infinite.
    #[error("objective {objective} of vector {index} is not finite")]
    NonFiniteObjective { index: usize, objective: usize },

    /// The problem name is not known to the registry.
    #[error("problem '{0}' is not recorded")]
    UnknownProblem(String),

    /// The problem name is recorded but has no evaluator.
    #[error("problem '{0}' is recorded but has no evaluator")]
    UnimplementedProblem(String),
}

/// Errors raised while reading a parameter file.
#[derive(Debug, Error)]
pub enum ParameterError {
    #[error("unable to read parameter file: {0}")]
    Io(#[from] io::Error),

    /// A token could not be parsed as the expected numeric type.
    #[error("failed to parse '{token}' for '{field}' on line {line}: {reason}")]
    Parse {
        line: usize,
        field: String,
        token: String,
        reason: String,
    },

    /// A key received the wrong number of values.
    #[error("field '{field}' on line {line} expected {expected} entries but found {actual}")]
    TokenCount {
        line: usize,
        field: String,
        expected: usize,
        actual: usize,
    },

    /// A list disagrees with the declared variable or objective count.
    #[error("{what} count ({actual}) does not match the declared count ({declared})")]
    CountMismatch {
        what: &'static str,
        declared: usize,
        actual: usize,
    },

    #[error("problem name must be specified")]
    MissingProblem,

    #[error("population size must be greater than zero")]
    ZeroPopulation,

    #[error("lower bound exceeds upper bound for variable index {index}")]
    InvertedBounds { index: usize },
}

/// Errors raised while writing a population report.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("failed to write population report: {0}")]
    Io(#[from] io::Error),

    /// Population, objective and rank arrays disagree in length.
    #[error(
        "population ({population}), objective ({objectives}) and rank ({ranks}) counts must match"
    )]
    LengthMismatch {
        population: usize,
        objectives: usize,
        ranks: usize,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dimension_message() {
        let err = ParetoError::Dimension {
            required: 2,
            actual: 1,
        };
        assert_eq!(
            err.to_string(),
            "objective requires at least 2 decision variables, got 1"
        );
    }

    #[test]
    fn test_parameter_error_from_io() {
        let io = io::Error::new(io::ErrorKind::NotFound, "missing");
        let err: ParameterError = io.into();
        assert!(matches!(err, ParameterError::Io(_)));
    }
}
