//! Latin hypercube sampling, ZDT4 evaluation and Pareto front classification.
//!
//! Evaluates a single static generation of a two-objective optimization
//! problem:
//!
//! - **Sampling**: Latin hypercube design over per-variable bounds, one
//!   sample per stratum per dimension, reproducible from a seed.
//! - **Problems**: the ZDT4 benchmark behind a [`MultiObjectiveProblem`]
//!   trait, with lookup by name.
//! - **Pareto**: dominance comparison and the NSGA-II fast non-dominated
//!   sort, producing fronts and 1-based ranks.
//! - **Params / Report**: the parameter file reader and the population
//!   export writer around the core.
//! - **Pipeline**: sampling → evaluation → classification in one call.
//!
//! The sampling, problem and pareto modules are pure functions over
//! in-memory arrays and never log.
//!
//! # Features
//!
//! - `parallel`: rayon-backed population evaluation and dominance comparison
//! - `serde`: `Serialize`/`Deserialize` for configuration and result types
//!
//! # Example
//!
//! ```
//! use u_pareto::pareto::fast_non_dominated_sort;
//! use u_pareto::problem::evaluate_population;
//! use u_pareto::problem::Zdt4;
//! use u_pareto::sampling::{latin_hypercube, SamplingConfig};
//!
//! let (lower, upper) = Zdt4::canonical_bounds(10);
//! let config = SamplingConfig::default()
//!     .with_population_size(64)
//!     .with_bounds(lower, upper)
//!     .with_seed(42);
//!
//! let population = latin_hypercube(&config).unwrap();
//! let objectives = evaluate_population(&Zdt4, &population).unwrap();
//! let fronts = fast_non_dominated_sort(&objectives).unwrap();
//!
//! assert_eq!(fronts.ranks.len(), 64);
//! ```
//!
//! [`MultiObjectiveProblem`]: problem::MultiObjectiveProblem

pub mod error;
pub mod params;
pub mod pareto;
pub mod pipeline;
pub mod problem;
pub mod report;
pub mod sampling;

pub use error::{ExportError, ParameterError, ParetoError};
