//! Objective evaluation.
//!
//! Problems implement [`MultiObjectiveProblem`], mapping a decision vector to
//! an objective vector. Evaluation has no cross-individual state, so
//! [`evaluate_population`] simply maps the problem over the population
//! (in parallel with the `parallel` feature).
//!
//! # Problems
//!
//! - [`Zdt4`]: two-objective multimodal benchmark (Zitzler, Deb & Thiele, 2000)
//!
//! # Registry
//!
//! [`resolve_problem`] looks a problem up by name. Names are compared after
//! [`canonicalize_problem_name`] strips whitespace and upper-cases them.
//!
//! # References
//!
//! - Zitzler, Deb & Thiele (2000), "Comparison of Multiobjective Evolutionary
//!   Algorithms: Empirical Results", *Evolutionary Computation* 8(2), 173–195

mod evaluate;
mod registry;
mod types;
mod zdt4;

#[cfg(feature = "parallel")]
pub use evaluate::evaluate_population_par;
pub use evaluate::evaluate_population;
pub use registry::{
    canonicalize_problem_name, evaluate_problem_population, has_problem_implementation,
    is_problem_recorded, resolve_problem,
};
pub use types::MultiObjectiveProblem;
pub use zdt4::{Zdt4, Zdt4Terms};
