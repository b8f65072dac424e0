//! Pareto dominance and front classification.
//!
//! Domain-agnostic algorithms over objective vectors, suitable for NSGA-II
//! and other Pareto-based methods. All objectives are **minimized**.
//!
//! # Algorithms
//!
//! - [`dominates`] / [`dominance`]: Pareto dominance between two vectors
//! - [`fast_non_dominated_sort`]: fast non-dominated sorting (Deb et al., 2002)
//!
//! # References
//!
//! - Deb et al. (2002), "A Fast and Elitist Multiobjective Genetic Algorithm: NSGA-II"
//! - IEEE Transactions on Evolutionary Computation, 6(2), 182-197

mod dominance;
mod sort;

pub use dominance::{dominance, dominates, Dominance};
#[cfg(feature = "parallel")]
pub use sort::fast_non_dominated_sort_par;
pub use sort::{fast_non_dominated_sort, ParetoFronts};
