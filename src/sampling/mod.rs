//! Latin hypercube sampling of initial populations.
//!
//! Every dimension's range is cut into `N` equal-width strata and each
//! stratum receives exactly one of the `N` samples. Stratum assignment is an
//! independent random permutation per dimension, so no two dimensions share
//! a stratum ordering.
//!
//! # Key Types
//!
//! - [`SamplingConfig`]: population size, bounds and seed
//! - [`latin_hypercube`]: seeded sampler
//! - [`latin_hypercube_with_rng`]: sampler over a caller-owned RNG
//!
//! # References
//!
//! - McKay, Beckman & Conover (1979), "A Comparison of Three Methods for
//!   Selecting Values of Input Variables in the Analysis of Output from a
//!   Computer Code", *Technometrics* 21(2), 239–245

mod config;
mod latin_hypercube;

pub use config::SamplingConfig;
pub use latin_hypercube::{latin_hypercube, latin_hypercube_with_rng};

/// A real-valued decision vector.
pub type DecisionVector = Vec<f64>;

/// An ordered collection of decision vectors. Individual `i` is index `i`.
pub type Population = Vec<DecisionVector>;
