//! Run parameters and the parameter file reader.
//!
//! # Key Types
//!
//! - [`OptimizationParameters`]: problem, population size, bounds, seed
//! - [`parse_parameters`] / [`load_parameters`]: line-oriented `key value...` files
//!
//! Unrecognized keys, ZDT4 overrides and other non-fatal conditions are
//! reported through `tracing` warnings.

mod config;
mod parser;

pub use config::OptimizationParameters;
pub use parser::{load_parameters, parse_parameters};
