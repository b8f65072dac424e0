//! Population report export.
//!
//! Writes a whitespace-delimited table, one row per individual:
//!
//! ```text
//! # NSGA-II initial population export
//! # index front f1 f2 x1 x2 ...
//! 0 1 0.25 0.5 0.25 0 0
//! ```
//!
//! `index` is 0-based and `front` is the 1-based Pareto rank. Objective
//! columns precede decision variables. Lines starting with `#` are comments.

use crate::error::ExportError;
use crate::params::OptimizationParameters;
use crate::pareto::ParetoFronts;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use tracing::debug;

const REPORT_TITLE: &str = "# NSGA-II initial population export";

/// Reduces a name to `[A-Za-z0-9_]`, mapping spaces to `_`.
///
/// Falls back to `{fallback_prefix}{index + 1}` when nothing is left.
///
/// ```
/// use u_pareto::report::sanitize_identifier;
///
/// assert_eq!(sanitize_identifier("Objective 1", "objective", 0), "Objective_1");
/// assert_eq!(sanitize_identifier("μ/σ", "objective", 1), "objective2");
/// ```
pub fn sanitize_identifier(name: &str, fallback_prefix: &str, index: usize) -> String {
    let sanitized: String = name
        .chars()
        .filter_map(|c| match c {
            c if c.is_ascii_alphanumeric() || c == '_' => Some(c),
            ' ' => Some('_'),
            _ => None,
        })
        .collect();

    if sanitized.is_empty() {
        format!("{fallback_prefix}{}", index + 1)
    } else {
        sanitized
    }
}

/// Writes the report for one classified population.
///
/// # Errors
///
/// - [`ExportError::LengthMismatch`] if population, objectives and ranks
///   differ in length
/// - [`ExportError::Io`] if writing fails
pub fn write_population_report<W, X, O>(
    mut writer: W,
    params: &OptimizationParameters,
    population: &[X],
    objectives: &[O],
    fronts: &ParetoFronts,
) -> Result<(), ExportError>
where
    W: Write,
    X: AsRef<[f64]>,
    O: AsRef<[f64]>,
{
    if population.len() != objectives.len() || population.len() != fronts.ranks.len() {
        return Err(ExportError::LengthMismatch {
            population: population.len(),
            objectives: objectives.len(),
            ranks: fronts.ranks.len(),
        });
    }

    writeln!(writer, "{REPORT_TITLE}")?;
    write!(writer, "# index front")?;

    let objective_count = objectives.first().map_or(0, |o| o.as_ref().len());
    for k in 0..objective_count {
        let label = match params.objective_names.get(k) {
            Some(name) => sanitize_identifier(name, "objective", k),
            None => format!("objective{}", k + 1),
        };
        write!(writer, " {label}")?;
    }
    for (k, name) in params.variable_names.iter().enumerate() {
        write!(writer, " {}", sanitize_identifier(name, "x", k))?;
    }
    writeln!(writer)?;

    for (i, ((x, f), &rank)) in population
        .iter()
        .zip(objectives)
        .zip(&fronts.ranks)
        .enumerate()
    {
        write!(writer, "{i} {rank}")?;
        for value in f.as_ref().iter().chain(x.as_ref()) {
            write!(writer, " {value}")?;
        }
        writeln!(writer)?;
    }

    writer.flush()?;
    Ok(())
}

/// Writes the report to `path`, creating or truncating the file.
pub fn save_population_report<X, O>(
    path: impl AsRef<Path>,
    params: &OptimizationParameters,
    population: &[X],
    objectives: &[O],
    fronts: &ParetoFronts,
) -> Result<(), ExportError>
where
    X: AsRef<[f64]>,
    O: AsRef<[f64]>,
{
    let path = path.as_ref();
    let writer = BufWriter::new(File::create(path)?);
    write_population_report(writer, params, population, objectives, fronts)?;
    debug!(
        "Wrote population report for {} individuals to {}",
        population.len(),
        path.display()
    );
    Ok(())
}
