//! Fast non-dominated sorting.

use super::dominance::{dominance, Dominance};
use crate::error::ParetoError;
#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Result of non-dominated sorting.
///
/// Each element of `ranks` is the 1-based front number of the solution at
/// the same index. Front 1 holds the non-dominated solutions.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ParetoFronts {
    /// Indices grouped by front: `fronts[0]` is front 1, etc.
    pub fronts: Vec<Vec<usize>>,

    /// Front number for each solution (1 = non-dominated).
    pub ranks: Vec<usize>,
}

impl ParetoFronts {
    /// Number of fronts.
    pub fn front_count(&self) -> usize {
        self.fronts.len()
    }

    /// Indices of the non-dominated solutions.
    pub fn first_front(&self) -> &[usize] {
        self.fronts.first().map(Vec::as_slice).unwrap_or(&[])
    }

    /// Indices in front `rank` (1-based), if it exists.
    pub fn front(&self, rank: usize) -> Option<&[usize]> {
        rank.checked_sub(1)
            .and_then(|i| self.fronts.get(i))
            .map(Vec::as_slice)
    }

    /// Number of classified solutions.
    pub fn len(&self) -> usize {
        self.ranks.len()
    }

    /// Always `false` for a successful sort.
    pub fn is_empty(&self) -> bool {
        self.ranks.is_empty()
    }
}

/// Fast non-dominated sorting.
///
/// Partitions the solutions into fronts of mutually non-dominating
/// solutions. All objectives are **minimized**.
///
/// # Algorithm (Deb et al., 2002)
///
/// 1. For every ordered pair `(p, q)`, `p != q`: if `p` dominates `q`, add `q`
///    to `p`'s dominated set; otherwise if `q` dominates `p`, increment
///    `p`'s domination count
/// 2. Solutions with a zero count form front 1, in index order
/// 3. For each member of the current front, decrement the count of every
///    solution it dominates; those reaching zero form the next front
/// 4. Repeat until a front comes out empty
///
/// Identical objective vectors never dominate each other and always share
/// a front.
///
/// # Complexity
///
/// O(m * n²) comparisons plus O(n + e) propagation, where m = number of
/// objectives, n = number of solutions, e = number of dominance edges
///
/// # Errors
///
/// - [`ParetoError::EmptyInput`] if `objectives` is empty
/// - [`ParetoError::ObjectiveMismatch`] if the vectors differ in length
/// - [`ParetoError::NonFiniteObjective`] if any value is NaN or infinite
///
/// # Example
///
/// ```
/// use u_pareto::pareto::fast_non_dominated_sort;
///
/// let objectives = vec![
///     [1.0, 5.0], // A
///     [2.0, 4.0], // B — dominated by D
///     [3.0, 3.0], // C — dominated by D
///     [2.0, 2.0], // D
/// ];
///
/// let result = fast_non_dominated_sort(&objectives).unwrap();
///
/// assert_eq!(result.fronts, vec![vec![0, 3], vec![1, 2]]);
/// assert_eq!(result.ranks, vec![1, 2, 2, 1]);
/// ```
pub fn fast_non_dominated_sort<O: AsRef<[f64]>>(
    objectives: &[O],
) -> Result<ParetoFronts, ParetoError> {
    check_shape(objectives)?;

    let rows: Vec<(Vec<usize>, usize)> = (0..objectives.len())
        .map(|p| dominance_row(objectives, p))
        .collect();

    Ok(build_fronts(rows))
}

/// Parallel counterpart of [`fast_non_dominated_sort`].
///
/// Row `p` of the pairwise comparison only writes `p`'s own dominated set and
/// count, so rows are computed independently and the result is identical to
/// the sequential sort.
#[cfg(feature = "parallel")]
pub fn fast_non_dominated_sort_par<O: AsRef<[f64]> + Sync>(
    objectives: &[O],
) -> Result<ParetoFronts, ParetoError> {
    check_shape(objectives)?;

    let rows: Vec<(Vec<usize>, usize)> = (0..objectives.len())
        .into_par_iter()
        .map(|p| dominance_row(objectives, p))
        .collect();

    Ok(build_fronts(rows))
}

fn check_shape<O: AsRef<[f64]>>(objectives: &[O]) -> Result<(), ParetoError> {
    let first = objectives.first().ok_or(ParetoError::EmptyInput)?;
    let m = first.as_ref().len();

    for (index, o) in objectives.iter().enumerate() {
        let values = o.as_ref();
        if values.len() != m {
            return Err(ParetoError::ObjectiveMismatch {
                index,
                expected: m,
                actual: values.len(),
            });
        }
        if let Some(objective) = values.iter().position(|v| !v.is_finite()) {
            return Err(ParetoError::NonFiniteObjective { index, objective });
        }
    }
    Ok(())
}

/// Compares `p` against every other solution: returns the indices `p`
/// dominates and the number of solutions dominating `p`.
fn dominance_row<O: AsRef<[f64]>>(objectives: &[O], p: usize) -> (Vec<usize>, usize) {
    let a = objectives[p].as_ref();
    let mut dominated = Vec::new();
    let mut count = 0usize;

    for (q, other) in objectives.iter().enumerate() {
        if q == p {
            continue;
        }
        match dominance(a, other.as_ref()) {
            Dominance::Left => dominated.push(q),
            Dominance::Right => count += 1,
            Dominance::Neither => {}
        }
    }

    (dominated, count)
}

fn build_fronts(rows: Vec<(Vec<usize>, usize)>) -> ParetoFronts {
    let n = rows.len();
    let (dominated_by, mut domination_count): (Vec<Vec<usize>>, Vec<usize>) =
        rows.into_iter().unzip();

    let mut ranks = vec![0usize; n];
    let front_1: Vec<usize> = (0..n).filter(|&p| domination_count[p] == 0).collect();
    for &p in &front_1 {
        ranks[p] = 1;
    }

    // Finite input keeps dominance acyclic, so front 1 is never empty.
    let mut fronts = vec![front_1];
    loop {
        let mut next_front = Vec::new();
        if let Some(current) = fronts.last() {
            for &p in current {
                for &q in &dominated_by[p] {
                    domination_count[q] -= 1;
                    if domination_count[q] == 0 {
                        ranks[q] = fronts.len() + 1;
                        next_front.push(q);
                    }
                }
            }
        }

        if next_front.is_empty() {
            break;
        }
        fronts.push(next_front);
    }

    ParetoFronts { fronts, ranks }
}
