//! Pareto dominance (minimization).

/// Dominance comparison result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dominance {
    /// Left dominates right.
    Left,
    /// Right dominates left.
    Right,
    /// Neither dominates the other.
    Neither,
}

/// Compares two objective vectors for Pareto dominance.
///
/// Both vectors must have the same length; callers check this (the sorter
/// does so up front) and debug builds assert it. Equal vectors, and vectors
/// containing NaN in the deciding positions, compare as [`Dominance::Neither`].
///
/// ```
/// use u_pareto::pareto::{dominance, Dominance};
///
/// assert_eq!(dominance(&[1.0, 2.0], &[2.0, 2.0]), Dominance::Left);
/// assert_eq!(dominance(&[1.0, 3.0], &[2.0, 2.0]), Dominance::Neither);
/// assert_eq!(dominance(&[2.0, 2.0], &[2.0, 2.0]), Dominance::Neither);
/// ```
pub fn dominance(a: &[f64], b: &[f64]) -> Dominance {
    debug_assert_eq!(
        a.len(),
        b.len(),
        "objective vectors must have the same length"
    );
    let mut a_better_in_some = false;
    let mut b_better_in_some = false;

    for (&va, &vb) in a.iter().zip(b) {
        if va < vb {
            a_better_in_some = true;
        } else if vb < va {
            b_better_in_some = true;
        }
        if a_better_in_some && b_better_in_some {
            return Dominance::Neither;
        }
    }

    match (a_better_in_some, b_better_in_some) {
        (true, false) => Dominance::Left,
        (false, true) => Dominance::Right,
        _ => Dominance::Neither,
    }
}

/// Returns `true` if `a` is no worse than `b` in every objective and
/// strictly better in at least one.
pub fn dominates(a: &[f64], b: &[f64]) -> bool {
    dominance(a, b) == Dominance::Left
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_irreflexive() {
        for v in [[0.0, 0.0], [1.0, 5.0], [-3.0, 2.5]] {
            assert!(!dominates(&v, &v));
        }
    }

    #[test]
    fn test_strict_in_one_objective_suffices() {
        assert!(dominates(&[1.0, 2.0], &[1.0, 3.0]));
        assert!(!dominates(&[1.0, 3.0], &[1.0, 2.0]));
    }

    #[test]
    fn test_trade_off_is_neither() {
        assert_eq!(dominance(&[1.0, 5.0], &[2.0, 2.0]), Dominance::Neither);
        assert_eq!(dominance(&[2.0, 2.0], &[1.0, 5.0]), Dominance::Neither);
    }

    #[test]
    fn test_antisymmetric() {
        let a = [1.0, 2.0, 3.0];
        let b = [2.0, 2.0, 4.0];
        assert_eq!(dominance(&a, &b), Dominance::Left);
        assert_eq!(dominance(&b, &a), Dominance::Right);
    }

    #[test]
    fn test_transitive() {
        let a = [1.0, 1.0];
        let b = [1.0, 2.0];
        let c = [2.0, 2.0];
        assert!(dominates(&a, &b));
        assert!(dominates(&b, &c));
        assert!(dominates(&a, &c));
    }

    #[test]
    fn test_nan_never_dominates() {
        assert!(!dominates(&[f64::NAN, 1.0], &[f64::NAN, 1.0]));
        assert!(!dominates(&[f64::NAN, 1.0], &[0.0, 1.0]));
        assert!(!dominates(&[0.0, 1.0], &[f64::NAN, 1.0]));
    }

    #[cfg(debug_assertions)]
    #[test]
    #[should_panic(expected = "objective vectors must have the same length")]
    fn test_length_mismatch_panics_in_debug() {
        dominates(&[1.0], &[2.0, 0.0]);
    }
}
