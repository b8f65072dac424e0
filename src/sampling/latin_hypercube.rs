//! Latin hypercube sampler.

use super::config::{validate_bounds, SamplingConfig};
use super::Population;
use crate::error::ParetoError;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

/// Samples a population from a [`SamplingConfig`].
///
/// The RNG is a [`StdRng`] seeded from `config.seed` (or from a fresh random
/// seed when `None`), so the same seed always yields the same population.
///
/// # Errors
///
/// [`ParetoError::Configuration`] if the population size is zero, the bound
/// vectors differ in length, or any lower bound exceeds its upper bound.
///
/// # Example
///
/// ```
/// use u_pareto::sampling::{latin_hypercube, SamplingConfig};
///
/// let config = SamplingConfig::default()
///     .with_population_size(4)
///     .with_bounds(vec![0.0, -5.0], vec![1.0, 5.0])
///     .with_seed(42);
///
/// let population = latin_hypercube(&config).unwrap();
/// assert_eq!(population.len(), 4);
/// assert!(population.iter().all(|x| x.len() == 2));
/// assert!(population.iter().all(|x| (0.0..=1.0).contains(&x[0])));
/// ```
pub fn latin_hypercube(config: &SamplingConfig) -> Result<Population, ParetoError> {
    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::seed_from_u64(rand::random()),
    };
    latin_hypercube_with_rng(
        config.population_size,
        &config.lower_bounds,
        &config.upper_bounds,
        &mut rng,
    )
}

/// Samples `n` individuals within `[lower[d], upper[d]]` using `rng`.
///
/// # Algorithm
///
/// For each dimension `d`, in order:
/// 1. Shuffle the stratum indices `0..n`
/// 2. For each individual `i`, draw a jitter `u ~ U[0, 1)`
/// 3. `x[i][d] = lower[d] + (perm[i] + u) / n * (upper[d] - lower[d])`
///
/// Each dimension draws its own permutation.
///
/// # Complexity
/// O(n * d) time and random draws
pub fn latin_hypercube_with_rng<R: Rng>(
    n: usize,
    lower: &[f64],
    upper: &[f64],
    rng: &mut R,
) -> Result<Population, ParetoError> {
    validate_bounds(n, lower, upper)?;

    let dimension = lower.len();
    let mut population = vec![vec![0.0; dimension]; n];
    let mut permutation: Vec<usize> = Vec::with_capacity(n);

    for (d, (&lo, &hi)) in lower.iter().zip(upper).enumerate() {
        permutation.clear();
        permutation.extend(0..n);
        permutation.shuffle(rng);

        let width = hi - lo;
        for (individual, &stratum) in population.iter_mut().zip(&permutation) {
            let jitter: f64 = rng.random();
            let scaled = (stratum as f64 + jitter) / n as f64;
            individual[d] = lo + scaled * width;
        }
    }

    Ok(population)
}
