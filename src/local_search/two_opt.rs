//! 2-opt local search from a random starting tour.
//!
//! # Algorithm
//!
//! For each pair of tour positions (i, j) with j > i + 1, compute the change
//! in cycle length from removing edges (t[i], t[i+1]) and (t[j], t[j+1]) and
//! reconnecting by reversing the path between them:
//!
//! ```text
//! delta = d(t[i], t[j]) + d(t[i+1], t[j+1]) - d(t[i], t[i+1]) - d(t[j], t[j+1])
//! ```
//!
//! If delta < 0, reverse the segment [i+1..=j], record the new length and
//! restart the scan from the beginning (first-improvement strategy). Stop when
//! a full scan finds nothing, or after `max_iterations` scans.
//!
//! # Complexity
//!
//! O(n²) per scan, O(n³) or worse for convergence because every accepted
//! move restarts the scan.
//!
//! # Reference
//!
//! Croes, G.A. (1958). "A method for solving traveling salesman problems",
//! *Operations Research* 6(6), 791-812.

use log::{debug, trace};
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::distance::DistanceMatrix;
use crate::error::{Error, Result};
use crate::models::{random_tour, tour_length, TourSolution};

/// Moves must shorten the tour by more than this to be accepted.
const IMPROVEMENT_EPS: f64 = 1e-10;

/// Tuning for [`two_opt`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TwoOptConfig {
    /// Maximum number of scans over all position pairs.
    pub max_iterations: usize,
}

impl Default for TwoOptConfig {
    fn default() -> Self {
        Self {
            max_iterations: 1000,
        }
    }
}

impl TwoOptConfig {
    /// Sets the scan cap.
    #[must_use]
    pub fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    /// Checks that the configuration can drive a search.
    pub fn validate(&self) -> Result<()> {
        if self.max_iterations == 0 {
            return Err(Error::invalid_config("2-opt max_iterations must be positive"));
        }
        Ok(())
    }
}

/// Improves a uniformly random tour with first-improvement 2-opt.
///
/// The progress trace starts with the random tour's length and gains one
/// entry per accepted move, so it is strictly decreasing.
///
/// # Errors
///
/// Returns [`Error::EmptyInput`] for a 0×0 matrix.
///
/// # Examples
///
/// ```
/// use rand::SeedableRng;
/// use rand::rngs::StdRng;
/// use geo_tsp::distance::DistanceMatrix;
/// use geo_tsp::local_search::{two_opt, TwoOptConfig};
///
/// // Unit square, corners in order 0, 1, 2, 3.
/// let s = 2f64.sqrt();
/// let dm = DistanceMatrix::from_data(4, vec![
///     0.0, 1.0, s, 1.0,
///     1.0, 0.0, 1.0, s,
///     s, 1.0, 0.0, 1.0,
///     1.0, s, 1.0, 0.0,
/// ]).unwrap();
///
/// let mut rng = StdRng::seed_from_u64(42);
/// let sol = two_opt(&dm, &TwoOptConfig::default(), &mut rng).unwrap();
/// assert!((sol.distance - 4.0).abs() < 1e-9);
/// ```
pub fn two_opt<R: Rng + ?Sized>(
    distances: &DistanceMatrix,
    config: &TwoOptConfig,
    rng: &mut R,
) -> Result<TourSolution> {
    let n = distances.size();
    if n == 0 {
        return Err(Error::EmptyInput);
    }

    let mut tour = random_tour(n, rng);
    let mut best = tour_length(&tour, distances);
    let mut progress = vec![best];
    let initial = best;

    let mut scans = 0;
    let mut improved = true;
    while improved && scans < config.max_iterations {
        improved = false;
        scans += 1;

        'scan: for i in 0..n - 1 {
            for j in (i + 2)..n {
                if two_opt_delta(&tour, distances, i, j) < -IMPROVEMENT_EPS {
                    tour[i + 1..=j].reverse();
                    best = tour_length(&tour, distances);
                    progress.push(best);
                    trace!("2-opt: scan {scans}, reversed {}..={j}, length={best:.3}", i + 1);
                    improved = true;
                    break 'scan;
                }
            }
        }
    }

    debug!(
        "2-opt: n={n}, scans={scans}, improvements={}, {initial:.3} -> {best:.3}",
        progress.len() - 1
    );
    Ok(TourSolution::new(tour, best, progress))
}

/// Computes the cycle length change from reversing `tour[i+1..=j]`.
///
/// Before: ... - t[i] - t[i+1] - ... - t[j] - t[j+1] - ...
/// After:  ... - t[i] - t[j] - ... - t[i+1] - t[j+1] - ...
///
/// `t[j+1]` wraps to `t[0]` when `j` is the last position.
fn two_opt_delta(tour: &[usize], distances: &DistanceMatrix, i: usize, j: usize) -> f64 {
    let n = tour.len();
    let a = tour[i];
    let b = tour[i + 1];
    let c = tour[j];
    let e = tour[(j + 1) % n];

    let old_cost = distances.get(a, b) + distances.get(c, e);
    let new_cost = distances.get(a, c) + distances.get(b, e);

    new_cost - old_cost
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::is_permutation;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    /// Points on a plane, Euclidean distances.
    fn planar(points: &[(f64, f64)]) -> DistanceMatrix {
        let n = points.len();
        let mut dm = DistanceMatrix::new(n);
        for i in 0..n {
            for j in 0..n {
                let (dx, dy) = (points[i].0 - points[j].0, points[i].1 - points[j].1);
                dm.set(i, j, (dx * dx + dy * dy).sqrt());
            }
        }
        dm
    }

    fn square() -> DistanceMatrix {
        planar(&[(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0)])
    }

    #[test]
    fn test_2opt_finds_square_perimeter() {
        let dm = square();
        for seed in 0..10 {
            let mut rng = StdRng::seed_from_u64(seed);
            let sol = two_opt(&dm, &TwoOptConfig::default(), &mut rng).expect("solved");
            assert!((sol.distance - 4.0).abs() < 1e-9, "seed {seed}: {}", sol.distance);
        }
    }

    #[test]
    fn test_2opt_delta_matches_full_evaluation() {
        let dm = planar(&[(0.0, 0.0), (3.0, 1.0), (1.0, 4.0), (5.0, 5.0), (2.0, 2.0), (4.0, 0.0)]);
        let tour = vec![0, 3, 1, 5, 2, 4];
        let before = tour_length(&tour, &dm);
        for i in 0..tour.len() - 1 {
            for j in (i + 2)..tour.len() {
                let mut moved = tour.clone();
                moved[i + 1..=j].reverse();
                let expected = tour_length(&moved, &dm) - before;
                assert!((two_opt_delta(&tour, &dm, i, j) - expected).abs() < 1e-9);
            }
        }
    }

    #[test]
    fn test_2opt_never_worse_than_start() {
        let dm = planar(&[
            (0.0, 0.0),
            (10.0, 0.0),
            (0.0, 10.0),
            (10.0, 10.0),
            (5.0, 5.0),
            (2.0, 8.0),
            (7.0, 3.0),
        ]);
        let mut rng = StdRng::seed_from_u64(3);
        let sol = two_opt(&dm, &TwoOptConfig::default(), &mut rng).expect("solved");
        assert!(is_permutation(&sol.tour, 7));
        assert!(sol.distance <= sol.progress[0] + 1e-10);
        assert!((sol.distance - tour_length(&sol.tour, &dm)).abs() < 1e-9);
    }

    #[test]
    fn test_2opt_progress_strictly_decreasing() {
        let dm = planar(&[(0.0, 0.0), (4.0, 0.0), (4.0, 3.0), (0.0, 3.0), (2.0, 6.0), (2.0, -3.0)]);
        let mut rng = StdRng::seed_from_u64(11);
        let sol = two_opt(&dm, &TwoOptConfig::default(), &mut rng).expect("solved");
        for w in sol.progress.windows(2) {
            assert!(w[1] < w[0]);
        }
        assert_eq!(sol.best_progress(), Some(sol.distance));
    }

    #[test]
    fn test_2opt_iteration_cap() {
        let dm = planar(&[(0.0, 0.0), (4.0, 0.0), (4.0, 3.0), (0.0, 3.0), (2.0, 6.0), (2.0, -3.0)]);
        let config = TwoOptConfig::default().with_max_iterations(1);
        let mut rng = StdRng::seed_from_u64(5);
        let sol = two_opt(&dm, &config, &mut rng).expect("solved");
        // One scan accepts at most one move.
        assert!(sol.progress.len() <= 2);
    }

    #[test]
    fn test_2opt_trivial_sizes() {
        let mut rng = StdRng::seed_from_u64(1);
        let one = two_opt(&DistanceMatrix::new(1), &TwoOptConfig::default(), &mut rng)
            .expect("solved");
        assert_eq!(one.tour, vec![0]);
        assert_eq!(one.distance, 0.0);

        let dm = DistanceMatrix::from_data(2, vec![0.0, 7.0, 7.0, 0.0]).expect("valid");
        let two = two_opt(&dm, &TwoOptConfig::default(), &mut rng).expect("solved");
        assert!(is_permutation(&two.tour, 2));
        assert!((two.distance - 14.0).abs() < 1e-10);
    }

    #[test]
    fn test_2opt_empty() {
        let mut rng = StdRng::seed_from_u64(1);
        assert!(matches!(
            two_opt(&DistanceMatrix::new(0), &TwoOptConfig::default(), &mut rng),
            Err(Error::EmptyInput)
        ));
    }

    #[test]
    fn test_2opt_seeded_is_reproducible() {
        let dm = planar(&[(0.0, 0.0), (4.0, 0.0), (4.0, 3.0), (0.0, 3.0), (2.0, 6.0)]);
        let a = two_opt(&dm, &TwoOptConfig::default(), &mut StdRng::seed_from_u64(9))
            .expect("solved");
        let b = two_opt(&dm, &TwoOptConfig::default(), &mut StdRng::seed_from_u64(9))
            .expect("solved");
        assert_eq!(a, b);
    }

    #[test]
    fn test_config_validate() {
        assert!(TwoOptConfig::default().validate().is_ok());
        assert!(TwoOptConfig::default().with_max_iterations(0).validate().is_err());
    }

    #[test]
    fn test_config_partial_json() {
        let config: TwoOptConfig = serde_json::from_str("{}").expect("defaults");
        assert_eq!(config, TwoOptConfig::default());
    }
}
