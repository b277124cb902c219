//! Tour evaluation and representation helpers.
//!
//! Tours are handled in **open form** throughout the crate: a sequence of
//! `n` distinct indices where the closing edge `tour[n-1] → tour[0]` is
//! implied. Some producers build a closed form (`n + 1` entries, last equal
//! to first); [`open_cycle`] converts those at the producer's boundary so
//! every [`TourSolution`](crate::models::TourSolution) holds exactly `n`
//! indices.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::distance::DistanceMatrix;
use crate::error::{Error, Result};

/// Total cyclic length of an open-form tour.
///
/// Sums `d(tour[i], tour[(i + 1) % n])` over all positions, so the edge back
/// to the start is always included. Empty and single-node tours have length 0.
///
/// # Examples
///
/// ```
/// use geo_tsp::distance::DistanceMatrix;
/// use geo_tsp::models::tour_length;
///
/// let dm = DistanceMatrix::from_data(3, vec![
///     0.0, 3.0, 5.0,
///     3.0, 0.0, 4.0,
///     5.0, 4.0, 0.0,
/// ]).unwrap();
/// assert!((tour_length(&[0, 1, 2], &dm) - 12.0).abs() < 1e-10);
/// ```
pub fn tour_length(tour: &[usize], distances: &DistanceMatrix) -> f64 {
    let n = tour.len();
    (0..n)
        .map(|i| distances.get(tour[i], tour[(i + 1) % n]))
        .sum()
}

/// Uniformly random open-form tour over `n` locations.
pub fn random_tour<R: Rng + ?Sized>(n: usize, rng: &mut R) -> Vec<usize> {
    let mut tour: Vec<usize> = (0..n).collect();
    tour.shuffle(rng);
    tour
}

/// Strips the repeated start index from a closed-form tour.
///
/// Tours that are already open are returned unchanged.
pub fn open_cycle(mut tour: Vec<usize>) -> Vec<usize> {
    if tour.len() > 1 && tour.first() == tour.last() {
        tour.pop();
    }
    tour
}

/// Returns `true` if `tour` visits every index in `[0, n)` exactly once.
pub fn is_permutation(tour: &[usize], n: usize) -> bool {
    if tour.len() != n {
        return false;
    }
    let mut seen = vec![false; n];
    for &city in tour {
        if city >= n || seen[city] {
            return false;
        }
        seen[city] = true;
    }
    true
}

/// Checks that `tour` is an open-form Hamiltonian cycle over `n` locations.
pub fn validate_tour(tour: &[usize], n: usize) -> Result<()> {
    if tour.len() != n {
        return Err(Error::invalid_tour(format!(
            "expected {n} locations, got {}",
            tour.len()
        )));
    }
    if !is_permutation(tour, n) {
        return Err(Error::invalid_tour(
            "locations are repeated or out of range",
        ));
    }
    Ok(())
}
