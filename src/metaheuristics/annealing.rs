//! Simulated annealing over segment-inversion moves.
//!
//! Each iteration picks two distinct random positions `i < j` and reverses
//! the tour segment `[i..=j]`. Improving and neutral moves are always
//! accepted; a move that lengthens the tour by `delta` is accepted with
//! probability `exp(-delta / T)`. The temperature `T` is multiplied by the
//! cooling rate after every iteration.
//!
//! # Reference
//!
//! Kirkpatrick, S., Gelatt, C.D. & Vecchi, M.P. (1983). "Optimization by
//! Simulated Annealing", *Science* 220(4598), 671-680.

use log::{debug, trace};
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::distance::DistanceMatrix;
use crate::error::{Error, Result};
use crate::models::{random_tour, tour_length, TourSolution};

/// Tuning for [`simulated_annealing`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnnealingConfig {
    /// Starting temperature.
    pub initial_temperature: f64,
    /// Multiplicative cooling factor applied after every iteration.
    pub cooling_rate: f64,
    /// The search stops once the temperature drops to this value.
    pub min_temperature: f64,
    /// Hard cap on iterations.
    pub max_iterations: usize,
}

impl Default for AnnealingConfig {
    fn default() -> Self {
        Self {
            initial_temperature: 1000.0,
            cooling_rate: 0.95,
            min_temperature: 1e-6,
            max_iterations: 1000,
        }
    }
}

impl AnnealingConfig {
    /// Sets the starting temperature.
    #[must_use]
    pub fn with_initial_temperature(mut self, temperature: f64) -> Self {
        self.initial_temperature = temperature;
        self
    }

    /// Sets the cooling factor.
    #[must_use]
    pub fn with_cooling_rate(mut self, rate: f64) -> Self {
        self.cooling_rate = rate;
        self
    }

    /// Sets the stopping temperature.
    #[must_use]
    pub fn with_min_temperature(mut self, temperature: f64) -> Self {
        self.min_temperature = temperature;
        self
    }

    /// Sets the iteration cap.
    #[must_use]
    pub fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    /// Checks that the schedule terminates and temperatures are usable.
    pub fn validate(&self) -> Result<()> {
        if !(self.initial_temperature.is_finite() && self.initial_temperature > 0.0) {
            return Err(Error::invalid_config(format!(
                "initial_temperature must be positive, got {}",
                self.initial_temperature
            )));
        }
        if !(self.cooling_rate > 0.0 && self.cooling_rate < 1.0) {
            return Err(Error::invalid_config(format!(
                "cooling_rate must lie in (0, 1), got {}",
                self.cooling_rate
            )));
        }
        if self.min_temperature.is_nan() || self.min_temperature < 0.0 {
            return Err(Error::invalid_config(format!(
                "min_temperature must be non-negative, got {}",
                self.min_temperature
            )));
        }
        Ok(())
    }
}

/// Runs simulated annealing from a uniformly random tour.
///
/// Returns the best tour seen, which is never longer than the starting tour.
/// The progress trace starts with the initial length and gains an entry
/// each time the best length improves.
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
/// use geo_tsp::metaheuristics::{simulated_annealing, AnnealingConfig};
///
/// let dm = DistanceMatrix::from_data(3, vec![
///     0.0, 3.0, 5.0,
///     3.0, 0.0, 4.0,
///     5.0, 4.0, 0.0,
/// ]).unwrap();
///
/// let mut rng = StdRng::seed_from_u64(42);
/// let sol = simulated_annealing(&dm, &AnnealingConfig::default(), &mut rng).unwrap();
/// assert!((sol.distance - 12.0).abs() < 1e-10);
/// ```
pub fn simulated_annealing<R: Rng + ?Sized>(
    distances: &DistanceMatrix,
    config: &AnnealingConfig,
    rng: &mut R,
) -> Result<TourSolution> {
    let n = distances.size();
    if n == 0 {
        return Err(Error::EmptyInput);
    }

    let mut current = random_tour(n, rng);
    let mut current_distance = tour_length(&current, distances);
    let mut best = current.clone();
    let mut best_distance = current_distance;
    let mut progress = vec![best_distance];

    if n < 2 {
        return Ok(TourSolution::new(best, best_distance, progress));
    }

    let mut temperature = config.initial_temperature;
    let mut iterations = 0;
    let mut accepted = 0;

    while temperature > config.min_temperature && iterations < config.max_iterations {
        iterations += 1;

        let (i, j) = distinct_positions(n, rng);
        let mut candidate = current.clone();
        candidate[i..=j].reverse();
        let candidate_distance = tour_length(&candidate, distances);

        let delta = candidate_distance - current_distance;
        let accept = delta <= 0.0 || rng.random::<f64>() < (-delta / temperature).exp();

        if accept {
            accepted += 1;
            current = candidate;
            current_distance = candidate_distance;

            if current_distance < best_distance {
                best.clone_from(&current);
                best_distance = current_distance;
                progress.push(best_distance);
                trace!("annealing: iteration {iterations}, T={temperature:.3e}, best={best_distance:.3}");
            }
        }

        temperature *= config.cooling_rate;
    }

    debug!(
        "annealing: n={n}, iterations={iterations}, accepted={accepted}, best={best_distance:.3}"
    );
    Ok(TourSolution::new(best, best_distance, progress))
}

/// Draws two distinct positions in `[0, n)` and returns them ordered.
fn distinct_positions<R: Rng + ?Sized>(n: usize, rng: &mut R) -> (usize, usize) {
    let a = rng.random_range(0..n);
    let mut b = rng.random_range(0..n - 1);
    if b >= a {
        b += 1;
    }
    (a.min(b), a.max(b))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::is_permutation;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn ring(n: usize) -> DistanceMatrix {
        // Points evenly spaced on a circle of radius 10.
        let points: Vec<(f64, f64)> = (0..n)
            .map(|k| {
                let a = 2.0 * std::f64::consts::PI * k as f64 / n as f64;
                (10.0 * a.cos(), 10.0 * a.sin())
            })
            .collect();
        let mut dm = DistanceMatrix::new(n);
        for i in 0..n {
            for j in 0..n {
                let (dx, dy) = (points[i].0 - points[j].0, points[i].1 - points[j].1);
                dm.set(i, j, (dx * dx + dy * dy).sqrt());
            }
        }
        dm
    }

    #[test]
    fn test_sa_returns_permutation() {
        let dm = ring(12);
        let mut rng = StdRng::seed_from_u64(42);
        let sol = simulated_annealing(&dm, &AnnealingConfig::default(), &mut rng).expect("solved");
        assert!(is_permutation(&sol.tour, 12));
        assert!((sol.distance - tour_length(&sol.tour, &dm)).abs() < 1e-9);
    }

    #[test]
    fn test_sa_never_worse_than_start() {
        let dm = ring(15);
        for seed in 0..5 {
            let mut rng = StdRng::seed_from_u64(seed);
            let sol =
                simulated_annealing(&dm, &AnnealingConfig::default(), &mut rng).expect("solved");
            assert!(sol.distance <= sol.progress[0]);
        }
    }

    #[test]
    fn test_sa_progress_strictly_decreasing() {
        let dm = ring(10);
        let mut rng = StdRng::seed_from_u64(8);
        let sol = simulated_annealing(&dm, &AnnealingConfig::default(), &mut rng).expect("solved");
        for w in sol.progress.windows(2) {
            assert!(w[1] < w[0]);
        }
        assert_eq!(sol.best_progress(), Some(sol.distance));
    }

    #[test]
    fn test_sa_seeded_is_reproducible() {
        let dm = ring(9);
        let config = AnnealingConfig::default();
        let a = simulated_annealing(&dm, &config, &mut StdRng::seed_from_u64(5)).expect("solved");
        let b = simulated_annealing(&dm, &config, &mut StdRng::seed_from_u64(5)).expect("solved");
        assert_eq!(a, b);
    }

    #[test]
    fn test_sa_zero_iterations_returns_start() {
        let dm = ring(6);
        let config = AnnealingConfig::default().with_max_iterations(0);
        let mut rng = StdRng::seed_from_u64(1);
        let sol = simulated_annealing(&dm, &config, &mut rng).expect("solved");
        assert_eq!(sol.progress, vec![sol.distance]);
    }

    #[test]
    fn test_sa_trivial_sizes() {
        let mut rng = StdRng::seed_from_u64(1);
        let one = simulated_annealing(&DistanceMatrix::new(1), &AnnealingConfig::default(), &mut rng)
            .expect("solved");
        assert_eq!(one.tour, vec![0]);
        assert_eq!(one.distance, 0.0);

        let dm = DistanceMatrix::from_data(2, vec![0.0, 3.0, 3.0, 0.0]).expect("valid");
        let two = simulated_annealing(&dm, &AnnealingConfig::default(), &mut rng).expect("solved");
        assert!(is_permutation(&two.tour, 2));
        assert!((two.distance - 6.0).abs() < 1e-10);
    }

    #[test]
    fn test_sa_empty() {
        let mut rng = StdRng::seed_from_u64(1);
        assert!(matches!(
            simulated_annealing(&DistanceMatrix::new(0), &AnnealingConfig::default(), &mut rng),
            Err(Error::EmptyInput)
        ));
    }

    #[test]
    fn test_distinct_positions() {
        let mut rng = StdRng::seed_from_u64(3);
        for _ in 0..1000 {
            let (i, j) = distinct_positions(5, &mut rng);
            assert!(i < j && j < 5);
        }
        assert_eq!(distinct_positions(2, &mut rng), (0, 1));
    }

    #[test]
    fn test_config_validate() {
        assert!(AnnealingConfig::default().validate().is_ok());
        assert!(AnnealingConfig::default().with_cooling_rate(1.0).validate().is_err());
        assert!(AnnealingConfig::default().with_cooling_rate(0.0).validate().is_err());
        assert!(AnnealingConfig::default()
            .with_initial_temperature(-5.0)
            .validate()
            .is_err());
        assert!(AnnealingConfig::default()
            .with_min_temperature(f64::NAN)
            .validate()
            .is_err());
    }

    #[test]
    fn test_config_partial_json() {
        let config: AnnealingConfig =
            serde_json::from_str(r#"{"cooling_rate": 0.99}"#).expect("parse");
        assert!((config.cooling_rate - 0.99).abs() < 1e-12);
        assert_eq!(config.max_iterations, 1000);
    }
}
