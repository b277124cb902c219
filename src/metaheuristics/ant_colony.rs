//! Ant colony optimization (Ant System).
//!
//! # Algorithm
//!
//! Each iteration releases `num_ants` ants from uniformly random start
//! nodes. An ant at node `i` moves to an unvisited node `j` with probability
//! proportional to
//!
//! ```text
//! τ(i, j)^α · (1 / d(i, j))^β
//! ```
//!
//! and closes its path by returning to the start. After every ant has run,
//! all trails evaporate by a factor `1 - decay`, then every completed path
//! deposits `1 / length` on each of its edges. Evaporation always happens
//! before any deposit.
//!
//! Zero-length edges (duplicate locations) have infinite weight; an ant
//! standing next to one picks uniformly among its zero-length edges. An ant
//! fails when the weights over its remaining candidates all underflow to
//! zero or one of them is NaN. Failed ants are dropped from the iteration.
//!
//! # Reference
//!
//! Dorigo, M., Maniezzo, V. & Colorni, A. (1996). "Ant system: optimization
//! by a colony of cooperating agents", *IEEE Transactions on Systems, Man,
//! and Cybernetics, Part B* 26(1), 29-41.

use log::{debug, trace, warn};
use rand::distr::weighted::WeightedIndex;
use rand::distr::Distribution;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::pheromone::PheromoneTable;
use crate::distance::DistanceMatrix;
use crate::error::{Error, Result};
use crate::models::{open_cycle, tour_length, validate_tour, TourSolution};

const ALGORITHM: &str = "ant colony";

/// Tuning for [`ant_colony`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AntColonyConfig {
    /// Ants released per iteration.
    pub num_ants: usize,
    /// Number of iterations; `None` means twice the number of locations.
    pub iterations: Option<usize>,
    /// Fraction of every trail that evaporates per iteration.
    pub decay: f64,
    /// Pheromone exponent (α).
    pub alpha: f64,
    /// Distance heuristic exponent (β).
    pub beta: f64,
}

impl Default for AntColonyConfig {
    fn default() -> Self {
        Self {
            num_ants: 100,
            iterations: None,
            decay: 0.5,
            alpha: 1.0,
            beta: 2.0,
        }
    }
}

impl AntColonyConfig {
    /// Sets the number of ants per iteration.
    #[must_use]
    pub fn with_num_ants(mut self, num_ants: usize) -> Self {
        self.num_ants = num_ants;
        self
    }

    /// Sets a fixed iteration count.
    #[must_use]
    pub fn with_iterations(mut self, iterations: usize) -> Self {
        self.iterations = Some(iterations);
        self
    }

    /// Sets the evaporation fraction.
    #[must_use]
    pub fn with_decay(mut self, decay: f64) -> Self {
        self.decay = decay;
        self
    }

    /// Sets the pheromone exponent (α).
    #[must_use]
    pub fn with_alpha(mut self, alpha: f64) -> Self {
        self.alpha = alpha;
        self
    }

    /// Sets the distance exponent (β).
    #[must_use]
    pub fn with_beta(mut self, beta: f64) -> Self {
        self.beta = beta;
        self
    }

    /// Iteration count used for `n` locations.
    pub fn iterations_for(&self, n: usize) -> usize {
        self.iterations.unwrap_or(2 * n)
    }

    /// Checks parameter domains.
    pub fn validate(&self) -> Result<()> {
        if self.num_ants == 0 {
            return Err(Error::invalid_config("ant colony needs at least one ant"));
        }
        if self.iterations == Some(0) {
            return Err(Error::invalid_config("ant colony needs at least one iteration"));
        }
        if !(0.0..=1.0).contains(&self.decay) {
            return Err(Error::invalid_config(format!(
                "decay must lie in [0, 1], got {}",
                self.decay
            )));
        }
        for (name, value) in [("alpha", self.alpha), ("beta", self.beta)] {
            if !value.is_finite() || value < 0.0 {
                return Err(Error::invalid_config(format!(
                    "{name} must be finite and non-negative, got {value}"
                )));
            }
        }
        Ok(())
    }
}

/// Runs ant colony optimization.
///
/// The progress trace gets one entry per iteration: the best length found
/// so far. Iterations that end before any ant has ever succeeded add
/// nothing, so the trace never contains a placeholder value.
///
/// # Errors
///
/// - [`Error::EmptyInput`] for a 0×0 matrix.
/// - [`Error::NoFeasibleTour`] if no ant completed a path in any iteration.
///
/// # Examples
///
/// ```
/// use rand::SeedableRng;
/// use rand::rngs::StdRng;
/// use geo_tsp::distance::DistanceMatrix;
/// use geo_tsp::metaheuristics::{ant_colony, AntColonyConfig};
///
/// let dm = DistanceMatrix::from_data(4, vec![
///     0.0, 1.0, 2.0, 1.0,
///     1.0, 0.0, 1.0, 2.0,
///     2.0, 1.0, 0.0, 1.0,
///     1.0, 2.0, 1.0, 0.0,
/// ]).unwrap();
///
/// let config = AntColonyConfig::default().with_num_ants(10);
/// let mut rng = StdRng::seed_from_u64(42);
/// let sol = ant_colony(&dm, &config, &mut rng).unwrap();
/// assert_eq!(sol.tour.len(), 4);
/// assert!((sol.distance - 4.0).abs() < 1e-10);
/// ```
pub fn ant_colony<R: Rng + ?Sized>(
    distances: &DistanceMatrix,
    config: &AntColonyConfig,
    rng: &mut R,
) -> Result<TourSolution> {
    let n = distances.size();
    if n == 0 {
        return Err(Error::EmptyInput);
    }

    let iterations = config.iterations_for(n);
    debug!(
        "ant colony: n={n}, ants={}, iterations={iterations}, decay={}, alpha={}, beta={}",
        config.num_ants, config.decay, config.alpha, config.beta
    );

    let mut pheromones = PheromoneTable::new(n);
    let mut best: Option<(Vec<usize>, f64)> = None;
    let mut progress = Vec::with_capacity(iterations);
    let mut paths: Vec<(Vec<usize>, f64)> = Vec::with_capacity(config.num_ants);

    for iteration in 0..iterations {
        paths.clear();

        for _ in 0..config.num_ants {
            let start = rng.random_range(0..n);
            let Some(path) = construct_path(distances, &pheromones, config, start, rng) else {
                continue;
            };
            let length = tour_length(&path[..path.len() - 1], distances);
            if !length.is_finite() {
                continue;
            }
            let improves = match &best {
                Some((_, best_length)) => length < *best_length,
                None => true,
            };
            if improves {
                best = Some((path.clone(), length));
            }
            paths.push((path, length));
        }

        if paths.is_empty() {
            warn!("ant colony: every ant failed in iteration {iteration}");
        }

        pheromones.evaporate(config.decay);
        for (path, length) in &paths {
            if *length > 0.0 {
                pheromones.deposit(path, 1.0 / length);
            }
        }

        if let Some((_, best_length)) = &best {
            progress.push(*best_length);
            trace!("ant colony: iteration {iteration}, best={best_length:.3}");
        }
    }

    let (path, length) = best.ok_or(Error::NoFeasibleTour {
        algorithm: ALGORITHM,
    })?;
    let tour = open_cycle(path);
    validate_tour(&tour, n)?;
    debug!("ant colony: best={length:.3}");
    Ok(TourSolution::new(tour, length, progress))
}

/// Builds one ant's closed path (`n + 1` entries, last equal to first).
///
/// Returns `None` when the ant gets stuck on an unusable distribution.
fn construct_path<R: Rng + ?Sized>(
    distances: &DistanceMatrix,
    pheromones: &PheromoneTable,
    config: &AntColonyConfig,
    start: usize,
    rng: &mut R,
) -> Option<Vec<usize>> {
    let n = distances.size();
    let mut path = Vec::with_capacity(n + 1);
    let mut visited = vec![false; n];
    let mut candidates = Vec::with_capacity(n);
    let mut weights = Vec::with_capacity(n);

    path.push(start);
    visited[start] = true;
    let mut current = start;

    for _ in 1..n {
        candidates.clear();
        weights.clear();
        for next in 0..n {
            if visited[next] {
                continue;
            }
            candidates.push(next);
            weights.push(transition_weight(distances, pheromones, config, current, next));
        }

        let choice = transition_distribution(&weights)?.sample(rng);
        current = candidates[choice];
        visited[current] = true;
        path.push(current);
    }

    // Return to start
    path.push(start);
    Some(path)
}

/// Unnormalised attractiveness of moving from `from` to `to`.
fn transition_weight(
    distances: &DistanceMatrix,
    pheromones: &PheromoneTable,
    config: &AntColonyConfig,
    from: usize,
    to: usize,
) -> f64 {
    let trail = pheromones.get(from, to).powf(config.alpha);
    let visibility = (1.0 / distances.get(from, to)).powf(config.beta);
    trail * visibility
}

/// Cumulative distribution over candidate weights, indexed like `weights`.
///
/// Infinite weights come from zero-length edges; when present, the draw is
/// uniform over those candidates and every finite weight gets probability 0.
/// Returns `None` if any weight is NaN or if they sum to zero.
fn transition_distribution(weights: &[f64]) -> Option<WeightedIndex<f64>> {
    if weights.iter().any(|w| w.is_nan()) {
        return None;
    }
    if weights.iter().any(|w| w.is_infinite()) {
        let nearest = weights
            .iter()
            .map(|w| if w.is_infinite() { 1.0 } else { 0.0 });
        return WeightedIndex::new(nearest).ok();
    }
    WeightedIndex::new(weights).ok()
}
