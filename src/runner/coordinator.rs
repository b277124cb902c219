//! Runs a selection of heuristics on one distance matrix and collects
//! comparable results.

use std::time::Instant;

use log::{info, warn};
use rand::Rng;
use rayon::prelude::*;

use super::{Algorithm, RunConfig, RunOutcome, RunRecord};
use crate::constructive::nearest_neighbor_tour;
use crate::distance::{build_matrix, DistanceMatrix};
use crate::error::{Error, Result};
use crate::local_search::two_opt;
use crate::metaheuristics::{ant_colony, simulated_annealing};
use crate::models::{Location, TourSolution};

/// Runs a single algorithm with the settings from `config`.
pub fn solve<R: Rng + ?Sized>(
    algorithm: Algorithm,
    distances: &DistanceMatrix,
    config: &RunConfig,
    rng: &mut R,
) -> Result<TourSolution> {
    match algorithm {
        Algorithm::NearestNeighbor => nearest_neighbor_tour(distances),
        Algorithm::TwoOpt => two_opt(distances, &config.two_opt, rng),
        Algorithm::SimulatedAnnealing => simulated_annealing(distances, &config.annealing, rng),
        Algorithm::AntColony => ant_colony(distances, &config.ant_colony, rng),
    }
}

/// Runs every selected algorithm and returns one record per algorithm.
///
/// Records come back in registry order ([`Algorithm::ALL`]), not selection
/// order; duplicates in `selected` run once. An algorithm that finds no tour
/// yields a [`RunOutcome::NoSolution`] record instead of failing the run.
///
/// # Errors
///
/// - [`Error::InvalidConfig`] if `config` does not validate.
/// - [`Error::TooFewLocations`] if the matrix is smaller than
///   `config.min_locations`.
///
/// # Examples
///
/// ```
/// use geo_tsp::models::Location;
/// use geo_tsp::distance::DistanceMatrix;
/// use geo_tsp::runner::{run_algorithms, Algorithm, RunConfig};
///
/// let locations = vec![
///     Location::new("a", 0.0, 0.0),
///     Location::new("b", 0.0, 1.0),
///     Location::new("c", 1.0, 1.0),
///     Location::new("d", 1.0, 0.0),
/// ];
/// let dm = DistanceMatrix::from_locations(&locations);
/// let config = RunConfig::default().with_seed(7);
///
/// let records = run_algorithms(
///     &[Algorithm::TwoOpt, Algorithm::NearestNeighbor],
///     &dm,
///     &config,
/// ).unwrap();
/// assert_eq!(records.len(), 2);
/// assert_eq!(records[0].algorithm, Algorithm::NearestNeighbor);
/// assert_eq!(records[1].algorithm, Algorithm::TwoOpt);
/// ```
pub fn run_algorithms(
    selected: &[Algorithm],
    distances: &DistanceMatrix,
    config: &RunConfig,
) -> Result<Vec<RunRecord>> {
    config.validate()?;
    let n = distances.size();
    if n < config.min_locations {
        return Err(Error::TooFewLocations {
            required: config.min_locations,
            actual: n,
        });
    }

    let chosen: Vec<Algorithm> = Algorithm::ALL
        .into_iter()
        .filter(|a| selected.contains(a))
        .collect();

    let records = if config.parallel {
        chosen
            .par_iter()
            .map(|&algorithm| run_one(algorithm, distances, config))
            .collect()
    } else {
        chosen
            .iter()
            .map(|&algorithm| run_one(algorithm, distances, config))
            .collect()
    };
    Ok(records)
}

/// Like [`run_algorithms`], selecting algorithms by registry name.
///
/// Names that are not in the registry are skipped.
pub fn run_named(
    names: &[&str],
    distances: &DistanceMatrix,
    config: &RunConfig,
) -> Result<Vec<RunRecord>> {
    let selected: Vec<Algorithm> = names
        .iter()
        .filter_map(|name| {
            let algorithm = Algorithm::parse(name);
            if algorithm.is_none() {
                warn!("unknown algorithm {name:?} ignored");
            }
            algorithm
        })
        .collect();
    run_algorithms(&selected, distances, config)
}

/// Builds the distance matrix for `locations` and runs the selected algorithms.
pub fn solve_locations(
    locations: &[Location],
    selected: &[Algorithm],
    config: &RunConfig,
) -> Result<Vec<RunRecord>> {
    let distances = build_matrix(locations)?;
    run_algorithms(selected, &distances, config)
}

/// The solved record with the shortest tour.
///
/// Ties keep the earlier record. Returns `None` if nothing was solved.
pub fn best_record(records: &[RunRecord]) -> Option<&RunRecord> {
    let mut best: Option<(&RunRecord, &TourSolution)> = None;
    for record in records {
        let Some(solution) = record.solution() else {
            continue;
        };
        if best.map_or(true, |(_, b)| solution.is_better_than(b)) {
            best = Some((record, solution));
        }
    }
    best.map(|(record, _)| record)
}

/// Progress traces padded to a common length.
///
/// Each trace is extended with its own last value up to the longest trace so
/// they can be plotted against a shared iteration axis. Unsolved records and
/// empty traces produce empty vectors.
pub fn equalized_progress(records: &[RunRecord]) -> Vec<Vec<f64>> {
    let longest = records
        .iter()
        .filter_map(|r| r.progress().map(<[f64]>::len))
        .max()
        .unwrap_or(0);

    records
        .iter()
        .map(|r| {
            let trace = r.progress().unwrap_or(&[]);
            let mut padded = trace.to_vec();
            if let Some(&last) = trace.last() {
                padded.resize(longest, last);
            }
            padded
        })
        .collect()
}

fn run_one(algorithm: Algorithm, distances: &DistanceMatrix, config: &RunConfig) -> RunRecord {
    let mut rng = config.rng_for(algorithm);
    let started = Instant::now();
    let result = solve(algorithm, distances, config, &mut rng);
    let elapsed = started.elapsed();

    let outcome = match result {
        Ok(solution) => {
            info!(
                "{algorithm}: length={:.3} km, {} trace points, {:.3?}",
                solution.distance,
                solution.progress.len(),
                elapsed
            );
            RunOutcome::Solved(solution)
        }
        Err(err) => {
            warn!("{algorithm}: {err}");
            RunOutcome::NoSolution {
                reason: err.to_string(),
            }
        }
    };

    RunRecord {
        algorithm,
        elapsed,
        outcome,
    }
}
