//! Domain model types for geographic TSP.
//!
//! Provides locations with geographic coordinates, the solver output type,
//! and the shared tour evaluator used by every heuristic.

mod location;
mod solution;
mod tour;

pub use location::Location;
pub use solution::TourSolution;
pub use tour::{is_permutation, open_cycle, random_tour, tour_length, validate_tour};
