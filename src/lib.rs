//! # geo-tsp
//!
//! Traveling salesman heuristics over geographic coordinates. Locations are
//! turned into a great-circle distance matrix, then any subset of four
//! heuristics can be run on it and compared.
//!
//! ## Modules
//!
//! - [`models`] — Domain model types (Location, TourSolution) and the tour evaluator
//! - [`distance`] — Haversine distance and the dense distance matrix
//! - [`constructive`] — Constructive heuristics (Nearest Neighbor)
//! - [`local_search`] — Local search (2-opt)
//! - [`metaheuristics`] — Simulated annealing and ant colony optimization
//! - [`runner`] — Algorithm registry and run coordinator
//! - [`error`] — Crate error type

pub mod constructive;
pub mod distance;
pub mod error;
pub mod local_search;
pub mod metaheuristics;
pub mod models;
pub mod runner;

pub use error::{Error, Result};
