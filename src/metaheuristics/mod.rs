//! Metaheuristics for TSP.
//!
//! - [`simulated_annealing`] — Segment inversion with temperature-controlled acceptance
//! - [`ant_colony`] — Ant System with symmetric pheromone trails

mod annealing;
mod ant_colony;
mod pheromone;

pub use annealing::{simulated_annealing, AnnealingConfig};
pub use ant_colony::{ant_colony, AntColonyConfig};
pub use pheromone::PheromoneTable;
