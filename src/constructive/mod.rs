//! Constructive heuristics for building TSP tours from scratch.
//!
//! - [`nearest_neighbor_tour`] — Greedy nearest-neighbor from location 0, O(n²)

mod nearest_neighbor;

pub use nearest_neighbor::nearest_neighbor_tour;
