//! Distance model.
//!
//! Converts geographic coordinates into a symmetric kilometer matrix using
//! the haversine great-circle formula.

mod haversine;
mod matrix;

pub use haversine::{haversine_km, EARTH_RADIUS_KM};
pub use matrix::{build_matrix, DistanceMatrix};
