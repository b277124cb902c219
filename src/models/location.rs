//! Geographic location type.

use serde::{Deserialize, Serialize};

use crate::distance::haversine_km;

/// A named point on the globe, in decimal degrees.
///
/// Locations are identified by their position in the slice handed to the
/// solvers; the name is carried for display only.
///
/// # Examples
///
/// ```
/// use geo_tsp::models::Location;
///
/// let paris = Location::new("Paris", 48.8566, 2.3522);
/// let london = Location::new("London", 51.5074, -0.1278);
/// let km = paris.distance_to(&london);
/// assert!((km - 343.5).abs() < 1.0);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    name: String,
    latitude: f64,
    longitude: f64,
}

impl Location {
    /// Creates a new location.
    pub fn new(name: impl Into<String>, latitude: f64, longitude: f64) -> Self {
        Self {
            name: name.into(),
            latitude,
            longitude,
        }
    }

    /// Display name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Latitude in decimal degrees.
    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    /// Longitude in decimal degrees.
    pub fn longitude(&self) -> f64 {
        self.longitude
    }

    /// Great-circle distance to another location, in kilometers.
    pub fn distance_to(&self, other: &Location) -> f64 {
        haversine_km(self.latitude, self.longitude, other.latitude, other.longitude)
    }

    /// Mean coordinate of a set of locations as `(latitude, longitude)`.
    ///
    /// Returns `None` for an empty slice.
    pub fn centroid(locations: &[Location]) -> Option<(f64, f64)> {
        if locations.is_empty() {
            return None;
        }
        let n = locations.len() as f64;
        let lat = locations.iter().map(|l| l.latitude).sum::<f64>() / n;
        let lon = locations.iter().map(|l| l.longitude).sum::<f64>() / n;
        Some((lat, lon))
    }
}
