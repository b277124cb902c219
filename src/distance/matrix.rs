//! Dense distance matrix.

use crate::error::{Error, Result};
use crate::models::Location;

/// A dense n×n distance matrix stored in row-major order.
///
/// Built from geographic locations with the haversine formula, or from an
/// explicit grid of kilometers.
///
/// # Examples
///
/// ```
/// use geo_tsp::models::Location;
/// use geo_tsp::distance::DistanceMatrix;
///
/// let locations = vec![
///     Location::new("a", 0.0, 0.0),
///     Location::new("b", 0.0, 1.0),
///     Location::new("c", 1.0, 1.0),
/// ];
/// let dm = DistanceMatrix::from_locations(&locations);
/// assert!((dm.get(0, 1) - 111.195).abs() < 1e-3);
/// assert_eq!(dm.size(), 3);
/// ```
#[derive(Debug, Clone)]
pub struct DistanceMatrix {
    data: Vec<f64>,
    size: usize,
}

impl DistanceMatrix {
    /// Creates a distance matrix of the given size, initialized to zero.
    pub fn new(size: usize) -> Self {
        Self {
            data: vec![0.0; size * size],
            size,
        }
    }

    /// Computes the great-circle distance matrix of the given locations.
    ///
    /// Each unordered pair is evaluated once and mirrored; the diagonal
    /// stays at zero.
    pub fn from_locations(locations: &[Location]) -> Self {
        let n = locations.len();
        let mut dm = Self::new(n);
        for i in 0..n {
            for j in (i + 1)..n {
                let d = locations[i].distance_to(&locations[j]);
                dm.set(i, j, d);
                dm.set(j, i, d);
            }
        }
        dm
    }

    /// Creates a distance matrix from an explicit n×n grid.
    ///
    /// Fails if the data length doesn't match `size * size` or if any entry
    /// is negative or not finite.
    pub fn from_data(size: usize, data: Vec<f64>) -> Result<Self> {
        if data.len() != size * size {
            return Err(Error::invalid_matrix(format!(
                "expected {} entries for a {size}x{size} matrix, got {}",
                size * size,
                data.len()
            )));
        }
        if let Some(bad) = data.iter().find(|d| !d.is_finite() || **d < 0.0) {
            return Err(Error::invalid_matrix(format!(
                "distances must be finite and non-negative, found {bad}"
            )));
        }
        Ok(Self { data, size })
    }

    /// Returns the distance from location `from` to location `to`.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of bounds.
    pub fn get(&self, from: usize, to: usize) -> f64 {
        self.data[from * self.size + to]
    }

    /// Sets the distance from location `from` to location `to`.
    pub fn set(&mut self, from: usize, to: usize, distance: f64) {
        self.data[from * self.size + to] = distance;
    }

    /// Number of locations in this matrix.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns `true` if the matrix is symmetric within the given tolerance.
    pub fn is_symmetric(&self, tol: f64) -> bool {
        for i in 0..self.size {
            for j in (i + 1)..self.size {
                if (self.get(i, j) - self.get(j, i)).abs() > tol {
                    return false;
                }
            }
        }
        true
    }

    /// Returns the nearest neighbor of `from` among the given candidates.
    ///
    /// Ties go to the candidate that appears first. Returns `None` if
    /// `candidates` is empty.
    pub fn nearest_neighbor(&self, from: usize, candidates: &[usize]) -> Option<usize> {
        candidates
            .iter()
            .copied()
            .min_by(|&a, &b| self.get(from, a).total_cmp(&self.get(from, b)))
    }
}

/// Builds the haversine distance matrix for a non-empty set of locations.
///
/// Callers that need a meaningful tour must still enforce `n >= 3`; this
/// function only rejects the empty set.
pub fn build_matrix(locations: &[Location]) -> Result<DistanceMatrix> {
    if locations.is_empty() {
        return Err(Error::EmptyInput);
    }
    Ok(DistanceMatrix::from_locations(locations))
}
