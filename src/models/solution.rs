//! Solver output type.

use serde::{Deserialize, Serialize};

/// A tour produced by one of the heuristics.
///
/// The tour is stored in open form: `n` indices, the edge from the last
/// index back to the first is implied. `progress` holds the tour lengths the
/// solver recorded while it ran, in order.
///
/// # Examples
///
/// ```
/// use geo_tsp::models::TourSolution;
///
/// let sol = TourSolution::new(vec![0, 2, 1], 12.0, vec![15.0, 12.0]);
/// assert_eq!(sol.len(), 3);
/// assert_eq!(sol.best_progress(), Some(12.0));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TourSolution {
    /// Visiting order as location indices, open form.
    pub tour: Vec<usize>,
    /// Total cyclic length of `tour`.
    pub distance: f64,
    /// Recorded lengths over the course of the run.
    pub progress: Vec<f64>,
}

impl TourSolution {
    /// Creates a new solution.
    pub fn new(tour: Vec<usize>, distance: f64, progress: Vec<f64>) -> Self {
        Self {
            tour,
            distance,
            progress,
        }
    }

    /// Number of locations in the tour.
    pub fn len(&self) -> usize {
        self.tour.len()
    }

    /// Returns `true` if the tour visits no location.
    pub fn is_empty(&self) -> bool {
        self.tour.is_empty()
    }

    /// Last value of the progress trace.
    pub fn best_progress(&self) -> Option<f64> {
        self.progress.last().copied()
    }

    /// Returns `true` if this solution is strictly shorter than `other`.
    pub fn is_better_than(&self, other: &Self) -> bool {
        self.distance < other.distance
    }
}
