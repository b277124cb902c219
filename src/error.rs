//! Crate-level error type.

use thiserror::Error as ThisError;

/// Errors raised by matrix construction, the solvers and the run coordinator.
#[derive(Debug, ThisError)]
pub enum Error {
    /// No locations (or a 0×0 matrix) were supplied.
    #[error("at least one location is required")]
    EmptyInput,
    /// The coordinator needs more locations than it was given.
    #[error("a tour needs at least {required} locations, got {actual}")]
    TooFewLocations {
        /// Minimum accepted number of locations.
        required: usize,
        /// Number of locations supplied.
        actual: usize,
    },
    /// Explicit matrix data is malformed.
    #[error("invalid distance matrix: {0}")]
    InvalidMatrix(String),
    /// A tour is not a permutation of the location indices.
    #[error("invalid tour: {0}")]
    InvalidTour(String),
    /// The algorithm could not construct any complete tour.
    #[error("{algorithm} found no feasible tour")]
    NoFeasibleTour {
        /// Registry name of the failing algorithm.
        algorithm: &'static str,
    },
    /// A configuration value is outside its domain.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
    /// A configuration document could not be parsed.
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

/// Result type used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Builds an [`Error::InvalidMatrix`].
    pub fn invalid_matrix(message: impl Into<String>) -> Self {
        Self::InvalidMatrix(message.into())
    }

    /// Builds an [`Error::InvalidTour`].
    pub fn invalid_tour(message: impl Into<String>) -> Self {
        Self::InvalidTour(message.into())
    }

    /// Builds an [`Error::InvalidConfig`].
    pub fn invalid_config(message: impl Into<String>) -> Self {
        Self::InvalidConfig(message.into())
    }
}
