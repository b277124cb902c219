//! Registry of the available heuristics.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A heuristic the coordinator can run.
///
/// [`Algorithm::ALL`] fixes the registry order, which is also the order of
/// the coordinator's output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Algorithm {
    /// Greedy nearest-neighbor construction
    #[serde(rename = "Nearest Neighbor")]
    NearestNeighbor,
    /// 2-opt local search from a random tour
    #[serde(rename = "2-opt")]
    TwoOpt,
    /// Simulated annealing
    #[serde(rename = "Simulated Annealing")]
    SimulatedAnnealing,
    /// Ant colony optimization
    #[serde(rename = "ant colony")]
    AntColony,
}

impl Algorithm {
    /// Every algorithm, in registry order.
    pub const ALL: [Algorithm; 4] = [
        Self::NearestNeighbor,
        Self::TwoOpt,
        Self::SimulatedAnnealing,
        Self::AntColony,
    ];

    /// Registry identifier.
    pub fn name(&self) -> &'static str {
        match self {
            Self::NearestNeighbor => "Nearest Neighbor",
            Self::TwoOpt => "2-opt",
            Self::SimulatedAnnealing => "Simulated Annealing",
            Self::AntColony => "ant colony",
        }
    }

    /// Position in [`Algorithm::ALL`].
    pub fn slot(&self) -> usize {
        match self {
            Self::NearestNeighbor => 0,
            Self::TwoOpt => 1,
            Self::SimulatedAnnealing => 2,
            Self::AntColony => 3,
        }
    }

    /// Looks up a registry identifier, ignoring ASCII case.
    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|a| a.name().eq_ignore_ascii_case(s.trim()))
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
