//! Per-algorithm run results.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::Algorithm;
use crate::models::TourSolution;

/// What a single algorithm invocation produced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum RunOutcome {
    /// The algorithm returned a tour.
    Solved(TourSolution),
    /// The algorithm could not build any tour.
    NoSolution {
        /// Human-readable cause.
        reason: String,
    },
}

/// Result of running one algorithm: identifier, outcome and wall-clock time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunRecord {
    /// Which heuristic ran.
    pub algorithm: Algorithm,
    /// Wall-clock time spent inside the solver.
    pub elapsed: Duration,
    /// Tour or failure.
    pub outcome: RunOutcome,
}

impl RunRecord {
    /// The solution, if the algorithm found one.
    pub fn solution(&self) -> Option<&TourSolution> {
        match &self.outcome {
            RunOutcome::Solved(solution) => Some(solution),
            RunOutcome::NoSolution { .. } => None,
        }
    }

    /// Visiting order, open form.
    pub fn tour(&self) -> Option<&[usize]> {
        self.solution().map(|s| s.tour.as_slice())
    }

    /// Total tour length.
    pub fn distance(&self) -> Option<f64> {
        self.solution().map(|s| s.distance)
    }

    /// Progress trace recorded by the algorithm.
    pub fn progress(&self) -> Option<&[f64]> {
        self.solution().map(|s| s.progress.as_slice())
    }

    /// Returns `true` if the algorithm produced a tour.
    pub fn is_solved(&self) -> bool {
        matches!(self.outcome, RunOutcome::Solved(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn solved() -> RunRecord {
        RunRecord {
            algorithm: Algorithm::TwoOpt,
            elapsed: Duration::from_millis(3),
            outcome: RunOutcome::Solved(TourSolution::new(vec![1, 0, 2], 9.0, vec![11.0, 9.0])),
        }
    }

    #[test]
    fn test_solved_accessors() {
        let record = solved();
        assert!(record.is_solved());
        assert_eq!(record.tour(), Some(&[1, 0, 2][..]));
        assert_eq!(record.distance(), Some(9.0));
        assert_eq!(record.progress(), Some(&[11.0, 9.0][..]));
    }

    #[test]
    fn test_unsolved_accessors() {
        let record = RunRecord {
            algorithm: Algorithm::AntColony,
            elapsed: Duration::ZERO,
            outcome: RunOutcome::NoSolution {
                reason: "ant colony found no feasible tour".into(),
            },
        };
        assert!(!record.is_solved());
        assert!(record.tour().is_none());
        assert!(record.distance().is_none());
        assert!(record.progress().is_none());
    }

    #[test]
    fn test_record_serializes() {
        let json = serde_json::to_value(solved()).expect("serialize");
        assert_eq!(json["algorithm"], "2-opt");
        assert_eq!(json["outcome"]["Solved"]["distance"], 9.0);
    }
}
