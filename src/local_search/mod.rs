//! Local search for improving TSP tours.
//!
//! - [`two_opt`] — First-improvement 2-opt edge reversal from a random tour

mod two_opt;

pub use two_opt::{two_opt, TwoOptConfig};
