//! Run coordination: select algorithms, time them, collect uniform records.
//!
//! - [`Algorithm`] — Registry of the four heuristics, in output order
//! - [`RunConfig`] — Seed, concurrency and per-algorithm tuning
//! - [`run_algorithms`] — Runs a selection and returns one [`RunRecord`] each

mod algorithm;
mod config;
mod coordinator;
mod record;

pub use algorithm::Algorithm;
pub use config::RunConfig;
pub use coordinator::{
    best_record, equalized_progress, run_algorithms, run_named, solve, solve_locations,
};
pub use record::{RunOutcome, RunRecord};
