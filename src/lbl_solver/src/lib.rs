#![warn(clippy::pedantic)]
#![allow(clippy::must_use_candidate, clippy::missing_panics_doc)]

//! A layer-by-layer solver: six phases, each a bounded loop of
//! recognise-a-case then apply its canned algorithm.

pub mod phases;
pub mod pipeline;

pub use phases::{Phase, PhaseKind, Side};
pub use pipeline::{PhaseBounds, PhaseOutcome, PhaseReport, Solution, SolverPipeline};

/// Prefix for a log line announcing a long-running step.
#[macro_export]
macro_rules! start {
    ($msg:expr) => {
        concat!("⏳ ", $msg)
    };
}

/// Prefix for progress within a step.
#[macro_export]
macro_rules! working {
    ($msg:expr) => {
        concat!("🛠  ", $msg)
    };
}

/// Prefix for a step that finished.
#[macro_export]
macro_rules! success {
    ($msg:expr) => {
        concat!("✅ ", $msg)
    };
}
