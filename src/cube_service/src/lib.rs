#![warn(clippy::pedantic)]
#![allow(clippy::must_use_candidate, clippy::missing_panics_doc)]

pub mod config;
pub mod scramble;
pub mod service;
pub mod twophase;

pub use config::{Config, ConfigError};
pub use scramble::generate_random_scramble;
pub use service::{CubeService, SolveError, SolveMethod, SolveReport, Validation, validate};
pub use twophase::{ExternalSolverError, OptimalSolver, TwophaseProcess};
