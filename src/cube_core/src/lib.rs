#![warn(clippy::pedantic)]
#![allow(clippy::missing_panics_doc, clippy::must_use_candidate)]

//! The 3x3 cube: a facelet state, the eighteen face turns, and the compact
//! facelet string used to talk to other solvers.

pub mod engine;
mod face;
mod moves;
pub mod state;

pub use engine::{apply, apply_move, apply_moves, apply_sequence, state_after};
pub use face::Face;
pub use moves::{InvalidMoveToken, Move, MoveSeq, Turn, notation};
pub use state::{CubeState, FaceletStringError};
