use cube_core::{
    CubeState, Move,
    notation::{F, F_PRIME, R, R_PRIME, R2, U, U_PRIME},
};

use super::{Phase, PhaseKind, Side, on_side};

/// Permuting the last layer, which finishes the cube.
pub struct Permutation;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum PermutationCase {
    /// Two top corners swapped along the left side.
    AdjacentCornerSwap,
    /// Two top corners swapped across the diagonal.
    DiagonalCornerSwap,
    /// Corners solved, three edges cycling.
    EdgeCycle,
}

/// Both top corners of the side show the same color.
fn headlights(state: &CubeState, side: Side) -> bool {
    on_side(state, side, 0, 0) == on_side(state, side, 0, 2)
}

/// The whole top row of the side shows the same color, given headlights.
fn bar(state: &CubeState, side: Side) -> bool {
    on_side(state, side, 0, 0) == on_side(state, side, 0, 1)
}

impl Phase for Permutation {
    type Case = PermutationCase;

    const KIND: PhaseKind = PhaseKind::Permutation;

    fn is_complete(state: &CubeState) -> bool {
        state.is_solved()
    }

    fn classify(state: &CubeState) -> Option<(PermutationCase, Side)> {
        let lights = Side::ALL.map(|side| headlights(state, side));

        let case = if !lights.iter().all(|&lit| lit) {
            if !lights.iter().any(|&lit| lit) {
                PermutationCase::DiagonalCornerSwap
            } else if headlights(state, Side::L) {
                PermutationCase::AdjacentCornerSwap
            } else {
                return None;
            }
        } else {
            let bars = Side::ALL.map(|side| bar(state, side));

            // Every bar present: only the top layer's angle is left to fix
            if bars.iter().all(|&b| b) {
                return None;
            }

            if bars.iter().any(|&b| b) && !bar(state, Side::B) {
                return None;
            }

            PermutationCase::EdgeCycle
        };

        Some((case, Side::F))
    }

    fn algorithm(case: PermutationCase) -> &'static [Move] {
        match case {
            PermutationCase::AdjacentCornerSwap => &[
                R, U, R_PRIME, F_PRIME, R, U, R_PRIME, U_PRIME, R_PRIME, F, R2, U_PRIME, R_PRIME,
            ],
            PermutationCase::DiagonalCornerSwap => &[
                F, R, U_PRIME, R_PRIME, U_PRIME, R, U, R_PRIME, F_PRIME, R, U, R_PRIME, U_PRIME,
                R_PRIME, F, R, F_PRIME,
            ],
            PermutationCase::EdgeCycle => &[R, U_PRIME, R, U, R, U, R, U_PRIME, R_PRIME, U_PRIME, R2],
        }
    }
}
