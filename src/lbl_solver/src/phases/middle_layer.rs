use cube_core::{
    CubeState, Face, Move,
    notation::{F, F_PRIME, L, L_PRIME, R, R_PRIME, U, U_PRIME},
};

use super::{FirstLayerCorners, Phase, PhaseKind, Side, on_side, sticker};

/// The first two layers.
pub struct MiddleLayer;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum MiddleLayerCase {
    /// A top edge lined up with its side, belonging between that side and
    /// the one to its right.
    InsertRight,
    /// Same, but the edge belongs to the left.
    InsertLeft,
}

impl Phase for MiddleLayer {
    type Case = MiddleLayerCase;

    const KIND: PhaseKind = PhaseKind::MiddleLayer;

    fn is_complete(state: &CubeState) -> bool {
        FirstLayerCorners::is_complete(state)
            && Side::ALL.into_iter().all(|side| {
                on_side(state, side, 1, 0) == side.face() && on_side(state, side, 1, 2) == side.face()
            })
    }

    fn classify(state: &CubeState) -> Option<(MiddleLayerCase, Side)> {
        let top = |side: Side| sticker(state, Face::U, side.top_edge());

        for side in Side::ALL {
            if on_side(state, side, 0, 1) != side.face() {
                continue;
            }

            if top(side) == side.right().face() {
                return Some((MiddleLayerCase::InsertRight, side));
            }
            if top(side) == side.left().face() {
                return Some((MiddleLayerCase::InsertLeft, side));
            }
        }

        // Some top edge still belongs in the middle layer
        if Side::ALL
            .into_iter()
            .any(|side| top(side) != Face::U && on_side(state, side, 0, 1) != Face::U)
        {
            return None;
        }

        // Every middle edge is stuck in a wrong slot; pop one out
        Side::ALL
            .into_iter()
            .find(|&side| {
                on_side(state, side, 1, 2) != side.face()
                    || on_side(state, side.right(), 1, 0) != side.right().face()
            })
            .map(|side| (MiddleLayerCase::InsertRight, side))
    }

    fn algorithm(case: MiddleLayerCase) -> &'static [Move] {
        match case {
            MiddleLayerCase::InsertRight => &[U, R, U_PRIME, R_PRIME, U_PRIME, F_PRIME, U, F],
            MiddleLayerCase::InsertLeft => &[U_PRIME, L_PRIME, U, L, U, F, U_PRIME, F_PRIME],
        }
    }
}

#[cfg(test)]
mod tests {
    use cube_core::{CubeState, MoveSeq, apply_moves, apply_sequence};

    use super::{MiddleLayer, MiddleLayerCase};
    use crate::phases::{Phase, Side};

    fn after(moves: &str) -> CubeState {
        let mut cube = CubeState::new_solved();
        apply_sequence(&mut cube, moves).unwrap();
        cube
    }

    fn undoing(alg: &[cube_core::Move]) -> CubeState {
        let mut cube = CubeState::new_solved();
        apply_moves(&mut cube, &MoveSeq::new(alg.to_vec()).inverse());
        cube
    }

    #[test]
    fn complete_needs_both_lower_layers() {
        assert!(MiddleLayer::is_complete(&CubeState::new_solved()));
        assert!(MiddleLayer::is_complete(&after("U R U R' U' R' F R F'")));
        assert!(!MiddleLayer::is_complete(&undoing(MiddleLayer::algorithm(
            MiddleLayerCase::InsertRight
        ))));
    }

    #[test]
    fn recognises_edges_ready_to_insert() {
        let right = undoing(MiddleLayer::algorithm(MiddleLayerCase::InsertRight));
        assert_eq!(
            MiddleLayer::classify(&right),
            Some((MiddleLayerCase::InsertRight, Side::F))
        );

        let left = undoing(MiddleLayer::algorithm(MiddleLayerCase::InsertLeft));
        assert_eq!(
            MiddleLayer::classify(&left),
            Some((MiddleLayerCase::InsertLeft, Side::F))
        );
    }

    #[test]
    fn pops_out_an_edge_stuck_in_a_wrong_slot() {
        let insert = MoveSeq::new(MiddleLayer::algorithm(MiddleLayerCase::InsertRight).to_vec());
        let mut cube = CubeState::new_solved();
        apply_moves(&mut cube, &insert);
        apply_sequence(&mut cube, "U2").unwrap();
        apply_moves(&mut cube, &insert);

        assert!(!MiddleLayer::is_complete(&cube));
        assert_eq!(
            MiddleLayer::classify(&cube),
            Some((MiddleLayerCase::InsertRight, Side::F))
        );
    }
}
