use cube_core::{
    CubeState, Face, Move,
    notation::{F, F_PRIME, R, R_PRIME, U, U_PRIME},
};

use super::{Phase, PhaseKind, Side, sticker};

/// The four U edges showing U on top.
pub struct TopCross;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum TopCrossCase {
    /// No top edge oriented.
    Dot,
    /// The left and right edges oriented.
    Line,
    /// The back and left edges oriented.
    LShape,
}

fn oriented(state: &CubeState, side: Side) -> bool {
    sticker(state, Face::U, side.top_edge()) == Face::U
}

impl Phase for TopCross {
    type Case = TopCrossCase;

    const KIND: PhaseKind = PhaseKind::TopCross;

    fn is_complete(state: &CubeState) -> bool {
        Side::ALL.into_iter().all(|side| oriented(state, side))
    }

    fn classify(state: &CubeState) -> Option<(TopCrossCase, Side)> {
        let [front, right, back, left] = Side::ALL.map(|side| oriented(state, side));

        let case = match [front, right, back, left] {
            [false, false, false, false] => TopCrossCase::Dot,
            [false, true, false, true] => TopCrossCase::Line,
            [false, false, true, true] => TopCrossCase::LShape,
            _ => return None,
        };

        Some((case, Side::F))
    }

    fn algorithm(case: TopCrossCase) -> &'static [Move] {
        match case {
            TopCrossCase::Dot => &[
                F, R, U, R_PRIME, U_PRIME, F_PRIME, U, F, R, U, R_PRIME, U_PRIME, F_PRIME,
            ],
            TopCrossCase::Line => &[F, R, U, R_PRIME, U_PRIME, F_PRIME],
            TopCrossCase::LShape => &[F, U, R, U_PRIME, R_PRIME, F_PRIME],
        }
    }
}
