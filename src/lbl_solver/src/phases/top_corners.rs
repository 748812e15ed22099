use cube_core::{
    CubeState, Face, Move,
    notation::{R, R_PRIME, R2, U, U_PRIME, U2},
};

use super::{Phase, PhaseKind, Side};

/// The whole U face showing U, once the top cross is in.
pub struct TopCornerOrientation;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum TopCornerOrientationCase {
    Sune,
    Antisune,
    Pi,
    H,
    /// Two corners oriented, the front-left one twisted towards the front.
    TwoOriented,
}

type Sticker = (Face, usize, usize);

/// The top-layer corner stickers that recognition looks at.
const CORNER_STICKERS: [Sticker; 12] = [
    (Face::U, 0, 0),
    (Face::U, 0, 2),
    (Face::U, 2, 0),
    (Face::U, 2, 2),
    (Face::F, 0, 0),
    (Face::F, 0, 2),
    (Face::R, 0, 0),
    (Face::R, 0, 2),
    (Face::B, 0, 0),
    (Face::B, 0, 2),
    (Face::L, 0, 0),
    (Face::L, 0, 2),
];

const SUNE: &[Sticker] = &[(Face::U, 2, 0), (Face::F, 0, 2), (Face::R, 0, 2), (Face::B, 0, 2)];
const ANTISUNE: &[Sticker] = &[(Face::U, 0, 2), (Face::F, 0, 0), (Face::R, 0, 0), (Face::L, 0, 0)];
const PI: &[Sticker] = &[(Face::F, 0, 2), (Face::B, 0, 0), (Face::L, 0, 0), (Face::L, 0, 2)];
const H: &[Sticker] = &[(Face::R, 0, 0), (Face::R, 0, 2), (Face::L, 0, 0), (Face::L, 0, 2)];

/// Whether the corner stickers showing U are exactly `pattern`.
fn shows_u_exactly(state: &CubeState, pattern: &[Sticker]) -> bool {
    CORNER_STICKERS
        .iter()
        .all(|sticker @ &(face, row, col)| {
            (state.facelet(face, row, col) == Face::U) == pattern.contains(sticker)
        })
}

impl Phase for TopCornerOrientation {
    type Case = TopCornerOrientationCase;

    const KIND: PhaseKind = PhaseKind::TopCornerOrientation;

    fn is_complete(state: &CubeState) -> bool {
        state.is_face_uniform(Face::U)
    }

    fn classify(state: &CubeState) -> Option<(TopCornerOrientationCase, Side)> {
        let patterns = [
            (TopCornerOrientationCase::Sune, SUNE),
            (TopCornerOrientationCase::Antisune, ANTISUNE),
            (TopCornerOrientationCase::Pi, PI),
            (TopCornerOrientationCase::H, H),
        ];

        if let Some(&(case, _)) = patterns
            .iter()
            .find(|(_, pattern)| shows_u_exactly(state, pattern))
        {
            return Some((case, Side::F));
        }

        let oriented = CORNER_STICKERS[..4]
            .iter()
            .filter(|&&(face, row, col)| state.facelet(face, row, col) == Face::U)
            .count();

        (oriented == 2 && state.facelet(Face::F, 0, 0) == Face::U)
            .then_some((TopCornerOrientationCase::TwoOriented, Side::F))
    }

    fn algorithm(case: TopCornerOrientationCase) -> &'static [Move] {
        match case {
            TopCornerOrientationCase::Sune | TopCornerOrientationCase::TwoOriented => {
                &[R, U, R_PRIME, U, R, U2, R_PRIME]
            }
            TopCornerOrientationCase::Antisune => &[R, U2, R_PRIME, U_PRIME, R, U_PRIME, R_PRIME],
            TopCornerOrientationCase::Pi => &[R, U2, R2, U_PRIME, R2, U_PRIME, R2, U2, R],
            TopCornerOrientationCase::H => {
                &[R, U, R_PRIME, U, R, U_PRIME, R_PRIME, U, R, U2, R_PRIME]
            }
        }
    }
}
