use cube_core::{
    CubeState, Face, Move,
    notation::{F, F_PRIME, R, R_PRIME, U, U_PRIME, U2},
};

use super::{Cross, Phase, PhaseKind, Side, on_side, sticker};

/// The whole D layer: the cross plus its four corners.
pub struct FirstLayerCorners;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum FirstLayerCornersCase {
    /// The corner above its slot shows its D sticker on the right side face.
    FacingRight,
    /// The corner above its slot shows its D sticker on the front.
    FacingFront,
    /// The corner above its slot shows its D sticker on U.
    FacingUp,
    /// No D corner on top, so lift a wrong one out of the bottom layer.
    Extract,
}

/// The three stickers of the top corner above the slot between `side` and
/// its right neighbour: U, front, right.
fn top_corner(state: &CubeState, side: Side) -> [Face; 3] {
    [
        sticker(state, Face::U, side.top_corner()),
        on_side(state, side, 0, 2),
        on_side(state, side.right(), 0, 0),
    ]
}

fn corner_solved(state: &CubeState, side: Side) -> bool {
    sticker(state, Face::D, side.bottom_corner()) == Face::D
        && on_side(state, side, 2, 2) == side.face()
        && on_side(state, side.right(), 2, 0) == side.right().face()
}

/// Whether the three stickers are exactly the colors of `wanted`, in any order.
fn same_colors(mut found: [Face; 3], mut wanted: [Face; 3]) -> bool {
    found.sort_unstable();
    wanted.sort_unstable();
    found == wanted
}

impl Phase for FirstLayerCorners {
    type Case = FirstLayerCornersCase;

    const KIND: PhaseKind = PhaseKind::FirstLayerCorners;

    fn is_complete(state: &CubeState) -> bool {
        Cross::is_complete(state)
            && state.is_face_uniform(Face::D)
            && Side::ALL.into_iter().all(|side| {
                on_side(state, side, 2, 0) == side.face() && on_side(state, side, 2, 2) == side.face()
            })
    }

    fn classify(state: &CubeState) -> Option<(FirstLayerCornersCase, Side)> {
        for side in Side::ALL {
            let corner @ [_, front, right] = top_corner(state, side);

            if same_colors(corner, [Face::D, side.face(), side.right().face()]) {
                let case = if right == Face::D {
                    FirstLayerCornersCase::FacingRight
                } else if front == Face::D {
                    FirstLayerCornersCase::FacingFront
                } else {
                    FirstLayerCornersCase::FacingUp
                };

                return Some((case, side));
            }
        }

        if Side::ALL
            .into_iter()
            .any(|side| top_corner(state, side).contains(&Face::D))
        {
            return None;
        }

        Side::ALL
            .into_iter()
            .find(|&side| !corner_solved(state, side))
            .map(|side| (FirstLayerCornersCase::Extract, side))
    }

    fn algorithm(case: FirstLayerCornersCase) -> &'static [Move] {
        match case {
            FirstLayerCornersCase::FacingRight | FirstLayerCornersCase::Extract => {
                &[R, U, R_PRIME]
            }
            FirstLayerCornersCase::FacingFront => &[F_PRIME, U_PRIME, F],
            FirstLayerCornersCase::FacingUp => &[R, U2, R_PRIME, U_PRIME, R, U, R_PRIME],
        }
    }
}
