use cube_core::{
    CubeState, Face, Move,
    notation::{F, F2, R, R_PRIME, U, U_PRIME},
};

use super::{Phase, PhaseKind, Side, on_side, sticker};

/// The four D edges, each matching the side below which it sits.
pub struct Cross;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum CrossCase {
    /// A cross edge on top, D sticker up, already above its slot.
    TopAligned,
    /// A cross edge on top, D sticker facing out, above its slot.
    TopFlipped,
    /// A cross edge in the middle layer next to the right of the side.
    MiddleRight,
    /// A cross edge somewhere in the bottom layer but not solved in place.
    Bottom,
}

/// Whether the cross edge below `side` is in place and oriented.
pub(crate) fn edge_solved(state: &CubeState, side: Side) -> bool {
    sticker(state, Face::D, side.bottom_edge()) == Face::D
        && on_side(state, side, 2, 1) == side.face()
}

impl Phase for Cross {
    type Case = CrossCase;

    const KIND: PhaseKind = PhaseKind::Cross;

    fn is_complete(state: &CubeState) -> bool {
        Side::ALL.into_iter().all(|side| edge_solved(state, side))
    }

    fn classify(state: &CubeState) -> Option<(CrossCase, Side)> {
        let up = |side: Side| sticker(state, Face::U, side.top_edge());

        if let Some(side) = Side::ALL
            .into_iter()
            .find(|&side| up(side) == Face::D && on_side(state, side, 0, 1) == side.face())
        {
            return Some((CrossCase::TopAligned, side));
        }

        if let Some(side) = Side::ALL
            .into_iter()
            .find(|&side| on_side(state, side, 0, 1) == Face::D && up(side) == side.face())
        {
            return Some((CrossCase::TopFlipped, side));
        }

        // A cross edge on top but above the wrong slot: turn U until it lines up
        if Side::ALL
            .into_iter()
            .any(|side| up(side) == Face::D || on_side(state, side, 0, 1) == Face::D)
        {
            return None;
        }

        if let Some(side) = Side::ALL.into_iter().find(|&side| {
            on_side(state, side, 1, 2) == Face::D || on_side(state, side.right(), 1, 0) == Face::D
        }) {
            return Some((CrossCase::MiddleRight, side));
        }

        Side::ALL
            .into_iter()
            .find(|&side| {
                !edge_solved(state, side)
                    && (sticker(state, Face::D, side.bottom_edge()) == Face::D
                        || on_side(state, side, 2, 1) == Face::D)
            })
            .map(|side| (CrossCase::Bottom, side))
    }

    fn algorithm(case: CrossCase) -> &'static [Move] {
        match case {
            CrossCase::TopAligned | CrossCase::Bottom => &[F2],
            CrossCase::TopFlipped => &[U_PRIME, R_PRIME, F, R],
            CrossCase::MiddleRight => &[R, U, R_PRIME],
        }
    }
}
