//! Move semantics. Every face turn is a fixed permutation of the 54 facelets,
//! computed once and then applied by gathering from a snapshot of the state.

use std::sync::LazyLock;

use crate::{
    CubeState, Face, InvalidMoveToken, Move, MoveSeq, Turn,
    state::{FACELET_COUNT, facelet_index},
};

/// A rearrangement of facelets in comes-from form: after applying it, the
/// facelet at position `i` is the one that was at `comes_from[i]`.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct FaceletPermutation {
    comes_from: [u8; FACELET_COUNT],
}

static MOVE_PERMUTATIONS: LazyLock<[FaceletPermutation; 18]> = LazyLock::new(|| {
    let mut table = [FaceletPermutation::IDENTITY; 18];

    for face in Face::ALL {
        let clockwise = FaceletPermutation::clockwise(face);
        let double = clockwise.then(&clockwise);

        table[Move::new(face, Turn::Clockwise).index()] = clockwise;
        table[Move::new(face, Turn::Double).index()] = double;
        table[Move::new(face, Turn::CounterClockwise).index()] = clockwise.inverse();
    }

    table
});

impl FaceletPermutation {
    pub const IDENTITY: Self = {
        let mut comes_from = [0; FACELET_COUNT];

        let mut i = 0;
        while i < FACELET_COUNT {
            comes_from[i] = i as u8;
            i += 1;
        }

        FaceletPermutation { comes_from }
    };

    /// The permutation performed by `mv`.
    pub fn of(mv: Move) -> &'static Self {
        &MOVE_PERMUTATIONS[mv.index()]
    }

    fn clockwise(face: Face) -> Self {
        let mut comes_from = Self::IDENTITY.comes_from;

        // The turning face's own grid: (r, c) moves to (c, 2 - r)
        for row in 0..3 {
            for col in 0..3 {
                comes_from[facelet_index(face, row, col)] =
                    facelet_index(face, 2 - col, row) as u8;
            }
        }

        let strips = neighbour_strips(face);
        for (k, strip) in strips.iter().enumerate() {
            let source = &strips[(k + 1) % strips.len()];

            for (&to, &from) in strip.iter().zip(source) {
                comes_from[to] = from as u8;
            }
        }

        FaceletPermutation { comes_from }
    }

    /// Applies `self` and then `other`.
    #[must_use]
    pub fn then(&self, other: &Self) -> Self {
        FaceletPermutation {
            comes_from: std::array::from_fn(|i| self.comes_from[other.comes_from[i] as usize]),
        }
    }

    #[must_use]
    pub fn inverse(&self) -> Self {
        let mut comes_from = [0; FACELET_COUNT];

        for (i, &from) in self.comes_from.iter().enumerate() {
            comes_from[from as usize] = i as u8;
        }

        FaceletPermutation { comes_from }
    }

    pub fn apply(&self, state: &mut CubeState) {
        let before = *state.facelets();

        for (slot, &from) in state.facelets_mut().iter_mut().zip(&self.comes_from) {
            *slot = before[from as usize];
        }
    }
}

/// The four 3-facelet strips bordering `face`. Under a clockwise turn each
/// strip takes the facelets of the strip after it, position by position.
/// Strips are listed in the order that keeps positions aligned, so some run
/// against their face's reading order.
fn neighbour_strips(face: Face) -> [[usize; 3]; 4] {
    fn row(face: Face, r: usize) -> [usize; 3] {
        [0, 1, 2].map(|c| facelet_index(face, r, c))
    }

    fn row_rev(face: Face, r: usize) -> [usize; 3] {
        [2, 1, 0].map(|c| facelet_index(face, r, c))
    }

    fn col(face: Face, c: usize) -> [usize; 3] {
        [0, 1, 2].map(|r| facelet_index(face, r, c))
    }

    fn col_rev(face: Face, c: usize) -> [usize; 3] {
        [2, 1, 0].map(|r| facelet_index(face, r, c))
    }

    match face {
        Face::U => [row(Face::F, 0), row(Face::R, 0), row(Face::B, 0), row(Face::L, 0)],
        Face::D => [row(Face::F, 2), row(Face::L, 2), row(Face::B, 2), row(Face::R, 2)],
        Face::R => [col(Face::U, 2), col(Face::F, 2), col(Face::D, 2), col_rev(Face::B, 0)],
        Face::L => [col(Face::U, 0), col_rev(Face::B, 2), col(Face::D, 0), col(Face::F, 0)],
        Face::F => [row(Face::U, 2), col_rev(Face::L, 2), row_rev(Face::D, 0), col(Face::R, 0)],
        Face::B => [row(Face::U, 0), col(Face::R, 2), row_rev(Face::D, 2), col_rev(Face::L, 0)],
    }
}

pub fn apply_move(state: &mut CubeState, mv: Move) {
    FaceletPermutation::of(mv).apply(state);
}

pub fn apply_moves<'a>(state: &mut CubeState, moves: impl IntoIterator<Item = &'a Move>) {
    for &mv in moves {
        apply_move(state, mv);
    }
}

/// Applies a single move token.
pub fn apply(state: &mut CubeState, token: &str) -> Result<(), InvalidMoveToken> {
    apply_move(state, token.parse()?);
    Ok(())
}

/// Applies whitespace-separated tokens left to right and returns how many
/// were applied.
///
/// Stops at the first invalid token. The moves before it have already been
/// applied, so clone the state first when the whole sequence must succeed or
/// fail together, or parse a `MoveSeq` up front.
pub fn apply_sequence(state: &mut CubeState, tokens: &str) -> Result<usize, InvalidMoveToken> {
    let mut applied = 0;

    for token in tokens.split_whitespace() {
        apply(state, token)?;
        applied += 1;
    }

    Ok(applied)
}

/// The state reached by applying `moves` to a solved cube.
pub fn state_after(moves: &MoveSeq) -> CubeState {
    let mut state = CubeState::new_solved();
    apply_moves(&mut state, moves);
    state
}
