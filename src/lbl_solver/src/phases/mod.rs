//! Recognition for each solving phase.
//!
//! The first layer is built on D and the last layer on U. Detectors compare
//! stickers against each face's home color, so they do not depend on how the
//! cube is held.

use std::fmt::{self, Debug, Display};

use cube_core::{CubeState, Face, Move};

mod cross;
mod first_layer;
mod middle_layer;
mod permutation;
mod top_corners;
mod top_cross;

pub use cross::{Cross, CrossCase};
pub use first_layer::{FirstLayerCorners, FirstLayerCornersCase};
pub use middle_layer::{MiddleLayer, MiddleLayerCase};
pub use permutation::{Permutation, PermutationCase};
pub use top_corners::{TopCornerOrientation, TopCornerOrientationCase};
pub use top_cross::{TopCross, TopCrossCase};

/// A sticker position on one face, as `(row, col)`.
pub(crate) type Cell = (usize, usize);

/// One of the four side faces, in the order met when turning the cube
/// clockwise as seen from above.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Side {
    F,
    R,
    B,
    L,
}

impl Side {
    pub const ALL: [Self; 4] = [Side::F, Side::R, Side::B, Side::L];

    pub const fn face(self) -> Face {
        match self {
            Side::F => Face::F,
            Side::R => Face::R,
            Side::B => Face::B,
            Side::L => Face::L,
        }
    }

    pub const fn from_face(face: Face) -> Option<Self> {
        match face {
            Face::F => Some(Side::F),
            Face::R => Some(Side::R),
            Face::B => Some(Side::B),
            Face::L => Some(Side::L),
            Face::U | Face::D => None,
        }
    }

    /// The side to the right of this one when facing it.
    pub const fn right(self) -> Self {
        Side::ALL[(self as usize + 1) % 4]
    }

    pub const fn left(self) -> Self {
        Side::ALL[(self as usize + 3) % 4]
    }

    /// Rewrites a move from an algorithm written for the front so that it
    /// acts on this side instead.
    pub const fn remap(self, mv: Move) -> Move {
        match Side::from_face(mv.face()) {
            Some(side) => Move::new(
                Side::ALL[(side as usize + self as usize) % 4].face(),
                mv.turn(),
            ),
            None => mv,
        }
    }

    /// The U sticker of the top edge on this side.
    pub(crate) const fn top_edge(self) -> Cell {
        match self {
            Side::F => (2, 1),
            Side::R => (1, 2),
            Side::B => (0, 1),
            Side::L => (1, 0),
        }
    }

    /// The D sticker of the bottom edge on this side.
    pub(crate) const fn bottom_edge(self) -> Cell {
        match self {
            Side::F => (0, 1),
            Side::R => (1, 2),
            Side::B => (2, 1),
            Side::L => (1, 0),
        }
    }

    /// The U sticker of the top corner between this side and its right.
    pub(crate) const fn top_corner(self) -> Cell {
        match self {
            Side::F => (2, 2),
            Side::R => (0, 2),
            Side::B => (0, 0),
            Side::L => (2, 0),
        }
    }

    /// The D sticker of the bottom corner between this side and its right.
    pub(crate) const fn bottom_corner(self) -> Cell {
        match self {
            Side::F => (0, 2),
            Side::R => (2, 2),
            Side::B => (2, 0),
            Side::L => (0, 0),
        }
    }
}

impl Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.face())
    }
}

pub(crate) fn sticker(state: &CubeState, face: Face, (row, col): Cell) -> Face {
    state.facelet(face, row, col)
}

/// Sticker `(row, col)` of a side face.
pub(crate) fn on_side(state: &CubeState, side: Side, row: usize, col: usize) -> Face {
    state.facelet(side.face(), row, col)
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum PhaseKind {
    Cross,
    FirstLayerCorners,
    MiddleLayer,
    TopCross,
    TopCornerOrientation,
    Permutation,
}

impl PhaseKind {
    /// The phases in solving order.
    pub const ALL: [Self; 6] = [
        PhaseKind::Cross,
        PhaseKind::FirstLayerCorners,
        PhaseKind::MiddleLayer,
        PhaseKind::TopCross,
        PhaseKind::TopCornerOrientation,
        PhaseKind::Permutation,
    ];

    pub const fn name(self) -> &'static str {
        match self {
            PhaseKind::Cross => "cross",
            PhaseKind::FirstLayerCorners => "first layer corners",
            PhaseKind::MiddleLayer => "middle layer",
            PhaseKind::TopCross => "top cross",
            PhaseKind::TopCornerOrientation => "top corner orientation",
            PhaseKind::Permutation => "permutation",
        }
    }
}

impl Display for PhaseKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One stage of the layer-by-layer method.
///
/// A phase never mutates the cube itself. It says whether its goal is met
/// and, if not, which case the cube is in and on which side. The algorithm
/// for a case is written for the front and turned towards that side with
/// `Side::remap`.
pub trait Phase {
    type Case: Copy + Debug;

    const KIND: PhaseKind;

    fn is_complete(state: &CubeState) -> bool;

    /// `None` when no case applies from this angle.
    ///
    /// The first-layer and middle-layer phases search all four sides and
    /// report where the case sits. The last-layer phases only recognise
    /// cases from the front and always answer [`Side::F`]; the pipeline's
    /// `U` fallback turns the other angles into view.
    fn classify(state: &CubeState) -> Option<(Self::Case, Side)>;

    fn algorithm(case: Self::Case) -> &'static [Move];
}
