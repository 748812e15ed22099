use std::{
    fmt::{self, Debug, Display},
    str::FromStr,
};

use thiserror::Error;

use crate::Face;

pub const FACELET_COUNT: usize = 54;
pub const FACELETS_PER_FACE: usize = 9;

/// Index of the facelet at `(row, col)` of `face`, rows read top to bottom
/// and columns left to right as the face is viewed from outside the cube.
pub const fn facelet_index(face: Face, row: usize, col: usize) -> usize {
    face.index() * FACELETS_PER_FACE + row * 3 + col
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FaceletStringError {
    #[error("Expected 54 facelets but got {actual}")]
    WrongLength { actual: usize },
    #[error("Unknown facelet letter {letter:?} at position {position}")]
    UnknownLetter { letter: char, position: usize },
    #[error("Color {color} appears {count} times, expected 9")]
    WrongColorCount { color: Face, count: usize },
    #[error("The center of face {face} carries color {found}")]
    MisplacedCenter { face: Face, found: Face },
}

/// The 54 facelets of a 3x3 cube.
///
/// Each facelet stores the face whose color it carries, faces stored in
/// `Face::ALL` order. States are only ever reached by turning a solved cube,
/// so every color appears nine times and every center keeps its face's color.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct CubeState {
    facelets: [Face; FACELET_COUNT],
}

impl CubeState {
    pub fn new_solved() -> Self {
        CubeState {
            facelets: std::array::from_fn(|i| Face::ALL[i / FACELETS_PER_FACE]),
        }
    }

    pub fn is_solved(&self) -> bool {
        self.facelets
            .iter()
            .enumerate()
            .all(|(i, &color)| color == Face::ALL[i / FACELETS_PER_FACE])
    }

    pub fn facelet(&self, face: Face, row: usize, col: usize) -> Face {
        self.facelets[facelet_index(face, row, col)]
    }

    pub fn facelets(&self) -> &[Face; FACELET_COUNT] {
        &self.facelets
    }

    pub(crate) fn facelets_mut(&mut self) -> &mut [Face; FACELET_COUNT] {
        &mut self.facelets
    }

    /// The nine facelets of `face`, row-major.
    pub fn face(&self, face: Face) -> &[Face] {
        let start = face.index() * FACELETS_PER_FACE;
        &self.facelets[start..start + FACELETS_PER_FACE]
    }

    /// Whether all nine facelets of `face` carry that face's color.
    pub fn is_face_uniform(&self, face: Face) -> bool {
        self.face(face).iter().all(|&color| color == face)
    }

    /// How many facelets carry each color, indexed by `Face::index`.
    pub fn color_counts(&self) -> [usize; 6] {
        let mut counts = [0; 6];

        for color in self.facelets {
            counts[color.index()] += 1;
        }

        counts
    }

    /// Serializes the state as 54 face letters: faces in U, R, F, D, L, B
    /// order, each read row-major.
    pub fn to_compact_string(&self) -> String {
        self.facelets.iter().map(|color| color.letter()).collect()
    }

    /// Parses a string produced by `to_compact_string`.
    ///
    /// This checks the letters, the color counts and the centers. It does
    /// not check that the state is reachable by turning a solved cube.
    pub fn from_compact_string(s: &str) -> Result<Self, FaceletStringError> {
        let actual = s.chars().count();
        if actual != FACELET_COUNT {
            return Err(FaceletStringError::WrongLength { actual });
        }

        let mut facelets = [Face::U; FACELET_COUNT];
        for (position, (slot, letter)) in facelets.iter_mut().zip(s.chars()).enumerate() {
            *slot = Face::from_letter(letter)
                .ok_or(FaceletStringError::UnknownLetter { letter, position })?;
        }

        let state = CubeState { facelets };

        for color in Face::ALL {
            let count = state.color_counts()[color.index()];
            if count != FACELETS_PER_FACE {
                return Err(FaceletStringError::WrongColorCount { color, count });
            }
        }

        for face in Face::ALL {
            let found = state.facelet(face, 1, 1);
            if found != face {
                return Err(FaceletStringError::MisplacedCenter { face, found });
            }
        }

        Ok(state)
    }
}

impl Default for CubeState {
    fn default() -> Self {
        CubeState::new_solved()
    }
}

impl Display for CubeState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_compact_string())
    }
}

impl Debug for CubeState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("CubeState")
            .field(&self.to_compact_string())
            .finish()
    }
}

impl FromStr for CubeState {
    type Err = FaceletStringError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CubeState::from_compact_string(s)
    }
}
