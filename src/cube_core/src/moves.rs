use std::{
    fmt::{self, Display},
    str::FromStr,
};

use itertools::Itertools;
use thiserror::Error;

use crate::Face;

/// A token outside of the eighteen face-turn grammar.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Invalid move token `{0}`")]
pub struct InvalidMoveToken(pub String);

/// How far a face is turned, viewed from outside that face.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Turn {
    Clockwise,
    Double,
    CounterClockwise,
}

impl Turn {
    pub const ALL: [Self; 3] = [Turn::Clockwise, Turn::Double, Turn::CounterClockwise];

    pub const fn quarter_turns(self) -> u8 {
        match self {
            Turn::Clockwise => 1,
            Turn::Double => 2,
            Turn::CounterClockwise => 3,
        }
    }

    /// The turn equivalent to `quarter_turns` clockwise quarter turns, or
    /// `None` when that is a full rotation.
    pub const fn from_quarter_turns(quarter_turns: u8) -> Option<Self> {
        match quarter_turns % 4 {
            1 => Some(Turn::Clockwise),
            2 => Some(Turn::Double),
            3 => Some(Turn::CounterClockwise),
            _ => None,
        }
    }

    #[must_use]
    pub const fn inverse(self) -> Self {
        match self {
            Turn::Clockwise => Turn::CounterClockwise,
            Turn::Double => Turn::Double,
            Turn::CounterClockwise => Turn::Clockwise,
        }
    }

    const fn suffix(self) -> &'static str {
        match self {
            Turn::Clockwise => "",
            Turn::Double => "2",
            Turn::CounterClockwise => "'",
        }
    }
}

/// A single face turn such as `R`, `R'` or `R2`.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Move {
    face: Face,
    turn: Turn,
}

impl Move {
    /// All eighteen moves, ordered so that `Move::ALL[mv.index()] == mv`.
    pub const ALL: [Self; 18] = {
        let mut all = [Move::new(Face::U, Turn::Clockwise); 18];

        let mut i = 0;
        while i < all.len() {
            all[i] = Move::new(Face::ALL[i / 3], Turn::ALL[i % 3]);
            i += 1;
        }

        all
    };

    pub const fn new(face: Face, turn: Turn) -> Self {
        Move { face, turn }
    }

    pub const fn face(self) -> Face {
        self.face
    }

    pub const fn turn(self) -> Turn {
        self.turn
    }

    pub const fn index(self) -> usize {
        self.face.index() * 3 + self.turn.quarter_turns() as usize - 1
    }

    #[must_use]
    pub const fn inverse(self) -> Self {
        Move::new(self.face, self.turn.inverse())
    }
}

impl Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.face, self.turn.suffix())
    }
}

impl FromStr for Move {
    type Err = InvalidMoveToken;

    fn from_str(token: &str) -> Result<Self, Self::Err> {
        let invalid = || InvalidMoveToken(token.to_owned());

        let mut chars = token.chars();
        let face = chars.next().and_then(Face::from_letter).ok_or_else(invalid)?;
        let turn = match chars.as_str() {
            "" => Turn::Clockwise,
            "2" => Turn::Double,
            "'" => Turn::CounterClockwise,
            _ => return Err(invalid()),
        };

        Ok(Move::new(face, turn))
    }
}

/// Named constants for writing canned algorithms as data.
pub mod notation {
    use super::{Move, Turn};
    use crate::Face;

    macro_rules! face_moves {
        ($($face:ident: $cw:ident, $double:ident, $ccw:ident;)*) => {
            $(
                pub const $cw: Move = Move::new(Face::$face, Turn::Clockwise);
                pub const $double: Move = Move::new(Face::$face, Turn::Double);
                pub const $ccw: Move = Move::new(Face::$face, Turn::CounterClockwise);
            )*
        };
    }

    face_moves! {
        U: U, U2, U_PRIME;
        R: R, R2, R_PRIME;
        F: F, F2, F_PRIME;
        D: D, D2, D_PRIME;
        L: L, L2, L_PRIME;
        B: B, B2, B_PRIME;
    }
}

/// An ordered sequence of moves, written as whitespace-separated tokens.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct MoveSeq(Vec<Move>);

impl MoveSeq {
    pub fn new(moves: Vec<Move>) -> Self {
        MoveSeq(moves)
    }

    pub fn moves(&self) -> &[Move] {
        &self.0
    }

    pub fn into_moves(self) -> Vec<Move> {
        self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Move> {
        self.0.iter()
    }

    pub fn push(&mut self, mv: Move) {
        self.0.push(mv);
    }

    /// Number of quarter turns, counting a half turn as two.
    pub fn quarter_turns(&self) -> usize {
        self.0
            .iter()
            .map(|mv| match mv.turn() {
                Turn::Double => 2,
                Turn::Clockwise | Turn::CounterClockwise => 1,
            })
            .sum()
    }

    /// The sequence that undoes this one.
    #[must_use]
    pub fn inverse(&self) -> Self {
        MoveSeq(self.0.iter().rev().map(|mv| mv.inverse()).collect())
    }

    /// Merges runs of turns on the same face, dropping runs that add up to a
    /// full rotation. Turns of different faces are never reordered.
    #[must_use]
    pub fn cancelled(&self) -> Self {
        let mut out: Vec<Move> = Vec::with_capacity(self.0.len());

        for &mv in &self.0 {
            match out.last() {
                Some(last) if last.face() == mv.face() => {
                    let total = last.turn().quarter_turns() + mv.turn().quarter_turns();
                    out.pop();

                    if let Some(turn) = Turn::from_quarter_turns(total) {
                        out.push(Move::new(mv.face(), turn));
                    }
                }
                _ => out.push(mv),
            }
        }

        MoveSeq(out)
    }
}

impl From<Vec<Move>> for MoveSeq {
    fn from(moves: Vec<Move>) -> Self {
        MoveSeq(moves)
    }
}

impl FromIterator<Move> for MoveSeq {
    fn from_iter<T: IntoIterator<Item = Move>>(iter: T) -> Self {
        MoveSeq(iter.into_iter().collect())
    }
}

impl Extend<Move> for MoveSeq {
    fn extend<T: IntoIterator<Item = Move>>(&mut self, iter: T) {
        self.0.extend(iter);
    }
}

impl<'a> IntoIterator for &'a MoveSeq {
    type Item = &'a Move;
    type IntoIter = std::slice::Iter<'a, Move>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl Display for MoveSeq {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.iter().join(" "))
    }
}

impl FromStr for MoveSeq {
    type Err = InvalidMoveToken;

    /// Parses every token or none of them; the empty string is the empty
    /// sequence.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.split_whitespace()
            .map(str::parse::<Move>)
            .collect::<Result<Vec<_>, _>>()
            .map(MoveSeq)
    }
}
