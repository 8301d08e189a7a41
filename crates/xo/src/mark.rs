//! Marks and squares.
//!
//! A mark is one of the two player symbols. Any other character is an
//! empty placeholder and is normalized to [`Square::Empty`] on the way in.

use crate::error::{XoError, XoErrorKind};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Player symbol.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Mark {
    /// Player x.
    X,
    /// Player o.
    O,
}

impl Mark {
    /// Returns the opponent's mark.
    pub fn other(self) -> Self {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }

    /// Returns the character used for this mark in layouts.
    pub fn to_char(self) -> char {
        match self {
            Mark::X => 'x',
            Mark::O => 'o',
        }
    }
}

impl TryFrom<char> for Mark {
    type Error = XoError;

    #[track_caller]
    fn try_from(c: char) -> Result<Self, Self::Error> {
        match c {
            'x' => Ok(Mark::X),
            'o' => Ok(Mark::O),
            other => Err(XoError::new(XoErrorKind::NotAMark(other))),
        }
    }
}

impl FromStr for Mark {
    type Err = XoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.trim().chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Mark::try_from(c),
            (Some(c), Some(_)) => Err(XoError::new(XoErrorKind::NotAMark(c))),
            (None, _) => Err(XoError::new(XoErrorKind::NotAMark(' '))),
        }
    }
}

/// A square on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Square {
    /// Empty square.
    #[default]
    Empty,
    /// Square occupied by a mark.
    Occupied(Mark),
}

impl Square {
    /// Returns the mark on this square, if any.
    pub fn mark(self) -> Option<Mark> {
        match self {
            Square::Empty => None,
            Square::Occupied(mark) => Some(mark),
        }
    }

    /// Checks if the square is empty.
    pub fn is_empty(self) -> bool {
        matches!(self, Square::Empty)
    }

    /// Returns the canonical character: `x`, `o`, or `.` for empty.
    pub fn to_char(self) -> char {
        match self {
            Square::Empty => '.',
            Square::Occupied(mark) => mark.to_char(),
        }
    }
}

impl From<Mark> for Square {
    fn from(mark: Mark) -> Self {
        Square::Occupied(mark)
    }
}

impl From<Option<Mark>> for Square {
    fn from(mark: Option<Mark>) -> Self {
        mark.map_or(Square::Empty, Square::Occupied)
    }
}

/// Canonicalizes a layout character.
impl From<char> for Square {
    fn from(c: char) -> Self {
        Mark::try_from(c).ok().into()
    }
}
