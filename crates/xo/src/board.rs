//! The 3x3 board.

use crate::arbiter::{self, PieceCounts};
use crate::error::{XoError, XoErrorKind};
use crate::mark::Square;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Number of rows.
pub const ROWS: usize = 3;
/// Number of columns.
pub const COLS: usize = 3;
/// Number of cells.
pub const CELLS: usize = ROWS * COLS;

/// A 1-indexed `(row, col)` coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Position {
    /// Row, 1 to 3.
    pub row: usize,
    /// Column, 1 to 3.
    pub col: usize,
}

impl Position {
    /// Creates a position. Bounds are checked when it is used on a board.
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Position of the cell at a row-major offset (0-8).
    pub(crate) const fn from_offset(offset: usize) -> Self {
        Self::new(offset / COLS + 1, offset % COLS + 1)
    }

    /// Row-major offset (0-8). Only meaningful for positions on the board.
    pub(crate) const fn offset(self) -> usize {
        COLS * (self.row - 1) + (self.col - 1)
    }
}

impl From<(usize, usize)> for Position {
    fn from((row, col): (usize, usize)) -> Self {
        Self::new(row, col)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}", self.row, self.col)
    }
}

/// 3x3 tic-tac-toe board.
///
/// Always exactly nine squares, each empty or holding a mark. The
/// `Display` form is the canonical 9-character layout (`.` for empty),
/// which [`Board::from_layout`] reads back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Board {
    /// Squares in row-major order.
    squares: [Square; CELLS],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a board from a layout string.
    ///
    /// Characters other than `x` and `o` become empty squares, characters
    /// past the ninth are ignored, and a short layout is padded with empty
    /// squares.
    pub fn from_layout(layout: &str) -> Self {
        let mut board = Self::new();
        for (square, c) in board.squares.iter_mut().zip(layout.chars()) {
            *square = Square::from(c);
        }
        board
    }

    /// Checks whether `(row, col)` lies on the board.
    pub const fn contains(row: usize, col: usize) -> bool {
        1 <= row && row <= ROWS && 1 <= col && col <= COLS
    }

    #[track_caller]
    fn offset(row: usize, col: usize) -> Result<usize, XoError> {
        if Self::contains(row, col) {
            Ok(Position::new(row, col).offset())
        } else {
            Err(XoError::new(XoErrorKind::OutOfBounds(row, col)))
        }
    }

    /// Gets the square at `(row, col)`.
    #[track_caller]
    pub fn get(&self, row: usize, col: usize) -> Result<Square, XoError> {
        Ok(self.squares[Self::offset(row, col)?])
    }

    /// Sets the square at `(row, col)`.
    ///
    /// Accepts a [`Square`], a [`Mark`](crate::Mark) or a layout `char`;
    /// anything that is not a mark is stored as empty.
    #[track_caller]
    pub fn set(&mut self, row: usize, col: usize, square: impl Into<Square>) -> Result<(), XoError> {
        let offset = Self::offset(row, col)?;
        self.squares[offset] = square.into();
        Ok(())
    }

    /// Checks if the square at `(row, col)` is empty.
    #[track_caller]
    pub fn is_empty(&self, row: usize, col: usize) -> Result<bool, XoError> {
        Ok(self.get(row, col)?.is_empty())
    }

    /// Counts each mark and the empty squares.
    pub fn counts(&self) -> PieceCounts {
        arbiter::count_pieces(self)
    }

    /// Square at a row-major offset.
    pub(crate) fn square(&self, offset: usize) -> Square {
        self.squares[offset]
    }

    /// Overwrites the square at a row-major offset.
    pub(crate) fn place(&mut self, offset: usize, square: Square) {
        self.squares[offset] = square;
    }

    /// Iterates over `(row, col, square)` in row-major order.
    pub fn cells(&self) -> Cells<'_> {
        Cells {
            board: self,
            next: 0,
        }
    }

    /// Formats the board as a boxed grid for people.
    pub fn to_ascii(&self) -> String {
        self.squares
            .chunks(COLS)
            .map(|row| {
                row.iter()
                    .map(|square| format!(" {} ", square.mark().map_or(' ', |m| m.to_char())))
                    .collect::<Vec<_>>()
                    .join("|")
            })
            .collect::<Vec<_>>()
            .join("\n---+---+---\n")
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.squares
            .iter()
            .try_for_each(|square| write!(f, "{}", square.to_char()))
    }
}

/// Row-major iterator over the cells of a [`Board`].
#[derive(Debug, Clone)]
pub struct Cells<'a> {
    board: &'a Board,
    next: usize,
}

impl Iterator for Cells<'_> {
    type Item = (usize, usize, Square);

    fn next(&mut self) -> Option<Self::Item> {
        if self.next >= CELLS {
            return None;
        }
        let pos = Position::from_offset(self.next);
        let square = self.board.square(self.next);
        self.next += 1;
        Some((pos.row, pos.col, square))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let left = CELLS - self.next;
        (left, Some(left))
    }
}

impl ExactSizeIterator for Cells<'_> {}

impl<'a> IntoIterator for &'a Board {
    type Item = (usize, usize, Square);
    type IntoIter = Cells<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.cells()
    }
}
