//! The eight winning lines.

use crate::board::Position;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// Orientation of a winning line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum LineKind {
    /// Horizontal.
    Row,
    /// Vertical.
    Column,
    /// Corner to corner.
    Diagonal,
}

/// Three positions that win the game when held by one mark.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Getters)]
pub struct Line {
    /// Orientation.
    #[serde(rename = "where")]
    kind: LineKind,
    /// 1-based index within its kind.
    index: u8,
    /// The three positions.
    positions: [Position; 3],
}

impl Line {
    const fn new(kind: LineKind, index: u8, cells: [(usize, usize); 3]) -> Self {
        let [a, b, c] = cells;
        Self {
            kind,
            index,
            positions: [
                Position::new(a.0, a.1),
                Position::new(b.0, b.1),
                Position::new(c.0, c.1),
            ],
        }
    }
}

/// All winning lines: rows, then columns, then the two diagonals.
pub static LINES: [Line; 8] = [
    Line::new(LineKind::Row, 1, [(1, 1), (1, 2), (1, 3)]),
    Line::new(LineKind::Row, 2, [(2, 1), (2, 2), (2, 3)]),
    Line::new(LineKind::Row, 3, [(3, 1), (3, 2), (3, 3)]),
    Line::new(LineKind::Column, 1, [(1, 1), (2, 1), (3, 1)]),
    Line::new(LineKind::Column, 2, [(1, 2), (2, 2), (3, 2)]),
    Line::new(LineKind::Column, 3, [(1, 3), (2, 3), (3, 3)]),
    Line::new(LineKind::Diagonal, 1, [(1, 1), (2, 2), (3, 3)]),
    Line::new(LineKind::Diagonal, 2, [(1, 3), (2, 2), (3, 1)]),
];
