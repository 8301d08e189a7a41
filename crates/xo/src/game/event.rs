//! Events emitted by [`Game::moveto`](super::Game::moveto).
//!
//! Moves are domain events: each call reports exactly what happened, and
//! each variant carries only the fields valid for it.

use crate::arbiter::Line;
use crate::mark::Mark;
use serde::{Deserialize, Serialize};

/// A mark placed at a position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_new::new)]
pub struct Move {
    /// Row, 1 to 3.
    pub row: usize,
    /// Column, 1 to 3.
    pub col: usize,
    /// The mark placed.
    pub mark: Mark,
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}, {}", self.mark, self.row, self.col)
    }
}

/// Why a move was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum InvalidMoveReason {
    /// The position is not on the board.
    OutOfBounds,
    /// The square already holds a mark.
    Occupied,
}

/// How a finished round ended.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "reason", rename_all = "kebab-case")]
pub enum Conclusion {
    /// The last mover completed these lines.
    Winner {
        /// Every line completed by the winning move.
        details: Vec<Line>,
    },
    /// The board filled up without a winner.
    Squashed,
}

/// Result of a move request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "name", rename_all = "kebab-case")]
pub enum Event {
    /// The move was rejected; nothing changed.
    InvalidMove {
        /// Why it was rejected.
        reason: InvalidMoveReason,
    },
    /// The move was made and the other mark is to play.
    NextTurn {
        /// The move just made.
        last_move: Move,
    },
    /// The move ended the round.
    #[serde(rename = "gameover")]
    GameOver {
        /// The move just made.
        last_move: Move,
        /// How the round ended.
        #[serde(flatten)]
        conclusion: Conclusion,
    },
}

impl Event {
    /// Returns the move made, unless the move was rejected.
    pub fn last_move(&self) -> Option<&Move> {
        match self {
            Event::InvalidMove { .. } => None,
            Event::NextTurn { last_move } | Event::GameOver { last_move, .. } => Some(last_move),
        }
    }
}
