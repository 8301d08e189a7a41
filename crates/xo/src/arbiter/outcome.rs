//! Classification results.

use super::lines::Line;
use crate::mark::Mark;
use serde::{Deserialize, Serialize};

/// Number of squares holding each mark, and empty squares.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct PieceCounts {
    pub(super) x: u8,
    pub(super) o: u8,
    pub(super) empty: u8,
}

impl PieceCounts {
    /// Squares holding `x`.
    pub fn x(&self) -> u8 {
        self.x
    }

    /// Squares holding `o`.
    pub fn o(&self) -> u8 {
        self.o
    }

    /// Empty squares.
    pub fn empty(&self) -> u8 {
        self.empty
    }

    /// Squares holding `mark`.
    pub fn of(&self, mark: Mark) -> u8 {
        match mark {
            Mark::X => self.x,
            Mark::O => self.o,
        }
    }
}

/// Why a finished position is finished, from the queried mark's side.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum GameOverReason {
    /// The queried mark holds these lines.
    Winner(Vec<Line>),
    /// The opponent holds these lines.
    Loser(Vec<Line>),
    /// Full board, nobody holds a line.
    Squashed,
}

/// Why a position cannot arise from legal play.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum InvalidReason {
    /// One mark has been placed at least two more times than the other.
    TooManyMovesAhead,
    /// Both marks hold a winning line.
    TwoWinners,
}

/// Status of a position.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Status {
    /// Moves remain and nobody has won.
    InProgress,
    /// The game is decided.
    #[serde(rename = "gameover")]
    GameOver(GameOverReason),
    /// The position is unreachable.
    Invalid(InvalidReason),
}

/// Classification of a board from one mark's point of view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Outcome {
    pub(super) status: Status,
    pub(super) counts: PieceCounts,
}

impl Outcome {
    /// Returns the status.
    pub fn status(&self) -> &Status {
        &self.status
    }

    /// Returns the piece counts, present whatever the status.
    pub fn counts(&self) -> PieceCounts {
        self.counts
    }

    /// Checks if moves remain.
    pub fn is_in_progress(&self) -> bool {
        matches!(self.status, Status::InProgress)
    }

    /// Checks if the game is decided.
    pub fn is_game_over(&self) -> bool {
        matches!(self.status, Status::GameOver(_))
    }

    /// Checks if the position is unreachable.
    pub fn is_invalid(&self) -> bool {
        matches!(self.status, Status::Invalid(_))
    }

    /// Returns the game-over reason, if decided.
    pub fn game_over(&self) -> Option<&GameOverReason> {
        match &self.status {
            Status::GameOver(reason) => Some(reason),
            _ => None,
        }
    }
}
