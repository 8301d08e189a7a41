//! Error types for the xo core.

use crate::board::Board;
use crate::game::GameState;
use crate::mark::Mark;
use derive_more::{Display, Error};

/// Broad class of an [`XoError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCategory {
    /// The caller passed a value that cannot be acted on.
    Argument,
    /// The operation is not allowed in the current session state.
    IllegalState,
    /// A board coordinate is outside `[1,3]x[1,3]`.
    Bounds,
}

/// Specific error conditions.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum XoErrorKind {
    /// A character that is neither `x` nor `o` was given where a mark is required.
    #[display("must be a mark: {:?}", _0)]
    NotAMark(char),

    /// The position is already decided, so there is nothing to search.
    #[display("no available moves: {}", _0)]
    NoAvailableMoves(Board),

    /// The position cannot arise from legal alternating play.
    #[display("invalid board: {}", _0)]
    InvalidBoard(Board),

    /// The mark asked to move is ahead of its opponent.
    #[display("not {}'s turn to play: {}", _0, _1)]
    NotYourTurn(Mark, Board),

    /// Row or column outside the board.
    #[display("position out of bounds: {}, {}", _0, _1)]
    OutOfBounds(usize, usize),

    /// Operation invoked in a state that forbids it.
    #[display("illegal state: {}", _0)]
    IllegalState(GameState),
}

impl XoErrorKind {
    /// Returns the broad class this condition belongs to.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::NotAMark(_)
            | Self::NoAvailableMoves(_)
            | Self::InvalidBoard(_)
            | Self::NotYourTurn(..) => ErrorCategory::Argument,
            Self::IllegalState(_) => ErrorCategory::IllegalState,
            Self::OutOfBounds(..) => ErrorCategory::Bounds,
        }
    }
}

/// Core error with location tracking.
#[derive(Debug, Clone, Display, Error)]
#[display("{} at {}:{}", kind, file, line)]
pub struct XoError {
    /// What went wrong.
    pub kind: XoErrorKind,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl XoError {
    /// Creates a new error with caller location tracking.
    #[track_caller]
    pub fn new(kind: XoErrorKind) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            kind,
            line: loc.line(),
            file: loc.file(),
        }
    }

    /// Returns the error condition.
    pub fn kind(&self) -> &XoErrorKind {
        &self.kind
    }

    /// Returns the broad class of the error.
    pub fn category(&self) -> ErrorCategory {
        self.kind.category()
    }
}

impl From<XoErrorKind> for XoError {
    #[track_caller]
    fn from(kind: XoErrorKind) -> Self {
        Self::new(kind)
    }
}
