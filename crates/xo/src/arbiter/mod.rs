//! Outcome arbiter.
//!
//! Pure classification of a board from one mark's point of view. Called
//! once per move by [`Game`](crate::Game) and at every node by the search.

mod lines;
mod outcome;

pub use lines::{LINES, Line, LineKind};
pub use outcome::{GameOverReason, InvalidReason, Outcome, PieceCounts, Status};

use crate::board::Board;
use crate::mark::{Mark, Square};
use tracing::instrument;

/// Counts the squares holding each mark, and the empty ones.
pub fn count_pieces(board: &Board) -> PieceCounts {
    board
        .cells()
        .fold(PieceCounts::default(), |mut counts, (_, _, square)| {
            match square {
                Square::Occupied(Mark::X) => counts.x += 1,
                Square::Occupied(Mark::O) => counts.o += 1,
                Square::Empty => counts.empty += 1,
            }
            counts
        })
}

/// Classifies `board` from `mark`'s point of view.
///
/// Checked in order: a move-count gap of two or more, two winners, `mark`
/// winning, the opponent winning, a full board. All simultaneous winning
/// lines are reported.
#[instrument(level = "trace", skip(board), fields(board = %board))]
pub fn outcome(board: &Board, mark: Mark) -> Outcome {
    let counts = count_pieces(board);

    let status = if counts.x.abs_diff(counts.o) >= 2 {
        Status::Invalid(InvalidReason::TooManyMovesAhead)
    } else {
        let mine = winning_lines(board, mark);
        let theirs = winning_lines(board, mark.other());

        match (mine.is_empty(), theirs.is_empty()) {
            (false, false) => Status::Invalid(InvalidReason::TwoWinners),
            (false, true) => Status::GameOver(GameOverReason::Winner(mine)),
            (true, false) => Status::GameOver(GameOverReason::Loser(theirs)),
            (true, true) if counts.empty == 0 => Status::GameOver(GameOverReason::Squashed),
            (true, true) => Status::InProgress,
        }
    };

    Outcome { status, counts }
}

/// Lines held entirely by `mark`, in table order.
fn winning_lines(board: &Board, mark: Mark) -> Vec<Line> {
    LINES
        .iter()
        .filter(|line| {
            line.positions()
                .iter()
                .all(|pos| board.square(pos.offset()) == Square::Occupied(mark))
        })
        .copied()
        .collect()
}
