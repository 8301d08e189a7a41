//! Exhaustive minimax oracle.
//!
//! Explores every continuation of a position and returns the best score
//! together with every move that achieves it. Terminal positions are
//! scored so that faster wins and slower losses rank higher.

mod opening_book;

use crate::arbiter::{self, GameOverReason, Status};
use crate::board::{Board, CELLS, Position};
use crate::error::{XoError, XoErrorKind};
use crate::mark::{Mark, Square};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use tracing::{debug, instrument};

/// Most plies a game can last.
const MAX_DEPTH: u32 = CELLS as u32;

/// Whether [`evaluate`] may answer opening positions from the stored table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Cache {
    /// Serve the empty board and single-mark boards from the table.
    #[default]
    Use,
    /// Always search.
    Bypass,
}

/// Best score for the side to move and every move that reaches it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Getters)]
pub struct SearchResult {
    /// Minimax score from the mover's side.
    score: i32,
    /// Plies until the game ends along the reported line of play.
    depth: u32,
    /// Equally optimal moves in row-major order.
    positions: Vec<Position>,
}

impl SearchResult {
    /// Consumes the result, returning the optimal moves.
    pub fn into_positions(self) -> Vec<Position> {
        self.positions
    }
}

/// Computes the optimal moves for `mark` on `board`.
///
/// `board` is not modified; the search runs on its own copy.
///
/// # Errors
///
/// Returns an argument error if the game on `board` is already decided,
/// if `board` cannot arise from legal play, or if `mark` has placed more
/// marks than its opponent.
#[instrument(skip(board), fields(board = %board))]
pub fn evaluate(board: &Board, mark: Mark, cache: Cache) -> Result<SearchResult, XoError> {
    let outcome = arbiter::outcome(board, mark);
    let counts = outcome.counts();

    match outcome.status() {
        Status::GameOver(_) => {
            return Err(XoError::new(XoErrorKind::NoAvailableMoves(*board)));
        }
        Status::Invalid(_) => {
            return Err(XoError::new(XoErrorKind::InvalidBoard(*board)));
        }
        Status::InProgress => {}
    }

    if counts.of(mark) > counts.of(mark.other()) {
        return Err(XoError::new(XoErrorKind::NotYourTurn(mark, *board)));
    }

    if cache == Cache::Use && usize::from(counts.empty()) >= CELLS - 1 {
        if let Some(result) = opening_book::lookup(board) {
            debug!(score = result.score, "served from opening book");
            return Ok(result);
        }
    }

    let mut positions = Vec::new();
    let best = Minimax { board: *board }.search(Side::Max, mark, 0, Some(&mut positions));
    debug!(score = best.score, depth = best.depth, moves = positions.len(), "search complete");

    Ok(SearchResult {
        score: best.score,
        depth: best.depth,
        positions,
    })
}

/// Score of a terminal position from the side whose reason it is.
fn terminal_score(reason: &GameOverReason, ply: u32) -> i32 {
    // ply never exceeds MAX_DEPTH
    let win = 2 * (MAX_DEPTH - ply) as i32 + MAX_DEPTH as i32 + 1;
    match reason {
        GameOverReason::Winner(_) => win,
        GameOverReason::Loser(_) => -win,
        GameOverReason::Squashed => ply as i32,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Side {
    /// Places the searching mark.
    Max,
    /// Places the opponent's mark.
    Min,
}

impl Side {
    fn flip(self) -> Self {
        match self {
            Side::Max => Side::Min,
            Side::Min => Side::Max,
        }
    }

    /// Score no child can do worse than.
    fn worst(self) -> i32 {
        match self {
            Side::Max => i32::MIN,
            Side::Min => i32::MAX,
        }
    }

    /// Orders `candidate` against `best`, `Greater` meaning preferred.
    fn prefer(self, candidate: i32, best: i32) -> Ordering {
        match self {
            Side::Max => candidate.cmp(&best),
            Side::Min => best.cmp(&candidate),
        }
    }
}

#[derive(Debug, Clone, Copy)]
struct Scored {
    score: i32,
    depth: u32,
}

/// Search over one scratch board, restored after every placement.
struct Minimax {
    board: Board,
}

impl Minimax {
    /// Scores the position with `to_play` about to move on the `side` layer.
    ///
    /// Scores are always from the maximizing mark's side. When `moves` is
    /// given it receives every tied best move.
    fn search(
        &mut self,
        side: Side,
        to_play: Mark,
        ply: u32,
        mut moves: Option<&mut Vec<Position>>,
    ) -> Scored {
        let waiting = to_play.other();
        let outcome = arbiter::outcome(&self.board, waiting);

        if let Some(reason) = outcome.game_over() {
            // The waiting mark just moved; on the max layer that is the opponent.
            let score = match side {
                Side::Min => terminal_score(reason, ply),
                Side::Max => -terminal_score(reason, ply),
            };
            return Scored { score, depth: ply };
        }

        let mut best = Scored {
            score: side.worst(),
            depth: ply,
        };

        for offset in 0..CELLS {
            if !self.board.square(offset).is_empty() {
                continue;
            }

            self.board.place(offset, Square::Occupied(to_play));
            let child = self.search(side.flip(), waiting, ply + 1, None);
            self.board.place(offset, Square::Empty);

            match side.prefer(child.score, best.score) {
                Ordering::Greater => {
                    best = child;
                    if let Some(moves) = moves.as_deref_mut() {
                        moves.clear();
                        moves.push(Position::from_offset(offset));
                    }
                }
                Ordering::Equal => {
                    best.depth = child.depth;
                    if let Some(moves) = moves.as_deref_mut() {
                        moves.push(Position::from_offset(offset));
                    }
                }
                Ordering::Less => {}
            }
        }

        best
    }
}
