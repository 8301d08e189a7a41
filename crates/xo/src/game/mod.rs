//! Game session state machine.
//!
//! ```text
//! init --start--> playing --moveto (decided)--> gameover --restart--> playing ...
//! ```
//!
//! Each phase carries only the data valid in it, so a session in `init`
//! has no board and a finished round always knows who leads the next one.

mod event;
mod statistics;

pub use event::{Conclusion, Event, InvalidMoveReason, Move};
pub use statistics::Statistics;

use crate::arbiter::{self, GameOverReason, Status};
use crate::board::Board;
use crate::error::{XoError, XoErrorKind};
use crate::mark::Mark;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// Externally visible session state.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum GameState {
    /// Created, not yet started.
    Init,
    /// A round is being played.
    Playing,
    /// The round is decided; waiting for a restart.
    GameOver,
}

#[derive(Debug, Clone)]
enum Phase {
    Init,
    Playing {
        board: Board,
        turn: Mark,
    },
    GameOver {
        board: Board,
        turn: Mark,
        /// Mark that moves first after a restart.
        leader: Mark,
    },
}

/// A tic-tac-toe session: one round at a time, statistics across rounds.
#[derive(Debug, Clone)]
pub struct Game {
    phase: Phase,
    statistics: Statistics,
}

impl Game {
    /// Creates a session in the `init` state.
    #[instrument]
    pub fn new() -> Self {
        Self {
            phase: Phase::Init,
            statistics: Statistics::default(),
        }
    }

    /// Returns the session state.
    pub fn state(&self) -> GameState {
        match self.phase {
            Phase::Init => GameState::Init,
            Phase::Playing { .. } => GameState::Playing,
            Phase::GameOver { .. } => GameState::GameOver,
        }
    }

    /// Returns the board, once started.
    pub fn board(&self) -> Option<&Board> {
        match &self.phase {
            Phase::Init => None,
            Phase::Playing { board, .. } | Phase::GameOver { board, .. } => Some(board),
        }
    }

    /// Returns the mark to move, or that made the final move once decided.
    pub fn turn(&self) -> Option<Mark> {
        match self.phase {
            Phase::Init => None,
            Phase::Playing { turn, .. } | Phase::GameOver { turn, .. } => Some(turn),
        }
    }

    /// Returns the mark that is not [`turn`](Self::turn).
    pub fn next_turn(&self) -> Option<Mark> {
        self.turn().map(Mark::other)
    }

    /// Returns results accumulated across every round.
    pub fn statistics(&self) -> &Statistics {
        &self.statistics
    }

    #[track_caller]
    fn illegal_state(&self) -> XoError {
        XoError::new(XoErrorKind::IllegalState(self.state()))
    }

    /// Starts the first round with `mark` to move.
    ///
    /// # Errors
    ///
    /// Returns an illegal-state error unless the session is in `init`.
    #[instrument(skip(self))]
    pub fn start(&mut self, mark: Mark) -> Result<(), XoError> {
        match self.phase {
            Phase::Init => {
                self.phase = Phase::Playing {
                    board: Board::new(),
                    turn: mark,
                };
                info!(%mark, "game started");
                Ok(())
            }
            _ => Err(self.illegal_state()),
        }
    }

    /// Places the current mark at `(row, col)`.
    ///
    /// Out-of-bounds and occupied targets are reported as
    /// [`Event::InvalidMove`] and leave the session unchanged.
    ///
    /// # Errors
    ///
    /// Returns an illegal-state error unless a round is being played.
    #[instrument(skip(self))]
    pub fn moveto(&mut self, row: usize, col: usize) -> Result<Event, XoError> {
        let Phase::Playing { board, turn } = &mut self.phase else {
            return Err(self.illegal_state());
        };
        let turn = *turn;

        if !Board::contains(row, col) {
            debug!("move out of bounds");
            return Ok(Event::InvalidMove {
                reason: InvalidMoveReason::OutOfBounds,
            });
        }
        if !board.get(row, col)?.is_empty() {
            debug!("square occupied");
            return Ok(Event::InvalidMove {
                reason: InvalidMoveReason::Occupied,
            });
        }

        board.set(row, col, turn)?;
        let last_move = Move::new(row, col, turn);
        let board = *board;

        let outcome = arbiter::outcome(&board, turn);
        let (conclusion, leader) = match outcome.status() {
            Status::InProgress => {
                self.phase = Phase::Playing {
                    board,
                    turn: turn.other(),
                };
                return Ok(Event::NextTurn { last_move });
            }
            Status::GameOver(GameOverReason::Winner(lines)) => {
                self.statistics.record_win(turn);
                info!(winner = %turn, %board, "round won");
                (
                    Conclusion::Winner {
                        details: lines.clone(),
                    },
                    turn,
                )
            }
            Status::GameOver(GameOverReason::Squashed) => {
                self.statistics.record_squash();
                info!(%board, "round squashed");
                (Conclusion::Squashed, turn.other())
            }
            // Alternating play from an empty board never loses on its own move
            // and never reaches an unreachable position.
            Status::GameOver(GameOverReason::Loser(_)) | Status::Invalid(_) => {
                return Err(XoError::new(XoErrorKind::InvalidBoard(board)));
            }
        };

        self.phase = Phase::GameOver {
            board,
            turn,
            leader,
        };
        Ok(Event::GameOver {
            last_move,
            conclusion,
        })
    }

    /// Starts a new round on a fresh board.
    ///
    /// The winner of the last round moves first; after a squash the mark
    /// that did not make the final move does.
    ///
    /// # Errors
    ///
    /// Returns an illegal-state error unless the round is decided.
    #[instrument(skip(self))]
    pub fn restart(&mut self) -> Result<(), XoError> {
        match self.phase {
            Phase::GameOver { leader, .. } => {
                self.phase = Phase::Playing {
                    board: Board::new(),
                    turn: leader,
                };
                info!(%leader, total = self.statistics.total(), "round restarted");
                Ok(())
            }
            _ => Err(self.illegal_state()),
        }
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}
