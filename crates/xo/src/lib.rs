//! xo - tic-tac-toe rules, outcome arbiter and a perfect opponent.
//!
//! # Architecture
//!
//! - **Board**: 3x3 grid of squares with a canonical 9-character form
//! - **Arbiter**: classifies a board from one mark's point of view
//! - **Search**: exhaustive minimax returning every optimal move
//! - **Game**: session state machine emitting events and keeping statistics
//!
//! # Example
//!
//! ```
//! use xo::{Board, Cache, Event, Game, Mark, evaluate};
//!
//! # fn example() -> Result<(), xo::XoError> {
//! let mut game = Game::new();
//! game.start(Mark::X)?;
//!
//! let event = game.moveto(2, 2)?;
//! assert!(matches!(event, Event::NextTurn { .. }));
//!
//! let board = Board::from_layout("....x....");
//! let best = evaluate(&board, Mark::O, Cache::Use)?;
//! assert_eq!(*best.score(), -8);
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod arbiter;
mod board;
mod error;
mod game;
mod mark;
mod search;

// Crate-level exports - Errors
pub use error::{ErrorCategory, XoError, XoErrorKind};

// Crate-level exports - Board primitives
pub use board::{Board, CELLS, COLS, Cells, Position, ROWS};
pub use mark::{Mark, Square};

// Crate-level exports - Arbiter
pub use arbiter::{
    GameOverReason, InvalidReason, LINES, Line, LineKind, Outcome, PieceCounts, Status,
    count_pieces, outcome,
};

// Crate-level exports - Search
pub use search::{Cache, SearchResult, evaluate};

// Crate-level exports - Game session
pub use game::{Conclusion, Event, Game, GameState, InvalidMoveReason, Move, Statistics};
