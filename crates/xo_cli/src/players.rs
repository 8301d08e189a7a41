//! Seats at the table and how each one picks its moves.

use anyhow::{Context, Result};
use rand::Rng;
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};
use xo::{Board, Cache, Mark, Position, evaluate};

/// Who controls a mark.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Controller {
    /// Moves are read from the console.
    Human,
    /// Moves come from the minimax oracle.
    Computer,
}

impl Controller {
    /// Checks if a person plays this seat.
    pub fn is_human(self) -> bool {
        matches!(self, Controller::Human)
    }
}

/// A mark and whoever plays it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Seat {
    /// The mark this seat places.
    pub mark: Mark,
    /// Who chooses the moves.
    pub controller: Controller,
}

impl Seat {
    /// Creates a seat.
    pub fn new(mark: Mark, controller: Controller) -> Self {
        Self { mark, controller }
    }
}

/// Picks uniformly among the optimal moves for `mark`.
#[instrument(skip(board, rng), fields(board = %board))]
pub fn computer_move(board: &Board, mark: Mark, rng: &mut impl Rng) -> Result<Position> {
    let mut positions = evaluate(board, mark, Cache::Use)?.into_positions();
    positions.shuffle(rng);
    let choice = positions
        .first()
        .copied()
        .context("search returned no moves")?;
    debug!(%choice, "computer chose move");
    Ok(choice)
}

/// Parses `"r c"` as two integers; anything else is rejected.
///
/// Bounds are left to the game, so `-1 2` parses.
pub fn parse_move(line: &str) -> Option<(i64, i64)> {
    let mut parts = line.split_whitespace();
    let row = parts.next()?.parse().ok()?;
    let col = parts.next()?.parse().ok()?;
    match parts.next() {
        Some(_) => None,
        None => Some((row, col)),
    }
}

/// First empty square in row-major order, shown as an input example.
pub fn first_open_position(board: &Board) -> Option<(usize, usize)> {
    board
        .cells()
        .find(|(_, _, square)| square.is_empty())
        .map(|(row, col, _)| (row, col))
}
