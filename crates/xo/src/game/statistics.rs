//! Per-session results.

use crate::mark::Mark;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// Results accumulated over every round of a [`Game`](super::Game).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, Getters)]
pub struct Statistics {
    /// Rounds finished.
    total: u32,
    /// Rounds won by x.
    x_wins: u32,
    /// Rounds won by o.
    o_wins: u32,
    /// Rounds that ended with a full board.
    squashed: u32,
}

impl Statistics {
    /// Rounds won by `mark`.
    pub fn wins(&self, mark: Mark) -> u32 {
        match mark {
            Mark::X => self.x_wins,
            Mark::O => self.o_wins,
        }
    }

    pub(super) fn record_win(&mut self, mark: Mark) {
        self.total += 1;
        match mark {
            Mark::X => self.x_wins += 1,
            Mark::O => self.o_wins += 1,
        }
    }

    pub(super) fn record_squash(&mut self) {
        self.total += 1;
        self.squashed += 1;
    }
}
