//! Precomputed results for the opening positions.
//!
//! Searching the empty board, or a board with a single mark, visits most of
//! the game tree while the answer never changes. These entries are what
//! exhaustive search returns for each of them.

use super::SearchResult;
use crate::board::{Board, Position};

struct Entry {
    layout: &'static str,
    score: i32,
    depth: u32,
    positions: &'static [Position],
}

impl Entry {
    fn to_result(&self) -> SearchResult {
        SearchResult {
            score: self.score,
            depth: self.depth,
            positions: self.positions.to_vec(),
        }
    }
}

const fn at(row: usize, col: usize) -> Position {
    Position::new(row, col)
}

const EVERY_CELL: &[Position] = &[
    at(1, 1), at(1, 2), at(1, 3),
    at(2, 1), at(2, 2), at(2, 3),
    at(3, 1), at(3, 2), at(3, 3),
];
const CENTER: &[Position] = &[at(2, 2)];
const AFTER_TOP: &[Position] = &[at(1, 1), at(1, 3), at(2, 2), at(3, 2)];
const AFTER_LEFT: &[Position] = &[at(1, 1), at(2, 2), at(2, 3), at(3, 1)];
const AFTER_CENTER: &[Position] = &[at(1, 1), at(1, 3), at(3, 1), at(3, 3)];
const AFTER_RIGHT: &[Position] = &[at(1, 3), at(2, 1), at(2, 2), at(3, 3)];
const AFTER_BOTTOM: &[Position] = &[at(1, 2), at(2, 2), at(3, 1), at(3, 3)];

const fn reply(layout: &'static str, positions: &'static [Position]) -> Entry {
    Entry {
        layout,
        score: -8,
        depth: 8,
        positions,
    }
}

#[rustfmt::skip]
static OPENING_BOOK: [Entry; 19] = [
    Entry { layout: ".........", score: 9, depth: 9, positions: EVERY_CELL },
    reply("x........", CENTER),
    reply(".x.......", AFTER_TOP),
    reply("..x......", CENTER),
    reply("...x.....", AFTER_LEFT),
    reply("....x....", AFTER_CENTER),
    reply(".....x...", AFTER_RIGHT),
    reply("......x..", CENTER),
    reply(".......x.", AFTER_BOTTOM),
    reply("........x", CENTER),
    reply("o........", CENTER),
    reply(".o.......", AFTER_TOP),
    reply("..o......", CENTER),
    reply("...o.....", AFTER_LEFT),
    reply("....o....", AFTER_CENTER),
    reply(".....o...", AFTER_RIGHT),
    reply("......o..", CENTER),
    reply(".......o.", AFTER_BOTTOM),
    reply("........o", CENTER),
];

/// Looks up the stored result for an opening position.
pub(super) fn lookup(board: &Board) -> Option<SearchResult> {
    let key = board.to_string();
    OPENING_BOOK
        .iter()
        .find(|entry| entry.layout == key)
        .map(Entry::to_result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mark::Mark;
    use crate::search::{Cache, evaluate};
    use strum::IntoEnumIterator;

    #[test]
    fn test_covers_every_opening_position() {
        assert!(lookup(&Board::new()).is_some());
        for offset in 0..9 {
            for mark in Mark::iter() {
                let mut board = Board::new();
                board.place(offset, mark.into());
                assert!(lookup(&board).is_some(), "missing {}", board);
            }
        }
    }

    #[test]
    fn test_misses_later_positions() {
        assert!(lookup(&Board::from_layout("xo")).is_none());
    }

    #[test]
    fn test_matches_exhaustive_search() {
        for entry in &OPENING_BOOK {
            let board = Board::from_layout(entry.layout);
            let mover = match board.cells().find_map(|(_, _, square)| square.mark()) {
                Some(mark) => mark.other(),
                None => Mark::X,
            };
            let searched = evaluate(&board, mover, Cache::Bypass).unwrap();
            assert_eq!(searched, entry.to_result(), "layout {}", entry.layout);
        }
    }

    #[test]
    fn test_empty_board_is_the_same_for_both_marks() {
        let searched = evaluate(&Board::new(), Mark::O, Cache::Bypass).unwrap();
        assert_eq!(Some(searched), lookup(&Board::new()));
    }
}
