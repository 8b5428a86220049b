//! Terminal-state detection.
//!
//! `is_win` and `is_draw` are the primitive checks used by the search.
//! `is_draw` only looks for a full board, so callers check both players'
//! wins first. `outcome` does that ordering for round bookkeeping.

use serde::{Deserialize, Serialize};

use super::lines::LINES;
use crate::core::{Board, Mark};

/// Classification of a board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// Empty cells remain and nobody has a line.
    InProgress,
    /// A player completed a line.
    Won(Mark),
    /// Board full with no line.
    Draw,
}

impl Outcome {
    /// Check if the round has ended.
    #[must_use]
    pub fn is_over(self) -> bool {
        !matches!(self, Outcome::InProgress)
    }

    /// Check if a player won.
    #[must_use]
    pub fn is_winner(self, mark: Mark) -> bool {
        self == Outcome::Won(mark)
    }
}

/// True iff `mark` holds all three cells of at least one line.
#[must_use]
pub fn is_win(board: &Board, mark: Mark) -> bool {
    let target = mark.cell();
    LINES
        .iter()
        .any(|line| line.iter().all(|&coord| board.get(coord) == target))
}

/// True iff no empty cell remains.
///
/// A full board may also be won; check [`is_win`] for both marks first.
#[must_use]
pub fn is_draw(board: &Board) -> bool {
    board.is_full()
}

/// Classify a board.
///
/// X is checked before O. A well-formed board never has both.
#[must_use]
pub fn outcome(board: &Board) -> Outcome {
    for mark in Mark::ALL {
        if is_win(board, mark) {
            return Outcome::Won(mark);
        }
    }
    if is_draw(board) {
        Outcome::Draw
    } else {
        Outcome::InProgress
    }
}
