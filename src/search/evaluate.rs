//! Static position evaluation used at the depth cutoff.
//!
//! Each of the eight lines is scored from the engine's point of view:
//!
//! | marks in line          | score |
//! |------------------------|-------|
//! | both players (dead)    | 0     |
//! | 2 engine               | +3    |
//! | 1 engine               | +1    |
//! | 2 opponent             | -3    |
//! | 1 opponent             | -1    |
//! | empty                  | 0     |
//!
//! The sum over all lines is the position's score. It is only consulted on
//! non-terminal boards, so a line never holds three of one mark here.

use crate::core::{Board, Mark};
use crate::rules::{count_in_line, LINES};

/// Score a non-terminal board for `engine` against `opponent`.
#[must_use]
pub fn evaluate(board: &Board, engine: Mark, opponent: Mark) -> i32 {
    LINES
        .iter()
        .map(|line| {
            let own = count_in_line(board, line, engine.cell());
            let theirs = count_in_line(board, line, opponent.cell());
            if own > 0 && theirs > 0 {
                0
            } else {
                line_score(own) - line_score(theirs)
            }
        })
        .sum()
}

fn line_score(count: usize) -> i32 {
    match count {
        2 => 3,
        1 => 1,
        _ => 0,
    }
}
