//! The eight winning lines.

use crate::core::{Board, Cell, Coord};

/// A winning triple of coordinates.
pub type Line = [Coord; 3];

/// Rows, then columns, then the two diagonals.
pub const LINES: [Line; 8] = [
    [Coord::new(0, 0), Coord::new(0, 1), Coord::new(0, 2)],
    [Coord::new(1, 0), Coord::new(1, 1), Coord::new(1, 2)],
    [Coord::new(2, 0), Coord::new(2, 1), Coord::new(2, 2)],
    [Coord::new(0, 0), Coord::new(1, 0), Coord::new(2, 0)],
    [Coord::new(0, 1), Coord::new(1, 1), Coord::new(2, 1)],
    [Coord::new(0, 2), Coord::new(1, 2), Coord::new(2, 2)],
    [Coord::new(0, 0), Coord::new(1, 1), Coord::new(2, 2)],
    [Coord::new(0, 2), Coord::new(1, 1), Coord::new(2, 0)],
];

/// Count the cells of `line` holding `cell`.
#[must_use]
pub fn count_in_line(board: &Board, line: &Line, cell: Cell) -> usize {
    line.iter().filter(|&&coord| board.get(coord) == cell).count()
}
