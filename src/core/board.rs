//! The 3x3 board and its coordinates.
//!
//! ## Board
//!
//! Nine cells in row-major order. `Board` is `Copy`, so callers keep their
//! own snapshot while the search works on a scratch copy.
//!
//! ## Placement
//!
//! Scoped place/undo guard used by the search. Creating a `Placement` writes
//! a mark into an empty cell and dropping it clears the cell again, on every
//! exit path including early returns and unwinding.
//!
//! ```
//! use noughts_ai::core::{Board, Cell, Coord, Mark};
//!
//! let mut board = Board::new();
//! {
//!     let trial = board.place(Coord::new(1, 1), Mark::X);
//!     assert_eq!(trial.get(Coord::new(1, 1)), Cell::X);
//! }
//! assert_eq!(board, Board::new());
//! ```

use std::ops::{Deref, DerefMut};

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::cell::{Cell, Mark};
use crate::error::{Error, Result};

/// Board side length.
pub const SIZE: usize = 3;

/// Number of cells on the board.
pub const CELL_COUNT: usize = SIZE * SIZE;

/// A (row, column) pair with both components in 0..=2.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "CoordRepr")]
pub struct Coord {
    row: u8,
    col: u8,
}

#[derive(Deserialize)]
struct CoordRepr {
    row: usize,
    col: usize,
}

impl TryFrom<CoordRepr> for Coord {
    type Error = Error;

    fn try_from(repr: CoordRepr) -> Result<Self> {
        Coord::try_new(repr.row, repr.col)
    }
}

impl Coord {
    /// All coordinates in row-major order.
    pub const ALL: [Coord; CELL_COUNT] = [
        Coord::new(0, 0),
        Coord::new(0, 1),
        Coord::new(0, 2),
        Coord::new(1, 0),
        Coord::new(1, 1),
        Coord::new(1, 2),
        Coord::new(2, 0),
        Coord::new(2, 1),
        Coord::new(2, 2),
    ];

    /// Create a coordinate.
    ///
    /// Panics if either component is outside 0..=2. Use [`Coord::try_new`]
    /// for untrusted input.
    #[must_use]
    pub const fn new(row: u8, col: u8) -> Self {
        assert!(row < SIZE as u8 && col < SIZE as u8, "Coordinate out of range");
        Self { row, col }
    }

    /// Create a coordinate from untrusted input.
    pub fn try_new(row: usize, col: usize) -> Result<Self> {
        if row >= SIZE || col >= SIZE {
            return Err(Error::CoordOutOfRange { row, col });
        }
        Ok(Self { row: row as u8, col: col as u8 })
    }

    /// Coordinate for a row-major index (0-8).
    #[must_use]
    pub const fn from_index(index: usize) -> Option<Self> {
        if index < CELL_COUNT {
            Some(Self { row: (index / SIZE) as u8, col: (index % SIZE) as u8 })
        } else {
            None
        }
    }

    #[must_use]
    pub const fn row(self) -> usize {
        self.row as usize
    }

    #[must_use]
    pub const fn col(self) -> usize {
        self.col as usize
    }

    /// Row-major index (0-8).
    #[must_use]
    pub const fn index(self) -> usize {
        self.row as usize * SIZE + self.col as usize
    }
}

impl std::fmt::Display for Coord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Empty cells of a board, in row-major order.
pub type EmptyCells = SmallVec<[Coord; CELL_COUNT]>;

/// 3x3 board of cells.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    cells: [Cell; CELL_COUNT],
}

impl Board {
    /// Create an empty board.
    #[must_use]
    pub const fn new() -> Self {
        Self { cells: [Cell::Empty; CELL_COUNT] }
    }

    /// Create a board from cells in row-major order.
    #[must_use]
    pub const fn from_cells(cells: [Cell; CELL_COUNT]) -> Self {
        Self { cells }
    }

    /// Build a board from a collaborator's `((row, col), cell)` snapshot.
    ///
    /// Every coordinate must appear exactly once. Nothing is coerced:
    /// out-of-range, duplicate and missing coordinates are all rejected.
    pub fn from_snapshot<I>(entries: I) -> Result<Self>
    where
        I: IntoIterator<Item = ((usize, usize), Cell)>,
    {
        let mut cells = [Cell::Empty; CELL_COUNT];
        let mut seen = [false; CELL_COUNT];
        let mut got = 0;

        for ((row, col), cell) in entries {
            let coord = Coord::try_new(row, col)?;
            if seen[coord.index()] {
                return Err(Error::DuplicateCoord { row, col });
            }
            seen[coord.index()] = true;
            cells[coord.index()] = cell;
            got += 1;
        }

        if got != CELL_COUNT {
            return Err(Error::CellCount { expected: CELL_COUNT, got });
        }
        Ok(Self { cells })
    }

    /// Get the cell at a coordinate.
    #[must_use]
    pub const fn get(&self, coord: Coord) -> Cell {
        self.cells[coord.index()]
    }

    /// Overwrite the cell at a coordinate.
    pub fn set(&mut self, coord: Coord, cell: Cell) {
        self.cells[coord.index()] = cell;
    }

    /// All cells in row-major order.
    #[must_use]
    pub const fn cells(&self) -> &[Cell; CELL_COUNT] {
        &self.cells
    }

    /// Check whether no empty cell remains.
    #[must_use]
    pub fn is_full(&self) -> bool {
        !self.cells.iter().any(|c| c.is_empty())
    }

    /// Count cells holding the given value.
    #[must_use]
    pub fn count(&self, cell: Cell) -> usize {
        self.cells.iter().filter(|&&c| c == cell).count()
    }

    /// Empty cells in row-major order.
    #[must_use]
    pub fn empty_cells(&self) -> EmptyCells {
        Coord::ALL
            .iter()
            .copied()
            .filter(|&coord| self.get(coord).is_empty())
            .collect()
    }

    /// Tentatively place `mark` at an empty cell.
    ///
    /// The returned guard derefs to the board and clears the cell on drop.
    pub fn place(&mut self, coord: Coord, mark: Mark) -> Placement<'_> {
        Placement::new(self, coord, mark)
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, cell) in self.cells.iter().enumerate() {
            if i > 0 && i % SIZE == 0 {
                write!(f, "/")?;
            }
            write!(f, "{}", cell)?;
        }
        Ok(())
    }
}

impl std::str::FromStr for Board {
    type Err = Error;

    /// Parse `XX./OO./...` style text. Row separators (`/`, `|`) and
    /// whitespace are ignored; exactly nine cell symbols are required.
    fn from_str(s: &str) -> Result<Self> {
        let mut cells = [Cell::Empty; CELL_COUNT];
        let mut got = 0;

        for c in s.chars().filter(|c| !c.is_whitespace() && *c != '/' && *c != '|') {
            let cell = Cell::from_symbol(c)
                .ok_or(Error::InvalidCellCharacter { character: c, position: got })?;
            if got < CELL_COUNT {
                cells[got] = cell;
            }
            got += 1;
        }

        if got != CELL_COUNT {
            return Err(Error::CellCount { expected: CELL_COUNT, got });
        }
        Ok(Self { cells })
    }
}

/// A mark placed for the lifetime of the guard.
pub struct Placement<'a> {
    board: &'a mut Board,
    coord: Coord,
}

impl<'a> Placement<'a> {
    /// Place `mark` at `coord`, which must be empty.
    pub fn new(board: &'a mut Board, coord: Coord, mark: Mark) -> Self {
        debug_assert!(board.get(coord).is_empty(), "Placement on occupied cell {coord}");
        board.set(coord, mark.cell());
        Self { board, coord }
    }

    /// The coordinate this guard occupies.
    #[must_use]
    pub fn coord(&self) -> Coord {
        self.coord
    }
}

impl Deref for Placement<'_> {
    type Target = Board;

    fn deref(&self) -> &Board {
        &*self.board
    }
}

impl DerefMut for Placement<'_> {
    fn deref_mut(&mut self) -> &mut Board {
        &mut *self.board
    }
}

impl Drop for Placement<'_> {
    fn drop(&mut self) {
        self.board.set(self.coord, Cell::Empty);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coord_index_roundtrip() {
        for (i, coord) in Coord::ALL.iter().enumerate() {
            assert_eq!(coord.index(), i);
            assert_eq!(Coord::from_index(i), Some(*coord));
        }
        assert_eq!(Coord::from_index(9), None);
        assert_eq!(format!("{}", Coord::new(2, 0)), "(2, 0)");
    }

    #[test]
    fn test_coord_try_new() {
        assert_eq!(Coord::try_new(1, 2), Ok(Coord::new(1, 2)));
        assert_eq!(Coord::try_new(3, 0), Err(Error::CoordOutOfRange { row: 3, col: 0 }));
    }

    #[test]
    #[should_panic(expected = "Coordinate out of range")]
    fn test_coord_new_out_of_range() {
        let _ = Coord::new(0, 3);
    }

    #[test]
    fn test_parse_and_display() {
        let board: Board = "XX./OO./...".parse().unwrap();
        assert_eq!(board.get(Coord::new(0, 0)), Cell::X);
        assert_eq!(board.get(Coord::new(1, 1)), Cell::O);
        assert_eq!(board.get(Coord::new(0, 2)), Cell::Empty);
        assert_eq!(board.to_string(), "XX./OO./...");

        let spaced: Board = "X X .\nO O .\n. . .".parse().unwrap();
        assert_eq!(spaced, board);
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(
            "XX./OO./..".parse::<Board>(),
            Err(Error::CellCount { expected: 9, got: 8 })
        );
        assert_eq!(
            "XX./OO./....".parse::<Board>(),
            Err(Error::CellCount { expected: 9, got: 10 })
        );
        assert_eq!(
            "XZ./OO./...".parse::<Board>(),
            Err(Error::InvalidCellCharacter { character: 'Z', position: 1 })
        );
    }

    #[test]
    fn test_from_snapshot() {
        let entries = Coord::ALL.iter().map(|c| ((c.row(), c.col()), Cell::Empty));
        assert_eq!(Board::from_snapshot(entries), Ok(Board::new()));

        // Order of entries does not matter
        let mut reversed: Vec<_> = Coord::ALL.iter().map(|c| ((c.row(), c.col()), Cell::Empty)).collect();
        reversed.reverse();
        reversed[0].1 = Cell::O;
        let board = Board::from_snapshot(reversed).unwrap();
        assert_eq!(board.get(Coord::new(2, 2)), Cell::O);
    }

    #[test]
    fn test_from_snapshot_rejects_invalid() {
        let mut entries: Vec<_> = Coord::ALL.iter().map(|c| ((c.row(), c.col()), Cell::Empty)).collect();

        let missing = entries[..8].to_vec();
        assert_eq!(
            Board::from_snapshot(missing),
            Err(Error::CellCount { expected: 9, got: 8 })
        );

        let mut duplicate = entries.clone();
        duplicate[8] = ((0, 0), Cell::X);
        assert_eq!(
            Board::from_snapshot(duplicate),
            Err(Error::DuplicateCoord { row: 0, col: 0 })
        );

        entries[4] = ((1, 3), Cell::X);
        assert_eq!(
            Board::from_snapshot(entries),
            Err(Error::CoordOutOfRange { row: 1, col: 3 })
        );
    }

    #[test]
    fn test_empty_cells_row_major() {
        let board: Board = "X.O/.X./O..".parse().unwrap();
        let empty: Vec<_> = board.empty_cells().into_iter().collect();
        assert_eq!(
            empty,
            vec![
                Coord::new(0, 1),
                Coord::new(1, 0),
                Coord::new(1, 2),
                Coord::new(2, 1),
                Coord::new(2, 2),
            ]
        );
        assert!(!board.is_full());
        assert_eq!(board.count(Cell::X), 2);
        assert!("XOX/XOO/OXX".parse::<Board>().unwrap().is_full());
    }

    #[test]
    fn test_placement_restores_cell() {
        let mut board: Board = "X../.O./...".parse().unwrap();
        let before = board;
        {
            let mut trial = board.place(Coord::new(2, 2), Mark::X);
            assert_eq!(trial.get(Coord::new(2, 2)), Cell::X);
            {
                let nested = trial.place(Coord::new(0, 2), Mark::O);
                assert_eq!(nested.count(Cell::O), 2);
            }
            assert_eq!(trial.get(Coord::new(0, 2)), Cell::Empty);
        }
        assert_eq!(board, before);
    }

    #[test]
    fn test_placement_restores_on_unwind() {
        let mut board = Board::new();
        let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
            let _trial = board.place(Coord::new(1, 1), Mark::O);
            panic!("fault during search");
        }));
        assert!(result.is_err());
        assert_eq!(board, Board::new());
    }

    #[test]
    fn test_coord_serde_validates() {
        let json = serde_json::to_string(&Coord::new(2, 1)).unwrap();
        assert_eq!(json, r#"{"row":2,"col":1}"#);
        assert_eq!(serde_json::from_str::<Coord>(&json).unwrap(), Coord::new(2, 1));
        assert!(serde_json::from_str::<Coord>(r#"{"row":3,"col":0}"#).is_err());
    }

    #[test]
    fn test_board_serde() {
        let board: Board = "XO./.X./..O".parse().unwrap();
        let json = serde_json::to_string(&board).unwrap();
        let deserialized: Board = serde_json::from_str(&json).unwrap();
        assert_eq!(board, deserialized);
    }
}
