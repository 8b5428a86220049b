//! Cell values and player marks.
//!
//! ## Cell
//!
//! The content of one board square: `Empty`, `X` or `O`.
//!
//! ## Mark
//!
//! A player identity. Exactly two exist; `X` moves first in a round.
//! A `Mark` converts into the `Cell` it leaves on the board.

use serde::{Deserialize, Serialize};

/// Content of a single board square.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    /// No mark placed.
    #[default]
    Empty,
    /// Occupied by the X player.
    X,
    /// Occupied by the O player.
    O,
}

impl Cell {
    /// Parse a cell from its text symbol (`X`, `O`, `.`).
    ///
    /// Lowercase marks and `_` / `-` as empty are accepted too.
    #[must_use]
    pub const fn from_symbol(c: char) -> Option<Self> {
        match c {
            'X' | 'x' => Some(Cell::X),
            'O' | 'o' => Some(Cell::O),
            '.' | '_' | '-' => Some(Cell::Empty),
            _ => None,
        }
    }

    /// Text symbol for this cell.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::X => 'X',
            Cell::O => 'O',
        }
    }

    /// The mark occupying this cell, if any.
    #[must_use]
    pub const fn mark(self) -> Option<Mark> {
        match self {
            Cell::Empty => None,
            Cell::X => Some(Mark::X),
            Cell::O => Some(Mark::O),
        }
    }

    #[must_use]
    pub const fn is_empty(self) -> bool {
        matches!(self, Cell::Empty)
    }
}

impl std::fmt::Display for Cell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Player identity.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Mark {
    /// First player.
    X,
    /// Second player.
    O,
}

impl Mark {
    /// Both marks in turn order.
    pub const ALL: [Mark; 2] = [Mark::X, Mark::O];

    /// The other player.
    #[must_use]
    pub const fn opponent(self) -> Self {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }

    /// The cell value this mark leaves on the board.
    #[must_use]
    pub const fn cell(self) -> Cell {
        match self {
            Mark::X => Cell::X,
            Mark::O => Cell::O,
        }
    }
}

impl From<Mark> for Cell {
    fn from(mark: Mark) -> Self {
        mark.cell()
    }
}

impl std::fmt::Display for Mark {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.cell().symbol())
    }
}

impl std::str::FromStr for Mark {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.trim().chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => match Cell::from_symbol(c).and_then(Cell::mark) {
                Some(mark) => Ok(mark),
                None => Err(crate::Error::InvalidCellCharacter { character: c, position: 0 }),
            },
            _ => Err(crate::Error::InvalidCellCharacter {
                character: s.chars().next().unwrap_or(' '),
                position: 0,
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mark_opponent() {
        assert_eq!(Mark::X.opponent(), Mark::O);
        assert_eq!(Mark::O.opponent(), Mark::X);
        assert_eq!(Mark::X.opponent().opponent(), Mark::X);
    }

    #[test]
    fn test_cell_symbols() {
        for cell in [Cell::Empty, Cell::X, Cell::O] {
            assert_eq!(Cell::from_symbol(cell.symbol()), Some(cell));
        }
        assert_eq!(Cell::from_symbol('x'), Some(Cell::X));
        assert_eq!(Cell::from_symbol('?'), None);
        assert_eq!(format!("{}", Cell::Empty), ".");
    }

    #[test]
    fn test_cell_mark() {
        assert_eq!(Cell::Empty.mark(), None);
        assert_eq!(Cell::X.mark(), Some(Mark::X));
        assert_eq!(Cell::from(Mark::O), Cell::O);
        assert!(Cell::default().is_empty());
    }

    #[test]
    fn test_mark_from_str() {
        assert_eq!("X".parse::<Mark>(), Ok(Mark::X));
        assert_eq!(" o ".parse::<Mark>(), Ok(Mark::O));
        assert!(".".parse::<Mark>().is_err());
        assert!("XO".parse::<Mark>().is_err());
    }

    #[test]
    fn test_mark_serde() {
        let json = serde_json::to_string(&Mark::O).unwrap();
        let deserialized: Mark = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized, Mark::O);
    }
}
