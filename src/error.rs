//! Error types for the engine.
//!
//! Every failure is reported to the caller as a typed value. "No legal move"
//! is not an error: move selection returns `None` for a full board.

use thiserror::Error;

use crate::core::Coord;

/// Main error type for the crate.
#[derive(Error, Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum Error {
    #[error("board snapshot must hold exactly {expected} cells, got {got}")]
    CellCount { expected: usize, got: usize },

    #[error("coordinate ({row}, {col}) is out of range (must be 0-2)")]
    CoordOutOfRange { row: usize, col: usize },

    #[error("coordinate ({row}, {col}) appears more than once in the snapshot")]
    DuplicateCoord { row: usize, col: usize },

    #[error("invalid character '{character}' at cell {position} (expected 'X', 'O' or '.')")]
    InvalidCellCharacter { character: char, position: usize },

    #[error("engine and opponent must use different marks")]
    IdenticalMarks,

    #[error("max depth {depth} is out of range (must be 1-9)")]
    DepthOutOfRange { depth: u8 },

    #[error("random factor {value} is out of range (must be within 0.0-1.0)")]
    RandomFactorOutOfRange { value: f64 },

    #[error("difficulty level {level} is out of range (must be 1-5)")]
    LevelOutOfRange { level: u8 },

    #[error("cell {coord} is already occupied")]
    CellOccupied { coord: Coord },

    #[error("game already over")]
    GameOver,
}

/// Convenience type alias for Results using the crate's Error type.
pub type Result<T> = std::result::Result<T, Error>;
