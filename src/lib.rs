//! # noughts-ai
//!
//! Move-selection engine for 3x3 noughts-and-crosses.
//!
//! ## Design Principles
//!
//! 1. **Pure per call**: every move computation is a function of the board,
//!    the two marks, the difficulty, and draws from a caller-owned RNG.
//!    Nothing persists between calls.
//!
//! 2. **Caller's board is read-only**: search mutates a scratch copy through
//!    scoped place/undo guards, never the board it was given.
//!
//! 3. **Typed failures**: invalid snapshots and out-of-range difficulty are
//!    rejected with [`Error`]; a full board yields `None`, not an error.
//!
//! ## Modules
//!
//! - `core`: cells, marks, coordinates, board, RNG
//! - `rules`: winning lines, win/draw detection
//! - `search`: heuristic evaluation, minimax, difficulty policy
//! - `games`: round bookkeeping, self-play, difficulty levels

pub mod core;
pub mod error;
pub mod games;
pub mod rules;
pub mod search;

// Re-export commonly used types
pub use crate::core::{Board, Cell, Coord, GameRng, Mark, Placement};

pub use crate::error::{Error, Result};

pub use crate::rules::{is_draw, is_win, outcome, Outcome, LINES};

pub use crate::search::{
    evaluate, Difficulty, Minimax, MoveChoice, MoveKind, MovePolicy, SearchStats, Sides,
};

pub use crate::games::{play_out, DifficultyLevel, Match};
