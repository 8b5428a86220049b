//! Board model: cells, marks, coordinates, the board itself, and RNG.
//!
//! This module is pure data. Win/draw logic lives in `rules`, move
//! selection in `search`.

pub mod board;
pub mod cell;
pub mod rng;

pub use board::{Board, Coord, EmptyCells, Placement, CELL_COUNT, SIZE};
pub use cell::{Cell, Mark};
pub use rng::GameRng;
