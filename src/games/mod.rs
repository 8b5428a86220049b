//! Game flows built on the engine.

pub mod noughts;

pub use noughts::{play_out, DifficultyLevel, Match};
