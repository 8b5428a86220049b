//! Noughts-and-crosses game flow.
//!
//! The calling layer around the engine:
//! - `Match`: turn order, move validation, win/draw after each move
//! - `play_out`: engine-vs-engine rounds
//! - `DifficultyLevel`: maps a 1-5 star level to engine knobs

mod game;
mod level;

pub use game::{play_out, Match};
pub use level::DifficultyLevel;
