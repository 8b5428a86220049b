//! Terminal detection for noughts-and-crosses.
//!
//! - `LINES`: the eight fixed winning triples
//! - `is_win` / `is_draw`: primitive checks used by the search
//! - `outcome`: full classification for round bookkeeping

pub mod lines;
pub mod terminal;

pub use lines::{count_in_line, Line, LINES};
pub use terminal::{is_draw, is_win, outcome, Outcome};
