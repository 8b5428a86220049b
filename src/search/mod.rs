//! Move selection for noughts-and-crosses.
//!
//! ## Overview
//!
//! - [`evaluate`]: static heuristic used when search is truncated
//! - [`Minimax`]: depth-limited adversarial search with stable tie-breaks
//! - [`MovePolicy`]: blends optimal play with random mistakes according to
//!   a [`Difficulty`]
//!
//! ## Usage
//!
//! ```rust
//! use noughts_ai::core::{Board, Coord, GameRng, Mark};
//! use noughts_ai::search::{Difficulty, MovePolicy, Sides};
//!
//! let board: Board = "XX./OO./...".parse().unwrap();
//! let difficulty = Difficulty::new(3, 0.0).unwrap();
//! let policy = MovePolicy::new(Sides::for_engine(Mark::X), difficulty);
//!
//! let mut rng = GameRng::new(42);
//! let choice = policy.choose_move(&board, &mut rng).unwrap();
//! assert_eq!(choice.coord, Coord::new(0, 2));
//! ```

pub mod config;
pub mod evaluate;
pub mod minimax;
pub mod policy;
pub mod stats;

pub use config::{Difficulty, Sides, MAX_DEPTH, MIN_DEPTH};
pub use evaluate::evaluate;
pub use minimax::{Minimax, WIN_SCORE};
pub use policy::{MoveChoice, MoveKind, MovePolicy};
pub use stats::SearchStats;
