//! Depth-limited minimax over a single scratch board.
//!
//! Every node is resolved in a fixed order:
//!
//! 1. engine has a line: `WIN_SCORE - depth` (faster wins score higher)
//! 2. opponent has a line: `depth - WIN_SCORE` (slower losses score higher)
//! 3. board full: `0`
//! 4. `depth >= max_depth`: heuristic [`evaluate`]
//! 5. otherwise max (engine to move) or min (opponent to move) over children
//!
//! Children are tried through [`Placement`](crate::core::Placement) guards,
//! so the board is back in its pre-call state whenever a call returns.
//!
//! Heuristic scores are not normalized against `WIN_SCORE`; a cutoff leaf
//! can in principle outscore a distant forced win at shallow depths. At
//! depth 9 no cutoff is ever reached and play is perfect.

use std::time::Instant;

use tracing::trace;

use super::config::{check_depth, Difficulty, Sides};
use super::evaluate::evaluate;
use super::stats::SearchStats;
use crate::core::{Board, Coord};
use crate::error::Result;
use crate::rules::{is_draw, is_win};

/// Base score of a completed line.
pub const WIN_SCORE: i32 = 10;

/// Minimax search context for one engine/opponent pairing.
#[derive(Clone, Debug)]
pub struct Minimax {
    sides: Sides,
    max_depth: u8,
    stats: SearchStats,
}

impl Minimax {
    /// Create a search that stops recursing at `max_depth` plies below the
    /// root candidates. Depth 9 is exhaustive; depths outside 1..=9 are
    /// rejected.
    pub fn new(sides: Sides, max_depth: u8) -> Result<Self> {
        check_depth(max_depth)?;
        Ok(Self {
            sides,
            max_depth,
            stats: SearchStats::default(),
        })
    }

    /// Create a search at an already validated difficulty's depth.
    #[must_use]
    pub fn from_difficulty(sides: Sides, difficulty: &Difficulty) -> Self {
        Self {
            sides,
            max_depth: difficulty.max_depth(),
            stats: SearchStats::default(),
        }
    }

    /// Pick the best empty cell for the engine.
    ///
    /// Candidates are tried in row-major order and a later candidate only
    /// replaces the current best on a strictly greater score, so ties go to
    /// the earliest cell. Returns `None` if the board is full.
    pub fn best_move(&mut self, board: &mut Board) -> Option<(Coord, i32)> {
        let start = Instant::now();
        self.stats.reset();

        let mut best: Option<(Coord, i32)> = None;
        for coord in board.empty_cells() {
            let score = {
                let mut trial = board.place(coord, self.sides.engine);
                self.score(&mut trial, 0, false)
            };
            trace!(%coord, score, "root candidate");

            if best.map_or(true, |(_, best_score)| score > best_score) {
                best = Some((coord, score));
            }
        }

        self.stats.time_us = start.elapsed().as_micros() as u64;
        best
    }

    /// Score `board` from the engine's point of view.
    ///
    /// `depth` is the number of plies already played below the root
    /// candidate; `engine_turn` says whose mark goes down next.
    pub fn score(&mut self, board: &mut Board, depth: u8, engine_turn: bool) -> i32 {
        self.stats.nodes += 1;

        if is_win(board, self.sides.engine) {
            self.stats.terminals += 1;
            return WIN_SCORE - i32::from(depth);
        }
        if is_win(board, self.sides.opponent) {
            self.stats.terminals += 1;
            return i32::from(depth) - WIN_SCORE;
        }
        if is_draw(board) {
            self.stats.terminals += 1;
            return 0;
        }
        if depth >= self.max_depth {
            self.stats.evaluations += 1;
            return evaluate(board, self.sides.engine, self.sides.opponent);
        }

        let mover = self.sides.mover(engine_turn);
        let mut best = if engine_turn { i32::MIN } else { i32::MAX };

        for coord in board.empty_cells() {
            let mut trial = board.place(coord, mover);
            let score = self.score(&mut trial, depth + 1, !engine_turn);
            best = if engine_turn { best.max(score) } else { best.min(score) };
        }

        best
    }

    /// Statistics from the last [`Minimax::best_move`] call.
    #[must_use]
    pub fn stats(&self) -> &SearchStats {
        &self.stats
    }

    #[must_use]
    pub fn sides(&self) -> Sides {
        self.sides
    }

    #[must_use]
    pub fn max_depth(&self) -> u8 {
        self.max_depth
    }
}
