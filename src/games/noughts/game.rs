//! Round bookkeeping and engine-vs-engine play.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::{Board, Coord, GameRng, Mark};
use crate::error::{Error, Result};
use crate::rules::{is_draw, is_win, Outcome};
use crate::search::{Difficulty, MovePolicy, Sides};

/// One round of noughts-and-crosses.
///
/// Rejects moves on occupied cells and after the round has ended. After
/// each committed move the mover's win is checked, then a full board.
/// The turn passes to the other mark only if the round goes on.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Match {
    board: Board,
    to_move: Mark,
    outcome: Outcome,
    history: Vec<Coord>,
}

impl Default for Match {
    fn default() -> Self {
        Self::new()
    }
}

impl Match {
    /// Start a round on an empty board with X to move.
    #[must_use]
    pub fn new() -> Self {
        Self::starting_with(Mark::X)
    }

    /// Start a round on an empty board with `first` to move.
    #[must_use]
    pub fn starting_with(first: Mark) -> Self {
        Self {
            board: Board::new(),
            to_move: first,
            outcome: Outcome::InProgress,
            history: Vec::new(),
        }
    }

    /// Commit a move for the player to move.
    pub fn play(&mut self, coord: Coord) -> Result<Outcome> {
        if self.outcome.is_over() {
            return Err(Error::GameOver);
        }
        if !self.board.get(coord).is_empty() {
            return Err(Error::CellOccupied { coord });
        }

        let mover = self.to_move;
        self.board.set(coord, mover.cell());
        self.history.push(coord);
        debug!(mark = %mover, %coord, "move played");

        if is_win(&self.board, mover) {
            self.outcome = Outcome::Won(mover);
        } else if is_draw(&self.board) {
            self.outcome = Outcome::Draw;
        }

        if self.outcome.is_over() {
            debug!(outcome = ?self.outcome, moves = self.history.len(), "round over");
        } else {
            self.to_move = mover.opponent();
        }
        Ok(self.outcome)
    }

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Mark whose turn it is. Once the round is over, the mark that made
    /// the last move.
    #[must_use]
    pub fn to_move(&self) -> Mark {
        self.to_move
    }

    #[must_use]
    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    /// Committed moves, first to last.
    #[must_use]
    pub fn history(&self) -> &[Coord] {
        &self.history
    }
}

/// Play one round between two engines, X moving first.
///
/// Each side selects moves with its own difficulty; both draw from `rng`.
pub fn play_out(x: Difficulty, o: Difficulty, rng: &mut GameRng) -> Result<Match> {
    let x_policy = MovePolicy::new(Sides::for_engine(Mark::X), x);
    let o_policy = MovePolicy::new(Sides::for_engine(Mark::O), o);
    let mut round = Match::new();

    while !round.outcome().is_over() {
        let policy = match round.to_move() {
            Mark::X => &x_policy,
            Mark::O => &o_policy,
        };
        // An in-progress round always has an empty cell
        let Some(choice) = policy.choose_move(round.board(), rng) else {
            break;
        };
        round.play(choice.coord)?;
    }

    Ok(round)
}
