//! Search configuration: player sides and difficulty.
//!
//! Both values are validated on construction, so search code never sees
//! an out-of-range depth, a NaN random factor, or two identical marks.

use serde::{Deserialize, Serialize};

use crate::core::Mark;
use crate::error::{Error, Result};

/// Shallowest allowed search depth.
pub const MIN_DEPTH: u8 = 1;

/// Deepest useful search depth. At this depth the search is exhaustive.
pub const MAX_DEPTH: u8 = 9;

/// Which mark the engine plays (maximizer) and which it plays against
/// (minimizer).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Sides {
    pub engine: Mark,
    pub opponent: Mark,
}

impl Sides {
    /// Create sides from two marks supplied by the caller.
    pub fn new(engine: Mark, opponent: Mark) -> Result<Self> {
        if engine == opponent {
            return Err(Error::IdenticalMarks);
        }
        Ok(Self { engine, opponent })
    }

    /// The engine plays `engine`, the opponent the other mark.
    #[must_use]
    pub const fn for_engine(engine: Mark) -> Self {
        Self { engine, opponent: engine.opponent() }
    }

    /// Mark that moves on the given turn.
    #[must_use]
    pub const fn mover(self, engine_turn: bool) -> Mark {
        if engine_turn {
            self.engine
        } else {
            self.opponent
        }
    }
}

/// Difficulty knobs: search depth and probability of a random move.
///
/// The two knobs are independent. Coupling them to a single level is the
/// caller's business (see `games::DifficultyLevel`).
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "DifficultyRepr")]
pub struct Difficulty {
    /// Plies searched before falling back to the heuristic (1-9).
    max_depth: u8,

    /// Probability in [0, 1] of skipping search and playing a uniformly
    /// random empty cell.
    random_factor: f64,
}

impl Default for Difficulty {
    fn default() -> Self {
        Self::perfect()
    }
}

impl Difficulty {
    /// Create a difficulty, failing fast on out-of-range values.
    pub fn new(max_depth: u8, random_factor: f64) -> Result<Self> {
        check_depth(max_depth)?;
        check_random_factor(random_factor)?;
        Ok(Self { max_depth, random_factor })
    }

    /// Build from values the caller has already range-checked.
    pub(crate) fn from_checked(max_depth: u8, random_factor: f64) -> Self {
        debug_assert!(check_depth(max_depth).is_ok(), "depth {max_depth} out of range");
        debug_assert!(
            check_random_factor(random_factor).is_ok(),
            "random factor {random_factor} out of range"
        );
        Self { max_depth, random_factor }
    }

    /// Exhaustive search with no random moves. Never loses.
    #[must_use]
    pub const fn perfect() -> Self {
        Self { max_depth: MAX_DEPTH, random_factor: 0.0 }
    }

    /// Pure random play.
    #[must_use]
    pub const fn random() -> Self {
        Self { max_depth: MIN_DEPTH, random_factor: 1.0 }
    }

    /// Replace the search depth.
    pub fn with_max_depth(mut self, max_depth: u8) -> Result<Self> {
        check_depth(max_depth)?;
        self.max_depth = max_depth;
        Ok(self)
    }

    /// Replace the random factor.
    pub fn with_random_factor(mut self, random_factor: f64) -> Result<Self> {
        check_random_factor(random_factor)?;
        self.random_factor = random_factor;
        Ok(self)
    }

    #[must_use]
    pub const fn max_depth(&self) -> u8 {
        self.max_depth
    }

    #[must_use]
    pub const fn random_factor(&self) -> f64 {
        self.random_factor
    }
}

pub(crate) fn check_depth(depth: u8) -> Result<()> {
    if (MIN_DEPTH..=MAX_DEPTH).contains(&depth) {
        Ok(())
    } else {
        Err(Error::DepthOutOfRange { depth })
    }
}

fn check_random_factor(value: f64) -> Result<()> {
    // NaN fails the range check
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(Error::RandomFactorOutOfRange { value })
    }
}

#[derive(Deserialize)]
struct DifficultyRepr {
    max_depth: u8,
    random_factor: f64,
}

impl TryFrom<DifficultyRepr> for Difficulty {
    type Error = Error;

    fn try_from(repr: DifficultyRepr) -> Result<Self> {
        Difficulty::new(repr.max_depth, repr.random_factor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_perfect() {
        let difficulty = Difficulty::default();
        assert_eq!(difficulty.max_depth(), 9);
        assert_eq!(difficulty.random_factor(), 0.0);
    }

    #[test]
    fn test_bounds_accepted() {
        assert!(Difficulty::new(1, 0.0).is_ok());
        assert!(Difficulty::new(9, 1.0).is_ok());
    }

    #[test]
    fn test_out_of_range_rejected() {
        assert_eq!(Difficulty::new(0, 0.5), Err(Error::DepthOutOfRange { depth: 0 }));
        assert_eq!(Difficulty::new(10, 0.5), Err(Error::DepthOutOfRange { depth: 10 }));
        assert_eq!(
            Difficulty::new(5, 1.5),
            Err(Error::RandomFactorOutOfRange { value: 1.5 })
        );
        assert!(Difficulty::new(5, -0.1).is_err());
        assert!(Difficulty::new(5, f64::NAN).is_err());
    }

    #[test]
    fn test_builder_pattern() {
        let difficulty = Difficulty::perfect()
            .with_max_depth(3)
            .and_then(|d| d.with_random_factor(0.25))
            .unwrap();

        assert_eq!(difficulty.max_depth(), 3);
        assert_eq!(difficulty.random_factor(), 0.25);
        assert!(Difficulty::perfect().with_max_depth(12).is_err());
    }

    #[test]
    fn test_serialization_validates() {
        let difficulty = Difficulty::new(4, 0.2).unwrap();
        let json = serde_json::to_string(&difficulty).unwrap();
        let deserialized: Difficulty = serde_json::from_str(&json).unwrap();
        assert_eq!(difficulty, deserialized);

        let bad = r#"{"max_depth": 11, "random_factor": 0.0}"#;
        assert!(serde_json::from_str::<Difficulty>(bad).is_err());
    }

    #[test]
    fn test_sides() {
        let sides = Sides::for_engine(Mark::O);
        assert_eq!(sides.opponent, Mark::X);
        assert_eq!(sides.mover(true), Mark::O);
        assert_eq!(sides.mover(false), Mark::X);

        assert_eq!(Sides::new(Mark::X, Mark::O), Ok(Sides::for_engine(Mark::X)));
        assert_eq!(Sides::new(Mark::X, Mark::X), Err(Error::IdenticalMarks));
    }
}
