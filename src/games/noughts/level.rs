//! Star-rating difficulty levels.
//!
//! A single level drives both engine knobs: higher levels search deeper
//! and make fewer random moves.
//!
//! | level | max depth | random factor |
//! |-------|-----------|---------------|
//! | 1     | 1         | 0.8           |
//! | 2     | 2         | 0.6           |
//! | 3     | 3         | 0.4           |
//! | 4     | 4         | 0.2           |
//! | 5     | 5         | 0.0           |

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::search::Difficulty;

/// A difficulty level in 1..=5.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct DifficultyLevel(u8);

impl DifficultyLevel {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 5;

    /// Create a level, rejecting values outside 1..=5.
    pub fn new(level: u8) -> Result<Self> {
        if (Self::MIN..=Self::MAX).contains(&level) {
            Ok(Self(level))
        } else {
            Err(Error::LevelOutOfRange { level })
        }
    }

    /// Every level, easiest first.
    pub fn all() -> impl Iterator<Item = DifficultyLevel> {
        (Self::MIN..=Self::MAX).map(DifficultyLevel)
    }

    #[must_use]
    pub const fn get(self) -> u8 {
        self.0
    }

    /// Map to engine knobs: `max_depth = level`,
    /// `random_factor = 1 - 0.2 * level`.
    ///
    /// Infallible: levels 1..=5 give depths within 1..=9 and factors
    /// within 0.0..=0.8.
    #[must_use]
    pub fn to_difficulty(self) -> Difficulty {
        let random_factor = f64::from(Self::MAX - self.0) / f64::from(Self::MAX);
        Difficulty::from_checked(self.0, random_factor)
    }
}

impl TryFrom<u8> for DifficultyLevel {
    type Error = Error;

    fn try_from(level: u8) -> Result<Self> {
        Self::new(level)
    }
}

impl From<DifficultyLevel> for u8 {
    fn from(level: DifficultyLevel) -> Self {
        level.0
    }
}

impl From<DifficultyLevel> for Difficulty {
    fn from(level: DifficultyLevel) -> Self {
        level.to_difficulty()
    }
}

impl std::fmt::Display for DifficultyLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Level {}", self.0)
    }
}
