//! Refined score type validated once at the boundary.
//!
//! The rubric assumes well-formed input; rather than letting an
//! out-of-range raw value silently count as a limitation or skew an
//! average, the range invariant is checked at construction and every rule
//! downstream works with a [`Score`] that is known to be in [1, 10].

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use super::rules;
use super::Olq;

/// A single OLQ score on the 1-10 scale, lower is better.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(try_from = "u8", into = "u8")]
pub struct Score(u8);

/// One assessment's scores, keyed by quality.
///
/// A complete set has all 15 qualities; the engine tolerates at most one
/// missing (see the integration adapter).
pub type ScoreSet = BTreeMap<Olq, Score>;

/// Boundary errors for score construction.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ScoreError {
    #[error("score {0} out of range ({min}-{max})", min = rules::MIN_SCORE, max = rules::MAX_SCORE)]
    OutOfRange(u8),
}

impl Score {
    /// Validate a raw value into a `Score`.
    pub fn new(value: u8) -> Result<Score, ScoreError> {
        if (rules::MIN_SCORE..=rules::MAX_SCORE).contains(&value) {
            Ok(Score(value))
        } else {
            Err(ScoreError::OutOfRange(value))
        }
    }

    /// The raw 1-10 value.
    pub fn value(self) -> u8 {
        self.0
    }

    /// Whether this score counts as a limitation (>= 8).
    pub fn is_limitation(self) -> bool {
        self.0 >= rules::LIMITATION_THRESHOLD
    }

    /// Qualitative band for this score per board convention.
    pub fn rating(self) -> &'static str {
        match self.0 {
            1..=3 => "Exceptional",
            4 => "Excellent",
            5 => "Very Good",
            6 => "Good",
            7 => "Average",
            8 => "Below Average",
            _ => "Poor",
        }
    }
}

impl TryFrom<u8> for Score {
    type Error = ScoreError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Score::new(value)
    }
}

impl From<Score> for u8 {
    fn from(score: Score) -> u8 {
        score.0
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
