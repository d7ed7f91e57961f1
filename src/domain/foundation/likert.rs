//! Likert score value object (1 to 5 agreement scale).

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ValidationError;

/// Likert agreement score: 1 (strongly disagree) to 5 (strongly agree).
///
/// Serialized as its numeric value, so persisted response blobs carry
/// plain integers. Values outside 1-5 are unrepresentable; deserializing
/// one fails rather than silently entering the corpus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
#[repr(u8)]
pub enum LikertScore {
    StronglyDisagree = 1,
    Disagree = 2,
    Neutral = 3,
    Agree = 4,
    StronglyAgree = 5,
}

impl LikertScore {
    /// Creates a LikertScore from an integer, returning error if out of range.
    pub fn try_from_u8(value: u8) -> Result<Self, ValidationError> {
        match value {
            1 => Ok(LikertScore::StronglyDisagree),
            2 => Ok(LikertScore::Disagree),
            3 => Ok(LikertScore::Neutral),
            4 => Ok(LikertScore::Agree),
            5 => Ok(LikertScore::StronglyAgree),
            _ => Err(ValidationError::out_of_range("score", 1, 5, value as i32)),
        }
    }

    /// Returns the numeric value.
    pub fn value(&self) -> u8 {
        *self as u8
    }

    /// Returns the display label.
    pub fn label(&self) -> &'static str {
        match self {
            LikertScore::StronglyDisagree => "Strongly Disagree",
            LikertScore::Disagree => "Disagree",
            LikertScore::Neutral => "Neutral",
            LikertScore::Agree => "Agree",
            LikertScore::StronglyAgree => "Strongly Agree",
        }
    }

    /// Returns true if this score counts as agreement (4 or 5).
    pub fn is_agreement(&self) -> bool {
        self.value() >= 4
    }

    /// All scores in ascending order.
    pub fn all() -> [LikertScore; 5] {
        [
            LikertScore::StronglyDisagree,
            LikertScore::Disagree,
            LikertScore::Neutral,
            LikertScore::Agree,
            LikertScore::StronglyAgree,
        ]
    }
}

impl From<LikertScore> for u8 {
    fn from(score: LikertScore) -> u8 {
        score.value()
    }
}

impl TryFrom<u8> for LikertScore {
    type Error = ValidationError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::try_from_u8(value)
    }
}

impl fmt::Display for LikertScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value())
    }
}
