//! Score value object (0-100 scale).

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ValidationError;

/// A compatibility score between 0 and 100 inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Score(u8);

impl Score {
    /// Zero score.
    pub const ZERO: Self = Self(0);

    /// Maximum score.
    pub const MAX: Self = Self(100);

    /// Creates a new Score, clamping to valid range.
    pub fn new(value: u8) -> Self {
        Self(value.min(100))
    }

    /// Creates a Score, returning error if out of range.
    pub fn try_new(value: u8) -> Result<Self, ValidationError> {
        if value > 100 {
            return Err(ValidationError::out_of_range(
                "score",
                0,
                100,
                value as i32,
            ));
        }
        Ok(Self(value))
    }

    /// Returns the value as u8.
    pub fn value(&self) -> u8 {
        self.0
    }

    /// Blends this score with another as the rounded midpoint.
    ///
    /// Halves round up, matching `round((a + b) / 2)`. The result is
    /// clamped to 100 even though two valid scores cannot exceed it.
    pub fn blend(&self, other: Score) -> Score {
        let sum = u16::from(self.0) + u16::from(other.0);
        Score::new(((sum + 1) / 2) as u8)
    }
}

impl Default for Score {
    fn default() -> Self {
        Self::ZERO
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn score_new_accepts_valid_values() {
        assert_eq!(Score::new(0).value(), 0);
        assert_eq!(Score::new(50).value(), 50);
        assert_eq!(Score::new(100).value(), 100);
    }

    #[test]
    fn score_new_clamps_to_100() {
        assert_eq!(Score::new(101).value(), 100);
        assert_eq!(Score::new(255).value(), 100);
    }

    #[test]
    fn score_try_new_accepts_valid_values() {
        assert!(Score::try_new(0).is_ok());
        assert!(Score::try_new(100).is_ok());
    }

    #[test]
    fn score_try_new_rejects_over_100() {
        let result = Score::try_new(101);
        match result {
            Err(ValidationError::OutOfRange { field, min, max, actual }) => {
                assert_eq!(field, "score");
                assert_eq!(min, 0);
                assert_eq!(max, 100);
                assert_eq!(actual, 101);
            }
            _ => panic!("Expected OutOfRange error"),
        }
    }

    #[test]
    fn score_blend_averages_even_sums() {
        assert_eq!(Score::new(70).blend(Score::new(80)).value(), 75);
        assert_eq!(Score::new(0).blend(Score::new(100)).value(), 50);
    }

    #[test]
    fn score_blend_rounds_halves_up() {
        // (70 + 81) / 2 = 75.5 -> 76
        assert_eq!(Score::new(70).blend(Score::new(81)).value(), 76);
        // (0 + 1) / 2 = 0.5 -> 1
        assert_eq!(Score::ZERO.blend(Score::new(1)).value(), 1);
    }

    #[test]
    fn score_blend_is_symmetric() {
        let a = Score::new(63);
        let b = Score::new(88);
        assert_eq!(a.blend(b), b.blend(a));
    }

    #[test]
    fn score_blend_stays_in_range() {
        assert_eq!(Score::MAX.blend(Score::MAX).value(), 100);
        assert_eq!(Score::ZERO.blend(Score::ZERO).value(), 0);
    }

    #[test]
    fn score_displays_without_suffix() {
        assert_eq!(format!("{}", Score::new(75)), "75");
        assert_eq!(format!("{}", Score::ZERO), "0");
    }

    #[test]
    fn score_default_is_zero() {
        assert_eq!(Score::default(), Score::ZERO);
    }

    #[test]
    fn score_serializes_to_bare_number() {
        let score = Score::new(42);
        let json = serde_json::to_string(&score).unwrap();
        assert_eq!(json, "42");
    }

    #[test]
    fn score_deserializes_from_bare_number() {
        let score: Score = serde_json::from_str("75").unwrap();
        assert_eq!(score.value(), 75);
    }
}
