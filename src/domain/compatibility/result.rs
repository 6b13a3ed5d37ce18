//! Result types returned by the compatibility analyzer.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::Score;

/// Insight shown when one or both profiles are missing.
pub const INCOMPLETE_PROFILES_INSIGHT: &str =
    "Profiles incomplete: compatibility could not be assessed";

/// A single sub-score with its human-readable description.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchDetail {
    pub score: Score,
    pub description: String,
}

impl MatchDetail {
    /// Creates a new match detail.
    pub fn new(score: Score, description: impl Into<String>) -> Self {
        Self {
            score,
            description: description.into(),
        }
    }
}

/// The full outcome of comparing two profiles.
///
/// `insights`, `pros`, and `cons` keep the order in which their entries were
/// generated: zodiac first (when derivable), then life path (when derivable),
/// then career, then personality.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompatibilityResult {
    pub score: Score,
    pub insights: Vec<String>,
    pub pros: Vec<String>,
    pub cons: Vec<String>,
    pub zodiac_match: Option<MatchDetail>,
    pub life_path_match: Option<MatchDetail>,
}

impl CompatibilityResult {
    /// The fallback result for a missing profile: zero score, one explanatory
    /// insight, nothing else.
    pub fn incomplete() -> Self {
        Self {
            score: Score::ZERO,
            insights: vec![INCOMPLETE_PROFILES_INSIGHT.to_string()],
            pros: Vec::new(),
            cons: Vec::new(),
            zodiac_match: None,
            life_path_match: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn incomplete_result_has_zero_score_and_one_insight() {
        let result = CompatibilityResult::incomplete();
        assert_eq!(result.score, Score::ZERO);
        assert_eq!(result.insights.len(), 1);
        assert!(result.pros.is_empty());
        assert!(result.cons.is_empty());
        assert!(result.zodiac_match.is_none());
        assert!(result.life_path_match.is_none());
    }

    #[test]
    fn result_round_trips_through_json() {
        let result = CompatibilityResult {
            score: Score::new(82),
            insights: vec!["insight".into()],
            pros: vec!["pro".into()],
            cons: vec![],
            zodiac_match: Some(MatchDetail::new(Score::new(90), "harmonious")),
            life_path_match: None,
        };

        let json = serde_json::to_string(&result).unwrap();
        let back: CompatibilityResult = serde_json::from_str(&json).unwrap();
        assert_eq!(back, result);
    }
}
