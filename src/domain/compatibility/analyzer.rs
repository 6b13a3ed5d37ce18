//! Compatibility Analyzer - blends zodiac, life path, and career signals
//! into a single scored result.

use rand::Rng;
use tracing::debug;

use crate::domain::astrology::ZodiacSign;
use crate::domain::foundation::Score;
use crate::domain::numerology::LifePathNumber;
use crate::domain::profile::CandidateProfile;

use super::{CareerAffinity, CompatibilityResult, MatchDetail};

/// Inclusive range the running score is seeded from before any sub-score
/// is blended in.
const BASELINE_RANGE: (u8, u8) = (65, 84);

/// Sub-scores at or above this land an entry in `pros`.
const PROS_THRESHOLD: u8 = 75;

/// Sub-scores at or below this land an entry in `cons`.
const CONS_THRESHOLD: u8 = 40;

/// Career sub-scores at or above this still earn a milder pro.
const CAREER_SOFT_THRESHOLD: u8 = 50;

/// Zodiac affinity bucket for a pair of signs.
///
/// Classification is deterministic and checked in the user-to-target
/// direction; only the magnitude within the bucket's range is randomized.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ZodiacAffinity {
    /// Same sign on both sides.
    Identical,
    /// Target sign appears in the user's compatible set.
    Harmonious,
    /// Target sign is the user's opposite on the wheel.
    Opposite,
    /// No particular relationship.
    Neutral,
}

impl ZodiacAffinity {
    /// Classifies the relationship between two signs.
    pub fn classify(user: ZodiacSign, target: ZodiacSign) -> Self {
        if user == target {
            ZodiacAffinity::Identical
        } else if user.is_compatible_with(target) {
            ZodiacAffinity::Harmonious
        } else if user.opposite() == target {
            ZodiacAffinity::Opposite
        } else {
            ZodiacAffinity::Neutral
        }
    }

    /// Inclusive score range for this bucket.
    pub fn score_range(&self) -> (u8, u8) {
        match self {
            ZodiacAffinity::Identical => (70, 84),
            ZodiacAffinity::Harmonious => (80, 94),
            ZodiacAffinity::Opposite => (60, 84),
            ZodiacAffinity::Neutral => (50, 74),
        }
    }

    /// Insight text for this bucket.
    pub fn description(&self, user: ZodiacSign, target: ZodiacSign) -> String {
        match self {
            ZodiacAffinity::Identical => format!(
                "Two {user} hearts understand each other deeply, though a competitive undertone can creep in"
            ),
            ZodiacAffinity::Harmonious => {
                format!("{user} and {target} flow together with natural harmony")
            }
            ZodiacAffinity::Opposite => format!(
                "{user} and {target} sit opposite on the wheel: intense attraction that comes with real challenge"
            ),
            ZodiacAffinity::Neutral => format!(
                "{user} and {target} see the world differently, and those differences are room to grow"
            ),
        }
    }
}

/// Life path affinity bucket for a pair of numbers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LifePathAffinity {
    /// Same number on both sides.
    Identical,
    /// Target number appears in the user's complementary set.
    Complementary,
    /// No particular relationship.
    Neutral,
}

impl LifePathAffinity {
    /// Classifies the relationship between two life path numbers.
    pub fn classify(user: LifePathNumber, target: LifePathNumber) -> Self {
        if user == target {
            LifePathAffinity::Identical
        } else if user.is_compatible_with(target) {
            LifePathAffinity::Complementary
        } else {
            LifePathAffinity::Neutral
        }
    }

    /// Inclusive score range for this bucket.
    pub fn score_range(&self) -> (u8, u8) {
        match self {
            LifePathAffinity::Identical => (75, 89),
            LifePathAffinity::Complementary => (85, 99),
            LifePathAffinity::Neutral => (55, 74),
        }
    }

    /// Insight text for this bucket.
    pub fn description(&self, user: LifePathNumber, target: LifePathNumber) -> String {
        match self {
            LifePathAffinity::Identical => format!(
                "You share life path {user}, a strong base of mutual understanding with a hint of competition"
            ),
            LifePathAffinity::Complementary => {
                format!("Life paths {user} and {target} complement each other beautifully")
            }
            LifePathAffinity::Neutral => format!(
                "Life paths {user} and {target} carry different energies that can balance with effort"
            ),
        }
    }
}

/// Stateless analyzer composing the zodiac, numerology, and career signals.
pub struct CompatibilityAnalyzer;

impl CompatibilityAnalyzer {
    /// Analyzes two profiles using the thread-local RNG.
    pub fn analyze(
        user: Option<&CandidateProfile>,
        target: Option<&CandidateProfile>,
    ) -> CompatibilityResult {
        Self::analyze_with_rng(user, target, &mut rand::thread_rng())
    }

    /// Analyzes two profiles, drawing all bucket magnitudes from `rng`.
    ///
    /// Classification into buckets is a pure function of the profiles; the
    /// RNG only picks where inside each bucket's range a sub-score lands,
    /// plus the personality coin flip. A seeded RNG therefore pins the whole
    /// result.
    ///
    /// # Edge Cases
    /// - Either profile absent: returns the fixed incomplete result.
    /// - Missing birthdays: zodiac and life path sub-scores are skipped.
    /// - Missing skills/titles: career falls to the weakest bucket, never
    ///   skipped.
    pub fn analyze_with_rng<R: Rng + ?Sized>(
        user: Option<&CandidateProfile>,
        target: Option<&CandidateProfile>,
        rng: &mut R,
    ) -> CompatibilityResult {
        let (Some(user), Some(target)) = (user, target) else {
            return CompatibilityResult::incomplete();
        };

        let mut score = draw(rng, BASELINE_RANGE);
        let mut insights = Vec::new();
        let mut pros = Vec::new();
        let mut cons = Vec::new();

        let zodiac_match = Self::zodiac_match(user, target, rng);
        if let Some(detail) = &zodiac_match {
            score = score.blend(detail.score);
            insights.push(detail.description.clone());
            if detail.score.value() >= PROS_THRESHOLD {
                pros.push("Astrologically well-matched".to_string());
            } else if detail.score.value() <= CONS_THRESHOLD {
                cons.push("Astrological challenges may arise".to_string());
            }
        }

        let life_path_match = Self::life_path_match(user, target, rng);
        if let Some(detail) = &life_path_match {
            score = score.blend(detail.score);
            insights.push(detail.description.clone());
            if detail.score.value() >= PROS_THRESHOLD {
                pros.push("Life paths complement each other".to_string());
            } else if detail.score.value() <= CONS_THRESHOLD {
                cons.push("Differing life approaches".to_string());
            }
        }

        // Career never abstains: every pair gets this signal.
        let career_affinity = CareerAffinity::classify(user, target);
        let career_score = draw(rng, career_affinity.score_range());
        score = score.blend(career_score);
        insights.push(career_affinity.insight().to_string());
        if career_score.value() >= PROS_THRESHOLD {
            pros.push("Strong career alignment".to_string());
            pros.push("Professional goals highly compatible".to_string());
        } else if career_score.value() >= CAREER_SOFT_THRESHOLD {
            pros.push("Can learn from each other's professional experiences".to_string());
        } else {
            cons.push("Career paths may create tension".to_string());
        }

        // Personality coin flip colors the narrative without moving the score.
        if rng.gen_bool(0.5) {
            pros.push("Natural personality alignment".to_string());
            insights.push("Your communication styles complement each other naturally".to_string());
        } else {
            cons.push("May need to work on communication".to_string());
            insights.push(
                "Your communication styles differ, which can become a source of growth".to_string(),
            );
        }

        debug!(
            score = score.value(),
            career = ?career_affinity,
            zodiac = zodiac_match.is_some(),
            life_path = life_path_match.is_some(),
            "compatibility analysis complete"
        );

        CompatibilityResult {
            score,
            insights,
            pros,
            cons,
            zodiac_match,
            life_path_match,
        }
    }

    /// Scores the zodiac pairing, or abstains when either sign is unknown.
    fn zodiac_match<R: Rng + ?Sized>(
        user: &CandidateProfile,
        target: &CandidateProfile,
        rng: &mut R,
    ) -> Option<MatchDetail> {
        let user_sign = user.zodiac_sign()?;
        let target_sign = target.zodiac_sign()?;

        let affinity = ZodiacAffinity::classify(user_sign, target_sign);
        let score = draw(rng, affinity.score_range());
        Some(MatchDetail::new(
            score,
            affinity.description(user_sign, target_sign),
        ))
    }

    /// Scores the life path pairing, or abstains when either number is unknown.
    fn life_path_match<R: Rng + ?Sized>(
        user: &CandidateProfile,
        target: &CandidateProfile,
        rng: &mut R,
    ) -> Option<MatchDetail> {
        let user_path = user.life_path()?;
        let target_path = target.life_path()?;

        let affinity = LifePathAffinity::classify(user_path, target_path);
        let score = draw(rng, affinity.score_range());
        Some(MatchDetail::new(
            score,
            affinity.description(user_path, target_path),
        ))
    }
}

/// Draws a score uniformly from an inclusive range.
fn draw<R: Rng + ?Sized>(rng: &mut R, (low, high): (u8, u8)) -> Score {
    Score::new(rng.gen_range(low..=high))
}
