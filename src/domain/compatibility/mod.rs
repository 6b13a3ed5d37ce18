//! Compatibility module - Pairwise scoring of candidate profiles.
//!
//! The analyzer composes three signals: zodiac affinity, life path affinity,
//! and career overlap. Bucket classification is pure; the magnitude drawn
//! within a bucket comes from an injectable RNG so callers can pin results.

mod analyzer;
mod career;
mod result;

pub use analyzer::{CompatibilityAnalyzer, LifePathAffinity, ZodiacAffinity};
pub use career::{same_industry, skill_overlap_ratio, CareerAffinity};
pub use result::{CompatibilityResult, MatchDetail, INCOMPLETE_PROFILES_INSIGHT};
