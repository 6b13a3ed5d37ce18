//! Career overlap heuristic: shared skills and related job titles.

use std::collections::HashSet;

use crate::domain::profile::CandidateProfile;

/// Skill overlap above this ratio counts as strong professional alignment.
const STRONG_OVERLAP: f64 = 0.5;

/// Skill overlap above this ratio counts as some common ground.
const PARTIAL_OVERLAP: f64 = 0.2;

/// Career affinity bucket for a pair of profiles.
///
/// Classification is deterministic; only the magnitude drawn within the
/// bucket's score range is randomized by the analyzer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CareerAffinity {
    /// More than half the smaller skill set is shared, or the job titles
    /// read as the same industry.
    Aligned,
    /// Some shared skills, short of strong alignment.
    SomeCommonGround,
    /// Little to no professional overlap.
    Diverse,
}

impl CareerAffinity {
    /// Classifies the career affinity between two profiles.
    ///
    /// Unlike the zodiac and life path signals this never abstains: absent
    /// skills and titles simply land in the weakest bucket.
    pub fn classify(user: &CandidateProfile, target: &CandidateProfile) -> Self {
        let overlap = skill_overlap_ratio(&user.skills, &target.skills);
        if overlap > STRONG_OVERLAP
            || same_industry(user.job_title.as_deref(), target.job_title.as_deref())
        {
            CareerAffinity::Aligned
        } else if overlap > PARTIAL_OVERLAP {
            CareerAffinity::SomeCommonGround
        } else {
            CareerAffinity::Diverse
        }
    }

    /// Inclusive score range for this bucket.
    pub fn score_range(&self) -> (u8, u8) {
        match self {
            CareerAffinity::Aligned => (80, 94),
            CareerAffinity::SomeCommonGround => (65, 79),
            CareerAffinity::Diverse => (50, 64),
        }
    }

    /// Insight text for this bucket.
    pub fn insight(&self) -> &'static str {
        match self {
            CareerAffinity::Aligned => {
                "You share professional interests and speak the same working language"
            }
            CareerAffinity::SomeCommonGround => {
                "Your careers have enough in common to connect over"
            }
            CareerAffinity::Diverse => {
                "Diverse professional backgrounds bring fresh perspectives to each other"
            }
        }
    }
}

/// Ratio of shared skills to the smaller list's length.
///
/// Matching is case-sensitive and exact; the denominator is floored at 1 so
/// empty lists yield 0 rather than dividing by zero.
pub fn skill_overlap_ratio(user_skills: &[String], target_skills: &[String]) -> f64 {
    let user_set: HashSet<&str> = user_skills.iter().map(String::as_str).collect();
    let target_set: HashSet<&str> = target_skills.iter().map(String::as_str).collect();
    let shared = user_set.intersection(&target_set).count();

    let smaller = user_skills.len().min(target_skills.len()).max(1);
    shared as f64 / smaller as f64
}

/// Returns true when either job title contains the other, ignoring case.
///
/// Both titles must be present and non-empty: an empty string is a substring
/// of everything and would otherwise match every title.
pub fn same_industry(user_title: Option<&str>, target_title: Option<&str>) -> bool {
    let (Some(user), Some(target)) = (user_title, target_title) else {
        return false;
    };

    let user = user.trim().to_lowercase();
    let target = target.trim().to_lowercase();
    if user.is_empty() || target.is_empty() {
        return false;
    }

    user.contains(&target) || target.contains(&user)
}
