//! CandidateProfile - the externally owned input record for scoring.

use serde::{Deserialize, Deserializer, Serialize};

use crate::domain::astrology::ZodiacSign;
use crate::domain::foundation::BirthDate;
use crate::domain::numerology::LifePathNumber;

/// The slice of a user profile the engine reads.
///
/// Profiles are owned by the caller; the engine never mutates one. Every
/// field is optional in practice: an absent or unreadable birthday simply
/// disables the zodiac and life path sub-scores, and empty skills or a
/// missing job title fall through to the weakest career bucket.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CandidateProfile {
    /// Calendar day of birth, if known.
    #[serde(default, deserialize_with = "lenient_birthday")]
    pub birthday: Option<BirthDate>,
    /// Free-text job title, if provided.
    #[serde(default)]
    pub job_title: Option<String>,
    /// Free-text skills; insertion order carries no meaning here.
    #[serde(default)]
    pub skills: Vec<String>,
}

impl CandidateProfile {
    /// Creates an empty profile.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the birthday.
    pub fn with_birthday(mut self, birthday: BirthDate) -> Self {
        self.birthday = Some(birthday);
        self
    }

    /// Sets the job title.
    pub fn with_job_title(mut self, job_title: impl Into<String>) -> Self {
        self.job_title = Some(job_title.into());
        self
    }

    /// Sets the skills list.
    pub fn with_skills(mut self, skills: Vec<String>) -> Self {
        self.skills = skills;
        self
    }

    /// Resolves the zodiac sign from the birthday, if one is set.
    pub fn zodiac_sign(&self) -> Option<ZodiacSign> {
        self.birthday.map(|b| ZodiacSign::from_date(b.as_date()))
    }

    /// Derives the life path number from the birthday, if one is set.
    pub fn life_path(&self) -> Option<LifePathNumber> {
        self.birthday.map(|b| LifePathNumber::from_date(b.as_date()))
    }
}

/// Deserializes a birthday, turning malformed date strings into `None`
/// instead of failing the whole profile.
fn lenient_birthday<'de, D>(deserializer: D) -> Result<Option<BirthDate>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(raw.as_deref().and_then(BirthDate::parse))
}
