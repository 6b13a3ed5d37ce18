//! BirthDate value object for calendar days of birth.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A calendar day of birth, with no time or time zone component.
///
/// Callers are responsible for normalizing to the intended local calendar
/// day before constructing one; the engine only ever reads year, month,
/// and day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BirthDate(NaiveDate);

impl BirthDate {
    /// Creates a birth date from a calendar date.
    pub fn new(date: NaiveDate) -> Self {
        Self(date)
    }

    /// Parses an ISO-8601 date string (`YYYY-MM-DD`).
    ///
    /// Malformed input yields `None` rather than an error: an unreadable
    /// birthday is treated the same as an absent one.
    pub fn parse(value: &str) -> Option<Self> {
        NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d")
            .ok()
            .map(Self)
    }

    /// Returns the inner calendar date.
    pub fn as_date(&self) -> NaiveDate {
        self.0
    }

    /// Returns the calendar year.
    pub fn year(&self) -> i32 {
        self.0.year()
    }

    /// Returns the month (1-12).
    pub fn month(&self) -> u32 {
        self.0.month()
    }

    /// Returns the day of month (1-31).
    pub fn day(&self) -> u32 {
        self.0.day()
    }
}

impl From<NaiveDate> for BirthDate {
    fn from(date: NaiveDate) -> Self {
        Self(date)
    }
}

impl fmt::Display for BirthDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%d"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_accepts_iso_dates() {
        let date = BirthDate::parse("1990-05-15").unwrap();
        assert_eq!(date.year(), 1990);
        assert_eq!(date.month(), 5);
        assert_eq!(date.day(), 15);
    }

    #[test]
    fn parse_trims_whitespace() {
        assert!(BirthDate::parse(" 1990-05-15 ").is_some());
    }

    #[test]
    fn parse_rejects_malformed_input() {
        assert!(BirthDate::parse("").is_none());
        assert!(BirthDate::parse("not a date").is_none());
        assert!(BirthDate::parse("15/05/1990").is_none());
        assert!(BirthDate::parse("1990-13-01").is_none());
        assert!(BirthDate::parse("1990-02-30").is_none());
    }

    #[test]
    fn displays_as_iso() {
        let date = BirthDate::parse("1988-11-22").unwrap();
        assert_eq!(date.to_string(), "1988-11-22");
    }

    #[test]
    fn serializes_as_transparent_date() {
        let date = BirthDate::parse("1990-05-15").unwrap();
        let json = serde_json::to_string(&date).unwrap();
        assert_eq!(json, "\"1990-05-15\"");

        let back: BirthDate = serde_json::from_str(&json).unwrap();
        assert_eq!(back, date);
    }
}
