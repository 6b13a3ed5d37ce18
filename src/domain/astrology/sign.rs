//! Zodiac sign resolution from calendar dates, plus the fixed affinity tables.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;

/// The twelve zodiac signs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ZodiacSign {
    Aries,
    Taurus,
    Gemini,
    Cancer,
    Leo,
    Virgo,
    Libra,
    Scorpio,
    Sagittarius,
    Capricorn,
    Aquarius,
    Pisces,
}

/// Sign date ranges as (sign, (start month, start day), (end month, end day)),
/// inclusive on both ends. Capricorn is absent: it spans the year boundary and
/// is special-cased in [`ZodiacSign::from_month_day`].
const SIGN_RANGES: &[(ZodiacSign, (u32, u32), (u32, u32))] = &[
    (ZodiacSign::Aquarius, (1, 20), (2, 18)),
    (ZodiacSign::Pisces, (2, 19), (3, 20)),
    (ZodiacSign::Aries, (3, 21), (4, 19)),
    (ZodiacSign::Taurus, (4, 20), (5, 20)),
    (ZodiacSign::Gemini, (5, 21), (6, 20)),
    (ZodiacSign::Cancer, (6, 21), (7, 22)),
    (ZodiacSign::Leo, (7, 23), (8, 22)),
    (ZodiacSign::Virgo, (8, 23), (9, 22)),
    (ZodiacSign::Libra, (9, 23), (10, 22)),
    (ZodiacSign::Scorpio, (10, 23), (11, 21)),
    (ZodiacSign::Sagittarius, (11, 22), (12, 21)),
];

impl ZodiacSign {
    /// All twelve signs in calendar order starting from Aries.
    pub const ALL: [ZodiacSign; 12] = [
        ZodiacSign::Aries,
        ZodiacSign::Taurus,
        ZodiacSign::Gemini,
        ZodiacSign::Cancer,
        ZodiacSign::Leo,
        ZodiacSign::Virgo,
        ZodiacSign::Libra,
        ZodiacSign::Scorpio,
        ZodiacSign::Sagittarius,
        ZodiacSign::Capricorn,
        ZodiacSign::Aquarius,
        ZodiacSign::Pisces,
    ];

    /// Resolves the sign for a calendar date. Only month and day matter;
    /// the year is ignored.
    pub fn from_date(date: NaiveDate) -> Self {
        Self::from_month_day(date.month(), date.day())
    }

    /// Resolves the sign for a (month, day) pair.
    ///
    /// Every day of a real calendar falls in exactly one range, so this is
    /// total for input produced from a valid date.
    pub fn from_month_day(month: u32, day: u32) -> Self {
        // Capricorn wraps the year end, so it must be checked before the
        // generic range scan.
        if (month == 12 && day >= 22) || (month == 1 && day <= 19) {
            return ZodiacSign::Capricorn;
        }

        SIGN_RANGES
            .iter()
            .find(|(_, (start_month, start_day), (end_month, end_day))| {
                (month == *start_month && day >= *start_day)
                    || (month == *end_month && day <= *end_day)
            })
            .map(|(sign, _, _)| *sign)
            .unwrap_or(ZodiacSign::Capricorn)
    }

    /// Returns the display label for this sign.
    pub fn label(&self) -> &'static str {
        match self {
            ZodiacSign::Aries => "Aries",
            ZodiacSign::Taurus => "Taurus",
            ZodiacSign::Gemini => "Gemini",
            ZodiacSign::Cancer => "Cancer",
            ZodiacSign::Leo => "Leo",
            ZodiacSign::Virgo => "Virgo",
            ZodiacSign::Libra => "Libra",
            ZodiacSign::Scorpio => "Scorpio",
            ZodiacSign::Sagittarius => "Sagittarius",
            ZodiacSign::Capricorn => "Capricorn",
            ZodiacSign::Aquarius => "Aquarius",
            ZodiacSign::Pisces => "Pisces",
        }
    }

    /// Returns the three signs traditionally read as harmonious with this one.
    ///
    /// The table is directional: `a.compatible_signs()` naming `b` does not
    /// imply `b.compatible_signs()` names `a`. The analyzer checks it in the
    /// user-to-target direction only.
    pub fn compatible_signs(&self) -> [ZodiacSign; 3] {
        match self {
            ZodiacSign::Aries => [ZodiacSign::Leo, ZodiacSign::Sagittarius, ZodiacSign::Gemini],
            ZodiacSign::Taurus => [ZodiacSign::Virgo, ZodiacSign::Capricorn, ZodiacSign::Cancer],
            ZodiacSign::Gemini => [ZodiacSign::Libra, ZodiacSign::Aquarius, ZodiacSign::Aries],
            ZodiacSign::Cancer => [ZodiacSign::Scorpio, ZodiacSign::Pisces, ZodiacSign::Taurus],
            ZodiacSign::Leo => [ZodiacSign::Aries, ZodiacSign::Sagittarius, ZodiacSign::Libra],
            ZodiacSign::Virgo => [ZodiacSign::Taurus, ZodiacSign::Capricorn, ZodiacSign::Scorpio],
            ZodiacSign::Libra => [ZodiacSign::Gemini, ZodiacSign::Aquarius, ZodiacSign::Leo],
            ZodiacSign::Scorpio => [ZodiacSign::Cancer, ZodiacSign::Pisces, ZodiacSign::Virgo],
            ZodiacSign::Sagittarius => {
                [ZodiacSign::Aries, ZodiacSign::Leo, ZodiacSign::Aquarius]
            }
            ZodiacSign::Capricorn => [ZodiacSign::Taurus, ZodiacSign::Virgo, ZodiacSign::Pisces],
            ZodiacSign::Aquarius => {
                [ZodiacSign::Gemini, ZodiacSign::Libra, ZodiacSign::Sagittarius]
            }
            ZodiacSign::Pisces => [ZodiacSign::Cancer, ZodiacSign::Scorpio, ZodiacSign::Capricorn],
        }
    }

    /// Returns true if `other` is in this sign's compatible set.
    pub fn is_compatible_with(&self, other: ZodiacSign) -> bool {
        self.compatible_signs().contains(&other)
    }

    /// Returns the sign directly opposite this one on the wheel.
    ///
    /// The six pairs are fixed and the mapping is involutive.
    pub fn opposite(&self) -> ZodiacSign {
        match self {
            ZodiacSign::Aries => ZodiacSign::Libra,
            ZodiacSign::Taurus => ZodiacSign::Scorpio,
            ZodiacSign::Gemini => ZodiacSign::Sagittarius,
            ZodiacSign::Cancer => ZodiacSign::Capricorn,
            ZodiacSign::Leo => ZodiacSign::Aquarius,
            ZodiacSign::Virgo => ZodiacSign::Pisces,
            ZodiacSign::Libra => ZodiacSign::Aries,
            ZodiacSign::Scorpio => ZodiacSign::Taurus,
            ZodiacSign::Sagittarius => ZodiacSign::Gemini,
            ZodiacSign::Capricorn => ZodiacSign::Cancer,
            ZodiacSign::Aquarius => ZodiacSign::Leo,
            ZodiacSign::Pisces => ZodiacSign::Virgo,
        }
    }
}

impl fmt::Display for ZodiacSign {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    #[test]
    fn resolves_capricorn_across_year_boundary() {
        assert_eq!(ZodiacSign::from_date(date(1990, 12, 22)), ZodiacSign::Capricorn);
        assert_eq!(ZodiacSign::from_date(date(1990, 12, 31)), ZodiacSign::Capricorn);
        assert_eq!(ZodiacSign::from_date(date(1991, 1, 1)), ZodiacSign::Capricorn);
        assert_eq!(ZodiacSign::from_date(date(1991, 1, 19)), ZodiacSign::Capricorn);
    }

    #[test]
    fn resolves_boundaries_between_signs() {
        assert_eq!(ZodiacSign::from_date(date(1990, 1, 20)), ZodiacSign::Aquarius);
        assert_eq!(ZodiacSign::from_date(date(1990, 3, 20)), ZodiacSign::Pisces);
        assert_eq!(ZodiacSign::from_date(date(1990, 3, 21)), ZodiacSign::Aries);
        assert_eq!(ZodiacSign::from_date(date(1990, 12, 21)), ZodiacSign::Sagittarius);
    }

    #[test]
    fn resolves_mid_range_dates() {
        assert_eq!(ZodiacSign::from_date(date(1990, 5, 15)), ZodiacSign::Taurus);
        assert_eq!(ZodiacSign::from_date(date(1988, 11, 22)), ZodiacSign::Sagittarius);
        assert_eq!(ZodiacSign::from_date(date(2000, 8, 1)), ZodiacSign::Leo);
    }

    #[test]
    fn ignores_the_year() {
        assert_eq!(
            ZodiacSign::from_date(date(1950, 7, 4)),
            ZodiacSign::from_date(date(2020, 7, 4))
        );
    }

    #[test]
    fn every_day_of_the_year_resolves() {
        // 2000 is a leap year, so Feb 29 is covered too.
        let mut counts = std::collections::HashMap::new();
        let mut day = date(2000, 1, 1);
        while day.year() == 2000 {
            *counts.entry(ZodiacSign::from_date(day)).or_insert(0u32) += 1;
            day = day.succ_opt().unwrap();
        }

        assert_eq!(counts.len(), 12);
        for sign in ZodiacSign::ALL {
            assert!(counts[&sign] >= 28, "{sign} covers too few days");
        }
    }

    #[test]
    fn compatible_sets_have_three_distinct_other_signs() {
        for sign in ZodiacSign::ALL {
            let set = sign.compatible_signs();
            assert!(!set.contains(&sign), "{sign} lists itself as compatible");
            assert_ne!(set[0], set[1]);
            assert_ne!(set[1], set[2]);
            assert_ne!(set[0], set[2]);
        }
    }

    #[test]
    fn is_compatible_with_checks_own_set_only() {
        assert!(ZodiacSign::Virgo.is_compatible_with(ZodiacSign::Scorpio));
        assert!(!ZodiacSign::Scorpio.is_compatible_with(ZodiacSign::Sagittarius));
        assert!(!ZodiacSign::Aries.is_compatible_with(ZodiacSign::Aries));
    }

    #[test]
    fn opposites_are_involutive() {
        for sign in ZodiacSign::ALL {
            assert_eq!(sign.opposite().opposite(), sign);
            assert_ne!(sign.opposite(), sign);
        }
    }

    #[test]
    fn labels_and_display_agree() {
        assert_eq!(ZodiacSign::Aries.to_string(), "Aries");
        assert_eq!(ZodiacSign::Pisces.label(), "Pisces");
    }

    #[test]
    fn serializes_as_snake_case() {
        let json = serde_json::to_string(&ZodiacSign::Sagittarius).unwrap();
        assert_eq!(json, "\"sagittarius\"");

        let back: ZodiacSign = serde_json::from_str("\"aries\"").unwrap();
        assert_eq!(back, ZodiacSign::Aries);
    }
}
