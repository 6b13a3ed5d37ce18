//! Life path number reduction from birth dates.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::foundation::ValidationError;

/// Master numbers preserved during per-component reduction.
const COMPONENT_MASTERS: &[u32] = &[11, 22];

/// Master numbers preserved during the final reduction of the total.
const TOTAL_MASTERS: &[u32] = &[11, 22, 33];

/// A numerology life path number: 1-9 or one of the master numbers 11, 22, 33.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LifePathNumber(u8);

impl LifePathNumber {
    /// Every value a life path number can take.
    pub const VALID: [u8; 12] = [1, 2, 3, 4, 5, 6, 7, 8, 9, 11, 22, 33];

    /// Derives the life path number for a birth date.
    ///
    /// Year, month, and day are each reduced to a single digit by repeated
    /// digit-summing, stopping early at the master numbers 11 and 22. The
    /// three reduced values are then summed and the total reduced the same
    /// way, additionally stopping at 33. Reducing components first and the
    /// total second is a behavioral contract: changing the order changes
    /// results for dates like 1988-11-22.
    pub fn from_date(date: NaiveDate) -> Self {
        let year = reduce(date.year().unsigned_abs(), COMPONENT_MASTERS);
        let month = reduce(date.month(), COMPONENT_MASTERS);
        let day = reduce(date.day(), COMPONENT_MASTERS);

        let total = reduce(year + month + day, TOTAL_MASTERS);
        Self(total as u8)
    }

    /// Creates a life path number from a raw value, rejecting anything
    /// outside 1-9/11/22/33.
    pub fn try_new(value: u8) -> Result<Self, ValidationError> {
        if Self::VALID.contains(&value) {
            Ok(Self(value))
        } else {
            Err(ValidationError::invalid_format(
                "life_path",
                format!("{value} is not a single digit or master number"),
            ))
        }
    }

    /// Returns the numeric value.
    pub fn value(&self) -> u8 {
        self.0
    }

    /// Returns true for the master numbers 11, 22, and 33.
    pub fn is_master(&self) -> bool {
        matches!(self.0, 11 | 22 | 33)
    }

    /// Returns the life path numbers traditionally read as complementary
    /// to this one.
    ///
    /// Like the zodiac table, this is directional and consulted in the
    /// user-to-target direction only.
    pub fn compatible_numbers(&self) -> &'static [u8] {
        match self.0 {
            1 => &[3, 5, 9],
            2 => &[4, 6, 8],
            3 => &[1, 5, 7],
            4 => &[2, 6, 8],
            5 => &[1, 3, 7],
            6 => &[2, 4, 9],
            7 => &[3, 5, 11],
            8 => &[2, 4, 22],
            9 => &[1, 3, 6],
            11 => &[2, 22, 33],
            22 => &[4, 8, 11],
            _ => &[6, 9, 11],
        }
    }

    /// Returns true if `other` is in this number's complementary set.
    pub fn is_compatible_with(&self, other: LifePathNumber) -> bool {
        self.compatible_numbers().contains(&other.0)
    }
}

impl fmt::Display for LifePathNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Sums the base-10 digits of a value once.
fn sum_digits(mut value: u32) -> u32 {
    let mut sum = 0;
    while value > 0 {
        sum += value % 10;
        value /= 10;
    }
    sum
}

/// Repeatedly digit-sums until a single digit remains, stopping early when
/// the running value is one of `masters`.
fn reduce(mut value: u32, masters: &[u32]) -> u32 {
    while value > 9 && !masters.contains(&value) {
        value = sum_digits(value);
    }
    value
}
