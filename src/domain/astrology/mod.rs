//! Astrology module - Zodiac sign resolution and affinity tables.

mod sign;

pub use sign::ZodiacSign;
