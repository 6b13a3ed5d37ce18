//! Domain layer containing the scoring logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (value objects, errors)
//! - `profile` - The externally owned candidate profile record
//! - `astrology` - Zodiac sign resolution and affinity tables
//! - `numerology` - Life path derivation and affinity tables
//! - `compatibility` - Pairwise compatibility analysis

pub mod astrology;
pub mod compatibility;
pub mod foundation;
pub mod numerology;
pub mod profile;
