//! Affinity Engine - Compatibility scoring for candidate profiles.
//!
//! This crate blends zodiac affinity, numerology life paths, and
//! career-overlap signals into a single 0-100 compatibility score with
//! human-readable insights. It is a pure library: no I/O, no persistence,
//! no shared state.

pub mod domain;
