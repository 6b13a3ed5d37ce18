//! Numerology module - Life path derivation and affinity tables.

mod life_path;

pub use life_path::LifePathNumber;
