//! Foundation module - Shared domain primitives.
//!
//! Contains the value objects and error types that form the vocabulary
//! of the affinity engine.

mod birth_date;
mod errors;
mod score;

pub use birth_date::BirthDate;
pub use errors::ValidationError;
pub use score::Score;
