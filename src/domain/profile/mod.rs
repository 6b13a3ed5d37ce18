//! Profile module - Input records supplied by the caller.

mod candidate;

pub use candidate::CandidateProfile;
