//! Domain entities - content records and the rules that shape them.

mod content;
pub mod rules;
pub mod timestamp;

pub use content::{
    CandidateRecord, DerivedContent, FinalizedRecord, SERVER_OWNED_KEYS, ValidatedCandidate,
};
