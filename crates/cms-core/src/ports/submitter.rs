//! The "submit candidate record" boundary consumed by form UIs.

use async_trait::async_trait;

use crate::domain::{CandidateRecord, FinalizedRecord};
use crate::error::SubmissionError;

/// Anything that turns a candidate into a finalized record: the in-process
/// handler, or a client talking to it over the network.
///
/// Each call resolves to exactly one success or one failure; implementations
/// never retry on their own.
#[async_trait]
pub trait ContentSubmitter: Send + Sync {
    async fn submit(&self, candidate: CandidateRecord) -> Result<FinalizedRecord, SubmissionError>;
}
