//! Content submission handler.

use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::{CandidateRecord, FinalizedRecord};
use crate::error::SubmissionError;
use crate::ports::{Clock, ContentRepository, ContentSubmitter, IdGenerator, Latency};

/// Validates candidates, derives read time and SEO fallbacks, then stamps
/// identity and creation time.
///
/// Stateless per call: the only shared pieces are the injected clock and id
/// source, each read once per accepted submission.
#[derive(Clone)]
pub struct ContentService {
    clock: Arc<dyn Clock>,
    ids: Arc<dyn IdGenerator>,
    latency: Arc<dyn Latency>,
    repository: Arc<dyn ContentRepository>,
}

impl ContentService {
    pub fn new(
        clock: Arc<dyn Clock>,
        ids: Arc<dyn IdGenerator>,
        latency: Arc<dyn Latency>,
        repository: Arc<dyn ContentRepository>,
    ) -> Self {
        Self {
            clock,
            ids,
            latency,
            repository,
        }
    }

    /// Synchronous part of a submission. Rejections return before the id
    /// source or the clock is touched.
    pub fn finalize(&self, candidate: CandidateRecord) -> Result<FinalizedRecord, SubmissionError> {
        let validated = candidate.validate()?;
        tracing::debug!(heading = %validated.heading(), "Candidate validated");

        let derived = validated.derive();
        tracing::debug!(
            read_time_minutes = derived.read_time_minutes(),
            "Derived fields resolved"
        );

        Ok(derived.finalize(self.ids.next_id(), self.clock.now()))
    }
}

#[async_trait]
impl ContentSubmitter for ContentService {
    async fn submit(&self, candidate: CandidateRecord) -> Result<FinalizedRecord, SubmissionError> {
        self.latency.pause().await;

        let record = match self.finalize(candidate) {
            Ok(record) => record,
            Err(e) => {
                tracing::warn!(error = %e, kind = ?e.kind(), "Submission rejected");
                return Err(e);
            }
        };

        let saved = self.repository.save(record).await.map_err(|e| {
            tracing::error!(error = %e, "Failed to hand off finalized record");
            SubmissionError::from(e)
        })?;

        tracing::info!(
            content_id = %saved.id,
            read_time_minutes = saved.read_time_minutes,
            "Content created"
        );

        Ok(saved)
    }
}
