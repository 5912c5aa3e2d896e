//! Repository used when no datastore is configured.

use async_trait::async_trait;

use cms_core::domain::FinalizedRecord;
use cms_core::error::RepoError;
use cms_core::ports::ContentRepository;

/// Accepts every record and keeps none of them.
///
/// The handler's contract is to return the finalized record; nothing is
/// read back, so there is nothing to store.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopContentRepository;

#[async_trait]
impl ContentRepository for NoopContentRepository {
    async fn save(&self, record: FinalizedRecord) -> Result<FinalizedRecord, RepoError> {
        tracing::debug!(content_id = %record.id, "Datastore not configured - record not persisted");
        Ok(record)
    }
}
