use async_trait::async_trait;

use crate::domain::FinalizedRecord;
use crate::error::RepoError;

/// Destination for finalized records.
#[async_trait]
pub trait ContentRepository: Send + Sync {
    /// Hand off a freshly created record and return what was stored.
    async fn save(&self, record: FinalizedRecord) -> Result<FinalizedRecord, RepoError>;
}
