//! Application state - shared across all handlers.

use std::sync::Arc;

use cms_core::ContentService;
use cms_core::ports::{Clock, ContentSubmitter, IdGenerator};
use cms_infra::{
    NoopContentRepository, SequentialIdGenerator, SimulatedLatency, SystemClock, UuidIdGenerator,
};

use crate::config::{AppConfig, IdStrategy};

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub content: Arc<dyn ContentSubmitter>,
    pub clock: Arc<dyn Clock>,
}

impl AppState {
    /// Build the application state with appropriate implementations.
    pub fn new(config: &AppConfig) -> Self {
        let clock: Arc<dyn Clock> = Arc::new(SystemClock::new());

        let ids: Arc<dyn IdGenerator> = match config.id_strategy {
            IdStrategy::Uuid => Arc::new(UuidIdGenerator),
            IdStrategy::Sequential => Arc::new(SequentialIdGenerator::new("content")),
        };

        tracing::warn!("No datastore configured. Finalized records are not persisted.");

        let content = ContentService::new(
            clock.clone(),
            ids,
            Arc::new(SimulatedLatency::new(config.submit_latency)),
            Arc::new(NoopContentRepository),
        );

        tracing::info!(
            latency_ms = config.submit_latency.as_millis() as u64,
            id_strategy = ?config.id_strategy,
            "Application state initialized"
        );

        Self {
            content: Arc::new(content),
            clock,
        }
    }
}
