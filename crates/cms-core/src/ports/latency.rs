//! Simulated network latency port.

use async_trait::async_trait;

/// Suspension point awaited once per submission before any work is done.
#[async_trait]
pub trait Latency: Send + Sync {
    async fn pause(&self);
}
