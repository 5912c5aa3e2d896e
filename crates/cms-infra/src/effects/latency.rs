use std::time::Duration;

use async_trait::async_trait;

use cms_core::ports::Latency;

/// Fixed delay standing in for a network round trip.
#[derive(Debug, Clone, Copy)]
pub struct SimulatedLatency {
    delay: Duration,
}

impl SimulatedLatency {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }

    pub fn none() -> Self {
        Self::new(Duration::ZERO)
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }
}

#[async_trait]
impl Latency for SimulatedLatency {
    async fn pause(&self) {
        if self.delay.is_zero() {
            return;
        }
        tokio::time::sleep(self.delay).await;
    }
}
