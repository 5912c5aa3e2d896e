use std::sync::atomic::{AtomicI64, Ordering};

use chrono::{DateTime, SubsecRound, Utc};

use cms_core::ports::Clock;

/// Wall clock truncated to milliseconds that never reports an instant
/// earlier than one it already returned, even if the system time steps back.
#[derive(Debug, Default)]
pub struct SystemClock {
    high_water_millis: AtomicI64,
}

impl SystemClock {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        let observed = Utc::now().trunc_subsecs(3);
        let millis = observed.timestamp_millis();
        let previous = self.high_water_millis.fetch_max(millis, Ordering::SeqCst);

        if previous > millis {
            tracing::debug!(previous, observed = millis, "System clock stepped back");
            DateTime::from_timestamp_millis(previous).unwrap_or(observed)
        } else {
            observed
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn readings_have_millisecond_precision() {
        let at = SystemClock::new().now();
        assert_eq!(at.timestamp_subsec_nanos() % 1_000_000, 0);
    }

    #[test]
    fn readings_never_go_backwards() {
        let clock = SystemClock::new();
        let mut last = clock.now();
        for _ in 0..1_000 {
            let next = clock.now();
            assert!(next >= last);
            last = next;
        }
    }

    #[test]
    fn high_water_mark_masks_a_stepped_back_clock() {
        let clock = SystemClock::new();
        let future = Utc::now().timestamp_millis() + 60_000;
        clock.high_water_millis.store(future, Ordering::SeqCst);

        assert_eq!(clock.now().timestamp_millis(), future);
    }
}
