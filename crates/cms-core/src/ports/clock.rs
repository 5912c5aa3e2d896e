//! Ambient effects made explicit: wall-clock time and identifier minting.

use chrono::{DateTime, Utc};

/// Source of "now" for server-owned timestamps.
pub trait Clock: Send + Sync {
    /// Current instant, at millisecond precision.
    fn now(&self) -> DateTime<Utc>;
}

/// Source of opaque record identifiers.
pub trait IdGenerator: Send + Sync {
    /// A fresh identifier, never returned before by this generator.
    fn next_id(&self) -> String;
}
