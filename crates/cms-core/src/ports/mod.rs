//! Ports - trait definitions for external dependencies.
//! These are the "interfaces" that infrastructure must implement.

mod clock;
mod latency;
mod repository;
mod submitter;

pub use clock::{Clock, IdGenerator};
pub use latency::Latency;
pub use repository::ContentRepository;
pub use submitter::ContentSubmitter;
