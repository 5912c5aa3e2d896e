//! System implementations of the clock, id and latency ports.

mod clock;
mod ids;
mod latency;

pub use clock::SystemClock;
pub use ids::{SequentialIdGenerator, UuidIdGenerator};
pub use latency::SimulatedLatency;
