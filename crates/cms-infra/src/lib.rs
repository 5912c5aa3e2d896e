//! # CMS Infrastructure
//!
//! Concrete implementations of the ports defined in `cms-core`.
//!
//! ## Feature Flags
//!
//! - `full` (default) - All features enabled
//! - `minimal` - No network client, in-process adapters only
//! - `http-client` - `HttpContentClient` via reqwest

pub mod effects;
pub mod repository;

#[cfg(feature = "http-client")]
pub mod client;

// Re-exports
pub use effects::{SequentialIdGenerator, SimulatedLatency, SystemClock, UuidIdGenerator};
pub use repository::NoopContentRepository;

#[cfg(feature = "http-client")]
pub use client::HttpContentClient;
