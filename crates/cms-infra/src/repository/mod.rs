//! Content repository implementations.

mod memory;

pub use memory::NoopContentRepository;
