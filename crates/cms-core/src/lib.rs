//! # CMS Core
//!
//! The domain layer of the content submission service.
//! This crate contains pure business logic with zero infrastructure dependencies:
//! the record types, the validation and derivation rules, the ports that
//! infrastructure implements, and the submission handler built on them.

pub mod domain;
pub mod error;
pub mod ports;
pub mod service;

pub use error::{ErrorKind, SubmissionError};
pub use service::ContentService;
