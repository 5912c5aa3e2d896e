//! Caller-side access to the content API.

mod http;

pub use http::{CONTENT_PATH, HttpContentClient};
