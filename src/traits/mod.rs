//! Trait abstractions at the I/O seams.
//!
//! - [`HttpClient`] - HTTP GET/POST against the forum backend
//! - [`SessionStore`] - persisted login state

pub mod http;
pub mod session;

pub use http::{Headers, HttpClient, HttpError, Response};
pub use session::SessionStore;
