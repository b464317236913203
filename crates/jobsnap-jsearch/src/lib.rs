//! Typed client for the `JSearch` job-search API on `RapidAPI`.
//!
//! [`JsearchClient`] wraps `reqwest` with the credential headers `RapidAPI`
//! requires and deserializes the `{"status": "OK", "data": [...]}` envelope
//! into [`JobPosting`] values. Upstream fields are loosely typed: everything
//! beyond the envelope is optional, and callers decide what a usable posting
//! looks like.

mod client;
mod error;
mod types;

pub use client::JsearchClient;
pub use error::JsearchError;
pub use types::{JobPosting, SearchResponse};
