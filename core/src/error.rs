//! Client-side error taxonomy.
//!
//! # Design
//! The server's `validation`, `not_found` and `store_unavailable` codes map to
//! dedicated variants so the presentation shell can word its notice without
//! string matching. Any other non-success response keeps its raw status and
//! body in `Http`.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    /// The server rejected the input (for example a blank title).
    #[error("invalid input: {0}")]
    Validation(String),

    /// The referenced todo does not exist.
    #[error("todo not found")]
    NotFound,

    /// The server could not reach its store.
    #[error("store unavailable: {0}")]
    StoreUnavailable(String),

    /// Any other unexpected status.
    #[error("HTTP {status}: {body}")]
    Http { status: u16, body: String },

    #[error("deserialization failed: {0}")]
    Deserialization(String),

    #[error("serialization failed: {0}")]
    Serialization(String),
}
