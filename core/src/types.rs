//! Wire DTOs for the todo API.
//!
//! # Design
//! These mirror the server's JSON schema but are defined independently so the
//! client never links axum or sqlx. The integration test runs the real server
//! and catches schema drift between the two crates.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single todo item as returned by the API.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Todo {
    pub id: i64,
    pub title: String,
    pub completed: bool,
    pub created_at: DateTime<Utc>,
}

/// Request payload for creating a todo. The server trims `title` and rejects
/// it if nothing is left.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateTodo {
    pub title: String,
}

/// Error body the server attaches to every non-2xx response it produces.
/// `code` is kept as a string so unknown codes still parse.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ErrorBody {
    pub code: String,
    pub message: String,
}
