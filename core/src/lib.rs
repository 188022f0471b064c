//! Client core for the todo service.
//!
//! # Overview
//! Builds `HttpRequest` values and parses `HttpResponse` values without
//! touching the network (host-does-IO). On top of that, [`TodoView`] keeps a
//! session's local copy of the list in sync using only what each confirmed
//! mutation returns, so the list is never re-fetched after a change.
//!
//! # Design
//! - `TodoClient` is stateless; it holds only `base_url`.
//! - Each operation is split into `build_*` and `parse_*` so the I/O boundary
//!   is explicit.
//! - `TodoList` is an owned value; derived views are recomputed on demand.
//! - DTOs are defined independently from the server crate; the integration
//!   test catches schema drift.

pub mod client;
pub mod error;
pub mod http;
pub mod list;
pub mod types;
pub mod view;

pub use client::TodoClient;
pub use error::ApiError;
pub use http::{HttpMethod, HttpRequest, HttpResponse};
pub use list::{Counts, TodoList};
pub use types::{CreateTodo, ErrorBody, Todo};
pub use view::{Action, Notice, TodoView};
