//! HTTP server for the todo API.
//!
//! # Overview
//! Exposes the todo service over JSON/HTTP with axum. Requests are handled by
//! [`TodoService`], which validates input and applies exactly one mutation
//! against a [`TodoStore`] per call.
//!
//! # Design
//! - The router holds a cloneable [`TodoService`]; the service holds an
//!   `Arc<dyn TodoStore>`, so the backend (in-memory or SQLite) is chosen at
//!   startup without touching handlers.
//! - Mutations return the affected record so clients can reconcile their
//!   local list without re-fetching it.
//! - Every failure is a [`ServiceError`], rendered as a JSON error body with a
//!   stable `code`.

pub mod api;
pub mod config;
pub mod error;
pub mod model;
pub mod service;
pub mod store;

use std::{future::Future, sync::Arc};

use axum::{
    routing::{delete, get, post},
    Router,
};
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

pub use error::{ErrorBody, ErrorCode, ServiceError};
pub use model::{CreateTodo, Todo};
pub use service::TodoService;
pub use store::{MemoryStore, SqliteStore, StoreError, TodoStore};

/// Build the router for `service`.
pub fn app(service: TodoService) -> Router {
    Router::new()
        .route("/healthz", get(api::healthz))
        .route("/todos", get(api::list_todos).post(api::create_todo))
        .route("/todos/{id}", delete(api::delete_todo))
        .route("/todos/{id}/toggle", post(api::toggle_todo))
        .layer(TraceLayer::new_for_http())
        .with_state(service)
}

/// Router backed by a fresh, empty [`MemoryStore`].
pub fn memory_app() -> Router {
    app(TodoService::new(Arc::new(MemoryStore::new())))
}

pub async fn run(listener: TcpListener, service: TodoService) -> Result<(), std::io::Error> {
    axum::serve(listener, app(service)).await
}

/// Serve until `shutdown` resolves, then drain in-flight requests.
pub async fn serve<F>(
    listener: TcpListener,
    service: TodoService,
    shutdown: F,
) -> Result<(), std::io::Error>
where
    F: Future<Output = ()> + Send + 'static,
{
    axum::serve(listener, app(service))
        .with_graceful_shutdown(shutdown)
        .await
}
