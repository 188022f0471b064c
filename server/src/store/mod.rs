//! Persistence boundary for todo records.
//!
//! # Design
//! [`TodoStore`] is the only owner of record lifetime. Absence is reported as
//! `None` / `false` rather than an error so the service decides how to surface
//! it; `Err` is reserved for the store itself being unreachable.

mod memory;
mod sqlite;

use std::{fmt, sync::Arc};

use async_trait::async_trait;
use thiserror::Error;

use crate::model::Todo;

pub use memory::MemoryStore;
pub use sqlite::SqliteStore;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("migration failed: {0}")]
    Migrate(#[from] sqlx::migrate::MigrateError),

    #[error("{0}")]
    Unavailable(String),
}

#[async_trait]
pub trait TodoStore: Send + Sync + 'static {
    /// All records, newest `created_at` first; ties broken by descending id.
    async fn find_all(&self) -> Result<Vec<Todo>, StoreError>;

    /// Persist a new record with `completed = false`.
    async fn insert(&self, title: &str) -> Result<Todo, StoreError>;

    async fn find_by_id(&self, id: i64) -> Result<Option<Todo>, StoreError>;

    /// Set `completed` on one record. `None` if `id` does not exist.
    async fn update_completed(&self, id: i64, completed: bool)
        -> Result<Option<Todo>, StoreError>;

    /// Remove one record. `false` if `id` did not exist.
    async fn delete_by_id(&self, id: i64) -> Result<bool, StoreError>;

    async fn ping(&self) -> Result<(), StoreError>;
}

/// Which backend to open at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreBackend {
    Memory,
    Sqlite(String),
}

impl fmt::Display for StoreBackend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreBackend::Memory => write!(f, "memory"),
            StoreBackend::Sqlite(url) => write!(f, "{url}"),
        }
    }
}

pub async fn open(backend: &StoreBackend) -> Result<Arc<dyn TodoStore>, StoreError> {
    match backend {
        StoreBackend::Memory => Ok(Arc::new(MemoryStore::new())),
        StoreBackend::Sqlite(url) => Ok(Arc::new(SqliteStore::connect(url).await?)),
    }
}
