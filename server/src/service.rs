//! The todo service: list, create, toggle, delete.
//!
//! # Design
//! The service owns no state. Each operation validates its input, makes a
//! single store interaction (toggle reads the current flag, then writes its
//! inverse) and returns the affected record so callers can reconcile a local
//! copy without re-fetching the list. Store errors pass through untouched as
//! [`ServiceError::StoreUnavailable`] and are never retried.

use std::sync::Arc;

use tracing::{info, instrument};

use crate::error::ServiceError;
use crate::model::Todo;
use crate::store::TodoStore;

#[derive(Clone)]
pub struct TodoService {
    store: Arc<dyn TodoStore>,
}

/// Trim `raw` and reject it if nothing is left.
pub fn normalize_title(raw: &str) -> Result<&str, ServiceError> {
    let title = raw.trim();
    if title.is_empty() {
        return Err(ServiceError::Validation("title must not be empty".to_string()));
    }
    Ok(title)
}

impl TodoService {
    pub fn new(store: Arc<dyn TodoStore>) -> Self {
        Self { store }
    }

    #[instrument(skip(self))]
    pub async fn list(&self) -> Result<Vec<Todo>, ServiceError> {
        Ok(self.store.find_all().await?)
    }

    #[instrument(skip(self))]
    pub async fn create(&self, title: &str) -> Result<Todo, ServiceError> {
        let title = normalize_title(title)?;
        let todo = self.store.insert(title).await?;
        info!(id = todo.id, "created todo");
        Ok(todo)
    }

    #[instrument(skip(self))]
    pub async fn toggle(&self, id: i64) -> Result<Todo, ServiceError> {
        let current = self
            .store
            .find_by_id(id)
            .await?
            .ok_or(ServiceError::NotFound { id })?;
        let todo = self
            .store
            .update_completed(id, !current.completed)
            .await?
            .ok_or(ServiceError::NotFound { id })?;
        info!(id, completed = todo.completed, "toggled todo");
        Ok(todo)
    }

    /// Deleting an id that does not exist is a `NotFound` error, not a no-op.
    #[instrument(skip(self))]
    pub async fn delete(&self, id: i64) -> Result<(), ServiceError> {
        if !self.store.delete_by_id(id).await? {
            return Err(ServiceError::NotFound { id });
        }
        info!(id, "deleted todo");
        Ok(())
    }

    pub async fn health(&self) -> Result<(), ServiceError> {
        Ok(self.store.ping().await?)
    }
}

#[cfg(test)]
mod tests {
    use async_trait::async_trait;
    use proptest::prelude::*;

    use super::*;
    use crate::store::{MemoryStore, StoreError};

    fn service() -> TodoService {
        TodoService::new(Arc::new(MemoryStore::new()))
    }

    /// Store that refuses every call.
    struct DownStore;

    #[async_trait]
    impl TodoStore for DownStore {
        async fn find_all(&self) -> Result<Vec<Todo>, StoreError> {
            Err(StoreError::Unavailable("connection refused".into()))
        }
        async fn insert(&self, _title: &str) -> Result<Todo, StoreError> {
            Err(StoreError::Unavailable("connection refused".into()))
        }
        async fn find_by_id(&self, _id: i64) -> Result<Option<Todo>, StoreError> {
            Err(StoreError::Unavailable("connection refused".into()))
        }
        async fn update_completed(
            &self,
            _id: i64,
            _completed: bool,
        ) -> Result<Option<Todo>, StoreError> {
            Err(StoreError::Unavailable("connection refused".into()))
        }
        async fn delete_by_id(&self, _id: i64) -> Result<bool, StoreError> {
            Err(StoreError::Unavailable("connection refused".into()))
        }
        async fn ping(&self) -> Result<(), StoreError> {
            Err(StoreError::Unavailable("connection refused".into()))
        }
    }

    #[tokio::test]
    async fn create_trims_and_lists_newest_first() {
        let svc = service();
        let first = svc.create("first").await.unwrap();
        let second = svc.create("  Buy milk  ").await.unwrap();
        assert_eq!(second.title, "Buy milk");
        assert!(!second.completed);

        let todos = svc.list().await.unwrap();
        assert_eq!(todos.len(), 2);
        assert_eq!(todos[0].id, second.id);
        assert_eq!(todos[1].id, first.id);
    }

    #[tokio::test]
    async fn blank_title_is_rejected_without_touching_the_store() {
        let svc = TodoService::new(Arc::new(DownStore));
        // DownStore would answer StoreUnavailable if it were reached.
        let err = svc.create(" \t\n").await.unwrap_err();
        assert!(matches!(err, ServiceError::Validation(_)));
    }

    #[tokio::test]
    async fn blank_title_leaves_the_list_unchanged() {
        let svc = service();
        svc.create("keep").await.unwrap();
        let before = svc.list().await.unwrap();
        assert!(svc.create("").await.is_err());
        assert_eq!(svc.list().await.unwrap(), before);
    }

    #[tokio::test]
    async fn toggle_twice_restores_completed() {
        let svc = service();
        let todo = svc.create("walk dog").await.unwrap();
        let once = svc.toggle(todo.id).await.unwrap();
        assert!(once.completed);
        assert_eq!(once.title, todo.title);
        let twice = svc.toggle(todo.id).await.unwrap();
        assert_eq!(twice, todo);
    }

    #[tokio::test]
    async fn toggle_missing_id_is_not_found_and_changes_nothing() {
        let svc = service();
        svc.create("a").await.unwrap();
        let before = svc.list().await.unwrap();
        let err = svc.toggle(999).await.unwrap_err();
        assert!(matches!(err, ServiceError::NotFound { id: 999 }));
        assert_eq!(svc.list().await.unwrap(), before);
    }

    #[tokio::test]
    async fn delete_removes_and_second_delete_is_not_found() {
        let svc = service();
        let todo = svc.create("gone").await.unwrap();
        svc.delete(todo.id).await.unwrap();
        assert!(svc.list().await.unwrap().iter().all(|t| t.id != todo.id));
        let err = svc.delete(todo.id).await.unwrap_err();
        assert!(matches!(err, ServiceError::NotFound { .. }));
    }

    #[tokio::test]
    async fn store_failures_surface_as_unavailable() {
        let svc = TodoService::new(Arc::new(DownStore));
        assert!(matches!(
            svc.list().await.unwrap_err(),
            ServiceError::StoreUnavailable(_)
        ));
        assert!(matches!(
            svc.toggle(1).await.unwrap_err(),
            ServiceError::StoreUnavailable(_)
        ));
        assert!(matches!(
            svc.delete(1).await.unwrap_err(),
            ServiceError::StoreUnavailable(_)
        ));
        assert!(svc.health().await.is_err());
    }

    proptest! {
        #[test]
        fn created_titles_show_up_uncompleted(title in "[ \t]*[a-zA-Z0-9][a-zA-Z0-9 .,!?-]{0,40}[ \t]*") {
            let rt = tokio::runtime::Builder::new_current_thread().build().unwrap();
            rt.block_on(async {
                let svc = service();
                let created = svc.create(&title).await.unwrap();
                let todos = svc.list().await.unwrap();
                let found = todos.iter().find(|t| t.id == created.id).unwrap();
                prop_assert_eq!(found.title.as_str(), title.trim());
                prop_assert!(!found.completed);
                Ok::<(), TestCaseError>(())
            })?;
        }

        #[test]
        fn whitespace_only_titles_fail_validation(title in "[ \t\r\n]{0,16}") {
            prop_assert!(matches!(normalize_title(&title), Err(ServiceError::Validation(_))));
        }
    }
}
