use std::collections::HashMap;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;

use super::{StoreError, TodoStore};
use crate::model::Todo;

#[derive(Default)]
struct Inner {
    last_id: i64,
    todos: HashMap<i64, Todo>,
}

/// Process-local store. Ids are never reused, even after delete.
#[derive(Default)]
pub struct MemoryStore {
    inner: RwLock<Inner>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl TodoStore for MemoryStore {
    async fn find_all(&self) -> Result<Vec<Todo>, StoreError> {
        let inner = self.inner.read().await;
        let mut todos: Vec<Todo> = inner.todos.values().cloned().collect();
        todos.sort_by(|a, b| (b.created_at, b.id).cmp(&(a.created_at, a.id)));
        Ok(todos)
    }

    async fn insert(&self, title: &str) -> Result<Todo, StoreError> {
        let mut inner = self.inner.write().await;
        inner.last_id += 1;
        let todo = Todo {
            id: inner.last_id,
            title: title.to_string(),
            completed: false,
            created_at: Utc::now(),
        };
        inner.todos.insert(todo.id, todo.clone());
        Ok(todo)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Todo>, StoreError> {
        Ok(self.inner.read().await.todos.get(&id).cloned())
    }

    async fn update_completed(
        &self,
        id: i64,
        completed: bool,
    ) -> Result<Option<Todo>, StoreError> {
        let mut inner = self.inner.write().await;
        Ok(inner.todos.get_mut(&id).map(|todo| {
            todo.completed = completed;
            todo.clone()
        }))
    }

    async fn delete_by_id(&self, id: i64) -> Result<bool, StoreError> {
        Ok(self.inner.write().await.todos.remove(&id).is_some())
    }

    async fn ping(&self) -> Result<(), StoreError> {
        Ok(())
    }
}
