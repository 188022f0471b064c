use std::str::FromStr;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{
    sqlite::{SqliteConnectOptions, SqlitePoolOptions, SqliteRow},
    Pool, Row, Sqlite,
};
use tracing::debug;

use super::{StoreError, TodoStore};
use crate::model::Todo;

const COLUMNS: &str = "id, title, completed, created_at";

/// SQLite-backed store. Schema lives in `server/migrations` and is applied on
/// connect.
#[derive(Clone)]
pub struct SqliteStore {
    pool: Pool<Sqlite>,
}

impl SqliteStore {
    pub async fn connect(database_url: &str) -> Result<Self, StoreError> {
        let options = SqliteConnectOptions::from_str(database_url)?.create_if_missing(true);

        // Each connection to `:memory:` is its own database.
        let pool_options = if database_url.contains(":memory:") {
            SqlitePoolOptions::new()
                .max_connections(1)
                .idle_timeout(None)
                .max_lifetime(None)
        } else {
            SqlitePoolOptions::new().max_connections(5)
        };
        let pool = pool_options.connect_with(options).await?;

        sqlx::migrate!("./migrations").run(&pool).await?;
        debug!(%database_url, "sqlite store ready");
        Ok(Self { pool })
    }

    pub fn pool(&self) -> &Pool<Sqlite> {
        &self.pool
    }
}

fn todo_from_row(row: &SqliteRow) -> Result<Todo, sqlx::Error> {
    Ok(Todo {
        id: row.try_get("id")?,
        title: row.try_get("title")?,
        completed: row.try_get("completed")?,
        created_at: row.try_get::<DateTime<Utc>, _>("created_at")?,
    })
}

#[async_trait]
impl TodoStore for SqliteStore {
    async fn find_all(&self) -> Result<Vec<Todo>, StoreError> {
        let rows = sqlx::query(&format!(
            "SELECT {COLUMNS} FROM todos ORDER BY created_at DESC, id DESC"
        ))
        .fetch_all(&self.pool)
        .await?;
        let todos = rows.iter().map(todo_from_row).collect::<Result<Vec<_>, _>>()?;
        Ok(todos)
    }

    async fn insert(&self, title: &str) -> Result<Todo, StoreError> {
        let row = sqlx::query(&format!(
            "INSERT INTO todos (title, completed, created_at) VALUES (?, 0, ?) RETURNING {COLUMNS}"
        ))
        .bind(title)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await?;
        Ok(todo_from_row(&row)?)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Todo>, StoreError> {
        let row = sqlx::query(&format!("SELECT {COLUMNS} FROM todos WHERE id = ?"))
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row.as_ref().map(todo_from_row).transpose()?)
    }

    async fn update_completed(
        &self,
        id: i64,
        completed: bool,
    ) -> Result<Option<Todo>, StoreError> {
        let row = sqlx::query(&format!(
            "UPDATE todos SET completed = ? WHERE id = ? RETURNING {COLUMNS}"
        ))
        .bind(completed)
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row.as_ref().map(todo_from_row).transpose()?)
    }

    async fn delete_by_id(&self, id: i64) -> Result<bool, StoreError> {
        let result = sqlx::query("DELETE FROM todos WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    async fn ping(&self) -> Result<(), StoreError> {
        let _: i64 = sqlx::query_scalar("SELECT 1").fetch_one(&self.pool).await?;
        Ok(())
    }
}
