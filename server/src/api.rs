//! Axum handlers. Each maps one route onto one [`TodoService`] call.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use crate::error::ServiceError;
use crate::model::{CreateTodo, Todo};
use crate::service::TodoService;

pub async fn healthz(State(service): State<TodoService>) -> Result<&'static str, ServiceError> {
    service.health().await?;
    Ok("ok")
}

pub async fn list_todos(
    State(service): State<TodoService>,
) -> Result<Json<Vec<Todo>>, ServiceError> {
    Ok(Json(service.list().await?))
}

pub async fn create_todo(
    State(service): State<TodoService>,
    Json(input): Json<CreateTodo>,
) -> Result<(StatusCode, Json<Todo>), ServiceError> {
    let todo = service.create(&input.title).await?;
    Ok((StatusCode::CREATED, Json(todo)))
}

pub async fn toggle_todo(
    State(service): State<TodoService>,
    Path(id): Path<i64>,
) -> Result<Json<Todo>, ServiceError> {
    Ok(Json(service.toggle(id).await?))
}

pub async fn delete_todo(
    State(service): State<TodoService>,
    Path(id): Path<i64>,
) -> Result<StatusCode, ServiceError> {
    service.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
