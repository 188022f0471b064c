//! Service error taxonomy and its HTTP rendering.
//!
//! `Validation` is raised locally before any store call. `NotFound` means the
//! referenced id is absent. Every other store failure is opaque and surfaces
//! as `StoreUnavailable`; nothing is retried.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::error;

use crate::store::StoreError;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("{0}")]
    Validation(String),

    #[error("todo {id} not found")]
    NotFound { id: i64 },

    #[error("store unavailable: {0}")]
    StoreUnavailable(#[from] StoreError),
}

/// Stable machine-readable error code carried in every error body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCode {
    Validation,
    NotFound,
    StoreUnavailable,
}

/// JSON body returned with every non-2xx response produced by the service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub code: ErrorCode,
    pub message: String,
}

impl ServiceError {
    pub fn code(&self) -> ErrorCode {
        match self {
            ServiceError::Validation(_) => ErrorCode::Validation,
            ServiceError::NotFound { .. } => ErrorCode::NotFound,
            ServiceError::StoreUnavailable(_) => ErrorCode::StoreUnavailable,
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            ServiceError::Validation(_) => StatusCode::BAD_REQUEST,
            ServiceError::NotFound { .. } => StatusCode::NOT_FOUND,
            ServiceError::StoreUnavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
        }
    }
}

impl IntoResponse for ServiceError {
    fn into_response(self) -> Response {
        if let ServiceError::StoreUnavailable(source) = &self {
            error!(error = %source, "store call failed");
        }
        let body = ErrorBody {
            code: self.code(),
            message: self.to_string(),
        };
        (self.status(), Json(body)).into_response()
    }
}
