use crate::error::ShelfError;
use axum::extract::multipart::{MultipartError, MultipartRejection};
use axum::extract::rejection::QueryRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;
use tracing::{error, warn};

/// Everything a handler can fail with. Rendered as `{"error": "..."}`.
#[derive(Error, Debug)]
pub enum ApiError {
    #[error(transparent)]
    Shelf(#[from] ShelfError),

    #[error("Invalid upload: {0}")]
    Multipart(#[from] MultipartError),

    #[error("Invalid upload: {0}")]
    MultipartRejected(#[from] MultipartRejection),

    #[error("Invalid query: {0}")]
    Query(#[from] QueryRejection),

    #[error("Background task failed: {0}")]
    Join(#[from] tokio::task::JoinError),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Shelf(err) => match err {
                ShelfError::EmptyName | ShelfError::Validation(_) => StatusCode::BAD_REQUEST,
                ShelfError::NotFound(_) => StatusCode::NOT_FOUND,
                ShelfError::AlreadyExists(_) | ShelfError::FileExists(_) => StatusCode::CONFLICT,
                ShelfError::Io(_) | ShelfError::Config(_) => StatusCode::INTERNAL_SERVER_ERROR,
            },
            ApiError::Multipart(err) => err.status(),
            ApiError::MultipartRejected(err) => err.status(),
            ApiError::Query(err) => err.status(),
            ApiError::Join(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            error!(%status, error = %self, "request failed");
        } else {
            warn!(%status, error = %self, "request rejected");
        }

        let body = match &self {
            ApiError::Shelf(ShelfError::FileExists(filename)) => {
                json!({ "error": "file_exists", "filename": filename })
            }
            other => json!({ "error": other.to_string() }),
        };
        (status, Json(body)).into_response()
    }
}
