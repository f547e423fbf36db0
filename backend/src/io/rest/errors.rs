//! Translation of domain and request errors into HTTP responses.

use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use shared::ErrorResponse;
use thiserror::Error;

use crate::domain::BookServiceError;

/// REST API errors
#[derive(Debug, Error)]
pub enum RestError {
    /// Body or path could not be parsed
    #[error("Invalid request: {0}")]
    BadRequest(String),

    /// Field validation failed
    #[error("{0}")]
    Validation(String),

    #[error("{0}")]
    NotFound(String),

    /// Store failure; detail has already been logged by the service
    #[error("Internal server error")]
    Internal,
}

impl RestError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            RestError::BadRequest(_) | RestError::Validation(_) => StatusCode::BAD_REQUEST,
            RestError::NotFound(_) => StatusCode::NOT_FOUND,
            RestError::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<BookServiceError> for RestError {
    fn from(err: BookServiceError) -> Self {
        match err {
            BookServiceError::Validation(e) => RestError::Validation(e.to_string()),
            e @ BookServiceError::NotFound(_) => RestError::NotFound(e.to_string()),
            BookServiceError::Storage(_) => RestError::Internal,
        }
    }
}

impl From<JsonRejection> for RestError {
    fn from(rejection: JsonRejection) -> Self {
        RestError::BadRequest(rejection.body_text())
    }
}

impl From<PathRejection> for RestError {
    fn from(rejection: PathRejection) -> Self {
        RestError::BadRequest(rejection.body_text())
    }
}

impl IntoResponse for RestError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = Json(ErrorResponse {
            error: self.to_string(),
            code: status.as_u16(),
        });
        (status, body).into_response()
    }
}
