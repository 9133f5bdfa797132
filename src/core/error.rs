// Centralized error handling for the directory

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

/// Errors raised by the user model itself
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("{0}")]
    InvalidArgument(String),

    #[error("No user ids left to allocate")]
    IdsExhausted,
}

/// Errors returned by the HTTP handlers
#[derive(Error, Debug)]
pub enum DirectoryError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    #[error("Invalid request body: {message}")]
    InvalidBody { status: StatusCode, message: String },

    #[error("User not found: {0}")]
    UserNotFound(u64),

    #[error("Resource not found: {0}")]
    NotFound(String),
}

impl IntoResponse for DirectoryError {
    fn into_response(self) -> Response {
        use crate::models::api::ErrorResponse;
        use axum::response::Json;

        let status = match &self {
            DirectoryError::Validation(ValidationError::InvalidArgument(_)) => StatusCode::BAD_REQUEST,
            DirectoryError::Validation(ValidationError::IdsExhausted) => StatusCode::CONFLICT,
            DirectoryError::InvalidParameter(_) => StatusCode::BAD_REQUEST,
            DirectoryError::InvalidBody { status, .. } => *status,
            DirectoryError::UserNotFound(_) => StatusCode::NOT_FOUND,
            DirectoryError::NotFound(_) => StatusCode::NOT_FOUND,
        };

        (
            status,
            Json(ErrorResponse {
                success: false,
                error: self.to_string(),
            }),
        )
            .into_response()
    }
}
