use crate::core::error::DirectoryError;
use axum::{http::Uri, response::{IntoResponse, Response}};

pub async fn fallback_handler(uri: Uri) -> Response {
    DirectoryError::NotFound(format!(
        "{}. Valid endpoints: /health, /users, /users/{{id}}, /stats",
        uri.path()
    ))
    .into_response()
}
