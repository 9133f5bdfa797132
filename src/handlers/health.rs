use crate::core::state::AppState;
use crate::utils::time::current_timestamp;
use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use serde::Serialize;
use std::sync::Arc;

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub timestamp: i64,
    /// Users currently in the directory
    pub users: usize,
}

/// GET /health
pub async fn health_handler(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let users = state.users.read().await.len();

    (
        StatusCode::OK,
        Json(HealthResponse {
            status: "ok",
            timestamp: current_timestamp(),
            users,
        }),
    )
}
