use crate::core::error::DirectoryError;
use crate::core::state::AppState;
use crate::models::api::{SuccessResponse, UserListResponse, UserResponse};
use crate::validation::body::JsonBody;
use crate::validation::names::UserParams;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use std::sync::Arc;
use tracing::{info, warn};

fn parse_user_id(raw: &str) -> Result<u64, DirectoryError> {
    raw.parse::<u64>()
        .map_err(|_| DirectoryError::InvalidParameter(format!("user id '{}'", raw)))
}

/// List all users in insertion order
///
/// GET /users
pub async fn list_users_handler(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let users = state.users.read().await.get_users().to_vec();

    (
        StatusCode::OK,
        Json(UserListResponse {
            success: true,
            users,
        }),
    )
}

/// GET /users/{id}
pub async fn get_user_handler(
    State(state): State<Arc<AppState>>,
    Path(user_id): Path<String>,
) -> Result<Response, DirectoryError> {
    let user_id = parse_user_id(&user_id)?;

    let user = state
        .users
        .read()
        .await
        .get_user(user_id)
        .cloned()
        .ok_or(DirectoryError::UserNotFound(user_id))?;

    Ok((
        StatusCode::OK,
        Json(UserResponse {
            success: true,
            message: "User found.".to_string(),
            user,
        }),
    )
        .into_response())
}

/// Create a user and append it to the list
///
/// POST /users  {"given_name", "family_name", "user_name"}
pub async fn create_user_handler(
    State(state): State<Arc<AppState>>,
    JsonBody(params): JsonBody<UserParams>,
) -> Result<Response, DirectoryError> {
    let params = params.validate().map_err(|e| {
        warn!(error = %e, "Rejected user creation");
        e
    })?;

    let user = {
        let mut users = state.users.write().await;
        let user = users.create_user(&params.given_name, &params.family_name, &params.user_name)?;
        users.add_user(user.clone());
        user
    };

    info!(
        user_id = user.id(),
        user_name = %user.user_name(),
        "User added"
    );

    Ok((
        StatusCode::CREATED,
        Json(UserResponse {
            success: true,
            message: "User added.".to_string(),
            user,
        }),
    )
        .into_response())
}

/// Overwrite the name fields of an existing user
///
/// PUT /users/{id}  {"given_name", "family_name", "user_name"}
pub async fn edit_user_handler(
    State(state): State<Arc<AppState>>,
    Path(user_id): Path<String>,
    JsonBody(params): JsonBody<UserParams>,
) -> Result<Response, DirectoryError> {
    let user_id = parse_user_id(&user_id)?;
    let params = params.validate().map_err(|e| {
        warn!(user_id, error = %e, "Rejected user update");
        e
    })?;

    let user = {
        let mut users = state.users.write().await;
        if !users.edit_user(user_id, &params.given_name, &params.family_name, &params.user_name) {
            warn!(user_id, "User not found");
            return Err(DirectoryError::UserNotFound(user_id));
        }
        users
            .get_user(user_id)
            .cloned()
            .ok_or(DirectoryError::UserNotFound(user_id))?
    };

    info!(
        user_id,
        user_name = %user.user_name(),
        "User updated"
    );

    Ok((
        StatusCode::OK,
        Json(UserResponse {
            success: true,
            message: "User updated.".to_string(),
            user,
        }),
    )
        .into_response())
}

/// DELETE /users/{id}
pub async fn delete_user_handler(
    State(state): State<Arc<AppState>>,
    Path(user_id): Path<String>,
) -> Result<Response, DirectoryError> {
    let user_id = parse_user_id(&user_id)?;

    if !state.users.write().await.delete_user(user_id) {
        warn!(user_id, "User not found");
        return Err(DirectoryError::UserNotFound(user_id));
    }

    info!(user_id, "User deleted");

    Ok((
        StatusCode::OK,
        Json(SuccessResponse {
            success: true,
            message: "User deleted.".to_string(),
        }),
    )
        .into_response())
}
