use crate::core::state::AppState;
use crate::models::api::StatsResponse;
use crate::models::stats::UserStats;
use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use std::sync::Arc;

/// Count, average name lengths and id range of the current list
///
/// GET /stats
pub async fn stats_handler(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let stats = UserStats::from_users(state.users.read().await.get_users());

    (
        StatusCode::OK,
        Json(StatsResponse {
            success: true,
            stats,
        }),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::Config;
    use crate::core::startup::seed_demo_users;
    use axum::body::Body;
    use http_body_util::BodyExt;
    use serde_json::Value;

    async fn stats_json(state: Arc<AppState>) -> Value {
        let response = stats_handler(State(state)).await.into_response();
        assert_eq!(response.status(), StatusCode::OK);

        let (_, body) = response.into_parts();
        let bytes = Body::new(body).collect().await.unwrap().to_bytes();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_stats_empty() {
        let config = Config::from_toml("[server]\nport = 8080\n").unwrap();
        let body = stats_json(Arc::new(AppState::new(config))).await;

        assert_eq!(body["stats"]["count"], 0);
        assert!(body["stats"]["min_id"].is_null());
        assert!(body["stats"]["avg_given_name_length"].is_null());
    }

    #[tokio::test]
    async fn test_stats_seeded() {
        let config = Config::from_toml("[server]\nport = 8080\n").unwrap();
        let state = Arc::new(AppState::new(config));
        seed_demo_users(&state).await.unwrap();

        let body = stats_json(state).await;

        assert_eq!(body["stats"]["count"], 3);
        assert_eq!(body["stats"]["avg_family_name_length"], 6.0);
        assert_eq!(body["stats"]["min_id"], 1);
        assert_eq!(body["stats"]["max_id"], 3);
    }
}
