// HTTP routes configuration

use crate::core::state::AppState;
use axum::{routing::get, Router};
use std::sync::Arc;

pub fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(crate::handlers::health::health_handler))

        .route(
            "/users",
            get(crate::handlers::users::list_users_handler)
                .post(crate::handlers::users::create_user_handler),
        )
        .route(
            "/users/{id}",
            get(crate::handlers::users::get_user_handler)
                .put(crate::handlers::users::edit_user_handler)
                .delete(crate::handlers::users::delete_user_handler),
        )
        .route("/stats", get(crate::handlers::stats::stats_handler))

        // 404 fallback for all unmatched routes
        .fallback(crate::handlers::fallback::fallback_handler)

        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::Config;
    use axum::body::Body;
    use axum::http::{header, Method, Request, StatusCode};
    use http_body_util::BodyExt;
    use serde_json::{json, Value};
    use tower::ServiceExt;

    fn test_router() -> Router {
        let config = Config::from_toml("[server]\nport = 8080\n").unwrap();
        build_router(Arc::new(AppState::new(config)))
    }

    async fn send(router: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
        let mut builder = Request::builder().method(method).uri(uri);
        let body = match body {
            Some(value) => {
                builder = builder.header(header::CONTENT_TYPE, "application/json");
                Body::from(value.to_string())
            }
            None => Body::empty(),
        };

        let response = router
            .clone()
            .oneshot(builder.body(body).unwrap())
            .await
            .unwrap();

        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let value = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };
        (status, value)
    }

    fn user_body(given: &str, family: &str, user_name: &str) -> Option<Value> {
        Some(json!({
            "given_name": given,
            "family_name": family,
            "user_name": user_name,
        }))
    }

    #[tokio::test]
    async fn test_full_scenario_over_http() {
        let router = test_router();

        for (given, family, user_name, expected_id) in
            [("Sam", "S", "s1", 1), ("Kev", "L", "k1", 2), ("Pet", "K", "p1", 3)]
        {
            let (status, body) =
                send(&router, Method::POST, "/users", user_body(given, family, user_name)).await;
            assert_eq!(status, StatusCode::CREATED);
            assert_eq!(body["user"]["id"], expected_id);
        }

        let (status, _) = send(&router, Method::DELETE, "/users/2", None).await;
        assert_eq!(status, StatusCode::OK);

        let (_, body) = send(&router, Method::GET, "/users", None).await;
        let ids: Vec<u64> = body["users"]
            .as_array()
            .unwrap()
            .iter()
            .map(|u| u["id"].as_u64().unwrap())
            .collect();
        assert_eq!(ids, vec![1, 3]);

        let (status, _) =
            send(&router, Method::PUT, "/users/3", user_body("Peter", "Kneisel", "pk")).await;
        assert_eq!(status, StatusCode::OK);

        let (status, body) = send(&router, Method::GET, "/users/3", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["user"]["id"], 3);
        assert_eq!(body["user"]["given_name"], "Peter");
        assert_eq!(body["user"]["family_name"], "Kneisel");
        assert_eq!(body["user"]["user_name"], "pk");

        let (status, body) = send(&router, Method::DELETE, "/users/2", None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["success"], false);

        let (_, body) = send(&router, Method::GET, "/stats", None).await;
        assert_eq!(body["stats"]["count"], 2);
        assert_eq!(body["stats"]["min_id"], 1);
        assert_eq!(body["stats"]["max_id"], 3);
    }

    #[tokio::test]
    async fn test_create_rejects_blank_user_name() {
        let router = test_router();

        let (status, body) =
            send(&router, Method::POST, "/users", user_body("Sam", "S", "  ")).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "The username is empty.");

        let (_, body) = send(&router, Method::GET, "/users", None).await;
        assert!(body["users"].as_array().unwrap().is_empty());
    }

    async fn send_raw(router: &Router, content_type: Option<&str>, body: &str) -> (StatusCode, Value) {
        let mut builder = Request::builder().method(Method::POST).uri("/users");
        if let Some(content_type) = content_type {
            builder = builder.header(header::CONTENT_TYPE, content_type);
        }

        let response = router
            .clone()
            .oneshot(builder.body(Body::from(body.to_string())).unwrap())
            .await
            .unwrap();

        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_bad_bodies_get_json_errors() {
        let router = test_router();

        let cases = [
            (Some("application/json"), "{not json", StatusCode::BAD_REQUEST),
            (
                Some("application/json"),
                r#"{"given_name": 5}"#,
                StatusCode::UNPROCESSABLE_ENTITY,
            ),
            (None, r#"{"given_name": "Sam"}"#, StatusCode::UNSUPPORTED_MEDIA_TYPE),
        ];

        for (content_type, body, expected) in cases {
            let (status, body) = send_raw(&router, content_type, body).await;
            assert_eq!(status, expected);
            assert_eq!(body["success"], false);
            assert!(body["error"]
                .as_str()
                .unwrap()
                .starts_with("Invalid request body"));
        }

        let (_, body) = send(&router, Method::GET, "/users", None).await;
        assert!(body["users"].as_array().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_bad_body_on_edit() {
        let router = test_router();
        send(&router, Method::POST, "/users", user_body("Sam", "S", "s1")).await;

        let request = Request::builder()
            .method(Method::PUT)
            .uri("/users/1")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(r#""just a string""#))
            .unwrap();
        let response = router.clone().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

        let (_, body) = send(&router, Method::GET, "/users/1", None).await;
        assert_eq!(body["user"]["given_name"], "Sam");
    }

    #[tokio::test]
    async fn test_health_route() {
        let router = test_router();

        let (status, body) = send(&router, Method::GET, "/health", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "ok");
        assert_eq!(body["users"], 0);
    }

    #[tokio::test]
    async fn test_unknown_route() {
        let router = test_router();

        let (status, body) = send(&router, Method::GET, "/nope", None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["success"], false);
    }
}
