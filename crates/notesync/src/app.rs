use std::time::Duration;

use axum::{
    http::{header, Method, StatusCode},
    routing::{get, put},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::{
    handlers::{
        health::livez,
        notes::{create_note, delete_note, list_notes, update_note},
    },
    state::AppState,
};

/// Create the application router with all routes and middleware.
pub fn create_app(state: AppState) -> Router {
    // CORS configuration for API endpoints
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers([header::CONTENT_TYPE]);

    Router::new()
        .route("/notes", get(list_notes).post(create_note))
        .route("/notes/{id}", put(update_note).delete(delete_note))
        .route("/livez", get(livez))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            Duration::from_secs(10),
        ))
        .with_state(state)
}

#[cfg(all(test, feature = "inmemory"))]
mod tests {
    use super::*;
    use axum::{
        body::Body,
        http::{Request, StatusCode},
        response::Response,
    };
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    fn app() -> Router {
        create_app(AppState::in_memory())
    }

    async fn response_json(response: Response) -> serde_json::Value {
        let body = response.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&body).unwrap()
    }

    async fn send_json(app: &Router, method: &str, uri: &str, body: &str) -> Response {
        app.clone()
            .oneshot(
                Request::builder()
                    .method(method)
                    .uri(uri)
                    .header("Content-Type", "application/json")
                    .body(Body::from(body.to_string()))
                    .unwrap(),
            )
            .await
            .unwrap()
    }

    async fn send(app: &Router, method: &str, uri: &str) -> Response {
        app.clone()
            .oneshot(
                Request::builder()
                    .method(method)
                    .uri(uri)
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap()
    }

    /// Creates a note and returns its id.
    async fn create(app: &Router, title: &str, note: &str) -> String {
        let body = serde_json::json!({ "title": title, "note": note }).to_string();
        let response = send_json(app, "POST", "/notes", &body).await;
        assert_eq!(response.status(), StatusCode::CREATED);
        let json = response_json(response).await;
        json["id"].as_str().unwrap().to_string()
    }

    #[tokio::test]
    async fn test_livez() {
        let response = send(&app(), "GET", "/livez").await;
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_create_returns_created_fields() {
        let response = send_json(
            &app(),
            "POST",
            "/notes",
            r#"{"title": "Groceries", "note": "Milk and eggs"}"#,
        )
        .await;

        assert_eq!(response.status(), StatusCode::CREATED);

        let json = response_json(response).await;
        assert!(!json["id"].as_str().unwrap().is_empty());
        assert_eq!(json["title"], "Groceries");
        assert_eq!(json["note"], "Milk and eggs");
    }

    #[tokio::test]
    async fn test_create_twice_yields_distinct_records() {
        let app = app();

        let first = create(&app, "Same", "payload").await;
        let second = create(&app, "Same", "payload").await;

        assert_ne!(first, second);

        let json = response_json(send(&app, "GET", "/notes").await).await;
        assert_eq!(json["items"].as_array().unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_create_trims_fields() {
        let response = send_json(
            &app(),
            "POST",
            "/notes",
            r#"{"title": "  Groceries  ", "note": "  Milk  "}"#,
        )
        .await;

        let json = response_json(response).await;
        assert_eq!(json["title"], "Groceries");
        assert_eq!(json["note"], "Milk");
    }

    #[tokio::test]
    async fn test_create_empty_title_is_rejected_before_store_access() {
        let app = app();

        let response = send_json(&app, "POST", "/notes", r#"{"title": "", "note": "x"}"#).await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let json = response_json(response).await;
        assert_eq!(json["error"], "Invalid request body: title is required");

        // Store unchanged
        let json = response_json(send(&app, "GET", "/notes").await).await;
        assert_eq!(json["items"], serde_json::json!([]));
    }

    #[tokio::test]
    async fn test_create_missing_note_field_is_rejected() {
        let response = send_json(&app(), "POST", "/notes", r#"{"title": "x"}"#).await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let json = response_json(response).await;
        assert_eq!(json["error"], "Invalid request body: note is required");
    }

    #[tokio::test]
    async fn test_create_malformed_body_is_rejected() {
        let response = send_json(&app(), "POST", "/notes", "{not json").await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let json = response_json(response).await;
        assert!(json["error"]
            .as_str()
            .unwrap()
            .starts_with("Invalid request body:"));
    }

    #[tokio::test]
    async fn test_list_empty() {
        let response = send(&app(), "GET", "/notes").await;

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response_json(response).await,
            serde_json::json!({ "items": [] })
        );
    }

    #[tokio::test]
    async fn test_create_then_list_round_trip() {
        let app = app();
        let id = create(&app, "A", "B").await;

        let json = response_json(send(&app, "GET", "/notes").await).await;
        let items = json["items"].as_array().unwrap();

        assert_eq!(items.len(), 1);
        assert_eq!(items[0]["id"], id.as_str());
        assert_eq!(items[0]["title"], "A");
        assert_eq!(items[0]["note"], "B");
        assert_eq!(items[0]["created_at"], items[0]["updated_at"]);
    }

    #[tokio::test]
    async fn test_update_preserves_identity_and_bumps_updated_at() {
        let app = app();
        let id = create(&app, "Before", "old body").await;

        let json = response_json(send(&app, "GET", "/notes").await).await;
        let created_at = json["items"][0]["created_at"].as_str().unwrap().to_string();

        // Make sure the clock moves between create and update.
        tokio::time::sleep(Duration::from_millis(10)).await;

        let response = send_json(
            &app,
            "PUT",
            &format!("/notes/{id}"),
            r#"{"title": "After", "note": "new body"}"#,
        )
        .await;

        assert_eq!(response.status(), StatusCode::OK);
        let updated = response_json(response).await;

        assert_eq!(updated["id"], id.as_str());
        assert_eq!(updated["title"], "After");
        assert_eq!(updated["note"], "new body");
        assert_eq!(updated["created_at"], created_at.as_str());

        // Compare as timestamps: the serialized sub-second precision varies,
        // so the strings are not safe to order lexicographically.
        let created = chrono::DateTime::parse_from_rfc3339(&created_at).unwrap();
        let updated_at =
            chrono::DateTime::parse_from_rfc3339(updated["updated_at"].as_str().unwrap()).unwrap();
        assert!(updated_at > created);
    }

    #[tokio::test]
    async fn test_update_unknown_id_is_not_found() {
        let response = send_json(
            &app(),
            "PUT",
            "/notes/never-created",
            r#"{"title": "T", "note": "n"}"#,
        )
        .await;

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let json = response_json(response).await;
        assert_eq!(json["error"], "Note not found");
    }

    #[tokio::test]
    async fn test_update_invalid_payload_is_rejected() {
        let app = app();
        let id = create(&app, "Keep", "me").await;

        let response = send_json(
            &app,
            "PUT",
            &format!("/notes/{id}"),
            r#"{"title": "x", "note": "   "}"#,
        )
        .await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        // Store unchanged
        let json = response_json(send(&app, "GET", "/notes").await).await;
        assert_eq!(json["items"][0]["title"], "Keep");
    }

    #[tokio::test]
    async fn test_update_blank_id_is_rejected() {
        let response = send_json(
            &app(),
            "PUT",
            "/notes/%20%20",
            r#"{"title": "T", "note": "n"}"#,
        )
        .await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let json = response_json(response).await;
        assert_eq!(json["error"], "Note id is required");
    }

    #[tokio::test]
    async fn test_delete_then_delete_again() {
        let app = app();
        let id = create(&app, "Gone", "soon").await;

        let response = send(&app, "DELETE", &format!("/notes/{id}")).await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response_json(response).await,
            serde_json::json!({ "message": "Note deleted" })
        );

        // Delete is terminal: both delete and update now miss
        let response = send(&app, "DELETE", &format!("/notes/{id}")).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let response = send_json(
            &app,
            "PUT",
            &format!("/notes/{id}"),
            r#"{"title": "T", "note": "n"}"#,
        )
        .await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_delete_unknown_id_is_not_found() {
        let response = send(&app(), "DELETE", "/notes/never-created").await;

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let json = response_json(response).await;
        assert_eq!(json["error"], "Note not found");
    }

    #[tokio::test]
    async fn test_unconfigured_store_fails_every_operation() {
        let app = create_app(AppState::unconfigured());
        let message = "NOTES_TABLE_NAME environment variable is required";

        for (method, uri, body) in [
            ("POST", "/notes", Some(r#"{"title": "T", "note": "n"}"#)),
            ("GET", "/notes", None),
            ("PUT", "/notes/some-id", Some(r#"{"title": "T", "note": "n"}"#)),
            ("DELETE", "/notes/some-id", None),
        ] {
            let response = match body {
                Some(body) => send_json(&app, method, uri, body).await,
                None => send(&app, method, uri).await,
            };

            assert_eq!(
                response.status(),
                StatusCode::INTERNAL_SERVER_ERROR,
                "{method} {uri}"
            );
            let json = response_json(response).await;
            assert_eq!(json["error"], message);
        }
    }
}
