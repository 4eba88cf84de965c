//! Contacts service
//!
//! A CRUD REST service over a single contact resource (name, email, phone),
//! backed by SurrealDB. Exposes list, get-by-id, create, update and delete
//! under `/api/contacts`, Swagger UI at `/api-docs`, the raw OpenAPI document
//! at `/swagger.json`, and liveness/readiness probes at `/health` and
//! `/ready`.

pub mod config;
pub mod db;
pub mod error;
pub mod handlers;
pub mod models;
pub mod observability;
pub mod openapi;
pub mod repository;
pub mod server;
pub mod state;

pub use config::Config;
pub use error::{Error, Result};
pub use state::AppState;

use axum::{routing::get, Router};

/// Build the service router over the given application state
pub fn app(state: AppState) -> Router {
    Router::new()
        .route(
            "/api/contacts",
            get(handlers::list_contacts).post(handlers::create_contact),
        )
        .route(
            "/api/contacts/{id}",
            get(handlers::get_contact)
                .put(handlers::update_contact)
                .delete(handlers::delete_contact),
        )
        .route("/health", get(handlers::health))
        .route("/ready", get(handlers::readiness))
        .with_state(state)
        .merge(openapi::routes())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use http::{header, Method, Request, StatusCode};
    use serde_json::{json, Value};
    use tower::ServiceExt;

    async fn test_app() -> Router {
        let config = Config::default();
        let client = db::connect(&config.database).await.unwrap();
        app(AppState::new(config, client))
    }

    async fn send(
        app: &Router,
        method: Method,
        uri: &str,
        body: Option<Value>,
    ) -> (StatusCode, Value) {
        let request = match body {
            Some(json) => Request::builder()
                .method(method)
                .uri(uri)
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(json.to_string()))
                .unwrap(),
            None => Request::builder()
                .method(method)
                .uri(uri)
                .body(Body::empty())
                .unwrap(),
        };

        let response = app.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let value = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };
        (status, value)
    }

    #[tokio::test]
    async fn test_list_is_empty_initially() {
        let app = test_app().await;
        let (status, body) = send(&app, Method::GET, "/api/contacts", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!([]));
    }

    #[tokio::test]
    async fn test_create_get_update_delete_roundtrip() {
        let app = test_app().await;

        // Create
        let (status, body) = send(
            &app,
            Method::POST,
            "/api/contacts",
            Some(json!({"name": "Ann", "email": "ann@x.com", "phone": "555-0100"})),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(body["message"], "Contact added successfully");
        let id = body["contactId"].as_str().unwrap().to_string();

        // Get returns the exact field values
        let uri = format!("/api/contacts/{id}");
        let (status, body) = send(&app, Method::GET, &uri, None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["name"], "Ann");
        assert_eq!(body["email"], "ann@x.com");
        assert_eq!(body["phone"], "555-0100");
        assert_eq!(body["id"], id);

        // Partial update changes only the supplied field
        let (status, body) = send(
            &app,
            Method::PUT,
            &uri,
            Some(json!({"phone": "555-0200"})),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["message"], "Contact updated successfully");
        assert_eq!(body["contact"]["phone"], "555-0200");
        assert_eq!(body["contact"]["name"], "Ann");
        assert_eq!(body["contact"]["email"], "ann@x.com");

        // Delete
        let (status, body) = send(&app, Method::DELETE, &uri, None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["message"], "Contact deleted successfully");

        // Gone afterwards
        let (status, body) = send(&app, Method::GET, &uri, None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["message"], "Contact not found");
    }

    #[tokio::test]
    async fn test_create_with_missing_field_is_rejected() {
        let app = test_app().await;

        let (status, body) = send(
            &app,
            Method::POST,
            "/api/contacts",
            Some(json!({"name": "Ann", "phone": "555-0100"})),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["message"], "All fields (name, email, phone) are required");

        // Nothing was persisted
        let (_, body) = send(&app, Method::GET, "/api/contacts", None).await;
        assert_eq!(body, json!([]));
    }

    #[tokio::test]
    async fn test_create_with_empty_field_is_rejected() {
        let app = test_app().await;

        let (status, _) = send(
            &app,
            Method::POST,
            "/api/contacts",
            Some(json!({"name": "Ann", "email": "", "phone": "555-0100"})),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_update_with_no_fields_is_rejected() {
        let app = test_app().await;

        let (_, body) = send(
            &app,
            Method::POST,
            "/api/contacts",
            Some(json!({"name": "Ann", "email": "ann@x.com", "phone": "555-0100"})),
        )
        .await;
        let id = body["contactId"].as_str().unwrap().to_string();

        let uri = format!("/api/contacts/{id}");
        let (status, body) = send(&app, Method::PUT, &uri, Some(json!({}))).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(
            body["message"],
            "At least one field (name, email, or phone) is required to update"
        );

        // Record is unchanged
        let (_, body) = send(&app, Method::GET, &uri, None).await;
        assert_eq!(body["phone"], "555-0100");
    }

    #[tokio::test]
    async fn test_unknown_id_is_not_found_not_server_error() {
        let app = test_app().await;

        let (status, _) = send(&app, Method::GET, "/api/contacts/does-not-exist", None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);

        let (status, _) = send(&app, Method::DELETE, "/api/contacts/does-not-exist", None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);

        let (status, _) = send(
            &app,
            Method::PUT,
            "/api/contacts/does-not-exist",
            Some(json!({"name": "Bob"})),
        )
        .await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_list_counts_creates_minus_deletes() {
        let app = test_app().await;

        let mut ids = Vec::new();
        for i in 0..4 {
            let (_, body) = send(
                &app,
                Method::POST,
                "/api/contacts",
                Some(json!({
                    "name": format!("Contact {i}"),
                    "email": format!("c{i}@x.com"),
                    "phone": format!("555-010{i}"),
                })),
            )
            .await;
            ids.push(body["contactId"].as_str().unwrap().to_string());
        }

        let (_, body) = send(&app, Method::GET, "/api/contacts", None).await;
        assert_eq!(body.as_array().unwrap().len(), 4);

        let uri = format!("/api/contacts/{}", ids[0]);
        send(&app, Method::DELETE, &uri, None).await;

        let (_, body) = send(&app, Method::GET, "/api/contacts", None).await;
        assert_eq!(body.as_array().unwrap().len(), 3);
    }

    #[tokio::test]
    async fn test_swagger_spec_is_served() {
        let app = test_app().await;
        let (status, body) = send(&app, Method::GET, "/swagger.json", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["info"]["title"], "Contacts API");
        assert!(body["paths"]["/api/contacts"].is_object());
    }

    #[tokio::test]
    async fn test_health_endpoints() {
        let app = test_app().await;

        let response = app
            .clone()
            .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let response = app
            .clone()
            .oneshot(Request::builder().uri("/ready").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }
}
