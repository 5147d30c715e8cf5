//! Route definitions and router setup
//!
//! Configures all API routes and middleware.

mod catalog;
mod chat;
mod lead;
mod project;

use crate::config::Settings;
use crate::state::SharedState;
use axum::{
    http::{header, Method},
    routing::{get, post},
    Router,
};
use std::time::Duration;
use tower::ServiceBuilder;
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    request_id::MakeRequestUuid,
    trace::{DefaultMakeSpan, DefaultOnRequest, DefaultOnResponse, TraceLayer},
    ServiceBuilderExt,
};
use tracing::Level;

/// Create the application router with all routes and middleware
pub fn create_router(state: SharedState, settings: &Settings) -> Router {
    // Build CORS layer
    let cors = build_cors_layer(settings);

    // Build tracing/logging layer
    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
        .on_request(DefaultOnRequest::new().level(Level::INFO))
        .on_response(DefaultOnResponse::new().level(Level::INFO));

    // Build middleware stack
    let middleware = ServiceBuilder::new()
        .set_x_request_id(MakeRequestUuid)
        .layer(trace_layer)
        .layer(CompressionLayer::new())
        .layer(cors)
        .propagate_x_request_id();

    // Build the router
    Router::new()
        // Health check
        .route("/health", get(health_check))
        // Project catalog
        .route("/api/projects", get(project::list_projects))
        .route("/api/projects/{slug}", get(project::get_project))
        // Read-only catalogs
        .route("/api/testimonials", get(catalog::list_testimonials))
        .route("/api/jobs", get(catalog::list_jobs))
        .route("/api/news", get(catalog::list_news))
        // Lead capture
        .route("/api/leads", post(lead::create_lead))
        // Chat widget
        .route("/api/chat", post(chat::send_message))
        // Apply middleware and state
        .layer(middleware)
        .with_state(state)
}

/// Build CORS layer from settings
fn build_cors_layer(settings: &Settings) -> CorsLayer {
    let origins: Vec<_> = settings
        .cors
        .allowed_origins
        .iter()
        .filter_map(|s| s.parse().ok())
        .collect();

    if origins.is_empty() {
        CorsLayer::new()
            .allow_origin(Any)
            .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
            .allow_headers([header::CONTENT_TYPE, header::ACCEPT])
            .max_age(Duration::from_secs(3600))
    } else {
        CorsLayer::new()
            .allow_origin(origins)
            .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
            .allow_headers([header::CONTENT_TYPE, header::ACCEPT])
            .max_age(Duration::from_secs(3600))
    }
}

/// Health check endpoint
async fn health_check() -> axum::Json<serde_json::Value> {
    axum::Json(serde_json::json!({
        "success": true,
        "message": "Server is running fine.",
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "version": env!("CARGO_PKG_VERSION")
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chat::{ChatClient, FALLBACK_REPLY};
    use crate::config::ChatConfig;
    use crate::state::AppState;
    use crate::storage::{seed, MemoryStorage, Storage};
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use http_body_util::BodyExt;
    use pretty_assertions::assert_eq;
    use std::sync::Arc;
    use tower::ServiceExt;

    async fn test_app() -> (Router, Arc<MemoryStorage>) {
        let store = Arc::new(MemoryStorage::new());
        seed::ensure_seed_data(store.as_ref()).await.unwrap();

        let settings = Settings {
            server: Default::default(),
            database: None,
            cors: Default::default(),
            chat: ChatConfig::default(),
        };
        let chat = ChatClient::new(&settings.chat);
        let state = Arc::new(AppState::new(
            store.clone() as Arc<dyn Storage>,
            chat,
        ));

        (create_router(state, &settings), store)
    }

    async fn body_json(response: axum::response::Response) -> serde_json::Value {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&bytes).unwrap()
    }

    fn get(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    fn post_json(uri: &str, body: serde_json::Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    #[tokio::test]
    async fn test_list_projects_returns_seeded_catalog() {
        let (app, _) = test_app().await;

        let response = app.oneshot(get("/api/projects")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = body_json(response).await;
        let projects = body.as_array().unwrap();
        assert_eq!(projects.len(), 3);
        assert_eq!(projects[0]["slug"], "grand-horizon");
    }

    #[tokio::test]
    async fn test_list_projects_is_idempotent() {
        let (app, _) = test_app().await;

        let first = body_json(app.clone().oneshot(get("/api/projects")).await.unwrap()).await;
        let second = body_json(app.oneshot(get("/api/projects")).await.unwrap()).await;

        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn test_get_project_by_slug() {
        let (app, _) = test_app().await;

        let response = app
            .oneshot(get("/api/projects/emerald-gardens"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = body_json(response).await;
        assert_eq!(body["slug"], "emerald-gardens");
        assert_eq!(body["status"], "completed");
    }

    #[tokio::test]
    async fn test_unknown_slug_returns_404() {
        let (app, _) = test_app().await;

        let response = app.oneshot(get("/api/projects/no-such-slug")).await.unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let body = body_json(response).await;
        assert_eq!(body["message"], "Project not found");
    }

    #[tokio::test]
    async fn test_catalog_lists_are_populated() {
        let (app, _) = test_app().await;

        for uri in ["/api/testimonials", "/api/jobs", "/api/news"] {
            let response = app.clone().oneshot(get(uri)).await.unwrap();
            assert_eq!(response.status(), StatusCode::OK, "{} not OK", uri);

            let body = body_json(response).await;
            assert!(!body.as_array().unwrap().is_empty(), "{} empty", uri);
        }
    }

    #[tokio::test]
    async fn test_valid_lead_returns_201_and_is_stored() {
        let (app, store) = test_app().await;
        let before = store.lead_count().await;

        let response = app
            .oneshot(post_json(
                "/api/leads",
                serde_json::json!({
                    "name": "A",
                    "email": "a@example.com",
                    "phone": "555",
                    "message": null,
                    "projectId": null
                }),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);

        let body = body_json(response).await;
        assert_eq!(body["success"], true);
        assert_eq!(store.lead_count().await, before + 1);
    }

    #[tokio::test]
    async fn test_lead_missing_email_returns_400() {
        let (app, store) = test_app().await;
        let before = store.lead_count().await;

        let response = app
            .oneshot(post_json(
                "/api/leads",
                serde_json::json!({"name": "A", "phone": "555"}),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(store.lead_count().await, before);
    }

    #[tokio::test]
    async fn test_lead_invalid_email_returns_400_with_message() {
        let (app, store) = test_app().await;
        let before = store.lead_count().await;

        let response = app
            .oneshot(post_json(
                "/api/leads",
                serde_json::json!({"name": "A", "email": "nope", "phone": "555"}),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = body_json(response).await;
        assert_eq!(body["message"], "A valid email address is required");
        assert_eq!(store.lead_count().await, before);
    }

    #[tokio::test]
    async fn test_chat_without_credential_returns_fallback() {
        let (app, _) = test_app().await;

        let response = app
            .oneshot(post_json(
                "/api/chat",
                serde_json::json!({"message": "What are the amenities?"}),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = body_json(response).await;
        assert_eq!(body["message"], FALLBACK_REPLY);
    }

    #[tokio::test]
    async fn test_chat_empty_message_returns_400() {
        let (app, _) = test_app().await;

        let response = app
            .oneshot(post_json("/api/chat", serde_json::json!({"message": ""})))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_health_check() {
        let (app, _) = test_app().await;

        let response = app.oneshot(get("/health")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = body_json(response).await;
        assert_eq!(body["success"], true);
    }
}
