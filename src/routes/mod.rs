// src/routes/mod.rs
pub mod chat;
pub mod diagnostics;

use std::path::Path;

use crate::state::SharedState;
use axum::{
    Router,
    extract::Request,
    routing::{get, post},
};
use chat::chat_handler;
use diagnostics::{health_handler, test_handler};
use tower_http::LatencyUnit;
use tower_http::cors::CorsLayer;
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::{DefaultOnRequest, DefaultOnResponse, TraceLayer};
use tracing::Level;
use uuid::Uuid;

pub const ROUTES: &[(&str, &str)] = &[
    ("GET", "/api/test"),
    ("GET", "/api/health"),
    ("POST", "/api/chat"),
];

/// API routes plus the static bundle. Paths that match neither get `index.html`.
pub fn create_router(static_dir: impl AsRef<Path>) -> Router<SharedState> {
    let static_dir = static_dir.as_ref();

    let api_routes = Router::new()
        .route("/test", get(test_handler))
        .route("/health", get(health_handler))
        .route("/chat", post(chat_handler));

    let frontend =
        ServeDir::new(static_dir).fallback(ServeFile::new(static_dir.join("index.html")));

    Router::new()
        .nest("/api", api_routes)
        .fallback_service(frontend)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(|req: &Request| {
                    tracing::info_span!(
                        "request",
                        id = %Uuid::new_v4(),
                        method = %req.method(),
                        uri = %req.uri(),
                    )
                })
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                .on_response(
                    DefaultOnResponse::new()
                        .level(Level::INFO)
                        .latency_unit(LatencyUnit::Millis),
                ),
        )
}

/// The full application: routes, state and CORS.
pub fn create_app(state: SharedState) -> Router {
    create_router(&state.settings.static_dir)
        .with_state(state)
        .layer(CorsLayer::very_permissive())
}
