pub mod wlog;

use axum::{extract::DefaultBodyLimit, http::StatusCode, routing::get, Json, Router};
use tower_http::trace::{DefaultMakeSpan, DefaultOnFailure, DefaultOnRequest, DefaultOnResponse, TraceLayer};
use tracing::Level;

use common::types::Health;

use crate::observability;
use crate::state::ServerState;

pub async fn health() -> Json<Health> {
    Json(Health { status: "ok" })
}

async fn metrics() -> (StatusCode, String) {
    observability::render_metrics()
}

/// Build the full application router: the four wlog routes plus health and metrics.
pub fn build_router(state: ServerState) -> Router {
    let wlog_routes = Router::new()
        .route("/wlog/:user", get(wlog::list_topics).post(wlog::create_user))
        .route("/wlog/:user/:topic", get(wlog::get_topic).post(wlog::create_topic))
        // topic text has no size cap; only JSON decodability is checked
        .layer(DefaultBodyLimit::disable());

    Router::new()
        .route("/health", get(health))
        .route("/metrics", get(metrics))
        .merge(wlog_routes)
        .with_state(state)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO).include_headers(false))
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO).include_headers(false))
                // 5xx only; wlog never produces them on purpose
                .on_failure(DefaultOnFailure::new().level(Level::ERROR)),
        )
}
