//! HTTP route handlers — the JSON surface consumed by the dashboard pages.

pub mod dashboard;
pub mod deputies;
pub mod proposals;
pub mod reference;
pub mod senators;

use std::sync::Arc;

use axum::http::StatusCode;
use axum::{Json, Router};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use plenario_core::{envelope, Error};

use crate::state::AppState;

/// Build the main Axum router with all routes.
pub fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        .nest("/api", api_routes())
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

fn api_routes() -> Router<Arc<AppState>> {
    Router::new()
        .merge(deputies::routes())
        .merge(proposals::routes())
        .merge(dashboard::routes())
        .merge(senators::routes())
        .merge(reference::routes())
}

/// Map a fetch error to the failure envelope, reflecting the upstream
/// status best-effort: missing entities stay 404, upstream trouble is 502.
pub(crate) fn error_response(err: &Error, label: &str) -> (StatusCode, Json<serde_json::Value>) {
    let status = match err {
        Error::NotFound(_) => StatusCode::NOT_FOUND,
        Error::BadRequest(_) => StatusCode::BAD_REQUEST,
        Error::Http(_) | Error::Upstream { .. } | Error::Decode(_) => StatusCode::BAD_GATEWAY,
        _ => StatusCode::INTERNAL_SERVER_ERROR,
    };
    (status, Json(envelope::failure(label, &err.to_string())))
}
