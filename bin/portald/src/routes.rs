//! JSON endpoints over the portal engine.
//!
//! Shells poll or fetch state here and POST intents back; the engine
//! does everything else. Paths in URLs are the portal's state and
//! intent paths verbatim, e.g. `GET /state/pages/schools/list` and
//! `POST /intent/nav/goto`.

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};

use eduva_portal::{bridge, Portal};

/// Application shared state.
#[derive(Clone)]
pub struct AppState {
    pub portal: Arc<Portal>,
}

/// Build the complete router.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/version", get(version))
        .route("/routes", get(route_table))
        .route("/state", get(full_state))
        .route("/state/{*path}", get(state_at))
        .route("/intent/{*path}", post(intent))
        .with_state(state)
}

async fn health() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "ok",
    }))
}

async fn version() -> impl IntoResponse {
    Json(serde_json::json!({
        "name": "portald",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

/// The declarative route tree, for shells that render their own menus.
async fn route_table(State(state): State<AppState>) -> impl IntoResponse {
    Json(state.portal.routes().clone())
}

/// Snapshot of every serializable state path plus the layout signals.
async fn full_state(State(state): State<AppState>) -> impl IntoResponse {
    Json(state.portal.snapshot_json())
}

/// One state slot, 404 when the path is unset or not serializable.
async fn state_at(State(state): State<AppState>, Path(path): Path<String>) -> Response {
    let Some(value) = state.portal.engine().get(&path) else {
        return StatusCode::NOT_FOUND.into_response();
    };
    match bridge::serialize_state(&path, &value) {
        Some(json) => ([(header::CONTENT_TYPE, "application/json")], json).into_response(),
        None => StatusCode::NOT_FOUND.into_response(),
    }
}

/// Decode the body for the intent at `path` and run it to completion.
/// The response comes back only after every handler finished, so a
/// follow-up `GET /state` observes the effects.
async fn intent(
    State(state): State<AppState>,
    Path(path): Path<String>,
    body: String,
) -> Response {
    let engine = state.portal.engine();
    if !engine.handles(&path) {
        tracing::debug!(path, "intent has no handler");
        return (
            StatusCode::NOT_FOUND,
            Json(serde_json::json!({
                "error": format!("no handler for intent {path:?}"),
            })),
        )
            .into_response();
    }
    match bridge::deserialize_request(&path, &body) {
        Some(payload) => {
            engine.emit_shared(&path, payload).await;
            Json(serde_json::json!({
                "ok": true,
            }))
            .into_response()
        }
        None => (
            StatusCode::BAD_REQUEST,
            Json(serde_json::json!({
                "error": "request body does not decode for this intent",
            })),
        )
            .into_response(),
    }
}
