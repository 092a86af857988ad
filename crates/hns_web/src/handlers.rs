use axum::{
    extract::State,
    http::StatusCode,
    response::{Html, IntoResponse},
    Json,
};
use serde_json::json;
use std::sync::Arc;
use tracing::info;

use crate::html;
use crate::AppState;

pub async fn index(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let snapshot = state.view.snapshot().await;
    Html(html::render_page(&snapshot))
}

pub async fn list_summaries(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let snapshot = state.view.snapshot().await;
    Json(snapshot.feed.summaries)
}

pub async fn status(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let snapshot = state.view.snapshot().await;
    Json(json!({
        "status": snapshot.status.as_str(),
        "last_updated": snapshot.feed.last_updated().map(|ts| ts.to_rfc3339()),
        "updated_ago": snapshot.updated_label,
    }))
}

/// Manual retry. Mirrors the upstream trigger endpoint: a refresh that is
/// already running answers 429 instead of stacking another poll.
pub async fn refresh(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let mut scheduler = state.scheduler.lock().await;
    if scheduler.is_running() {
        return (
            StatusCode::TOO_MANY_REQUESTS,
            Json(json!({
                "status": "error",
                "message": "Refresh already in progress",
            })),
        );
    }
    info!("🔄 Manual refresh requested");
    scheduler.start();
    (
        StatusCode::OK,
        Json(json!({
            "status": "success",
            "message": "Refresh started",
        })),
    )
}
