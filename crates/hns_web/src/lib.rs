use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tokio::sync::Mutex;
use tower_http::cors::CorsLayer;

pub mod handlers;
pub mod html;
pub mod poller;
pub mod source;
pub mod state;

pub use poller::{FreshnessTicker, PollConfig, RefreshScheduler};
pub use source::{HttpSummarySource, StaticSummarySource, SummarySource};
pub use state::{ViewSnapshot, ViewState, ViewStatus};

pub struct AppState {
    pub view: Arc<ViewState>,
    pub scheduler: Mutex<RefreshScheduler>,
}

pub async fn create_app(state: AppState) -> Router {
    let cors = CorsLayer::permissive();

    Router::new()
        .route("/", get(handlers::index))
        .route("/api/summaries", get(handlers::list_summaries))
        .route("/api/status", get(handlers::status))
        .route("/api/refresh", post(handlers::refresh))
        .layer(cors)
        .with_state(Arc::new(state))
}

pub mod prelude {
    pub use crate::source::{HttpSummarySource, SummarySource};
    pub use crate::{AppState, FreshnessTicker, PollConfig, RefreshScheduler, ViewState};
    pub use hns_core::{Result, SummaryFeed, SummaryRecord};
}
