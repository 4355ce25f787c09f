//! yomi-server library - furigana annotation HTTP service
//!
//! Thin axum glue around the `yomi-core` annotation pipeline: request
//! parsing, response shaping, health reporting. All annotation logic lives
//! in the core crate.

use std::sync::Arc;

use axum::Router;
use chrono::{DateTime, Utc};
use tower_http::trace::TraceLayer;
use yomi_core::Annotator;

pub mod api;
pub mod config;
pub mod error;
pub mod services;

pub use error::{ApiError, ApiResult};

/// Application state shared across HTTP handlers
#[derive(Clone)]
pub struct AppState {
    /// The annotation core, constructed once and shared
    pub annotator: Arc<Annotator>,
    /// Service start time, for health uptime reporting
    pub startup_time: DateTime<Utc>,
}

impl AppState {
    pub fn new(annotator: Arc<Annotator>) -> Self {
        Self {
            annotator,
            startup_time: Utc::now(),
        }
    }
}

/// Build application router
pub fn build_router(state: AppState) -> Router {
    use axum::routing::post;

    Router::new()
        .route("/annotate", post(api::annotate))
        .route("/annotate/html", post(api::annotate_html))
        .merge(api::health_routes())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
