pub mod adapters;
pub mod application;
pub mod domain;
pub mod services;

use std::path::Path;

use adapters::{
    controllers::{health_controller::HealthController, video_controller::VideoController},
    state::AppState,
};
use axum::{
    routing::{get, post},
    Router,
};
use tower_http::services::ServeDir;

/// Assembles the full route table. `/uploads` serves the blob directory
/// byte-for-byte, with range-request support for playback.
pub fn router(app_state: AppState, upload_dir: &Path) -> Router {
    Router::new()
        .route("/", get(HealthController::root))
        .route("/api/hello", get(HealthController::hello))
        .route("/test", get(HealthController::diagnostics))
        .route(
            "/api/videos",
            post(VideoController::upload_video).get(VideoController::list_videos),
        )
        .nest_service("/uploads", ServeDir::new(upload_dir))
        .with_state(app_state)
}
