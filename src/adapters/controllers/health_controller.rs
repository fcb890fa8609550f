use axum::{extract::State, Json};
use serde::Serialize;

use crate::adapters::state::AppState;

/// How many collection names the diagnostics response samples.
const COLLECTION_SAMPLE_LIMIT: i64 = 10;

/// Captured store errors are trimmed to keep the response readable.
const DETAIL_MAX_LEN: usize = 100;

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum HealthStatus {
    Ok,
    Unavailable,
}

#[derive(Debug, Serialize)]
pub struct DiagnosticsResponse {
    pub backend: HealthStatus,
    pub database: HealthStatus,
    pub database_url_set: bool,
    /// Present only when the store probe failed.
    pub detail: Option<String>,
    pub collections: Vec<String>,
}

pub struct HealthController;

impl HealthController {
    /// GET /
    pub async fn root() -> Json<MessageResponse> {
        Json(MessageResponse {
            message: "video-service backend is running".to_string(),
        })
    }

    /// GET /api/hello
    pub async fn hello() -> Json<MessageResponse> {
        Json(MessageResponse {
            message: "Hello from the backend API!".to_string(),
        })
    }

    /// GET /test
    /// Best-effort health report: store failures are rendered into the
    /// response, never propagated as an error status.
    pub async fn diagnostics(State(app_state): State<AppState>) -> Json<DiagnosticsResponse> {
        let database_url_set = std::env::var("DATABASE_URL").is_ok();

        let (database, detail, collections) = match app_state
            .video_repository
            .list_collections(COLLECTION_SAMPLE_LIMIT)
            .await
        {
            Ok(names) => (HealthStatus::Ok, None, names),
            Err(e) => {
                let detail: String = e.to_string().chars().take(DETAIL_MAX_LEN).collect();
                (HealthStatus::Unavailable, Some(detail), Vec::new())
            }
        };

        Json(DiagnosticsResponse {
            backend: HealthStatus::Ok,
            database,
            database_url_set,
            detail,
            collections,
        })
    }
}
