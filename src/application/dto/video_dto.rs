use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::models::video::Video;

/// Fields supplied by the upload handler; `id` and `created_at` are
/// assigned by the store on insert.
#[derive(Debug, Clone)]
pub struct NewVideoDTO {
    pub title: String,
    pub description: Option<String>,
    pub filename: String,
    pub content_type: String,
    pub size_bytes: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct VideoDTO {
    pub id: Uuid,
    pub title: Option<String>,
    pub description: Option<String>,
    pub filename: String,
    pub content_type: Option<String>,
    pub size_bytes: Option<i64>,
    pub created_at: Option<DateTime<Utc>>,
}

impl From<VideoDTO> for Video {
    fn from(value: VideoDTO) -> Self {
        Video {
            id: value.id,
            title: value.title,
            description: value.description,
            filename: value.filename,
            content_type: value.content_type,
            size_bytes: value.size_bytes,
            created_at: value.created_at,
        }
    }
}
