use serde::Serialize;

use crate::domain::{links, models::video::Video};

/// Title shown for records missing one.
const DEFAULT_TITLE: &str = "Untitled";

/// Content type assumed for records missing one.
const DEFAULT_CONTENT_TYPE: &str = "video/mp4";

/// Client-facing projection of a stored video: the record fields plus
/// the derived `url`. Never persisted.
#[derive(Debug, Serialize)]
pub struct VideoResponse {
    pub id: String,
    pub title: String,
    pub description: Option<String>,
    pub filename: String,
    pub url: String,
    pub content_type: String,
    pub size_bytes: Option<i64>,
    pub created_at: Option<String>,
}

impl VideoResponse {
    pub fn from_video(video: Video, base_url: Option<&str>) -> Self {
        let url = links::upload_url(base_url, &video.filename);
        Self {
            id: video.id.to_string(),
            title: video.title.unwrap_or_else(|| DEFAULT_TITLE.to_string()),
            description: video.description,
            filename: video.filename,
            url,
            content_type: video
                .content_type
                .unwrap_or_else(|| DEFAULT_CONTENT_TYPE.to_string()),
            size_bytes: video.size_bytes,
            created_at: video.created_at.map(|ts| ts.to_rfc3339()),
        }
    }
}
