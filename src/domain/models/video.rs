use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A stored video record. Written once at upload time, never updated or
/// deleted by this service. Optional fields may be absent for documents
/// written into the collection by other tools.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Video {
    pub id: Uuid,
    pub title: Option<String>,
    pub description: Option<String>,
    pub filename: String,
    pub content_type: Option<String>,
    pub size_bytes: Option<i64>,
    pub created_at: Option<DateTime<Utc>>,
}
