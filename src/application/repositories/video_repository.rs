use async_trait::async_trait;

use crate::{
    application::{dto::video_dto::NewVideoDTO, error::ApplicationError},
    domain::models::video::Video,
};

#[async_trait]
pub trait VideoRepository: Send + Sync {
    /// Inserts a record and returns it with the store-assigned `id` and
    /// `created_at`.
    async fn create_video(&self, video: NewVideoDTO) -> Result<Video, ApplicationError>;

    /// Returns up to `limit` records, most recent first.
    async fn list_videos(&self, limit: i64) -> Result<Vec<Video>, ApplicationError>;

    /// Samples up to `limit` collection names, for the diagnostics
    /// endpoint.
    async fn list_collections(&self, limit: i64) -> Result<Vec<String>, ApplicationError>;
}
