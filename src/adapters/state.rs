use axum::extract::FromRef;
use std::sync::Arc;

use crate::application::{
    repositories::video_repository::VideoRepository, services::BlobStore,
};

#[derive(Clone, FromRef)]
pub struct AppState {
    pub video_repository: Arc<dyn VideoRepository>,
    pub blob_store: Arc<dyn BlobStore>,
    /// Optional absolute prefix for generated links; `None` yields
    /// root-relative URLs.
    pub public_base_url: Option<String>,
}
