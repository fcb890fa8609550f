use async_trait::async_trait;

use crate::application::error::ApplicationError;

#[async_trait]
pub trait BlobStore: Send + Sync {
    /// Writes the full content under `filename` and returns the number
    /// of bytes actually on disk afterwards. Partial writes are errors.
    async fn save(&self, filename: &str, content: &[u8]) -> Result<u64, ApplicationError>;
}
