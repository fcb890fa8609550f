use std::path::PathBuf;

use async_trait::async_trait;
use tokio::{fs, io::AsyncWriteExt};

use crate::{
    application::{error::ApplicationError, services::BlobStore},
    services::error::StorageError,
};

/// Blob store backed by a flat local directory. Files are served from
/// the same directory by the static `/uploads` route.
pub struct LocalBlobStore {
    base_path: PathBuf,
}

impl LocalBlobStore {
    /// Creates the store, making sure the directory exists.
    pub async fn new(base_path: impl Into<PathBuf>) -> Result<Self, StorageError> {
        let base_path = base_path.into();
        fs::create_dir_all(&base_path).await?;
        Ok(Self { base_path })
    }

    /// Filenames are generated by the upload handler and never contain
    /// separators, but reject traversal sequences outright.
    fn blob_path(&self, filename: &str) -> Result<PathBuf, StorageError> {
        if filename.is_empty()
            || filename.contains("..")
            || filename.contains('/')
            || filename.contains('\\')
        {
            return Err(StorageError::InvalidName(filename.to_string()));
        }
        Ok(self.base_path.join(filename))
    }
}

#[async_trait]
impl BlobStore for LocalBlobStore {
    async fn save(&self, filename: &str, content: &[u8]) -> Result<u64, ApplicationError> {
        let path = self.blob_path(filename)?;

        let mut file = fs::File::create(&path).await.map_err(StorageError::Io)?;
        file.write_all(content).await.map_err(StorageError::Io)?;
        file.flush().await.map_err(StorageError::Io)?;

        // Size is read back from disk, not taken from the request.
        let written = fs::metadata(&path).await.map_err(StorageError::Io)?.len();
        Ok(written)
    }
}
