use thiserror::Error;

use crate::application::error::ApplicationError;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Invalid blob name: {0}")]
    InvalidName(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<StorageError> for ApplicationError {
    fn from(error: StorageError) -> Self {
        ApplicationError::InternalError(format!("Storage error: {}", error))
    }
}
