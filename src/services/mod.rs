mod error;
mod local_blob_store;

pub use error::StorageError;
pub use local_blob_store::LocalBlobStore;
