use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum_test::TestServer;
use chrono::Utc;
use tempfile::TempDir;
use uuid::Uuid;

use video_service::{
    adapters::state::AppState,
    application::{
        dto::video_dto::NewVideoDTO, error::ApplicationError,
        repositories::video_repository::VideoRepository, services::BlobStore,
    },
    domain::models::video::Video,
    services::LocalBlobStore,
};

/// In-memory stand-in for the metadata store, assigning `id` and
/// `created_at` on insert the way the real store does.
pub struct InMemoryVideoRepository {
    videos: Mutex<Vec<Video>>,
    fail: bool,
}

impl InMemoryVideoRepository {
    pub fn new() -> Self {
        Self {
            videos: Mutex::new(Vec::new()),
            fail: false,
        }
    }

    /// A repository whose every operation fails, for diagnostics tests.
    pub fn failing() -> Self {
        Self {
            videos: Mutex::new(Vec::new()),
            fail: true,
        }
    }

    pub fn record_count(&self) -> usize {
        self.videos.lock().unwrap().len()
    }

    /// Pushes a record directly, bypassing the upload path.
    pub fn insert_record(&self, index: usize) {
        self.videos.lock().unwrap().push(Video {
            id: Uuid::new_v4(),
            title: Some(format!("clip {}", index)),
            description: None,
            filename: format!("clip_{}.mp4", index),
            content_type: Some("video/mp4".to_string()),
            size_bytes: Some(1),
            created_at: Some(Utc::now()),
        });
    }
}

#[async_trait]
impl VideoRepository for InMemoryVideoRepository {
    async fn create_video(&self, video: NewVideoDTO) -> Result<Video, ApplicationError> {
        if self.fail {
            return Err(ApplicationError::DatabaseError("store offline".to_string()));
        }
        let record = Video {
            id: Uuid::new_v4(),
            title: Some(video.title),
            description: video.description,
            filename: video.filename,
            content_type: Some(video.content_type),
            size_bytes: Some(video.size_bytes),
            created_at: Some(Utc::now()),
        };
        self.videos.lock().unwrap().push(record.clone());
        Ok(record)
    }

    async fn list_videos(&self, limit: i64) -> Result<Vec<Video>, ApplicationError> {
        if self.fail {
            return Err(ApplicationError::DatabaseError("store offline".to_string()));
        }
        let videos = self.videos.lock().unwrap();
        Ok(videos.iter().rev().take(limit as usize).cloned().collect())
    }

    async fn list_collections(&self, limit: i64) -> Result<Vec<String>, ApplicationError> {
        if self.fail {
            return Err(ApplicationError::DatabaseError("store offline".to_string()));
        }
        Ok(vec!["videos".to_string()]
            .into_iter()
            .take(limit as usize)
            .collect())
    }
}

pub struct TestApp {
    pub server: TestServer,
    pub repo: Arc<InMemoryVideoRepository>,
    pub upload_dir: TempDir,
}

pub async fn setup() -> TestApp {
    setup_with(InMemoryVideoRepository::new(), None).await
}

pub async fn setup_with_base_url(base_url: &str) -> TestApp {
    setup_with(InMemoryVideoRepository::new(), Some(base_url.to_string())).await
}

pub async fn setup_failing() -> TestApp {
    setup_with(InMemoryVideoRepository::failing(), None).await
}

async fn setup_with(repo: InMemoryVideoRepository, public_base_url: Option<String>) -> TestApp {
    let upload_dir = tempfile::tempdir().expect("failed to create temp upload dir");
    let repo = Arc::new(repo);
    let blob_store = LocalBlobStore::new(upload_dir.path())
        .await
        .expect("failed to create blob store");

    let app_state = AppState {
        video_repository: repo.clone() as Arc<dyn VideoRepository>,
        blob_store: Arc::new(blob_store) as Arc<dyn BlobStore>,
        public_base_url,
    };

    let server = TestServer::new(video_service::router(app_state, upload_dir.path()))
        .expect("failed to start test server");

    TestApp {
        server,
        repo,
        upload_dir,
    }
}
