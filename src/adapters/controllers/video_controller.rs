use axum::{
    extract::{Multipart, State},
    http::StatusCode,
    Json,
};
use chrono::Utc;
use tracing::{info, warn};

use crate::{
    adapters::{dto::video_dto::VideoResponse, state::AppState},
    application::{
        dto::video_dto::NewVideoDTO,
        error::ApplicationError,
        validation::{validate_content_type, validate_title},
    },
    domain::filename,
};

/// Fixed cap on the listing page size.
const MAX_LIST_LIMIT: i64 = 100;

pub struct VideoController;

impl VideoController {
    /// POST /api/videos
    /// Multipart form: `title` (required), `description` (optional),
    /// `file` (required, declared `video/*` content type).
    pub async fn upload_video(
        State(app_state): State<AppState>,
        mut multipart: Multipart,
    ) -> Result<(StatusCode, Json<VideoResponse>), ApplicationError> {
        let mut title: Option<String> = None;
        let mut description: Option<String> = None;
        let mut file_bytes: Option<Vec<u8>> = None;
        let mut original_filename: Option<String> = None;
        let mut content_type: Option<String> = None;

        while let Some(field) = multipart.next_field().await.map_err(|e| {
            warn!("Invalid multipart data: {}", e);
            ApplicationError::BadRequest("Invalid request format".to_string())
        })? {
            let name = field.name().unwrap_or("").to_string();

            match name.as_str() {
                "title" => {
                    title = Some(field.text().await.map_err(|e| {
                        warn!("Invalid title field: {}", e);
                        ApplicationError::BadRequest("Invalid request data".to_string())
                    })?);
                }
                "description" => {
                    description = Some(field.text().await.map_err(|e| {
                        warn!("Invalid description field: {}", e);
                        ApplicationError::BadRequest("Invalid request data".to_string())
                    })?);
                }
                "file" => {
                    // Metadata must be read off the field before the body
                    // consumes it.
                    original_filename = field.file_name().map(|s| s.to_string());
                    content_type = field.content_type().map(|s| s.to_string());
                    file_bytes = Some(
                        field
                            .bytes()
                            .await
                            .map_err(|e| {
                                warn!("Cannot read file bytes: {}", e);
                                ApplicationError::BadRequest("Invalid file data".to_string())
                            })?
                            .to_vec(),
                    );
                }
                _ => {}
            }
        }

        let title = title.ok_or_else(|| {
            warn!("Missing required 'title' field in upload");
            ApplicationError::BadRequest("Missing required field 'title'".to_string())
        })?;
        let file_bytes = file_bytes.ok_or_else(|| {
            warn!("Missing required 'file' field in upload");
            ApplicationError::BadRequest("Missing required field 'file'".to_string())
        })?;
        let content_type = content_type.ok_or_else(|| {
            warn!("File part carries no content type");
            ApplicationError::BadRequest("Only video files are allowed".to_string())
        })?;

        // All validation happens before anything touches disk or the store.
        validate_content_type(&content_type)?;
        validate_title(&title)?;

        let stored_name =
            filename::storage_name(original_filename.as_deref().unwrap_or(""), Utc::now());

        let size_bytes = app_state.blob_store.save(&stored_name, &file_bytes).await?;

        let video = app_state
            .video_repository
            .create_video(NewVideoDTO {
                title,
                description,
                filename: stored_name.clone(),
                content_type,
                size_bytes: size_bytes as i64,
            })
            .await?;

        info!("Stored video '{}' ({} bytes)", stored_name, size_bytes);

        Ok((
            StatusCode::CREATED,
            Json(VideoResponse::from_video(
                video,
                app_state.public_base_url.as_deref(),
            )),
        ))
    }

    /// GET /api/videos
    pub async fn list_videos(
        State(app_state): State<AppState>,
    ) -> Result<Json<Vec<VideoResponse>>, ApplicationError> {
        let videos = app_state
            .video_repository
            .list_videos(MAX_LIST_LIMIT)
            .await?;

        let base_url = app_state.public_base_url.as_deref();
        let responses = videos
            .into_iter()
            .map(|video| VideoResponse::from_video(video, base_url))
            .collect();

        Ok(Json(responses))
    }
}
