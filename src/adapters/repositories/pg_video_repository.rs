use async_trait::async_trait;
use sqlx::query_as;

use crate::{
    application::{
        dto::video_dto::{NewVideoDTO, VideoDTO},
        error::ApplicationError,
        repositories::video_repository::VideoRepository,
    },
    domain::models::video::Video,
};

/// Explicit record-kind → table mapping; the table name is never
/// derived from a type name.
pub const VIDEOS_TABLE: &str = "videos";

pub struct PgVideoRepository {
    pool: sqlx::PgPool,
}

impl PgVideoRepository {
    pub fn new(pool: sqlx::PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl VideoRepository for PgVideoRepository {
    async fn create_video(&self, video: NewVideoDTO) -> Result<Video, ApplicationError> {
        let query = format!(
            r#"
            INSERT INTO {VIDEOS_TABLE} (title, description, filename, content_type, size_bytes)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING *
            "#
        );

        let created: VideoDTO = query_as::<_, VideoDTO>(&query)
            .bind(&video.title)
            .bind(&video.description)
            .bind(&video.filename)
            .bind(&video.content_type)
            .bind(video.size_bytes)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| ApplicationError::DatabaseError(e.to_string()))?;

        Ok(created.into())
    }

    async fn list_videos(&self, limit: i64) -> Result<Vec<Video>, ApplicationError> {
        let query = format!(
            "SELECT * FROM {VIDEOS_TABLE} ORDER BY created_at DESC LIMIT $1"
        );

        let rows: Vec<VideoDTO> = query_as::<_, VideoDTO>(&query)
            .bind(limit)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| ApplicationError::DatabaseError(e.to_string()))?;

        Ok(rows.into_iter().map(|dto| dto.into()).collect())
    }

    async fn list_collections(&self, limit: i64) -> Result<Vec<String>, ApplicationError> {
        let query = r#"
            SELECT tablename FROM pg_catalog.pg_tables
            WHERE schemaname = 'public'
            ORDER BY tablename
            LIMIT $1
        "#;

        let rows: Vec<(String,)> = sqlx::query_as(query)
            .bind(limit)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| ApplicationError::DatabaseError(e.to_string()))?;

        Ok(rows.into_iter().map(|(name,)| name).collect())
    }
}
