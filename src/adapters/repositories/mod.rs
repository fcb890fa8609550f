mod pg_video_repository;

pub use pg_video_repository::{PgVideoRepository, VIDEOS_TABLE};
