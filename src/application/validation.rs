use crate::application::error::ApplicationError;

/// Title must be non-empty after trimming.
pub fn validate_title(title: &str) -> Result<(), ApplicationError> {
    if title.trim().is_empty() {
        return Err(ApplicationError::BadRequest(
            "Title must not be empty".to_string(),
        ));
    }
    Ok(())
}

/// Only files declared with a `video/` MIME type are accepted.
pub fn validate_content_type(content_type: &str) -> Result<(), ApplicationError> {
    if !content_type.starts_with("video/") {
        return Err(ApplicationError::BadRequest(
            "Only video files are allowed".to_string(),
        ));
    }
    Ok(())
}
