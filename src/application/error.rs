#[derive(Debug)]
pub enum ApplicationError {
    BadRequest(String),
    DatabaseError(String),
    InternalError(String),
}

impl std::fmt::Display for ApplicationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ApplicationError::BadRequest(msg) => write!(f, "bad request: {}", msg),
            ApplicationError::DatabaseError(msg) => write!(f, "database error: {}", msg),
            ApplicationError::InternalError(msg) => write!(f, "internal error: {}", msg),
        }
    }
}
