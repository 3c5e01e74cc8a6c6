use actix_web::{http::StatusCode, ResponseError};

/// Errors surfaced to HTTP callers. The default `ResponseError` body is the
/// `Display` text with a `text/plain` content type.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("{0}")]
    MalformedTodo(#[from] serde_json::Error),
    #[error("Method not allowed")]
    MethodNotAllowed,
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::MalformedTodo(_) => StatusCode::BAD_REQUEST,
            ApiError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
        }
    }
}
