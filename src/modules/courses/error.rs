use catalog_http::error::AppError;
use serde_json::json;
use thiserror::Error;
use uuid::Uuid;

/// Failures a course request can run into
#[derive(Debug, Error)]
pub enum CourseError {
    #[error("invalid course id '{0}'")]
    InvalidId(String),

    #[error("request body is required")]
    MissingBody,

    #[error("malformed course json: {0}")]
    MalformedJson(#[source] serde_json::Error),

    #[error("course name must not be empty")]
    EmptyName,

    #[error("course not found with id {0}")]
    NotFound(Uuid),
}

impl From<CourseError> for AppError {
    fn from(err: CourseError) -> Self {
        let message = err.to_string();
        match err {
            CourseError::InvalidId(_) => AppError::bad_request(message).with_code("invalid_id"),
            CourseError::MissingBody => AppError::bad_request(message).with_code("missing_body"),
            CourseError::MalformedJson(_) => {
                AppError::bad_request(message).with_code("malformed_json")
            }
            CourseError::EmptyName => AppError::validation(
                vec![json!({"field": "name", "error": "required"})],
                message,
            ),
            CourseError::NotFound(_) => AppError::not_found(message),
        }
    }
}
