use axum::response::{IntoResponse, Response};
use axum_helpers::AppError;
use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Error)]
pub enum PointError {
    #[error("Point not found: {0}")]
    NotFound(Uuid),

    #[error("Unknown item ids: {0:?}")]
    UnknownItems(Vec<i32>),

    #[error("Invalid input: {0}")]
    Validation(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

pub type PointResult<T> = Result<T, PointError>;

/// Convert PointError to AppError for standardized error responses
impl From<PointError> for AppError {
    fn from(err: PointError) -> Self {
        match err {
            PointError::NotFound(id) => AppError::NotFound(format!("Point {} not found", id)),
            PointError::UnknownItems(ids) => {
                AppError::BadRequest(format!("Unknown item ids: {:?}", ids))
            }
            PointError::Validation(msg) => AppError::BadRequest(msg),
            PointError::Internal(msg) => AppError::InternalServerError(msg),
        }
    }
}

impl IntoResponse for PointError {
    fn into_response(self) -> Response {
        let app_error: AppError = self.into();
        app_error.into_response()
    }
}
