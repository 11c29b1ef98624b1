use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;
use tracing::{error, warn};
use crate::error::ServiceError;
use super::MessageResponse;

/// Failures at the HTTP boundary.
///
/// Callers only ever see a generic message; the detail goes to the log.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Invalid request body: {0}")]
    InvalidBody(String),
    #[error("Failed to create user: {0}")]
    Create(ServiceError),
    #[error("Failed to list users: {0}")]
    List(ServiceError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            ApiError::InvalidBody(_) => {
                warn!(error = %self, "Rejected create request");
                (StatusCode::BAD_REQUEST, "error creating user")
            }
            ApiError::Create(_) => {
                error!(error = %self, "Create request failed");
                (StatusCode::INTERNAL_SERVER_ERROR, "error creating user")
            }
            ApiError::List(_) => {
                error!(error = %self, "List request failed");
                (StatusCode::INTERNAL_SERVER_ERROR, "error listing users")
            }
        };
        (status, Json(MessageResponse::new(message))).into_response()
    }
}
