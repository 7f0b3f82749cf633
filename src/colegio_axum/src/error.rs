use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use colegio_application::{AccountServiceError, ErrorKind};
use colegio_core::{EmailParseError, PasswordError};
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("{0}")]
    Validation(String),

    #[error("{0}")]
    Conflict(String),

    #[error("{0}")]
    NotFound(String),

    #[error("Missing authenticated user")]
    Unauthenticated,

    #[error("Unexpected error")]
    UnexpectedError(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status_code = match self {
            ApiError::InvalidInput(_) | ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::Conflict(_) => StatusCode::CONFLICT,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Unauthenticated => StatusCode::UNAUTHORIZED,
            ApiError::UnexpectedError(ref detail) => {
                tracing::error!(%detail, "Request failed unexpectedly");
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        let body = Json(ErrorResponse {
            error: self.to_string(),
        });

        (status_code, body).into_response()
    }
}

impl From<AccountServiceError> for ApiError {
    fn from(error: AccountServiceError) -> Self {
        match (error.kind(), &error) {
            (_, AccountServiceError::DuplicateEmail) => ApiError::Conflict(error.to_string()),
            (ErrorKind::Validation, _) => ApiError::Validation(error.to_string()),
            (ErrorKind::NotFound, _) => ApiError::NotFound(error.to_string()),
            (ErrorKind::Fatal, _) => ApiError::UnexpectedError(error.to_string()),
        }
    }
}

impl From<EmailParseError> for ApiError {
    fn from(error: EmailParseError) -> Self {
        ApiError::InvalidInput(error.to_string())
    }
}

impl From<PasswordError> for ApiError {
    fn from(error: PasswordError) -> Self {
        ApiError::InvalidInput(error.to_string())
    }
}
