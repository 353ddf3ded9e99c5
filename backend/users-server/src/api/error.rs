//! REST API error types
//!
//! Every error renders as `{status, message[, errors]}` with the HTTP status
//! matching its category.

use crate::{MSG_REQUEST_CANCELLED, MSG_UNEXPECTED_ERROR};

use users_core::CoreError;

use std::panic::Location;

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use error_location::ErrorLocation;
use serde::Serialize;
use thiserror::Error;

pub const STATUS_INVALID_DATA: &str = "InvalidData";
pub const STATUS_USER_NOT_FOUND: &str = "UserNotFound";
pub const STATUS_SERVER_ERROR: &str = "ServerError";

/// JSON error response body
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub status: &'static str,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub errors: Option<Vec<String>>,
}

/// API errors with associated HTTP status codes
#[derive(Debug, Error)]
pub enum ApiError {
    /// Malformed request or failed validation (400)
    #[error("Invalid data: {message} {location}")]
    InvalidData {
        message: String,
        errors: Option<Vec<String>>,
        location: ErrorLocation,
    },

    /// Unknown user id (400)
    #[error("User not found: {message} {location}")]
    UserNotFound {
        message: String,
        location: ErrorLocation,
    },

    /// Persistence or infrastructure failure (500)
    #[error("Server error: {message} {location}")]
    ServerError {
        message: String,
        location: ErrorLocation,
    },
}

impl ApiError {
    #[track_caller]
    pub fn invalid_data<S: Into<String>>(message: S) -> Self {
        ApiError::InvalidData {
            message: message.into(),
            errors: None,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn validation<S: Into<String>>(message: S, errors: Vec<String>) -> Self {
        ApiError::InvalidData {
            message: message.into(),
            errors: Some(errors),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn user_not_found<S: Into<String>>(message: S) -> Self {
        ApiError::UserNotFound {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn server_error<S: Into<String>>(message: S) -> Self {
        ApiError::ServerError {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::InvalidData { .. } | ApiError::UserNotFound { .. } => {
                StatusCode::BAD_REQUEST
            }
            ApiError::ServerError { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        if status.is_server_error() {
            log::error!("{}", self);
        } else {
            log::warn!("{}", self);
        }

        let body = match self {
            ApiError::InvalidData {
                message, errors, ..
            } => ErrorResponse {
                status: STATUS_INVALID_DATA,
                message,
                errors,
            },
            ApiError::UserNotFound { message, .. } => ErrorResponse {
                status: STATUS_USER_NOT_FOUND,
                message,
                errors: None,
            },
            ApiError::ServerError { message, .. } => ErrorResponse {
                status: STATUS_SERVER_ERROR,
                message,
                errors: None,
            },
        };

        (status, Json(body)).into_response()
    }
}

/// Core failures never expose internal details to clients
impl From<CoreError> for ApiError {
    #[track_caller]
    fn from(e: CoreError) -> Self {
        log::error!("Update workflow failed: {}", e);

        let message = if e.is_cancelled() {
            MSG_REQUEST_CANCELLED
        } else {
            MSG_UNEXPECTED_ERROR
        };

        ApiError::ServerError {
            message: message.to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = std::result::Result<T, ApiError>;
