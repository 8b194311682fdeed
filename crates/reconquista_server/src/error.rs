//! API error type and the domain-error to status-code mapping.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use log::error;
use reconquista_core::ServiceError;
use serde::Serialize;

/// JSON body returned for every failed request.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub success: bool,
    pub detail: String,
    pub error_code: &'static str,
}

/// Error carried out of handlers and rendered as status + JSON body.
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub error_code: &'static str,
    pub detail: String,
}

impl ApiError {
    pub fn not_found(detail: impl Into<String>) -> Self {
        Self {
            status: StatusCode::NOT_FOUND,
            error_code: "not_found",
            detail: detail.into(),
        }
    }

    pub fn conflict(error_code: &'static str, detail: impl Into<String>) -> Self {
        Self {
            status: StatusCode::CONFLICT,
            error_code,
            detail: detail.into(),
        }
    }

    pub fn internal(detail: impl Into<String>) -> Self {
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            error_code: "store_error",
            detail: detail.into(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = ErrorBody {
            success: false,
            detail: self.detail,
            error_code: self.error_code,
        };
        (self.status, Json(body)).into_response()
    }
}

impl From<ServiceError> for ApiError {
    fn from(err: ServiceError) -> Self {
        match &err {
            ServiceError::CardNotFound(_)
            | ServiceError::RewardNotFound(_)
            | ServiceError::SongNotFound(_) => Self::not_found(err.to_string()),
            ServiceError::AlreadyClaimed(_) => {
                Self::conflict("already_claimed", err.to_string())
            }
            ServiceError::InsufficientStars { .. } => {
                Self::conflict("insufficient_stars", err.to_string())
            }
            ServiceError::Repo(repo_err) => {
                error!(
                    "event=request_error module=server status=error error_code=store_error error={repo_err}"
                );
                Self::internal(err.to_string())
            }
        }
    }
}
