use crate::{patch::PatchError, services::ServiceError};
use axum::{
    extract::rejection::{BytesRejection, JsonRejection, PathRejection},
    http, response, Json,
};
use serde_json::json;
use std::{error, fmt};

#[derive(Debug)]
pub enum AppError {
    BadRequest(String),
    NotFound(String),
    PayloadTooLarge(String),
    UnsupportedMediaType(String),
    PatchFailed(PatchError),
    Internal(anyhow::Error),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::BadRequest(msg) => write!(f, "Bad request: {}", msg),
            AppError::NotFound(msg) => write!(f, "Not found: {}", msg),
            AppError::PayloadTooLarge(msg) => write!(f, "Payload too large: {}", msg),
            AppError::UnsupportedMediaType(msg) => write!(f, "Unsupported media type: {}", msg),
            AppError::PatchFailed(err) => write!(f, "Patch failed: {}", err),
            AppError::Internal(err) => write!(f, "Internal error: {}", err),
        }
    }
}

impl error::Error for AppError {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match self {
            AppError::PatchFailed(err) => Some(err),
            AppError::Internal(err) => Some(&**err),
            _ => None,
        }
    }
}

impl From<ServiceError> for AppError {
    fn from(err: ServiceError) -> Self {
        match err {
            ServiceError::NotFound(_) => AppError::not_found(err.to_string()),
            ServiceError::InvalidBody(parse_err) => AppError::bad_request(parse_err.to_string()),
            // Serializing our own record is not the client's fault.
            ServiceError::PatchFailed(PatchError::Serialize(source)) => AppError::Internal(
                anyhow::Error::new(source).context("Failed to serialize customer"),
            ),
            ServiceError::PatchFailed(patch_err) => AppError::PatchFailed(patch_err),
        }
    }
}

impl From<BytesRejection> for AppError {
    fn from(rejection: BytesRejection) -> Self {
        AppError::from_rejection(rejection.status(), rejection.body_text())
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::from_rejection(rejection.status(), rejection.body_text())
    }
}

impl From<PathRejection> for AppError {
    fn from(rejection: PathRejection) -> Self {
        AppError::from_rejection(rejection.status(), rejection.body_text())
    }
}

impl response::IntoResponse for AppError {
    fn into_response(self) -> response::Response {
        let (status, error_type) = match &self {
            AppError::BadRequest(_) => (http::StatusCode::BAD_REQUEST, "bad_request"),
            AppError::NotFound(_) => (http::StatusCode::NOT_FOUND, "not_found"),
            AppError::PayloadTooLarge(_) => {
                (http::StatusCode::PAYLOAD_TOO_LARGE, "payload_too_large")
            }
            AppError::UnsupportedMediaType(_) => (
                http::StatusCode::UNSUPPORTED_MEDIA_TYPE,
                "unsupported_media_type",
            ),
            AppError::PatchFailed(err) => {
                tracing::debug!("Patch application failed: {:?}", err);
                (http::StatusCode::UNPROCESSABLE_ENTITY, "patch_failed")
            }
            AppError::Internal(err) => {
                tracing::error!("Internal error: {:?}", err);
                (http::StatusCode::INTERNAL_SERVER_ERROR, "internal_error")
            }
        };

        let message = match self {
            AppError::BadRequest(msg)
            | AppError::NotFound(msg)
            | AppError::PayloadTooLarge(msg)
            | AppError::UnsupportedMediaType(msg) => msg,
            AppError::PatchFailed(err) => err.to_string(),
            AppError::Internal(_) => "An internal error occurred".to_string(),
        };

        let body = Json(json!({
            "error": {
                "type": error_type,
                "message": message,
            }
        }));

        (status, body).into_response()
    }
}

impl AppError {
    pub fn bad_request(msg: impl Into<String>) -> Self {
        AppError::BadRequest(msg.into())
    }

    pub fn not_found(msg: impl Into<String>) -> Self {
        AppError::NotFound(msg.into())
    }

    pub fn unsupported_media_type(msg: impl Into<String>) -> Self {
        AppError::UnsupportedMediaType(msg.into())
    }

    fn from_rejection(status: http::StatusCode, msg: String) -> Self {
        match status {
            http::StatusCode::PAYLOAD_TOO_LARGE => AppError::PayloadTooLarge(msg),
            http::StatusCode::UNSUPPORTED_MEDIA_TYPE => AppError::UnsupportedMediaType(msg),
            _ => AppError::bad_request(msg),
        }
    }
}

#[cfg(test)]
#[path = "errors_tests.rs"]
mod tests;
