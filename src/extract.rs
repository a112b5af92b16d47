//! Request extractors that map framework rejections onto [`AppError`].

use crate::{
    errors::AppError,
    patch::negotiation::{PatchFormat, APPLICATION_JSON, APPLICATION_JSON_PATCH},
};
use axum::{
    body::Bytes,
    extract::{FromRequest, FromRequestParts, Request},
    http::header,
};

/// JSON body extractor whose rejections use the service error envelope.
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct AppJson<T>(pub T);

/// Path parameter extractor whose rejections use the service error envelope.
#[derive(Debug, FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(AppError))]
pub struct AppPath<T>(pub T);

/// A PATCH body whose media type has been negotiated but not yet parsed.
///
/// The body is buffered whole. Parsing is left to the caller so it can check that the
/// target exists first.
#[derive(Debug, Clone)]
pub struct PatchRequest {
    pub format: PatchFormat,
    pub body: Bytes,
}

impl PatchRequest {
    pub fn new(format: PatchFormat, body: impl Into<Bytes>) -> Self {
        Self {
            format,
            body: body.into(),
        }
    }
}

impl<S> FromRequest<S> for PatchRequest
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let content_type = req
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .unwrap_or_default();

        let format = PatchFormat::from_content_type(content_type).ok_or_else(|| {
            AppError::unsupported_media_type(format!(
                "Expected '{}' or '{}', got '{}'",
                APPLICATION_JSON_PATCH, APPLICATION_JSON, content_type
            ))
        })?;

        let body = Bytes::from_request(req, state).await?;

        Ok(Self { format, body })
    }
}

#[cfg(test)]
#[path = "extract_tests.rs"]
mod tests;
