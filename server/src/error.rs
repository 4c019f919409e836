//! HTTP error type for the JSON API.
//!
//! Every failure leaves the server as the shared `ApiResponse` envelope with
//! `success: false`. Upstream details are logged, never sent to visitors.

use axum::Json;
use axum::http::{HeaderValue, StatusCode, header};
use axum::response::{IntoResponse, Response};

use site::api::{ApiResponse, MSG_INVALID_BODY, MSG_RATE_LIMITED, MSG_SERVER_ERROR, MSG_UNAVAILABLE};
use site::validation::FieldErrors;

use crate::rate_limit::RateLimitError;
use crate::services::content::ContentError;
use crate::services::mailer::MailError;
use crate::services::newsletter::NewsletterError;

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("validation failed ({} fields)", .0.len())]
    Invalid(FieldErrors),
    #[error("malformed request body: {0}")]
    BadRequest(String),
    #[error("not found: {0}")]
    NotFound(String),
    #[error(transparent)]
    RateLimited(#[from] RateLimitError),
    #[error("{0} is not configured")]
    Unavailable(&'static str),
    #[error("upstream failure: {0}")]
    Upstream(String),
}

impl From<ContentError> for ApiError {
    fn from(e: ContentError) -> Self {
        Self::Upstream(e.to_string())
    }
}

impl From<MailError> for ApiError {
    fn from(e: MailError) -> Self {
        Self::Upstream(e.to_string())
    }
}

impl From<NewsletterError> for ApiError {
    fn from(e: NewsletterError) -> Self {
        Self::Upstream(e.to_string())
    }
}

impl ApiError {
    #[must_use]
    pub fn status(&self) -> StatusCode {
        match self {
            Self::Invalid(_) | Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::RateLimited(_) => StatusCode::TOO_MANY_REQUESTS,
            Self::Unavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
            Self::Upstream(_) => StatusCode::BAD_GATEWAY,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let retry_after = match &self {
            Self::RateLimited(e) => Some(e.retry_after_secs()),
            _ => None,
        };

        let body = match self {
            Self::Invalid(errors) => ApiResponse::<()>::invalid(errors),
            Self::BadRequest(detail) => {
                tracing::debug!(%detail, "rejected request body");
                ApiResponse::failure(MSG_INVALID_BODY)
            }
            Self::NotFound(what) => ApiResponse::failure(format!("{what} nicht gefunden")),
            Self::RateLimited(e) => {
                tracing::warn!(error = %e, "rate limit hit");
                ApiResponse::failure(MSG_RATE_LIMITED)
            }
            Self::Unavailable(feature) => {
                tracing::warn!(feature, "request for unconfigured backend");
                ApiResponse::failure(MSG_UNAVAILABLE)
            }
            Self::Upstream(detail) => {
                tracing::error!(%detail, "upstream request failed");
                ApiResponse::failure(MSG_SERVER_ERROR)
            }
        };

        let mut response = (status, Json(body)).into_response();
        if let Some(secs) = retry_after {
            response
                .headers_mut()
                .insert(header::RETRY_AFTER, HeaderValue::from(secs));
        }
        response
    }
}

#[cfg(test)]
#[path = "error_test.rs"]
mod tests;
