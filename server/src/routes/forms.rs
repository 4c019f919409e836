//! Form submission endpoints: contact, newsletter, job applications.
//!
//! DESIGN
//! ======
//! Every handler runs the same pipeline: rate limit by client IP, decode
//! the JSON body, validate with the shared rules from `site::validation`,
//! then hand off to the backend. The rate limit check runs before decoding
//! so malformed floods are throttled too.

use std::net::SocketAddr;

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::extract::{ConnectInfo, FromRequestParts, State};
use axum::http::HeaderMap;
use axum::http::request::Parts;
use uuid::Uuid;

use site::api::{
    ApiResponse, MSG_APPLICATION_SENT, MSG_CONTACT_SENT, MSG_NEWSLETTER_DUPLICATE, MSG_NEWSLETTER_SUBSCRIBED,
    NewsletterReceipt, SubmissionReceipt,
};
use site::validation::{ContactRequest, JobApplication, NewsletterSignup, Validate};

use crate::error::ApiError;
use crate::services::content::{ContactRecord, SubscriberRecord};
use crate::services::mailer;
use crate::state::AppState;

const UNKNOWN_CLIENT: &str = "unknown";

// =============================================================================
// CLIENT IP EXTRACTOR
// =============================================================================

/// Client address used as the rate limit key.
///
/// Forwarding headers are only read when `AppState::trusted_proxies` says a
/// proxy sits in front of the server; otherwise any client could pick its own
/// key. Never rejects.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientIp(pub String);

impl FromRequestParts<AppState> for ClientIp {
    type Rejection = std::convert::Infallible;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, Self::Rejection> {
        let peer = parts
            .extensions
            .get::<ConnectInfo<SocketAddr>>()
            .map(|ConnectInfo(addr)| addr.ip().to_string());
        Ok(Self(resolve_client_ip(&parts.headers, peer, state.trusted_proxies)))
    }
}

/// Pick the client address given `trusted_proxies` proxy hops.
///
/// Each trusted proxy appends the address it received the request from to
/// `X-Forwarded-For`, so the client is the `trusted_proxies`-th entry from
/// the right. Entries further left are client supplied and ignored. With a
/// proxy but no forwarded list, `X-Real-IP` is used; without a proxy only
/// the socket peer counts.
#[must_use]
pub fn resolve_client_ip(headers: &HeaderMap, peer: Option<String>, trusted_proxies: usize) -> String {
    if trusted_proxies > 0 {
        let header = |name: &str| {
            headers
                .get(name)
                .and_then(|v| v.to_str().ok())
                .map(str::trim)
                .filter(|v| !v.is_empty())
        };

        let hops: Vec<&str> = header("x-forwarded-for")
            .map(|v| v.split(',').map(str::trim).filter(|h| !h.is_empty()).collect())
            .unwrap_or_default();
        let forwarded = hops
            .len()
            .checked_sub(trusted_proxies)
            .map_or_else(|| hops.first(), |index| hops.get(index));
        if let Some(ip) = forwarded.copied().or_else(|| header("x-real-ip")) {
            return ip.to_owned();
        }
    }
    peer.unwrap_or_else(|| UNKNOWN_CLIENT.to_owned())
}

// =============================================================================
// HANDLERS
// =============================================================================

/// `POST /api/contact`
pub async fn submit_contact(
    State(state): State<AppState>,
    ClientIp(client): ClientIp,
    body: Result<Json<ContactRequest>, JsonRejection>,
) -> Result<Json<ApiResponse<SubmissionReceipt>>, ApiError> {
    let request = accept(&state, &client, body)?;
    let mail = state.mail()?;
    let reference = new_reference("K");

    if let Some(content) = &state.content {
        content
            .insert_contact_request(&ContactRecord::new(&request, &reference))
            .await?;
    }

    mail.mailer
        .send(mailer::contact_notification(&mail.contact_inbox, &request, &reference))
        .await?;

    if let Err(e) = mail.mailer.send(mailer::contact_confirmation(&request, &reference)).await {
        tracing::warn!(error = %e, %reference, "confirmation mail not delivered");
    }

    tracing::info!(%reference, %client, "contact request received");
    Ok(Json(ApiResponse::ok(SubmissionReceipt { reference }).with_message(MSG_CONTACT_SENT)))
}

/// `POST /api/newsletter`
pub async fn subscribe_newsletter(
    State(state): State<AppState>,
    ClientIp(client): ClientIp,
    body: Result<Json<NewsletterSignup>, JsonRejection>,
) -> Result<Json<ApiResponse<NewsletterReceipt>>, ApiError> {
    let signup = accept(&state, &client, body)?;
    let list = state.newsletter()?;

    if let Some(content) = &state.content {
        match content.is_newsletter_subscriber(&signup.email).await {
            Ok(true) => {
                tracing::info!(%client, "newsletter signup for existing subscriber");
                return Ok(Json(
                    ApiResponse::ok(NewsletterReceipt { already_subscribed: true })
                        .with_message(MSG_NEWSLETTER_DUPLICATE),
                ));
            }
            Ok(false) => {}
            Err(e) => tracing::warn!(error = %e, "subscriber lookup failed, continuing with provider"),
        }
    }

    list.subscribe(&signup).await?;

    if let Some(content) = &state.content {
        if let Err(e) = content.insert_newsletter_subscriber(&SubscriberRecord::new(&signup)).await {
            tracing::warn!(error = %e, "subscriber row not stored");
        }
    }

    if let Some(mail) = &state.mail {
        if let Err(e) = mail.mailer.send(mailer::newsletter_confirmation(&signup)).await {
            tracing::warn!(error = %e, "newsletter confirmation not delivered");
        }
    }

    tracing::info!(%client, "newsletter signup");
    Ok(Json(
        ApiResponse::ok(NewsletterReceipt { already_subscribed: false }).with_message(MSG_NEWSLETTER_SUBSCRIBED),
    ))
}

/// `POST /api/applications`
pub async fn submit_application(
    State(state): State<AppState>,
    ClientIp(client): ClientIp,
    body: Result<Json<JobApplication>, JsonRejection>,
) -> Result<Json<ApiResponse<SubmissionReceipt>>, ApiError> {
    let application = accept(&state, &client, body)?;
    let mail = state.mail()?;
    let reference = new_reference("B");

    mail.mailer
        .send(mailer::application_notification(&mail.careers_inbox, &application, &reference))
        .await?;

    tracing::info!(%reference, %client, position = %application.position, "job application received");
    Ok(Json(ApiResponse::ok(SubmissionReceipt { reference }).with_message(MSG_APPLICATION_SENT)))
}

// =============================================================================
// HELPERS
// =============================================================================

/// Rate limit, decode and validate a form body.
fn accept<T: Validate>(
    state: &AppState,
    client: &str,
    body: Result<Json<T>, JsonRejection>,
) -> Result<T, ApiError> {
    state.rate_limiter.check_and_record(client)?;
    let Json(form) = body.map_err(|e| ApiError::BadRequest(e.body_text()))?;
    form.validate().map_err(ApiError::Invalid)?;
    Ok(form)
}

/// Short human-readable submission reference, e.g. `K-3F9A1C2B`.
fn new_reference(prefix: &str) -> String {
    let id = Uuid::new_v4().simple().to_string();
    format!("{prefix}-{}", id[..8].to_uppercase())
}

#[cfg(test)]
#[path = "forms_test.rs"]
mod tests;
