//! REST API helpers for communicating with the server.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning an error since these endpoints are
//! only called from the browser.
//!
//! ERROR HANDLING
//! ==============
//! Callers get `Result` outputs with visitor-facing German messages instead
//! of panics, so a failed fetch degrades to an inline message without
//! crashing hydration. Nothing is retried.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use serde::Serialize;
use serde::de::DeserializeOwned;

use site::api::{ApiResponse, MSG_NETWORK, MSG_SERVER_ERROR, NewsletterReceipt, SubmissionReceipt};
use site::blog::{Category, PostCard, PostDetail, PostPage};
use site::query::BlogQuery;
use site::validation::{ContactRequest, FieldErrors, JobApplication, NewsletterSignup};

use super::url;

#[cfg(not(feature = "hydrate"))]
const SERVER_SIDE: &str = "not available on server";

pub const MSG_POSTS_FAILED: &str = "Die Blog-Beiträge konnten nicht geladen werden. Bitte versuchen Sie es später erneut.";
pub const MSG_POST_FAILED: &str = "Der Beitrag konnte nicht geladen werden.";

/// Why a form submission did not go through.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SubmitError {
    /// The server rejected individual fields.
    Invalid(FieldErrors),
    /// Anything else, already phrased for the visitor.
    Failed(String),
}

/// A successful submission: payload plus the server's thank-you text.
#[derive(Clone, Debug, PartialEq)]
pub struct Submitted<T> {
    pub data: T,
    pub message: Option<String>,
}

/// Interpret a decoded envelope for a form submission.
///
/// # Errors
///
/// `Invalid` when the server reported field errors, `Failed` with the
/// server's message (or a generic one) for every other failure.
pub fn interpret_submission<T>(envelope: ApiResponse<T>) -> Result<Submitted<T>, SubmitError> {
    if let Some(errors) = envelope.validation_errors.filter(|e| !e.is_empty()) {
        return Err(SubmitError::Invalid(errors));
    }
    match (envelope.success, envelope.data) {
        (true, Some(data)) => Ok(Submitted { data, message: envelope.message }),
        _ => Err(SubmitError::Failed(envelope.error.unwrap_or_else(|| MSG_SERVER_ERROR.to_owned()))),
    }
}

/// Map a post lookup to found / not found / failed.
///
/// # Errors
///
/// Returns the visitor-facing message for transport and server failures.
pub fn interpret_post(fetched: Result<(u16, ApiResponse<PostDetail>), String>) -> Result<Option<PostDetail>, String> {
    let failed = |e: &str| {
        log_failure("blog post", e);
        MSG_POST_FAILED.to_owned()
    };
    match fetched {
        Err(e) => Err(failed(&e)),
        Ok((404, _)) => Ok(None),
        Ok((_, envelope)) => envelope.into_result().map(Some).map_err(|e| failed(&e)),
    }
}

/// Message for a response whose body was not an envelope at all.
#[must_use]
pub fn undecodable_message(status: u16) -> String {
    if status >= 500 { MSG_SERVER_ERROR.to_owned() } else { format!("{MSG_SERVER_ERROR} ({status})") }
}

// =============================================================================
// TRANSPORT
// =============================================================================

#[cfg(feature = "hydrate")]
async fn decode<T: DeserializeOwned>(resp: gloo_net::http::Response) -> Result<ApiResponse<T>, String> {
    let status = resp.status();
    resp.json::<ApiResponse<T>>()
        .await
        .map_err(|_| undecodable_message(status))
}

/// GET an envelope. Returns the HTTP status alongside it.
async fn get_json<T: DeserializeOwned>(path: &str) -> Result<(u16, ApiResponse<T>), String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(path)
            .send()
            .await
            .map_err(|_| MSG_NETWORK.to_owned())?;
        let status = resp.status();
        Ok((status, decode(resp).await?))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = path;
        Err(SERVER_SIDE.to_owned())
    }
}

async fn post_form<B: Serialize, T: DeserializeOwned>(path: &str, body: &B) -> Result<Submitted<T>, SubmitError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post(path)
            .json(body)
            .map_err(|e| SubmitError::Failed(e.to_string()))?
            .send()
            .await
            .map_err(|_| SubmitError::Failed(MSG_NETWORK.to_owned()))?;
        let envelope = decode::<T>(resp).await.map_err(SubmitError::Failed)?;
        interpret_submission(envelope)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (path, body);
        Err(SubmitError::Failed(SERVER_SIDE.to_owned()))
    }
}

// =============================================================================
// BLOG
// =============================================================================

/// Fetch one listing page for `query`.
///
/// # Errors
///
/// Returns the message to show in place of the list.
pub async fn fetch_posts(query: BlogQuery) -> Result<PostPage, String> {
    get_json::<PostPage>(&url::blog_api_path(&query))
        .await
        .and_then(|(_, envelope)| envelope.into_result())
        .map_err(|e| {
            log_failure("blog listing", &e);
            MSG_POSTS_FAILED.to_owned()
        })
}

/// Fetch all categories. Failures yield an empty list; the filter bar
/// simply shows no chips.
pub async fn fetch_categories() -> Vec<Category> {
    get_json::<Vec<Category>>("/api/blog/categories")
        .await
        .and_then(|(_, envelope)| envelope.into_result())
        .unwrap_or_default()
}

/// Fetch a single post. `Ok(None)` means the post does not exist.
///
/// # Errors
///
/// Returns the message to show when the post could not be loaded.
pub async fn fetch_post(slug: String) -> Result<Option<PostDetail>, String> {
    let fetched = get_json::<PostDetail>(&url::post_api_path(&slug)).await;
    interpret_post(fetched)
}

/// Related posts for the sidebar. Failures yield an empty list.
pub async fn fetch_related(slug: String) -> Vec<PostCard> {
    get_json::<Vec<PostCard>>(&url::related_api_path(&slug))
        .await
        .and_then(|(_, envelope)| envelope.into_result())
        .unwrap_or_default()
}

// =============================================================================
// FORMS
// =============================================================================

/// `POST /api/contact`
///
/// # Errors
///
/// See [`SubmitError`].
pub async fn submit_contact(request: ContactRequest) -> Result<Submitted<SubmissionReceipt>, SubmitError> {
    post_form("/api/contact", &request).await
}

/// `POST /api/newsletter`
///
/// # Errors
///
/// See [`SubmitError`].
pub async fn subscribe_newsletter(signup: NewsletterSignup) -> Result<Submitted<NewsletterReceipt>, SubmitError> {
    post_form("/api/newsletter", &signup).await
}

/// `POST /api/applications`
///
/// # Errors
///
/// See [`SubmitError`].
pub async fn submit_application(application: JobApplication) -> Result<Submitted<SubmissionReceipt>, SubmitError> {
    post_form("/api/applications", &application).await
}

fn log_failure(what: &str, error: &str) {
    #[cfg(feature = "hydrate")]
    log::warn!("{what} request failed: {error}");
    #[cfg(not(feature = "hydrate"))]
    let _ = (what, error);
}
