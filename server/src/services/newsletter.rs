//! Newsletter list subscriptions via the Brevo contacts API.
//!
//! SYSTEM CONTEXT
//! ==============
//! A signup creates or updates the Brevo contact and adds it to the
//! configured list. Contacts Brevo already knows (from an earlier contact
//! form, say) are updated in place, so they still land on the list. Whether
//! someone is already a subscriber is decided by the subscriber table in the
//! content store, not by Brevo.

use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use site::validation::NewsletterSignup;

use crate::config::BrevoConfig;

const BREVO_CONTACTS_URL: &str = "https://api.brevo.com/v3/contacts";
const SIGNUP_SOURCE: &str = "Website";

#[derive(Debug, thiserror::Error)]
pub enum NewsletterError {
    #[error("newsletter request failed: {0}")]
    Request(String),
    #[error("newsletter provider returned {status}: {message}")]
    Status { status: u16, message: String },
    #[error("http client build failed: {0}")]
    HttpClientBuild(String),
}

#[async_trait]
pub trait NewsletterList: Send + Sync {
    /// Put the address on the newsletter list, creating the contact if needed.
    async fn subscribe(&self, signup: &NewsletterSignup) -> Result<(), NewsletterError>;
}

// =============================================================================
// WIRE TYPES
// =============================================================================

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateContact {
    pub email: String,
    pub attributes: ContactAttributes,
    pub list_ids: Vec<i64>,
    pub update_enabled: bool,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub struct ContactAttributes {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub firstname: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lastname: Option<String>,
    pub source: &'static str,
}

#[derive(Debug, Default, Deserialize)]
struct BrevoErrorBody {
    #[serde(default)]
    code: String,
    #[serde(default)]
    message: String,
}

impl CreateContact {
    #[must_use]
    pub fn from_signup(signup: &NewsletterSignup, list_id: i64) -> Self {
        let clean = |v: Option<&str>| v.map(str::trim).filter(|v| !v.is_empty()).map(str::to_owned);
        Self {
            email: signup.email.trim().to_lowercase(),
            attributes: ContactAttributes {
                firstname: clean(signup.first_name.as_deref()),
                lastname: clean(signup.last_name.as_deref()),
                source: SIGNUP_SOURCE,
            },
            list_ids: vec![list_id],
            update_enabled: true,
        }
    }
}

// =============================================================================
// BREVO CLIENT
// =============================================================================

pub struct BrevoClient {
    http: reqwest::Client,
    api_key: String,
    list_id: i64,
}

impl BrevoClient {
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built.
    pub fn new(config: &BrevoConfig, timeout: Duration) -> Result<Self, NewsletterError> {
        let http = super::http_client(timeout).map_err(|e| NewsletterError::HttpClientBuild(e.to_string()))?;
        Ok(Self { http, api_key: config.api_key.clone(), list_id: config.list_id })
    }
}

#[async_trait]
impl NewsletterList for BrevoClient {
    async fn subscribe(&self, signup: &NewsletterSignup) -> Result<(), NewsletterError> {
        let body = CreateContact::from_signup(signup, self.list_id);
        let response = self
            .http
            .post(BREVO_CONTACTS_URL)
            .header("api-key", &self.api_key)
            .header("accept", "application/json")
            .json(&body)
            .send()
            .await
            .map_err(|e| NewsletterError::Request(e.to_string()))?;

        let status = response.status().as_u16();
        let text = response
            .text()
            .await
            .map_err(|e| NewsletterError::Request(e.to_string()))?;
        parse_brevo_response(status, &text)
    }
}

/// Map a Brevo create-contact answer. `201` creates a contact, `204`
/// updates a known one; both leave the address on the list.
///
/// # Errors
///
/// Any non-success status, with Brevo's message when it sent one.
pub fn parse_brevo_response(status: u16, body: &str) -> Result<(), NewsletterError> {
    if (200..300).contains(&status) {
        return Ok(());
    }
    let error: BrevoErrorBody = serde_json::from_str(body).unwrap_or_default();
    let message = if error.message.is_empty() { body.to_owned() } else { error.message };
    Err(NewsletterError::Status { status, message })
}

#[cfg(test)]
#[path = "newsletter_test.rs"]
mod tests;
