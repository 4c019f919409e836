//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor.
//! Each backend is optional: a deployment without mail credentials still
//! serves the blog, and the affected endpoints answer 503.

use std::sync::Arc;

use crate::config::{MailConfig, SiteConfig};
use crate::error::ApiError;
use crate::rate_limit::RateLimiter;
use crate::services::content::{ContentError, ContentStore, SupabaseClient};
use crate::services::mailer::{Mailer, ResendMailer};
use crate::services::newsletter::{BrevoClient, NewsletterError, NewsletterList};

#[derive(Debug, thiserror::Error)]
pub enum StateError {
    #[error(transparent)]
    Content(#[from] ContentError),
    #[error(transparent)]
    Newsletter(#[from] NewsletterError),
}

/// Mailer plus the inboxes it delivers to.
#[derive(Clone)]
pub struct MailState {
    pub mailer: Arc<dyn Mailer>,
    pub contact_inbox: String,
    pub careers_inbox: String,
}

/// Shared application state, injected into Axum handlers via State extractor.
#[derive(Clone)]
pub struct AppState {
    pub content: Option<Arc<dyn ContentStore>>,
    pub mail: Option<MailState>,
    pub newsletter: Option<Arc<dyn NewsletterList>>,
    pub rate_limiter: RateLimiter,
    /// Public base URL without trailing slash, used for absolute links.
    pub site_url: String,
    /// Proxy hops trusted when reading the client address.
    pub trusted_proxies: usize,
}

impl AppState {
    /// Build clients for every configured backend.
    ///
    /// # Errors
    ///
    /// Returns an error if an HTTP client cannot be constructed.
    pub fn from_config(config: &SiteConfig) -> Result<Self, StateError> {
        let content = match &config.supabase {
            Some(cfg) => {
                let client = SupabaseClient::new(cfg, config.http_timeout)?;
                Some(Arc::new(client) as Arc<dyn ContentStore>)
            }
            None => None,
        };
        let newsletter = match &config.brevo {
            Some(cfg) => {
                let client = BrevoClient::new(cfg, config.http_timeout)?;
                Some(Arc::new(client) as Arc<dyn NewsletterList>)
            }
            None => None,
        };
        let mail = config.mail.as_ref().map(MailState::resend);

        tracing::info!(
            content = content.is_some(),
            mail = mail.is_some(),
            newsletter = newsletter.is_some(),
            "backends configured"
        );

        Ok(Self {
            content,
            mail,
            newsletter,
            rate_limiter: RateLimiter::new(config.rate_limit),
            site_url: config.site_url.clone(),
            trusted_proxies: config.trusted_proxies,
        })
    }

    /// # Errors
    ///
    /// `Unavailable` when no content backend is configured.
    pub fn content(&self) -> Result<&Arc<dyn ContentStore>, ApiError> {
        self.content.as_ref().ok_or(ApiError::Unavailable("content"))
    }

    /// # Errors
    ///
    /// `Unavailable` when no mailer is configured.
    pub fn mail(&self) -> Result<&MailState, ApiError> {
        self.mail.as_ref().ok_or(ApiError::Unavailable("mail"))
    }

    /// # Errors
    ///
    /// `Unavailable` when no newsletter list is configured.
    pub fn newsletter(&self) -> Result<&Arc<dyn NewsletterList>, ApiError> {
        self.newsletter.as_ref().ok_or(ApiError::Unavailable("newsletter"))
    }
}

impl MailState {
    fn resend(config: &MailConfig) -> Self {
        Self {
            mailer: Arc::new(ResendMailer::new(config)),
            contact_inbox: config.contact_inbox.clone(),
            careers_inbox: config.careers_inbox.clone(),
        }
    }
}

// =============================================================================
// TEST HELPERS
// =============================================================================

#[cfg(test)]
pub mod test_helpers {
    use super::*;
    use crate::rate_limit::RateLimitConfig;
    use site::catalog::DEFAULT_SITE_URL;

    pub const CONTACT_INBOX: &str = "team@ritterdigital.de";
    pub const CAREERS_INBOX: &str = "karriere@ritterdigital.de";

    /// State with no backends configured.
    #[must_use]
    pub fn empty_state() -> AppState {
        AppState {
            content: None,
            mail: None,
            newsletter: None,
            rate_limiter: RateLimiter::new(RateLimitConfig::default()),
            site_url: DEFAULT_SITE_URL.to_owned(),
            trusted_proxies: 0,
        }
    }

    #[must_use]
    pub fn with_content(mut state: AppState, content: Arc<dyn ContentStore>) -> AppState {
        state.content = Some(content);
        state
    }

    #[must_use]
    pub fn with_mailer(mut state: AppState, mailer: Arc<dyn Mailer>) -> AppState {
        state.mail = Some(MailState {
            mailer,
            contact_inbox: CONTACT_INBOX.to_owned(),
            careers_inbox: CAREERS_INBOX.to_owned(),
        });
        state
    }

    #[must_use]
    pub fn with_newsletter(mut state: AppState, newsletter: Arc<dyn NewsletterList>) -> AppState {
        state.newsletter = Some(newsletter);
        state
    }

    #[must_use]
    pub fn with_trusted_proxies(mut state: AppState, hops: usize) -> AppState {
        state.trusted_proxies = hops;
        state
    }

    #[must_use]
    pub fn with_rate_limit(mut state: AppState, config: RateLimitConfig) -> AppState {
        state.rate_limiter = RateLimiter::new(config);
        state
    }
}

#[cfg(test)]
#[path = "state_test.rs"]
mod tests;
