//! Backend integrations behind async traits.
//!
//! Each external system the site talks to (content database, transactional
//! mail, newsletter list) is reached through a trait so route handlers can be
//! exercised with in-memory doubles.

pub mod content;
pub mod mailer;
pub mod newsletter;

#[cfg(test)]
pub mod mock;

use std::time::Duration;

const CONNECT_TIMEOUT_SECS: u64 = 5;

/// Shared reqwest client settings for every upstream.
///
/// # Errors
///
/// Returns an error if the TLS backend cannot be initialised.
pub fn http_client(timeout: Duration) -> Result<reqwest::Client, reqwest::Error> {
    reqwest::Client::builder()
        .timeout(timeout)
        .connect_timeout(Duration::from_secs(CONNECT_TIMEOUT_SECS).min(timeout))
        .build()
}
