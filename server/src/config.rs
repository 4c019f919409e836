//! Server configuration parsed from environment variables.
//!
//! Backend credentials are optional: a missing group disables the feature
//! that needs it (the endpoint answers 503) instead of failing start-up.
//! Malformed values are rejected so typos do not silently fall back.

use std::str::FromStr;
use std::time::Duration;

use site::catalog::{CONTACT_INFO, DEFAULT_SITE_URL};

use crate::rate_limit::RateLimitConfig;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_HTTP_TIMEOUT_SECS: u64 = 10;
pub const DEFAULT_MAIL_FROM: &str = "Ritter Digital <kontakt@ritterdigital.de>";
pub const DEFAULT_BREVO_LIST_ID: i64 = 2;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{var} has an invalid value: {value}")]
    InvalidValue { var: &'static str, value: String },
    #[error("{var} must be an http(s) URL, got {value}")]
    InvalidUrl { var: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SupabaseConfig {
    pub url: String,
    pub anon_key: String,
    /// Used for writes; reads fall back to the anon key.
    pub service_key: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MailConfig {
    pub api_key: String,
    pub from: String,
    pub contact_inbox: String,
    pub careers_inbox: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BrevoConfig {
    pub api_key: String,
    pub list_id: i64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteConfig {
    pub port: u16,
    pub site_url: String,
    pub http_timeout: Duration,
    pub supabase: Option<SupabaseConfig>,
    pub mail: Option<MailConfig>,
    pub brevo: Option<BrevoConfig>,
    pub rate_limit: RateLimitConfig,
    /// Reverse proxies in front of the server that append to
    /// `X-Forwarded-For`. Zero means forwarding headers are ignored.
    pub trusted_proxies: usize,
}

impl SiteConfig {
    /// Build the config from the process environment.
    ///
    /// Optional:
    /// - `PORT` (default 3000), `SITE_URL`, `HTTP_TIMEOUT_SECS` (default 10)
    /// - `SUPABASE_URL` + `SUPABASE_ANON_KEY`, optional `SUPABASE_SERVICE_KEY`
    /// - `RESEND_API_KEY`, `MAIL_FROM`, `CONTACT_INBOX`, `CAREERS_INBOX`
    /// - `BREVO_API_KEY`, `BREVO_LIST_ID` (default 2)
    /// - `RATE_LIMIT_PER_CLIENT`, `RATE_LIMIT_PER_CLIENT_WINDOW_SECS`,
    ///   `RATE_LIMIT_GLOBAL`, `RATE_LIMIT_GLOBAL_WINDOW_SECS`
    /// - `TRUSTED_PROXIES` (default 0)
    ///
    /// # Errors
    ///
    /// Returns an error if a present variable cannot be parsed.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the config from an arbitrary key lookup.
    ///
    /// # Errors
    ///
    /// Returns an error if a present variable cannot be parsed.
    pub fn from_lookup<F>(get: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let lookup = |key: &str| get(key).map(|v| v.trim().to_owned()).filter(|v| !v.is_empty());

        let port = parse_or(&lookup, "PORT", DEFAULT_PORT)?;
        let site_url = match lookup("SITE_URL") {
            Some(url) => require_http_url("SITE_URL", url)?,
            None => DEFAULT_SITE_URL.to_owned(),
        };
        let http_timeout = Duration::from_secs(parse_or(&lookup, "HTTP_TIMEOUT_SECS", DEFAULT_HTTP_TIMEOUT_SECS)?);

        let supabase = match (lookup("SUPABASE_URL"), lookup("SUPABASE_ANON_KEY")) {
            (Some(url), Some(anon_key)) => Some(SupabaseConfig {
                url: require_http_url("SUPABASE_URL", url)?,
                anon_key,
                service_key: lookup("SUPABASE_SERVICE_KEY"),
            }),
            _ => None,
        };

        let mail = lookup("RESEND_API_KEY").map(|api_key| MailConfig {
            api_key,
            from: lookup("MAIL_FROM").unwrap_or_else(|| DEFAULT_MAIL_FROM.to_owned()),
            contact_inbox: lookup("CONTACT_INBOX").unwrap_or_else(|| CONTACT_INFO.email.to_owned()),
            careers_inbox: lookup("CAREERS_INBOX").unwrap_or_else(|| CONTACT_INFO.email.to_owned()),
        });

        let brevo = match lookup("BREVO_API_KEY") {
            Some(api_key) => Some(BrevoConfig { api_key, list_id: parse_or(&lookup, "BREVO_LIST_ID", DEFAULT_BREVO_LIST_ID)? }),
            None => None,
        };

        let defaults = RateLimitConfig::default();
        let rate_limit = RateLimitConfig {
            per_client_limit: parse_or(&lookup, "RATE_LIMIT_PER_CLIENT", defaults.per_client_limit)?,
            per_client_window: Duration::from_secs(parse_or(
                &lookup,
                "RATE_LIMIT_PER_CLIENT_WINDOW_SECS",
                defaults.per_client_window.as_secs(),
            )?),
            global_limit: parse_or(&lookup, "RATE_LIMIT_GLOBAL", defaults.global_limit)?,
            global_window: Duration::from_secs(parse_or(
                &lookup,
                "RATE_LIMIT_GLOBAL_WINDOW_SECS",
                defaults.global_window.as_secs(),
            )?),
        };

        let trusted_proxies = parse_or(&lookup, "TRUSTED_PROXIES", 0_usize)?;

        Ok(Self { port, site_url, http_timeout, supabase, mail, brevo, rate_limit, trusted_proxies })
    }
}

fn parse_or<T, L>(lookup: &L, var: &'static str, default: T) -> Result<T, ConfigError>
where
    T: FromStr,
    L: Fn(&str) -> Option<String>,
{
    match lookup(var) {
        Some(raw) => raw.parse::<T>().map_err(|_| ConfigError::InvalidValue { var, value: raw }),
        None => Ok(default),
    }
}

fn require_http_url(var: &'static str, value: String) -> Result<String, ConfigError> {
    if value.starts_with("http://") || value.starts_with("https://") {
        Ok(value.trim_end_matches('/').to_owned())
    } else {
        Err(ConfigError::InvalidUrl { var, value })
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
