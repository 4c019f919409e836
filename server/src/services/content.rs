//! Blog content and form storage in Supabase (PostgREST).
//!
//! SYSTEM CONTEXT
//! ==============
//! Posts, authors and categories live in Supabase tables. Reads use the
//! public anon key; the `contact_requests` insert and both newsletter
//! subscriber calls use the service key when one is configured. The parameter lists are built by `site::query`, this
//! module only performs the HTTP calls and decodes the answers. Response
//! parsing is kept in pure functions for testability.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::CONTENT_RANGE;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use time::format_description::well_known::Rfc3339;

use site::blog::{Category, PageInfo, PostCard, PostDetail, PostPage, PostRow};
use site::query::{self, BlogQuery};
use site::validation::{ContactRequest, NewsletterSignup};

use crate::config::SupabaseConfig;

pub const RELATED_LIMIT: u32 = 3;

#[derive(Debug, thiserror::Error)]
pub enum ContentError {
    #[error("content request failed: {0}")]
    Request(String),
    #[error("content backend returned {status}: {body}")]
    Status { status: u16, body: String },
    #[error("malformed content response: {0}")]
    Decode(String),
    #[error("http client build failed: {0}")]
    HttpClientBuild(String),
}

/// Post slug and dates for the sitemap.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SitemapPost {
    pub slug: String,
    #[serde(default)]
    pub updated_at: Option<String>,
    #[serde(default)]
    pub published_at: Option<String>,
}

impl SitemapPost {
    /// Last modification date, `YYYY-MM-DD`.
    #[must_use]
    pub fn lastmod(&self) -> Option<&str> {
        self.updated_at
            .as_deref()
            .or(self.published_at.as_deref())
            .and_then(|ts| ts.get(..10))
    }
}

/// Row written to `contact_requests`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ContactRecord {
    pub reference: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: Option<String>,
    pub company: Option<String>,
    pub subject: String,
    pub message: String,
    pub privacy_accepted: bool,
}

impl ContactRecord {
    #[must_use]
    pub fn new(request: &ContactRequest, reference: &str) -> Self {
        Self {
            reference: reference.to_owned(),
            first_name: request.first_name.trim().to_owned(),
            last_name: request.last_name.trim().to_owned(),
            email: request.email.trim().to_owned(),
            phone: non_blank(request.phone.as_deref()),
            company: non_blank(request.company.as_deref()),
            subject: request.subject.trim().to_owned(),
            message: request.message.trim().to_owned(),
            privacy_accepted: request.privacy,
        }
    }
}

/// Row written to `newsletter_subscribers`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SubscriberRecord {
    pub email: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subscribed_at: Option<String>,
    pub active: bool,
}

impl SubscriberRecord {
    #[must_use]
    pub fn new(signup: &NewsletterSignup) -> Self {
        Self {
            email: signup.email.trim().to_lowercase(),
            first_name: non_blank(signup.first_name.as_deref()),
            last_name: non_blank(signup.last_name.as_deref()),
            subscribed_at: OffsetDateTime::now_utc().format(&Rfc3339).ok(),
            active: true,
        }
    }
}

// =============================================================================
// TRAIT
// =============================================================================

#[async_trait]
pub trait ContentStore: Send + Sync {
    async fn list_posts(&self, query: &BlogQuery) -> Result<PostPage, ContentError>;

    async fn get_post(&self, slug: &str) -> Result<Option<PostDetail>, ContentError>;

    async fn related_posts(&self, category_id: i64, exclude_id: i64) -> Result<Vec<PostCard>, ContentError>;

    async fn list_categories(&self) -> Result<Vec<Category>, ContentError>;

    async fn sitemap_posts(&self) -> Result<Vec<SitemapPost>, ContentError>;

    async fn insert_contact_request(&self, record: &ContactRecord) -> Result<(), ContentError>;

    /// Whether `email` is already in `newsletter_subscribers`.
    async fn is_newsletter_subscriber(&self, email: &str) -> Result<bool, ContentError>;

    async fn insert_newsletter_subscriber(&self, record: &SubscriberRecord) -> Result<(), ContentError>;
}

// =============================================================================
// SUPABASE CLIENT
// =============================================================================

pub struct SupabaseClient {
    http: reqwest::Client,
    base_url: String,
    anon_key: String,
    service_key: Option<String>,
}

impl SupabaseClient {
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built.
    pub fn new(config: &SupabaseConfig, timeout: Duration) -> Result<Self, ContentError> {
        let http = super::http_client(timeout).map_err(|e| ContentError::HttpClientBuild(e.to_string()))?;
        Ok(Self {
            http,
            base_url: config.url.trim_end_matches('/').to_owned(),
            anon_key: config.anon_key.clone(),
            service_key: config.service_key.clone(),
        })
    }

    fn table_url(&self, table: &str) -> String {
        format!("{}/rest/v1/{table}", self.base_url)
    }

    /// Key for writes and for tables hidden from anonymous reads.
    fn service_key(&self) -> &str {
        self.service_key.as_deref().unwrap_or(&self.anon_key)
    }

    /// GET rows from `table`. Returns the rows and, when requested, the
    /// total count reported by the backend.
    async fn select<T: DeserializeOwned>(
        &self,
        table: &str,
        params: &[(String, String)],
        count: bool,
    ) -> Result<(Vec<T>, Option<u64>), ContentError> {
        self.select_with_key(&self.anon_key, table, params, count).await
    }

    async fn select_with_key<T: DeserializeOwned>(
        &self,
        key: &str,
        table: &str,
        params: &[(String, String)],
        count: bool,
    ) -> Result<(Vec<T>, Option<u64>), ContentError> {
        let mut request = self
            .http
            .get(self.table_url(table))
            .header("apikey", key)
            .bearer_auth(key)
            .query(params);
        if count {
            request = request.header("Prefer", "count=exact");
        }

        let response = request
            .send()
            .await
            .map_err(|e| ContentError::Request(e.to_string()))?;

        let status = response.status().as_u16();
        let total = response
            .headers()
            .get(CONTENT_RANGE)
            .and_then(|v| v.to_str().ok())
            .and_then(parse_content_range_total);
        let text = response
            .text()
            .await
            .map_err(|e| ContentError::Request(e.to_string()))?;

        if !(200..300).contains(&status) {
            return Err(ContentError::Status { status, body: text });
        }
        Ok((parse_rows(&text)?, total))
    }

    async fn insert<T: Serialize + Sync>(&self, table: &str, row: &T) -> Result<(), ContentError> {
        let key = self.service_key();
        let response = self
            .http
            .post(self.table_url(table))
            .header("apikey", key)
            .bearer_auth(key)
            .header("Prefer", "return=minimal")
            .json(row)
            .send()
            .await
            .map_err(|e| ContentError::Request(e.to_string()))?;

        let status = response.status().as_u16();
        if (200..300).contains(&status) {
            return Ok(());
        }
        let body = response.text().await.unwrap_or_default();
        Err(ContentError::Status { status, body })
    }
}

#[async_trait]
impl ContentStore for SupabaseClient {
    async fn list_posts(&self, query: &BlogQuery) -> Result<PostPage, ContentError> {
        let query = query.clone().normalized();
        let (rows, total) = self
            .select::<PostRow>("blog_posts", &query.to_postgrest_params(), true)
            .await?;
        Ok(build_post_page(&query, rows, total))
    }

    async fn get_post(&self, slug: &str) -> Result<Option<PostDetail>, ContentError> {
        let (rows, _) = self
            .select::<PostRow>("blog_posts", &query::post_by_slug_params(slug), false)
            .await?;
        Ok(rows.into_iter().next().map(PostRow::into_detail))
    }

    async fn related_posts(&self, category_id: i64, exclude_id: i64) -> Result<Vec<PostCard>, ContentError> {
        let params = query::related_posts_params(category_id, exclude_id, RELATED_LIMIT);
        let (rows, _) = self.select::<PostRow>("blog_posts", &params, false).await?;
        Ok(rows.into_iter().map(PostRow::into_card).collect())
    }

    async fn list_categories(&self) -> Result<Vec<Category>, ContentError> {
        let (rows, _) = self
            .select::<Category>("categories", &query::categories_params(), false)
            .await?;
        Ok(rows)
    }

    async fn sitemap_posts(&self) -> Result<Vec<SitemapPost>, ContentError> {
        let (rows, _) = self
            .select::<SitemapPost>("blog_posts", &query::sitemap_params(), false)
            .await?;
        Ok(rows)
    }

    async fn insert_contact_request(&self, record: &ContactRecord) -> Result<(), ContentError> {
        self.insert("contact_requests", record).await
    }

    async fn is_newsletter_subscriber(&self, email: &str) -> Result<bool, ContentError> {
        let (rows, _) = self
            .select_with_key::<serde_json::Value>(
                self.service_key(),
                "newsletter_subscribers",
                &query::subscriber_by_email_params(email),
                false,
            )
            .await?;
        Ok(!rows.is_empty())
    }

    async fn insert_newsletter_subscriber(&self, record: &SubscriberRecord) -> Result<(), ContentError> {
        self.insert("newsletter_subscribers", record).await
    }
}

// =============================================================================
// PARSING
// =============================================================================

/// Total from a PostgREST `Content-Range` header (`0-9/42`, `*/0`).
/// Returns `None` when the backend did not count (`0-9/*`).
#[must_use]
pub fn parse_content_range_total(header: &str) -> Option<u64> {
    let (_, total) = header.trim().rsplit_once('/')?;
    total.parse().ok()
}

/// Decode a JSON array of rows.
///
/// # Errors
///
/// Returns an error when the body is not an array of `T`.
pub fn parse_rows<T: DeserializeOwned>(body: &str) -> Result<Vec<T>, ContentError> {
    serde_json::from_str(body).map_err(|e| ContentError::Decode(e.to_string()))
}

/// Assemble one listing page. Without a reported total the count is
/// estimated from the rows seen so far.
#[must_use]
pub fn build_post_page(query: &BlogQuery, rows: Vec<PostRow>, total: Option<u64>) -> PostPage {
    let seen = if rows.is_empty() { 0 } else { u64::from(query.offset()) + rows.len() as u64 };
    let total = total.unwrap_or(seen).max(seen);
    PostPage {
        posts: rows.into_iter().map(PostRow::into_card).collect(),
        pagination: PageInfo::new(query.page, query.limit, total),
    }
}

fn non_blank(value: Option<&str>) -> Option<String> {
    value.map(str::trim).filter(|v| !v.is_empty()).map(str::to_owned)
}

#[cfg(test)]
#[path = "content_test.rs"]
mod tests;
