//! Path and query-string construction for API calls and page links.

#[cfg(test)]
#[path = "url_test.rs"]
mod url_test;

pub use site::query::encode_component;
use site::query::{self, BlogQuery};

/// `?k=v&...`, or an empty string when there are no pairs.
#[must_use]
pub fn query_string(pairs: &[(&str, String)]) -> String {
    if pairs.is_empty() {
        return String::new();
    }
    let joined = pairs
        .iter()
        .map(|(k, v)| format!("{}={}", encode_component(k), encode_component(v)))
        .collect::<Vec<_>>()
        .join("&");
    format!("?{joined}")
}

/// `/api/blog` with the query's non-default parameters.
#[must_use]
pub fn blog_api_path(query: &BlogQuery) -> String {
    format!("/api/blog{}", query_string(&query.to_api_pairs()))
}

/// In-site `/blog` link that reproduces `query`.
#[must_use]
pub fn blog_page_path(query: &BlogQuery) -> String {
    format!("/blog{}", query_string(&query.to_api_pairs()))
}

#[must_use]
pub fn post_api_path(slug: &str) -> String {
    format!("/api/blog/posts/{}", encode_component(slug))
}

#[must_use]
pub fn related_api_path(slug: &str) -> String {
    format!("/api/blog/posts/{}/related", encode_component(slug))
}

#[must_use]
pub fn post_page_path(slug: &str) -> String {
    query::post_path(slug)
}
