//! Dynamic `server-sitemap.xml`.
//!
//! Lists every published blog post and the service pages. When the content
//! backend is unavailable or returns nothing, the static page list is
//! served instead so crawlers never see an empty sitemap.

use std::fmt::Write as _;

use axum::extract::State;
use axum::http::header;
use axum::response::IntoResponse;
use time::{Date, OffsetDateTime};

use site::catalog::{SERVICES, STATIC_PAGES};
use site::query::post_path;

use crate::services::content::SitemapPost;
use crate::services::mailer::escape_html;
use crate::state::AppState;

#[derive(Debug, Clone, PartialEq)]
pub struct SitemapEntry {
    pub loc: String,
    pub lastmod: String,
    pub changefreq: &'static str,
    pub priority: f32,
}

/// `GET /server-sitemap.xml`
pub async fn server_sitemap(State(state): State<AppState>) -> impl IntoResponse {
    let posts = match &state.content {
        Some(content) => match content.sitemap_posts().await {
            Ok(posts) => posts,
            Err(e) => {
                tracing::error!(error = %e, "sitemap posts unavailable, serving static pages");
                Vec::new()
            }
        },
        None => Vec::new(),
    };

    let today = OffsetDateTime::now_utc().date();
    let entries = sitemap_entries(&state.site_url, &posts, today);
    ([(header::CONTENT_TYPE, "application/xml; charset=utf-8")], render_sitemap(&entries))
}

/// Blog posts plus service pages, or the static page list when there are
/// no posts.
#[must_use]
pub fn sitemap_entries(site_url: &str, posts: &[SitemapPost], today: Date) -> Vec<SitemapEntry> {
    let base = site_url.trim_end_matches('/');
    let today = today.to_string();

    if posts.is_empty() {
        return STATIC_PAGES
            .iter()
            .map(|page| SitemapEntry {
                loc: absolute(base, page.path),
                lastmod: today.clone(),
                changefreq: page.changefreq,
                priority: page.priority,
            })
            .collect();
    }

    let blog = posts.iter().map(|post| SitemapEntry {
        loc: format!("{base}{}", post_path(&post.slug)),
        lastmod: post.lastmod().map_or_else(|| today.clone(), str::to_owned),
        changefreq: "weekly",
        priority: 0.7,
    });
    let services = SERVICES.iter().map(|service| SitemapEntry {
        loc: absolute(base, &service.href()),
        lastmod: today.clone(),
        changefreq: "monthly",
        priority: 0.8,
    });
    blog.chain(services).collect()
}

#[must_use]
pub fn render_sitemap(entries: &[SitemapEntry]) -> String {
    let mut xml = String::from(
        "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n<urlset xmlns=\"http://www.sitemaps.org/schemas/sitemap/0.9\">\n",
    );
    for entry in entries {
        let _ = writeln!(
            xml,
            "<url><loc>{}</loc><lastmod>{}</lastmod><changefreq>{}</changefreq><priority>{:.1}</priority></url>",
            escape_html(&entry.loc),
            escape_html(&entry.lastmod),
            entry.changefreq,
            entry.priority,
        );
    }
    xml.push_str("</urlset>\n");
    xml
}

fn absolute(base: &str, path: &str) -> String {
    if path == "/" { base.to_owned() } else { format!("{base}{path}") }
}

#[cfg(test)]
#[path = "sitemap_test.rs"]
mod tests;
