use std::sync::Arc;

use axum::http::{StatusCode, header};
use time::Month;

use super::*;
use crate::routes::test_support::{get, send};
use crate::services::mock::{MemoryContent, category, post};
use crate::state::test_helpers::{empty_state, with_content};

const BASE: &str = "https://www.ritterdigital.de";

fn today() -> Date {
    Date::from_calendar_date(2024, Month::July, 1).unwrap()
}

fn sitemap_post(slug: &str, updated_at: Option<&str>) -> SitemapPost {
    SitemapPost {
        slug: slug.into(),
        updated_at: updated_at.map(Into::into),
        published_at: Some("2024-01-15T08:00:00Z".into()),
    }
}

#[test]
fn posts_and_services_are_listed() {
    let posts = [sitemap_post("power-bi", Some("2024-03-02T10:00:00Z")), sitemap_post("dwh", None)];
    let entries = sitemap_entries(BASE, &posts, today());

    assert_eq!(entries.len(), posts.len() + SERVICES.len());
    assert_eq!(entries[0].loc, "https://www.ritterdigital.de/blog/power-bi");
    assert_eq!(entries[0].lastmod, "2024-03-02");
    assert_eq!(entries[1].lastmod, "2024-01-15");
    assert!(
        entries
            .iter()
            .any(|e| e.loc == "https://www.ritterdigital.de/leistungen/data-warehouse" && e.lastmod == "2024-07-01")
    );
}

#[test]
fn post_slugs_are_percent_encoded() {
    let entries = sitemap_entries(BASE, &[sitemap_post("bi & ki", None)], today());
    assert_eq!(entries[0].loc, "https://www.ritterdigital.de/blog/bi%20%26%20ki");
}

#[test]
fn no_posts_falls_back_to_static_pages() {
    let entries = sitemap_entries(BASE, &[], today());
    assert_eq!(entries.len(), STATIC_PAGES.len());
    assert_eq!(entries[0].loc, BASE);
    assert!((entries[0].priority - 1.0).abs() < f32::EPSILON);
}

#[test]
fn rendered_xml_escapes_locations() {
    let entries = [SitemapEntry {
        loc: format!("{BASE}/blog/a&b"),
        lastmod: "2024-07-01".into(),
        changefreq: "weekly",
        priority: 0.7,
    }];
    let xml = render_sitemap(&entries);
    assert!(xml.starts_with("<?xml"));
    assert!(xml.contains("<loc>https://www.ritterdigital.de/blog/a&amp;b</loc>"));
    assert!(xml.contains("<priority>0.7</priority>"));
    assert!(xml.trim_end().ends_with("</urlset>"));
}

#[tokio::test]
async fn endpoint_serves_xml_from_content_store() {
    let bi = category(1, "Business Intelligence", "business-intelligence");
    let content = MemoryContent::with_posts(vec![post(1, "power-bi", &bi, "2024-01-10T09:00:00Z")], vec![bi]);
    let res = send(with_content(empty_state(), Arc::new(content)), get("/server-sitemap.xml")).await;

    assert_eq!(res.status, StatusCode::OK);
    assert_eq!(res.headers[header::CONTENT_TYPE], "application/xml; charset=utf-8");
    assert!(res.body.contains("/blog/power-bi</loc>"));
}

#[tokio::test]
async fn endpoint_falls_back_when_backend_fails() {
    let res = send(with_content(empty_state(), Arc::new(MemoryContent::failing())), get("/server-sitemap.xml")).await;
    assert_eq!(res.status, StatusCode::OK);
    assert!(res.body.contains("<loc>https://www.ritterdigital.de/impressum</loc>"));
    assert!(!res.body.contains("/blog/"));
}

#[tokio::test]
async fn healthz_is_ok() {
    let res = send(empty_state(), get("/healthz")).await;
    assert_eq!(res.status, StatusCode::OK);
}
