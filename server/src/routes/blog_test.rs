use std::sync::Arc;

use axum::http::StatusCode;

use crate::routes::test_support::{get, send};
use crate::services::mock::{MemoryContent, category, post};
use crate::state::AppState;
use crate::state::test_helpers::{empty_state, with_content};

fn seeded() -> AppState {
    let bi = category(1, "Business Intelligence", "business-intelligence");
    let ai = category(2, "Künstliche Intelligenz", "kuenstliche-intelligenz");
    let mut posts = vec![
        post(1, "power-bi", &bi, "2024-01-10T09:00:00Z"),
        post(2, "dwh-basics", &bi, "2024-02-10T09:00:00Z"),
        post(3, "llm-im-mittelstand", &ai, "2024-03-10T09:00:00Z"),
        post(4, "kpi-dashboards", &bi, "2024-04-10T09:00:00Z"),
    ];
    posts[2].tags = Some(vec!["ki".into()]);
    let mut draft = post(5, "entwurf", &bi, "2024-05-10T09:00:00Z");
    draft.published_at = None;
    posts.push(draft);
    with_content(empty_state(), Arc::new(MemoryContent::with_posts(posts, vec![bi, ai])))
}

#[tokio::test]
async fn listing_returns_newest_first_with_pagination() {
    let res = send(seeded(), get("/api/blog?limit=2")).await;
    assert_eq!(res.status, StatusCode::OK);
    let json = res.json();
    assert_eq!(json["success"], true);
    let slugs: Vec<&str> = json["data"]["posts"]
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["slug"].as_str().unwrap())
        .collect();
    assert_eq!(slugs, ["kpi-dashboards", "llm-im-mittelstand"]);
    assert_eq!(json["data"]["pagination"]["total"], 4);
    assert_eq!(json["data"]["pagination"]["total_pages"], 2);
}

#[tokio::test]
async fn listing_filters_by_category_slug_and_tag() {
    let res = send(seeded(), get("/api/blog?category=kuenstliche-intelligenz")).await;
    assert_eq!(res.json()["data"]["pagination"]["total"], 1);

    let res = send(seeded(), get("/api/blog?category=1&tag=daten")).await;
    assert_eq!(res.json()["data"]["pagination"]["total"], 3);
}

#[tokio::test]
async fn invalid_paging_falls_back_to_defaults() {
    let res = send(seeded(), get("/api/blog?page=abc&limit=-3")).await;
    assert_eq!(res.status, StatusCode::OK);
    let json = res.json();
    assert_eq!(json["data"]["pagination"]["page"], 1);
    assert_eq!(json["data"]["pagination"]["limit"], 10);
}

#[tokio::test]
async fn missing_post_is_not_found() {
    let res = send(seeded(), get("/api/blog/posts/gibt-es-nicht")).await;
    assert_eq!(res.status, StatusCode::NOT_FOUND);
    assert_eq!(res.json()["success"], false);

    let res = send(seeded(), get("/api/blog/posts/entwurf")).await;
    assert_eq!(res.status, StatusCode::NOT_FOUND, "drafts are not published");
}

#[tokio::test]
async fn post_detail_and_related_exclude_current() {
    let res = send(seeded(), get("/api/blog/posts/power-bi")).await;
    assert_eq!(res.status, StatusCode::OK);
    assert_eq!(res.json()["data"]["card"]["slug"], "power-bi");

    let res = send(seeded(), get("/api/blog/posts/power-bi/related")).await;
    let json = res.json();
    let related = json["data"].as_array().unwrap();
    assert!(!related.is_empty());
    assert!(related.len() <= 3);
    assert!(related.iter().all(|p| p["slug"] != "power-bi"));
    assert!(related.iter().all(|p| p["category_slug"] == "business-intelligence"));
}

#[tokio::test]
async fn categories_are_listed() {
    let res = send(seeded(), get("/api/blog/categories")).await;
    assert_eq!(res.json()["data"].as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn unconfigured_content_is_unavailable() {
    let res = send(empty_state(), get("/api/blog")).await;
    assert_eq!(res.status, StatusCode::SERVICE_UNAVAILABLE);
}

#[tokio::test]
async fn backend_failure_is_bad_gateway() {
    let state = with_content(empty_state(), Arc::new(MemoryContent::failing()));
    let res = send(state, get("/api/blog")).await;
    assert_eq!(res.status, StatusCode::BAD_GATEWAY);
    assert_eq!(res.json()["error"], site::api::MSG_SERVER_ERROR);
}
