//! Blog read endpoints backed by the content store.

use axum::Json;
use axum::extract::{Path, Query, State};

use site::api::ApiResponse;
use site::blog::{Category, PostCard, PostDetail, PostPage};
use site::query::BlogQuery;

use crate::error::ApiError;
use crate::state::AppState;

const POST_NOT_FOUND: &str = "Beitrag";

/// `GET /api/blog`: one page of published posts.
///
/// Accepts `page`, `limit`, `category` (id or slug), `tag`, `search` and
/// `author`. Unparsable numbers fall back to the defaults.
pub async fn list_posts(
    State(state): State<AppState>,
    Query(pairs): Query<Vec<(String, String)>>,
) -> Result<Json<ApiResponse<PostPage>>, ApiError> {
    let query = BlogQuery::from_pairs(pairs.iter().map(|(k, v)| (k.as_str(), v.as_str())));
    let page = state.content()?.list_posts(&query).await?;
    tracing::debug!(
        page = page.pagination.page,
        total = page.pagination.total,
        filtered = query.has_filters(),
        "blog listing"
    );
    Ok(Json(ApiResponse::ok(page)))
}

/// `GET /api/blog/categories`
pub async fn list_categories(State(state): State<AppState>) -> Result<Json<ApiResponse<Vec<Category>>>, ApiError> {
    let categories = state.content()?.list_categories().await?;
    Ok(Json(ApiResponse::ok(categories)))
}

/// `GET /api/blog/posts/{slug}`
pub async fn get_post(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<Json<ApiResponse<PostDetail>>, ApiError> {
    let post = state
        .content()?
        .get_post(&slug)
        .await?
        .ok_or_else(|| ApiError::NotFound(POST_NOT_FOUND.into()))?;
    Ok(Json(ApiResponse::ok(post)))
}

/// `GET /api/blog/posts/{slug}/related`: posts from the same category,
/// the current one excluded. Posts without a category have no relations.
pub async fn related_posts(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<Json<ApiResponse<Vec<PostCard>>>, ApiError> {
    let content = state.content()?;
    let post = content
        .get_post(&slug)
        .await?
        .ok_or_else(|| ApiError::NotFound(POST_NOT_FOUND.into()))?;

    let related = match post.category_id {
        Some(category_id) => content.related_posts(category_id, post.card.id).await?,
        None => Vec::new(),
    };
    Ok(Json(ApiResponse::ok(related)))
}

#[cfg(test)]
#[path = "blog_test.rs"]
mod tests;
