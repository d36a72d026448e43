//! Article Routes
//!
//! Read-only endpoints over the static blog content.
//!
//! - GET /api/v1/articles - List articles, newest first (optional `?tag=`)
//! - GET /api/v1/articles/:id - Get a single article
//! - GET /api/v1/tags - List tags with article counts

use axum::{
    extract::{
        rejection::{PathRejection, QueryRejection},
        Path, Query, State,
    },
    Json,
};
use std::sync::Arc;

use crate::api::dto::{ArticleListQuery, ArticleListResponse, TagListResponse};
use crate::api::error::{ApiError, ApiResult};
use crate::api::state::AppState;
use crate::content::Article;

/// GET /api/v1/articles
pub async fn list_articles(
    State(state): State<Arc<AppState>>,
    query: Result<Query<ArticleListQuery>, QueryRejection>,
) -> ApiResult<Json<ArticleListResponse>> {
    let Query(query) = query?;
    let tag = query.tag.as_deref().map(str::trim).filter(|t| !t.is_empty());

    let articles: Vec<Article> = state
        .content
        .articles_newest_first(tag)
        .into_iter()
        .cloned()
        .collect();

    Ok(Json(ArticleListResponse {
        total: articles.len(),
        articles,
    }))
}

/// GET /api/v1/articles/:id
///
/// Non-numeric ids are a validation error (400), unknown ids 404.
pub async fn get_article(
    State(state): State<Arc<AppState>>,
    id: Result<Path<u32>, PathRejection>,
) -> ApiResult<Json<Article>> {
    let Path(id) = id?;
    state
        .content
        .find_article(id)
        .cloned()
        .map(Json)
        .ok_or_else(|| ApiError::NotFound(format!("Article with id {} not found", id)))
}

/// GET /api/v1/tags
pub async fn list_tags(State(state): State<Arc<AppState>>) -> Json<TagListResponse> {
    Json(TagListResponse {
        tags: state.content.tags(),
    })
}
