//! Tag handlers.

use actix_web::{HttpResponse, web};

use blogly_core::domain::NewTag;
use blogly_shared::ApiResponse;
use blogly_shared::dto::{TagDetailResponse, TagRequest};

use super::convert;
use crate::middleware::error::AppResult;
use crate::state::AppState;

/// GET /api/tags
pub async fn list(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let tags = state.tags.list().await?;
    let body: Vec<_> = tags.into_iter().map(convert::tag).collect();
    Ok(HttpResponse::Ok().json(ApiResponse::ok(body)))
}

/// POST /api/tags
pub async fn create(
    state: web::Data<AppState>,
    body: web::Json<TagRequest>,
) -> AppResult<HttpResponse> {
    let tag = state.tags.create(NewTag::new(body.into_inner().name)).await?;
    Ok(HttpResponse::Created().json(ApiResponse::ok_with_message(
        convert::tag(tag),
        "Tag added",
    )))
}

/// GET /api/tags/{id}
pub async fn show(state: web::Data<AppState>, path: web::Path<i32>) -> AppResult<HttpResponse> {
    let id = path.into_inner();
    let tag = state.tags.get(id).await?;
    let posts = state.tags.posts(id).await?;

    Ok(HttpResponse::Ok().json(ApiResponse::ok(TagDetailResponse {
        id: tag.id,
        name: tag.name,
        posts: posts.into_iter().map(convert::post_summary).collect(),
    })))
}

/// PUT /api/tags/{id}
pub async fn rename(
    state: web::Data<AppState>,
    path: web::Path<i32>,
    body: web::Json<TagRequest>,
) -> AppResult<HttpResponse> {
    let tag = state
        .tags
        .rename(path.into_inner(), NewTag::new(body.into_inner().name))
        .await?;
    Ok(HttpResponse::Ok().json(ApiResponse::ok_with_message(
        convert::tag(tag),
        "Tag updated",
    )))
}

/// DELETE /api/tags/{id}
pub async fn delete(state: web::Data<AppState>, path: web::Path<i32>) -> AppResult<HttpResponse> {
    state.tags.delete(path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(ApiResponse::message("Tag deleted")))
}
