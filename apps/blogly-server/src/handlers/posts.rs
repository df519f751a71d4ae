//! Post handlers.

use actix_web::{HttpResponse, web};

use blogly_core::domain::PostUpdate;
use blogly_shared::ApiResponse;
use blogly_shared::dto::{SetTagsRequest, UpdatePostRequest};

use super::convert;
use crate::middleware::error::AppResult;
use crate::state::AppState;

/// GET /api/posts/{id}
pub async fn show(state: web::Data<AppState>, path: web::Path<i32>) -> AppResult<HttpResponse> {
    let id = path.into_inner();
    let post = state.posts.get(id).await?;
    let tags = state.posts.tags(id).await?;
    Ok(HttpResponse::Ok().json(ApiResponse::ok(convert::post(post, tags))))
}

/// PUT /api/posts/{id}
pub async fn update(
    state: web::Data<AppState>,
    path: web::Path<i32>,
    body: web::Json<UpdatePostRequest>,
) -> AppResult<HttpResponse> {
    let id = path.into_inner();
    let req = body.into_inner();
    let post = state
        .posts
        .update(
            id,
            PostUpdate {
                title: req.title,
                content: req.content,
                tag_ids: req.tag_ids,
                created_at: req.created_at,
            },
        )
        .await?;
    let tags = state.posts.tags(id).await?;

    Ok(HttpResponse::Ok().json(ApiResponse::ok_with_message(
        convert::post(post, tags),
        "Post updated",
    )))
}

/// DELETE /api/posts/{id}
pub async fn delete(state: web::Data<AppState>, path: web::Path<i32>) -> AppResult<HttpResponse> {
    state.posts.delete(path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(ApiResponse::message("Post deleted")))
}

/// PUT /api/posts/{id}/tags
pub async fn set_tags(
    state: web::Data<AppState>,
    path: web::Path<i32>,
    body: web::Json<SetTagsRequest>,
) -> AppResult<HttpResponse> {
    let id = path.into_inner();
    state.tag_links.set_tags(id, &body.tag_ids).await?;
    let tags = state.posts.tags(id).await?;
    let body: Vec<_> = tags.into_iter().map(convert::tag).collect();
    Ok(HttpResponse::Ok().json(ApiResponse::ok(body)))
}
