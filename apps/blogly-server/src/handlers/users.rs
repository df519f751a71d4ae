//! User handlers.

use actix_web::{HttpResponse, web};

use blogly_core::domain::{NewPost, NewUser, UserUpdate};
use blogly_shared::ApiResponse;
use blogly_shared::dto::{
    CreatePostRequest, CreateUserRequest, UpdateUserRequest, UserDetailResponse,
};

use super::convert;
use crate::middleware::error::AppResult;
use crate::state::AppState;

/// GET /api/users
pub async fn list(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let users = state.users.list().await?;
    let body: Vec<_> = users.into_iter().map(convert::user).collect();
    Ok(HttpResponse::Ok().json(ApiResponse::ok(body)))
}

/// POST /api/users
pub async fn create(
    state: web::Data<AppState>,
    body: web::Json<CreateUserRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();
    let user = state
        .users
        .create(NewUser {
            username: req.username,
            first_name: req.first_name,
            last_name: req.last_name,
            image_url: req.image_url,
        })
        .await?;

    Ok(HttpResponse::Created().json(ApiResponse::ok_with_message(
        convert::user(user),
        "User added successfully",
    )))
}

/// GET /api/users/{id}
pub async fn show(state: web::Data<AppState>, path: web::Path<i32>) -> AppResult<HttpResponse> {
    let id = path.into_inner();
    let user = state.users.get(id).await?;
    let posts = state.posts.list_by_user(id).await?;

    Ok(HttpResponse::Ok().json(ApiResponse::ok(UserDetailResponse {
        user: convert::user(user),
        posts: posts.into_iter().map(convert::post_summary).collect(),
    })))
}

/// PATCH /api/users/{id}
pub async fn update(
    state: web::Data<AppState>,
    path: web::Path<i32>,
    body: web::Json<UpdateUserRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();
    let user = state
        .users
        .update(
            path.into_inner(),
            UserUpdate {
                username: req.username,
                first_name: req.first_name,
                last_name: req.last_name,
                image_url: req.image_url,
            },
        )
        .await?;

    Ok(HttpResponse::Ok().json(ApiResponse::ok_with_message(
        convert::user(user),
        "User updated",
    )))
}

/// DELETE /api/users/{id}
pub async fn delete(state: web::Data<AppState>, path: web::Path<i32>) -> AppResult<HttpResponse> {
    state.users.delete(path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(ApiResponse::message("User deleted")))
}

/// GET /api/users/{id}/posts
pub async fn list_posts(
    state: web::Data<AppState>,
    path: web::Path<i32>,
) -> AppResult<HttpResponse> {
    let posts = state.posts.list_by_user(path.into_inner()).await?;
    let body: Vec<_> = posts.into_iter().map(convert::post_summary).collect();
    Ok(HttpResponse::Ok().json(ApiResponse::ok(body)))
}

/// POST /api/users/{id}/posts
pub async fn create_post(
    state: web::Data<AppState>,
    path: web::Path<i32>,
    body: web::Json<CreatePostRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();
    let post = state
        .posts
        .create(NewPost {
            user_id: path.into_inner(),
            title: req.title,
            content: req.content,
            tag_ids: req.tag_ids,
            created_at: req.created_at,
        })
        .await?;
    let tags = state.posts.tags(post.id).await?;

    Ok(HttpResponse::Created().json(ApiResponse::ok_with_message(
        convert::post(post, tags),
        "Post added",
    )))
}
