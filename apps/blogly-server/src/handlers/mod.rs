//! HTTP handlers and route configuration.

mod convert;
mod health;
mod posts;
mod tags;
mod users;

use actix_web::web;

use crate::middleware::error::{json_error_handler, path_error_handler};

/// Configure all application routes. One handler per path and method.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(json_error_handler))
        .app_data(web::PathConfig::default().error_handler(path_error_handler))
        .service(
            web::scope("/api")
                .route("/health", web::get().to(health::health_check))
                .service(
                    web::scope("/users")
                        .route("", web::get().to(users::list))
                        .route("", web::post().to(users::create))
                        .route("/{id}", web::get().to(users::show))
                        .route("/{id}", web::patch().to(users::update))
                        .route("/{id}", web::delete().to(users::delete))
                        .route("/{id}/posts", web::get().to(users::list_posts))
                        .route("/{id}/posts", web::post().to(users::create_post)),
                )
                .service(
                    web::scope("/posts")
                        .route("/{id}", web::get().to(posts::show))
                        .route("/{id}", web::put().to(posts::update))
                        .route("/{id}", web::delete().to(posts::delete))
                        .route("/{id}/tags", web::put().to(posts::set_tags)),
                )
                .service(
                    web::scope("/tags")
                        .route("", web::get().to(tags::list))
                        .route("", web::post().to(tags::create))
                        .route("/{id}", web::get().to(tags::show))
                        .route("/{id}", web::put().to(tags::rename))
                        .route("/{id}", web::delete().to(tags::delete)),
                ),
        );
}

#[cfg(test)]
mod tests {
    use actix_web::{App, http::StatusCode, test};
    use migration::{Migrator, MigratorTrait};
    use serde_json::{Value, json};

    use blogly_infra::{DatabaseConfig, connect};

    use super::configure_routes;
    use crate::state::AppState;

    async fn state() -> AppState {
        let db = connect(&DatabaseConfig::new("sqlite::memory:"))
            .await
            .unwrap();
        Migrator::up(&db, None).await.unwrap();
        AppState::new(db)
    }

    macro_rules! app {
        () => {
            test::init_service(
                App::new()
                    .app_data(actix_web::web::Data::new(state().await))
                    .configure(configure_routes),
            )
            .await
        };
    }

    #[actix_web::test]
    async fn test_health() {
        let app = app!();
        let req = test::TestRequest::get().uri("/api/health").to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["status"], "ok");
    }

    #[actix_web::test]
    async fn test_user_lifecycle() {
        let app = app!();

        let req = test::TestRequest::post()
            .uri("/api/users")
            .set_json(json!({"username": "jdoe", "first_name": "Jane", "last_name": "Doe"}))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::CREATED);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["message"], "User added successfully");
        assert_eq!(body["data"]["full_name"], "Jane Doe");
        let id = body["data"]["id"].as_i64().unwrap();

        let req = test::TestRequest::post()
            .uri("/api/users")
            .set_json(json!({"username": "jdoe", "first_name": "J", "last_name": "D"}))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let req = test::TestRequest::patch()
            .uri(&format!("/api/users/{id}"))
            .set_json(json!({"last_name": "Roe"}))
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["data"]["last_name"], "Roe");

        let req = test::TestRequest::get().uri("/api/users").to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["data"].as_array().unwrap().len(), 1);

        let req = test::TestRequest::delete()
            .uri(&format!("/api/users/{id}"))
            .to_request();
        assert_eq!(test::call_service(&app, req).await.status(), StatusCode::OK);

        let req = test::TestRequest::get()
            .uri(&format!("/api/users/{id}"))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["status"], 404);
    }

    #[actix_web::test]
    async fn test_posts_and_tags() {
        let app = app!();

        let req = test::TestRequest::post()
            .uri("/api/users")
            .set_json(json!({"username": "jdoe", "first_name": "Jane", "last_name": "Doe"}))
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        let user_id = body["data"]["id"].as_i64().unwrap();

        let mut tag_ids = Vec::new();
        for name in ["intro", "misc"] {
            let req = test::TestRequest::post()
                .uri("/api/tags")
                .set_json(json!({ "name": name }))
                .to_request();
            let body: Value = test::call_and_read_body_json(&app, req).await;
            tag_ids.push(body["data"]["id"].as_i64().unwrap());
        }

        let req = test::TestRequest::post()
            .uri(&format!("/api/users/{user_id}/posts"))
            .set_json(json!({"title": "Hello", "content": "World", "tag_ids": [tag_ids[0]]}))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::CREATED);
        let body: Value = test::read_body_json(resp).await;
        let post_id = body["data"]["id"].as_i64().unwrap();
        assert_eq!(body["data"]["tags"][0]["name"], "intro");

        let req = test::TestRequest::put()
            .uri(&format!("/api/posts/{post_id}/tags"))
            .set_json(json!({ "tag_ids": [tag_ids[1]] }))
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["data"], json!([{ "id": tag_ids[1], "name": "misc" }]));

        let req = test::TestRequest::get()
            .uri(&format!("/api/tags/{}", tag_ids[1]))
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["data"]["posts"][0]["id"], post_id);

        let req = test::TestRequest::put()
            .uri(&format!("/api/posts/{post_id}"))
            .set_json(json!({"title": "", "content": "World"}))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let req = test::TestRequest::get()
            .uri(&format!("/api/users/{user_id}"))
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["data"]["posts"].as_array().unwrap().len(), 1);

        let req = test::TestRequest::post()
            .uri("/api/users/999/posts")
            .set_json(json!({"title": "Hello", "content": "World"}))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }

    #[actix_web::test]
    async fn test_edit_list_and_delete_posts() {
        let app = app!();

        let req = test::TestRequest::post()
            .uri("/api/users")
            .set_json(json!({"username": "jdoe", "first_name": "Jane", "last_name": "Doe"}))
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        let user_id = body["data"]["id"].as_i64().unwrap();

        let mut tag_ids = Vec::new();
        for name in ["intro", "misc"] {
            let req = test::TestRequest::post()
                .uri("/api/tags")
                .set_json(json!({ "name": name }))
                .to_request();
            let body: Value = test::call_and_read_body_json(&app, req).await;
            tag_ids.push(body["data"]["id"].as_i64().unwrap());
        }

        let req = test::TestRequest::post()
            .uri(&format!("/api/users/{user_id}/posts"))
            .set_json(json!({"title": "Hello", "content": "World", "tag_ids": [tag_ids[0]]}))
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        let post_id = body["data"]["id"].as_i64().unwrap();

        let req = test::TestRequest::get()
            .uri(&format!("/api/users/{user_id}/posts"))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["data"].as_array().unwrap().len(), 1);
        assert_eq!(body["data"][0]["title"], "Hello");

        let req = test::TestRequest::put()
            .uri(&format!("/api/posts/{post_id}"))
            .set_json(json!({"title": "Edited", "content": "Again", "tag_ids": [tag_ids[1]]}))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["message"], "Post updated");
        assert_eq!(body["data"]["title"], "Edited");
        assert_eq!(body["data"]["content"], "Again");
        assert_eq!(body["data"]["tags"], json!([{ "id": tag_ids[1], "name": "misc" }]));

        let req = test::TestRequest::delete()
            .uri(&format!("/api/posts/{post_id}"))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["message"], "Post deleted");

        let req = test::TestRequest::get()
            .uri(&format!("/api/posts/{post_id}"))
            .to_request();
        assert_eq!(test::call_service(&app, req).await.status(), StatusCode::NOT_FOUND);

        let req = test::TestRequest::get()
            .uri(&format!("/api/users/{user_id}/posts"))
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert!(body["data"].as_array().unwrap().is_empty());

        let req = test::TestRequest::get().uri("/api/users/999/posts").to_request();
        assert_eq!(test::call_service(&app, req).await.status(), StatusCode::NOT_FOUND);
    }

    #[actix_web::test]
    async fn test_rename_and_delete_tags() {
        let app = app!();

        let mut tag_ids = Vec::new();
        for name in ["intro", "misc"] {
            let req = test::TestRequest::post()
                .uri("/api/tags")
                .set_json(json!({ "name": name }))
                .to_request();
            let resp = test::call_service(&app, req).await;
            assert_eq!(resp.status(), StatusCode::CREATED);
            let body: Value = test::read_body_json(resp).await;
            tag_ids.push(body["data"]["id"].as_i64().unwrap());
        }

        let req = test::TestRequest::put()
            .uri(&format!("/api/tags/{}", tag_ids[0]))
            .set_json(json!({ "name": "welcome" }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["message"], "Tag updated");
        assert_eq!(body["data"], json!({ "id": tag_ids[0], "name": "welcome" }));

        let req = test::TestRequest::put()
            .uri(&format!("/api/tags/{}", tag_ids[0]))
            .set_json(json!({ "name": "misc" }))
            .to_request();
        assert_eq!(test::call_service(&app, req).await.status(), StatusCode::BAD_REQUEST);

        let req = test::TestRequest::get().uri("/api/tags").to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(
            body["data"],
            json!([
                { "id": tag_ids[1], "name": "misc" },
                { "id": tag_ids[0], "name": "welcome" },
            ])
        );

        let req = test::TestRequest::delete()
            .uri(&format!("/api/tags/{}", tag_ids[1]))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["message"], "Tag deleted");

        let req = test::TestRequest::get()
            .uri(&format!("/api/tags/{}", tag_ids[1]))
            .to_request();
        assert_eq!(test::call_service(&app, req).await.status(), StatusCode::NOT_FOUND);
    }

    #[actix_web::test]
    async fn test_unknown_post_and_tag_are_not_found() {
        let app = app!();

        let requests = [
            test::TestRequest::get().uri("/api/posts/999"),
            test::TestRequest::put()
                .uri("/api/posts/999")
                .set_json(json!({"title": "Hello", "content": "World"})),
            test::TestRequest::delete().uri("/api/posts/999"),
            test::TestRequest::put()
                .uri("/api/posts/999/tags")
                .set_json(json!({ "tag_ids": [] })),
            test::TestRequest::get().uri("/api/tags/999"),
            test::TestRequest::put()
                .uri("/api/tags/999")
                .set_json(json!({ "name": "intro" })),
            test::TestRequest::delete().uri("/api/tags/999"),
        ];

        for req in requests {
            let resp = test::call_service(&app, req.to_request()).await;
            assert_eq!(resp.status(), StatusCode::NOT_FOUND);
            let body: Value = test::read_body_json(resp).await;
            assert_eq!(body["status"], 404);
        }
    }

    #[actix_web::test]
    async fn test_malformed_input_is_bad_request() {
        let app = app!();

        let req = test::TestRequest::get().uri("/api/users/abc").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let req = test::TestRequest::post()
            .uri("/api/tags")
            .set_json(json!({ "label": "intro" }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["title"], "Bad Request");
    }
}
