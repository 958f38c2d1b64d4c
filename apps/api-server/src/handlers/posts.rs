//! Post handlers: create, delete and the two paginated listings.

use actix_web::{HttpResponse, web};

use helpboard_core::domain::{NewPost, Post};
use helpboard_core::query::{ListPage, ListRequest};
use helpboard_shared::ApiResponse;
use helpboard_shared::dto::{
    CreatePostRequest, CreatePostResponse, ListPostsQuery, ListPostsResponse, PostResponse,
};

use crate::middleware::auth::Identity;
use crate::middleware::error::AppResult;
use crate::state::AppState;

/// POST /api/posts
pub async fn create(
    state: web::Data<AppState>,
    identity: Identity,
    body: web::Json<CreatePostRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();

    let id = state
        .posts
        .create(
            &identity.caller_id,
            NewPost {
                id: req.id,
                type_id: req.type_id,
                title: req.title,
                description: req.description,
                location: req.location,
                phone_number: req.phone_number,
                image: req.image,
                fulfilled: req.fulfilled,
            },
        )
        .await?;

    Ok(HttpResponse::Created().json(ApiResponse::ok(CreatePostResponse { id: id.to_string() })))
}

/// DELETE /api/posts/{id}
pub async fn delete(
    state: web::Data<AppState>,
    identity: Identity,
    path: web::Path<String>,
) -> AppResult<HttpResponse> {
    state
        .posts
        .delete(&identity.caller_id, &path.into_inner())
        .await?;

    Ok(HttpResponse::Ok().json(ApiResponse::ok(())))
}

/// GET /api/posts - newest first, optional type filter.
pub async fn list_by_time(
    state: web::Data<AppState>,
    query: web::Query<ListPostsQuery>,
) -> AppResult<HttpResponse> {
    let q = query.into_inner();
    let page = state
        .posts
        .list_by_time(ListRequest {
            type_filter: q.type_id,
            cursor: q.cursor,
            page_size: q.page_size,
        })
        .await?;

    Ok(HttpResponse::Ok().json(to_response(page)))
}

/// GET /api/posts/type/{type_id} - restricted to one type.
pub async fn list_by_type(
    state: web::Data<AppState>,
    path: web::Path<String>,
    query: web::Query<ListPostsQuery>,
) -> AppResult<HttpResponse> {
    let q = query.into_inner();
    let page = state
        .posts
        .list_by_type(ListRequest {
            type_filter: Some(path.into_inner()),
            cursor: q.cursor,
            page_size: q.page_size,
        })
        .await?;

    Ok(HttpResponse::Ok().json(to_response(page)))
}

fn to_response(page: ListPage) -> ListPostsResponse {
    ListPostsResponse {
        items: page.items.into_iter().map(post_response).collect(),
        next_cursor: page.next_cursor,
    }
}

fn post_response(post: Post) -> PostResponse {
    PostResponse {
        id: post.id.to_string(),
        type_id: post.type_id,
        created_at: post.created_at,
        title: post.title,
        description: post.description,
        location: post.location,
        phone_number: post.phone_number,
        image: post.image,
        fulfilled: post.fulfilled,
    }
}

#[cfg(test)]
mod tests {
    use actix_web::{App, test, web};
    use serde_json::json;

    use crate::handlers::configure_routes;
    use crate::state::AppState;

    macro_rules! test_app {
        () => {{
            let state = AppState::new(None).await;
            test::init_service(
                App::new()
                    .app_data(web::Data::new(state))
                    .configure(configure_routes),
            )
            .await
        }};
    }

    #[actix_web::test]
    async fn create_then_list_round_trips_through_http() {
        let app = test_app!();

        let req = test::TestRequest::post()
            .uri("/api/posts")
            .insert_header(("x-caller-id", "alice"))
            .set_json(json!({
                "typeId": "tools",
                "title": "Ladder needed",
                "description": "Cleaning gutters",
                "location": "north",
                "phoneNumber": "555-0101",
                "fulfilled": false
            }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), actix_web::http::StatusCode::CREATED);

        let req = test::TestRequest::get().uri("/api/posts").to_request();
        let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["items"].as_array().unwrap().len(), 1);
        assert_eq!(body["items"][0]["title"], "Ladder needed");
        assert!(body.get("nextCursor").is_none());
    }

    #[actix_web::test]
    async fn create_without_identity_is_unauthorized() {
        let app = test_app!();

        let req = test::TestRequest::post()
            .uri("/api/posts")
            .set_json(json!({ "typeId": "tools" }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), actix_web::http::StatusCode::UNAUTHORIZED);
    }

    #[actix_web::test]
    async fn delete_of_foreign_post_is_unauthorized() {
        let app = test_app!();

        let req = test::TestRequest::delete()
            .uri("/api/posts/alice%23a1")
            .insert_header(("x-caller-id", "mallory"))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), actix_web::http::StatusCode::UNAUTHORIZED);
    }

    #[actix_web::test]
    async fn malformed_cursor_is_a_bad_request() {
        let app = test_app!();

        let req = test::TestRequest::get()
            .uri("/api/posts?cursor=not-a-key")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), actix_web::http::StatusCode::BAD_REQUEST);
    }
}
