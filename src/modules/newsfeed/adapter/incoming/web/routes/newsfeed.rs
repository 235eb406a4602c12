use actix_web::{delete, get, post, put, web, HttpResponse, Responder};
use tracing::error;

use crate::modules::auth::adapter::incoming::web::extractors::AdminUser;
use crate::modules::newsfeed::application::use_cases::manage_newsfeed::{
    NewsFeedError, PostRequest, PostUpdateRequest,
};
use crate::shared::api::{ApiResponse, PageQuery};
use crate::AppState;

fn newsfeed_error_response(e: NewsFeedError) -> HttpResponse {
    match e {
        NewsFeedError::NotFound => ApiResponse::not_found(&e.to_string()),
        NewsFeedError::Validation(violations) => ApiResponse::field_errors(violations),
        NewsFeedError::StoreError(_) => {
            error!("Newsfeed operation failed: {}", e);
            ApiResponse::internal_error()
        }
    }
}

/// The feed, newest first
#[utoipa::path(
    get,
    path = "/newsfeed",
    tag = "newsfeed",
    params(
        ("page" = Option<u64>, Query, description = "1-based page number"),
        ("page_size" = Option<u64>, Query, description = "Rows per page, capped at 500"),
    ),
    responses((status = 200, description = "Feed page"))
)]
#[get("/newsfeed")]
pub async fn list_newsfeed_handler(
    data: web::Data<AppState>,
    query: web::Query<PageQuery>,
) -> impl Responder {
    let page = query.into_inner();
    match data
        .newsfeed_use_case
        .list(page.offset(), page.page_size())
        .await
    {
        Ok(items) => HttpResponse::Ok().json(items),
        Err(e) => newsfeed_error_response(e),
    }
}

/// One feed item
#[utoipa::path(
    get,
    path = "/newsfeed/{id}",
    tag = "newsfeed",
    params(("id" = i64, Path, description = "Feed item id")),
    responses(
        (status = 200, description = "Feed item"),
        (status = 404, description = "No such item", body = crate::shared::api::response::SimpleError),
    )
)]
#[get("/newsfeed/{id}")]
pub async fn get_newsfeed_item_handler(
    data: web::Data<AppState>,
    path: web::Path<i64>,
) -> impl Responder {
    match data.newsfeed_use_case.get(path.into_inner()).await {
        Ok(item) => HttpResponse::Ok().json(item),
        Err(e) => newsfeed_error_response(e),
    }
}

/// Publish a feed item; admin only
#[utoipa::path(
    post,
    path = "/newsfeed/create",
    tag = "newsfeed",
    request_body = PostRequest,
    responses(
        (status = 201, description = "Created item"),
        (status = 400, description = "Missing or overlong fields", body = crate::shared::api::response::FieldErrors),
        (status = 403, description = "Caller is not an admin", body = crate::shared::api::response::SimpleError),
    ),
    security(("bearer_auth" = []))
)]
#[post("/newsfeed/create")]
pub async fn create_newsfeed_item_handler(
    data: web::Data<AppState>,
    _admin: AdminUser,
    body: web::Json<PostRequest>,
) -> impl Responder {
    match data.newsfeed_use_case.create(body.into_inner()).await {
        Ok(item) => HttpResponse::Created().json(item),
        Err(e) => newsfeed_error_response(e),
    }
}

/// Edit a feed item; admin only
#[utoipa::path(
    put,
    path = "/newsfeed/{id}",
    tag = "newsfeed",
    request_body = PostUpdateRequest,
    params(("id" = i64, Path, description = "Feed item id")),
    responses(
        (status = 200, description = "Updated item"),
        (status = 404, description = "No such item", body = crate::shared::api::response::SimpleError),
    ),
    security(("bearer_auth" = []))
)]
#[put("/newsfeed/{id}")]
pub async fn update_newsfeed_item_handler(
    data: web::Data<AppState>,
    _admin: AdminUser,
    path: web::Path<i64>,
    body: web::Json<PostUpdateRequest>,
) -> impl Responder {
    match data
        .newsfeed_use_case
        .update(path.into_inner(), body.into_inner())
        .await
    {
        Ok(item) => HttpResponse::Ok().json(item),
        Err(e) => newsfeed_error_response(e),
    }
}

/// Remove a feed item; admin only
#[utoipa::path(
    delete,
    path = "/newsfeed/{id}",
    tag = "newsfeed",
    params(("id" = i64, Path, description = "Feed item id")),
    responses(
        (status = 204, description = "Item removed"),
        (status = 404, description = "No such item", body = crate::shared::api::response::SimpleError),
    ),
    security(("bearer_auth" = []))
)]
#[delete("/newsfeed/{id}")]
pub async fn delete_newsfeed_item_handler(
    data: web::Data<AppState>,
    _admin: AdminUser,
    path: web::Path<i64>,
) -> impl Responder {
    match data.newsfeed_use_case.delete(path.into_inner()).await {
        Ok(()) => ApiResponse::no_content(),
        Err(e) => newsfeed_error_response(e),
    }
}
