use actix_multipart::Multipart;
use actix_web::{post, web, HttpResponse, Responder};
use serde_json::json;
use uuid::Uuid;

use crate::modules::auth::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::modules::media::adapter::incoming::web::multipart::read_named_file;
use crate::shared::api::ApiResponse;
use crate::AppState;

use super::profile_picture::media_error_response;

/// Upload or replace the caller's resume
#[utoipa::path(
    post,
    path = "/freelancer/profiles/resume/{uuid}/upload",
    tag = "media",
    params(("uuid" = Uuid, Path, description = "Owning user's uuid")),
    responses(
        (status = 201, description = "File stored; body carries the public URL"),
        (status = 400, description = "Missing, oversized or non-PDF file", body = crate::shared::api::response::SimpleError),
        (status = 401, description = "Caller is not the owner", body = crate::shared::api::response::SimpleError),
    ),
    security(("bearer_auth" = []))
)]
#[post("/freelancer/profiles/resume/{uuid}/upload")]
pub async fn upload_resume_handler(
    data: web::Data<AppState>,
    user: AuthenticatedUser,
    path: web::Path<Uuid>,
    payload: Multipart,
) -> impl Responder {
    let limit = data.media_use_case.max_file_size_bytes();
    let file = match read_named_file(payload, "resume", limit).await {
        Ok(file) => file,
        Err(e) => return HttpResponse::from_error(e),
    };

    match data
        .media_use_case
        .upload_resume(user.user_uuid, path.into_inner(), file)
        .await
    {
        Ok(url) => HttpResponse::Created().json(json!({
            "message": "File uploaded successfully",
            "resume": url,
        })),
        Err(e) => media_error_response(e),
    }
}

/// Remove the caller's resume
#[utoipa::path(
    post,
    path = "/freelancer/profiles/resume/{uuid}/delete",
    tag = "media",
    params(("uuid" = Uuid, Path, description = "Owning user's uuid")),
    responses(
        (status = 204, description = "Resume removed"),
        (status = 400, description = "No resume to remove", body = crate::shared::api::response::SimpleError),
    ),
    security(("bearer_auth" = []))
)]
#[post("/freelancer/profiles/resume/{uuid}/delete")]
pub async fn delete_resume_handler(
    data: web::Data<AppState>,
    user: AuthenticatedUser,
    path: web::Path<Uuid>,
) -> impl Responder {
    match data
        .media_use_case
        .delete_resume(user.user_uuid, path.into_inner())
        .await
    {
        Ok(()) => ApiResponse::no_content(),
        Err(e) => media_error_response(e),
    }
}
