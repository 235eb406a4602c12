use actix_multipart::Multipart;
use actix_web::{post, web, HttpResponse, Responder};
use serde_json::json;
use tracing::error;
use uuid::Uuid;

use crate::modules::auth::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::modules::media::adapter::incoming::web::multipart::read_named_file;
use crate::modules::media::application::use_cases::manage_media::MediaError;
use crate::shared::api::ApiResponse;
use crate::AppState;

pub(super) fn media_error_response(e: MediaError) -> HttpResponse {
    match e {
        MediaError::NotOwner => ApiResponse::unauthorized(&e.to_string()),
        MediaError::ProfileNotFound | MediaError::ProjectNotFound => {
            ApiResponse::not_found(&e.to_string())
        }
        MediaError::NoFile
        | MediaError::UnsupportedType
        | MediaError::TooLarge(_)
        | MediaError::NoProfilePicture
        | MediaError::NoResume
        | MediaError::NoCoverImage => ApiResponse::bad_request(&e.to_string()),
        MediaError::StoreError(_) => {
            error!("Media operation failed: {}", e);
            ApiResponse::internal_error()
        }
    }
}

/// Upload or replace the caller's profile picture
#[utoipa::path(
    post,
    path = "/freelancer/profiles/picture/{uuid}/upload",
    tag = "media",
    params(("uuid" = Uuid, Path, description = "Owning user's uuid")),
    responses(
        (status = 201, description = "File stored; body carries the public URL"),
        (status = 400, description = "Missing, oversized or wrong-typed file", body = crate::shared::api::response::SimpleError),
        (status = 401, description = "Caller is not the owner", body = crate::shared::api::response::SimpleError),
    ),
    security(("bearer_auth" = []))
)]
#[post("/freelancer/profiles/picture/{uuid}/upload")]
pub async fn upload_profile_picture_handler(
    data: web::Data<AppState>,
    user: AuthenticatedUser,
    path: web::Path<Uuid>,
    payload: Multipart,
) -> impl Responder {
    let limit = data.media_use_case.max_file_size_bytes();
    let file = match read_named_file(payload, "image", limit).await {
        Ok(file) => file,
        Err(e) => return HttpResponse::from_error(e),
    };

    match data
        .media_use_case
        .upload_profile_picture(user.user_uuid, path.into_inner(), file)
        .await
    {
        Ok(url) => HttpResponse::Created().json(json!({
            "message": "File uploaded successfully",
            "profile_pic": url,
        })),
        Err(e) => media_error_response(e),
    }
}

/// Remove the caller's profile picture
#[utoipa::path(
    post,
    path = "/freelancer/profiles/picture/{uuid}/delete",
    tag = "media",
    params(("uuid" = Uuid, Path, description = "Owning user's uuid")),
    responses(
        (status = 204, description = "Picture removed"),
        (status = 400, description = "No picture to remove", body = crate::shared::api::response::SimpleError),
    ),
    security(("bearer_auth" = []))
)]
#[post("/freelancer/profiles/picture/{uuid}/delete")]
pub async fn delete_profile_picture_handler(
    data: web::Data<AppState>,
    user: AuthenticatedUser,
    path: web::Path<Uuid>,
) -> impl Responder {
    match data
        .media_use_case
        .delete_profile_picture(user.user_uuid, path.into_inner())
        .await
    {
        Ok(()) => ApiResponse::no_content(),
        Err(e) => media_error_response(e),
    }
}
