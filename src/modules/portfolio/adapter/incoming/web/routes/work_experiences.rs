use actix_web::{delete, get, post, web, HttpResponse, Responder};
use tracing::error;
use uuid::Uuid;

use crate::modules::auth::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::modules::portfolio::application::use_cases::manage_work_experiences::{
    WorkExperienceError, WorkExperienceRequest,
};
use crate::shared::api::ApiResponse;
use crate::AppState;

fn experience_error_response(e: WorkExperienceError) -> HttpResponse {
    match e {
        WorkExperienceError::NotOwner => ApiResponse::unauthorized(&e.to_string()),
        WorkExperienceError::ProfileNotFound | WorkExperienceError::ExperienceNotFound => {
            ApiResponse::not_found(&e.to_string())
        }
        WorkExperienceError::Validation(violations) => ApiResponse::field_errors(violations),
        WorkExperienceError::StoreError(_) => {
            error!("Work experience operation failed: {}", e);
            ApiResponse::internal_error()
        }
    }
}

/// List a profile's work experiences, newest first
#[utoipa::path(
    get,
    path = "/freelancer/profiles/{uuid}/work-experiences",
    tag = "portfolio",
    params(("uuid" = Uuid, Path, description = "Owning user's uuid")),
    responses(
        (status = 200, description = "Work experiences"),
        (status = 404, description = "No such profile", body = crate::shared::api::response::SimpleError),
    )
)]
#[get("/freelancer/profiles/{uuid}/work-experiences")]
pub async fn list_work_experiences_handler(
    data: web::Data<AppState>,
    path: web::Path<Uuid>,
) -> impl Responder {
    match data
        .portfolio_use_cases
        .work_experiences
        .list(path.into_inner())
        .await
    {
        Ok(experiences) => HttpResponse::Ok().json(experiences),
        Err(e) => experience_error_response(e),
    }
}

/// Record a work experience on the caller's profile
#[utoipa::path(
    post,
    path = "/freelancer/profiles/{uuid}/work-experience",
    tag = "portfolio",
    request_body = WorkExperienceRequest,
    params(("uuid" = Uuid, Path, description = "Owning user's uuid")),
    responses(
        (status = 201, description = "Created work experience"),
        (status = 400, description = "Missing fields", body = crate::shared::api::response::FieldErrors),
        (status = 401, description = "Caller is not the owner", body = crate::shared::api::response::SimpleError),
    ),
    security(("bearer_auth" = []))
)]
#[post("/freelancer/profiles/{uuid}/work-experience")]
pub async fn create_work_experience_handler(
    data: web::Data<AppState>,
    user: AuthenticatedUser,
    path: web::Path<Uuid>,
    body: web::Json<WorkExperienceRequest>,
) -> impl Responder {
    match data
        .portfolio_use_cases
        .work_experiences
        .create(user.user_uuid, path.into_inner(), body.into_inner())
        .await
    {
        Ok(experience) => HttpResponse::Created().json(experience),
        Err(e) => experience_error_response(e),
    }
}

/// Remove one of the caller's work experiences
#[utoipa::path(
    delete,
    path = "/freelancer/profiles/{uuid}/work-experience/{id}",
    tag = "portfolio",
    params(
        ("uuid" = Uuid, Path, description = "Owning user's uuid"),
        ("id" = i64, Path, description = "Work experience id"),
    ),
    responses(
        (status = 204, description = "Work experience removed"),
        (status = 404, description = "No such work experience on this profile", body = crate::shared::api::response::SimpleError),
    ),
    security(("bearer_auth" = []))
)]
#[delete("/freelancer/profiles/{uuid}/work-experience/{id}")]
pub async fn delete_work_experience_handler(
    data: web::Data<AppState>,
    user: AuthenticatedUser,
    path: web::Path<(Uuid, i64)>,
) -> impl Responder {
    let (profile_uuid, experience_id) = path.into_inner();
    match data
        .portfolio_use_cases
        .work_experiences
        .delete(user.user_uuid, profile_uuid, experience_id)
        .await
    {
        Ok(()) => ApiResponse::no_content(),
        Err(e) => experience_error_response(e),
    }
}
