use actix_web::{delete, get, put, web, HttpResponse, Responder};
use serde::Deserialize;
use tracing::error;
use uuid::Uuid;

use crate::modules::auth::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::modules::profile::application::domain::entities::FreelancerProfileChanges;
use crate::modules::profile::application::ports::outgoing::profile_query::{
    ProfileListFilter, ProfileOrdering,
};
use crate::modules::profile::application::use_cases::delete_freelancer_profile::DeleteProfileError;
use crate::modules::profile::application::use_cases::get_freelancer_profile::GetProfileError;
use crate::modules::profile::application::use_cases::update_freelancer_profile::UpdateProfileError;
use crate::shared::api::{ApiResponse, PageQuery};
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct ProfileListQuery {
    #[serde(flatten)]
    pub page: PageQuery,
    pub search: Option<String>,
    pub ordering: Option<String>,
}

impl ProfileListQuery {
    pub fn into_filter(self) -> ProfileListFilter {
        ProfileListFilter {
            search: self.search,
            ordering: ProfileOrdering::parse(self.ordering.as_deref()),
            offset: self.page.offset(),
            limit: self.page.page_size(),
        }
    }
}

/// List freelancer profiles
#[utoipa::path(
    get,
    path = "/freelancer/profiles",
    tag = "profiles",
    params(
        ("page" = Option<u64>, Query, description = "1-based page number"),
        ("page_size" = Option<u64>, Query, description = "Rows per page, capped at 500"),
        ("search" = Option<String>, Query, description = "Matches username, email, names and niche names"),
        ("ordering" = Option<String>, Query, description = "`username` (default) or `-username`"),
    ),
    responses((status = 200, description = "Profiles page")),
    security(("bearer_auth" = []))
)]
#[get("/freelancer/profiles")]
pub async fn list_freelancer_profiles_handler(
    data: web::Data<AppState>,
    _user: AuthenticatedUser,
    query: web::Query<ProfileListQuery>,
) -> impl Responder {
    match data
        .profile_use_cases
        .list_freelancers
        .execute(query.into_inner().into_filter())
        .await
    {
        Ok(profiles) => HttpResponse::Ok().json(profiles),
        Err(e) => {
            error!("Listing freelancer profiles failed: {}", e);
            ApiResponse::internal_error()
        }
    }
}

/// Fetch one freelancer profile with its attachments
#[utoipa::path(
    get,
    path = "/freelancer/profiles/{uuid}",
    tag = "profiles",
    params(("uuid" = Uuid, Path, description = "Owning user's uuid")),
    responses(
        (status = 200, description = "Profile with niches, skills, languages and links"),
        (status = 404, description = "No such profile", body = crate::shared::api::response::SimpleError),
    ),
    security(("bearer_auth" = []))
)]
#[get("/freelancer/profiles/{uuid}")]
pub async fn get_freelancer_profile_handler(
    data: web::Data<AppState>,
    _user: AuthenticatedUser,
    path: web::Path<Uuid>,
) -> impl Responder {
    match data
        .profile_use_cases
        .get_freelancer
        .execute(path.into_inner())
        .await
    {
        Ok(detail) => HttpResponse::Ok().json(detail),
        Err(e @ GetProfileError::NotFound) => ApiResponse::not_found(&e.to_string()),
        Err(e) => {
            error!("Fetching freelancer profile failed: {}", e);
            ApiResponse::internal_error()
        }
    }
}

/// Update scalar fields on the caller's own profile
#[utoipa::path(
    put,
    path = "/freelancer/profiles/{uuid}",
    tag = "profiles",
    request_body = FreelancerProfileChanges,
    params(("uuid" = Uuid, Path, description = "Owning user's uuid")),
    responses(
        (status = 200, description = "Updated profile"),
        (status = 403, description = "Caller is not the owner", body = crate::shared::api::response::SimpleError),
        (status = 404, description = "No such profile", body = crate::shared::api::response::SimpleError),
    ),
    security(("bearer_auth" = []))
)]
#[put("/freelancer/profiles/{uuid}")]
pub async fn update_freelancer_profile_handler(
    data: web::Data<AppState>,
    user: AuthenticatedUser,
    path: web::Path<Uuid>,
    body: web::Json<FreelancerProfileChanges>,
) -> impl Responder {
    match data
        .profile_use_cases
        .update_freelancer
        .execute(user.user_uuid, path.into_inner(), body.into_inner())
        .await
    {
        Ok(profile) => HttpResponse::Ok().json(profile),
        Err(e @ UpdateProfileError::NotOwner) => ApiResponse::forbidden(&e.to_string()),
        Err(e @ UpdateProfileError::NotFound) => ApiResponse::not_found(&e.to_string()),
        Err(e) => {
            error!("Updating freelancer profile failed: {}", e);
            ApiResponse::internal_error()
        }
    }
}

/// Delete the caller's profile and account
#[utoipa::path(
    delete,
    path = "/freelancer/profiles/{uuid}",
    tag = "profiles",
    params(("uuid" = Uuid, Path, description = "Owning user's uuid")),
    responses(
        (status = 204, description = "Profile and user removed"),
        (status = 403, description = "Caller is not the owner", body = crate::shared::api::response::SimpleError),
    ),
    security(("bearer_auth" = []))
)]
#[delete("/freelancer/profiles/{uuid}")]
pub async fn delete_freelancer_profile_handler(
    data: web::Data<AppState>,
    user: AuthenticatedUser,
    path: web::Path<Uuid>,
) -> impl Responder {
    match data
        .profile_use_cases
        .delete_freelancer
        .execute(user.user_uuid, path.into_inner())
        .await
    {
        Ok(()) => HttpResponse::NoContent().finish(),
        Err(e @ DeleteProfileError::NotOwner) => ApiResponse::forbidden(&e.to_string()),
        Err(e @ DeleteProfileError::NotFound) => ApiResponse::not_found(&e.to_string()),
        Err(e) => {
            error!("Deleting freelancer profile failed: {}", e);
            ApiResponse::internal_error()
        }
    }
}
