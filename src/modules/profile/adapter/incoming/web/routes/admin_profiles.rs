use actix_web::{get, put, web, HttpResponse, Responder};
use tracing::error;
use uuid::Uuid;

use crate::modules::auth::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::modules::profile::adapter::incoming::web::routes::freelancer_profiles::ProfileListQuery;
use crate::modules::profile::application::domain::entities::BasicProfileChanges;
use crate::modules::profile::application::use_cases::get_freelancer_profile::GetProfileError;
use crate::modules::profile::application::use_cases::update_freelancer_profile::UpdateProfileError;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// List admin profiles
#[utoipa::path(
    get,
    path = "/admins/profiles",
    tag = "profiles",
    params(
        ("page" = Option<u64>, Query, description = "1-based page number"),
        ("page_size" = Option<u64>, Query, description = "Rows per page, capped at 500"),
        ("search" = Option<String>, Query, description = "Matches username, email and names"),
        ("ordering" = Option<String>, Query, description = "`username` (default) or `-username`"),
    ),
    responses((status = 200, description = "Profiles page")),
    security(("bearer_auth" = []))
)]
#[get("/admins/profiles")]
pub async fn list_admin_profiles_handler(
    data: web::Data<AppState>,
    _user: AuthenticatedUser,
    query: web::Query<ProfileListQuery>,
) -> impl Responder {
    match data
        .profile_use_cases
        .list_admins
        .execute(query.into_inner().into_filter())
        .await
    {
        Ok(profiles) => HttpResponse::Ok().json(profiles),
        Err(e) => {
            error!("Listing admin profiles failed: {}", e);
            ApiResponse::internal_error()
        }
    }
}

/// Fetch one admin profile
#[utoipa::path(
    get,
    path = "/admins/profiles/{uuid}",
    tag = "profiles",
    params(("uuid" = Uuid, Path, description = "Owning user's uuid")),
    responses(
        (status = 200, description = "Admin profile"),
        (status = 404, description = "No such profile", body = crate::shared::api::response::SimpleError),
    ),
    security(("bearer_auth" = []))
)]
#[get("/admins/profiles/{uuid}")]
pub async fn get_admin_profile_handler(
    data: web::Data<AppState>,
    _user: AuthenticatedUser,
    path: web::Path<Uuid>,
) -> impl Responder {
    match data
        .profile_use_cases
        .get_admin
        .execute(path.into_inner())
        .await
    {
        Ok(profile) => HttpResponse::Ok().json(profile),
        Err(e @ GetProfileError::NotFound) => ApiResponse::not_found(&e.to_string()),
        Err(e) => {
            error!("Fetching admin profile failed: {}", e);
            ApiResponse::internal_error()
        }
    }
}

/// Update scalar fields on the caller's own admin profile
#[utoipa::path(
    put,
    path = "/admins/profiles/{uuid}",
    tag = "profiles",
    request_body = BasicProfileChanges,
    params(("uuid" = Uuid, Path, description = "Owning user's uuid")),
    responses(
        (status = 200, description = "Updated profile"),
        (status = 403, description = "Caller is not the owner", body = crate::shared::api::response::SimpleError),
    ),
    security(("bearer_auth" = []))
)]
#[put("/admins/profiles/{uuid}")]
pub async fn update_admin_profile_handler(
    data: web::Data<AppState>,
    user: AuthenticatedUser,
    path: web::Path<Uuid>,
    body: web::Json<BasicProfileChanges>,
) -> impl Responder {
    match data
        .profile_use_cases
        .update_admin
        .execute(user.user_uuid, path.into_inner(), body.into_inner())
        .await
    {
        Ok(profile) => HttpResponse::Ok().json(profile),
        Err(e @ UpdateProfileError::NotOwner) => ApiResponse::forbidden(&e.to_string()),
        Err(e @ UpdateProfileError::NotFound) => ApiResponse::not_found(&e.to_string()),
        Err(e) => {
            error!("Updating admin profile failed: {}", e);
            ApiResponse::internal_error()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::auth::application::domain::entities::Role;
    use crate::modules::profile::application::domain::entities::BasicProfile;
    use crate::modules::profile::application::use_cases::get_admin_profile::IGetAdminProfileUseCase;
    use crate::tests::support::auth::{access_token, test_token_provider};
    use crate::tests::support::TestAppStateBuilder;
    use actix_web::{test, App};
    use async_trait::async_trait;

    struct MissingAdmin;

    #[async_trait]
    impl IGetAdminProfileUseCase for MissingAdmin {
        async fn execute(&self, _user_uuid: Uuid) -> Result<BasicProfile, GetProfileError> {
            Err(GetProfileError::NotFound)
        }
    }

    #[actix_web::test]
    async fn unknown_admin_profile_is_404() {
        let provider = test_token_provider();
        let (_, token) = access_token(&provider, Role::Sponsor);
        let state = TestAppStateBuilder::default()
            .with_get_admin_profile(MissingAdmin)
            .build();
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(state))
                .app_data(web::Data::new(provider))
                .service(get_admin_profile_handler),
        )
        .await;

        let req = test::TestRequest::get()
            .uri(&format!("/admins/profiles/{}", Uuid::new_v4()))
            .insert_header(("Authorization", format!("Bearer {}", token)))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), 404);
        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["error"], "Profile not found");
    }
}
