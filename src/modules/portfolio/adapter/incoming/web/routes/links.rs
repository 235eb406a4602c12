use actix_web::{delete, post, put, web, HttpResponse, Responder};
use tracing::error;
use uuid::Uuid;

use crate::modules::auth::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::modules::portfolio::application::use_cases::manage_links::{LinkError, LinkRequest};
use crate::shared::api::ApiResponse;
use crate::AppState;

fn link_error_response(e: LinkError) -> HttpResponse {
    match e {
        LinkError::NotOwner => ApiResponse::unauthorized(&e.to_string()),
        LinkError::ProfileNotFound | LinkError::LinkNotFound => {
            ApiResponse::not_found(&e.to_string())
        }
        LinkError::Validation(violations) => ApiResponse::field_errors(violations),
        LinkError::StoreError(_) => {
            error!("Link operation failed: {}", e);
            ApiResponse::internal_error()
        }
    }
}

/// Add a link to the caller's profile
#[utoipa::path(
    post,
    path = "/freelancer/profiles/{uuid}/links",
    tag = "portfolio",
    request_body = LinkRequest,
    params(("uuid" = Uuid, Path, description = "Owning user's uuid")),
    responses(
        (status = 201, description = "Created link"),
        (status = 400, description = "Missing fields", body = crate::shared::api::response::FieldErrors),
        (status = 401, description = "Caller is not the owner", body = crate::shared::api::response::SimpleError),
    ),
    security(("bearer_auth" = []))
)]
#[post("/freelancer/profiles/{uuid}/links")]
pub async fn create_link_handler(
    data: web::Data<AppState>,
    user: AuthenticatedUser,
    path: web::Path<Uuid>,
    body: web::Json<LinkRequest>,
) -> impl Responder {
    match data
        .portfolio_use_cases
        .links
        .create(user.user_uuid, path.into_inner(), body.into_inner())
        .await
    {
        Ok(link) => HttpResponse::Created().json(link),
        Err(e) => link_error_response(e),
    }
}

/// Update one of the caller's links
#[utoipa::path(
    put,
    path = "/freelancer/profiles/{uuid}/links/{id}",
    tag = "portfolio",
    request_body = LinkRequest,
    params(
        ("uuid" = Uuid, Path, description = "Owning user's uuid"),
        ("id" = i64, Path, description = "Link id"),
    ),
    responses(
        (status = 200, description = "Updated link"),
        (status = 404, description = "No such link on this profile", body = crate::shared::api::response::SimpleError),
    ),
    security(("bearer_auth" = []))
)]
#[put("/freelancer/profiles/{uuid}/links/{id}")]
pub async fn update_link_handler(
    data: web::Data<AppState>,
    user: AuthenticatedUser,
    path: web::Path<(Uuid, i64)>,
    body: web::Json<LinkRequest>,
) -> impl Responder {
    let (profile_uuid, link_id) = path.into_inner();
    match data
        .portfolio_use_cases
        .links
        .update(user.user_uuid, profile_uuid, link_id, body.into_inner())
        .await
    {
        Ok(link) => HttpResponse::Ok().json(link),
        Err(e) => link_error_response(e),
    }
}

/// Remove one of the caller's links
#[utoipa::path(
    delete,
    path = "/freelancer/profiles/{uuid}/links/{id}",
    tag = "portfolio",
    params(
        ("uuid" = Uuid, Path, description = "Owning user's uuid"),
        ("id" = i64, Path, description = "Link id"),
    ),
    responses(
        (status = 204, description = "Link removed"),
        (status = 404, description = "No such link on this profile", body = crate::shared::api::response::SimpleError),
    ),
    security(("bearer_auth" = []))
)]
#[delete("/freelancer/profiles/{uuid}/links/{id}")]
pub async fn delete_link_handler(
    data: web::Data<AppState>,
    user: AuthenticatedUser,
    path: web::Path<(Uuid, i64)>,
) -> impl Responder {
    let (profile_uuid, link_id) = path.into_inner();
    match data
        .portfolio_use_cases
        .links
        .delete(user.user_uuid, profile_uuid, link_id)
        .await
    {
        Ok(()) => ApiResponse::no_content(),
        Err(e) => link_error_response(e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::auth::application::domain::entities::Role;
    use crate::modules::portfolio::application::use_cases::manage_links::ILinksUseCase;
    use crate::modules::profile::application::domain::entities::ProfileLink;
    use crate::tests::support::auth::{access_token, test_token_provider};
    use crate::tests::support::TestAppStateBuilder;
    use actix_web::{test, App};
    use async_trait::async_trait;

    struct OwnerGuardedLinks;

    #[async_trait]
    impl ILinksUseCase for OwnerGuardedLinks {
        async fn create(
            &self,
            caller_uuid: Uuid,
            profile_uuid: Uuid,
            request: LinkRequest,
        ) -> Result<ProfileLink, LinkError> {
            if caller_uuid != profile_uuid {
                return Err(LinkError::NotOwner);
            }
            Ok(ProfileLink {
                id: 5,
                profile_id: 7,
                name: request.name.unwrap_or_default(),
                icon: request.icon,
                url: request.url.unwrap_or_default(),
            })
        }

        async fn update(
            &self,
            _caller_uuid: Uuid,
            _profile_uuid: Uuid,
            _link_id: i64,
            _request: LinkRequest,
        ) -> Result<ProfileLink, LinkError> {
            Err(LinkError::LinkNotFound)
        }

        async fn delete(
            &self,
            _caller_uuid: Uuid,
            _profile_uuid: Uuid,
            _link_id: i64,
        ) -> Result<(), LinkError> {
            Ok(())
        }
    }

    #[actix_web::test]
    async fn owner_adds_a_link() {
        let provider = test_token_provider();
        let (uuid, token) = access_token(&provider, Role::Freelancer);
        let state = TestAppStateBuilder::default()
            .with_links(OwnerGuardedLinks)
            .build();
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(state))
                .app_data(web::Data::new(provider))
                .service(create_link_handler),
        )
        .await;

        let req = test::TestRequest::post()
            .uri(&format!("/freelancer/profiles/{}/links", uuid))
            .insert_header(("Authorization", format!("Bearer {}", token)))
            .set_json(serde_json::json!({
                "name": "GitHub",
                "url": "https://github.com/ada"
            }))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), 201);
        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["name"], "GitHub");
    }

    #[actix_web::test]
    async fn adding_a_link_to_a_foreign_profile_is_rejected() {
        let provider = test_token_provider();
        let (_, token) = access_token(&provider, Role::Freelancer);
        let state = TestAppStateBuilder::default()
            .with_links(OwnerGuardedLinks)
            .build();
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(state))
                .app_data(web::Data::new(provider))
                .service(create_link_handler),
        )
        .await;

        let req = test::TestRequest::post()
            .uri(&format!("/freelancer/profiles/{}/links", Uuid::new_v4()))
            .insert_header(("Authorization", format!("Bearer {}", token)))
            .set_json(serde_json::json!({
                "name": "GitHub",
                "url": "https://github.com/ada"
            }))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), 401);
        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["error"], "User is unauthorized");
    }

    #[actix_web::test]
    async fn updating_a_missing_link_is_not_found() {
        let provider = test_token_provider();
        let (uuid, token) = access_token(&provider, Role::Freelancer);
        let state = TestAppStateBuilder::default()
            .with_links(OwnerGuardedLinks)
            .build();
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(state))
                .app_data(web::Data::new(provider))
                .service(update_link_handler),
        )
        .await;

        let req = test::TestRequest::put()
            .uri(&format!("/freelancer/profiles/{}/links/99", uuid))
            .insert_header(("Authorization", format!("Bearer {}", token)))
            .set_json(serde_json::json!({
                "name": "GitHub",
                "url": "https://github.com/ada"
            }))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), 404);
        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["error"], "Link not found");
    }
}
