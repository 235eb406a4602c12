use actix_multipart::Multipart;
use actix_web::{post, web, HttpResponse, Responder};
use serde_json::json;
use uuid::Uuid;

use crate::modules::auth::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::modules::media::adapter::incoming::web::multipart::read_named_file;
use crate::shared::api::ApiResponse;
use crate::AppState;

use super::profile_picture::media_error_response;

/// Upload or replace a project's cover image
#[utoipa::path(
    post,
    path = "/freelancer/profiles/{uuid}/project/coverimage/{id}/upload",
    tag = "media",
    params(
        ("uuid" = Uuid, Path, description = "Owning user's uuid"),
        ("id" = i64, Path, description = "Project id"),
    ),
    responses(
        (status = 201, description = "File stored; body carries the public URL"),
        (status = 400, description = "Missing, oversized or wrong-typed file", body = crate::shared::api::response::SimpleError),
        (status = 404, description = "No such project on this profile", body = crate::shared::api::response::SimpleError),
    ),
    security(("bearer_auth" = []))
)]
#[post("/freelancer/profiles/{uuid}/project/coverimage/{id}/upload")]
pub async fn upload_project_cover_handler(
    data: web::Data<AppState>,
    user: AuthenticatedUser,
    path: web::Path<(Uuid, i64)>,
    payload: Multipart,
) -> impl Responder {
    let (profile_uuid, project_id) = path.into_inner();
    let limit = data.media_use_case.max_file_size_bytes();
    let file = match read_named_file(payload, "image", limit).await {
        Ok(file) => file,
        Err(e) => return HttpResponse::from_error(e),
    };

    match data
        .media_use_case
        .upload_project_cover(user.user_uuid, profile_uuid, project_id, file)
        .await
    {
        Ok(url) => HttpResponse::Created().json(json!({
            "message": "File uploaded successfully",
            "cover_image": url,
        })),
        Err(e) => media_error_response(e),
    }
}

/// Remove a project's cover image
#[utoipa::path(
    post,
    path = "/freelancer/profiles/{uuid}/project/coverimage/{id}/delete",
    tag = "media",
    params(
        ("uuid" = Uuid, Path, description = "Owning user's uuid"),
        ("id" = i64, Path, description = "Project id"),
    ),
    responses(
        (status = 204, description = "Cover image removed"),
        (status = 400, description = "No cover image to remove", body = crate::shared::api::response::SimpleError),
    ),
    security(("bearer_auth" = []))
)]
#[post("/freelancer/profiles/{uuid}/project/coverimage/{id}/delete")]
pub async fn delete_project_cover_handler(
    data: web::Data<AppState>,
    user: AuthenticatedUser,
    path: web::Path<(Uuid, i64)>,
) -> impl Responder {
    let (profile_uuid, project_id) = path.into_inner();
    match data
        .media_use_case
        .delete_project_cover(user.user_uuid, profile_uuid, project_id)
        .await
    {
        Ok(()) => ApiResponse::no_content(),
        Err(e) => media_error_response(e),
    }
}

#[cfg(test)]
mod tests {
    use super::super::profile_picture::tests::{multipart_body, PolicyEnforcingMedia};
    use super::*;
    use crate::modules::auth::application::domain::entities::Role;
    use crate::tests::support::auth::{access_token, test_token_provider};
    use crate::tests::support::TestAppStateBuilder;
    use actix_web::{test, App};

    #[actix_web::test]
    async fn a_cover_image_upload_reports_the_new_url() {
        let provider = test_token_provider();
        let (uuid, token) = access_token(&provider, Role::Freelancer);
        let state = TestAppStateBuilder::default()
            .with_media(PolicyEnforcingMedia)
            .build();
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(state))
                .app_data(web::Data::new(provider))
                .service(upload_project_cover_handler),
        )
        .await;

        let (content_type, body) = multipart_body("image", "image/jpeg", "jpegbytes");
        let req = test::TestRequest::post()
            .uri(&format!(
                "/freelancer/profiles/{}/project/coverimage/42/upload",
                uuid
            ))
            .insert_header(("Authorization", format!("Bearer {}", token)))
            .insert_header(("Content-Type", content_type))
            .set_payload(body)
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), 201);
        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["message"], "File uploaded successfully");
        assert!(body["cover_image"].as_str().is_some());
    }

    #[actix_web::test]
    async fn deleting_an_absent_cover_is_a_bad_request() {
        let provider = test_token_provider();
        let (uuid, token) = access_token(&provider, Role::Freelancer);
        let state = TestAppStateBuilder::default()
            .with_media(PolicyEnforcingMedia)
            .build();
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(state))
                .app_data(web::Data::new(provider))
                .service(delete_project_cover_handler),
        )
        .await;

        let req = test::TestRequest::post()
            .uri(&format!(
                "/freelancer/profiles/{}/project/coverimage/42/delete",
                uuid
            ))
            .insert_header(("Authorization", format!("Bearer {}", token)))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), 400);
        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["error"], "Project has no cover image");
    }
}
