use actix_web::{post, web, HttpResponse, Responder};
use tracing::error;

use crate::modules::auth::adapter::incoming::web::extractors::AdminUser;
use crate::modules::profile::application::domain::entities::VocabKind;
use crate::modules::vocabulary::application::use_cases::create_vocabulary::{
    CreateVocabRequest, CreateVocabularyError,
};
use crate::shared::api::ApiResponse;
use crate::AppState;

async fn create(
    data: &web::Data<AppState>,
    kind: VocabKind,
    request: CreateVocabRequest,
) -> HttpResponse {
    match data.vocabulary_use_cases.create.execute(kind, request).await {
        Ok(item) => HttpResponse::Created().json(item),
        Err(CreateVocabularyError::Validation(msg)) => ApiResponse::field_error("name", &msg),
        Err(e) => {
            error!("Creating {} failed: {}", kind.noun().to_lowercase(), e);
            ApiResponse::internal_error()
        }
    }
}

/// Create a niche (admin only)
#[utoipa::path(
    post,
    path = "/freelancer/niche",
    tag = "vocabularies",
    request_body = CreateVocabRequest,
    responses(
        (status = 201, description = "Niche created"),
        (status = 400, description = "Missing or duplicate name", body = crate::shared::api::response::FieldErrors),
        (status = 403, description = "Caller is not an admin", body = crate::shared::api::response::SimpleError),
    ),
    security(("bearer_auth" = []))
)]
#[post("/freelancer/niche")]
pub async fn create_niche_handler(
    data: web::Data<AppState>,
    _admin: AdminUser,
    body: web::Json<CreateVocabRequest>,
) -> impl Responder {
    create(&data, VocabKind::Niche, body.into_inner()).await
}

/// Create a skill (admin only)
#[utoipa::path(
    post,
    path = "/freelancer/skills",
    tag = "vocabularies",
    request_body = CreateVocabRequest,
    responses(
        (status = 201, description = "Skill created"),
        (status = 400, description = "Missing or duplicate name", body = crate::shared::api::response::FieldErrors),
        (status = 403, description = "Caller is not an admin", body = crate::shared::api::response::SimpleError),
    ),
    security(("bearer_auth" = []))
)]
#[post("/freelancer/skills")]
pub async fn create_skill_handler(
    data: web::Data<AppState>,
    _admin: AdminUser,
    body: web::Json<CreateVocabRequest>,
) -> impl Responder {
    create(&data, VocabKind::Skill, body.into_inner()).await
}

/// Create a language (admin only)
#[utoipa::path(
    post,
    path = "/freelancer/languages",
    tag = "vocabularies",
    request_body = CreateVocabRequest,
    responses(
        (status = 201, description = "Language created"),
        (status = 400, description = "Missing or duplicate name", body = crate::shared::api::response::FieldErrors),
        (status = 403, description = "Caller is not an admin", body = crate::shared::api::response::SimpleError),
    ),
    security(("bearer_auth" = []))
)]
#[post("/freelancer/languages")]
pub async fn create_language_handler(
    data: web::Data<AppState>,
    _admin: AdminUser,
    body: web::Json<CreateVocabRequest>,
) -> impl Responder {
    create(&data, VocabKind::Language, body.into_inner()).await
}
