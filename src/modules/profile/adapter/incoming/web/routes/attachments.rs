use std::collections::HashMap;

use actix_web::{delete, post, web, HttpResponse, Responder};
use serde::Deserialize;
use tracing::error;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::modules::auth::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::modules::profile::application::domain::entities::VocabKind;
use crate::modules::profile::application::use_cases::attach_vocabularies::AttachError;
use crate::modules::profile::application::use_cases::detach_vocabularies::DetachError;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Debug, Deserialize, ToSchema)]
pub struct NicheIds {
    pub niches: Vec<i64>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct SkillIds {
    pub skills: Vec<i64>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct LanguageIds {
    pub languages: Vec<i64>,
}

fn created_key(kind: VocabKind) -> &'static str {
    match kind {
        VocabKind::Niche => "created_niches",
        VocabKind::Skill => "created_skills",
        VocabKind::Language => "created_languages",
    }
}

fn query_key(kind: VocabKind) -> &'static str {
    match kind {
        VocabKind::Niche => "niches",
        VocabKind::Skill => "skills",
        VocabKind::Language => "languages",
    }
}

async fn attach(
    data: &web::Data<AppState>,
    profile_uuid: Uuid,
    kind: VocabKind,
    ids: Vec<i64>,
) -> HttpResponse {
    match data
        .profile_use_cases
        .attach
        .execute(profile_uuid, kind, ids)
        .await
    {
        Ok(report) => {
            if report.errors.is_empty() {
                HttpResponse::Created()
                    .json(serde_json::json!({ created_key(kind): report.created }))
            } else {
                HttpResponse::BadRequest().json(serde_json::json!({
                    created_key(kind): report.created,
                    "errors": report.errors,
                }))
            }
        }
        Err(e @ AttachError::NicheLimitExceeded) => ApiResponse::bad_request(&e.to_string()),
        Err(e @ AttachError::ProfileNotFound) => ApiResponse::not_found(&e.to_string()),
        Err(e) => {
            error!("Vocabulary attach failed: {}", e);
            ApiResponse::internal_error()
        }
    }
}

/// Comma-separated ids from the detach query string; non-numeric
/// fragments are ignored.
fn ids_from_query(query: &HashMap<String, String>, key: &str) -> Vec<i64> {
    query
        .get(key)
        .map(|raw| raw.split(',').filter_map(|s| s.trim().parse().ok()).collect())
        .unwrap_or_default()
}

async fn detach(
    data: &web::Data<AppState>,
    profile_uuid: Uuid,
    kind: VocabKind,
    ids: Vec<i64>,
) -> HttpResponse {
    match data
        .profile_use_cases
        .detach
        .execute(profile_uuid, kind, ids)
        .await
    {
        Ok(report) => {
            if report.errors.is_empty() {
                HttpResponse::NoContent().finish()
            } else {
                HttpResponse::BadRequest().json(serde_json::json!({ "errors": report.errors }))
            }
        }
        Err(e @ DetachError::ProfileNotFound) => ApiResponse::not_found(&e.to_string()),
        Err(e) => {
            error!("Vocabulary detach failed: {}", e);
            ApiResponse::internal_error()
        }
    }
}

/// Attach niches to a freelancer profile (at most 3 in total)
#[utoipa::path(
    post,
    path = "/freelancer/profiles/{uuid}/niches",
    tag = "profiles",
    request_body = NicheIds,
    params(("uuid" = Uuid, Path, description = "Owning user's uuid")),
    responses(
        (status = 201, description = "All requested niches attached"),
        (status = 400, description = "Cap exceeded or unknown ids"),
    ),
    security(("bearer_auth" = []))
)]
#[post("/freelancer/profiles/{uuid}/niches")]
pub async fn attach_niches_handler(
    data: web::Data<AppState>,
    _user: AuthenticatedUser,
    path: web::Path<Uuid>,
    body: web::Json<NicheIds>,
) -> impl Responder {
    attach(&data, path.into_inner(), VocabKind::Niche, body.into_inner().niches).await
}

/// Detach niches listed in the `niches` query parameter
#[utoipa::path(
    delete,
    path = "/freelancer/profiles/{uuid}/niches/delete",
    tag = "profiles",
    params(
        ("uuid" = Uuid, Path, description = "Owning user's uuid"),
        ("niches" = String, Query, description = "Comma-separated niche ids"),
    ),
    responses(
        (status = 204, description = "All requested niches detached"),
        (status = 400, description = "Some ids could not be detached"),
    ),
    security(("bearer_auth" = []))
)]
#[delete("/freelancer/profiles/{uuid}/niches/delete")]
pub async fn detach_niches_handler(
    data: web::Data<AppState>,
    _user: AuthenticatedUser,
    path: web::Path<Uuid>,
    query: web::Query<HashMap<String, String>>,
) -> impl Responder {
    let ids = ids_from_query(&query, query_key(VocabKind::Niche));
    detach(&data, path.into_inner(), VocabKind::Niche, ids).await
}

/// Attach skills to a freelancer profile
#[utoipa::path(
    post,
    path = "/freelancer/profiles/{uuid}/skills",
    tag = "profiles",
    request_body = SkillIds,
    params(("uuid" = Uuid, Path, description = "Owning user's uuid")),
    responses(
        (status = 201, description = "All requested skills attached"),
        (status = 400, description = "Unknown ids"),
    ),
    security(("bearer_auth" = []))
)]
#[post("/freelancer/profiles/{uuid}/skills")]
pub async fn attach_skills_handler(
    data: web::Data<AppState>,
    _user: AuthenticatedUser,
    path: web::Path<Uuid>,
    body: web::Json<SkillIds>,
) -> impl Responder {
    attach(&data, path.into_inner(), VocabKind::Skill, body.into_inner().skills).await
}

/// Detach skills listed in the `skills` query parameter
#[utoipa::path(
    delete,
    path = "/freelancer/profiles/{uuid}/skills/delete",
    tag = "profiles",
    params(
        ("uuid" = Uuid, Path, description = "Owning user's uuid"),
        ("skills" = String, Query, description = "Comma-separated skill ids"),
    ),
    responses(
        (status = 204, description = "All requested skills detached"),
        (status = 400, description = "Some ids could not be detached"),
    ),
    security(("bearer_auth" = []))
)]
#[delete("/freelancer/profiles/{uuid}/skills/delete")]
pub async fn detach_skills_handler(
    data: web::Data<AppState>,
    _user: AuthenticatedUser,
    path: web::Path<Uuid>,
    query: web::Query<HashMap<String, String>>,
) -> impl Responder {
    let ids = ids_from_query(&query, query_key(VocabKind::Skill));
    detach(&data, path.into_inner(), VocabKind::Skill, ids).await
}

/// Attach languages to a freelancer profile
#[utoipa::path(
    post,
    path = "/freelancer/profiles/{uuid}/languages",
    tag = "profiles",
    request_body = LanguageIds,
    params(("uuid" = Uuid, Path, description = "Owning user's uuid")),
    responses(
        (status = 201, description = "All requested languages attached"),
        (status = 400, description = "Unknown ids"),
    ),
    security(("bearer_auth" = []))
)]
#[post("/freelancer/profiles/{uuid}/languages")]
pub async fn attach_languages_handler(
    data: web::Data<AppState>,
    _user: AuthenticatedUser,
    path: web::Path<Uuid>,
    body: web::Json<LanguageIds>,
) -> impl Responder {
    attach(
        &data,
        path.into_inner(),
        VocabKind::Language,
        body.into_inner().languages,
    )
    .await
}

/// Detach languages listed in the `languages` query parameter
#[utoipa::path(
    delete,
    path = "/freelancer/profiles/{uuid}/languages/delete",
    tag = "profiles",
    params(
        ("uuid" = Uuid, Path, description = "Owning user's uuid"),
        ("languages" = String, Query, description = "Comma-separated language ids"),
    ),
    responses(
        (status = 204, description = "All requested languages detached"),
        (status = 400, description = "Some ids could not be detached"),
    ),
    security(("bearer_auth" = []))
)]
#[delete("/freelancer/profiles/{uuid}/languages/delete")]
pub async fn detach_languages_handler(
    data: web::Data<AppState>,
    _user: AuthenticatedUser,
    path: web::Path<Uuid>,
    query: web::Query<HashMap<String, String>>,
) -> impl Responder {
    let ids = ids_from_query(&query, query_key(VocabKind::Language));
    detach(&data, path.into_inner(), VocabKind::Language, ids).await
}
