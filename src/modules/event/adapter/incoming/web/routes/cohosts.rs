use actix_web::{delete, post, web, HttpResponse, Responder};
use serde::Deserialize;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::modules::auth::adapter::incoming::web::extractors::AdminUser;
use crate::shared::api::ApiResponse;
use crate::AppState;

use super::attendees::attendance_error_response;

#[derive(Debug, Deserialize, ToSchema)]
pub struct CohostRequest {
    #[serde(default)]
    pub event: Option<Uuid>,
    #[serde(default)]
    pub cohost: Option<Uuid>,
}

/// Add a cohost to an event; admin only
#[utoipa::path(
    post,
    path = "/events/cohosts",
    tag = "events",
    request_body = CohostRequest,
    responses(
        (status = 201, description = "Cohost added"),
        (status = 400, description = "Duplicate cohost", body = crate::shared::api::response::FieldErrors),
        (status = 403, description = "Caller is not an admin", body = crate::shared::api::response::SimpleError),
    ),
    security(("bearer_auth" = []))
)]
#[post("/events/cohosts")]
pub async fn add_cohost_handler(
    data: web::Data<AppState>,
    _admin: AdminUser,
    body: web::Json<CohostRequest>,
) -> impl Responder {
    let body = body.into_inner();
    let event_uuid = match body.event {
        Some(uuid) => uuid,
        None => return ApiResponse::field_error("event", "This field is required."),
    };
    let cohost_uuid = match body.cohost {
        Some(uuid) => uuid,
        None => return ApiResponse::field_error("cohost", "This field is required."),
    };
    match data
        .event_use_cases
        .attendance
        .add_cohost(event_uuid, cohost_uuid)
        .await
    {
        Ok(member) => HttpResponse::Created().json(member),
        Err(e) => attendance_error_response(e),
    }
}

/// Remove a cohost from an event; admin only
#[utoipa::path(
    delete,
    path = "/events/{uuid}/cohosts/{cohostUuid}",
    tag = "events",
    params(
        ("uuid" = Uuid, Path, description = "Event uuid"),
        ("cohostUuid" = Uuid, Path, description = "Cohost's user uuid"),
    ),
    responses(
        (status = 204, description = "Cohost removed"),
        (status = 403, description = "Caller is not an admin", body = crate::shared::api::response::SimpleError),
    ),
    security(("bearer_auth" = []))
)]
#[delete("/events/{uuid}/cohosts/{cohost_uuid}")]
pub async fn remove_cohost_handler(
    data: web::Data<AppState>,
    _admin: AdminUser,
    path: web::Path<(Uuid, Uuid)>,
) -> impl Responder {
    let (event_uuid, cohost_uuid) = path.into_inner();
    match data
        .event_use_cases
        .attendance
        .remove_cohost(event_uuid, cohost_uuid)
        .await
    {
        Ok(()) => ApiResponse::no_content(),
        Err(e) => attendance_error_response(e),
    }
}
