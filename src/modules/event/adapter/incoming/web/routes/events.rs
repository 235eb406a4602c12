use actix_web::{delete, get, post, put, web, HttpResponse, Responder};
use serde::Deserialize;
use tracing::error;
use uuid::Uuid;

use crate::modules::auth::adapter::incoming::web::extractors::{AdminUser, AuthenticatedUser};
use crate::modules::event::application::ports::outgoing::event_query::{
    EventListFilter, EventOrdering,
};
use crate::modules::event::application::use_cases::manage_events::{
    EventError, EventRequest, EventUpdateRequest,
};
use crate::shared::api::{ApiResponse, PageQuery};
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct EventListQuery {
    #[serde(flatten)]
    pub page: PageQuery,
    pub search: Option<String>,
    pub ordering: Option<String>,
}

impl EventListQuery {
    pub fn into_filter(self) -> EventListFilter {
        EventListFilter {
            search: self.search,
            ordering: EventOrdering::parse(self.ordering.as_deref()),
            offset: self.page.offset(),
            limit: self.page.page_size(),
        }
    }
}

fn event_error_response(e: EventError) -> HttpResponse {
    match e {
        EventError::HostProfileMissing | EventError::EventNotFound => {
            ApiResponse::not_found(&e.to_string())
        }
        EventError::NotHost => ApiResponse::forbidden(&e.to_string()),
        EventError::Validation(violations) => ApiResponse::field_errors(violations),
        EventError::StoreError(_) => {
            error!("Event operation failed: {}", e);
            ApiResponse::internal_error()
        }
    }
}

/// Create an event hosted by the caller's admin profile
#[utoipa::path(
    post,
    path = "/events/create-event",
    tag = "events",
    request_body = EventRequest,
    responses(
        (status = 201, description = "Created event"),
        (status = 400, description = "Missing fields", body = crate::shared::api::response::FieldErrors),
        (status = 403, description = "Caller is not an admin", body = crate::shared::api::response::SimpleError),
    ),
    security(("bearer_auth" = []))
)]
#[post("/events/create-event")]
pub async fn create_event_handler(
    data: web::Data<AppState>,
    admin: AdminUser,
    body: web::Json<EventRequest>,
) -> impl Responder {
    match data
        .event_use_cases
        .events
        .create(admin.user_uuid, body.into_inner())
        .await
    {
        Ok(event) => HttpResponse::Created().json(event),
        Err(e) => event_error_response(e),
    }
}

/// List events
#[utoipa::path(
    get,
    path = "/events/events-list",
    tag = "events",
    params(
        ("page" = Option<u64>, Query, description = "1-based page number"),
        ("page_size" = Option<u64>, Query, description = "Rows per page, capped at 500"),
        ("search" = Option<String>, Query, description = "Matches name and location"),
        ("ordering" = Option<String>, Query, description = "`starts_at` (default), `name` or `location`, `-` prefix for descending"),
    ),
    responses((status = 200, description = "Events page"))
)]
#[get("/events/events-list")]
pub async fn list_events_handler(
    data: web::Data<AppState>,
    query: web::Query<EventListQuery>,
) -> impl Responder {
    match data
        .event_use_cases
        .events
        .list(query.into_inner().into_filter())
        .await
    {
        Ok(events) => HttpResponse::Ok().json(events),
        Err(e) => event_error_response(e),
    }
}

/// Fetch one event with its host, cohosts and attendee count
#[utoipa::path(
    get,
    path = "/events/{uuid}",
    tag = "events",
    params(("uuid" = Uuid, Path, description = "Event uuid")),
    responses(
        (status = 200, description = "Event detail"),
        (status = 404, description = "No such event", body = crate::shared::api::response::SimpleError),
    ),
    security(("bearer_auth" = []))
)]
#[get("/events/{uuid}")]
pub async fn get_event_handler(
    data: web::Data<AppState>,
    _user: AuthenticatedUser,
    path: web::Path<Uuid>,
) -> impl Responder {
    match data.event_use_cases.events.get(path.into_inner()).await {
        Ok(detail) => HttpResponse::Ok().json(detail),
        Err(e) => event_error_response(e),
    }
}

/// Update an event; host only
#[utoipa::path(
    put,
    path = "/events/{uuid}",
    tag = "events",
    request_body = EventUpdateRequest,
    params(("uuid" = Uuid, Path, description = "Event uuid")),
    responses(
        (status = 200, description = "Updated event"),
        (status = 403, description = "Caller does not host this event", body = crate::shared::api::response::SimpleError),
        (status = 404, description = "No such event", body = crate::shared::api::response::SimpleError),
    ),
    security(("bearer_auth" = []))
)]
#[put("/events/{uuid}")]
pub async fn update_event_handler(
    data: web::Data<AppState>,
    user: AuthenticatedUser,
    path: web::Path<Uuid>,
    body: web::Json<EventUpdateRequest>,
) -> impl Responder {
    match data
        .event_use_cases
        .events
        .update(user.user_uuid, path.into_inner(), body.into_inner())
        .await
    {
        Ok(event) => HttpResponse::Ok().json(event),
        Err(e) => event_error_response(e),
    }
}

/// Delete an event; host only
#[utoipa::path(
    delete,
    path = "/events/{uuid}",
    tag = "events",
    params(("uuid" = Uuid, Path, description = "Event uuid")),
    responses(
        (status = 204, description = "Event removed"),
        (status = 403, description = "Caller does not host this event", body = crate::shared::api::response::SimpleError),
    ),
    security(("bearer_auth" = []))
)]
#[delete("/events/{uuid}")]
pub async fn delete_event_handler(
    data: web::Data<AppState>,
    user: AuthenticatedUser,
    path: web::Path<Uuid>,
) -> impl Responder {
    match data
        .event_use_cases
        .events
        .delete(user.user_uuid, path.into_inner())
        .await
    {
        Ok(()) => ApiResponse::no_content(),
        Err(e) => event_error_response(e),
    }
}
