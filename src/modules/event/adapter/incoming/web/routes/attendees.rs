use actix_web::{delete, get, post, web, HttpResponse, Responder};
use serde::Deserialize;
use tracing::error;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::modules::auth::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::modules::event::application::use_cases::manage_attendance::AttendanceError;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct AttendeeListQuery {
    pub search: Option<String>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct RsvpRequest {
    #[serde(default)]
    pub event: Option<Uuid>,
}

pub(super) fn attendance_error_response(e: AttendanceError) -> HttpResponse {
    match e {
        AttendanceError::EventNotFound | AttendanceError::UserNotFound => {
            ApiResponse::not_found(&e.to_string())
        }
        AttendanceError::AlreadyAttending => ApiResponse::field_error("event", &e.to_string()),
        AttendanceError::AlreadyCohost => ApiResponse::field_error("cohost", &e.to_string()),
        AttendanceError::NotAttending | AttendanceError::NotCohost => {
            ApiResponse::bad_request(&e.to_string())
        }
        AttendanceError::NotPermitted => ApiResponse::forbidden(&e.to_string()),
        AttendanceError::StoreError(_) => {
            error!("Attendance operation failed: {}", e);
            ApiResponse::internal_error()
        }
    }
}

/// List an event's attendees
#[utoipa::path(
    get,
    path = "/events/{uuid}/attendees",
    tag = "events",
    params(
        ("uuid" = Uuid, Path, description = "Event uuid"),
        ("search" = Option<String>, Query, description = "Matches username and email"),
    ),
    responses(
        (status = 200, description = "Attendees"),
        (status = 404, description = "No such event", body = crate::shared::api::response::SimpleError),
    ),
    security(("bearer_auth" = []))
)]
#[get("/events/{uuid}/attendees")]
pub async fn list_attendees_handler(
    data: web::Data<AppState>,
    _user: AuthenticatedUser,
    path: web::Path<Uuid>,
    query: web::Query<AttendeeListQuery>,
) -> impl Responder {
    match data
        .event_use_cases
        .attendance
        .list_attendees(path.into_inner(), query.into_inner().search)
        .await
    {
        Ok(attendees) => HttpResponse::Ok().json(attendees),
        Err(e) => attendance_error_response(e),
    }
}

/// RSVP to an event; the attendee is always the caller
#[utoipa::path(
    post,
    path = "/events/attendees",
    tag = "events",
    request_body = RsvpRequest,
    responses(
        (status = 201, description = "Join row created"),
        (status = 400, description = "Duplicate RSVP", body = crate::shared::api::response::FieldErrors),
        (status = 404, description = "No such event", body = crate::shared::api::response::SimpleError),
    ),
    security(("bearer_auth" = []))
)]
#[post("/events/attendees")]
pub async fn join_event_handler(
    data: web::Data<AppState>,
    user: AuthenticatedUser,
    body: web::Json<RsvpRequest>,
) -> impl Responder {
    let event_uuid = match body.into_inner().event {
        Some(uuid) => uuid,
        None => return ApiResponse::field_error("event", "This field is required."),
    };
    match data
        .event_use_cases
        .attendance
        .join(user.user_uuid, event_uuid)
        .await
    {
        Ok(member) => HttpResponse::Created().json(member),
        Err(e) => attendance_error_response(e),
    }
}

/// Remove an attendee; self-removal, or any attendee when the caller is admin
#[utoipa::path(
    delete,
    path = "/events/{uuid}/attendees/{attendeeUuid}",
    tag = "events",
    params(
        ("uuid" = Uuid, Path, description = "Event uuid"),
        ("attendeeUuid" = Uuid, Path, description = "Attendee's user uuid"),
    ),
    responses(
        (status = 204, description = "Attendee removed"),
        (status = 403, description = "Caller may not remove this attendee", body = crate::shared::api::response::SimpleError),
    ),
    security(("bearer_auth" = []))
)]
#[delete("/events/{uuid}/attendees/{attendee_uuid}")]
pub async fn remove_attendee_handler(
    data: web::Data<AppState>,
    user: AuthenticatedUser,
    path: web::Path<(Uuid, Uuid)>,
) -> impl Responder {
    let (event_uuid, attendee_uuid) = path.into_inner();
    match data
        .event_use_cases
        .attendance
        .remove_attendee(user.user_uuid, user.is_admin(), event_uuid, attendee_uuid)
        .await
    {
        Ok(()) => ApiResponse::no_content(),
        Err(e) => attendance_error_response(e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::auth::application::domain::entities::Role;
    use crate::modules::event::application::domain::entities::EventMember;
    use crate::modules::event::application::use_cases::manage_attendance::IAttendanceUseCase;
    use crate::tests::support::auth::{access_token, test_token_provider};
    use crate::tests::support::TestAppStateBuilder;
    use actix_web::{test, App};
    use async_trait::async_trait;

    struct OneShotRsvp;

    #[async_trait]
    impl IAttendanceUseCase for OneShotRsvp {
        async fn list_attendees(
            &self,
            _event_uuid: Uuid,
            _search: Option<String>,
        ) -> Result<Vec<EventMember>, AttendanceError> {
            Ok(vec![])
        }

        async fn join(
            &self,
            caller_uuid: Uuid,
            _event_uuid: Uuid,
        ) -> Result<EventMember, AttendanceError> {
            // Nil caller stands in for "already joined" in these tests.
            if caller_uuid.is_nil() {
                return Err(AttendanceError::AlreadyAttending);
            }
            Ok(EventMember {
                uuid: caller_uuid,
                username: "ada".to_string(),
                email: "ada@example.com".to_string(),
            })
        }

        async fn remove_attendee(
            &self,
            caller_uuid: Uuid,
            caller_is_admin: bool,
            _event_uuid: Uuid,
            attendee_uuid: Uuid,
        ) -> Result<(), AttendanceError> {
            if caller_uuid != attendee_uuid && !caller_is_admin {
                return Err(AttendanceError::NotPermitted);
            }
            Ok(())
        }

        async fn add_cohost(
            &self,
            _event_uuid: Uuid,
            cohost_uuid: Uuid,
        ) -> Result<EventMember, AttendanceError> {
            Ok(EventMember {
                uuid: cohost_uuid,
                username: "ada".to_string(),
                email: "ada@example.com".to_string(),
            })
        }

        async fn remove_cohost(
            &self,
            _event_uuid: Uuid,
            _cohost_uuid: Uuid,
        ) -> Result<(), AttendanceError> {
            Ok(())
        }
    }

    #[actix_web::test]
    async fn rsvp_creates_a_join_row() {
        let provider = test_token_provider();
        let (uuid, token) = access_token(&provider, Role::Freelancer);
        let state = TestAppStateBuilder::default()
            .with_attendance(OneShotRsvp)
            .build();
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(state))
                .app_data(web::Data::new(provider))
                .service(join_event_handler),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/events/attendees")
            .insert_header(("Authorization", format!("Bearer {}", token)))
            .set_json(serde_json::json!({"event": Uuid::new_v4()}))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), 201);
        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["uuid"], uuid.to_string());
    }

    #[actix_web::test]
    async fn rsvp_without_an_event_is_a_field_error() {
        let provider = test_token_provider();
        let (_, token) = access_token(&provider, Role::Freelancer);
        let state = TestAppStateBuilder::default()
            .with_attendance(OneShotRsvp)
            .build();
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(state))
                .app_data(web::Data::new(provider))
                .service(join_event_handler),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/events/attendees")
            .insert_header(("Authorization", format!("Bearer {}", token)))
            .set_json(serde_json::json!({}))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), 400);
        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["error"]["event"], "This field is required.");
    }

    #[actix_web::test]
    async fn removing_someone_else_without_admin_is_forbidden() {
        let provider = test_token_provider();
        let (_, token) = access_token(&provider, Role::Freelancer);
        let state = TestAppStateBuilder::default()
            .with_attendance(OneShotRsvp)
            .build();
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(state))
                .app_data(web::Data::new(provider))
                .service(remove_attendee_handler),
        )
        .await;

        let req = test::TestRequest::delete()
            .uri(&format!(
                "/events/{}/attendees/{}",
                Uuid::new_v4(),
                Uuid::new_v4()
            ))
            .insert_header(("Authorization", format!("Bearer {}", token)))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), 403);
    }
}
