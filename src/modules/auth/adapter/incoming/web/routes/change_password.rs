use actix_web::{http::StatusCode, post, web, Responder};
use tracing::error;

use crate::modules::auth::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::modules::auth::application::use_cases::change_password::{
    ChangePasswordError, ChangePasswordRequest,
};
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Change the caller's password
#[utoipa::path(
    post,
    path = "/password/change",
    tag = "auth",
    request_body = ChangePasswordRequest,
    responses(
        (status = 200, description = "Password changed", body = crate::shared::api::response::DetailBody),
        (status = 400, description = "Wrong old password or weak new password", body = crate::shared::api::response::FieldErrors),
        (status = 401, description = "Not authenticated", body = crate::shared::api::response::SimpleError),
    ),
    security(("bearer_auth" = []))
)]
#[post("/password/change")]
pub async fn change_password_handler(
    data: web::Data<AppState>,
    user: AuthenticatedUser,
    body: web::Json<ChangePasswordRequest>,
) -> impl Responder {
    match data
        .change_password_use_case
        .execute(user.user_uuid, body.into_inner())
        .await
    {
        Ok(()) => ApiResponse::detail(StatusCode::OK, "New password has been saved."),
        Err(ChangePasswordError::Validation(violations)) => ApiResponse::field_errors(violations),
        Err(ChangePasswordError::UserNotFound) => ApiResponse::not_found("User not found"),
        Err(e) => {
            error!("Password change failed: {}", e);
            ApiResponse::internal_error()
        }
    }
}
