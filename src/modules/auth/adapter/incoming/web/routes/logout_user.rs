use actix_web::{http::StatusCode, post, web, Responder};
use tracing::error;

use crate::modules::auth::application::use_cases::logout_user::{LogoutError, LogoutRequest};
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Log out by blacklisting the refresh token
#[utoipa::path(
    post,
    path = "/logout",
    tag = "auth",
    request_body = LogoutRequest,
    responses(
        (status = 200, description = "Logged out", body = crate::shared::api::response::DetailBody),
        (status = 401, description = "Missing, invalid or already blacklisted token", body = crate::shared::api::response::DetailBody),
        (status = 500, description = "Internal error", body = crate::shared::api::response::DetailBody),
    )
)]
#[post("/logout")]
pub async fn logout_user_handler(
    data: web::Data<AppState>,
    body: web::Json<LogoutRequest>,
) -> impl Responder {
    match data.logout_user_use_case.execute(body.into_inner()).await {
        Ok(()) => ApiResponse::detail(StatusCode::OK, "Successfully logged out."),
        Err(
            e @ (LogoutError::MissingToken
            | LogoutError::InvalidToken
            | LogoutError::AlreadyBlacklisted),
        ) => ApiResponse::detail(StatusCode::UNAUTHORIZED, &e.to_string()),
        Err(LogoutError::StoreError(msg)) => {
            error!("Logout failed: {}", msg);
            ApiResponse::detail(StatusCode::INTERNAL_SERVER_ERROR, "An error has occurred.")
        }
    }
}
