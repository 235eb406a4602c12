use actix_web::{post, web, HttpResponse, Responder};
use tracing::error;

use crate::modules::auth::application::use_cases::login_user::{
    LoginError, LoginRequest, LoginUserResponse,
};
use crate::shared::api::ApiResponse;
use crate::AppState;

use super::auth_cookies;

/// Log in with a username or email
#[utoipa::path(
    post,
    path = "/login",
    tag = "auth",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Logged in", body = LoginUserResponse),
        (status = 400, description = "Bad credentials or missing fields", body = crate::shared::api::response::FieldErrors),
        (status = 500, description = "Internal error", body = crate::shared::api::response::SimpleError),
    )
)]
#[post("/login")]
pub async fn login_user_handler(
    data: web::Data<AppState>,
    body: web::Json<LoginRequest>,
) -> impl Responder {
    match data.login_user_use_case.execute(body.into_inner()).await {
        Ok(response) => {
            let (access_cookie, refresh_cookie) = auth_cookies(&response.access, &response.refresh);
            HttpResponse::Ok()
                .cookie(access_cookie)
                .cookie(refresh_cookie)
                .json(response)
        }
        Err(LoginError::Validation(violations)) => ApiResponse::field_errors(violations),
        Err(LoginError::InvalidCredentials) => {
            // Unknown user, wrong password and inactive account all
            // produce this exact body.
            ApiResponse::field_error("non_field_errors", "Incorrect password.")
        }
        Err(e) => {
            error!("Login failed: {}", e);
            ApiResponse::internal_error()
        }
    }
}
