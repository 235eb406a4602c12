use actix_web::{http::StatusCode, post, web, HttpResponse, Responder};
use tracing::error;

use crate::modules::auth::application::use_cases::refresh_token::{
    RefreshError, RefreshRequest, RefreshTokenResponse,
};
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Exchange a refresh token for a new access token
#[utoipa::path(
    post,
    path = "/auth/token/refresh",
    tag = "auth",
    request_body = RefreshRequest,
    responses(
        (status = 200, description = "New access token", body = RefreshTokenResponse),
        (status = 401, description = "Missing, invalid or blacklisted token", body = crate::shared::api::response::DetailBody),
    )
)]
#[post("/auth/token/refresh")]
pub async fn refresh_token_handler(
    data: web::Data<AppState>,
    body: web::Json<RefreshRequest>,
) -> impl Responder {
    match data.refresh_token_use_case.execute(body.into_inner()).await {
        Ok(response) => HttpResponse::Ok().json(response),
        Err(
            e @ (RefreshError::MissingToken | RefreshError::InvalidToken | RefreshError::Blacklisted),
        ) => ApiResponse::detail(StatusCode::UNAUTHORIZED, &e.to_string()),
        Err(e) => {
            error!("Token refresh failed: {}", e);
            ApiResponse::detail(StatusCode::INTERNAL_SERVER_ERROR, "An error has occurred.")
        }
    }
}
