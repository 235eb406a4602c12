use actix_web::{post, web, HttpResponse, Responder};
use tracing::error;

use crate::modules::auth::application::domain::entities::Role;
use crate::modules::auth::application::use_cases::register_user::{
    RegisterError, RegisterRequest, RegisterUserResponse,
};
use crate::shared::api::ApiResponse;
use crate::AppState;

async fn register(data: &web::Data<AppState>, role: Role, request: RegisterRequest) -> HttpResponse {
    match data.register_user_use_case.execute(role, request).await {
        Ok(response) => HttpResponse::Created().json(response),
        Err(RegisterError::Validation(violations)) => ApiResponse::field_errors(violations),
        Err(e) => {
            error!("Registration failed: {}", e);
            ApiResponse::internal_error()
        }
    }
}

/// Register a freelancer account
#[utoipa::path(
    post,
    path = "/freelancer/register",
    tag = "auth",
    request_body = RegisterRequest,
    responses(
        (status = 201, description = "Account created", body = RegisterUserResponse),
        (status = 400, description = "Validation failed", body = crate::shared::api::response::FieldErrors),
        (status = 500, description = "Internal error", body = crate::shared::api::response::SimpleError),
    )
)]
#[post("/freelancer/register")]
pub async fn register_freelancer_handler(
    data: web::Data<AppState>,
    body: web::Json<RegisterRequest>,
) -> impl Responder {
    register(&data, Role::Freelancer, body.into_inner()).await
}

/// Register a sponsor account
#[utoipa::path(
    post,
    path = "/sponsors/register",
    tag = "auth",
    request_body = RegisterRequest,
    responses(
        (status = 201, description = "Account created", body = RegisterUserResponse),
        (status = 400, description = "Validation failed", body = crate::shared::api::response::FieldErrors),
    )
)]
#[post("/sponsors/register")]
pub async fn register_sponsor_handler(
    data: web::Data<AppState>,
    body: web::Json<RegisterRequest>,
) -> impl Responder {
    register(&data, Role::Sponsor, body.into_inner()).await
}

/// Register an admin account
#[utoipa::path(
    post,
    path = "/admins/register",
    tag = "auth",
    request_body = RegisterRequest,
    responses(
        (status = 201, description = "Account created", body = RegisterUserResponse),
        (status = 400, description = "Validation failed", body = crate::shared::api::response::FieldErrors),
    )
)]
#[post("/admins/register")]
pub async fn register_admin_handler(
    data: web::Data<AppState>,
    body: web::Json<RegisterRequest>,
) -> impl Responder {
    register(&data, Role::Admin, body.into_inner()).await
}
