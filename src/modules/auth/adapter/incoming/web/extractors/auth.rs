use actix_web::{dev::Payload, Error as ActixError, FromRequest, HttpRequest, HttpResponse};
use std::{
    future::{ready, Ready},
    sync::Arc,
};
use uuid::Uuid;

use crate::modules::auth::application::domain::entities::Role;
use crate::modules::auth::application::ports::outgoing::TokenProvider;
use crate::shared::api::ApiResponse;

const MISSING_CREDENTIALS: &str = "Authentication credentials were not provided.";
const INVALID_TOKEN: &str = "Invalid or expired token";
const NOT_PERMITTED: &str = "You do not have permission to perform this action.";

/// The caller behind a valid access token.
#[derive(Debug, Clone)]
pub struct AuthenticatedUser {
    pub user_uuid: Uuid,
    pub role: Role,
}

impl AuthenticatedUser {
    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }
}

fn create_api_error(response: HttpResponse) -> ActixError {
    actix_web::error::InternalError::from_response("", response).into()
}

/// `Authorization: Bearer <token>`, with fallback to the `access-token`
/// cookie that login-shaped responses set.
fn extract_token(req: &HttpRequest) -> Option<String> {
    let from_header = req
        .headers()
        .get("Authorization")
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.strip_prefix("Bearer "))
        .map(|s| s.to_string());

    from_header.or_else(|| req.cookie("access-token").map(|c| c.value().to_string()))
}

impl FromRequest for AuthenticatedUser {
    type Error = ActixError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let token_provider = match req
            .app_data::<actix_web::web::Data<Arc<dyn TokenProvider + Send + Sync>>>()
        {
            Some(provider) => provider,
            None => {
                tracing::error!("TokenProvider missing from app data");
                return ready(Err(create_api_error(ApiResponse::internal_error())));
            }
        };

        let token = match extract_token(req) {
            Some(t) => t,
            None => {
                return ready(Err(create_api_error(ApiResponse::unauthorized(
                    MISSING_CREDENTIALS,
                ))));
            }
        };

        match token_provider.verify(&token) {
            Ok(claims) if claims.token_type == "access" => match claims.role() {
                Some(role) => ready(Ok(AuthenticatedUser {
                    user_uuid: claims.sub,
                    role,
                })),
                None => ready(Err(create_api_error(ApiResponse::unauthorized(
                    INVALID_TOKEN,
                )))),
            },
            _ => ready(Err(create_api_error(ApiResponse::unauthorized(
                INVALID_TOKEN,
            )))),
        }
    }
}

/// An authenticated caller whose role is admin; everyone else gets 403.
#[derive(Debug, Clone)]
pub struct AdminUser {
    pub user_uuid: Uuid,
}

impl FromRequest for AdminUser {
    type Error = ActixError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, payload: &mut Payload) -> Self::Future {
        match AuthenticatedUser::from_request(req, payload).into_inner() {
            Ok(user) if user.is_admin() => ready(Ok(AdminUser {
                user_uuid: user.user_uuid,
            })),
            Ok(_) => ready(Err(create_api_error(ApiResponse::forbidden(
                NOT_PERMITTED,
            )))),
            Err(e) => ready(Err(e)),
        }
    }
}
