// src/shared/api/response.rs
//
// Response body builders for the wire contract of this API. Bodies are
// bare JSON (no success/data envelope); the shape depends on the error
// family:
//
//   field validation  -> {"error": {"<field>": "<message>"}}
//   simple            -> {"error": "<message>"}
//   batch             -> {"errors": ["...", ...]} (possibly with created lists)
//   logout family     -> {"detail": "<message>"}
//   SSO family        -> {"error": {"message": "<message>"}}
use actix_web::{http::StatusCode, HttpResponse};
use serde::Serialize;
use std::collections::BTreeMap;
use utoipa::ToSchema;

/// `{"error": "<message>"}`
#[derive(Serialize, ToSchema)]
pub struct SimpleError {
    /// Human-readable error message
    #[schema(example = "User not found")]
    pub error: String,
}

/// `{"error": {"<field>": "<message>"}}` — one entry per invalid field.
#[derive(Serialize, ToSchema)]
pub struct FieldErrors {
    pub error: BTreeMap<String, String>,
}

/// `{"detail": "<message>"}` — used by the logout/refresh family.
#[derive(Serialize, ToSchema)]
pub struct DetailBody {
    #[schema(example = "Successfully logged out.")]
    pub detail: String,
}

/// `{"error": {"message": "<message>"}}` — used by the SSO endpoints.
#[derive(Serialize, ToSchema)]
pub struct MessageError {
    pub error: MessageBody,
}

#[derive(Serialize, ToSchema)]
pub struct MessageBody {
    #[schema(example = "State Mismatch. Time expired?")]
    pub message: String,
}

pub struct ApiResponse;

impl ApiResponse {
    pub fn simple_error(status: StatusCode, message: &str) -> HttpResponse {
        HttpResponse::build(status).json(SimpleError {
            error: message.to_string(),
        })
    }

    pub fn bad_request(message: &str) -> HttpResponse {
        Self::simple_error(StatusCode::BAD_REQUEST, message)
    }

    pub fn unauthorized(message: &str) -> HttpResponse {
        Self::simple_error(StatusCode::UNAUTHORIZED, message)
    }

    pub fn forbidden(message: &str) -> HttpResponse {
        Self::simple_error(StatusCode::FORBIDDEN, message)
    }

    pub fn not_found(message: &str) -> HttpResponse {
        Self::simple_error(StatusCode::NOT_FOUND, message)
    }

    /// Internals are logged by the caller; the wire body stays opaque.
    pub fn internal_error() -> HttpResponse {
        Self::simple_error(
            StatusCode::INTERNAL_SERVER_ERROR,
            "An unexpected error occurred.",
        )
    }

    pub fn field_errors(errors: BTreeMap<String, String>) -> HttpResponse {
        HttpResponse::BadRequest().json(FieldErrors { error: errors })
    }

    pub fn field_error(field: &str, message: &str) -> HttpResponse {
        let mut errors = BTreeMap::new();
        errors.insert(field.to_string(), message.to_string());
        Self::field_errors(errors)
    }

    pub fn detail(status: StatusCode, message: &str) -> HttpResponse {
        HttpResponse::build(status).json(DetailBody {
            detail: message.to_string(),
        })
    }

    pub fn message_error(status: StatusCode, message: &str) -> HttpResponse {
        HttpResponse::build(status).json(MessageError {
            error: MessageBody {
                message: message.to_string(),
            },
        })
    }

    pub fn no_content() -> HttpResponse {
        HttpResponse::NoContent().finish()
    }
}
