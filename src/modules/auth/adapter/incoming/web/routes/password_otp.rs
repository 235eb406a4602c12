use actix_web::{post, web, HttpResponse, Responder};
use serde::Serialize;
use tracing::error;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::modules::auth::application::use_cases::request_password_otp::{
    RequestOtpError, RequestOtpRequest, RequestOtpResponse,
};
use crate::modules::auth::application::use_cases::verify_password_otp::{
    VerifyOtpError, VerifyOtpRequest,
};
use crate::shared::api::ApiResponse;
use crate::AppState;

use super::auth_cookies;

#[derive(Serialize, ToSchema)]
pub struct OtpSentResponse {
    #[schema(example = "OTP sent successfully")]
    pub message: String,
    pub data: RequestOtpResponse,
}

/// Mail a password-reset code
#[utoipa::path(
    post,
    path = "/password/otp",
    tag = "auth",
    request_body = RequestOtpRequest,
    responses(
        (status = 201, description = "Code sent", body = OtpSentResponse),
        (status = 400, description = "Email missing", body = crate::shared::api::response::SimpleError),
        (status = 404, description = "Unknown email", body = crate::shared::api::response::SimpleError),
    )
)]
#[post("/password/otp")]
pub async fn request_password_otp_handler(
    data: web::Data<AppState>,
    body: web::Json<RequestOtpRequest>,
) -> impl Responder {
    match data
        .request_password_otp_use_case
        .execute(body.into_inner())
        .await
    {
        Ok(response) => HttpResponse::Created().json(OtpSentResponse {
            message: "OTP sent successfully".to_string(),
            data: response,
        }),
        Err(e @ RequestOtpError::MissingEmail) => ApiResponse::bad_request(&e.to_string()),
        Err(e @ RequestOtpError::UnknownEmail) => ApiResponse::not_found(&e.to_string()),
        Err(e) => {
            error!("OTP request failed: {}", e);
            ApiResponse::internal_error()
        }
    }
}

/// Verify a password-reset code; success logs the user in
#[utoipa::path(
    post,
    path = "/password/otp/{uuid}",
    tag = "auth",
    request_body = VerifyOtpRequest,
    params(("uuid" = Uuid, Path, description = "User uuid returned by the OTP request")),
    responses(
        (status = 200, description = "Code accepted; session issued"),
        (status = 400, description = "Missing, wrong or expired code", body = crate::shared::api::response::SimpleError),
        (status = 404, description = "Unknown user", body = crate::shared::api::response::SimpleError),
    )
)]
#[post("/password/otp/{uuid}")]
pub async fn verify_password_otp_handler(
    data: web::Data<AppState>,
    path: web::Path<Uuid>,
    body: web::Json<VerifyOtpRequest>,
) -> impl Responder {
    match data
        .verify_password_otp_use_case
        .execute(path.into_inner(), body.into_inner())
        .await
    {
        Ok(response) => {
            let (access_cookie, refresh_cookie) = auth_cookies(&response.access, &response.refresh);
            HttpResponse::Ok()
                .cookie(access_cookie)
                .cookie(refresh_cookie)
                .json(response)
        }
        Err(e @ (VerifyOtpError::MissingFields
        | VerifyOtpError::InvalidOtp
        | VerifyOtpError::OtpExpired)) => ApiResponse::bad_request(&e.to_string()),
        Err(e @ VerifyOtpError::UserNotFound) => ApiResponse::not_found(&e.to_string()),
        Err(e) => {
            error!("OTP verification failed: {}", e);
            ApiResponse::internal_error()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::auth::application::use_cases::request_password_otp::IRequestPasswordOtpUseCase;
    use crate::tests::support::TestAppStateBuilder;
    use actix_web::{test, App};
    use async_trait::async_trait;

    struct SucceedingRequest(Uuid);

    #[async_trait]
    impl IRequestPasswordOtpUseCase for SucceedingRequest {
        async fn execute(
            &self,
            _request: RequestOtpRequest,
        ) -> Result<RequestOtpResponse, RequestOtpError> {
            Ok(RequestOtpResponse { uuid: self.0 })
        }
    }

    #[actix_web::test]
    async fn sent_code_reports_the_user_uuid() {
        let uuid = Uuid::new_v4();
        let state = TestAppStateBuilder::default()
            .with_request_password_otp(SucceedingRequest(uuid))
            .build();
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(state))
                .service(request_password_otp_handler),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/password/otp")
            .set_json(serde_json::json!({"email": "ada@example.com"}))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), 201);
        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["message"], "OTP sent successfully");
        assert_eq!(body["data"]["uuid"], uuid.to_string());
    }
}
