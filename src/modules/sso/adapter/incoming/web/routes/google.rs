use actix_web::cookie::{Cookie, SameSite};
use actix_web::http::StatusCode;
use actix_web::{get, web, HttpRequest, HttpResponse, Responder};
use serde::Deserialize;
use tracing::error;

use crate::modules::auth::adapter::incoming::web::routes::auth_cookies;
use crate::modules::sso::application::use_cases::google_login::SsoError;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Ties the callback to the browser that started the flow.
const SESSION_COOKIE: &str = "sso-session";

fn sso_error_response(e: SsoError) -> HttpResponse {
    match e {
        SsoError::UnknownRole => ApiResponse::message_error(StatusCode::NOT_FOUND, &e.to_string()),
        SsoError::MissingCode => ApiResponse::message_error(StatusCode::BAD_GATEWAY, &e.to_string()),
        SsoError::StateMismatch => {
            ApiResponse::message_error(StatusCode::PRECONDITION_REQUIRED, &e.to_string())
        }
        SsoError::ExchangeFailed(_) => {
            error!("SSO exchange failed: {:?}", e);
            ApiResponse::message_error(StatusCode::BAD_GATEWAY, &e.to_string())
        }
        SsoError::WrongProvider(_) => {
            ApiResponse::message_error(StatusCode::METHOD_NOT_ALLOWED, &e.to_string())
        }
        SsoError::StoreError(_) => {
            error!("SSO operation failed: {}", e);
            ApiResponse::internal_error()
        }
    }
}

/// Start a Google sign-in for the given role
#[utoipa::path(
    get,
    path = "/sso/google/login/{role}",
    tag = "sso",
    params(("role" = String, Path, description = "freelancer, sponsor or admin")),
    responses(
        (status = 302, description = "Redirect to Google's consent screen"),
        (status = 404, description = "Unknown role", body = crate::shared::api::response::MessageError),
    )
)]
#[get("/sso/google/login/{role}")]
pub async fn sso_google_login_handler(
    data: web::Data<AppState>,
    path: web::Path<String>,
) -> impl Responder {
    match data.sso_use_case.start(&path.into_inner()).await {
        Ok(started) => {
            let session_cookie = Cookie::build(SESSION_COOKIE, started.session_id)
                .path("/sso")
                .http_only(true)
                .same_site(SameSite::Lax)
                .finish();
            HttpResponse::Found()
                .insert_header(("Location", started.redirect_url))
                .cookie(session_cookie)
                .finish()
        }
        Err(e) => sso_error_response(e),
    }
}

#[derive(Debug, Deserialize)]
pub struct CallbackQuery {
    pub code: Option<String>,
    pub state: Option<String>,
}

/// Complete a Google sign-in
#[utoipa::path(
    get,
    path = "/sso/google/callback",
    tag = "sso",
    params(
        ("code" = Option<String>, Query, description = "Authorization code from Google"),
        ("state" = Option<String>, Query, description = "State echoed back by Google"),
    ),
    responses(
        (status = 201, description = "Signed in; body carries user and tokens"),
        (status = 405, description = "Account uses another sign-in method", body = crate::shared::api::response::MessageError),
        (status = 428, description = "State mismatch or expired session", body = crate::shared::api::response::MessageError),
        (status = 502, description = "Provider error", body = crate::shared::api::response::MessageError),
    )
)]
#[get("/sso/google/callback")]
pub async fn sso_google_callback_handler(
    data: web::Data<AppState>,
    req: HttpRequest,
    query: web::Query<CallbackQuery>,
) -> impl Responder {
    let session_id = req.cookie(SESSION_COOKIE).map(|c| c.value().to_string());
    let query = query.into_inner();

    match data
        .sso_use_case
        .callback(session_id, query.code, query.state)
        .await
    {
        Ok(response) => {
            let (access_cookie, refresh_cookie) = auth_cookies(&response.access, &response.refresh);
            HttpResponse::Created()
                .cookie(access_cookie)
                .cookie(refresh_cookie)
                .json(response)
        }
        Err(e) => sso_error_response(e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::auth::application::domain::entities::{Role, UserPublic};
    use crate::modules::sso::application::use_cases::google_login::{
        ISsoUseCase, SsoLoginResponse, StartedLogin,
    };
    use crate::tests::support::TestAppStateBuilder;
    use actix_web::{test, App};
    use async_trait::async_trait;
    use uuid::Uuid;

    /// Accepts the flow only when the session cookie and state echo
    /// the fixed values below.
    struct FixedFlowSso;

    const SESSION: &str = "session-1";
    const STATE: &str = "state-1";

    #[async_trait]
    impl ISsoUseCase for FixedFlowSso {
        async fn start(&self, role: &str) -> Result<StartedLogin, SsoError> {
            if Role::parse(role).is_none() {
                return Err(SsoError::UnknownRole);
            }
            Ok(StartedLogin {
                session_id: SESSION.to_string(),
                redirect_url: format!(
                    "https://accounts.google.com/o/oauth2/auth?state={}",
                    STATE
                ),
            })
        }

        async fn callback(
            &self,
            session_id: Option<String>,
            code: Option<String>,
            state: Option<String>,
        ) -> Result<SsoLoginResponse, SsoError> {
            if session_id.as_deref() != Some(SESSION) || state.as_deref() != Some(STATE) {
                return Err(SsoError::StateMismatch);
            }
            if code.is_none() {
                return Err(SsoError::MissingCode);
            }
            Ok(SsoLoginResponse {
                user: UserPublic {
                    username: "ada-x7Qp2f".to_string(),
                    email: "ada@example.com".to_string(),
                    role: Role::Freelancer,
                    uuid: Uuid::new_v4(),
                },
                access: "access-token-value".to_string(),
                refresh: "refresh-token-value".to_string(),
            })
        }
    }

    #[actix_web::test]
    async fn login_redirects_and_sets_the_session_cookie() {
        let state = TestAppStateBuilder::default().with_sso(FixedFlowSso).build();
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(state))
                .service(sso_google_login_handler),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/sso/google/login/freelancer")
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), 302);
        let location = resp.headers().get("Location").unwrap().to_str().unwrap();
        assert!(location.starts_with("https://accounts.google.com/"));
        let cookies: Vec<_> = resp.response().cookies().collect();
        assert!(cookies.iter().any(|c| c.name() == SESSION_COOKIE));
    }

    #[actix_web::test]
    async fn an_unknown_role_is_a_path_miss() {
        let state = TestAppStateBuilder::default().with_sso(FixedFlowSso).build();
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(state))
                .service(sso_google_login_handler),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/sso/google/login/superuser")
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), 404);
        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["error"]["message"], "Path not found");
    }

    #[actix_web::test]
    async fn a_completed_callback_signs_the_user_in() {
        let state = TestAppStateBuilder::default().with_sso(FixedFlowSso).build();
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(state))
                .service(sso_google_callback_handler),
        )
        .await;

        let req = test::TestRequest::get()
            .uri(&format!("/sso/google/callback?code=abc&state={}", STATE))
            .cookie(actix_web::cookie::Cookie::new(SESSION_COOKIE, SESSION))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), 201);
        let cookies: Vec<_> = resp.response().cookies().collect();
        assert!(cookies.iter().any(|c| c.name() == "access-token"));
        assert!(cookies.iter().any(|c| c.name() == "refresh-token"));
        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["user"]["email"], "ada@example.com");
        assert_eq!(body["access"], "access-token-value");
    }

    #[actix_web::test]
    async fn a_callback_without_the_session_cookie_is_a_mismatch() {
        let state = TestAppStateBuilder::default().with_sso(FixedFlowSso).build();
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(state))
                .service(sso_google_callback_handler),
        )
        .await;

        let req = test::TestRequest::get()
            .uri(&format!("/sso/google/callback?code=abc&state={}", STATE))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), 428);
        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["error"]["message"], "State Mismatch. Time expired?");
    }
}
