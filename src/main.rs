pub mod api;
pub mod config;
pub mod health;
pub mod modules;
pub mod shared;

#[cfg(test)]
mod tests;

use std::sync::Arc;
use std::time::Duration;

use actix_web::{middleware, web, App, HttpResponse, HttpServer};
use deadpool_redis::{Config as RedisConfig, Runtime};
use sea_orm::{ConnectOptions, Database};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::AppConfig;
use crate::shared::api::{custom_json_config, ApiResponse};

use crate::modules::auth::adapter::outgoing::jwt::JwtTokenService;
use crate::modules::auth::adapter::outgoing::otp_repository_postgres::OtpRepositoryPostgres;
use crate::modules::auth::adapter::outgoing::security::Argon2Hasher;
use crate::modules::auth::adapter::outgoing::token_blacklist_redis::RedisTokenBlacklist;
use crate::modules::auth::adapter::outgoing::user_query_postgres::UserQueryPostgres;
use crate::modules::auth::adapter::outgoing::user_repository_postgres::UserRepositoryPostgres;
use crate::modules::auth::application::ports::outgoing::TokenProvider;
use crate::modules::auth::application::use_cases::{
    change_password::{ChangePasswordUseCase, IChangePasswordUseCase},
    login_user::{ILoginUserUseCase, LoginUserUseCase},
    logout_user::{ILogoutUseCase, LogoutUseCase},
    refresh_token::{IRefreshTokenUseCase, RefreshTokenUseCase},
    register_user::{IRegisterUserUseCase, RegisterUserUseCase},
    request_password_otp::{IRequestPasswordOtpUseCase, RequestPasswordOtpUseCase},
    verify_password_otp::{IVerifyPasswordOtpUseCase, VerifyPasswordOtpUseCase},
};

use crate::modules::email::adapter::outgoing::smtp_sender::SmtpEmailSender;
use crate::modules::email::application::ports::outgoing::EmailSender;
use crate::modules::email::application::services::OtpMailer;

use crate::modules::profile::adapter::outgoing::attachment_repository_postgres::VocabAttachmentRepositoryPostgres;
use crate::modules::profile::adapter::outgoing::profile_query_postgres::ProfileQueryPostgres;
use crate::modules::profile::adapter::outgoing::profile_repository_postgres::ProfileRepositoryPostgres;
use crate::modules::profile::application::profile_use_cases::ProfileUseCases;
use crate::modules::profile::application::use_cases::{
    attach_vocabularies::AttachVocabulariesUseCase,
    delete_freelancer_profile::DeleteFreelancerProfileUseCase,
    detach_vocabularies::DetachVocabulariesUseCase, get_admin_profile::GetAdminProfileUseCase,
    get_freelancer_profile::GetFreelancerProfileUseCase,
    list_admin_profiles::ListAdminProfilesUseCase,
    list_freelancer_profiles::ListFreelancerProfilesUseCase,
    update_admin_profile::UpdateAdminProfileUseCase,
    update_freelancer_profile::UpdateFreelancerProfileUseCase,
};

use crate::modules::vocabulary::adapter::outgoing::vocabulary_query_postgres::VocabularyQueryPostgres;
use crate::modules::vocabulary::adapter::outgoing::vocabulary_repository_postgres::VocabularyRepositoryPostgres;
use crate::modules::vocabulary::application::use_cases::{
    create_vocabulary::CreateVocabularyUseCase, list_vocabulary::ListVocabularyUseCase,
};
use crate::modules::vocabulary::application::vocabulary_use_cases::VocabularyUseCases;

use crate::modules::portfolio::adapter::outgoing::link_repository_postgres::LinkRepositoryPostgres;
use crate::modules::portfolio::adapter::outgoing::project_repository_postgres::ProjectRepositoryPostgres;
use crate::modules::portfolio::adapter::outgoing::work_experience_repository_postgres::WorkExperienceRepositoryPostgres;
use crate::modules::portfolio::application::portfolio_use_cases::PortfolioUseCases;
use crate::modules::portfolio::application::use_cases::{
    manage_links::LinksUseCase, manage_projects::ProjectsUseCase,
    manage_work_experiences::WorkExperiencesUseCase,
};

use crate::modules::event::adapter::outgoing::event_query_postgres::EventQueryPostgres;
use crate::modules::event::adapter::outgoing::event_repository_postgres::EventRepositoryPostgres;
use crate::modules::event::adapter::outgoing::membership_repository_postgres::MembershipRepositoryPostgres;
use crate::modules::event::application::event_use_cases::EventUseCases;
use crate::modules::event::application::use_cases::{
    manage_attendance::AttendanceUseCase, manage_events::EventsUseCase,
};

use crate::modules::newsfeed::adapter::outgoing::newsfeed_repository_postgres::NewsFeedRepositoryPostgres;
use crate::modules::newsfeed::application::use_cases::manage_newsfeed::{
    INewsFeedUseCase, NewsFeedUseCase,
};

use crate::modules::media::adapter::outgoing::media_binding_repository_postgres::MediaBindingRepositoryPostgres;
use crate::modules::media::adapter::outgoing::media_store_gcs::GcsMediaStore;
use crate::modules::media::application::use_cases::manage_media::{IMediaUseCase, MediaUseCase};

use crate::modules::sso::adapter::outgoing::google_oauth_provider::GoogleOAuthProvider;
use crate::modules::sso::adapter::outgoing::login_state_redis::RedisLoginStateStore;
use crate::modules::sso::application::use_cases::google_login::{ISsoUseCase, SsoUseCase};

#[derive(Clone)]
pub struct AppState {
    pub register_user_use_case: Arc<dyn IRegisterUserUseCase + Send + Sync>,
    pub login_user_use_case: Arc<dyn ILoginUserUseCase + Send + Sync>,
    pub logout_user_use_case: Arc<dyn ILogoutUseCase + Send + Sync>,
    pub refresh_token_use_case: Arc<dyn IRefreshTokenUseCase + Send + Sync>,
    pub change_password_use_case: Arc<dyn IChangePasswordUseCase + Send + Sync>,
    pub request_password_otp_use_case: Arc<dyn IRequestPasswordOtpUseCase + Send + Sync>,
    pub verify_password_otp_use_case: Arc<dyn IVerifyPasswordOtpUseCase + Send + Sync>,
    pub sso_use_case: Arc<dyn ISsoUseCase + Send + Sync>,
    pub profile_use_cases: ProfileUseCases,
    pub vocabulary_use_cases: VocabularyUseCases,
    pub portfolio_use_cases: PortfolioUseCases,
    pub event_use_cases: EventUseCases,
    pub newsfeed_use_case: Arc<dyn INewsFeedUseCase + Send + Sync>,
    pub media_use_case: Arc<dyn IMediaUseCase + Send + Sync>,
}

#[actix_web::main]
#[cfg(not(tarpaulin_include))]
async fn start() -> std::io::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,actix_web=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting application...");

    let config = AppConfig::load().expect("Configuration error");

    let server_url = format!("{}:{}", config.host, config.port);
    info!("Server runs on: {}", server_url);

    // Database connection
    let mut opt = ConnectOptions::new(config.database_url.clone());
    opt.max_connections(50)
        .min_connections(10)
        .connect_timeout(Duration::from_secs(5))
        .acquire_timeout(Duration::from_secs(5))
        .idle_timeout(Duration::from_secs(300))
        .max_lifetime(Duration::from_secs(1800))
        .sqlx_logging(false);

    let conn = Database::connect(opt)
        .await
        .expect("Failed to connect to database");
    let db = Arc::new(conn);

    // Redis connection
    let redis_pool = RedisConfig::from_url(&config.redis_url)
        .create_pool(Some(Runtime::Tokio1))
        .expect("Failed to create Redis pool");
    let redis = Arc::new(redis_pool);

    // Outgoing adapters shared across modules
    let jwt_service = JwtTokenService::new(config.jwt.clone());
    let hasher = Argon2Hasher::new();
    let user_repo = UserRepositoryPostgres::new(Arc::clone(&db));
    let user_query = UserQueryPostgres::new(Arc::clone(&db));
    let otp_repo = OtpRepositoryPostgres::new(Arc::clone(&db));
    let blacklist = RedisTokenBlacklist::new(Arc::clone(&redis));

    let email_sender: Arc<dyn EmailSender + Send + Sync> = Arc::new(
        SmtpEmailSender::from_config(&config.email).expect("SMTP configuration rejected"),
    );
    let otp_mailer = OtpMailer::new(email_sender);

    // Auth
    let register_user_use_case = RegisterUserUseCase::new(
        user_repo.clone(),
        user_query.clone(),
        hasher.clone(),
        jwt_service.clone(),
    );
    let login_user_use_case =
        LoginUserUseCase::new(user_query.clone(), hasher.clone(), jwt_service.clone());
    let logout_user_use_case = LogoutUseCase::new(jwt_service.clone(), blacklist.clone());
    let refresh_token_use_case = RefreshTokenUseCase::new(jwt_service.clone(), blacklist.clone());
    let change_password_use_case =
        ChangePasswordUseCase::new(user_repo.clone(), user_query.clone(), hasher.clone());
    let request_password_otp_use_case =
        RequestPasswordOtpUseCase::new(user_query.clone(), otp_repo.clone(), otp_mailer);
    let verify_password_otp_use_case =
        VerifyPasswordOtpUseCase::new(user_query.clone(), otp_repo, jwt_service.clone());

    // SSO
    let sso_use_case = SsoUseCase::new(
        GoogleOAuthProvider::new(config.google_oauth.clone()),
        RedisLoginStateStore::new(Arc::clone(&redis)),
        user_query,
        user_repo.clone(),
        hasher,
        jwt_service.clone(),
    );

    // Profiles and vocabulary attachment
    let profile_query = Arc::new(ProfileQueryPostgres::new(Arc::clone(&db)));
    let profile_repo = Arc::new(ProfileRepositoryPostgres::new(Arc::clone(&db)));
    let attachments = Arc::new(VocabAttachmentRepositoryPostgres::new(Arc::clone(&db)));
    let profile_use_cases = ProfileUseCases {
        list_freelancers: Arc::new(ListFreelancerProfilesUseCase::new(Arc::clone(
            &profile_query,
        ))),
        get_freelancer: Arc::new(GetFreelancerProfileUseCase::new(Arc::clone(&profile_query))),
        update_freelancer: Arc::new(UpdateFreelancerProfileUseCase::new(Arc::clone(
            &profile_repo,
        ))),
        delete_freelancer: Arc::new(DeleteFreelancerProfileUseCase::new(Arc::new(user_repo))),
        attach: Arc::new(AttachVocabulariesUseCase::new(
            Arc::clone(&profile_query),
            Arc::clone(&attachments),
        )),
        detach: Arc::new(DetachVocabulariesUseCase::new(
            Arc::clone(&profile_query),
            Arc::clone(&attachments),
        )),
        list_admins: Arc::new(ListAdminProfilesUseCase::new(Arc::clone(&profile_query))),
        get_admin: Arc::new(GetAdminProfileUseCase::new(Arc::clone(&profile_query))),
        update_admin: Arc::new(UpdateAdminProfileUseCase::new(Arc::clone(&profile_repo))),
    };

    // Vocabulary
    let vocabulary_use_cases = VocabularyUseCases {
        list: Arc::new(ListVocabularyUseCase::new(Arc::new(
            VocabularyQueryPostgres::new(Arc::clone(&db)),
        ))),
        create: Arc::new(CreateVocabularyUseCase::new(Arc::new(
            VocabularyRepositoryPostgres::new(Arc::clone(&db)),
        ))),
    };

    // Portfolio
    let portfolio_use_cases = PortfolioUseCases {
        links: Arc::new(LinksUseCase::new(
            Arc::clone(&profile_query),
            Arc::new(LinkRepositoryPostgres::new(Arc::clone(&db))),
        )),
        projects: Arc::new(ProjectsUseCase::new(
            Arc::clone(&profile_query),
            Arc::new(ProjectRepositoryPostgres::new(Arc::clone(&db))),
        )),
        work_experiences: Arc::new(WorkExperiencesUseCase::new(
            Arc::clone(&profile_query),
            Arc::new(WorkExperienceRepositoryPostgres::new(Arc::clone(&db))),
        )),
    };

    // Events
    let event_query = Arc::new(EventQueryPostgres::new(Arc::clone(&db)));
    let event_use_cases = EventUseCases {
        events: Arc::new(EventsUseCase::new(
            Arc::clone(&profile_query),
            Arc::clone(&event_query),
            Arc::new(EventRepositoryPostgres::new(Arc::clone(&db))),
        )),
        attendance: Arc::new(AttendanceUseCase::new(
            Arc::clone(&event_query),
            Arc::new(MembershipRepositoryPostgres::new(Arc::clone(&db))),
        )),
    };

    // News feed
    let newsfeed_use_case = NewsFeedUseCase::new(Arc::new(NewsFeedRepositoryPostgres::new(
        Arc::clone(&db),
    )));

    // Media uploads
    let media_use_case = MediaUseCase::new(
        ProfileQueryPostgres::new(Arc::clone(&db)),
        MediaBindingRepositoryPostgres::new(Arc::clone(&db)),
        GcsMediaStore::new(config.media.bucket_name.clone()),
        config.media.max_upload_size_bytes,
        config.media.folder.clone(),
    );

    let state = AppState {
        register_user_use_case: Arc::new(register_user_use_case),
        login_user_use_case: Arc::new(login_user_use_case),
        logout_user_use_case: Arc::new(logout_user_use_case),
        refresh_token_use_case: Arc::new(refresh_token_use_case),
        change_password_use_case: Arc::new(change_password_use_case),
        request_password_otp_use_case: Arc::new(request_password_otp_use_case),
        verify_password_otp_use_case: Arc::new(verify_password_otp_use_case),
        sso_use_case: Arc::new(sso_use_case),
        profile_use_cases,
        vocabulary_use_cases,
        portfolio_use_cases,
        event_use_cases,
        newsfeed_use_case: Arc::new(newsfeed_use_case),
        media_use_case: Arc::new(media_use_case),
    };

    let token_provider: Arc<dyn TokenProvider + Send + Sync> = Arc::new(jwt_service);
    let db_for_server = Arc::clone(&db);
    let redis_for_server = Arc::clone(&redis);

    HttpServer::new(move || {
        App::new()
            .wrap(middleware::NormalizePath::trim())
            .app_data(custom_json_config())
            .app_data(web::Data::new(state.clone()))
            .app_data(web::Data::new(Arc::clone(&token_provider)))
            .app_data(web::Data::new(Arc::clone(&db_for_server)))
            .app_data(web::Data::new(Arc::clone(&redis_for_server)))
            .configure(init_routes)
            .default_service(web::route().to(not_found))
    })
    .bind(server_url)?
    .run()
    .await
}

/// Unknown paths share one body with the SSO unknown-role case.
async fn not_found() -> HttpResponse {
    ApiResponse::message_error(actix_web::http::StatusCode::NOT_FOUND, "Path not found")
}

#[cfg(not(tarpaulin_include))]
fn init_routes(cfg: &mut web::ServiceConfig) {
    use crate::modules::auth::adapter::incoming::web::routes as auth_routes;
    use crate::modules::event::adapter::incoming::web::routes as event_routes;
    use crate::modules::media::adapter::incoming::web::routes as media_routes;
    use crate::modules::newsfeed::adapter::incoming::web::routes as newsfeed_routes;
    use crate::modules::portfolio::adapter::incoming::web::routes as portfolio_routes;
    use crate::modules::profile::adapter::incoming::web::routes as profile_routes;
    use crate::modules::sso::adapter::incoming::web::routes as sso_routes;
    use crate::modules::vocabulary::adapter::incoming::web::routes as vocabulary_routes;

    // Health
    cfg.service(crate::health::health);
    cfg.service(crate::health::readiness);
    // Auth
    cfg.service(auth_routes::register_freelancer_handler);
    cfg.service(auth_routes::register_sponsor_handler);
    cfg.service(auth_routes::register_admin_handler);
    cfg.service(auth_routes::login_user_handler);
    cfg.service(auth_routes::logout_user_handler);
    cfg.service(auth_routes::refresh_token_handler);
    cfg.service(auth_routes::change_password_handler);
    cfg.service(auth_routes::request_password_otp_handler);
    cfg.service(auth_routes::verify_password_otp_handler);
    // SSO
    cfg.service(sso_routes::sso_google_login_handler);
    cfg.service(sso_routes::sso_google_callback_handler);
    // Profiles
    cfg.service(profile_routes::list_freelancer_profiles_handler);
    cfg.service(profile_routes::get_freelancer_profile_handler);
    cfg.service(profile_routes::update_freelancer_profile_handler);
    cfg.service(profile_routes::delete_freelancer_profile_handler);
    cfg.service(profile_routes::attach_skills_handler);
    cfg.service(profile_routes::detach_skills_handler);
    cfg.service(profile_routes::attach_languages_handler);
    cfg.service(profile_routes::detach_languages_handler);
    cfg.service(profile_routes::attach_niches_handler);
    cfg.service(profile_routes::detach_niches_handler);
    cfg.service(profile_routes::list_admin_profiles_handler);
    cfg.service(profile_routes::get_admin_profile_handler);
    cfg.service(profile_routes::update_admin_profile_handler);
    // Vocabulary
    cfg.service(vocabulary_routes::create_skill_handler);
    cfg.service(vocabulary_routes::create_language_handler);
    cfg.service(vocabulary_routes::create_niche_handler);
    cfg.service(vocabulary_routes::list_skills_handler);
    cfg.service(vocabulary_routes::list_languages_handler);
    cfg.service(vocabulary_routes::list_niches_handler);
    // Portfolio
    cfg.service(portfolio_routes::create_link_handler);
    cfg.service(portfolio_routes::update_link_handler);
    cfg.service(portfolio_routes::delete_link_handler);
    cfg.service(portfolio_routes::list_projects_handler);
    cfg.service(portfolio_routes::create_project_handler);
    cfg.service(portfolio_routes::delete_project_handler);
    cfg.service(portfolio_routes::list_work_experiences_handler);
    cfg.service(portfolio_routes::create_work_experience_handler);
    cfg.service(portfolio_routes::delete_work_experience_handler);
    // Media
    cfg.service(media_routes::upload_profile_picture_handler);
    cfg.service(media_routes::delete_profile_picture_handler);
    cfg.service(media_routes::upload_resume_handler);
    cfg.service(media_routes::delete_resume_handler);
    cfg.service(media_routes::upload_project_cover_handler);
    cfg.service(media_routes::delete_project_cover_handler);
    // Events
    cfg.service(event_routes::create_event_handler);
    cfg.service(event_routes::list_events_handler);
    cfg.service(event_routes::get_event_handler);
    cfg.service(event_routes::update_event_handler);
    cfg.service(event_routes::delete_event_handler);
    cfg.service(event_routes::list_attendees_handler);
    cfg.service(event_routes::join_event_handler);
    cfg.service(event_routes::remove_attendee_handler);
    cfg.service(event_routes::add_cohost_handler);
    cfg.service(event_routes::remove_cohost_handler);
    // News feed
    cfg.service(newsfeed_routes::list_newsfeed_handler);
    cfg.service(newsfeed_routes::get_newsfeed_item_handler);
    cfg.service(newsfeed_routes::create_newsfeed_item_handler);
    cfg.service(newsfeed_routes::update_newsfeed_item_handler);
    cfg.service(newsfeed_routes::delete_newsfeed_item_handler);
    // API docs
    cfg.service(
        utoipa_swagger_ui::SwaggerUi::new("/swagger-ui/{_:.*}").url(
            "/api-docs/openapi.json",
            <crate::api::openapi::ApiDoc as utoipa::OpenApi>::openapi(),
        ),
    );
}

#[cfg(not(tarpaulin_include))]
fn main() {
    if let Err(e) = start() {
        eprintln!("Error starting app: {e}");
    }
}
