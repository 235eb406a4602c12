use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::OpenApi;

use crate::modules::auth::application::domain::entities::UserPublic;
use crate::modules::auth::application::use_cases::{
    change_password::ChangePasswordRequest,
    login_user::{LoginRequest, LoginUserResponse},
    logout_user::LogoutRequest,
    refresh_token::{RefreshRequest, RefreshTokenResponse},
    register_user::{RegisterRequest, RegisterUserResponse},
    request_password_otp::{RequestOtpRequest, RequestOtpResponse},
    verify_password_otp::VerifyOtpRequest,
};
use crate::modules::event::application::domain::entities::{Event, EventDetail, EventMember};
use crate::modules::event::application::use_cases::manage_events::{
    EventRequest, EventUpdateRequest,
};
use crate::modules::newsfeed::application::domain::entities::NewsFeedItem;
use crate::modules::newsfeed::application::use_cases::manage_newsfeed::{
    PostRequest, PostUpdateRequest,
};
use crate::modules::portfolio::application::use_cases::{
    manage_links::LinkRequest, manage_projects::ProjectRequest,
    manage_work_experiences::WorkExperienceRequest,
};
use crate::modules::profile::application::domain::entities::{
    BasicProfile, BasicProfileChanges, FreelancerProfile, FreelancerProfileChanges,
    FreelancerProfileDetail, PortfolioProject, ProfileLink, VocabItem, WorkExperience,
};
use crate::modules::sso::application::use_cases::google_login::SsoLoginResponse;
use crate::modules::vocabulary::application::use_cases::create_vocabulary::CreateVocabRequest;
use crate::shared::api::response::{DetailBody, FieldErrors, MessageBody, MessageError, SimpleError};

use crate::modules::auth::adapter::incoming::web::routes::password_otp::OtpSentResponse;
use crate::modules::event::adapter::incoming::web::routes::attendees::RsvpRequest;
use crate::modules::event::adapter::incoming::web::routes::cohosts::CohostRequest;
use crate::modules::profile::adapter::incoming::web::routes::attachments::{
    LanguageIds, NicheIds, SkillIds,
};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "TalentLink API",
        version = "1.0.0",
        description = "Marketplace backend connecting freelancers, sponsors and event hosts",
    ),
    paths(
        // Auth
        crate::modules::auth::adapter::incoming::web::routes::register_user::register_freelancer_handler,
        crate::modules::auth::adapter::incoming::web::routes::register_user::register_sponsor_handler,
        crate::modules::auth::adapter::incoming::web::routes::register_user::register_admin_handler,
        crate::modules::auth::adapter::incoming::web::routes::login_user::login_user_handler,
        crate::modules::auth::adapter::incoming::web::routes::logout_user::logout_user_handler,
        crate::modules::auth::adapter::incoming::web::routes::refresh_token::refresh_token_handler,
        crate::modules::auth::adapter::incoming::web::routes::change_password::change_password_handler,
        crate::modules::auth::adapter::incoming::web::routes::password_otp::request_password_otp_handler,
        crate::modules::auth::adapter::incoming::web::routes::password_otp::verify_password_otp_handler,

        // SSO
        crate::modules::sso::adapter::incoming::web::routes::google::sso_google_login_handler,
        crate::modules::sso::adapter::incoming::web::routes::google::sso_google_callback_handler,

        // Profiles
        crate::modules::profile::adapter::incoming::web::routes::freelancer_profiles::list_freelancer_profiles_handler,
        crate::modules::profile::adapter::incoming::web::routes::freelancer_profiles::get_freelancer_profile_handler,
        crate::modules::profile::adapter::incoming::web::routes::freelancer_profiles::update_freelancer_profile_handler,
        crate::modules::profile::adapter::incoming::web::routes::freelancer_profiles::delete_freelancer_profile_handler,
        crate::modules::profile::adapter::incoming::web::routes::attachments::attach_skills_handler,
        crate::modules::profile::adapter::incoming::web::routes::attachments::detach_skills_handler,
        crate::modules::profile::adapter::incoming::web::routes::attachments::attach_languages_handler,
        crate::modules::profile::adapter::incoming::web::routes::attachments::detach_languages_handler,
        crate::modules::profile::adapter::incoming::web::routes::attachments::attach_niches_handler,
        crate::modules::profile::adapter::incoming::web::routes::attachments::detach_niches_handler,
        crate::modules::profile::adapter::incoming::web::routes::admin_profiles::list_admin_profiles_handler,
        crate::modules::profile::adapter::incoming::web::routes::admin_profiles::get_admin_profile_handler,
        crate::modules::profile::adapter::incoming::web::routes::admin_profiles::update_admin_profile_handler,

        // Vocabulary
        crate::modules::vocabulary::adapter::incoming::web::routes::create_vocabulary::create_skill_handler,
        crate::modules::vocabulary::adapter::incoming::web::routes::create_vocabulary::create_language_handler,
        crate::modules::vocabulary::adapter::incoming::web::routes::create_vocabulary::create_niche_handler,
        crate::modules::vocabulary::adapter::incoming::web::routes::list_vocabulary::list_skills_handler,
        crate::modules::vocabulary::adapter::incoming::web::routes::list_vocabulary::list_languages_handler,
        crate::modules::vocabulary::adapter::incoming::web::routes::list_vocabulary::list_niches_handler,

        // Portfolio
        crate::modules::portfolio::adapter::incoming::web::routes::links::create_link_handler,
        crate::modules::portfolio::adapter::incoming::web::routes::links::update_link_handler,
        crate::modules::portfolio::adapter::incoming::web::routes::links::delete_link_handler,
        crate::modules::portfolio::adapter::incoming::web::routes::projects::list_projects_handler,
        crate::modules::portfolio::adapter::incoming::web::routes::projects::create_project_handler,
        crate::modules::portfolio::adapter::incoming::web::routes::projects::delete_project_handler,
        crate::modules::portfolio::adapter::incoming::web::routes::work_experiences::list_work_experiences_handler,
        crate::modules::portfolio::adapter::incoming::web::routes::work_experiences::create_work_experience_handler,
        crate::modules::portfolio::adapter::incoming::web::routes::work_experiences::delete_work_experience_handler,

        // Media
        crate::modules::media::adapter::incoming::web::routes::profile_picture::upload_profile_picture_handler,
        crate::modules::media::adapter::incoming::web::routes::profile_picture::delete_profile_picture_handler,
        crate::modules::media::adapter::incoming::web::routes::resume::upload_resume_handler,
        crate::modules::media::adapter::incoming::web::routes::resume::delete_resume_handler,
        crate::modules::media::adapter::incoming::web::routes::project_cover::upload_project_cover_handler,
        crate::modules::media::adapter::incoming::web::routes::project_cover::delete_project_cover_handler,

        // Events
        crate::modules::event::adapter::incoming::web::routes::events::create_event_handler,
        crate::modules::event::adapter::incoming::web::routes::events::list_events_handler,
        crate::modules::event::adapter::incoming::web::routes::events::get_event_handler,
        crate::modules::event::adapter::incoming::web::routes::events::update_event_handler,
        crate::modules::event::adapter::incoming::web::routes::events::delete_event_handler,
        crate::modules::event::adapter::incoming::web::routes::attendees::list_attendees_handler,
        crate::modules::event::adapter::incoming::web::routes::attendees::join_event_handler,
        crate::modules::event::adapter::incoming::web::routes::attendees::remove_attendee_handler,
        crate::modules::event::adapter::incoming::web::routes::cohosts::add_cohost_handler,
        crate::modules::event::adapter::incoming::web::routes::cohosts::remove_cohost_handler,

        // News feed
        crate::modules::newsfeed::adapter::incoming::web::routes::newsfeed::list_newsfeed_handler,
        crate::modules::newsfeed::adapter::incoming::web::routes::newsfeed::get_newsfeed_item_handler,
        crate::modules::newsfeed::adapter::incoming::web::routes::newsfeed::create_newsfeed_item_handler,
        crate::modules::newsfeed::adapter::incoming::web::routes::newsfeed::update_newsfeed_item_handler,
        crate::modules::newsfeed::adapter::incoming::web::routes::newsfeed::delete_newsfeed_item_handler,
    ),
    components(
        schemas(
            // Error bodies
            SimpleError,
            FieldErrors,
            DetailBody,
            MessageError,
            MessageBody,

            // Auth
            UserPublic,
            RegisterRequest,
            RegisterUserResponse,
            LoginRequest,
            LoginUserResponse,
            LogoutRequest,
            RefreshRequest,
            RefreshTokenResponse,
            ChangePasswordRequest,
            RequestOtpRequest,
            RequestOtpResponse,
            OtpSentResponse,
            VerifyOtpRequest,
            SsoLoginResponse,

            // Profiles and vocabulary
            FreelancerProfile,
            FreelancerProfileDetail,
            FreelancerProfileChanges,
            BasicProfile,
            BasicProfileChanges,
            VocabItem,
            CreateVocabRequest,
            SkillIds,
            LanguageIds,
            NicheIds,

            // Portfolio
            ProfileLink,
            PortfolioProject,
            WorkExperience,
            LinkRequest,
            ProjectRequest,
            WorkExperienceRequest,

            // Events
            Event,
            EventDetail,
            EventMember,
            EventRequest,
            EventUpdateRequest,
            RsvpRequest,
            CohostRequest,

            // News feed
            NewsFeedItem,
            PostRequest,
            PostUpdateRequest,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "auth", description = "Registration, login and password recovery"),
        (name = "sso", description = "Google OAuth sign-in"),
        (name = "profiles", description = "Freelancer and admin profiles"),
        (name = "vocabularies", description = "Skills, languages and niches"),
        (name = "portfolio", description = "Links, projects and work experiences"),
        (name = "media", description = "Profile and project file uploads"),
        (name = "events", description = "Events, attendance and cohosts"),
        (name = "newsfeed", description = "News feed posts"),
    )
)]
pub struct ApiDoc;

struct SecurityAddon;

impl utoipa::Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .description(Some("Access token issued at login"))
                        .build(),
                ),
            )
        }
    }
}
