//! Builds an `AppState` for handler tests. Every slot starts as an
//! `Unwired` stub that panics when called, so a test only wires the use
//! cases its handler actually exercises.
use std::sync::Arc;

use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::auth::application::domain::entities::Role;
use crate::modules::auth::application::use_cases::{
    change_password::{ChangePasswordError, ChangePasswordRequest, IChangePasswordUseCase},
    login_user::{ILoginUserUseCase, LoginError, LoginRequest, LoginUserResponse},
    logout_user::{ILogoutUseCase, LogoutError, LogoutRequest},
    refresh_token::{IRefreshTokenUseCase, RefreshError, RefreshRequest, RefreshTokenResponse},
    register_user::{IRegisterUserUseCase, RegisterError, RegisterRequest, RegisterUserResponse},
    request_password_otp::{IRequestPasswordOtpUseCase, RequestOtpError, RequestOtpRequest, RequestOtpResponse},
    verify_password_otp::{IVerifyPasswordOtpUseCase, VerifyOtpError, VerifyOtpRequest},
};

use crate::modules::profile::application::domain::entities::{
    BasicProfile, BasicProfileChanges, FreelancerProfile, FreelancerProfileChanges,
    FreelancerProfileDetail, PortfolioProject, ProfileLink, VocabItem, VocabKind, WorkExperience,
};
use crate::modules::profile::application::ports::outgoing::attachment_repository::AttachmentReport;
use crate::modules::profile::application::ports::outgoing::profile_query::ProfileListFilter;
use crate::modules::profile::application::profile_use_cases::ProfileUseCases;
use crate::modules::profile::application::use_cases::{
    attach_vocabularies::{AttachError, IAttachVocabulariesUseCase},
    delete_freelancer_profile::{DeleteProfileError, IDeleteFreelancerProfileUseCase},
    detach_vocabularies::{DetachError, IDetachVocabulariesUseCase},
    get_admin_profile::IGetAdminProfileUseCase,
    get_freelancer_profile::{GetProfileError, IGetFreelancerProfileUseCase},
    list_admin_profiles::IListAdminProfilesUseCase,
    list_freelancer_profiles::{IListFreelancerProfilesUseCase, ListProfilesError},
    update_admin_profile::IUpdateAdminProfileUseCase,
    update_freelancer_profile::{IUpdateFreelancerProfileUseCase, UpdateProfileError},
};

use crate::modules::vocabulary::application::ports::outgoing::vocabulary_query::VocabListFilter;
use crate::modules::vocabulary::application::use_cases::{
    create_vocabulary::{CreateVocabRequest, CreateVocabularyError, ICreateVocabularyUseCase},
    list_vocabulary::{IListVocabularyUseCase, ListVocabularyError},
};
use crate::modules::vocabulary::application::vocabulary_use_cases::VocabularyUseCases;

use crate::modules::portfolio::application::portfolio_use_cases::PortfolioUseCases;
use crate::modules::portfolio::application::ports::outgoing::project_repository::ProjectListFilter;
use crate::modules::portfolio::application::use_cases::{
    manage_links::{ILinksUseCase, LinkError, LinkRequest},
    manage_projects::{IProjectsUseCase, ProjectError, ProjectRequest},
    manage_work_experiences::{IWorkExperiencesUseCase, WorkExperienceError, WorkExperienceRequest},
};

use crate::modules::event::application::domain::entities::{Event, EventDetail, EventMember};
use crate::modules::event::application::event_use_cases::EventUseCases;
use crate::modules::event::application::ports::outgoing::event_query::EventListFilter;
use crate::modules::event::application::use_cases::{
    manage_attendance::{AttendanceError, IAttendanceUseCase},
    manage_events::{EventError, EventRequest, EventUpdateRequest, IEventsUseCase},
};

use crate::modules::newsfeed::application::domain::entities::NewsFeedItem;
use crate::modules::newsfeed::application::use_cases::manage_newsfeed::{
    INewsFeedUseCase, NewsFeedError, PostRequest, PostUpdateRequest,
};

use crate::modules::media::application::domain::upload_policy::UploadedFile;
use crate::modules::media::application::use_cases::manage_media::{IMediaUseCase, MediaError};

use crate::modules::sso::application::use_cases::google_login::{
    ISsoUseCase, SsoError, SsoLoginResponse, StartedLogin,
};

use crate::AppState;

/// Placeholder for slots a test never touches.
struct Unwired;

macro_rules! unwired {
    () => {
        panic!("use case not wired in TestAppStateBuilder")
    };
}

#[async_trait]
impl IRegisterUserUseCase for Unwired {
    async fn execute(
        &self,
        _role: Role,
        _request: RegisterRequest,
    ) -> Result<RegisterUserResponse, RegisterError> {
        unwired!()
    }
}

#[async_trait]
impl ILoginUserUseCase for Unwired {
    async fn execute(&self, _request: LoginRequest) -> Result<LoginUserResponse, LoginError> {
        unwired!()
    }
}

#[async_trait]
impl ILogoutUseCase for Unwired {
    async fn execute(&self, _request: LogoutRequest) -> Result<(), LogoutError> {
        unwired!()
    }
}

#[async_trait]
impl IRefreshTokenUseCase for Unwired {
    async fn execute(&self, _request: RefreshRequest) -> Result<RefreshTokenResponse, RefreshError> {
        unwired!()
    }
}

#[async_trait]
impl IChangePasswordUseCase for Unwired {
    async fn execute(
        &self,
        _user_uuid: Uuid,
        _request: ChangePasswordRequest,
    ) -> Result<(), ChangePasswordError> {
        unwired!()
    }
}

#[async_trait]
impl IRequestPasswordOtpUseCase for Unwired {
    async fn execute(
        &self,
        _request: RequestOtpRequest,
    ) -> Result<RequestOtpResponse, RequestOtpError> {
        unwired!()
    }
}

#[async_trait]
impl IVerifyPasswordOtpUseCase for Unwired {
    async fn execute(
        &self,
        _user_uuid: Uuid,
        _request: VerifyOtpRequest,
    ) -> Result<LoginUserResponse, VerifyOtpError> {
        unwired!()
    }
}

#[async_trait]
impl ISsoUseCase for Unwired {
    async fn start(&self, _role: &str) -> Result<StartedLogin, SsoError> {
        unwired!()
    }

    async fn callback(
        &self,
        _session_id: Option<String>,
        _code: Option<String>,
        _state: Option<String>,
    ) -> Result<SsoLoginResponse, SsoError> {
        unwired!()
    }
}

#[async_trait]
impl IListFreelancerProfilesUseCase for Unwired {
    async fn execute(
        &self,
        _filter: ProfileListFilter,
    ) -> Result<Vec<FreelancerProfile>, ListProfilesError> {
        unwired!()
    }
}

#[async_trait]
impl IGetFreelancerProfileUseCase for Unwired {
    async fn execute(&self, _user_uuid: Uuid) -> Result<FreelancerProfileDetail, GetProfileError> {
        unwired!()
    }
}

#[async_trait]
impl IUpdateFreelancerProfileUseCase for Unwired {
    async fn execute(
        &self,
        _caller_uuid: Uuid,
        _target_uuid: Uuid,
        _changes: FreelancerProfileChanges,
    ) -> Result<FreelancerProfile, UpdateProfileError> {
        unwired!()
    }
}

#[async_trait]
impl IDeleteFreelancerProfileUseCase for Unwired {
    async fn execute(
        &self,
        _caller_uuid: Uuid,
        _target_uuid: Uuid,
    ) -> Result<(), DeleteProfileError> {
        unwired!()
    }
}

#[async_trait]
impl IAttachVocabulariesUseCase for Unwired {
    async fn execute(
        &self,
        _profile_uuid: Uuid,
        _kind: VocabKind,
        _ids: Vec<i64>,
    ) -> Result<AttachmentReport, AttachError> {
        unwired!()
    }
}

#[async_trait]
impl IDetachVocabulariesUseCase for Unwired {
    async fn execute(
        &self,
        _profile_uuid: Uuid,
        _kind: VocabKind,
        _ids: Vec<i64>,
    ) -> Result<AttachmentReport, DetachError> {
        unwired!()
    }
}

#[async_trait]
impl IListAdminProfilesUseCase for Unwired {
    async fn execute(
        &self,
        _filter: ProfileListFilter,
    ) -> Result<Vec<BasicProfile>, ListProfilesError> {
        unwired!()
    }
}

#[async_trait]
impl IGetAdminProfileUseCase for Unwired {
    async fn execute(&self, _user_uuid: Uuid) -> Result<BasicProfile, GetProfileError> {
        unwired!()
    }
}

#[async_trait]
impl IUpdateAdminProfileUseCase for Unwired {
    async fn execute(
        &self,
        _caller_uuid: Uuid,
        _target_uuid: Uuid,
        _changes: BasicProfileChanges,
    ) -> Result<BasicProfile, UpdateProfileError> {
        unwired!()
    }
}

#[async_trait]
impl ICreateVocabularyUseCase for Unwired {
    async fn execute(
        &self,
        _kind: VocabKind,
        _request: CreateVocabRequest,
    ) -> Result<VocabItem, CreateVocabularyError> {
        unwired!()
    }
}

#[async_trait]
impl IListVocabularyUseCase for Unwired {
    async fn execute(
        &self,
        _kind: VocabKind,
        _filter: VocabListFilter,
    ) -> Result<Vec<VocabItem>, ListVocabularyError> {
        unwired!()
    }
}

#[async_trait]
impl ILinksUseCase for Unwired {
    async fn create(
        &self,
        _caller_uuid: Uuid,
        _profile_uuid: Uuid,
        _request: LinkRequest,
    ) -> Result<ProfileLink, LinkError> {
        unwired!()
    }

    async fn update(
        &self,
        _caller_uuid: Uuid,
        _profile_uuid: Uuid,
        _link_id: i64,
        _request: LinkRequest,
    ) -> Result<ProfileLink, LinkError> {
        unwired!()
    }

    async fn delete(
        &self,
        _caller_uuid: Uuid,
        _profile_uuid: Uuid,
        _link_id: i64,
    ) -> Result<(), LinkError> {
        unwired!()
    }
}

#[async_trait]
impl IProjectsUseCase for Unwired {
    async fn list(
        &self,
        _profile_uuid: Uuid,
        _filter: ProjectListFilter,
    ) -> Result<Vec<PortfolioProject>, ProjectError> {
        unwired!()
    }

    async fn create(
        &self,
        _caller_uuid: Uuid,
        _profile_uuid: Uuid,
        _request: ProjectRequest,
    ) -> Result<PortfolioProject, ProjectError> {
        unwired!()
    }

    async fn delete(
        &self,
        _caller_uuid: Uuid,
        _profile_uuid: Uuid,
        _project_id: i64,
    ) -> Result<(), ProjectError> {
        unwired!()
    }
}

#[async_trait]
impl IWorkExperiencesUseCase for Unwired {
    async fn list(&self, _profile_uuid: Uuid) -> Result<Vec<WorkExperience>, WorkExperienceError> {
        unwired!()
    }

    async fn create(
        &self,
        _caller_uuid: Uuid,
        _profile_uuid: Uuid,
        _request: WorkExperienceRequest,
    ) -> Result<WorkExperience, WorkExperienceError> {
        unwired!()
    }

    async fn delete(
        &self,
        _caller_uuid: Uuid,
        _profile_uuid: Uuid,
        _experience_id: i64,
    ) -> Result<(), WorkExperienceError> {
        unwired!()
    }
}

#[async_trait]
impl IEventsUseCase for Unwired {
    async fn create(
        &self,
        _caller_uuid: Uuid,
        _request: EventRequest,
    ) -> Result<Event, EventError> {
        unwired!()
    }

    async fn list(&self, _filter: EventListFilter) -> Result<Vec<Event>, EventError> {
        unwired!()
    }

    async fn get(&self, _event_uuid: Uuid) -> Result<EventDetail, EventError> {
        unwired!()
    }

    async fn update(
        &self,
        _caller_uuid: Uuid,
        _event_uuid: Uuid,
        _request: EventUpdateRequest,
    ) -> Result<Event, EventError> {
        unwired!()
    }

    async fn delete(&self, _caller_uuid: Uuid, _event_uuid: Uuid) -> Result<(), EventError> {
        unwired!()
    }
}

#[async_trait]
impl IAttendanceUseCase for Unwired {
    async fn list_attendees(
        &self,
        _event_uuid: Uuid,
        _search: Option<String>,
    ) -> Result<Vec<EventMember>, AttendanceError> {
        unwired!()
    }

    async fn join(
        &self,
        _caller_uuid: Uuid,
        _event_uuid: Uuid,
    ) -> Result<EventMember, AttendanceError> {
        unwired!()
    }

    async fn remove_attendee(
        &self,
        _caller_uuid: Uuid,
        _caller_is_admin: bool,
        _event_uuid: Uuid,
        _attendee_uuid: Uuid,
    ) -> Result<(), AttendanceError> {
        unwired!()
    }

    async fn add_cohost(
        &self,
        _event_uuid: Uuid,
        _cohost_uuid: Uuid,
    ) -> Result<EventMember, AttendanceError> {
        unwired!()
    }

    async fn remove_cohost(
        &self,
        _event_uuid: Uuid,
        _cohost_uuid: Uuid,
    ) -> Result<(), AttendanceError> {
        unwired!()
    }
}

#[async_trait]
impl INewsFeedUseCase for Unwired {
    async fn list(&self, _offset: u64, _limit: u64) -> Result<Vec<NewsFeedItem>, NewsFeedError> {
        unwired!()
    }

    async fn get(&self, _id: i64) -> Result<NewsFeedItem, NewsFeedError> {
        unwired!()
    }

    async fn create(&self, _request: PostRequest) -> Result<NewsFeedItem, NewsFeedError> {
        unwired!()
    }

    async fn update(
        &self,
        _id: i64,
        _request: PostUpdateRequest,
    ) -> Result<NewsFeedItem, NewsFeedError> {
        unwired!()
    }

    async fn delete(&self, _id: i64) -> Result<(), NewsFeedError> {
        unwired!()
    }
}

#[async_trait]
impl IMediaUseCase for Unwired {
    fn max_file_size_bytes(&self) -> u64 {
        unwired!()
    }

    async fn upload_profile_picture(
        &self,
        _caller_uuid: Uuid,
        _profile_uuid: Uuid,
        _file: Option<UploadedFile>,
    ) -> Result<String, MediaError> {
        unwired!()
    }

    async fn delete_profile_picture(
        &self,
        _caller_uuid: Uuid,
        _profile_uuid: Uuid,
    ) -> Result<(), MediaError> {
        unwired!()
    }

    async fn upload_resume(
        &self,
        _caller_uuid: Uuid,
        _profile_uuid: Uuid,
        _file: Option<UploadedFile>,
    ) -> Result<String, MediaError> {
        unwired!()
    }

    async fn delete_resume(
        &self,
        _caller_uuid: Uuid,
        _profile_uuid: Uuid,
    ) -> Result<(), MediaError> {
        unwired!()
    }

    async fn upload_project_cover(
        &self,
        _caller_uuid: Uuid,
        _profile_uuid: Uuid,
        _project_id: i64,
        _file: Option<UploadedFile>,
    ) -> Result<String, MediaError> {
        unwired!()
    }

    async fn delete_project_cover(
        &self,
        _caller_uuid: Uuid,
        _profile_uuid: Uuid,
        _project_id: i64,
    ) -> Result<(), MediaError> {
        unwired!()
    }
}

pub struct TestAppStateBuilder {
    state: AppState,
}

impl Default for TestAppStateBuilder {
    fn default() -> Self {
        let unwired = Arc::new(Unwired);
        Self {
            state: AppState {
                register_user_use_case: unwired.clone(),
                login_user_use_case: unwired.clone(),
                logout_user_use_case: unwired.clone(),
                refresh_token_use_case: unwired.clone(),
                change_password_use_case: unwired.clone(),
                request_password_otp_use_case: unwired.clone(),
                verify_password_otp_use_case: unwired.clone(),
                sso_use_case: unwired.clone(),
                profile_use_cases: ProfileUseCases {
                    list_freelancers: unwired.clone(),
                    get_freelancer: unwired.clone(),
                    update_freelancer: unwired.clone(),
                    delete_freelancer: unwired.clone(),
                    attach: unwired.clone(),
                    detach: unwired.clone(),
                    list_admins: unwired.clone(),
                    get_admin: unwired.clone(),
                    update_admin: unwired.clone(),
                },
                vocabulary_use_cases: VocabularyUseCases {
                    list: unwired.clone(),
                    create: unwired.clone(),
                },
                portfolio_use_cases: PortfolioUseCases {
                    links: unwired.clone(),
                    projects: unwired.clone(),
                    work_experiences: unwired.clone(),
                },
                event_use_cases: EventUseCases {
                    events: unwired.clone(),
                    attendance: unwired.clone(),
                },
                newsfeed_use_case: unwired.clone(),
                media_use_case: unwired.clone(),
            },
        }
    }
}

impl TestAppStateBuilder {
    pub fn with_register_user(
        mut self,
        uc: impl IRegisterUserUseCase + Send + Sync + 'static,
    ) -> Self {
        self.state.register_user_use_case = Arc::new(uc);
        self
    }

    pub fn with_login_user(mut self, uc: impl ILoginUserUseCase + Send + Sync + 'static) -> Self {
        self.state.login_user_use_case = Arc::new(uc);
        self
    }

    pub fn with_logout_user(mut self, uc: impl ILogoutUseCase + Send + Sync + 'static) -> Self {
        self.state.logout_user_use_case = Arc::new(uc);
        self
    }

    pub fn with_request_password_otp(
        mut self,
        uc: impl IRequestPasswordOtpUseCase + Send + Sync + 'static,
    ) -> Self {
        self.state.request_password_otp_use_case = Arc::new(uc);
        self
    }

    pub fn with_sso(mut self, uc: impl ISsoUseCase + Send + Sync + 'static) -> Self {
        self.state.sso_use_case = Arc::new(uc);
        self
    }

    pub fn with_update_freelancer_profile(
        mut self,
        uc: impl IUpdateFreelancerProfileUseCase + Send + Sync + 'static,
    ) -> Self {
        self.state.profile_use_cases.update_freelancer = Arc::new(uc);
        self
    }

    pub fn with_attach_vocabularies(
        mut self,
        uc: impl IAttachVocabulariesUseCase + Send + Sync + 'static,
    ) -> Self {
        self.state.profile_use_cases.attach = Arc::new(uc);
        self
    }

    pub fn with_get_admin_profile(
        mut self,
        uc: impl IGetAdminProfileUseCase + Send + Sync + 'static,
    ) -> Self {
        self.state.profile_use_cases.get_admin = Arc::new(uc);
        self
    }

    pub fn with_create_vocabulary(
        mut self,
        uc: impl ICreateVocabularyUseCase + Send + Sync + 'static,
    ) -> Self {
        self.state.vocabulary_use_cases.create = Arc::new(uc);
        self
    }

    pub fn with_list_vocabulary(
        mut self,
        uc: impl IListVocabularyUseCase + Send + Sync + 'static,
    ) -> Self {
        self.state.vocabulary_use_cases.list = Arc::new(uc);
        self
    }

    pub fn with_links(mut self, uc: impl ILinksUseCase + Send + Sync + 'static) -> Self {
        self.state.portfolio_use_cases.links = Arc::new(uc);
        self
    }

    pub fn with_projects(mut self, uc: impl IProjectsUseCase + Send + Sync + 'static) -> Self {
        self.state.portfolio_use_cases.projects = Arc::new(uc);
        self
    }

    pub fn with_work_experiences(
        mut self,
        uc: impl IWorkExperiencesUseCase + Send + Sync + 'static,
    ) -> Self {
        self.state.portfolio_use_cases.work_experiences = Arc::new(uc);
        self
    }

    pub fn with_events(mut self, uc: impl IEventsUseCase + Send + Sync + 'static) -> Self {
        self.state.event_use_cases.events = Arc::new(uc);
        self
    }

    pub fn with_attendance(mut self, uc: impl IAttendanceUseCase + Send + Sync + 'static) -> Self {
        self.state.event_use_cases.attendance = Arc::new(uc);
        self
    }

    pub fn with_newsfeed(mut self, uc: impl INewsFeedUseCase + Send + Sync + 'static) -> Self {
        self.state.newsfeed_use_case = Arc::new(uc);
        self
    }

    pub fn with_media(mut self, uc: impl IMediaUseCase + Send + Sync + 'static) -> Self {
        self.state.media_use_case = Arc::new(uc);
        self
    }

    pub fn build(self) -> AppState {
        self.state
    }
}
