use std::sync::Arc;

use crate::modules::profile::application::use_cases::{
    attach_vocabularies::IAttachVocabulariesUseCase,
    delete_freelancer_profile::IDeleteFreelancerProfileUseCase,
    detach_vocabularies::IDetachVocabulariesUseCase, get_admin_profile::IGetAdminProfileUseCase,
    get_freelancer_profile::IGetFreelancerProfileUseCase,
    list_admin_profiles::IListAdminProfilesUseCase,
    list_freelancer_profiles::IListFreelancerProfilesUseCase,
    update_admin_profile::IUpdateAdminProfileUseCase,
    update_freelancer_profile::IUpdateFreelancerProfileUseCase,
};

#[derive(Clone)]
pub struct ProfileUseCases {
    pub list_freelancers: Arc<dyn IListFreelancerProfilesUseCase + Send + Sync>,
    pub get_freelancer: Arc<dyn IGetFreelancerProfileUseCase + Send + Sync>,
    pub update_freelancer: Arc<dyn IUpdateFreelancerProfileUseCase + Send + Sync>,
    pub delete_freelancer: Arc<dyn IDeleteFreelancerProfileUseCase + Send + Sync>,
    pub attach: Arc<dyn IAttachVocabulariesUseCase + Send + Sync>,
    pub detach: Arc<dyn IDetachVocabulariesUseCase + Send + Sync>,
    pub list_admins: Arc<dyn IListAdminProfilesUseCase + Send + Sync>,
    pub get_admin: Arc<dyn IGetAdminProfileUseCase + Send + Sync>,
    pub update_admin: Arc<dyn IUpdateAdminProfileUseCase + Send + Sync>,
}
