use std::sync::Arc;

use crate::modules::portfolio::application::use_cases::{
    manage_links::ILinksUseCase, manage_projects::IProjectsUseCase,
    manage_work_experiences::IWorkExperiencesUseCase,
};

#[derive(Clone)]
pub struct PortfolioUseCases {
    pub links: Arc<dyn ILinksUseCase + Send + Sync>,
    pub projects: Arc<dyn IProjectsUseCase + Send + Sync>,
    pub work_experiences: Arc<dyn IWorkExperiencesUseCase + Send + Sync>,
}
