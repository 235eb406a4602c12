use std::sync::Mutex;

use async_trait::async_trait;

use crate::modules::portfolio::application::ports::outgoing::link_repository::{
    LinkRepository, LinkRepositoryError, NewLink,
};
use crate::modules::portfolio::application::ports::outgoing::project_repository::{
    NewProject, ProjectListFilter, ProjectRepository, ProjectRepositoryError,
};
use crate::modules::portfolio::application::ports::outgoing::work_experience_repository::{
    NewWorkExperience, WorkExperienceRepository, WorkExperienceRepositoryError,
};
use crate::modules::profile::application::domain::entities::{
    PortfolioProject, ProfileLink, WorkExperience,
};

#[derive(Default)]
pub struct MockLinkRepository {
    pub missing: bool,
    pub fail: bool,
    pub created: Mutex<Vec<(i64, NewLink)>>,
    pub deleted: Mutex<Vec<(i64, i64)>>,
}

impl MockLinkRepository {
    fn guard(&self) -> Result<(), LinkRepositoryError> {
        if self.fail {
            Err(LinkRepositoryError::DatabaseError("boom".to_string()))
        } else if self.missing {
            Err(LinkRepositoryError::NotFound)
        } else {
            Ok(())
        }
    }
}

#[async_trait]
impl LinkRepository for MockLinkRepository {
    async fn create(
        &self,
        profile_id: i64,
        link: NewLink,
    ) -> Result<ProfileLink, LinkRepositoryError> {
        self.guard()?;
        let result = ProfileLink {
            id: 1,
            profile_id,
            name: link.name.clone(),
            icon: link.icon.clone(),
            url: link.url.clone(),
        };
        self.created.lock().unwrap().push((profile_id, link));
        Ok(result)
    }

    async fn update(
        &self,
        profile_id: i64,
        link_id: i64,
        link: NewLink,
    ) -> Result<ProfileLink, LinkRepositoryError> {
        self.guard()?;
        Ok(ProfileLink {
            id: link_id,
            profile_id,
            name: link.name,
            icon: link.icon,
            url: link.url,
        })
    }

    async fn delete(&self, profile_id: i64, link_id: i64) -> Result<(), LinkRepositoryError> {
        self.guard()?;
        self.deleted.lock().unwrap().push((profile_id, link_id));
        Ok(())
    }
}

#[derive(Default)]
pub struct MockProjectRepository {
    pub projects: Vec<PortfolioProject>,
    pub missing: bool,
    pub fail: bool,
    pub created: Mutex<Vec<(i64, NewProject)>>,
    pub deleted: Mutex<Vec<(i64, i64)>>,
}

impl MockProjectRepository {
    fn guard(&self) -> Result<(), ProjectRepositoryError> {
        if self.fail {
            Err(ProjectRepositoryError::DatabaseError("boom".to_string()))
        } else if self.missing {
            Err(ProjectRepositoryError::NotFound)
        } else {
            Ok(())
        }
    }
}

#[async_trait]
impl ProjectRepository for MockProjectRepository {
    async fn list(
        &self,
        _profile_id: i64,
        _filter: ProjectListFilter,
    ) -> Result<Vec<PortfolioProject>, ProjectRepositoryError> {
        if self.fail {
            return Err(ProjectRepositoryError::DatabaseError("boom".to_string()));
        }
        Ok(self.projects.clone())
    }

    async fn create(
        &self,
        profile_id: i64,
        project: NewProject,
    ) -> Result<PortfolioProject, ProjectRepositoryError> {
        self.guard()?;
        let result = PortfolioProject {
            id: 1,
            profile_id,
            name: project.name.clone(),
            url: project.url.clone(),
            skills: project.skills.clone(),
            tools: project.tools.clone(),
            description: project.description.clone(),
            cover_image_url: None,
            cover_image_public_id: None,
        };
        self.created.lock().unwrap().push((profile_id, project));
        Ok(result)
    }

    async fn delete(
        &self,
        profile_id: i64,
        project_id: i64,
    ) -> Result<(), ProjectRepositoryError> {
        self.guard()?;
        self.deleted.lock().unwrap().push((profile_id, project_id));
        Ok(())
    }
}

#[derive(Default)]
pub struct MockWorkExperienceRepository {
    pub experiences: Vec<WorkExperience>,
    pub missing: bool,
    pub fail: bool,
    pub created: Mutex<Vec<(i64, NewWorkExperience)>>,
    pub deleted: Mutex<Vec<(i64, i64)>>,
}

#[async_trait]
impl WorkExperienceRepository for MockWorkExperienceRepository {
    async fn list(
        &self,
        _profile_id: i64,
    ) -> Result<Vec<WorkExperience>, WorkExperienceRepositoryError> {
        if self.fail {
            return Err(WorkExperienceRepositoryError::DatabaseError(
                "boom".to_string(),
            ));
        }
        Ok(self.experiences.clone())
    }

    async fn create(
        &self,
        profile_id: i64,
        experience: NewWorkExperience,
    ) -> Result<WorkExperience, WorkExperienceRepositoryError> {
        if self.fail {
            return Err(WorkExperienceRepositoryError::DatabaseError(
                "boom".to_string(),
            ));
        }
        let result = WorkExperience {
            id: 1,
            profile_id,
            job_title: experience.job_title.clone(),
            company: experience.company.clone(),
            company_url: experience.company_url.clone(),
            start_date: experience.start_date,
            end_date: experience.end_date,
            description: experience.description.clone(),
            current_role: experience.current_role,
        };
        self.created.lock().unwrap().push((profile_id, experience));
        Ok(result)
    }

    async fn delete(
        &self,
        profile_id: i64,
        experience_id: i64,
    ) -> Result<(), WorkExperienceRepositoryError> {
        if self.fail {
            return Err(WorkExperienceRepositoryError::DatabaseError(
                "boom".to_string(),
            ));
        }
        if self.missing {
            return Err(WorkExperienceRepositoryError::NotFound);
        }
        self.deleted.lock().unwrap().push((profile_id, experience_id));
        Ok(())
    }
}
