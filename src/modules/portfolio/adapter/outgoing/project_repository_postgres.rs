use std::sync::Arc;

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, ColumnTrait, Condition, DatabaseConnection, EntityTrait,
    ModelTrait, Order, QueryFilter, QueryOrder, QuerySelect,
};

use crate::modules::portfolio::application::ports::outgoing::project_repository::{
    NewProject, ProjectListFilter, ProjectOrdering, ProjectRepository, ProjectRepositoryError,
};
use crate::modules::profile::application::domain::entities::PortfolioProject;

use super::sea_orm_entity::projects;

#[derive(Clone, Debug)]
pub struct ProjectRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl ProjectRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ProjectRepository for ProjectRepositoryPostgres {
    async fn list(
        &self,
        profile_id: i64,
        filter: ProjectListFilter,
    ) -> Result<Vec<PortfolioProject>, ProjectRepositoryError> {
        let mut query =
            projects::Entity::find().filter(projects::Column::ProfileId.eq(profile_id));

        if let Some(term) = filter.search.as_deref().filter(|t| !t.is_empty()) {
            query = query.filter(
                Condition::any()
                    .add(projects::Column::Name.contains(term))
                    .add(projects::Column::Skills.contains(term))
                    .add(projects::Column::Tools.contains(term))
                    .add(projects::Column::Description.contains(term)),
            );
        }

        let order = match filter.ordering {
            ProjectOrdering::NameAsc => Order::Asc,
            ProjectOrdering::NameDesc => Order::Desc,
        };
        let rows = query
            .order_by(projects::Column::Name, order)
            .offset(filter.offset)
            .limit(filter.limit)
            .all(&*self.db)
            .await
            .map_err(|e| ProjectRepositoryError::DatabaseError(e.to_string()))?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn create(
        &self,
        profile_id: i64,
        project: NewProject,
    ) -> Result<PortfolioProject, ProjectRepositoryError> {
        let row = projects::ActiveModel {
            profile_id: Set(profile_id),
            name: Set(project.name),
            url: Set(project.url),
            skills: Set(project.skills),
            tools: Set(project.tools),
            description: Set(project.description),
            ..Default::default()
        }
        .insert(&*self.db)
        .await
        .map_err(|e| ProjectRepositoryError::DatabaseError(e.to_string()))?;
        Ok(row.into())
    }

    async fn delete(
        &self,
        profile_id: i64,
        project_id: i64,
    ) -> Result<(), ProjectRepositoryError> {
        let existing = projects::Entity::find_by_id(project_id)
            .filter(projects::Column::ProfileId.eq(profile_id))
            .one(&*self.db)
            .await
            .map_err(|e| ProjectRepositoryError::DatabaseError(e.to_string()))?
            .ok_or(ProjectRepositoryError::NotFound)?;
        existing
            .delete(&*self.db)
            .await
            .map_err(|e| ProjectRepositoryError::DatabaseError(e.to_string()))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sea_orm::{DatabaseBackend, MockDatabase};

    fn row(id: i64, name: &str) -> projects::Model {
        projects::Model {
            id,
            profile_id: 7,
            name: name.to_string(),
            url: "https://example.com".to_string(),
            skills: Some("rust".to_string()),
            tools: None,
            description: None,
            cover_image_url: None,
            cover_image_public_id: None,
        }
    }

    #[tokio::test]
    async fn lists_a_profiles_projects() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![row(1, "Engine"), row(2, "Loom")]])
            .into_connection();

        let repo = ProjectRepositoryPostgres::new(Arc::new(db));
        let filter = ProjectListFilter {
            limit: 50,
            ..Default::default()
        };
        let projects = repo.list(7, filter).await.unwrap();

        assert_eq!(projects.len(), 2);
        assert_eq!(projects[0].name, "Engine");
    }

    #[tokio::test]
    async fn deleting_a_foreign_project_reads_as_missing() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([Vec::<projects::Model>::new()])
            .into_connection();

        let repo = ProjectRepositoryPostgres::new(Arc::new(db));
        let err = repo.delete(7, 99).await.unwrap_err();

        assert!(matches!(err, ProjectRepositoryError::NotFound));
    }
}
