use actix_web::{delete, get, post, web, HttpResponse, Responder};
use serde::Deserialize;
use tracing::error;
use uuid::Uuid;

use crate::modules::auth::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::modules::portfolio::application::ports::outgoing::project_repository::{
    ProjectListFilter, ProjectOrdering,
};
use crate::modules::portfolio::application::use_cases::manage_projects::{
    ProjectError, ProjectRequest,
};
use crate::shared::api::{ApiResponse, PageQuery};
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct ProjectListQuery {
    #[serde(flatten)]
    pub page: PageQuery,
    pub search: Option<String>,
    pub ordering: Option<String>,
}

impl ProjectListQuery {
    pub fn into_filter(self) -> ProjectListFilter {
        ProjectListFilter {
            search: self.search,
            ordering: ProjectOrdering::parse(self.ordering.as_deref()),
            offset: self.page.offset(),
            limit: self.page.page_size(),
        }
    }
}

fn project_error_response(e: ProjectError) -> HttpResponse {
    match e {
        ProjectError::NotOwner => ApiResponse::unauthorized(&e.to_string()),
        ProjectError::ProfileNotFound | ProjectError::ProjectNotFound => {
            ApiResponse::not_found(&e.to_string())
        }
        ProjectError::Validation(violations) => ApiResponse::field_errors(violations),
        ProjectError::StoreError(_) => {
            error!("Project operation failed: {}", e);
            ApiResponse::internal_error()
        }
    }
}

/// List a profile's portfolio projects
#[utoipa::path(
    get,
    path = "/freelancer/profiles/{uuid}/projects",
    tag = "portfolio",
    params(
        ("uuid" = Uuid, Path, description = "Owning user's uuid"),
        ("search" = Option<String>, Query, description = "Matches name, skills, tools and description"),
        ("ordering" = Option<String>, Query, description = "`name` (default) or `-name`"),
    ),
    responses(
        (status = 200, description = "Projects page"),
        (status = 404, description = "No such profile", body = crate::shared::api::response::SimpleError),
    )
)]
#[get("/freelancer/profiles/{uuid}/projects")]
pub async fn list_projects_handler(
    data: web::Data<AppState>,
    path: web::Path<Uuid>,
    query: web::Query<ProjectListQuery>,
) -> impl Responder {
    match data
        .portfolio_use_cases
        .projects
        .list(path.into_inner(), query.into_inner().into_filter())
        .await
    {
        Ok(projects) => HttpResponse::Ok().json(projects),
        Err(e) => project_error_response(e),
    }
}

/// Add a project to the caller's profile
#[utoipa::path(
    post,
    path = "/freelancer/profiles/{uuid}/project",
    tag = "portfolio",
    request_body = ProjectRequest,
    params(("uuid" = Uuid, Path, description = "Owning user's uuid")),
    responses(
        (status = 201, description = "Created project"),
        (status = 400, description = "Missing fields", body = crate::shared::api::response::FieldErrors),
        (status = 401, description = "Caller is not the owner", body = crate::shared::api::response::SimpleError),
    ),
    security(("bearer_auth" = []))
)]
#[post("/freelancer/profiles/{uuid}/project")]
pub async fn create_project_handler(
    data: web::Data<AppState>,
    user: AuthenticatedUser,
    path: web::Path<Uuid>,
    body: web::Json<ProjectRequest>,
) -> impl Responder {
    match data
        .portfolio_use_cases
        .projects
        .create(user.user_uuid, path.into_inner(), body.into_inner())
        .await
    {
        Ok(project) => HttpResponse::Created().json(project),
        Err(e) => project_error_response(e),
    }
}

/// Remove one of the caller's projects
#[utoipa::path(
    delete,
    path = "/freelancer/profiles/{uuid}/project/{id}",
    tag = "portfolio",
    params(
        ("uuid" = Uuid, Path, description = "Owning user's uuid"),
        ("id" = i64, Path, description = "Project id"),
    ),
    responses(
        (status = 204, description = "Project removed"),
        (status = 404, description = "No such project on this profile", body = crate::shared::api::response::SimpleError),
    ),
    security(("bearer_auth" = []))
)]
#[delete("/freelancer/profiles/{uuid}/project/{id}")]
pub async fn delete_project_handler(
    data: web::Data<AppState>,
    user: AuthenticatedUser,
    path: web::Path<(Uuid, i64)>,
) -> impl Responder {
    let (profile_uuid, project_id) = path.into_inner();
    match data
        .portfolio_use_cases
        .projects
        .delete(user.user_uuid, profile_uuid, project_id)
        .await
    {
        Ok(()) => ApiResponse::no_content(),
        Err(e) => project_error_response(e),
    }
}
