use validator::Validate;

use crate::{
    entities::project::{
        NewProjectRequest, ProjectInsert, ProjectListResponse, ProjectPatchResponse,
        ProjectResponse, UpdateProjectRequest,
    },
    errors::AppError,
    repositories::project::ProjectRepository,
    sample_data::sample_projects,
    utils::valid_uuid::valid_uuid,
};

pub struct ProjectHandler<R>
where
    R: ProjectRepository,
{
    pub project_repo: R,
    pub sample_fallback: bool,
}

impl<R> ProjectHandler<R>
where
    R: ProjectRepository,
{
    pub fn new(project_repo: R, sample_fallback: bool) -> Self {
        ProjectHandler {
            project_repo,
            sample_fallback,
        }
    }

    /// Lists all projects, newest first. With the fallback policy enabled,
    /// a store error or an empty result is answered with the sample
    /// collection instead of a failure.
    pub async fn list_projects(&self) -> Result<ProjectListResponse, AppError> {
        match self.project_repo.get_all_projects().await {
            Ok(projects) if !projects.is_empty() => Ok(ProjectListResponse::new(projects)),
            Ok(projects) if !self.sample_fallback => Ok(ProjectListResponse::new(projects)),
            Ok(_) => Ok(ProjectListResponse::new(sample_projects())),
            Err(e) if !self.sample_fallback => Err(e),
            Err(e) => {
                tracing::warn!("Project store unavailable, serving sample projects: {}", e);
                Ok(ProjectListResponse::new(sample_projects()))
            }
        }
    }

    /// Retrieves a single project by its id. Any store failure surfaces as
    /// not-found carrying the store's error detail; the list fallback does
    /// not apply here.
    pub async fn get_project(&self, id: &str) -> Result<ProjectResponse, AppError> {
        let valid_id = valid_uuid(id)?;

        let project = self
            .project_repo
            .get_project_by_id(&valid_id)
            .await
            .map_err(|e| match e {
                AppError::NotFound(detail) => AppError::NotFound(detail),
                other => AppError::NotFound(other.to_string()),
            })?;

        Ok(ProjectResponse::new(project))
    }

    /// Creates a new project with the provided data
    pub async fn create_project(
        &self,
        request: NewProjectRequest,
    ) -> Result<ProjectResponse, AppError> {
        let insert = ProjectInsert::try_from(request)?;

        let project = self.project_repo.create_project(&insert).await?;

        Ok(ProjectResponse::new(project))
    }

    /// Applies a partial update and echoes the submitted fields back;
    /// omitted fields are left untouched and are absent from the echo.
    pub async fn update_project(
        &self,
        id: &str,
        patch: UpdateProjectRequest,
    ) -> Result<ProjectPatchResponse, AppError> {
        patch.validate()?;

        let valid_id = valid_uuid(id)?;

        self.project_repo.update_project(&valid_id, &patch).await?;

        Ok(ProjectPatchResponse::new(patch))
    }

    /// Deletes a project by its id. Deleting an absent id succeeds.
    pub async fn delete_project(&self, id: &str) -> Result<(), AppError> {
        let valid_id = valid_uuid(id)?;

        self.project_repo.delete_project(&valid_id).await
    }
}
