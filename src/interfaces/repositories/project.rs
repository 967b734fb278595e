use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use crate::{
    entities::project::{split_tech_stack, Project, ProjectInsert, UpdateProjectRequest},
    errors::AppError,
    repositories::sqlx_repo::SqlxProjectRepo,
};

#[async_trait]
pub trait ProjectRepository: Send + Sync {
    async fn get_all_projects(&self) -> Result<Vec<Project>, AppError>;
    async fn get_project_by_id(&self, id: &Uuid) -> Result<Project, AppError>;
    async fn create_project(&self, project: &ProjectInsert) -> Result<Project, AppError>;
    async fn update_project(&self, id: &Uuid, patch: &UpdateProjectRequest)
        -> Result<(), AppError>;
    async fn delete_project(&self, id: &Uuid) -> Result<(), AppError>;
}

impl SqlxProjectRepo {
    pub fn new(pool: PgPool) -> Self {
        SqlxProjectRepo { pool }
    }
}

#[async_trait]
impl ProjectRepository for SqlxProjectRepo {
    async fn get_all_projects(&self) -> Result<Vec<Project>, AppError> {
        let projects =
            sqlx::query_as::<_, Project>("SELECT * FROM projects ORDER BY created_at DESC")
                .fetch_all(&self.pool)
                .await?;

        Ok(projects)
    }

    async fn get_project_by_id(&self, id: &Uuid) -> Result<Project, AppError> {
        let project = sqlx::query_as::<_, Project>("SELECT * FROM projects WHERE id = $1")
            .bind(id)
            .fetch_one(&self.pool)
            .await?;

        Ok(project)
    }

    async fn create_project(&self, project: &ProjectInsert) -> Result<Project, AppError> {
        let created = sqlx::query_as::<_, Project>(
            r#"
            INSERT INTO projects (
                title, description, tech_stack, github_link, live_link, images, featured, created_at
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            RETURNING *
            "#,
        )
        .bind(&project.title)
        .bind(&project.description)
        .bind(&project.tech_stack)
        .bind(&project.github_link)
        .bind(&project.live_link)
        .bind(&project.images)
        .bind(project.featured)
        .bind(project.created_at)
        .fetch_one(&self.pool)
        .await?;

        Ok(created)
    }

    async fn update_project(
        &self,
        id: &Uuid,
        patch: &UpdateProjectRequest,
    ) -> Result<(), AppError> {
        let tech_stack = patch.tech_stack.as_deref().map(split_tech_stack);

        // COALESCE keeps the stored value for every field the patch omits;
        // created_at is not part of the patch and never changes.
        sqlx::query(
            r#"
            UPDATE projects SET
                title = COALESCE($1, title),
                description = COALESCE($2, description),
                tech_stack = COALESCE($3, tech_stack),
                github_link = COALESCE($4, github_link),
                live_link = COALESCE($5, live_link),
                images = COALESCE($6, images),
                featured = COALESCE($7, featured)
            WHERE id = $8
            "#,
        )
        .bind(&patch.title)
        .bind(&patch.description)
        .bind(tech_stack)
        .bind(&patch.github_link)
        .bind(&patch.live_link)
        .bind(&patch.images)
        .bind(patch.featured)
        .bind(id)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn delete_project(&self, id: &Uuid) -> Result<(), AppError> {
        // No existence check: deleting an absent id is a silent success.
        sqlx::query("DELETE FROM projects WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }
}
