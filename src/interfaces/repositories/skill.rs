use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use crate::{
    entities::skill::{Skill, SkillInsert, UpdateSkillRequest},
    errors::AppError,
    repositories::sqlx_repo::SqlxSkillRepo,
};

#[async_trait]
pub trait SkillRepository: Send + Sync {
    async fn get_all_skills(&self) -> Result<Vec<Skill>, AppError>;
    async fn get_skill_by_id(&self, id: &Uuid) -> Result<Skill, AppError>;
    async fn create_skill(&self, skill: &SkillInsert) -> Result<Skill, AppError>;
    async fn update_skill(&self, id: &Uuid, patch: &UpdateSkillRequest) -> Result<(), AppError>;
    async fn delete_skill(&self, id: &Uuid) -> Result<(), AppError>;
}

impl SqlxSkillRepo {
    pub fn new(pool: PgPool) -> Self {
        SqlxSkillRepo { pool }
    }
}

#[async_trait]
impl SkillRepository for SqlxSkillRepo {
    async fn get_all_skills(&self) -> Result<Vec<Skill>, AppError> {
        // The enum declaration order doubles as the proficiency ranking.
        let skills = sqlx::query_as::<_, Skill>("SELECT * FROM skills ORDER BY level DESC, name")
            .fetch_all(&self.pool)
            .await?;

        Ok(skills)
    }

    async fn get_skill_by_id(&self, id: &Uuid) -> Result<Skill, AppError> {
        let skill = sqlx::query_as::<_, Skill>("SELECT * FROM skills WHERE id = $1")
            .bind(id)
            .fetch_one(&self.pool)
            .await?;

        Ok(skill)
    }

    async fn create_skill(&self, skill: &SkillInsert) -> Result<Skill, AppError> {
        let created = sqlx::query_as::<_, Skill>(
            r#"
            INSERT INTO skills (name, category, level, icon, visible)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING *
            "#,
        )
        .bind(&skill.name)
        .bind(&skill.category)
        .bind(skill.level)
        .bind(&skill.icon)
        .bind(skill.visible)
        .fetch_one(&self.pool)
        .await?;

        Ok(created)
    }

    async fn update_skill(&self, id: &Uuid, patch: &UpdateSkillRequest) -> Result<(), AppError> {
        sqlx::query(
            r#"
            UPDATE skills SET
                name = COALESCE($1, name),
                category = COALESCE($2, category),
                level = COALESCE($3, level),
                icon = COALESCE($4, icon),
                visible = COALESCE($5, visible)
            WHERE id = $6
            "#,
        )
        .bind(&patch.name)
        .bind(&patch.category)
        .bind(patch.level)
        .bind(&patch.icon)
        .bind(patch.visible)
        .bind(id)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn delete_skill(&self, id: &Uuid) -> Result<(), AppError> {
        sqlx::query("DELETE FROM skills WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }
}
