use validator::Validate;

use crate::{
    entities::skill::{
        NewSkillRequest, SkillInsert, SkillListResponse, SkillPatchResponse, SkillResponse,
        UpdateSkillRequest,
    },
    errors::AppError,
    repositories::skill::SkillRepository,
    sample_data::sample_skills,
    utils::valid_uuid::valid_uuid,
};

pub struct SkillHandler<R>
where
    R: SkillRepository,
{
    pub skill_repo: R,
    pub sample_fallback: bool,
}

impl<R> SkillHandler<R>
where
    R: SkillRepository,
{
    pub fn new(skill_repo: R, sample_fallback: bool) -> Self {
        SkillHandler {
            skill_repo,
            sample_fallback,
        }
    }

    /// Lists all skills ordered by proficiency, strongest first, with the
    /// same fallback policy as the other list operations.
    pub async fn list_skills(&self) -> Result<SkillListResponse, AppError> {
        match self.skill_repo.get_all_skills().await {
            Ok(skills) if !skills.is_empty() => Ok(SkillListResponse::new(skills)),
            Ok(skills) if !self.sample_fallback => Ok(SkillListResponse::new(skills)),
            Ok(_) => Ok(SkillListResponse::new(sample_skills())),
            Err(e) if !self.sample_fallback => Err(e),
            Err(e) => {
                tracing::warn!("Skill store unavailable, serving sample skills: {}", e);
                Ok(SkillListResponse::new(sample_skills()))
            }
        }
    }

    pub async fn get_skill(&self, id: &str) -> Result<SkillResponse, AppError> {
        let valid_id = valid_uuid(id)?;

        let skill = self
            .skill_repo
            .get_skill_by_id(&valid_id)
            .await
            .map_err(|e| match e {
                AppError::NotFound(detail) => AppError::NotFound(detail),
                other => AppError::NotFound(other.to_string()),
            })?;

        Ok(SkillResponse::new(skill))
    }

    /// Creates a new skill with the provided data
    pub async fn create_skill(&self, request: NewSkillRequest) -> Result<SkillResponse, AppError> {
        let insert = SkillInsert::try_from(request)?;

        let skill = self.skill_repo.create_skill(&insert).await?;

        Ok(SkillResponse::new(skill))
    }

    pub async fn update_skill(
        &self,
        id: &str,
        patch: UpdateSkillRequest,
    ) -> Result<SkillPatchResponse, AppError> {
        patch.validate()?;

        let valid_id = valid_uuid(id)?;

        self.skill_repo.update_skill(&valid_id, &patch).await?;

        Ok(SkillPatchResponse::new(patch))
    }

    pub async fn delete_skill(&self, id: &str) -> Result<(), AppError> {
        let valid_id = valid_uuid(id)?;

        self.skill_repo.delete_skill(&valid_id).await
    }
}
