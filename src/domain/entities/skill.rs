use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::{Validate, ValidationErrors};

const MIN_NAME_LENGTH: u64 = 2;
const MIN_CATEGORY_LENGTH: u64 = 2;

/// Proficiency ranking; listing orders by this, strongest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "skill_level")]
pub enum SkillLevel {
    Beginner,
    Intermediate,
    Advanced,
}

#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Skill {
    pub id: Uuid,
    pub name: String,
    pub category: String,
    pub level: SkillLevel,
    pub icon: Option<String>,
    pub visible: bool,
}

#[derive(Debug)]
pub struct SkillInsert {
    pub name: String,
    pub category: String,
    pub level: SkillLevel,
    pub icon: Option<String>,
    pub visible: bool,
}

// ───── Input & Validation Requests ──────────────────────────────────

#[derive(Debug, Serialize, Deserialize, Validate)]
pub struct NewSkillRequest {
    #[validate(length(min = MIN_NAME_LENGTH))]
    pub name: String,

    #[validate(length(min = MIN_CATEGORY_LENGTH))]
    pub category: String,

    pub level: SkillLevel,

    pub icon: Option<String>,

    #[serde(default = "default_visible")]
    pub visible: bool,
}

fn default_visible() -> bool {
    true
}

#[derive(Debug, Serialize, Deserialize, Validate, Default)]
#[serde(default)]
pub struct UpdateSkillRequest {
    #[validate(length(min = MIN_NAME_LENGTH))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[validate(length(min = MIN_CATEGORY_LENGTH))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub level: Option<SkillLevel>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub visible: Option<bool>,
}

// ───── API Response Models ──────────────────────────────────────────

#[derive(Debug, Serialize)]
pub struct SkillListResponse {
    pub status: &'static str,
    pub results: usize,
    pub data: SkillListData,
}

#[derive(Debug, Serialize)]
pub struct SkillListData {
    pub skills: Vec<Skill>,
}

impl SkillListResponse {
    pub fn new(skills: Vec<Skill>) -> Self {
        SkillListResponse {
            status: "success",
            results: skills.len(),
            data: SkillListData { skills },
        }
    }
}

#[derive(Debug, Serialize)]
pub struct SkillResponse {
    pub status: &'static str,
    pub data: SkillData,
}

#[derive(Debug, Serialize)]
pub struct SkillData {
    pub skill: Skill,
}

impl SkillResponse {
    pub fn new(skill: Skill) -> Self {
        SkillResponse {
            status: "success",
            data: SkillData { skill },
        }
    }
}

#[derive(Debug, Serialize)]
pub struct SkillPatchResponse {
    pub status: &'static str,
    pub data: SkillPatchData,
}

#[derive(Debug, Serialize)]
pub struct SkillPatchData {
    pub skill: UpdateSkillRequest,
}

impl SkillPatchResponse {
    pub fn new(patch: UpdateSkillRequest) -> Self {
        SkillPatchResponse {
            status: "success",
            data: SkillPatchData { skill: patch },
        }
    }
}

// ───── Conversions ──────────────────────────────────────────────────

impl TryFrom<NewSkillRequest> for SkillInsert {
    type Error = ValidationErrors;

    fn try_from(value: NewSkillRequest) -> Result<Self, Self::Error> {
        value.validate()?;

        Ok(SkillInsert {
            name: value.name,
            category: value.category,
            level: value.level,
            icon: value.icon,
            visible: value.visible,
        })
    }
}
