use std::borrow::Cow;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::{Validate, ValidationError, ValidationErrors};

const MIN_TITLE_LENGTH: u64 = 2;
const MIN_DESCRIPTION_LENGTH: u64 = 10;
const MIN_TECH_STACK_LENGTH: u64 = 2;

// ───── Database Models ───────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Project {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub tech_stack: Vec<String>,
    pub github_link: Option<String>,
    pub live_link: Option<String>,
    pub images: Option<Vec<String>>,
    pub featured: bool,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug)]
pub struct ProjectInsert {
    pub title: String,
    pub description: String,
    pub tech_stack: Vec<String>,
    pub github_link: Option<String>,
    pub live_link: Option<String>,
    pub images: Option<Vec<String>>,
    pub featured: bool,
    pub created_at: DateTime<Utc>,
}

// ───── Input & Validation Requests ──────────────────────────────────

#[derive(Debug, Serialize, Deserialize, Validate)]
pub struct NewProjectRequest {
    #[validate(length(min = MIN_TITLE_LENGTH))]
    pub title: String,

    #[validate(length(min = MIN_DESCRIPTION_LENGTH))]
    pub description: String,

    /// Comma-separated form value; split into tokens before insert.
    #[validate(length(min = MIN_TECH_STACK_LENGTH))]
    pub tech_stack: String,

    #[validate(custom(function = "validate_optional_link"))]
    pub github_link: Option<String>,

    #[validate(custom(function = "validate_optional_link"))]
    pub live_link: Option<String>,

    #[validate(custom(function = "validate_image_urls"))]
    pub images: Option<Vec<String>>,

    #[serde(default)]
    pub featured: bool,
}

/// Partial update: absent fields stay untouched, and the response echoes
/// exactly the fields that were submitted.
#[derive(Debug, Serialize, Deserialize, Validate, Default)]
#[serde(default)]
pub struct UpdateProjectRequest {
    #[validate(length(min = MIN_TITLE_LENGTH))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    #[validate(length(min = MIN_DESCRIPTION_LENGTH))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[validate(length(min = MIN_TECH_STACK_LENGTH))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tech_stack: Option<String>,

    #[validate(custom(function = "validate_optional_link"))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub github_link: Option<String>,

    #[validate(custom(function = "validate_optional_link"))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub live_link: Option<String>,

    #[validate(custom(function = "validate_image_urls"))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub images: Option<Vec<String>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub featured: Option<bool>,
}

// ───── API Response Models ──────────────────────────────────────────

#[derive(Debug, Serialize)]
pub struct ProjectListResponse {
    pub status: &'static str,
    pub results: usize,
    pub data: ProjectListData,
}

#[derive(Debug, Serialize)]
pub struct ProjectListData {
    pub projects: Vec<Project>,
}

impl ProjectListResponse {
    pub fn new(projects: Vec<Project>) -> Self {
        ProjectListResponse {
            status: "success",
            results: projects.len(),
            data: ProjectListData { projects },
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ProjectResponse {
    pub status: &'static str,
    pub data: ProjectData,
}

#[derive(Debug, Serialize)]
pub struct ProjectData {
    pub project: Project,
}

impl ProjectResponse {
    pub fn new(project: Project) -> Self {
        ProjectResponse {
            status: "success",
            data: ProjectData { project },
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ProjectPatchResponse {
    pub status: &'static str,
    pub data: ProjectPatchData,
}

#[derive(Debug, Serialize)]
pub struct ProjectPatchData {
    pub project: UpdateProjectRequest,
}

impl ProjectPatchResponse {
    pub fn new(patch: UpdateProjectRequest) -> Self {
        ProjectPatchResponse {
            status: "success",
            data: ProjectPatchData { project: patch },
        }
    }
}

// ───── Validation Helpers ───────────────────────────────────────────

/// Splits a comma-separated form value into trimmed, non-empty tokens.
pub fn split_tech_stack(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .map(String::from)
        .collect()
}

/// Links are either a well-formed http(s) URL or an empty string.
pub fn validate_optional_link(link: &str) -> Result<(), ValidationError> {
    if link.is_empty() {
        return Ok(());
    }
    validate_url(link)
}

pub fn validate_url(url: &str) -> Result<(), ValidationError> {
    match url::Url::parse(url) {
        Ok(parsed) => {
            if parsed.scheme() == "http" || parsed.scheme() == "https" {
                Ok(())
            } else {
                Err(new_validation_error("invalid_url_scheme", "URL must start with http:// or https://"))
            }
        }
        Err(_) => Err(new_validation_error("invalid_url", "Invalid URL format")),
    }
}

pub fn validate_image_urls(urls: &[String]) -> Result<(), ValidationError> {
    for url in urls {
        validate_url(url)?;
    }
    Ok(())
}

pub(crate) fn new_validation_error(code: &'static str, msg: &'static str) -> ValidationError {
    let mut err = ValidationError::new(code);
    err.message = Some(Cow::Borrowed(msg));
    err
}

// ───── Conversions ──────────────────────────────────────────────────

impl TryFrom<NewProjectRequest> for ProjectInsert {
    type Error = ValidationErrors;

    fn try_from(value: NewProjectRequest) -> Result<Self, Self::Error> {
        value.validate()?;

        Ok(ProjectInsert {
            tech_stack: split_tech_stack(&value.tech_stack),
            title: value.title,
            description: value.description,
            github_link: value.github_link,
            live_link: value.live_link,
            images: value.images,
            featured: value.featured,
            created_at: Utc::now(),
        })
    }
}
