use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::{Validate, ValidationError, ValidationErrors};

use crate::entities::project::new_validation_error;

const MIN_TITLE_LENGTH: u64 = 2;
const MIN_SLUG_LENGTH: u64 = 2;
const MIN_CONTENT_LENGTH: u64 = 10;

// ───── Database Models ───────────────────────────────────────────────

/// The slug is the external key; the id stays internal to the store.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct BlogPost {
    pub id: Uuid,
    pub title: String,
    pub slug: String,
    pub content: String,
    pub meta_description: Option<String>,
    pub published: bool,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug)]
pub struct BlogPostInsert {
    pub title: String,
    pub slug: String,
    pub content: String,
    pub meta_description: Option<String>,
    pub published: bool,
    pub created_at: DateTime<Utc>,
}

// ───── Input & Validation Requests ──────────────────────────────────

#[derive(Debug, Serialize, Deserialize, Validate)]
pub struct NewBlogPostRequest {
    #[validate(
        length(min = MIN_TITLE_LENGTH),
        custom(function = "validate_title")
    )]
    pub title: String,

    /// Generated from the title when absent.
    #[validate(
        length(min = MIN_SLUG_LENGTH),
        custom(function = "validate_slug")
    )]
    pub slug: Option<String>,

    #[validate(length(min = MIN_CONTENT_LENGTH))]
    pub content: String,

    pub meta_description: Option<String>,

    #[serde(default)]
    pub published: bool,
}

#[derive(Debug, Serialize, Deserialize, Validate, Default)]
#[serde(default)]
pub struct UpdateBlogPostRequest {
    #[validate(
        length(min = MIN_TITLE_LENGTH),
        custom(function = "validate_title")
    )]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    #[validate(
        length(min = MIN_SLUG_LENGTH),
        custom(function = "validate_slug")
    )]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,

    #[validate(length(min = MIN_CONTENT_LENGTH))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub meta_description: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub published: Option<bool>,
}

// ───── API Response Models ──────────────────────────────────────────

#[derive(Debug, Serialize)]
pub struct BlogPostListResponse {
    pub status: &'static str,
    pub results: usize,
    pub data: BlogPostListData,
}

#[derive(Debug, Serialize)]
pub struct BlogPostListData {
    pub blog_posts: Vec<BlogPost>,
}

impl BlogPostListResponse {
    pub fn new(blog_posts: Vec<BlogPost>) -> Self {
        BlogPostListResponse {
            status: "success",
            results: blog_posts.len(),
            data: BlogPostListData { blog_posts },
        }
    }
}

#[derive(Debug, Serialize)]
pub struct BlogPostResponse {
    pub status: &'static str,
    pub data: BlogPostData,
}

#[derive(Debug, Serialize)]
pub struct BlogPostData {
    pub blog_post: BlogPost,
}

impl BlogPostResponse {
    pub fn new(blog_post: BlogPost) -> Self {
        BlogPostResponse {
            status: "success",
            data: BlogPostData { blog_post },
        }
    }
}

#[derive(Debug, Serialize)]
pub struct BlogPostPatchResponse {
    pub status: &'static str,
    pub data: BlogPostPatchData,
}

#[derive(Debug, Serialize)]
pub struct BlogPostPatchData {
    pub blog_post: UpdateBlogPostRequest,
}

impl BlogPostPatchResponse {
    pub fn new(patch: UpdateBlogPostRequest) -> Self {
        BlogPostPatchResponse {
            status: "success",
            data: BlogPostPatchData { blog_post: patch },
        }
    }
}

// ───── Validation Helpers ───────────────────────────────────────────

pub fn validate_slug(slug: &str) -> Result<(), ValidationError> {
    if slug.is_empty() {
        return Err(new_validation_error("slug_empty", "Slug cannot be empty"));
    }
    if !slug.chars().all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-') {
        return Err(new_validation_error("slug_invalid_chars", "Slug must contain only lowercase letters, digits, or hyphens"));
    }
    if slug.starts_with('-') || slug.ends_with('-') {
        return Err(new_validation_error("slug_edge_hyphen", "Slug must not start or end with a hyphen"));
    }
    if slug.contains("--") {
        return Err(new_validation_error("slug_double_hyphen", "Slug must not contain consecutive hyphens"));
    }
    Ok(())
}

pub fn validate_title(title: &str) -> Result<(), ValidationError> {
    if title.trim().len() != title.len() {
        return Err(new_validation_error("title_whitespace", "Title must not have leading or trailing whitespace"));
    }
    Ok(())
}

// ───── Conversions ──────────────────────────────────────────────────

impl TryFrom<NewBlogPostRequest> for BlogPostInsert {
    type Error = ValidationErrors;

    fn try_from(value: NewBlogPostRequest) -> Result<Self, Self::Error> {
        value.validate()?;

        // Generate slug if not provided
        let slug = match value.slug {
            Some(s) => s,
            None => {
                let generated = slug::slugify(&value.title);
                if generated.len() < MIN_SLUG_LENGTH as usize {
                    return Err({
                        let mut errors = ValidationErrors::new();
                        errors.add("slug", new_validation_error("slug_too_short", "Generated slug is too short; please provide a custom slug"));
                        errors
                    });
                }
                generated
            }
        };

        Ok(BlogPostInsert {
            title: value.title,
            slug,
            content: value.content,
            meta_description: value.meta_description,
            published: value.published,
            created_at: Utc::now(),
        })
    }
}
