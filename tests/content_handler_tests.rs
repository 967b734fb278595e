use async_trait::async_trait;
use chrono::Utc;
use mockall::mock;
use serde_json::json;
use uuid::Uuid;

use portfolio_api::entities::blog_post::{
    BlogPost, BlogPostInsert, NewBlogPostRequest, UpdateBlogPostRequest,
};
use portfolio_api::entities::contact::{ContactForm, ContactMessageInsert};
use portfolio_api::entities::project::{
    NewProjectRequest, Project, ProjectInsert, UpdateProjectRequest,
};
use portfolio_api::entities::skill::{NewSkillRequest, Skill, SkillInsert, UpdateSkillRequest};
use portfolio_api::errors::AppError;
use portfolio_api::repositories::blog_post::BlogPostRepository;
use portfolio_api::repositories::contact::ContactRepository;
use portfolio_api::repositories::project::ProjectRepository;
use portfolio_api::repositories::skill::SkillRepository;
use portfolio_api::sample_data::{sample_blog_posts, sample_projects, sample_skills};
use portfolio_api::use_cases::blog::BlogPostHandler;
use portfolio_api::use_cases::contact::ContactHandler;
use portfolio_api::use_cases::project::ProjectHandler;
use portfolio_api::use_cases::skill::SkillHandler;

mock! {
    ProjectRepo {}

    #[async_trait]
    impl ProjectRepository for ProjectRepo {
        async fn get_all_projects(&self) -> Result<Vec<Project>, AppError>;
        async fn get_project_by_id(&self, id: &Uuid) -> Result<Project, AppError>;
        async fn create_project(&self, project: &ProjectInsert) -> Result<Project, AppError>;
        async fn update_project(&self, id: &Uuid, patch: &UpdateProjectRequest) -> Result<(), AppError>;
        async fn delete_project(&self, id: &Uuid) -> Result<(), AppError>;
    }
}

mock! {
    SkillRepo {}

    #[async_trait]
    impl SkillRepository for SkillRepo {
        async fn get_all_skills(&self) -> Result<Vec<Skill>, AppError>;
        async fn get_skill_by_id(&self, id: &Uuid) -> Result<Skill, AppError>;
        async fn create_skill(&self, skill: &SkillInsert) -> Result<Skill, AppError>;
        async fn update_skill(&self, id: &Uuid, patch: &UpdateSkillRequest) -> Result<(), AppError>;
        async fn delete_skill(&self, id: &Uuid) -> Result<(), AppError>;
    }
}

mock! {
    BlogRepo {}

    #[async_trait]
    impl BlogPostRepository for BlogRepo {
        async fn get_all_blog_posts(&self) -> Result<Vec<BlogPost>, AppError>;
        async fn get_blog_post_by_slug(&self, slug: &str) -> Result<BlogPost, AppError>;
        async fn create_blog_post(&self, post: &BlogPostInsert) -> Result<BlogPost, AppError>;
        async fn update_blog_post(&self, slug: &str, patch: &UpdateBlogPostRequest) -> Result<(), AppError>;
        async fn delete_blog_post(&self, slug: &str) -> Result<(), AppError>;
    }
}

mock! {
    ContactRepo {}

    #[async_trait]
    impl ContactRepository for ContactRepo {
        async fn create_contact_message(&self, message: &ContactMessageInsert) -> Result<Uuid, AppError>;
    }
}

fn store_down() -> AppError {
    AppError::InternalError("connection refused".to_string())
}

// ───── List fallback policy ─────────────────────────────────────────

#[tokio::test]
async fn list_projects_serves_samples_when_store_fails() {
    let mut repo = MockProjectRepo::new();
    repo.expect_get_all_projects().returning(|| Err(store_down()));

    let handler = ProjectHandler::new(repo, true);
    let response = handler.list_projects().await.unwrap();

    assert_eq!(response.status, "success");
    assert_eq!(response.results, sample_projects().len());
}

#[tokio::test]
async fn list_skills_serves_samples_when_store_is_empty() {
    let mut repo = MockSkillRepo::new();
    repo.expect_get_all_skills().returning(|| Ok(Vec::new()));

    let handler = SkillHandler::new(repo, true);
    let response = handler.list_skills().await.unwrap();

    assert_eq!(response.status, "success");
    assert_eq!(response.results, sample_skills().len());
}

#[tokio::test]
async fn list_blog_posts_serves_samples_when_store_fails() {
    let mut repo = MockBlogRepo::new();
    repo.expect_get_all_blog_posts()
        .returning(|| Err(store_down()));

    let handler = BlogPostHandler::new(repo, true);
    let response = handler.list_blog_posts().await.unwrap();

    assert_eq!(response.results, sample_blog_posts().len());
}

#[tokio::test]
async fn list_projects_prefers_live_records_over_samples() {
    let mut repo = MockProjectRepo::new();
    repo.expect_get_all_projects().returning(|| {
        Ok(vec![Project {
            id: Uuid::new_v4(),
            title: "Live project".to_string(),
            description: "A record from the real store.".to_string(),
            tech_stack: vec!["Rust".to_string()],
            github_link: None,
            live_link: None,
            images: None,
            featured: false,
            created_at: Utc::now(),
        }])
    });

    let handler = ProjectHandler::new(repo, true);
    let response = handler.list_projects().await.unwrap();

    assert_eq!(response.results, 1);
    assert_eq!(response.data.projects[0].title, "Live project");
}

#[tokio::test]
async fn list_projects_propagates_errors_with_fallback_disabled() {
    let mut repo = MockProjectRepo::new();
    repo.expect_get_all_projects().returning(|| Err(store_down()));

    let handler = ProjectHandler::new(repo, false);
    let result = handler.list_projects().await;

    assert!(matches!(result, Err(AppError::InternalError(_))));
}

#[tokio::test]
async fn list_projects_returns_empty_set_with_fallback_disabled() {
    let mut repo = MockProjectRepo::new();
    repo.expect_get_all_projects().returning(|| Ok(Vec::new()));

    let handler = ProjectHandler::new(repo, false);
    let response = handler.list_projects().await.unwrap();

    assert_eq!(response.results, 0);
}

// ───── Read-one ─────────────────────────────────────────────────────

#[tokio::test]
async fn get_project_maps_store_errors_to_not_found() {
    let mut repo = MockProjectRepo::new();
    repo.expect_get_project_by_id()
        .returning(|_| Err(store_down()));

    let handler = ProjectHandler::new(repo, true);
    let result = handler.get_project(&Uuid::new_v4().to_string()).await;

    assert!(matches!(result, Err(AppError::NotFound(_))));
}

#[tokio::test]
async fn get_blog_post_by_unknown_slug_is_not_found() {
    let mut repo = MockBlogRepo::new();
    repo.expect_get_blog_post_by_slug()
        .returning(|_| Err(AppError::NotFound("no rows returned".to_string())));

    let handler = BlogPostHandler::new(repo, true);
    let result = handler.get_blog_post("unknown-slug").await;

    assert!(matches!(result, Err(AppError::NotFound(_))));
}

// ───── Create ───────────────────────────────────────────────────────

#[tokio::test]
async fn create_project_validation_failure_never_reaches_the_store() {
    let mut repo = MockProjectRepo::new();
    repo.expect_create_project().times(0);

    let handler = ProjectHandler::new(repo, true);
    let request: NewProjectRequest = serde_json::from_value(json!({
        "title": "x",
        "description": "too short",
        "tech_stack": "Rust"
    }))
    .unwrap();

    let result = handler.create_project(request).await;

    assert!(matches!(result, Err(AppError::ValidationError(_))));
}

#[tokio::test]
async fn create_skill_applies_visible_default_and_returns_generated_id() {
    let mut repo = MockSkillRepo::new();
    repo.expect_create_skill()
        .withf(|insert| insert.visible)
        .returning(|insert| {
            Ok(Skill {
                id: Uuid::new_v4(),
                name: insert.name.clone(),
                category: insert.category.clone(),
                level: insert.level,
                icon: insert.icon.clone(),
                visible: insert.visible,
            })
        });

    let handler = SkillHandler::new(repo, true);
    let request: NewSkillRequest = serde_json::from_value(json!({
        "name": "Go",
        "category": "Backend",
        "level": "Advanced"
    }))
    .unwrap();

    let response = handler.create_skill(request).await.unwrap();

    assert_eq!(response.status, "success");
    assert!(response.data.skill.visible);
    assert!(!response.data.skill.id.is_nil());
}

#[tokio::test]
async fn create_blog_post_generates_slug_from_title_when_absent() {
    let mut repo = MockBlogRepo::new();
    repo.expect_create_blog_post()
        .withf(|insert| insert.slug == "shipping-a-rust-api")
        .returning(|insert| {
            Ok(BlogPost {
                id: Uuid::new_v4(),
                title: insert.title.clone(),
                slug: insert.slug.clone(),
                content: insert.content.clone(),
                meta_description: insert.meta_description.clone(),
                published: insert.published,
                created_at: insert.created_at,
            })
        });

    let handler = BlogPostHandler::new(repo, true);
    let request: NewBlogPostRequest = serde_json::from_value(json!({
        "title": "Shipping a Rust API",
        "content": "Lessons learned shipping a small content API."
    }))
    .unwrap();

    let response = handler.create_blog_post(request).await.unwrap();

    assert_eq!(response.data.blog_post.slug, "shipping-a-rust-api");
    assert!(!response.data.blog_post.published);
}

#[tokio::test]
async fn create_blog_post_surfaces_slug_collisions_as_conflict() {
    let mut repo = MockBlogRepo::new();
    repo.expect_create_blog_post()
        .returning(|_| Err(AppError::Conflict("Slug already exists".to_string())));

    let handler = BlogPostHandler::new(repo, true);
    let request: NewBlogPostRequest = serde_json::from_value(json!({
        "title": "Duplicate",
        "slug": "already-taken",
        "content": "This slug is already in use by another post."
    }))
    .unwrap();

    let result = handler.create_blog_post(request).await;

    assert!(matches!(result, Err(AppError::Conflict(_))));
}

// ───── Update echoes exactly the submitted fields ───────────────────

#[tokio::test]
async fn update_project_echoes_exactly_the_submitted_body() {
    let mut repo = MockProjectRepo::new();
    repo.expect_update_project()
        .times(1)
        .returning(|_, _| Ok(()));

    let handler = ProjectHandler::new(repo, true);
    let patch: UpdateProjectRequest = serde_json::from_value(json!({"featured": true})).unwrap();

    let response = handler
        .update_project(&Uuid::new_v4().to_string(), patch)
        .await
        .unwrap();

    let body = serde_json::to_value(&response).unwrap();
    assert_eq!(
        body,
        json!({
            "status": "success",
            "data": { "project": { "featured": true } }
        })
    );
}

#[tokio::test]
async fn update_blog_post_rejects_invalid_slug_before_the_store() {
    let mut repo = MockBlogRepo::new();
    repo.expect_update_blog_post().times(0);

    let handler = BlogPostHandler::new(repo, true);
    let patch: UpdateBlogPostRequest =
        serde_json::from_value(json!({"slug": "Not A Slug"})).unwrap();

    let result = handler.update_blog_post("existing-post", patch).await;

    assert!(matches!(result, Err(AppError::ValidationError(_))));
}

// ───── Delete ───────────────────────────────────────────────────────

#[tokio::test]
async fn delete_skill_with_absent_id_is_a_silent_success() {
    let mut repo = MockSkillRepo::new();
    repo.expect_delete_skill().returning(|_| Ok(()));

    let handler = SkillHandler::new(repo, true);
    let result = handler.delete_skill(&Uuid::new_v4().to_string()).await;

    assert!(result.is_ok());
}

#[tokio::test]
async fn delete_project_rejects_malformed_ids_before_the_store() {
    let mut repo = MockProjectRepo::new();
    repo.expect_delete_project().times(0);

    let handler = ProjectHandler::new(repo, true);
    let result = handler.delete_project("123").await;

    assert!(matches!(result, Err(AppError::InvalidInput(_))));
}

// ───── Contact intake ───────────────────────────────────────────────

#[tokio::test]
async fn contact_submission_masks_store_failures_as_demo_mode() {
    let mut repo = MockContactRepo::new();
    repo.expect_create_contact_message()
        .returning(|_| Err(store_down()));

    let handler = ContactHandler::new(repo);
    let form = ContactForm {
        name: "Visitor".to_string(),
        email: "visitor@example.com".to_string(),
        subject: None,
        message: "Hello there!".to_string(),
    };

    let response = handler.create_contact_message(form).await.unwrap();

    assert_eq!(response.status, "success");
    assert!(response.message.contains("Demo mode"));
}

#[tokio::test]
async fn contact_submission_echoes_the_message_when_persisted() {
    let mut repo = MockContactRepo::new();
    repo.expect_create_contact_message()
        .returning(|_| Ok(Uuid::new_v4()));

    let handler = ContactHandler::new(repo);
    let form = ContactForm {
        name: "Visitor".to_string(),
        email: "visitor@example.com".to_string(),
        subject: Some("Hi".to_string()),
        message: "Hello there!".to_string(),
    };

    let response = handler.create_contact_message(form).await.unwrap();

    assert!(!response.message.contains("Demo mode"));
    let data = response.data.expect("delivered response carries an echo");
    assert_eq!(data.contact_message.email, "visitor@example.com");
}

#[tokio::test]
async fn contact_submission_requires_a_message() {
    let mut repo = MockContactRepo::new();
    repo.expect_create_contact_message().times(0);

    let handler = ContactHandler::new(repo);
    let form = ContactForm {
        name: "Visitor".to_string(),
        email: "visitor@example.com".to_string(),
        subject: None,
        message: String::new(),
    };

    let result = handler.create_contact_message(form).await;

    assert!(matches!(result, Err(AppError::ValidationError(_))));
}
