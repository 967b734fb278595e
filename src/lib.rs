mod domain;
mod infrastructure;
mod interfaces;
pub mod constants;
pub mod errors;
pub mod graceful_shutdown;
pub mod settings;

pub use domain::{entities, password, sample_data, use_cases};
pub use infrastructure::{auth, db, utils};
pub use interfaces::{handlers, middlewares, repositories, routes};

use auth::jwt::JwtService;
use repositories::sqlx_repo::{
    SqlxBlogPostRepo, SqlxContactRepo, SqlxCredentialRepo, SqlxProjectRepo, SqlxSkillRepo,
    SqlxUserRepo,
};
use use_cases::auth::AuthHandler;
use use_cases::blog::BlogPostHandler;
use use_cases::contact::ContactHandler;
use use_cases::project::ProjectHandler;
use use_cases::skill::SkillHandler;

pub type AppAuthHandler = AuthHandler<SqlxCredentialRepo, SqlxUserRepo, JwtService>;
pub type AppProjectHandler = ProjectHandler<SqlxProjectRepo>;
pub type AppSkillHandler = SkillHandler<SqlxSkillRepo>;
pub type AppBlogHandler = BlogPostHandler<SqlxBlogPostRepo>;
pub type AppContactHandler = ContactHandler<SqlxContactRepo>;

/// Request-scoped wiring: one use-case handler per resource, all sharing
/// the same pool. Handlers receive this through `web::Data`; there is no
/// other cross-request state.
pub struct AppState {
    pub auth_handler: AppAuthHandler,
    pub project_handler: AppProjectHandler,
    pub skill_handler: AppSkillHandler,
    pub blog_handler: AppBlogHandler,
    pub contact_handler: AppContactHandler,
}

impl AppState {
    pub fn new(config: &settings::AppConfig, pool: sqlx::PgPool) -> Self {
        let jwt_service = JwtService::new(config);
        let credential_store = SqlxCredentialRepo::new(pool.clone());
        let user_repo = SqlxUserRepo::new(pool.clone());

        AppState {
            auth_handler: AuthHandler::new(credential_store, user_repo, jwt_service),
            project_handler: ProjectHandler::new(
                SqlxProjectRepo::new(pool.clone()),
                config.sample_fallback,
            ),
            skill_handler: SkillHandler::new(
                SqlxSkillRepo::new(pool.clone()),
                config.sample_fallback,
            ),
            blog_handler: BlogPostHandler::new(
                SqlxBlogPostRepo::new(pool.clone()),
                config.sample_fallback,
            ),
            contact_handler: ContactHandler::new(SqlxContactRepo::new(pool)),
        }
    }
}
