use async_trait::async_trait;
use sqlx::PgPool;

use crate::{
    entities::blog_post::{BlogPost, BlogPostInsert, UpdateBlogPostRequest},
    errors::AppError,
    repositories::sqlx_repo::SqlxBlogPostRepo,
};

/// Blog posts are keyed by slug from the outside; the id column stays
/// internal to the store.
#[async_trait]
pub trait BlogPostRepository: Send + Sync {
    async fn get_all_blog_posts(&self) -> Result<Vec<BlogPost>, AppError>;
    async fn get_blog_post_by_slug(&self, slug: &str) -> Result<BlogPost, AppError>;
    async fn create_blog_post(&self, post: &BlogPostInsert) -> Result<BlogPost, AppError>;
    async fn update_blog_post(
        &self,
        slug: &str,
        patch: &UpdateBlogPostRequest,
    ) -> Result<(), AppError>;
    async fn delete_blog_post(&self, slug: &str) -> Result<(), AppError>;
}

impl SqlxBlogPostRepo {
    pub fn new(pool: PgPool) -> Self {
        SqlxBlogPostRepo { pool }
    }
}

#[async_trait]
impl BlogPostRepository for SqlxBlogPostRepo {
    async fn get_all_blog_posts(&self) -> Result<Vec<BlogPost>, AppError> {
        let posts =
            sqlx::query_as::<_, BlogPost>("SELECT * FROM blog_posts ORDER BY created_at DESC")
                .fetch_all(&self.pool)
                .await?;

        Ok(posts)
    }

    async fn get_blog_post_by_slug(&self, slug: &str) -> Result<BlogPost, AppError> {
        let post = sqlx::query_as::<_, BlogPost>("SELECT * FROM blog_posts WHERE slug = $1")
            .bind(slug)
            .fetch_one(&self.pool)
            .await?;

        Ok(post)
    }

    async fn create_blog_post(&self, post: &BlogPostInsert) -> Result<BlogPost, AppError> {
        let created = sqlx::query_as::<_, BlogPost>(
            r#"
            INSERT INTO blog_posts (title, slug, content, meta_description, published, created_at)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING *
            "#,
        )
        .bind(&post.title)
        .bind(&post.slug)
        .bind(&post.content)
        .bind(&post.meta_description)
        .bind(post.published)
        .bind(post.created_at)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            if let sqlx::Error::Database(db_err) = &e {
                if db_err.constraint() == Some("blog_posts_slug_key") {
                    return AppError::Conflict("Slug already exists".into());
                }
            }
            AppError::from(e)
        })?;

        Ok(created)
    }

    async fn update_blog_post(
        &self,
        slug: &str,
        patch: &UpdateBlogPostRequest,
    ) -> Result<(), AppError> {
        sqlx::query(
            r#"
            UPDATE blog_posts SET
                title = COALESCE($1, title),
                slug = COALESCE($2, slug),
                content = COALESCE($3, content),
                meta_description = COALESCE($4, meta_description),
                published = COALESCE($5, published)
            WHERE slug = $6
            "#,
        )
        .bind(&patch.title)
        .bind(&patch.slug)
        .bind(&patch.content)
        .bind(&patch.meta_description)
        .bind(patch.published)
        .bind(slug)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            if let sqlx::Error::Database(db_err) = &e {
                if db_err.constraint() == Some("blog_posts_slug_key") {
                    return AppError::Conflict("Slug already exists".into());
                }
            }
            AppError::from(e)
        })?;

        Ok(())
    }

    async fn delete_blog_post(&self, slug: &str) -> Result<(), AppError> {
        sqlx::query("DELETE FROM blog_posts WHERE slug = $1")
            .bind(slug)
            .execute(&self.pool)
            .await?;

        Ok(())
    }
}
