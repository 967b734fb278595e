use validator::Validate;

use crate::{
    entities::blog_post::{
        BlogPostInsert, BlogPostListResponse, BlogPostPatchResponse, BlogPostResponse,
        NewBlogPostRequest, UpdateBlogPostRequest,
    },
    errors::AppError,
    repositories::blog_post::BlogPostRepository,
    sample_data::sample_blog_posts,
};

/// Blog posts are addressed by slug from the outside; the row id never
/// leaves the store layer.
pub struct BlogPostHandler<R>
where
    R: BlogPostRepository,
{
    pub blog_post_repo: R,
    pub sample_fallback: bool,
}

impl<R> BlogPostHandler<R>
where
    R: BlogPostRepository,
{
    pub fn new(blog_post_repo: R, sample_fallback: bool) -> Self {
        BlogPostHandler {
            blog_post_repo,
            sample_fallback,
        }
    }

    pub async fn list_blog_posts(&self) -> Result<BlogPostListResponse, AppError> {
        match self.blog_post_repo.get_all_blog_posts().await {
            Ok(posts) if !posts.is_empty() => Ok(BlogPostListResponse::new(posts)),
            Ok(posts) if !self.sample_fallback => Ok(BlogPostListResponse::new(posts)),
            Ok(_) => Ok(BlogPostListResponse::new(sample_blog_posts())),
            Err(e) if !self.sample_fallback => Err(e),
            Err(e) => {
                tracing::warn!("Blog store unavailable, serving sample posts: {}", e);
                Ok(BlogPostListResponse::new(sample_blog_posts()))
            }
        }
    }

    pub async fn get_blog_post(&self, slug: &str) -> Result<BlogPostResponse, AppError> {
        let post = self
            .blog_post_repo
            .get_blog_post_by_slug(slug)
            .await
            .map_err(|e| match e {
                AppError::NotFound(detail) => AppError::NotFound(detail),
                other => AppError::NotFound(other.to_string()),
            })?;

        Ok(BlogPostResponse::new(post))
    }

    /// Creates a new blog post; the slug is generated from the title when
    /// the request omits it. A slug collision surfaces as a conflict.
    pub async fn create_blog_post(
        &self,
        request: NewBlogPostRequest,
    ) -> Result<BlogPostResponse, AppError> {
        let insert = BlogPostInsert::try_from(request)?;

        let post = self.blog_post_repo.create_blog_post(&insert).await?;

        Ok(BlogPostResponse::new(post))
    }

    pub async fn update_blog_post(
        &self,
        slug: &str,
        patch: UpdateBlogPostRequest,
    ) -> Result<BlogPostPatchResponse, AppError> {
        patch.validate()?;

        self.blog_post_repo.update_blog_post(slug, &patch).await?;

        Ok(BlogPostPatchResponse::new(patch))
    }

    pub async fn delete_blog_post(&self, slug: &str) -> Result<(), AppError> {
        self.blog_post_repo.delete_blog_post(slug).await
    }
}
