use actix_web::{web, HttpResponse, Responder};
use tracing::instrument;

use crate::{
    entities::blog_post::{NewBlogPostRequest, UpdateBlogPostRequest},
    errors::AppError,
    use_cases::extractors::AuthClaims,
    AppState,
};

#[instrument(skip(state))]
pub async fn list_blog_posts(state: web::Data<AppState>) -> Result<impl Responder, AppError> {
    let response = state.blog_handler.list_blog_posts().await?;

    Ok(HttpResponse::Ok().json(response))
}

#[instrument(skip(state))]
pub async fn get_blog_post(
    slug: web::Path<String>,
    state: web::Data<AppState>,
) -> Result<impl Responder, AppError> {
    let response = state.blog_handler.get_blog_post(&slug).await?;

    Ok(HttpResponse::Ok().json(response))
}

#[instrument(skip(_claims, state, data))]
pub async fn create_blog_post(
    _claims: AuthClaims,
    state: web::Data<AppState>,
    data: web::Json<NewBlogPostRequest>,
) -> Result<impl Responder, AppError> {
    let response = state
        .blog_handler
        .create_blog_post(data.into_inner())
        .await?;

    Ok(HttpResponse::Created().json(response))
}

#[instrument(skip(_claims, state, data))]
pub async fn update_blog_post(
    _claims: AuthClaims,
    slug: web::Path<String>,
    state: web::Data<AppState>,
    data: web::Json<UpdateBlogPostRequest>,
) -> Result<impl Responder, AppError> {
    let response = state
        .blog_handler
        .update_blog_post(&slug, data.into_inner())
        .await?;

    Ok(HttpResponse::Ok().json(response))
}

#[instrument(skip(_claims, state))]
pub async fn delete_blog_post(
    _claims: AuthClaims,
    slug: web::Path<String>,
    state: web::Data<AppState>,
) -> Result<impl Responder, AppError> {
    state.blog_handler.delete_blog_post(&slug).await?;

    Ok(HttpResponse::NoContent().finish())
}
