use actix_web::{web, HttpResponse, Responder};
use tracing::instrument;

use crate::{
    entities::skill::{NewSkillRequest, UpdateSkillRequest},
    errors::AppError,
    use_cases::extractors::AuthClaims,
    AppState,
};

#[instrument(skip(state))]
pub async fn list_skills(state: web::Data<AppState>) -> Result<impl Responder, AppError> {
    let response = state.skill_handler.list_skills().await?;

    Ok(HttpResponse::Ok().json(response))
}

#[instrument(skip(state))]
pub async fn get_skill(
    skill_id: web::Path<String>,
    state: web::Data<AppState>,
) -> Result<impl Responder, AppError> {
    let response = state.skill_handler.get_skill(&skill_id).await?;

    Ok(HttpResponse::Ok().json(response))
}

#[instrument(skip(_claims, state, data))]
pub async fn create_skill(
    _claims: AuthClaims,
    state: web::Data<AppState>,
    data: web::Json<NewSkillRequest>,
) -> Result<impl Responder, AppError> {
    let response = state.skill_handler.create_skill(data.into_inner()).await?;

    Ok(HttpResponse::Created().json(response))
}

#[instrument(skip(_claims, state, data))]
pub async fn update_skill(
    _claims: AuthClaims,
    skill_id: web::Path<String>,
    state: web::Data<AppState>,
    data: web::Json<UpdateSkillRequest>,
) -> Result<impl Responder, AppError> {
    let response = state
        .skill_handler
        .update_skill(&skill_id, data.into_inner())
        .await?;

    Ok(HttpResponse::Ok().json(response))
}

#[instrument(skip(_claims, state))]
pub async fn delete_skill(
    _claims: AuthClaims,
    skill_id: web::Path<String>,
    state: web::Data<AppState>,
) -> Result<impl Responder, AppError> {
    state.skill_handler.delete_skill(&skill_id).await?;

    Ok(HttpResponse::NoContent().finish())
}
