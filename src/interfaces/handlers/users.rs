use actix_web::{get, web, HttpResponse, Responder};

use crate::{errors::AppError, use_cases::extractors::AuthClaims, AppState};

/// "Who am I" probe for the admin dashboard.
#[get("/me")]
pub async fn me(
    claims: AuthClaims,
    state: web::Data<AppState>,
) -> Result<impl Responder, AppError> {
    let response = state.auth_handler.current_user(&claims.0).await?;

    Ok(HttpResponse::Ok().json(response))
}
