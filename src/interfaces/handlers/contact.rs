use actix_web::{web, HttpResponse, Responder};
use tracing::instrument;

use crate::{entities::contact::ContactForm, errors::AppError, AppState};

/// Public intake endpoint. Validation failures are the only errors a
/// visitor can see; a failing store is acknowledged as delivered.
#[instrument(skip(state, form))]
pub async fn create_contact_message(
    state: web::Data<AppState>,
    form: web::Json<ContactForm>,
) -> Result<impl Responder, AppError> {
    let response = state
        .contact_handler
        .create_contact_message(form.into_inner())
        .await?;

    Ok(HttpResponse::Created().json(response))
}
