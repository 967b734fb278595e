use crate::{
    entities::contact::{ContactForm, ContactMessageInsert, ContactResponse},
    errors::AppError,
    repositories::contact::ContactRepository,
};

pub struct ContactHandler<R>
where
    R: ContactRepository,
{
    pub contact_repo: R,
}

impl<R> ContactHandler<R>
where
    R: ContactRepository,
{
    pub fn new(contact_repo: R) -> Self {
        ContactHandler { contact_repo }
    }

    /// Persists a visitor message best-effort. A store failure is absorbed
    /// and acknowledged as delivered in demo mode; only validation failures
    /// reach the caller as errors.
    pub async fn create_contact_message(
        &self,
        form: ContactForm,
    ) -> Result<ContactResponse, AppError> {
        let insert = ContactMessageInsert::try_from(&form)?;

        match self.contact_repo.create_contact_message(&insert).await {
            Ok(_) => Ok(ContactResponse::delivered(form)),
            Err(e) => {
                tracing::warn!("Contact store unavailable, acknowledging in demo mode: {}", e);
                Ok(ContactResponse::demo_mode())
            }
        }
    }
}
