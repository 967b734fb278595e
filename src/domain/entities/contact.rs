use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationErrors};

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ContactForm {
    #[validate(length(min = 1, message = "Name cannot be empty"))]
    pub name: String,

    #[validate(email(message = "Invalid email format"))]
    pub email: String,

    pub subject: Option<String>,

    #[validate(length(min = 1, message = "Message cannot be empty"))]
    pub message: String,
}

#[derive(Debug)]
pub struct ContactMessageInsert {
    pub name: String,
    pub email: String,
    pub subject: Option<String>,
    pub message: String,
}

impl TryFrom<&ContactForm> for ContactMessageInsert {
    type Error = ValidationErrors;

    fn try_from(form: &ContactForm) -> Result<Self, Self::Error> {
        form.validate()?;

        Ok(ContactMessageInsert {
            name: form.name.clone(),
            email: form.email.clone(),
            subject: form.subject.clone(),
            message: form.message.clone(),
        })
    }
}

/// Submission acknowledgements always read as success; when the store is
/// unavailable the body carries the demo-mode wording and no echo.
#[derive(Debug, Serialize)]
pub struct ContactResponse {
    pub status: &'static str,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<ContactData>,
}

#[derive(Debug, Serialize)]
pub struct ContactData {
    pub contact_message: ContactForm,
}

impl ContactResponse {
    pub fn delivered(form: ContactForm) -> Self {
        ContactResponse {
            status: "success",
            message: "Your message has been sent successfully!".to_string(),
            data: Some(ContactData { contact_message: form }),
        }
    }

    pub fn demo_mode() -> Self {
        ContactResponse {
            status: "success",
            message: "Your message has been sent successfully! (Demo mode)".to_string(),
            data: None,
        }
    }
}
