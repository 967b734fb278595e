use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use crate::{
    entities::contact::ContactMessageInsert, errors::AppError,
    repositories::sqlx_repo::SqlxContactRepo,
};

/// Write-only store: visitor messages are inserted and never read back
/// through the API.
#[async_trait]
pub trait ContactRepository: Send + Sync {
    async fn create_contact_message(&self, message: &ContactMessageInsert)
        -> Result<Uuid, AppError>;
}

impl SqlxContactRepo {
    pub fn new(pool: PgPool) -> Self {
        SqlxContactRepo { pool }
    }
}

#[async_trait]
impl ContactRepository for SqlxContactRepo {
    async fn create_contact_message(
        &self,
        message: &ContactMessageInsert,
    ) -> Result<Uuid, AppError> {
        let id: Uuid = sqlx::query_scalar(
            r#"
            INSERT INTO contact_messages (name, email, subject, message)
            VALUES ($1, $2, $3, $4)
            RETURNING id
            "#,
        )
        .bind(&message.name)
        .bind(&message.email)
        .bind(&message.subject)
        .bind(&message.message)
        .fetch_one(&self.pool)
        .await?;

        Ok(id)
    }
}
