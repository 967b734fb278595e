use std::borrow::Cow;

use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use crate::{
    entities::user::{Credential, User, UserInsert},
    errors::AppError,
    repositories::sqlx_repo::{SqlxCredentialRepo, SqlxUserRepo},
};

/// The auth collaborator: holds identities and password hashes, nothing
/// else. Registration's compensating rollback goes through
/// `delete_credential`.
#[async_trait]
pub trait CredentialStore: Send + Sync {
    async fn create_credential(
        &self,
        email: &str,
        password_hash: &str,
    ) -> Result<Credential, AppError>;
    async fn get_credential_by_email(&self, email: &str) -> Result<Option<Credential>, AppError>;
    async fn delete_credential(&self, id: &Uuid) -> Result<(), AppError>;
}

#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn check_connection(&self) -> Result<(), AppError>;
    async fn create_user(&self, user: &UserInsert) -> Result<User, AppError>;
    async fn get_user_by_id(&self, id: &Uuid) -> Result<Option<User>, AppError>;
}

impl SqlxCredentialRepo {
    pub fn new(pool: PgPool) -> Self {
        SqlxCredentialRepo { pool }
    }
}

impl SqlxUserRepo {
    pub fn new(pool: PgPool) -> Self {
        SqlxUserRepo { pool }
    }
}

#[async_trait]
impl CredentialStore for SqlxCredentialRepo {
    async fn create_credential(
        &self,
        email: &str,
        password_hash: &str,
    ) -> Result<Credential, AppError> {
        let credential = sqlx::query_as::<_, Credential>(
            r#"
            INSERT INTO auth_credentials (email, password_hash)
            VALUES ($1, $2)
            RETURNING *
            "#,
        )
        .bind(email)
        .bind(password_hash)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(db_err) if db_err.code() == Some(Cow::Borrowed("23505")) => {
                AppError::Conflict("An account with this email already exists".to_string())
            }
            _ => AppError::from(e),
        })?;

        Ok(credential)
    }

    async fn get_credential_by_email(&self, email: &str) -> Result<Option<Credential>, AppError> {
        let credential =
            sqlx::query_as::<_, Credential>("SELECT * FROM auth_credentials WHERE email = $1")
                .bind(email)
                .fetch_optional(&self.pool)
                .await?;

        Ok(credential)
    }

    async fn delete_credential(&self, id: &Uuid) -> Result<(), AppError> {
        sqlx::query("DELETE FROM auth_credentials WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }
}

#[async_trait]
impl UserRepository for SqlxUserRepo {
    async fn check_connection(&self) -> Result<(), AppError> {
        sqlx::query("SELECT 1")
            .execute(&self.pool)
            .await
            .map(|_| ())
            .map_err(AppError::from)
    }

    async fn create_user(&self, user: &UserInsert) -> Result<User, AppError> {
        let created = sqlx::query_as::<_, User>(
            r#"
            INSERT INTO users (id, name, email, role, created_at)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING *
            "#,
        )
        .bind(user.id)
        .bind(&user.name)
        .bind(&user.email)
        .bind(&user.role)
        .bind(user.created_at)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(db_err) if db_err.code() == Some(Cow::Borrowed("23505")) => {
                AppError::Conflict("A profile with this email already exists".to_string())
            }
            _ => AppError::from(e),
        })?;

        Ok(created)
    }

    async fn get_user_by_id(&self, id: &Uuid) -> Result<Option<User>, AppError> {
        let user = sqlx::query_as::<_, User>("SELECT * FROM users WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(user)
    }
}
