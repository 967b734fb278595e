use uuid::Uuid;
use validator::Validate;

use crate::auth::password::{hash_password, verify_password};
use crate::constants::SIGNUP_ROLE;
use crate::entities::token::{AuthResponse, Claims};
use crate::entities::user::{
    LoginRequest, LoginResponse, RegisterRequest, RegisterResponse, User, UserInsert, UserResponse,
};
use crate::errors::{AppError, AuthError};
use crate::repositories::token::TokenService;
use crate::repositories::user::{CredentialStore, UserRepository};

pub struct AuthHandler<C, U, T>
where
    C: CredentialStore,
    U: UserRepository,
    T: TokenService,
{
    pub credential_store: C,
    pub user_repo: U,
    pub token_service: T,
}

impl<C, U, T> AuthHandler<C, U, T>
where
    C: CredentialStore,
    U: UserRepository,
    T: TokenService,
{
    pub fn new(credential_store: C, user_repo: U, token_service: T) -> Self {
        AuthHandler {
            credential_store,
            user_repo,
            token_service,
        }
    }

    /// Registers a new admin: creates the auth credential, then the profile
    /// row carrying the fixed role. If the profile insert fails, the
    /// just-created credential is deleted so no orphaned identity survives
    /// a failed sign-up.
    pub async fn register(&self, request: RegisterRequest) -> Result<RegisterResponse, AppError> {
        request.validate()?;

        let password_hash = hash_password(&request.password)?;

        let credential = self
            .credential_store
            .create_credential(&request.email, &password_hash)
            .await?;

        let user_insert = UserInsert {
            id: credential.id,
            name: request.name,
            email: request.email,
            role: SIGNUP_ROLE.to_string(),
            created_at: credential.created_at,
        };

        match self.user_repo.create_user(&user_insert).await {
            Ok(user) => Ok(RegisterResponse::new(user)),
            Err(e) => {
                if let Err(rollback_err) =
                    self.credential_store.delete_credential(&credential.id).await
                {
                    tracing::error!(
                        "Failed to roll back credential {}: {}",
                        credential.id,
                        rollback_err
                    );
                }
                Err(e)
            }
        }
    }

    /// Logs in a user by verifying credentials and issuing a token pair
    pub async fn login(&self, request: LoginRequest) -> Result<LoginResponse, AuthError> {
        request.validate()?;

        let credential = self
            .credential_store
            .get_credential_by_email(&request.email)
            .await
            .map_err(|_| AuthError::WrongCredentials)?
            .ok_or(AuthError::WrongCredentials)?;

        let is_password_valid = verify_password(&request.password, &credential.password_hash)
            .map_err(|_| AuthError::WrongCredentials)?;
        if !is_password_valid {
            return Err(AuthError::WrongCredentials);
        }

        let user = self
            .user_repo
            .get_user_by_id(&credential.id)
            .await
            .map_err(|_| AuthError::WrongCredentials)?
            .ok_or(AuthError::WrongCredentials)?;

        let (access_token, refresh_token) = self.issue_tokens(&user)?;

        tracing::info!("User logged in successfully");
        Ok(LoginResponse::new(user, access_token, refresh_token))
    }

    /// Exchanges a valid refresh token for a fresh token pair
    pub async fn refresh_token(&self, token: &str) -> Result<AuthResponse, AuthError> {
        let decoded = self.token_service.decode_refresh_token(token)?;
        let user_id = Uuid::parse_str(&decoded.claims.sub).map_err(|_| AuthError::InvalidUserId)?;

        let user = self
            .user_repo
            .get_user_by_id(&user_id)
            .await
            .map_err(|_| AuthError::WrongCredentials)?
            .ok_or(AuthError::WrongCredentials)?;

        let (access_token, refresh_token) = self.issue_tokens(&user)?;

        Ok(AuthResponse::new(access_token, refresh_token))
    }

    /// Resolves the profile behind a set of access claims
    pub async fn current_user(&self, claims: &Claims) -> Result<UserResponse, AppError> {
        let user_id = Uuid::parse_str(&claims.sub)
            .map_err(|_| AppError::InvalidInput("Invalid user ID".to_string()))?;

        let user = self
            .user_repo
            .get_user_by_id(&user_id)
            .await?
            .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;

        Ok(UserResponse::new(user))
    }

    fn issue_tokens(&self, user: &User) -> Result<(String, String), AuthError> {
        let access_token = self.token_service.create_access_token(user).map_err(|e| {
            tracing::warn!("Failed to create access token: {}", e);
            AuthError::TokenCreation
        })?;

        let refresh_token = self
            .token_service
            .create_refresh_token(&user.id)
            .map_err(|e| {
                tracing::warn!("Failed to create refresh token: {}", e);
                AuthError::TokenCreation
            })?;

        Ok((access_token, refresh_token))
    }
}
