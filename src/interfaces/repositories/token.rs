use jsonwebtoken::TokenData;
use uuid::Uuid;

use crate::{
    entities::{
        token::{Claims, RefreshClaims},
        user::User,
    },
    errors::AuthError,
};

pub trait TokenService: Send + Sync {
    /// Creates a short-lived access token for the user
    fn create_access_token(&self, user: &User) -> Result<String, AuthError>;

    /// Creates a long-lived refresh token for the user
    fn create_refresh_token(&self, user_id: &Uuid) -> Result<String, AuthError>;

    /// Decodes an access token and returns its claims
    fn decode_access_token(&self, token: &str) -> Result<TokenData<Claims>, AuthError>;

    /// Decodes a refresh token and returns its claims
    fn decode_refresh_token(&self, token: &str) -> Result<TokenData<RefreshClaims>, AuthError>;
}
