//! Authentication module: password hashing and opaque bearer tokens.
//!
//! Tokens are opaque 40-character hex strings stored server-side, bound
//! 1:1 to a user, and passed as `Authorization: Token <key>`. Issuing a
//! token to a user who already holds one returns the existing key.

use argon2::{
    Argon2,
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString, rand_core::OsRng},
};
use axum::{
    extract::FromRequestParts,
    http::{header, request::Parts},
};

use notehub_core::UserId;

use crate::error::ApiError;
use crate::state::AppState;

/// Scheme expected in the authorization header.
pub const TOKEN_SCHEME: &str = "Token ";

/// Number of random bytes in a token key (40 hex characters).
const TOKEN_BYTES: usize = 20;

/// Authenticated caller resolved from a bearer token.
#[derive(Debug, Clone)]
pub struct CurrentUser {
    /// User ID.
    pub id: UserId,
    /// Username, for logging.
    pub username: String,
}

/// Generate a fresh candidate token key.
///
/// The store discards the candidate if the user already holds a token.
pub fn generate_token_key() -> String {
    hex::encode(rand::random::<[u8; TOKEN_BYTES]>())
}

/// Hash a password using Argon2.
pub fn hash_password(password: &str) -> Result<String, ApiError> {
    let salt = SaltString::generate(&mut OsRng);
    let argon2 = Argon2::default();
    let password_hash = argon2
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| ApiError::Internal(format!("Failed to hash password: {}", e)))?;
    Ok(password_hash.to_string())
}

/// Verify a password against a hash.
pub fn verify_password(password: &str, hash: &str) -> Result<bool, ApiError> {
    let parsed_hash = PasswordHash::new(hash)
        .map_err(|e| ApiError::Internal(format!("Invalid password hash: {}", e)))?;
    Ok(Argon2::default()
        .verify_password(password.as_bytes(), &parsed_hash)
        .is_ok())
}

impl FromRequestParts<AppState> for CurrentUser {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let auth_header = parts
            .headers
            .get(header::AUTHORIZATION)
            .and_then(|v| v.to_str().ok())
            .ok_or_else(|| ApiError::Unauthorized("Missing authorization header".to_string()))?;

        let key = auth_header.strip_prefix(TOKEN_SCHEME).ok_or_else(|| {
            ApiError::Unauthorized("Authorization header must be Token <key>".to_string())
        })?;

        let user = state
            .store()
            .get_user_by_token(key.trim())
            .await?
            .ok_or_else(|| ApiError::Unauthorized("Invalid token".to_string()))?;

        Ok(CurrentUser {
            id: UserId::from_uuid(user.id),
            username: user.username,
        })
    }
}
