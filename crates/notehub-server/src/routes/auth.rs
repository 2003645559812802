//! Authentication routes: register, login, logout, me.

use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    routing::{get, post},
};
use serde::{Deserialize, Serialize};

use notehub_core::{User, UserId};
use notehub_store::NewUser;

use crate::auth::{self, CurrentUser};
use crate::error::{ApiError, ApiResult};
use crate::extract::ValidJson;
use crate::state::AppState;

// ============================================================================
// Request/Response Types
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    pub username: String,
    pub email: String,
    pub password: String,
}

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub token: String,
    pub user_id: UserId,
    pub username: String,
}

// ============================================================================
// Route Handlers
// ============================================================================

/// POST /auth/register
async fn register(
    State(state): State<AppState>,
    ValidJson(request): ValidJson<RegisterRequest>,
) -> ApiResult<(StatusCode, Json<User>)> {
    let store = state.store();

    let username = request.username.trim();
    let email = request.email.trim();

    if username.is_empty() {
        return Err(ApiError::BadRequest("Username may not be blank".to_string()));
    }
    if email.is_empty() {
        return Err(ApiError::BadRequest("Email may not be blank".to_string()));
    }
    if request.password.is_empty() {
        return Err(ApiError::BadRequest("Password may not be blank".to_string()));
    }

    if store.username_exists(username).await? {
        return Err(ApiError::BadRequest("Username already exists".to_string()));
    }
    if store.email_exists(email).await? {
        return Err(ApiError::BadRequest("Email already exists".to_string()));
    }

    let password_hash = auth::hash_password(&request.password)?;
    let new_user = NewUser::new(username.to_string(), email.to_string(), password_hash);
    let row = store.insert_user(&new_user).await?;

    tracing::info!(user_id = %row.id, username = %row.username, "User registered");

    Ok((StatusCode::CREATED, Json(row.into_user())))
}

/// POST /auth/login
///
/// Unknown username and wrong password fail identically.
async fn login(
    State(state): State<AppState>,
    ValidJson(request): ValidJson<LoginRequest>,
) -> ApiResult<Json<LoginResponse>> {
    let store = state.store();

    let user = store
        .get_user_by_username(&request.username)
        .await?
        .ok_or_else(|| ApiError::BadRequest("Invalid credentials".to_string()))?;

    let valid = auth::verify_password(&request.password, &user.password_hash)?;
    if !valid {
        return Err(ApiError::BadRequest("Invalid credentials".to_string()));
    }

    // Idempotent: an existing token wins over the fresh candidate
    let token = store
        .get_or_create_token(user.id, &auth::generate_token_key())
        .await?;

    tracing::info!(user_id = %user.id, username = %user.username, "User logged in");

    Ok(Json(LoginResponse {
        token,
        user_id: UserId::from_uuid(user.id),
        username: user.username,
    }))
}

/// POST /auth/logout - revoke the caller's token.
async fn logout(State(state): State<AppState>, user: CurrentUser) -> ApiResult<StatusCode> {
    state.store().delete_token_for_user(user.id.0).await?;

    tracing::info!(user_id = %user.id, "User logged out");
    Ok(StatusCode::NO_CONTENT)
}

/// GET /auth/me - current user info.
async fn me(State(state): State<AppState>, user: CurrentUser) -> ApiResult<Json<User>> {
    let row = state.store().get_user_by_id(user.id.0).await?;
    Ok(Json(row.into_user()))
}

/// Build auth routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/auth/register", post(register))
        .route("/auth/login", post(login))
        .route("/auth/logout", post(logout))
        .route("/auth/me", get(me))
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    #[test]
    fn test_register_request_deserialize() {
        let json = r#"{"username": "testuser1", "email": "testuser1@test.com", "password": "this_is_a_test"}"#;
        let request: RegisterRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.username, "testuser1");
        assert_eq!(request.email, "testuser1@test.com");
        assert_eq!(request.password, "this_is_a_test");
    }

    #[test]
    fn test_register_request_missing_field_rejected() {
        let json = r#"{"username": "testuser1", "password": "pw"}"#;
        assert!(serde_json::from_str::<RegisterRequest>(json).is_err());
    }

    #[test]
    fn test_login_request_deserialize() {
        let json = r#"{"username": "testuser1", "password": "this_is_a_test"}"#;
        let request: LoginRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.username, "testuser1");
        assert_eq!(request.password, "this_is_a_test");
    }

    #[test]
    fn test_login_response_serialize() {
        let response = LoginResponse {
            token: "f".repeat(40),
            user_id: UserId::from_uuid(Uuid::nil()),
            username: "testuser1".to_string(),
        };
        let json = serde_json::to_string(&response).unwrap();
        assert!(json.contains("token"));
        assert!(json.contains("user_id"));
        assert!(!json.contains("password"));
    }
}
