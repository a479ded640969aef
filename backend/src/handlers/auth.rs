use axum::{
    extract::{Extension, State},
    http::StatusCode,
    Json,
};
use chrono::Utc;

use crate::{
    error::AppError,
    models::{
        user::{
            LoginRequest, RefreshTokenRequest, RegisterRequest, TokenResponse, User, UserResponse,
        },
        MessageResponse,
    },
    repositories::{EMAIL_TAKEN, USERNAME_TAKEN},
    state::AppState,
    utils::{
        jwt::{create_access_token, create_refresh_token, verify_token, TokenKind},
        password::{hash_password, verify_password},
    },
    validation::validate_payload,
};

const INVALID_CREDENTIALS: &str = "Invalid email or password";

pub async fn register(
    State(state): State<AppState>,
    Json(payload): Json<RegisterRequest>,
) -> Result<(StatusCode, Json<UserResponse>), AppError> {
    validate_payload(&payload)?;

    // Early exit before hashing; `create` re-checks under the table lock.
    if state.users.find_by_email(&payload.email).await?.is_some() {
        return Err(AppError::Conflict(EMAIL_TAKEN.into()));
    }
    if state
        .users
        .find_by_username(&payload.username)
        .await?
        .is_some()
    {
        return Err(AppError::Conflict(USERNAME_TAKEN.into()));
    }

    let user = state
        .users
        .create(User {
            id: 0,
            username: payload.username,
            email: payload.email.trim().to_string(),
            password_hash: hash_password(&payload.password)?,
            is_active: true,
            is_superuser: false,
            created_at: Utc::now(),
        })
        .await?;

    tracing::info!(user_id = user.id, username = %user.username, "registered account");
    Ok((StatusCode::CREATED, Json(UserResponse::from(user))))
}

pub async fn login(
    State(state): State<AppState>,
    Json(payload): Json<LoginRequest>,
) -> Result<Json<TokenResponse>, AppError> {
    let user = state
        .users
        .find_by_email(payload.email.trim())
        .await?
        .filter(|user| user.is_active)
        .ok_or_else(|| AppError::Unauthorized(INVALID_CREDENTIALS.into()))?;

    if !verify_password(&payload.password, &user.password_hash)? {
        tracing::info!(user_id = user.id, "login rejected: wrong password");
        return Err(AppError::Unauthorized(INVALID_CREDENTIALS.into()));
    }

    let config = &state.config;
    let access_token =
        create_access_token(&user.email, &config.jwt_secret, config.jwt_expiration_hours)?;
    let refresh_token = create_refresh_token(
        &user.email,
        &config.jwt_secret,
        config.refresh_token_expiration_days,
    )?;

    Ok(Json(TokenResponse::bearer(access_token, refresh_token)))
}

pub async fn refresh(
    State(state): State<AppState>,
    Json(payload): Json<RefreshTokenRequest>,
) -> Result<Json<TokenResponse>, AppError> {
    let config = &state.config;
    let claims = verify_token(&payload.refresh_token, &config.jwt_secret, TokenKind::Refresh)
        .map_err(|err| AppError::Unauthorized(format!("Invalid refresh token: {err}")))?;

    let user = state
        .users
        .find_by_email(&claims.sub)
        .await?
        .filter(|user| user.is_active)
        .ok_or_else(|| AppError::Unauthorized("User not found".into()))?;

    let access_token =
        create_access_token(&user.email, &config.jwt_secret, config.jwt_expiration_hours)?;

    Ok(Json(TokenResponse::bearer(
        access_token,
        payload.refresh_token,
    )))
}

pub async fn me(Extension(user): Extension<User>) -> Json<UserResponse> {
    Json(UserResponse::from(user))
}

pub async fn logout(Extension(user): Extension<User>) -> Json<MessageResponse> {
    tracing::info!(user_id = user.id, "logged out");
    Json(MessageResponse::new("Successfully logged out"))
}
