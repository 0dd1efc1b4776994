// src/handlers/login.rs

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    response::IntoResponse,
};
use sqlx::SqlitePool;
use validator::Validate;

use crate::{
    config::Config,
    error::AppError,
    models::user::{LoginRequest, LoginResponse, User},
    utils::{hash::verify_password, jwt::sign_jwt},
};

/// Authenticates a user and returns a bearer token.
///
/// Unknown usernames and wrong passwords produce the same 401 so callers cannot
/// discover which usernames exist.
pub async fn login(
    State(pool): State<SqlitePool>,
    State(config): State<Config>,
    payload: Result<Json<LoginRequest>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(payload) = payload?;
    payload.validate()?;

    let user = sqlx::query_as::<_, User>(
        "SELECT id, username, name, password_hash FROM users WHERE username = ?",
    )
    .bind(&payload.username)
    .fetch_optional(&pool)
    .await
    .map_err(|e| {
        tracing::error!("Login DB error: {:?}", e);
        AppError::from(e)
    })?;

    let user = match user {
        Some(user) if verify_password(&payload.password, &user.password_hash)? => user,
        _ => {
            tracing::warn!("Failed login for '{}'", payload.username);
            return Err(AppError::AuthError(
                "invalid username or password".to_string(),
            ));
        }
    };

    let token = sign_jwt(
        user.id,
        &user.username,
        &config.jwt_secret,
        config.jwt_expiration,
    )?;

    Ok(Json(LoginResponse {
        token,
        username: user.username,
        name: user.name,
    }))
}
