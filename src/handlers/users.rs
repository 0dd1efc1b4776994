// src/handlers/users.rs

use std::collections::HashMap;

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
    response::IntoResponse,
};
use sqlx::{FromRow, SqlitePool};
use validator::Validate;

use crate::{
    error::AppError,
    models::{
        blog::BlogSummary,
        user::{CreateUserRequest, User, UserWithBlogs},
    },
    utils::hash::hash_password,
};

/// Registers a new user.
///
/// Hashes the password using Argon2 before storing it.
/// Returns 201 Created and the user object (excluding password).
pub async fn register(
    State(pool): State<SqlitePool>,
    payload: Result<Json<CreateUserRequest>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(payload) = payload?;
    payload.validate()?;

    let (Some(username), Some(password)) = (payload.username, payload.password) else {
        return Err(AppError::BadRequest(
            "`username` and `password` are required".to_string(),
        ));
    };

    let password_hash = hash_password(&password)?;

    let user = sqlx::query_as::<_, User>(
        r#"
        INSERT INTO users (username, name, password_hash)
        VALUES (?, ?, ?)
        RETURNING id, username, name, password_hash
        "#,
    )
    .bind(&username)
    .bind(payload.name)
    .bind(password_hash)
    .fetch_one(&pool)
    .await
    .map_err(|e| {
        if e.as_database_error()
            .is_some_and(|db| db.is_unique_violation())
        {
            AppError::BadRequest("expected `username` to be unique".to_string())
        } else {
            tracing::error!("Failed to register user: {:?}", e);
            AppError::from(e)
        }
    })?;

    tracing::info!("Registered user {} ({})", user.username, user.id);

    Ok((StatusCode::CREATED, Json(UserWithBlogs::new(user, Vec::new()))))
}

#[derive(FromRow)]
struct OwnedBlogRow {
    user_id: i64,
    #[sqlx(flatten)]
    blog: BlogSummary,
}

/// Lists all users with the blogs each one owns.
pub async fn list_users(State(pool): State<SqlitePool>) -> Result<impl IntoResponse, AppError> {
    let users = sqlx::query_as::<_, User>(
        "SELECT id, username, name, password_hash FROM users ORDER BY id",
    )
    .fetch_all(&pool)
    .await?;

    let owned = sqlx::query_as::<_, OwnedBlogRow>(
        r#"
        SELECT user_id, id, title, author, url
        FROM blogs
        WHERE user_id IS NOT NULL
        ORDER BY id
        "#,
    )
    .fetch_all(&pool)
    .await?;

    let mut blogs_by_user: HashMap<i64, Vec<BlogSummary>> = HashMap::new();
    for row in owned {
        blogs_by_user.entry(row.user_id).or_default().push(row.blog);
    }

    let users: Vec<UserWithBlogs> = users
        .into_iter()
        .map(|user| {
            let blogs = blogs_by_user.remove(&user.id).unwrap_or_default();
            UserWithBlogs::new(user, blogs)
        })
        .collect();

    Ok(Json(users))
}
