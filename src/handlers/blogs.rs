// src/handlers/blogs.rs

use axum::{
    Extension, Json,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
    response::IntoResponse,
};
use sqlx::SqlitePool;
use validator::Validate;

use crate::{
    error::AppError,
    handlers::parse_id,
    models::blog::{BLOG_SELECT, Blog, BlogRow, CreateBlogRequest, UpdateBlogRequest},
    utils::jwt::Claims,
};

/// List all blogs, oldest first, each with its owner summary.
pub async fn list_blogs(State(pool): State<SqlitePool>) -> Result<impl IntoResponse, AppError> {
    let blogs: Vec<Blog> = sqlx::query_as::<_, BlogRow>(&format!("{BLOG_SELECT} ORDER BY b.id"))
        .fetch_all(&pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to list blogs: {:?}", e);
            AppError::from(e)
        })?
        .into_iter()
        .map(Blog::from)
        .collect();

    Ok(Json(blogs))
}

/// Create a new blog owned by the requesting user.
/// Requires: Login.
pub async fn create_blog(
    State(pool): State<SqlitePool>,
    Extension(claims): Extension<Claims>,
    payload: Result<Json<CreateBlogRequest>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(payload) = payload?;
    payload.validate()?;

    let user_id = claims.user_id()?;

    // The token may outlive its user.
    let owner_exists = sqlx::query_scalar::<_, i64>("SELECT id FROM users WHERE id = ?")
        .bind(user_id)
        .fetch_optional(&pool)
        .await?
        .is_some();
    if !owner_exists {
        return Err(AppError::AuthError("token invalid".to_string()));
    }

    let (Some(title), Some(url)) = (payload.title, payload.url) else {
        return Err(AppError::BadRequest("`title` and `url` are required".to_string()));
    };

    let id = sqlx::query_scalar::<_, i64>(
        r#"
        INSERT INTO blogs (title, author, url, likes, user_id)
        VALUES (?, ?, ?, ?, ?)
        RETURNING id
        "#,
    )
    .bind(title)
    .bind(payload.author)
    .bind(url)
    .bind(payload.likes.unwrap_or(0))
    .bind(user_id)
    .fetch_one(&pool)
    .await
    .map_err(|e| {
        tracing::error!("Failed to create blog: {:?}", e);
        AppError::from(e)
    })?;

    tracing::info!("User {} created blog {}", user_id, id);

    let blog = find_blog(&pool, id)
        .await?
        .ok_or_else(|| AppError::InternalServerError(format!("blog {} vanished after insert", id)))?;

    Ok((StatusCode::CREATED, Json(blog)))
}

/// Get a single blog by ID.
pub async fn get_blog(
    State(pool): State<SqlitePool>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id(&id)?;

    let blog = find_blog(&pool, id)
        .await?
        .ok_or(AppError::NotFound("Blog not found".to_string()))?;

    Ok(Json(blog))
}

/// Update a blog. Anyone may edit; see `update_own_blog` for the owner-only variant.
pub async fn update_blog(
    State(pool): State<SqlitePool>,
    Path(id): Path<String>,
    payload: Result<Json<UpdateBlogRequest>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id(&id)?;
    let Json(payload) = payload?;

    apply_update(&pool, id, payload).await.map(Json)
}

/// Update a blog.
/// Requires: Login + Owner.
pub async fn update_own_blog(
    State(pool): State<SqlitePool>,
    Extension(claims): Extension<Claims>,
    Path(id): Path<String>,
    payload: Result<Json<UpdateBlogRequest>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id(&id)?;
    let Json(payload) = payload?;

    ensure_owner(&pool, id, claims.user_id()?, "update").await?;

    apply_update(&pool, id, payload).await.map(Json)
}

/// Delete a blog.
/// Requires: Login + Owner. A missing blog is 404.
pub async fn delete_blog(
    State(pool): State<SqlitePool>,
    Extension(claims): Extension<Claims>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id(&id)?;
    let user_id = claims.user_id()?;

    ensure_owner(&pool, id, user_id, "delete").await?;

    sqlx::query("DELETE FROM blogs WHERE id = ?")
        .bind(id)
        .execute(&pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to delete blog: {:?}", e);
            AppError::from(e)
        })?;

    tracing::info!("User {} deleted blog {}", user_id, id);

    Ok(StatusCode::NO_CONTENT)
}

async fn find_blog(pool: &SqlitePool, id: i64) -> Result<Option<Blog>, AppError> {
    let row = sqlx::query_as::<_, BlogRow>(&format!("{BLOG_SELECT} WHERE b.id = ?"))
        .bind(id)
        .fetch_optional(pool)
        .await?;

    Ok(row.map(Blog::from))
}

/// Fails with 404 if the blog is missing and 401 if `user_id` does not own it.
async fn ensure_owner(pool: &SqlitePool, id: i64, user_id: i64, action: &str) -> Result<(), AppError> {
    let owner = sqlx::query_scalar::<_, Option<i64>>("SELECT user_id FROM blogs WHERE id = ?")
        .bind(id)
        .fetch_optional(pool)
        .await?
        .ok_or(AppError::NotFound("Blog not found".to_string()))?;

    if owner != Some(user_id) {
        tracing::warn!("User {} tried to {} blog {} they do not own", user_id, action, id);
        return Err(AppError::AuthError(format!(
            "only the creator can {} a blog",
            action
        )));
    }

    Ok(())
}

async fn apply_update(
    pool: &SqlitePool,
    id: i64,
    payload: UpdateBlogRequest,
) -> Result<Blog, AppError> {
    payload.validate()?;

    let (Some(title), Some(url)) = (payload.title, payload.url) else {
        return Err(AppError::BadRequest("`title` and `url` are required".to_string()));
    };

    let result = sqlx::query(
        r#"
        UPDATE blogs
        SET title  = ?,
            author = ?,
            url    = ?,
            likes  = COALESCE(?, likes)
        WHERE id = ?
        "#,
    )
    .bind(title)
    .bind(payload.author)
    .bind(url)
    .bind(payload.likes)
    .bind(id)
    .execute(pool)
    .await
    .map_err(|e| {
        tracing::error!("Failed to update blog: {:?}", e);
        AppError::from(e)
    })?;

    if result.rows_affected() == 0 {
        return Err(AppError::NotFound("Blog not found".to_string()));
    }

    find_blog(pool, id)
        .await?
        .ok_or(AppError::NotFound("Blog not found".to_string()))
}
