// src/models/user.rs

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

use super::blog::BlogSummary;

/// Represents the 'users' table in the database.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct User {
    pub id: i64,

    /// Unique username.
    pub username: String,

    pub name: Option<String>,

    /// Argon2 password hash.
    /// Skipped during serialization to prevent leaking sensitive data.
    #[serde(skip)]
    pub password_hash: String,
}

/// Owner information embedded in a blog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserSummary {
    pub id: i64,
    pub username: String,
    pub name: Option<String>,
}

/// A user together with the blogs they own.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserWithBlogs {
    pub id: i64,
    pub username: String,
    pub name: Option<String>,
    pub blogs: Vec<BlogSummary>,
}

impl UserWithBlogs {
    pub fn new(user: User, blogs: Vec<BlogSummary>) -> Self {
        Self {
            id: user.id,
            username: user.username,
            name: user.name,
            blogs,
        }
    }
}

/// DTO for creating a new user (Registration).
#[derive(Debug, Deserialize, Validate)]
pub struct CreateUserRequest {
    #[validate(
        required(message = "Path `username` is required."),
        length(
            min = 3,
            message = "Path `username` is shorter than the minimum allowed length (3)."
        )
    )]
    pub username: Option<String>,

    pub name: Option<String>,

    #[validate(
        required(message = "password must be at least 3 characters long"),
        length(min = 3, message = "password must be at least 3 characters long")
    )]
    pub password: Option<String>,
}

/// DTO for user login.
#[derive(Debug, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(length(min = 1, max = 50))]
    pub username: String,
    #[validate(length(min = 1, max = 128))]
    pub password: String,
}

/// Successful login payload.
#[derive(Debug, Serialize, Deserialize)]
pub struct LoginResponse {
    pub token: String,
    pub username: String,
    pub name: Option<String>,
}
