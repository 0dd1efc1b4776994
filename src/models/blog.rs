// src/models/blog.rs

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

use super::user::UserSummary;

/// A blog entry as returned by the API, with its owner embedded as a summary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Blog {
    pub id: i64,
    pub title: String,
    pub author: Option<String>,
    pub url: String,
    pub likes: i64,

    /// Absent for rows created before ownership was tracked.
    pub user: Option<UserSummary>,
}

/// One row of `blogs LEFT JOIN users`.
#[derive(Debug, FromRow)]
pub struct BlogRow {
    pub id: i64,
    pub title: String,
    pub author: Option<String>,
    pub url: String,
    pub likes: i64,
    pub user_id: Option<i64>,
    pub username: Option<String>,
    pub name: Option<String>,
}

impl From<BlogRow> for Blog {
    fn from(row: BlogRow) -> Self {
        let user = match (row.user_id, row.username) {
            (Some(id), Some(username)) => Some(UserSummary {
                id,
                username,
                name: row.name,
            }),
            _ => None,
        };

        Blog {
            id: row.id,
            title: row.title,
            author: row.author,
            url: row.url,
            likes: row.likes,
            user,
        }
    }
}

/// Column list shared by every query that produces a `BlogRow`.
pub const BLOG_SELECT: &str = r#"
    SELECT b.id, b.title, b.author, b.url, b.likes, b.user_id, u.username, u.name
    FROM blogs b
    LEFT JOIN users u ON u.id = b.user_id
"#;

/// Compact blog shape embedded in a user listing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct BlogSummary {
    pub id: i64,
    pub title: String,
    pub author: Option<String>,
    pub url: String,
}

/// DTO for creating a blog.
/// Fields are optional at the serde level so a missing field is reported as a
/// validation error (400) rather than a deserialization failure.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateBlogRequest {
    #[validate(
        required(message = "`title` is required"),
        length(min = 1, message = "`title` must not be empty")
    )]
    pub title: Option<String>,

    pub author: Option<String>,

    #[validate(
        required(message = "`url` is required"),
        length(min = 1, message = "`url` must not be empty")
    )]
    pub url: Option<String>,

    #[validate(range(min = 0, message = "`likes` must not be negative"))]
    pub likes: Option<i64>,
}

/// DTO for updating a blog. The payload replaces the stored record: `title` and `url`
/// are required, and a missing or null `author` clears it. A missing `likes` keeps the
/// stored count, since update never defaults it.
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateBlogRequest {
    #[validate(
        required(message = "`title` is required"),
        length(min = 1, message = "`title` must not be empty")
    )]
    pub title: Option<String>,

    pub author: Option<String>,

    #[validate(
        required(message = "`url` is required"),
        length(min = 1, message = "`url` must not be empty")
    )]
    pub url: Option<String>,

    #[validate(range(min = 0, message = "`likes` must not be negative"))]
    pub likes: Option<i64>,
}
