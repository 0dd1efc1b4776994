// src/handlers/mod.rs

pub mod blogs;
pub mod login;
pub mod users;

use crate::error::AppError;

/// Parses a record id taken from the URL path.
/// Anything that is not a positive integer is malformed (400), as opposed to a
/// well-formed id with no matching record (404).
pub fn parse_id(raw: &str) -> Result<i64, AppError> {
    match raw.parse::<i64>() {
        Ok(id) if id > 0 => Ok(id),
        _ => Err(AppError::malformatted_id()),
    }
}

/// Fallback for routes that do not exist.
pub async fn unknown_endpoint() -> AppError {
    AppError::NotFound("unknown endpoint".to_string())
}
