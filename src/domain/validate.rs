//! Field rules applied before a row is written.

use crate::error::AppError;
use once_cell::sync::Lazy;
use regex::Regex;

pub const TITLE_MIN: usize = 10;
pub const TITLE_MAX: usize = 50;
pub const CONTENT_MIN: usize = 20;

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[^@\s]+@[^@\s]+$").expect("email regex"));

pub fn post_title(title: &str) -> Result<(), AppError> {
    let n = title.chars().count();
    if n == 0 {
        return Err(AppError::Validation("title is required".into()));
    }
    if !(TITLE_MIN..=TITLE_MAX).contains(&n) {
        return Err(AppError::Validation(format!(
            "title must be {}-{} characters, got {}",
            TITLE_MIN, TITLE_MAX, n
        )));
    }
    Ok(())
}

pub fn post_content(content: &str) -> Result<(), AppError> {
    let n = content.chars().count();
    if n == 0 {
        return Err(AppError::Validation("content is required".into()));
    }
    if n < CONTENT_MIN {
        return Err(AppError::Validation(format!(
            "content must be at least {} characters, got {}",
            CONTENT_MIN, n
        )));
    }
    Ok(())
}

pub fn user_email(email: &str) -> Result<(), AppError> {
    if email.is_empty() {
        return Err(AppError::Validation("email is required".into()));
    }
    if !EMAIL_RE.is_match(email) {
        return Err(AppError::Validation(format!("email is invalid: {}", email)));
    }
    Ok(())
}
