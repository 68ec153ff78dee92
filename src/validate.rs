use once_cell::sync::Lazy;
use regex::Regex;

use crate::models::{CreateMessagePayload, NewMessage, DEFAULT_COLOR};

pub const MAX_AUTHOR_LEN: usize = 20;
pub const MAX_MESSAGE_LEN: usize = 500;

static COLOR_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^#(?:[0-9a-fA-F]{3}|[0-9a-fA-F]{6})$").expect("valid color regex"));

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Author and message are required")]
    Missing,
    #[error("Author must be 20 characters or less")]
    AuthorTooLong,
    #[error("Message must be 500 characters or less")]
    MessageTooLong,
    #[error("Color must be a hex code like #fff or #ffeb3b")]
    InvalidColor,
    #[error("Invalid request body: {0}")]
    MalformedBody(String),
}

pub fn author(raw: Option<&str>) -> Result<String, ValidationError> {
    bounded(raw, MAX_AUTHOR_LEN, ValidationError::AuthorTooLong)
}

pub fn message(raw: Option<&str>) -> Result<String, ValidationError> {
    bounded(raw, MAX_MESSAGE_LEN, ValidationError::MessageTooLong)
}

/// Blank or absent colors fall back to [`DEFAULT_COLOR`].
pub fn color(raw: Option<&str>) -> Result<String, ValidationError> {
    match raw.map(str::trim) {
        None | Some("") => Ok(DEFAULT_COLOR.to_owned()),
        Some(c) if COLOR_RE.is_match(c) => Ok(c.to_owned()),
        Some(_) => Err(ValidationError::InvalidColor),
    }
}

pub fn new_message(payload: &CreateMessagePayload) -> Result<NewMessage, ValidationError> {
    Ok(NewMessage {
        author: author(payload.author.as_deref())?,
        message: message(payload.message.as_deref())?,
        color: color(payload.color.as_deref())?,
    })
}

fn bounded(raw: Option<&str>, max: usize, too_long: ValidationError) -> Result<String, ValidationError> {
    let trimmed = raw.map(str::trim).unwrap_or_default();
    if trimmed.is_empty() {
        return Err(ValidationError::Missing);
    }
    if trimmed.chars().count() > max {
        return Err(too_long);
    }
    Ok(trimmed.to_owned())
}
