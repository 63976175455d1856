//! Helper functions and utilities
//!
//! This module contains common helper functions used throughout the application.

use url::Url;
use crate::utils::errors::{PlatformError, Result};

/// Maximum length of product, lesson and group names
pub const MAX_NAME_LENGTH: usize = 255;

/// Validate a display name: trimmed, non-empty, at most [`MAX_NAME_LENGTH`] characters
pub fn validate_name(field: &str, value: &str) -> Result<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(PlatformError::InvalidInput(format!("{} must not be empty", field)));
    }
    if trimmed.chars().count() > MAX_NAME_LENGTH {
        return Err(PlatformError::InvalidInput(format!(
            "{} must be at most {} characters",
            field, MAX_NAME_LENGTH
        )));
    }
    Ok(trimmed.to_string())
}

/// Validate that a lesson video reference is an absolute http(s) URL
pub fn validate_video_url(value: &str) -> Result<String> {
    let trimmed = value.trim();
    let url = Url::parse(trimmed)
        .map_err(|e| PlatformError::InvalidInput(format!("Invalid video URL '{}': {}", value, e)))?;

    match url.scheme() {
        "http" | "https" => Ok(trimmed.to_string()),
        scheme => Err(PlatformError::InvalidInput(format!(
            "Video URL must use http or https, got '{}'",
            scheme
        ))),
    }
}

/// `part / whole * 100`, or 0 when `whole` is zero
pub fn percentage(part: i64, whole: i64) -> f64 {
    if whole == 0 {
        0.0
    } else {
        part as f64 / whole as f64 * 100.0
    }
}
