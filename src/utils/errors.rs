//! Error handling for EduPlatform
//!
//! This module defines the main error type used throughout the application
//! and provides a unified error handling strategy.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use serde_json::json;
use thiserror::Error;

/// Main error type for EduPlatform
#[derive(Error, Debug)]
pub enum PlatformError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Database migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Access to product {product_id} is denied for user {user_id}")]
    PermissionDenied { user_id: i64, product_id: i64 },

    #[error("Product not found: {product_id}")]
    ProductNotFound { product_id: i64 },

    #[error("User not found: {user_id}")]
    UserNotFound { user_id: i64 },

    #[error("Group not found: {group_id}")]
    GroupNotFound { group_id: i64 },

    #[error("Lesson not found: {lesson_id}")]
    LessonNotFound { lesson_id: i64 },

    #[error("Authentication error: {0}")]
    Authentication(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

/// Result type alias for EduPlatform operations
pub type Result<T> = std::result::Result<T, PlatformError>;

impl PlatformError {
    /// Whether the error names a missing product, user, group or lesson
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            PlatformError::ProductNotFound { .. }
                | PlatformError::UserNotFound { .. }
                | PlatformError::GroupNotFound { .. }
                | PlatformError::LessonNotFound { .. }
        )
    }

    /// Get error severity level
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            PlatformError::Database(_) => ErrorSeverity::Critical,
            PlatformError::Migration(_) => ErrorSeverity::Critical,
            PlatformError::Config(_) => ErrorSeverity::Critical,
            PlatformError::PermissionDenied { .. } => ErrorSeverity::Warning,
            PlatformError::Authentication(_) => ErrorSeverity::Warning,
            PlatformError::InvalidInput(_)
            | PlatformError::ProductNotFound { .. }
            | PlatformError::UserNotFound { .. }
            | PlatformError::GroupNotFound { .. }
            | PlatformError::LessonNotFound { .. } => ErrorSeverity::Info,
        }
    }

    /// HTTP status the error maps to
    pub fn status_code(&self) -> StatusCode {
        match self {
            PlatformError::PermissionDenied { .. } => StatusCode::FORBIDDEN,
            PlatformError::Authentication(_) => StatusCode::UNAUTHORIZED,
            PlatformError::InvalidInput(_) => StatusCode::BAD_REQUEST,
            e if e.is_not_found() => StatusCode::NOT_FOUND,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Message safe to show to API callers, without internal details
    pub fn user_message(&self) -> String {
        match self {
            PlatformError::PermissionDenied { .. } => "Access to the requested product is denied.".to_string(),
            PlatformError::Authentication(message) | PlatformError::InvalidInput(message) => message.clone(),
            e if e.is_not_found() => e.to_string(),
            _ => "Internal server error".to_string(),
        }
    }
}

impl IntoResponse for PlatformError {
    fn into_response(self) -> Response {
        match self.severity() {
            ErrorSeverity::Critical => tracing::error!(error = %self, "Request failed"),
            ErrorSeverity::Warning => tracing::warn!(error = %self, "Request rejected"),
            ErrorSeverity::Info => tracing::debug!(error = %self, "Client error"),
        }

        let body = Json(json!({ "error": self.user_message() }));
        (self.status_code(), body).into_response()
    }
}

/// Error severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    Info,
    Warning,
    Critical,
}
