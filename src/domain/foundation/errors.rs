//! Error types for the domain layer.

use http::StatusCode;
use std::collections::HashMap;
use std::fmt;
use thiserror::Error;

/// Closed set of error categories produced by domain and application code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    /// Malformed or out-of-range input; the caller can fix it and retry.
    ValidationError,
    /// A referenced identifier does not exist.
    NotFound,
    /// Reserved for the authentication collaborator.
    Unauthorized,
    /// Reserved for the authorization collaborator.
    Forbidden,
    /// A unique field is already taken (e.g. an email address).
    Conflict,
    /// Unexpected adapter failure.
    InternalError,
}

impl ErrorCode {
    /// Transport status the HTTP layer should answer with.
    pub fn http_status(&self) -> StatusCode {
        match self {
            ErrorCode::ValidationError => StatusCode::BAD_REQUEST,
            ErrorCode::NotFound => StatusCode::NOT_FOUND,
            ErrorCode::Unauthorized => StatusCode::UNAUTHORIZED,
            ErrorCode::Forbidden => StatusCode::FORBIDDEN,
            ErrorCode::Conflict => StatusCode::CONFLICT,
            ErrorCode::InternalError => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ErrorCode::ValidationError => "VALIDATION_ERROR",
            ErrorCode::NotFound => "NOT_FOUND",
            ErrorCode::Unauthorized => "UNAUTHORIZED",
            ErrorCode::Forbidden => "FORBIDDEN",
            ErrorCode::Conflict => "CONFLICT",
            ErrorCode::InternalError => "INTERNAL_ERROR",
        };
        write!(f, "{}", s)
    }
}

/// Standard domain error with code, message, and optional details.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("[{code}] {message}")]
pub struct DomainError {
    pub code: ErrorCode,
    pub message: String,
    pub details: HashMap<String, String>,
}

impl DomainError {
    /// Creates a new domain error.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            details: HashMap::new(),
        }
    }

    /// Invalid input. The message names the offending field.
    pub fn validation(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ValidationError, message)
    }

    /// Missing aggregate, e.g. `not_found("Puppy", "p-1")`.
    pub fn not_found(resource: &str, id: impl fmt::Display) -> Self {
        Self::new(
            ErrorCode::NotFound,
            format!("{} with id {} not found", resource, id),
        )
        .with_detail("resource", resource)
        .with_detail("id", id.to_string())
    }

    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::Unauthorized, message)
    }

    pub fn forbidden(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::Forbidden, message)
    }

    pub fn conflict(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::Conflict, message)
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InternalError, message)
    }

    /// Adds a detail to the error.
    pub fn with_detail(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.details.insert(key.into(), value.into());
        self
    }

    /// Returns true for `VALIDATION_ERROR`.
    pub fn is_validation(&self) -> bool {
        self.code == ErrorCode::ValidationError
    }

    /// Returns true for `NOT_FOUND`.
    pub fn is_not_found(&self) -> bool {
        self.code == ErrorCode::NotFound
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn domain_error_displays_code_and_message() {
        let err = DomainError::validation("PuppyName cannot be empty");
        assert_eq!(
            format!("{}", err),
            "[VALIDATION_ERROR] PuppyName cannot be empty"
        );
    }

    #[test]
    fn not_found_carries_resource_and_id_details() {
        let err = DomainError::not_found("Puppy", "p-42");

        assert_eq!(err.code, ErrorCode::NotFound);
        assert_eq!(err.message, "Puppy with id p-42 not found");
        assert_eq!(err.details.get("resource"), Some(&"Puppy".to_string()));
        assert_eq!(err.details.get("id"), Some(&"p-42".to_string()));
    }

    #[test]
    fn domain_error_with_detail_adds_detail() {
        let err = DomainError::conflict("Email already registered")
            .with_detail("field", "email")
            .with_detail("reason", "duplicate");

        assert_eq!(err.details.get("field"), Some(&"email".to_string()));
        assert_eq!(err.details.get("reason"), Some(&"duplicate".to_string()));
    }

    #[test]
    fn factories_set_expected_codes() {
        assert_eq!(DomainError::unauthorized("x").code, ErrorCode::Unauthorized);
        assert_eq!(DomainError::forbidden("x").code, ErrorCode::Forbidden);
        assert_eq!(DomainError::conflict("x").code, ErrorCode::Conflict);
        assert_eq!(DomainError::internal("x").code, ErrorCode::InternalError);
        assert!(DomainError::validation("x").is_validation());
    }

    #[test]
    fn error_code_display_formats_correctly() {
        assert_eq!(format!("{}", ErrorCode::ValidationError), "VALIDATION_ERROR");
        assert_eq!(format!("{}", ErrorCode::NotFound), "NOT_FOUND");
        assert_eq!(format!("{}", ErrorCode::InternalError), "INTERNAL_ERROR");
    }

    #[test]
    fn error_codes_map_to_http_statuses() {
        assert_eq!(ErrorCode::ValidationError.http_status(), StatusCode::BAD_REQUEST);
        assert_eq!(ErrorCode::NotFound.http_status(), StatusCode::NOT_FOUND);
        assert_eq!(ErrorCode::Conflict.http_status(), StatusCode::CONFLICT);
        assert_eq!(
            ErrorCode::InternalError.http_status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
