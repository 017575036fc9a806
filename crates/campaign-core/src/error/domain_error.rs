//! Domain errors - error types for the domain layer

use thiserror::Error;
use uuid::Uuid;

/// Domain layer errors
#[derive(Debug, Error)]
pub enum DomainError {
    // =========================================================================
    // Not Found Errors
    // =========================================================================
    #[error("User not found: {0}")]
    UserNotFound(Uuid),

    #[error("No account registered for this email")]
    EmailNotFound,

    #[error("Post not found: {0}")]
    PostNotFound(Uuid),

    #[error("Comment not found: {0}")]
    CommentNotFound(Uuid),

    #[error("Reply not found: {0}")]
    ReplyNotFound(Uuid),

    // =========================================================================
    // Validation Errors
    // =========================================================================
    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Invalid email format")]
    InvalidEmail,

    #[error("Password too weak: {0}")]
    WeakPassword(String),

    #[error("Invalid or expired code")]
    OtpInvalid,

    #[error("Code has not been verified")]
    OtpNotVerified,

    // Like-state violations answer with 400, matching the wire contract
    #[error("Already liked")]
    AlreadyLiked,

    #[error("Not liked yet")]
    NotLiked,

    // =========================================================================
    // Conflict Errors
    // =========================================================================
    #[error("Email already in use")]
    EmailAlreadyExists,

    #[error("Employee ID already in use")]
    EmployeeIdAlreadyExists,

    // =========================================================================
    // Infrastructure Errors (wrapped)
    // =========================================================================
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Internal error: {0}")]
    InternalError(String),
}

impl DomainError {
    /// Get an error code string for API responses
    pub fn code(&self) -> &'static str {
        match self {
            // Not Found
            Self::UserNotFound(_) => "UNKNOWN_USER",
            Self::EmailNotFound => "UNKNOWN_EMAIL",
            Self::PostNotFound(_) => "UNKNOWN_POST",
            Self::CommentNotFound(_) => "UNKNOWN_COMMENT",
            Self::ReplyNotFound(_) => "UNKNOWN_REPLY",

            // Validation
            Self::ValidationError(_) => "VALIDATION_ERROR",
            Self::InvalidEmail => "INVALID_EMAIL",
            Self::WeakPassword(_) => "WEAK_PASSWORD",
            Self::OtpInvalid => "OTP_INVALID",
            Self::OtpNotVerified => "OTP_NOT_VERIFIED",
            Self::AlreadyLiked => "ALREADY_LIKED",
            Self::NotLiked => "NOT_LIKED",

            // Conflict
            Self::EmailAlreadyExists => "EMAIL_ALREADY_EXISTS",
            Self::EmployeeIdAlreadyExists => "EMPLOYEE_ID_ALREADY_EXISTS",

            // Infrastructure
            Self::DatabaseError(_) => "DATABASE_ERROR",
            Self::InternalError(_) => "INTERNAL_ERROR",
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::UserNotFound(_)
                | Self::EmailNotFound
                | Self::PostNotFound(_)
                | Self::CommentNotFound(_)
                | Self::ReplyNotFound(_)
        )
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::ValidationError(_)
                | Self::InvalidEmail
                | Self::WeakPassword(_)
                | Self::OtpInvalid
                | Self::OtpNotVerified
                | Self::AlreadyLiked
                | Self::NotLiked
        )
    }

    /// Check if this is a conflict error
    pub fn is_conflict(&self) -> bool {
        matches!(self, Self::EmailAlreadyExists | Self::EmployeeIdAlreadyExists)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        let err = DomainError::PostNotFound(Uuid::nil());
        assert_eq!(err.code(), "UNKNOWN_POST");

        let err = DomainError::AlreadyLiked;
        assert_eq!(err.code(), "ALREADY_LIKED");
    }

    #[test]
    fn test_is_not_found() {
        assert!(DomainError::PostNotFound(Uuid::nil()).is_not_found());
        assert!(DomainError::EmailNotFound.is_not_found());
        assert!(!DomainError::EmailAlreadyExists.is_not_found());
    }

    #[test]
    fn test_is_conflict() {
        assert!(DomainError::EmailAlreadyExists.is_conflict());
        assert!(DomainError::EmployeeIdAlreadyExists.is_conflict());
        assert!(!DomainError::OtpInvalid.is_conflict());
    }

    #[test]
    fn test_is_validation() {
        assert!(DomainError::OtpInvalid.is_validation());
        assert!(!DomainError::DatabaseError("boom".to_string()).is_validation());
    }

    #[test]
    fn test_like_state_errors_are_bad_requests() {
        // A repeated like or a stray unlike is a rejected request, not a
        // conflicting resource
        assert!(DomainError::AlreadyLiked.is_validation());
        assert!(DomainError::NotLiked.is_validation());
        assert!(!DomainError::AlreadyLiked.is_conflict());
        assert!(!DomainError::NotLiked.is_conflict());
    }
}
