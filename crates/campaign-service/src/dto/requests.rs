//! Request DTOs for API endpoints
//!
//! All request DTOs implement `Deserialize` and `Validate` so handlers can
//! reject malformed input before any business logic runs. Field names follow
//! the camelCase convention of the public API.

use chrono::NaiveDate;
use serde::Deserialize;
use validator::Validate;

// ============================================================================
// Auth Requests
// ============================================================================

/// Request to register a new user
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    #[validate(length(min = 1, max = 100, message = "Name must be 1-100 characters"))]
    pub name: String,

    #[validate(email(message = "Invalid email format"))]
    pub email: String,

    #[validate(length(min = 8, max = 128, message = "Password must be 8-128 characters"))]
    pub password: String,

    #[validate(length(min = 1, max = 50, message = "Employee ID must be 1-50 characters"))]
    pub employee_id: String,

    #[validate(length(min = 1, max = 100, message = "Department must be 1-100 characters"))]
    pub department: String,

    pub gender: Option<String>,
    pub date_of_birth: Option<NaiveDate>,

    #[validate(length(max = 20, message = "Contact number too long"))]
    pub contact_no: Option<String>,

    pub avatar: Option<String>,
}

/// Request to login with email and password
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    #[validate(email(message = "Invalid email format"))]
    pub email: String,

    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

// ============================================================================
// Password Reset Requests
// ============================================================================

/// Request a password reset code by email
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct RequestOtpRequest {
    #[validate(email(message = "Invalid email format"))]
    pub email: String,
}

/// Verify a password reset code
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct VerifyOtpRequest {
    #[validate(email(message = "Invalid email format"))]
    pub email: String,

    #[validate(length(equal = 6, message = "Code must be 6 digits"))]
    pub otp: String,
}

/// Set a new password after the code was verified
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ResetPasswordRequest {
    #[validate(email(message = "Invalid email format"))]
    pub email: String,

    #[validate(length(min = 8, max = 128, message = "Password must be 8-128 characters"))]
    pub password: String,
}

// ============================================================================
// Post Requests
// ============================================================================

/// Author attribution sent with a post
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct AuthorPayload {
    #[validate(length(min = 1, max = 100, message = "Author name must be 1-100 characters"))]
    pub name: String,

    #[validate(length(min = 1, max = 100, message = "Author department must be 1-100 characters"))]
    pub department: String,
}

/// Request to create a new post
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreatePostRequest {
    #[validate(length(min = 1, max = 200, message = "Title must be 1-200 characters"))]
    pub title: String,

    #[validate(length(max = 5000, message = "Description too long"))]
    #[serde(default)]
    pub description: String,

    #[validate(length(min = 1, max = 100, message = "Category must be 1-100 characters"))]
    pub category: String,

    #[validate(length(min = 1, max = 100, message = "Participant type must be 1-100 characters"))]
    pub participant_type: String,

    #[validate(length(min = 1, max = 100, message = "Department must be 1-100 characters"))]
    pub department: String,

    #[validate(nested)]
    pub author: AuthorPayload,

    /// URL of already-uploaded media, if any
    pub media_url: Option<String>,

    /// "published" (default) or "draft"
    pub status: Option<String>,
}

/// Request to update an existing post; absent fields are left unchanged
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdatePostRequest {
    #[validate(length(min = 1, max = 200, message = "Title must be 1-200 characters"))]
    pub title: Option<String>,

    #[validate(length(max = 5000, message = "Description too long"))]
    pub description: Option<String>,

    #[validate(length(min = 1, max = 100, message = "Category must be 1-100 characters"))]
    pub category: Option<String>,

    #[validate(length(min = 1, max = 100, message = "Participant type must be 1-100 characters"))]
    pub participant_type: Option<String>,

    #[validate(length(min = 1, max = 100, message = "Department must be 1-100 characters"))]
    pub department: Option<String>,

    pub media_url: Option<String>,
    pub status: Option<String>,
}

// ============================================================================
// Comment Requests
// ============================================================================

/// Request to add a comment to a post
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateCommentRequest {
    #[validate(length(min = 1, max = 2000, message = "Comment must be 1-2000 characters"))]
    pub text: String,
}

/// Request to reply to a comment
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateReplyRequest {
    #[validate(length(min = 1, max = 2000, message = "Reply must be 1-2000 characters"))]
    pub content: String,
}
