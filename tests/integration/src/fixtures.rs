//! Test fixtures and data generators
//!
//! Provides reusable test data for integration tests. Request structs mirror
//! the API's camelCase wire format.

use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicU64, Ordering};

/// Counter for unique test data
static COUNTER: AtomicU64 = AtomicU64::new(1);

/// Get a unique suffix for test data
pub fn unique_suffix() -> u64 {
    COUNTER.fetch_add(1, Ordering::SeqCst)
}

/// Registration request
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub password: String,
    pub employee_id: String,
    pub department: String,
}

impl RegisterRequest {
    pub fn unique() -> Self {
        let suffix = unique_suffix();
        Self {
            name: format!("Test User {suffix}"),
            email: format!("test{suffix}@example.com"),
            password: "TestPass123!".to_string(),
            employee_id: format!("EMP-{suffix}"),
            department: "Engineering".to_string(),
        }
    }
}

/// Login request
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

impl LoginRequest {
    pub fn from_register(reg: &RegisterRequest) -> Self {
        Self {
            email: reg.email.clone(),
            password: reg.password.clone(),
        }
    }
}

/// Auth response
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthResponse {
    pub token: String,
    pub token_type: String,
    pub expires_in: i64,
    pub user: UserResponse,
}

/// User response
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    pub id: String,
    pub name: String,
    pub email: String,
    pub employee_id: String,
    pub department: String,
}

/// Create post request
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatePostRequest {
    pub title: String,
    pub description: String,
    pub category: String,
    pub participant_type: String,
    pub department: String,
    pub author: AuthorPayload,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub media_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

/// Author attribution on a post
#[derive(Debug, Serialize)]
pub struct AuthorPayload {
    pub name: String,
    pub department: String,
}

impl CreatePostRequest {
    pub fn unique_for(reg: &RegisterRequest) -> Self {
        let suffix = unique_suffix();
        Self {
            title: format!("Test Entry {suffix}"),
            description: "An entry submitted by the integration suite".to_string(),
            category: "Art".to_string(),
            participant_type: "Individual".to_string(),
            department: reg.department.clone(),
            author: AuthorPayload {
                name: reg.name.clone(),
                department: reg.department.clone(),
            },
            media_url: None,
            status: None,
        }
    }
}

/// Update post request (all fields optional)
#[derive(Debug, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdatePostRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

/// Post response
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostResponse {
    pub id: String,
    pub title: String,
    pub category: String,
    pub participant_type: String,
    pub department: String,
    pub status: String,
    pub views: i64,
    pub likes: i64,
    pub comments: Vec<CommentResponse>,
}

/// Comment request
#[derive(Debug, Serialize)]
pub struct CreateCommentRequest {
    pub text: String,
}

/// Reply request
#[derive(Debug, Serialize)]
pub struct CreateReplyRequest {
    pub content: String,
}

/// Comment response
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommentResponse {
    pub id: String,
    pub post_id: String,
    pub author_name: String,
    pub text: String,
    pub likes: i64,
    pub replies: Vec<ReplyResponse>,
}

/// Reply response
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReplyResponse {
    pub id: String,
    pub comment_id: String,
    pub author_name: String,
    pub content: String,
    pub likes: i64,
}

/// Like response
#[derive(Debug, Deserialize)]
pub struct LikeResponse {
    pub message: String,
    pub likes: i64,
}

/// Views response
#[derive(Debug, Deserialize)]
pub struct ViewsResponse {
    pub views: i64,
}

/// Generic message response
#[derive(Debug, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}
