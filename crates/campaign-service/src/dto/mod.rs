//! Data transfer objects for API requests and responses
//!
//! This module provides:
//! - Request DTOs with validation for API inputs
//! - Response DTOs for serializing API outputs

pub mod requests;
pub mod responses;

// Re-export commonly used request types
pub use requests::{
    AuthorPayload, CreateCommentRequest, CreatePostRequest, CreateReplyRequest, LoginRequest,
    RegisterRequest, RequestOtpRequest, ResetPasswordRequest, UpdatePostRequest, VerifyOtpRequest,
};

// Re-export commonly used response types
pub use responses::{
    assemble_comments, AuthResponse, CategoryLeaderEntry, CommentResponse,
    DepartmentLeaderboardEntry, HealthChecks,
    HealthResponse, IndividualLeaderboardEntry, LikeResponse, MessageResponse, PostResponse,
    ReadinessResponse, ReplyResponse, UserResponse, ViewsResponse, WeeklySubmissionsResponse,
};
