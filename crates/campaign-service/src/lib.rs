//! # campaign-service
//!
//! Application layer containing business logic, reporting, and DTOs.

pub mod dto;
pub mod reporting;
pub mod services;

pub use dto::{
    AuthResponse, CategoryLeaderEntry, CommentResponse, CreateCommentRequest, CreatePostRequest,
    CreateReplyRequest, DepartmentLeaderboardEntry, HealthChecks, HealthResponse,
    IndividualLeaderboardEntry, LikeResponse, LoginRequest, MessageResponse, PostResponse,
    ReadinessResponse, RegisterRequest, ReplyResponse, RequestOtpRequest, ResetPasswordRequest,
    UpdatePostRequest, UserResponse, VerifyOtpRequest, ViewsResponse, WeeklySubmissionsResponse,
};
pub use services::{
    AuthService, CommentService, LeaderboardService, OtpMailer, PasswordResetService, PostService,
    Report, ServiceContext, ServiceContextBuilder, ServiceError, ServiceResult, StatsService,
    TracingMailer,
};
