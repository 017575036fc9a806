//! Business logic services
//!
//! This module contains all service layer implementations that handle
//! business logic, validation, and orchestration of domain operations.

pub mod auth;
pub mod comment;
pub mod context;
pub mod error;
pub mod leaderboard;
pub mod password_reset;
pub mod post;
pub mod stats;

// Re-export all services for convenience
pub use auth::AuthService;
pub use comment::CommentService;
pub use context::{ServiceContext, ServiceContextBuilder};
pub use error::{ServiceError, ServiceResult};
pub use leaderboard::LeaderboardService;
pub use password_reset::{OtpMailer, PasswordResetService, TracingMailer};
pub use post::PostService;
pub use stats::{Report, StatsService};
