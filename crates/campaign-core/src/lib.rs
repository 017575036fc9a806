//! # campaign-core
//!
//! Domain layer containing entities, value objects, and repository traits.
//! This crate has zero dependencies on infrastructure (database, web framework, etc.).

pub mod entities;
pub mod error;
pub mod traits;
pub mod value_objects;

// Re-export commonly used types at crate root
pub use entities::{
    generate_otp_code, Comment, PasswordOtp, Post, PostStatus, Reply, User, OTP_TTL_MINUTES,
};
pub use error::DomainError;
pub use traits::{
    CommentLikeRepository, CommentRepository, CommentWithLikes, OtpRepository, PostEngagement,
    PostLikeRepository, PostRepository, RepoResult, ReplyLikeRepository, ReplyWithLikes,
    UserRepository,
};
pub use value_objects::{normalize_email, PostAuthor};
