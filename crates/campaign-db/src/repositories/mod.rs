//! PostgreSQL repository implementations

mod comment;
mod error;
mod likes;
mod otp;
mod post;
mod user;

pub use comment::PgCommentRepository;
pub use likes::{PgCommentLikeRepository, PgPostLikeRepository, PgReplyLikeRepository};
pub use otp::PgOtpRepository;
pub use post::PgPostRepository;
pub use user::PgUserRepository;
