//! Database models - SQLx-compatible structs for PostgreSQL tables

mod comment;
mod otp;
mod post;
mod user;

pub use comment::{CommentModel, CommentWithLikesModel, ReplyModel, ReplyWithLikesModel};
pub use otp::PasswordOtpModel;
pub use post::{DepartmentCountModel, PostEngagementModel, PostModel};
pub use user::UserModel;
