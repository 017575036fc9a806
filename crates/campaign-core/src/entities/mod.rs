//! Domain entities - core business objects

mod comment;
mod otp;
mod post;
mod user;

pub use comment::{Comment, Reply};
pub use otp::{generate_otp_code, PasswordOtp, OTP_TTL_MINUTES};
pub use post::{Post, PostStatus};
pub use user::User;
