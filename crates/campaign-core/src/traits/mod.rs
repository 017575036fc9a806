//! Repository traits (ports) for the persistence layer

mod repositories;

pub use repositories::{
    CommentLikeRepository, CommentRepository, CommentWithLikes, OtpRepository, PostEngagement,
    PostLikeRepository, PostRepository, RepoResult, ReplyLikeRepository, ReplyWithLikes,
    UserRepository,
};
