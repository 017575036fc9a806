//! Comment/reply entity <-> model mappers

use campaign_core::entities::{Comment, Reply};
use campaign_core::traits::{CommentWithLikes, ReplyWithLikes};

use crate::models::{CommentModel, CommentWithLikesModel, ReplyModel, ReplyWithLikesModel};

impl From<CommentModel> for Comment {
    fn from(model: CommentModel) -> Self {
        Comment {
            id: model.id,
            post_id: model.post_id,
            user_id: model.user_id,
            author_name: model.author_name,
            text: model.body,
            created_at: model.created_at,
        }
    }
}

impl From<CommentWithLikesModel> for CommentWithLikes {
    fn from(model: CommentWithLikesModel) -> Self {
        CommentWithLikes {
            comment: Comment {
                id: model.id,
                post_id: model.post_id,
                user_id: model.user_id,
                author_name: model.author_name,
                text: model.body,
                created_at: model.created_at,
            },
            likes: model.likes,
        }
    }
}

impl From<ReplyModel> for Reply {
    fn from(model: ReplyModel) -> Self {
        Reply {
            id: model.id,
            comment_id: model.comment_id,
            user_id: model.user_id,
            author_name: model.author_name,
            content: model.content,
            created_at: model.created_at,
        }
    }
}

impl From<ReplyWithLikesModel> for ReplyWithLikes {
    fn from(model: ReplyWithLikesModel) -> Self {
        ReplyWithLikes {
            reply: Reply {
                id: model.id,
                comment_id: model.comment_id,
                user_id: model.user_id,
                author_name: model.author_name,
                content: model.content,
                created_at: model.created_at,
            },
            likes: model.likes,
        }
    }
}
