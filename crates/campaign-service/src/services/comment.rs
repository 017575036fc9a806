//! Comment service
//!
//! Handles comments, replies, and their like sets.

use campaign_core::entities::{Comment, Reply};
use campaign_core::DomainError;
use tracing::{info, instrument};
use uuid::Uuid;

use crate::dto::{CommentResponse, CreateCommentRequest, CreateReplyRequest, LikeResponse, ReplyResponse};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Comment service
pub struct CommentService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> CommentService<'a> {
    /// Create a new CommentService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Add a comment to a post
    #[instrument(skip(self, request))]
    pub async fn add_comment(
        &self,
        post_id: Uuid,
        user_id: Uuid,
        request: CreateCommentRequest,
    ) -> ServiceResult<CommentResponse> {
        self.ctx
            .post_repo()
            .find_by_id(post_id)
            .await?
            .ok_or(ServiceError::Domain(DomainError::PostNotFound(post_id)))?;

        let author_name = self.author_name(user_id).await?;
        let comment = Comment::new(post_id, user_id, author_name, request.text);
        self.ctx.comment_repo().create(&comment).await?;

        info!(comment_id = %comment.id, post_id = %post_id, "Comment added");

        Ok(CommentResponse::new(&comment, 0, Vec::new()))
    }

    /// Reply to a comment
    ///
    /// The comment must belong to the addressed post; a comment id reached
    /// through another post's URL is treated as not found.
    #[instrument(skip(self, request))]
    pub async fn add_reply(
        &self,
        post_id: Uuid,
        comment_id: Uuid,
        user_id: Uuid,
        request: CreateReplyRequest,
    ) -> ServiceResult<ReplyResponse> {
        self.comment_in_post(post_id, comment_id).await?;

        let author_name = self.author_name(user_id).await?;
        let reply = Reply::new(comment_id, user_id, author_name, request.content);
        self.ctx.comment_repo().create_reply(&reply).await?;

        info!(reply_id = %reply.id, comment_id = %comment_id, "Reply added");

        Ok(ReplyResponse::new(&reply, 0))
    }

    /// Like a comment on behalf of a user
    #[instrument(skip(self))]
    pub async fn like_comment(
        &self,
        post_id: Uuid,
        comment_id: Uuid,
        user_id: Uuid,
    ) -> ServiceResult<LikeResponse> {
        self.comment_in_post(post_id, comment_id).await?;

        if !self.ctx.comment_like_repo().add(comment_id, user_id).await? {
            return Err(ServiceError::Domain(DomainError::AlreadyLiked));
        }

        let likes = self.ctx.comment_like_repo().count(comment_id).await?;
        Ok(LikeResponse {
            message: "Comment liked".to_string(),
            likes,
        })
    }

    /// Remove a user's like from a comment
    #[instrument(skip(self))]
    pub async fn unlike_comment(
        &self,
        post_id: Uuid,
        comment_id: Uuid,
        user_id: Uuid,
    ) -> ServiceResult<LikeResponse> {
        self.comment_in_post(post_id, comment_id).await?;

        if !self
            .ctx
            .comment_like_repo()
            .remove(comment_id, user_id)
            .await?
        {
            return Err(ServiceError::Domain(DomainError::NotLiked));
        }

        let likes = self.ctx.comment_like_repo().count(comment_id).await?;
        Ok(LikeResponse {
            message: "Comment unliked".to_string(),
            likes,
        })
    }

    /// Like a reply on behalf of a user
    #[instrument(skip(self))]
    pub async fn like_reply(
        &self,
        post_id: Uuid,
        comment_id: Uuid,
        reply_id: Uuid,
        user_id: Uuid,
    ) -> ServiceResult<LikeResponse> {
        self.reply_in_thread(post_id, comment_id, reply_id).await?;

        if !self.ctx.reply_like_repo().add(reply_id, user_id).await? {
            return Err(ServiceError::Domain(DomainError::AlreadyLiked));
        }

        let likes = self.ctx.reply_like_repo().count(reply_id).await?;
        Ok(LikeResponse {
            message: "Reply liked".to_string(),
            likes,
        })
    }

    /// Remove a user's like from a reply
    #[instrument(skip(self))]
    pub async fn unlike_reply(
        &self,
        post_id: Uuid,
        comment_id: Uuid,
        reply_id: Uuid,
        user_id: Uuid,
    ) -> ServiceResult<LikeResponse> {
        self.reply_in_thread(post_id, comment_id, reply_id).await?;

        if !self.ctx.reply_like_repo().remove(reply_id, user_id).await? {
            return Err(ServiceError::Domain(DomainError::NotLiked));
        }

        let likes = self.ctx.reply_like_repo().count(reply_id).await?;
        Ok(LikeResponse {
            message: "Reply unliked".to_string(),
            likes,
        })
    }

    /// Look up a comment and verify it belongs to the given post
    async fn comment_in_post(&self, post_id: Uuid, comment_id: Uuid) -> ServiceResult<Comment> {
        self.ctx
            .comment_repo()
            .find_by_id(comment_id)
            .await?
            .filter(|comment| comment.post_id == post_id)
            .ok_or(ServiceError::Domain(DomainError::CommentNotFound(
                comment_id,
            )))
    }

    /// Look up a reply and verify its comment/post ancestry
    async fn reply_in_thread(
        &self,
        post_id: Uuid,
        comment_id: Uuid,
        reply_id: Uuid,
    ) -> ServiceResult<Reply> {
        self.comment_in_post(post_id, comment_id).await?;
        self.ctx
            .comment_repo()
            .find_reply_by_id(reply_id)
            .await?
            .filter(|reply| reply.comment_id == comment_id)
            .ok_or(ServiceError::Domain(DomainError::ReplyNotFound(reply_id)))
    }

    async fn author_name(&self, user_id: Uuid) -> ServiceResult<String> {
        let user = self
            .ctx
            .user_repo()
            .find_by_id(user_id)
            .await?
            .ok_or(ServiceError::Domain(DomainError::UserNotFound(user_id)))?;
        Ok(user.name)
    }
}
