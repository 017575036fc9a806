//! PostgreSQL implementation of CommentRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;
use uuid::Uuid;

use campaign_core::entities::{Comment, Reply};
use campaign_core::traits::{CommentRepository, CommentWithLikes, RepoResult, ReplyWithLikes};

use crate::models::{CommentModel, CommentWithLikesModel, ReplyModel, ReplyWithLikesModel};

use super::error::map_db_error;

/// PostgreSQL implementation of CommentRepository
#[derive(Clone)]
pub struct PgCommentRepository {
    pool: PgPool,
}

impl PgCommentRepository {
    /// Create a new PgCommentRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CommentRepository for PgCommentRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: Uuid) -> RepoResult<Option<Comment>> {
        let result = sqlx::query_as::<_, CommentModel>(
            r"
            SELECT id, post_id, user_id, author_name, body, created_at
            FROM comments
            WHERE id = $1
            ",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Comment::from))
    }

    #[instrument(skip(self))]
    async fn create(&self, comment: &Comment) -> RepoResult<()> {
        sqlx::query(
            r"
            INSERT INTO comments (id, post_id, user_id, author_name, body, created_at)
            VALUES ($1, $2, $3, $4, $5, $6)
            ",
        )
        .bind(comment.id)
        .bind(comment.post_id)
        .bind(comment.user_id)
        .bind(&comment.author_name)
        .bind(&comment.text)
        .bind(comment.created_at)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn list_for_post(&self, post_id: Uuid) -> RepoResult<Vec<CommentWithLikes>> {
        let results = sqlx::query_as::<_, CommentWithLikesModel>(
            r"
            SELECT c.id, c.post_id, c.user_id, c.author_name, c.body, c.created_at,
                   (SELECT COUNT(*) FROM comment_likes cl WHERE cl.comment_id = c.id) AS likes
            FROM comments c
            WHERE c.post_id = $1
            ORDER BY c.created_at
            ",
        )
        .bind(post_id)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(CommentWithLikes::from).collect())
    }

    #[instrument(skip(self))]
    async fn find_reply_by_id(&self, id: Uuid) -> RepoResult<Option<Reply>> {
        let result = sqlx::query_as::<_, ReplyModel>(
            r"
            SELECT id, comment_id, user_id, author_name, content, created_at
            FROM replies
            WHERE id = $1
            ",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Reply::from))
    }

    #[instrument(skip(self))]
    async fn create_reply(&self, reply: &Reply) -> RepoResult<()> {
        sqlx::query(
            r"
            INSERT INTO replies (id, comment_id, user_id, author_name, content, created_at)
            VALUES ($1, $2, $3, $4, $5, $6)
            ",
        )
        .bind(reply.id)
        .bind(reply.comment_id)
        .bind(reply.user_id)
        .bind(&reply.author_name)
        .bind(&reply.content)
        .bind(reply.created_at)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn list_replies_for_post(&self, post_id: Uuid) -> RepoResult<Vec<ReplyWithLikes>> {
        // One query for the whole comment tree of a post
        let results = sqlx::query_as::<_, ReplyWithLikesModel>(
            r"
            SELECT r.id, r.comment_id, r.user_id, r.author_name, r.content, r.created_at,
                   (SELECT COUNT(*) FROM reply_likes rl WHERE rl.reply_id = r.id) AS likes
            FROM replies r
            JOIN comments c ON c.id = r.comment_id
            WHERE c.post_id = $1
            ORDER BY r.created_at
            ",
        )
        .bind(post_id)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(ReplyWithLikes::from).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repo_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<PgCommentRepository>();
    }
}
