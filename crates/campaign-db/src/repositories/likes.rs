//! PostgreSQL implementations of the like-set repositories
//!
//! Membership changes are single atomic statements: `INSERT .. ON CONFLICT
//! DO NOTHING` for add, plain `DELETE` for remove. The affected-row count
//! says whether the set actually changed, which is how a double-like is
//! detected without a read-modify-write cycle.

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;
use uuid::Uuid;

use campaign_core::traits::{
    CommentLikeRepository, PostLikeRepository, RepoResult, ReplyLikeRepository,
};

use super::error::map_db_error;

/// PostgreSQL implementation of PostLikeRepository
#[derive(Clone)]
pub struct PgPostLikeRepository {
    pool: PgPool,
}

impl PgPostLikeRepository {
    /// Create a new PgPostLikeRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl PostLikeRepository for PgPostLikeRepository {
    #[instrument(skip(self))]
    async fn add(&self, post_id: Uuid, user_id: Uuid) -> RepoResult<bool> {
        let result = sqlx::query(
            r"
            INSERT INTO post_likes (post_id, user_id)
            VALUES ($1, $2)
            ON CONFLICT (post_id, user_id) DO NOTHING
            ",
        )
        .bind(post_id)
        .bind(user_id)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.rows_affected() > 0)
    }

    #[instrument(skip(self))]
    async fn remove(&self, post_id: Uuid, user_id: Uuid) -> RepoResult<bool> {
        let result = sqlx::query(
            r"
            DELETE FROM post_likes WHERE post_id = $1 AND user_id = $2
            ",
        )
        .bind(post_id)
        .bind(user_id)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.rows_affected() > 0)
    }

    #[instrument(skip(self))]
    async fn count(&self, post_id: Uuid) -> RepoResult<i64> {
        let count =
            sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM post_likes WHERE post_id = $1")
                .bind(post_id)
                .fetch_one(&self.pool)
                .await
                .map_err(map_db_error)?;

        Ok(count)
    }
}

/// PostgreSQL implementation of CommentLikeRepository
#[derive(Clone)]
pub struct PgCommentLikeRepository {
    pool: PgPool,
}

impl PgCommentLikeRepository {
    /// Create a new PgCommentLikeRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CommentLikeRepository for PgCommentLikeRepository {
    #[instrument(skip(self))]
    async fn add(&self, comment_id: Uuid, user_id: Uuid) -> RepoResult<bool> {
        let result = sqlx::query(
            r"
            INSERT INTO comment_likes (comment_id, user_id)
            VALUES ($1, $2)
            ON CONFLICT (comment_id, user_id) DO NOTHING
            ",
        )
        .bind(comment_id)
        .bind(user_id)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.rows_affected() > 0)
    }

    #[instrument(skip(self))]
    async fn remove(&self, comment_id: Uuid, user_id: Uuid) -> RepoResult<bool> {
        let result = sqlx::query(
            r"
            DELETE FROM comment_likes WHERE comment_id = $1 AND user_id = $2
            ",
        )
        .bind(comment_id)
        .bind(user_id)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.rows_affected() > 0)
    }

    #[instrument(skip(self))]
    async fn count(&self, comment_id: Uuid) -> RepoResult<i64> {
        let count = sqlx::query_scalar::<_, i64>(
            "SELECT COUNT(*) FROM comment_likes WHERE comment_id = $1",
        )
        .bind(comment_id)
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(count)
    }
}

/// PostgreSQL implementation of ReplyLikeRepository
#[derive(Clone)]
pub struct PgReplyLikeRepository {
    pool: PgPool,
}

impl PgReplyLikeRepository {
    /// Create a new PgReplyLikeRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ReplyLikeRepository for PgReplyLikeRepository {
    #[instrument(skip(self))]
    async fn add(&self, reply_id: Uuid, user_id: Uuid) -> RepoResult<bool> {
        let result = sqlx::query(
            r"
            INSERT INTO reply_likes (reply_id, user_id)
            VALUES ($1, $2)
            ON CONFLICT (reply_id, user_id) DO NOTHING
            ",
        )
        .bind(reply_id)
        .bind(user_id)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.rows_affected() > 0)
    }

    #[instrument(skip(self))]
    async fn remove(&self, reply_id: Uuid, user_id: Uuid) -> RepoResult<bool> {
        let result = sqlx::query(
            r"
            DELETE FROM reply_likes WHERE reply_id = $1 AND user_id = $2
            ",
        )
        .bind(reply_id)
        .bind(user_id)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.rows_affected() > 0)
    }

    #[instrument(skip(self))]
    async fn count(&self, reply_id: Uuid) -> RepoResult<i64> {
        let count =
            sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM reply_likes WHERE reply_id = $1")
                .bind(reply_id)
                .fetch_one(&self.pool)
                .await
                .map_err(map_db_error)?;

        Ok(count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repos_are_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<PgPostLikeRepository>();
        assert_send_sync::<PgCommentLikeRepository>();
        assert_send_sync::<PgReplyLikeRepository>();
    }
}
