//! PostgreSQL implementation of PostRepository

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use tracing::instrument;
use uuid::Uuid;

use campaign_core::entities::Post;
use campaign_core::traits::{PostEngagement, PostRepository, RepoResult};

use crate::models::{PostEngagementModel, PostModel};

use super::error::{map_db_error, post_not_found};

const POST_COLUMNS: &str = "id, title, description, category, participant_type, department, \
                            author_name, author_department, media_url, status, views, \
                            created_at, updated_at";

/// Columns for the engagement snapshot: post fields plus store-side like and
/// comment counts, so reporting never walks child rows in application code.
const ENGAGEMENT_QUERY: &str = r"
    SELECT p.id, p.title, p.category, p.participant_type, p.department,
           p.author_name, p.author_department, p.media_url, p.created_at,
           (SELECT COUNT(*) FROM post_likes pl WHERE pl.post_id = p.id) AS likes,
           (SELECT COUNT(*) FROM comments c WHERE c.post_id = p.id) AS comments
    FROM posts p
";

/// PostgreSQL implementation of PostRepository
#[derive(Clone)]
pub struct PgPostRepository {
    pool: PgPool,
}

impl PgPostRepository {
    /// Create a new PgPostRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl PostRepository for PgPostRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: Uuid) -> RepoResult<Option<Post>> {
        let result = sqlx::query_as::<_, PostModel>(&format!(
            "SELECT {POST_COLUMNS} FROM posts WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Post::from))
    }

    #[instrument(skip(self))]
    async fn list(&self) -> RepoResult<Vec<Post>> {
        let results = sqlx::query_as::<_, PostModel>(&format!(
            "SELECT {POST_COLUMNS} FROM posts ORDER BY created_at DESC"
        ))
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(Post::from).collect())
    }

    #[instrument(skip(self))]
    async fn list_by_category(&self, category: &str) -> RepoResult<Vec<Post>> {
        let results = sqlx::query_as::<_, PostModel>(&format!(
            "SELECT {POST_COLUMNS} FROM posts WHERE category = $1 ORDER BY created_at DESC"
        ))
        .bind(category)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(Post::from).collect())
    }

    #[instrument(skip(self))]
    async fn list_by_author_name(&self, name: &str) -> RepoResult<Vec<Post>> {
        let results = sqlx::query_as::<_, PostModel>(&format!(
            "SELECT {POST_COLUMNS} FROM posts WHERE author_name = $1 ORDER BY created_at DESC"
        ))
        .bind(name)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(Post::from).collect())
    }

    #[instrument(skip(self))]
    async fn create(&self, post: &Post) -> RepoResult<()> {
        sqlx::query(
            r"
            INSERT INTO posts (id, title, description, category, participant_type, department,
                               author_name, author_department, media_url, status, views,
                               created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13)
            ",
        )
        .bind(post.id)
        .bind(&post.title)
        .bind(&post.description)
        .bind(&post.category)
        .bind(&post.participant_type)
        .bind(&post.department)
        .bind(&post.author.name)
        .bind(&post.author.department)
        .bind(&post.media_url)
        .bind(post.status.as_str())
        .bind(post.views)
        .bind(post.created_at)
        .bind(post.updated_at)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn update(&self, post: &Post) -> RepoResult<()> {
        let result = sqlx::query(
            r"
            UPDATE posts
            SET title = $2, description = $3, category = $4, participant_type = $5,
                department = $6, media_url = $7, status = $8, updated_at = $9
            WHERE id = $1
            ",
        )
        .bind(post.id)
        .bind(&post.title)
        .bind(&post.description)
        .bind(&post.category)
        .bind(&post.participant_type)
        .bind(&post.department)
        .bind(&post.media_url)
        .bind(post.status.as_str())
        .bind(post.updated_at)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(post_not_found(post.id));
        }

        Ok(())
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: Uuid) -> RepoResult<()> {
        // Comments, replies and like-sets go with the post via ON DELETE CASCADE
        let result = sqlx::query("DELETE FROM posts WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(post_not_found(id));
        }

        Ok(())
    }

    #[instrument(skip(self))]
    async fn increment_views(&self, id: Uuid) -> RepoResult<i64> {
        let views = sqlx::query_scalar::<_, i64>(
            r"
            UPDATE posts SET views = views + 1 WHERE id = $1 RETURNING views
            ",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        views.ok_or_else(|| post_not_found(id))
    }

    #[instrument(skip(self))]
    async fn get_views(&self, id: Uuid) -> RepoResult<i64> {
        let views = sqlx::query_scalar::<_, i64>("SELECT views FROM posts WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(map_db_error)?;

        views.ok_or_else(|| post_not_found(id))
    }

    #[instrument(skip(self))]
    async fn distinct_categories(&self) -> RepoResult<Vec<String>> {
        let results =
            sqlx::query_scalar::<_, String>("SELECT DISTINCT category FROM posts ORDER BY category")
                .fetch_all(&self.pool)
                .await
                .map_err(map_db_error)?;

        Ok(results)
    }

    #[instrument(skip(self))]
    async fn distinct_participant_types(&self) -> RepoResult<Vec<String>> {
        let results = sqlx::query_scalar::<_, String>(
            "SELECT DISTINCT participant_type FROM posts ORDER BY participant_type",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results)
    }

    #[instrument(skip(self))]
    async fn list_published_engagement(&self) -> RepoResult<Vec<PostEngagement>> {
        let results = sqlx::query_as::<_, PostEngagementModel>(&format!(
            "{ENGAGEMENT_QUERY} WHERE p.status = 'published' ORDER BY p.created_at DESC"
        ))
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(PostEngagement::from).collect())
    }

    #[instrument(skip(self))]
    async fn list_engagement(&self) -> RepoResult<Vec<PostEngagement>> {
        let results = sqlx::query_as::<_, PostEngagementModel>(&format!(
            "{ENGAGEMENT_QUERY} ORDER BY p.created_at DESC"
        ))
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(PostEngagement::from).collect())
    }

    #[instrument(skip(self))]
    async fn count_published_since(&self, since: DateTime<Utc>) -> RepoResult<i64> {
        let count = sqlx::query_scalar::<_, i64>(
            r"
            SELECT COUNT(*) FROM posts WHERE status = 'published' AND created_at >= $1
            ",
        )
        .bind(since)
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(count)
    }
}
