//! Post service
//!
//! Handles submission CRUD, likes, views, and assembly of the full
//! post response with its comment tree.

use campaign_core::entities::{Post, PostStatus};
use campaign_core::value_objects::PostAuthor;
use campaign_core::DomainError;
use chrono::Utc;
use tracing::{info, instrument};
use uuid::Uuid;

use crate::dto::{
    assemble_comments, CreatePostRequest, LikeResponse, PostResponse, UpdatePostRequest,
    ViewsResponse,
};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Post service
pub struct PostService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> PostService<'a> {
    /// Create a new PostService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Create a new post
    #[instrument(skip(self, request), fields(title = %request.title))]
    pub async fn create_post(&self, request: CreatePostRequest) -> ServiceResult<PostResponse> {
        let author = PostAuthor::new(request.author.name, request.author.department);

        let mut post = Post::new(
            request.title,
            request.description,
            request.category,
            request.participant_type,
            request.department,
            author,
        )
        .with_media_url(request.media_url);

        if let Some(status) = request.status.as_deref() {
            post = post.with_status(PostStatus::parse(status));
        }

        self.ctx.post_repo().create(&post).await?;

        info!(post_id = %post.id, "Post created");

        Ok(PostResponse::new(&post, 0, Vec::new()))
    }

    /// Get a single post with likes and the full comment tree
    #[instrument(skip(self))]
    pub async fn get_post(&self, post_id: Uuid) -> ServiceResult<PostResponse> {
        let post = self
            .ctx
            .post_repo()
            .find_by_id(post_id)
            .await?
            .ok_or(ServiceError::Domain(DomainError::PostNotFound(post_id)))?;

        self.hydrate(post).await
    }

    /// List all posts, newest first
    #[instrument(skip(self))]
    pub async fn list_posts(&self) -> ServiceResult<Vec<PostResponse>> {
        let posts = self.ctx.post_repo().list().await?;
        self.hydrate_all(posts).await
    }

    /// List posts in a category, newest first
    #[instrument(skip(self))]
    pub async fn list_posts_by_category(&self, category: &str) -> ServiceResult<Vec<PostResponse>> {
        let posts = self.ctx.post_repo().list_by_category(category).await?;
        self.hydrate_all(posts).await
    }

    /// List posts by author name, newest first
    #[instrument(skip(self))]
    pub async fn list_posts_by_author(&self, name: &str) -> ServiceResult<Vec<PostResponse>> {
        let posts = self.ctx.post_repo().list_by_author_name(name).await?;
        self.hydrate_all(posts).await
    }

    /// Update a post; absent fields keep their current value
    #[instrument(skip(self, request))]
    pub async fn update_post(
        &self,
        post_id: Uuid,
        request: UpdatePostRequest,
    ) -> ServiceResult<PostResponse> {
        let mut post = self
            .ctx
            .post_repo()
            .find_by_id(post_id)
            .await?
            .ok_or(ServiceError::Domain(DomainError::PostNotFound(post_id)))?;

        if let Some(title) = request.title {
            post.title = title;
        }
        if let Some(description) = request.description {
            post.description = description;
        }
        if let Some(category) = request.category {
            post.category = category;
        }
        if let Some(participant_type) = request.participant_type {
            post.participant_type = participant_type;
        }
        if let Some(department) = request.department {
            post.department = department;
        }
        if let Some(media_url) = request.media_url {
            post.media_url = Some(media_url);
        }
        if let Some(status) = request.status.as_deref() {
            post.status = PostStatus::parse(status);
        }
        post.updated_at = Utc::now();

        self.ctx.post_repo().update(&post).await?;

        info!(post_id = %post.id, "Post updated");

        self.hydrate(post).await
    }

    /// Delete a post together with its comments, replies, and likes
    #[instrument(skip(self))]
    pub async fn delete_post(&self, post_id: Uuid) -> ServiceResult<()> {
        self.ctx.post_repo().delete(post_id).await?;
        info!(post_id = %post_id, "Post deleted");
        Ok(())
    }

    /// Like a post on behalf of a user
    ///
    /// A second like from the same user is rejected rather than absorbed.
    #[instrument(skip(self))]
    pub async fn like_post(&self, post_id: Uuid, user_id: Uuid) -> ServiceResult<LikeResponse> {
        self.ensure_post_exists(post_id).await?;

        if !self.ctx.post_like_repo().add(post_id, user_id).await? {
            return Err(ServiceError::Domain(DomainError::AlreadyLiked));
        }

        let likes = self.ctx.post_like_repo().count(post_id).await?;
        Ok(LikeResponse {
            message: "Post liked".to_string(),
            likes,
        })
    }

    /// Remove a user's like from a post
    #[instrument(skip(self))]
    pub async fn unlike_post(&self, post_id: Uuid, user_id: Uuid) -> ServiceResult<LikeResponse> {
        self.ensure_post_exists(post_id).await?;

        if !self.ctx.post_like_repo().remove(post_id, user_id).await? {
            return Err(ServiceError::Domain(DomainError::NotLiked));
        }

        let likes = self.ctx.post_like_repo().count(post_id).await?;
        Ok(LikeResponse {
            message: "Post unliked".to_string(),
            likes,
        })
    }

    /// Record a view and return the new count
    #[instrument(skip(self))]
    pub async fn increment_views(&self, post_id: Uuid) -> ServiceResult<ViewsResponse> {
        let views = self.ctx.post_repo().increment_views(post_id).await?;
        Ok(ViewsResponse { views })
    }

    /// Get the current view count
    #[instrument(skip(self))]
    pub async fn get_views(&self, post_id: Uuid) -> ServiceResult<ViewsResponse> {
        let views = self.ctx.post_repo().get_views(post_id).await?;
        Ok(ViewsResponse { views })
    }

    async fn ensure_post_exists(&self, post_id: Uuid) -> ServiceResult<()> {
        self.ctx
            .post_repo()
            .find_by_id(post_id)
            .await?
            .ok_or(ServiceError::Domain(DomainError::PostNotFound(post_id)))?;
        Ok(())
    }

    async fn hydrate(&self, post: Post) -> ServiceResult<PostResponse> {
        let likes = self.ctx.post_like_repo().count(post.id).await?;
        let comments = self.ctx.comment_repo().list_for_post(post.id).await?;
        let replies = self.ctx.comment_repo().list_replies_for_post(post.id).await?;

        Ok(PostResponse::new(
            &post,
            likes,
            assemble_comments(&comments, &replies),
        ))
    }

    async fn hydrate_all(&self, posts: Vec<Post>) -> ServiceResult<Vec<PostResponse>> {
        let mut responses = Vec::with_capacity(posts.len());
        for post in posts {
            responses.push(self.hydrate(post).await?);
        }
        Ok(responses)
    }
}
