//! Repository traits (ports) - define the interface for data access
//!
//! The domain layer defines what it needs; the infrastructure layer
//! provides the implementation.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::entities::{Comment, PasswordOtp, Post, Reply, User};
use crate::error::DomainError;
use crate::value_objects::PostAuthor;

/// Result type for repository operations
pub type RepoResult<T> = Result<T, DomainError>;

// ============================================================================
// User Repository
// ============================================================================

#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find user by ID
    async fn find_by_id(&self, id: Uuid) -> RepoResult<Option<User>>;

    /// Find user by normalized email
    async fn find_by_email(&self, email: &str) -> RepoResult<Option<User>>;

    /// Check if email or employee id is already taken
    async fn identity_exists(&self, email: &str, employee_id: &str) -> RepoResult<bool>;

    /// Create a new user
    async fn create(&self, user: &User, password_hash: &str) -> RepoResult<()>;

    /// Get password hash for authentication, keyed by normalized email
    async fn get_password_hash(&self, email: &str) -> RepoResult<Option<String>>;

    /// Update password hash, keyed by normalized email
    async fn update_password(&self, email: &str, password_hash: &str) -> RepoResult<()>;

    /// Snapshot of all registered users, for reporting
    async fn list_all(&self) -> RepoResult<Vec<User>>;

    /// Sorted distinct departments across registered users
    async fn distinct_departments(&self) -> RepoResult<Vec<String>>;

    /// Registered head-count per department
    async fn count_by_department(&self) -> RepoResult<Vec<(String, i64)>>;
}

// ============================================================================
// Post Repository
// ============================================================================

/// Post row joined with its like and comment counts
///
/// One reporting query feeds the leaderboard and every spreadsheet export,
/// so the counts are computed store-side rather than by walking child rows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostEngagement {
    pub id: Uuid,
    pub title: String,
    pub category: String,
    pub participant_type: String,
    pub department: String,
    pub author: PostAuthor,
    pub media_url: Option<String>,
    pub likes: i64,
    pub comments: i64,
    pub created_at: DateTime<Utc>,
}

#[async_trait]
pub trait PostRepository: Send + Sync {
    /// Find post by ID
    async fn find_by_id(&self, id: Uuid) -> RepoResult<Option<Post>>;

    /// List all posts, newest first
    async fn list(&self) -> RepoResult<Vec<Post>>;

    /// List posts in a category, newest first
    async fn list_by_category(&self, category: &str) -> RepoResult<Vec<Post>>;

    /// List posts by author name, newest first
    async fn list_by_author_name(&self, name: &str) -> RepoResult<Vec<Post>>;

    /// Create a new post
    async fn create(&self, post: &Post) -> RepoResult<()>;

    /// Update an existing post
    async fn update(&self, post: &Post) -> RepoResult<()>;

    /// Delete a post and its comment tree
    async fn delete(&self, id: Uuid) -> RepoResult<()>;

    /// Atomically bump the view counter, returning the new value
    async fn increment_views(&self, id: Uuid) -> RepoResult<i64>;

    /// Current view counter
    async fn get_views(&self, id: Uuid) -> RepoResult<i64>;

    /// Sorted distinct categories across all posts
    async fn distinct_categories(&self) -> RepoResult<Vec<String>>;

    /// Sorted distinct participant types across all posts
    async fn distinct_participant_types(&self) -> RepoResult<Vec<String>>;

    /// Published posts with like/comment counts, newest first
    async fn list_published_engagement(&self) -> RepoResult<Vec<PostEngagement>>;

    /// All posts (any status) with like/comment counts, newest first
    async fn list_engagement(&self) -> RepoResult<Vec<PostEngagement>>;

    /// Count of published posts created at or after the given instant
    async fn count_published_since(&self, since: DateTime<Utc>) -> RepoResult<i64>;
}

// ============================================================================
// Like Repositories
// ============================================================================

/// Like-set on posts, keyed `(post_id, user_id)`
///
/// `add` and `remove` are single atomic statements; the boolean return says
/// whether membership actually changed, which is how double-likes are
/// detected without a read-modify-write race.
#[async_trait]
pub trait PostLikeRepository: Send + Sync {
    /// Add a user to the like-set; false if already present
    async fn add(&self, post_id: Uuid, user_id: Uuid) -> RepoResult<bool>;

    /// Remove a user from the like-set; false if not present
    async fn remove(&self, post_id: Uuid, user_id: Uuid) -> RepoResult<bool>;

    /// Size of the like-set
    async fn count(&self, post_id: Uuid) -> RepoResult<i64>;
}

/// Like-set on comments, keyed `(comment_id, user_id)`
#[async_trait]
pub trait CommentLikeRepository: Send + Sync {
    async fn add(&self, comment_id: Uuid, user_id: Uuid) -> RepoResult<bool>;
    async fn remove(&self, comment_id: Uuid, user_id: Uuid) -> RepoResult<bool>;
    async fn count(&self, comment_id: Uuid) -> RepoResult<i64>;
}

/// Like-set on replies, keyed `(reply_id, user_id)`
#[async_trait]
pub trait ReplyLikeRepository: Send + Sync {
    async fn add(&self, reply_id: Uuid, user_id: Uuid) -> RepoResult<bool>;
    async fn remove(&self, reply_id: Uuid, user_id: Uuid) -> RepoResult<bool>;
    async fn count(&self, reply_id: Uuid) -> RepoResult<i64>;
}

// ============================================================================
// Comment Repository
// ============================================================================

/// Comment joined with its like count
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommentWithLikes {
    pub comment: Comment,
    pub likes: i64,
}

/// Reply joined with its like count
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReplyWithLikes {
    pub reply: Reply,
    pub likes: i64,
}

#[async_trait]
pub trait CommentRepository: Send + Sync {
    /// Find comment by ID
    async fn find_by_id(&self, id: Uuid) -> RepoResult<Option<Comment>>;

    /// Create a new comment
    async fn create(&self, comment: &Comment) -> RepoResult<()>;

    /// Ordered comments for a post, with like counts
    async fn list_for_post(&self, post_id: Uuid) -> RepoResult<Vec<CommentWithLikes>>;

    /// Find reply by ID
    async fn find_reply_by_id(&self, id: Uuid) -> RepoResult<Option<Reply>>;

    /// Create a new reply
    async fn create_reply(&self, reply: &Reply) -> RepoResult<()>;

    /// Ordered replies for every comment on a post, with like counts
    async fn list_replies_for_post(&self, post_id: Uuid) -> RepoResult<Vec<ReplyWithLikes>>;
}

// ============================================================================
// OTP Repository
// ============================================================================

#[async_trait]
pub trait OtpRepository: Send + Sync {
    /// Persist a freshly issued code
    async fn create(&self, otp: &PasswordOtp) -> RepoResult<()>;

    /// Drop every code issued for an email (a new request supersedes them)
    async fn delete_for_email(&self, email: &str) -> RepoResult<()>;

    /// Find an unexpired code for an email; expiry is a query predicate
    async fn find_active(&self, email: &str, code: &str) -> RepoResult<Option<PasswordOtp>>;

    /// Mark a code as verified
    async fn mark_verified(&self, id: Uuid) -> RepoResult<()>;

    /// Find a verified, unexpired code for an email
    async fn find_verified(&self, email: &str) -> RepoResult<Option<PasswordOtp>>;

    /// Consume a code after a successful reset
    async fn delete(&self, id: Uuid) -> RepoResult<()>;
}
