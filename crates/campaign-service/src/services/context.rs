//! Service context - dependency container for services
//!
//! Holds all repositories and other dependencies needed by services.

use std::sync::Arc;

use campaign_common::auth::JwtService;
use campaign_core::traits::{
    CommentLikeRepository, CommentRepository, OtpRepository, PostLikeRepository, PostRepository,
    ReplyLikeRepository, UserRepository,
};
use campaign_db::PgPool;

use super::password_reset::OtpMailer;

/// Service context containing all dependencies
///
/// This is the main dependency container that gets passed to all services.
/// It provides access to:
/// - Database repositories
/// - JWT service for authentication
/// - OTP mailer for password resets
#[derive(Clone)]
pub struct ServiceContext {
    // Database pool
    pool: PgPool,

    // Repositories
    user_repo: Arc<dyn UserRepository>,
    post_repo: Arc<dyn PostRepository>,
    comment_repo: Arc<dyn CommentRepository>,
    post_like_repo: Arc<dyn PostLikeRepository>,
    comment_like_repo: Arc<dyn CommentLikeRepository>,
    reply_like_repo: Arc<dyn ReplyLikeRepository>,
    otp_repo: Arc<dyn OtpRepository>,

    // Services
    jwt_service: Arc<JwtService>,
    otp_mailer: Arc<dyn OtpMailer>,
}

impl ServiceContext {
    /// Create a new service context with all dependencies
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        pool: PgPool,
        user_repo: Arc<dyn UserRepository>,
        post_repo: Arc<dyn PostRepository>,
        comment_repo: Arc<dyn CommentRepository>,
        post_like_repo: Arc<dyn PostLikeRepository>,
        comment_like_repo: Arc<dyn CommentLikeRepository>,
        reply_like_repo: Arc<dyn ReplyLikeRepository>,
        otp_repo: Arc<dyn OtpRepository>,
        jwt_service: Arc<JwtService>,
        otp_mailer: Arc<dyn OtpMailer>,
    ) -> Self {
        Self {
            pool,
            user_repo,
            post_repo,
            comment_repo,
            post_like_repo,
            comment_like_repo,
            reply_like_repo,
            otp_repo,
            jwt_service,
            otp_mailer,
        }
    }

    // === Database Pool ===

    /// Get the PostgreSQL connection pool
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    // === Repositories ===

    /// Get the user repository
    pub fn user_repo(&self) -> &dyn UserRepository {
        self.user_repo.as_ref()
    }

    /// Get the post repository
    pub fn post_repo(&self) -> &dyn PostRepository {
        self.post_repo.as_ref()
    }

    /// Get the comment repository
    pub fn comment_repo(&self) -> &dyn CommentRepository {
        self.comment_repo.as_ref()
    }

    /// Get the post like repository
    pub fn post_like_repo(&self) -> &dyn PostLikeRepository {
        self.post_like_repo.as_ref()
    }

    /// Get the comment like repository
    pub fn comment_like_repo(&self) -> &dyn CommentLikeRepository {
        self.comment_like_repo.as_ref()
    }

    /// Get the reply like repository
    pub fn reply_like_repo(&self) -> &dyn ReplyLikeRepository {
        self.reply_like_repo.as_ref()
    }

    /// Get the password reset OTP repository
    pub fn otp_repo(&self) -> &dyn OtpRepository {
        self.otp_repo.as_ref()
    }

    // === Services ===

    /// Get the JWT service
    pub fn jwt_service(&self) -> &JwtService {
        self.jwt_service.as_ref()
    }

    /// Get the OTP mailer
    pub fn otp_mailer(&self) -> &dyn OtpMailer {
        self.otp_mailer.as_ref()
    }
}

impl std::fmt::Debug for ServiceContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceContext")
            .field("pool", &"PgPool")
            .field("repositories", &"...")
            .finish()
    }
}

/// Builder for creating ServiceContext with custom configuration
pub struct ServiceContextBuilder {
    pool: Option<PgPool>,
    user_repo: Option<Arc<dyn UserRepository>>,
    post_repo: Option<Arc<dyn PostRepository>>,
    comment_repo: Option<Arc<dyn CommentRepository>>,
    post_like_repo: Option<Arc<dyn PostLikeRepository>>,
    comment_like_repo: Option<Arc<dyn CommentLikeRepository>>,
    reply_like_repo: Option<Arc<dyn ReplyLikeRepository>>,
    otp_repo: Option<Arc<dyn OtpRepository>>,
    jwt_service: Option<Arc<JwtService>>,
    otp_mailer: Option<Arc<dyn OtpMailer>>,
}

impl ServiceContextBuilder {
    pub fn new() -> Self {
        Self {
            pool: None,
            user_repo: None,
            post_repo: None,
            comment_repo: None,
            post_like_repo: None,
            comment_like_repo: None,
            reply_like_repo: None,
            otp_repo: None,
            jwt_service: None,
            otp_mailer: None,
        }
    }

    pub fn pool(mut self, pool: PgPool) -> Self {
        self.pool = Some(pool);
        self
    }

    pub fn user_repo(mut self, repo: Arc<dyn UserRepository>) -> Self {
        self.user_repo = Some(repo);
        self
    }

    pub fn post_repo(mut self, repo: Arc<dyn PostRepository>) -> Self {
        self.post_repo = Some(repo);
        self
    }

    pub fn comment_repo(mut self, repo: Arc<dyn CommentRepository>) -> Self {
        self.comment_repo = Some(repo);
        self
    }

    pub fn post_like_repo(mut self, repo: Arc<dyn PostLikeRepository>) -> Self {
        self.post_like_repo = Some(repo);
        self
    }

    pub fn comment_like_repo(mut self, repo: Arc<dyn CommentLikeRepository>) -> Self {
        self.comment_like_repo = Some(repo);
        self
    }

    pub fn reply_like_repo(mut self, repo: Arc<dyn ReplyLikeRepository>) -> Self {
        self.reply_like_repo = Some(repo);
        self
    }

    pub fn otp_repo(mut self, repo: Arc<dyn OtpRepository>) -> Self {
        self.otp_repo = Some(repo);
        self
    }

    pub fn jwt_service(mut self, service: Arc<JwtService>) -> Self {
        self.jwt_service = Some(service);
        self
    }

    pub fn otp_mailer(mut self, mailer: Arc<dyn OtpMailer>) -> Self {
        self.otp_mailer = Some(mailer);
        self
    }

    /// Build the ServiceContext
    ///
    /// # Errors
    /// Returns `ServiceError::Validation` if any required dependency is missing
    pub fn build(self) -> super::error::ServiceResult<ServiceContext> {
        use super::error::ServiceError;

        Ok(ServiceContext::new(
            self.pool
                .ok_or_else(|| ServiceError::validation("pool is required"))?,
            self.user_repo
                .ok_or_else(|| ServiceError::validation("user_repo is required"))?,
            self.post_repo
                .ok_or_else(|| ServiceError::validation("post_repo is required"))?,
            self.comment_repo
                .ok_or_else(|| ServiceError::validation("comment_repo is required"))?,
            self.post_like_repo
                .ok_or_else(|| ServiceError::validation("post_like_repo is required"))?,
            self.comment_like_repo
                .ok_or_else(|| ServiceError::validation("comment_like_repo is required"))?,
            self.reply_like_repo
                .ok_or_else(|| ServiceError::validation("reply_like_repo is required"))?,
            self.otp_repo
                .ok_or_else(|| ServiceError::validation("otp_repo is required"))?,
            self.jwt_service
                .ok_or_else(|| ServiceError::validation("jwt_service is required"))?,
            self.otp_mailer
                .ok_or_else(|| ServiceError::validation("otp_mailer is required"))?,
        ))
    }
}

impl Default for ServiceContextBuilder {
    fn default() -> Self {
        Self::new()
    }
}
