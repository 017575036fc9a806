//! Post entity - a user-submitted campaign entry

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::value_objects::PostAuthor;

/// Publication status of a post
///
/// Only `Published` posts participate in leaderboards and the weekly
/// submission count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PostStatus {
    #[default]
    Published,
    Draft,
}

impl PostStatus {
    /// Database/string representation
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Published => "published",
            Self::Draft => "draft",
        }
    }

    /// Parse from the stored string form, defaulting to `Published`
    pub fn parse(s: &str) -> Self {
        match s {
            "draft" => Self::Draft,
            _ => Self::Published,
        }
    }

    #[inline]
    pub fn is_published(self) -> bool {
        matches!(self, Self::Published)
    }
}

/// Post entity
///
/// Likes are not embedded here; they live in a dedicated set keyed by
/// `(post_id, user_id)` so membership mutations are atomic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Post {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub category: String,
    pub participant_type: String,
    pub department: String,
    pub author: PostAuthor,
    pub media_url: Option<String>,
    pub status: PostStatus,
    pub views: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Post {
    /// Create a new Post with required fields
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        title: String,
        description: String,
        category: String,
        participant_type: String,
        department: String,
        author: PostAuthor,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            title,
            description,
            category,
            participant_type,
            department,
            author,
            media_url: None,
            status: PostStatus::default(),
            views: 0,
            created_at: now,
            updated_at: now,
        }
    }

    /// Attach a media URL
    pub fn with_media_url(mut self, media_url: Option<String>) -> Self {
        self.media_url = media_url;
        self
    }

    /// Set the publication status
    pub fn with_status(mut self, status: PostStatus) -> Self {
        self.status = status;
        self
    }
}
