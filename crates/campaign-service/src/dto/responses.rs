//! Response DTOs for API endpoints
//!
//! All response DTOs implement `Serialize` for JSON output. IDs are
//! serialized as strings for JavaScript compatibility.

use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;

use campaign_core::entities::{Comment, Post, Reply, User};
use campaign_core::traits::{CommentWithLikes, ReplyWithLikes};

// ============================================================================
// Common Response Types
// ============================================================================

/// Simple message response
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

// ============================================================================
// Auth Responses
// ============================================================================

/// Authentication response with the bearer token and user profile
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthResponse {
    pub token: String,
    pub token_type: String,
    pub expires_in: i64,
    pub user: UserResponse,
}

impl AuthResponse {
    pub fn new(token: String, expires_in: i64, user: UserResponse) -> Self {
        Self {
            token,
            token_type: "Bearer".to_string(),
            expires_in,
            user,
        }
    }
}

/// User profile response (never includes the password hash)
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    pub id: String,
    pub name: String,
    pub email: String,
    pub employee_id: String,
    pub department: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gender: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_of_birth: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact_no: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl From<&User> for UserResponse {
    fn from(user: &User) -> Self {
        Self {
            id: user.id.to_string(),
            name: user.name.clone(),
            email: user.email.clone(),
            employee_id: user.employee_id.clone(),
            department: user.department.clone(),
            avatar: user.avatar.clone(),
            gender: user.gender.clone(),
            date_of_birth: user.date_of_birth,
            contact_no: user.contact_no.clone(),
            created_at: user.created_at,
        }
    }
}

// ============================================================================
// Post Responses
// ============================================================================

/// Author attribution on a post
#[derive(Debug, Clone, Serialize)]
pub struct AuthorResponse {
    pub name: String,
    pub department: String,
}

/// Reply with its like count
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReplyResponse {
    pub id: String,
    pub comment_id: String,
    pub user_id: String,
    pub author_name: String,
    pub content: String,
    pub likes: i64,
    pub created_at: DateTime<Utc>,
}

impl ReplyResponse {
    pub fn new(reply: &Reply, likes: i64) -> Self {
        Self {
            id: reply.id.to_string(),
            comment_id: reply.comment_id.to_string(),
            user_id: reply.user_id.to_string(),
            author_name: reply.author_name.clone(),
            content: reply.content.clone(),
            likes,
            created_at: reply.created_at,
        }
    }
}

impl From<&ReplyWithLikes> for ReplyResponse {
    fn from(r: &ReplyWithLikes) -> Self {
        Self::new(&r.reply, r.likes)
    }
}

/// Comment with its like count and replies
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CommentResponse {
    pub id: String,
    pub post_id: String,
    pub user_id: String,
    pub author_name: String,
    pub text: String,
    pub likes: i64,
    pub replies: Vec<ReplyResponse>,
    pub created_at: DateTime<Utc>,
}

impl CommentResponse {
    pub fn new(comment: &Comment, likes: i64, replies: Vec<ReplyResponse>) -> Self {
        Self {
            id: comment.id.to_string(),
            post_id: comment.post_id.to_string(),
            user_id: comment.user_id.to_string(),
            author_name: comment.author_name.clone(),
            text: comment.text.clone(),
            likes,
            replies,
            created_at: comment.created_at,
        }
    }
}

/// Full post response with engagement details
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PostResponse {
    pub id: String,
    pub title: String,
    pub description: String,
    pub category: String,
    pub participant_type: String,
    pub department: String,
    pub author: AuthorResponse,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub media_url: Option<String>,
    pub status: String,
    pub views: i64,
    pub likes: i64,
    pub comments: Vec<CommentResponse>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl PostResponse {
    pub fn new(post: &Post, likes: i64, comments: Vec<CommentResponse>) -> Self {
        Self {
            id: post.id.to_string(),
            title: post.title.clone(),
            description: post.description.clone(),
            category: post.category.clone(),
            participant_type: post.participant_type.clone(),
            department: post.department.clone(),
            author: AuthorResponse {
                name: post.author.name.clone(),
                department: post.author.department.clone(),
            },
            media_url: post.media_url.clone(),
            status: post.status.as_str().to_string(),
            views: post.views,
            likes,
            comments,
            created_at: post.created_at,
            updated_at: post.updated_at,
        }
    }
}

/// Response after a like or unlike operation
#[derive(Debug, Serialize)]
pub struct LikeResponse {
    pub message: String,
    pub likes: i64,
}

/// Current view count of a post
#[derive(Debug, Serialize)]
pub struct ViewsResponse {
    pub views: i64,
}

/// Helper to assemble comment responses from flat comment and reply lists
pub fn assemble_comments(
    comments: &[CommentWithLikes],
    replies: &[ReplyWithLikes],
) -> Vec<CommentResponse> {
    comments
        .iter()
        .map(|c| {
            let own_replies = replies
                .iter()
                .filter(|r| r.reply.comment_id == c.comment.id)
                .map(ReplyResponse::from)
                .collect();
            CommentResponse::new(&c.comment, c.likes, own_replies)
        })
        .collect()
}

// ============================================================================
// Leaderboard Responses
// ============================================================================

/// Department standing on the leaderboard
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DepartmentLeaderboardEntry {
    pub rank: usize,
    pub department: String,
    pub submissions: i64,
    pub likes: i64,
    pub participants: usize,
    /// Likes per submission, as a rounded percentage
    pub engagement: i64,
}

/// Individual standing on the leaderboard
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IndividualLeaderboardEntry {
    pub rank: usize,
    pub name: String,
    pub department: String,
    pub submissions: i64,
    pub likes: i64,
    pub badge: String,
}

/// Leading author per category
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryLeaderEntry {
    pub category: String,
    pub submissions: i64,
    pub likes: i64,
    pub leader: String,
}

/// Published submissions over the trailing seven days
#[derive(Debug, Serialize)]
pub struct WeeklySubmissionsResponse {
    pub count: i64,
}

// ============================================================================
// Health Responses
// ============================================================================

/// Liveness response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

impl HealthResponse {
    #[must_use]
    pub fn healthy() -> Self {
        Self {
            status: "ok".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}

/// Per-dependency readiness checks
#[derive(Debug, Serialize)]
pub struct HealthChecks {
    pub database: String,
}

/// Readiness response
#[derive(Debug, Serialize)]
pub struct ReadinessResponse {
    pub status: String,
    pub checks: HealthChecks,
}

impl ReadinessResponse {
    #[must_use]
    pub fn ready(database_healthy: bool) -> Self {
        let check = |healthy: bool| {
            if healthy {
                "ok".to_string()
            } else {
                "unavailable".to_string()
            }
        };
        Self {
            status: if database_healthy { "ready" } else { "not_ready" }.to_string(),
            checks: HealthChecks {
                database: check(database_healthy),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use campaign_core::value_objects::PostAuthor;
    use uuid::Uuid;

    #[test]
    fn test_assemble_comments_groups_replies() {
        let post_id = Uuid::new_v4();
        let user_id = Uuid::new_v4();
        let first = Comment::new(post_id, user_id, "A".to_string(), "first".to_string());
        let second = Comment::new(post_id, user_id, "B".to_string(), "second".to_string());
        let reply = Reply::new(first.id, user_id, "B".to_string(), "re: first".to_string());

        let comments = vec![
            CommentWithLikes {
                comment: first.clone(),
                likes: 2,
            },
            CommentWithLikes {
                comment: second,
                likes: 0,
            },
        ];
        let replies = vec![ReplyWithLikes { reply, likes: 1 }];

        let assembled = assemble_comments(&comments, &replies);
        assert_eq!(assembled.len(), 2);
        assert_eq!(assembled[0].likes, 2);
        assert_eq!(assembled[0].replies.len(), 1);
        assert_eq!(assembled[0].replies[0].likes, 1);
        assert!(assembled[1].replies.is_empty());
    }

    #[test]
    fn test_post_response_carries_engagement() {
        let post = Post::new(
            "Entry".to_string(),
            "desc".to_string(),
            "Art".to_string(),
            "Individual".to_string(),
            "Sales".to_string(),
            PostAuthor::new("Asha".to_string(), "Sales".to_string()),
        );
        let response = PostResponse::new(&post, 7, Vec::new());
        assert_eq!(response.likes, 7);
        assert_eq!(response.status, "published");
        assert!(response.comments.is_empty());
    }
}
