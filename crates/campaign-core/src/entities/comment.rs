//! Comment and Reply entities - threaded feedback on posts

use chrono::{DateTime, Utc};
use uuid::Uuid;

/// Comment entity
///
/// Like-sets for comments live in a `(comment_id, user_id)` keyed table,
/// mirroring post likes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Comment {
    pub id: Uuid,
    pub post_id: Uuid,
    pub user_id: Uuid,
    pub author_name: String,
    pub text: String,
    pub created_at: DateTime<Utc>,
}

impl Comment {
    /// Create a new Comment
    pub fn new(post_id: Uuid, user_id: Uuid, author_name: String, text: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            post_id,
            user_id,
            author_name,
            text,
            created_at: Utc::now(),
        }
    }
}

/// Reply entity - a second-level response nested under a comment
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    pub id: Uuid,
    pub comment_id: Uuid,
    pub user_id: Uuid,
    pub author_name: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

impl Reply {
    /// Create a new Reply
    pub fn new(comment_id: Uuid, user_id: Uuid, author_name: String, content: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            comment_id,
            user_id,
            author_name,
            content,
            created_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_comment_creation() {
        let post_id = Uuid::new_v4();
        let user_id = Uuid::new_v4();
        let comment = Comment::new(post_id, user_id, "Jane".to_string(), "Nice!".to_string());
        assert_eq!(comment.post_id, post_id);
        assert_eq!(comment.user_id, user_id);
    }

    #[test]
    fn test_reply_belongs_to_comment() {
        let comment = Comment::new(
            Uuid::new_v4(),
            Uuid::new_v4(),
            "Jane".to_string(),
            "Nice!".to_string(),
        );
        let reply = Reply::new(
            comment.id,
            Uuid::new_v4(),
            "John".to_string(),
            "Agreed".to_string(),
        );
        assert_eq!(reply.comment_id, comment.id);
    }
}
