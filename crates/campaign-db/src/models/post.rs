//! Post database models

use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

/// Database model for posts table
#[derive(Debug, Clone, FromRow)]
pub struct PostModel {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub category: String,
    pub participant_type: String,
    pub department: String,
    pub author_name: String,
    pub author_department: String,
    pub media_url: Option<String>,
    pub status: String,
    pub views: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Post row joined with its like and comment counts (reporting query)
#[derive(Debug, Clone, FromRow)]
pub struct PostEngagementModel {
    pub id: Uuid,
    pub title: String,
    pub category: String,
    pub participant_type: String,
    pub department: String,
    pub author_name: String,
    pub author_department: String,
    pub media_url: Option<String>,
    pub likes: i64,
    pub comments: i64,
    pub created_at: DateTime<Utc>,
}

/// Registered head-count per department
#[derive(Debug, Clone, FromRow)]
pub struct DepartmentCountModel {
    pub department: String,
    pub count: i64,
}
