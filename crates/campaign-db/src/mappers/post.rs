//! Post entity <-> model mappers

use campaign_core::entities::{Post, PostStatus};
use campaign_core::traits::PostEngagement;
use campaign_core::value_objects::PostAuthor;

use crate::models::{PostEngagementModel, PostModel};

/// Convert PostModel to Post entity
impl From<PostModel> for Post {
    fn from(model: PostModel) -> Self {
        Post {
            id: model.id,
            title: model.title,
            description: model.description,
            category: model.category,
            participant_type: model.participant_type,
            department: model.department,
            author: PostAuthor::new(model.author_name, model.author_department),
            media_url: model.media_url,
            status: PostStatus::parse(&model.status),
            views: model.views,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}

/// Convert PostEngagementModel to the reporting snapshot type
impl From<PostEngagementModel> for PostEngagement {
    fn from(model: PostEngagementModel) -> Self {
        PostEngagement {
            id: model.id,
            title: model.title,
            category: model.category,
            participant_type: model.participant_type,
            department: model.department,
            author: PostAuthor::new(model.author_name, model.author_department),
            media_url: model.media_url,
            likes: model.likes,
            comments: model.comments,
            created_at: model.created_at,
        }
    }
}
