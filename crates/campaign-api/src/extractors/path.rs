//! Path parameter extractors
//!
//! Type-safe extraction of UUID identifiers from path parameters.

use axum::{
    async_trait,
    extract::{FromRequestParts, Path},
    http::request::Parts,
};
use serde::de::DeserializeOwned;
use uuid::Uuid;

use crate::response::ApiError;

/// Extract path parameters with a consistent error response
///
/// Wraps `axum::extract::Path` so malformed UUIDs surface as the API's
/// standard 400 body instead of axum's plain-text rejection.
#[derive(Debug, Clone)]
pub struct UuidPath<T>(pub T);

#[async_trait]
impl<S, T> FromRequestParts<S> for UuidPath<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Send,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(inner) = Path::<T>::from_request_parts(parts, state)
            .await
            .map_err(|e| ApiError::invalid_path(e.to_string()))?;

        Ok(UuidPath(inner))
    }
}

/// Path parameters with post_id
#[derive(Debug, serde::Deserialize)]
pub struct PostIdPath {
    pub post_id: Uuid,
}

/// Path parameters addressing a comment within a post
///
/// Both segments are carried so handlers can verify the comment actually
/// belongs to the addressed post.
#[derive(Debug, serde::Deserialize)]
pub struct CommentIdPath {
    pub post_id: Uuid,
    pub comment_id: Uuid,
}

/// Path parameters addressing a reply within a comment thread
#[derive(Debug, serde::Deserialize)]
pub struct ReplyIdPath {
    pub post_id: Uuid,
    pub comment_id: Uuid,
    pub reply_id: Uuid,
}
