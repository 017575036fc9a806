//! Post handlers
//!
//! CRUD for campaign submissions plus likes and the view counter.

use axum::{
    extract::{Path, State},
    Json,
};
use campaign_service::{
    CreatePostRequest, LikeResponse, PostResponse, PostService, UpdatePostRequest, ViewsResponse,
};

use crate::extractors::{AuthUser, OptionalAuthUser, PostIdPath, UuidPath, ValidatedJson};
use crate::response::{ApiResult, Created, NoContent};
use crate::state::AppState;

/// Create a new post
///
/// POST /posts
pub async fn create_post(
    State(state): State<AppState>,
    _auth: AuthUser,
    ValidatedJson(request): ValidatedJson<CreatePostRequest>,
) -> ApiResult<Created<Json<PostResponse>>> {
    let service = PostService::new(state.service_context());
    let response = service.create_post(request).await?;
    Ok(Created(Json(response)))
}

/// List all posts, newest first
///
/// GET /posts
pub async fn list_posts(State(state): State<AppState>) -> ApiResult<Json<Vec<PostResponse>>> {
    let service = PostService::new(state.service_context());
    let response = service.list_posts().await?;
    Ok(Json(response))
}

/// Get a single post with comments and like counts
///
/// GET /posts/:post_id
pub async fn get_post(
    State(state): State<AppState>,
    UuidPath(path): UuidPath<PostIdPath>,
) -> ApiResult<Json<PostResponse>> {
    let service = PostService::new(state.service_context());
    let response = service.get_post(path.post_id).await?;
    Ok(Json(response))
}

/// List posts in a category
///
/// GET /posts/category/:category
pub async fn list_posts_by_category(
    State(state): State<AppState>,
    Path(category): Path<String>,
) -> ApiResult<Json<Vec<PostResponse>>> {
    let service = PostService::new(state.service_context());
    let response = service.list_posts_by_category(&category).await?;
    Ok(Json(response))
}

/// List posts by author name
///
/// GET /posts/user/:name
pub async fn list_posts_by_author(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> ApiResult<Json<Vec<PostResponse>>> {
    let service = PostService::new(state.service_context());
    let response = service.list_posts_by_author(&name).await?;
    Ok(Json(response))
}

/// Update a post
///
/// PATCH /posts/:post_id
pub async fn update_post(
    State(state): State<AppState>,
    _auth: AuthUser,
    UuidPath(path): UuidPath<PostIdPath>,
    ValidatedJson(request): ValidatedJson<UpdatePostRequest>,
) -> ApiResult<Json<PostResponse>> {
    let service = PostService::new(state.service_context());
    let response = service.update_post(path.post_id, request).await?;
    Ok(Json(response))
}

/// Delete a post
///
/// DELETE /posts/:post_id
pub async fn delete_post(
    State(state): State<AppState>,
    _auth: AuthUser,
    UuidPath(path): UuidPath<PostIdPath>,
) -> ApiResult<NoContent> {
    let service = PostService::new(state.service_context());
    service.delete_post(path.post_id).await?;
    Ok(NoContent)
}

/// Like a post
///
/// POST /posts/:post_id/like
pub async fn like_post(
    State(state): State<AppState>,
    auth: AuthUser,
    UuidPath(path): UuidPath<PostIdPath>,
) -> ApiResult<Json<LikeResponse>> {
    let service = PostService::new(state.service_context());
    let response = service.like_post(path.post_id, auth.user_id).await?;
    Ok(Json(response))
}

/// Remove a like from a post
///
/// DELETE /posts/:post_id/like
pub async fn unlike_post(
    State(state): State<AppState>,
    auth: AuthUser,
    UuidPath(path): UuidPath<PostIdPath>,
) -> ApiResult<Json<LikeResponse>> {
    let service = PostService::new(state.service_context());
    let response = service.unlike_post(path.post_id, auth.user_id).await?;
    Ok(Json(response))
}

/// Record a view
///
/// POST /posts/:post_id/views
///
/// Views are counted for anonymous visitors too, so auth is optional here.
pub async fn increment_views(
    State(state): State<AppState>,
    viewer: OptionalAuthUser,
    UuidPath(path): UuidPath<PostIdPath>,
) -> ApiResult<Json<ViewsResponse>> {
    if let OptionalAuthUser(Some(user)) = &viewer {
        tracing::debug!(post_id = %path.post_id, user_id = %user.user_id, "Authenticated view");
    }
    let service = PostService::new(state.service_context());
    let response = service.increment_views(path.post_id).await?;
    Ok(Json(response))
}

/// Get the view count
///
/// GET /posts/:post_id/views
pub async fn get_views(
    State(state): State<AppState>,
    UuidPath(path): UuidPath<PostIdPath>,
) -> ApiResult<Json<ViewsResponse>> {
    let service = PostService::new(state.service_context());
    let response = service.get_views(path.post_id).await?;
    Ok(Json(response))
}
