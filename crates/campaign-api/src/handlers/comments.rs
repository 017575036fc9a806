//! Comment and reply handlers
//!
//! Comments hang off posts, replies hang off comments, and both carry
//! their own like sets.

use axum::{extract::State, Json};
use campaign_service::{
    CommentResponse, CommentService, CreateCommentRequest, CreateReplyRequest, LikeResponse,
    ReplyResponse,
};

use crate::extractors::{AuthUser, CommentIdPath, PostIdPath, ReplyIdPath, UuidPath, ValidatedJson};
use crate::response::{ApiResult, Created};
use crate::state::AppState;

/// Comment on a post
///
/// POST /posts/:post_id/comments
pub async fn add_comment(
    State(state): State<AppState>,
    auth: AuthUser,
    UuidPath(path): UuidPath<PostIdPath>,
    ValidatedJson(request): ValidatedJson<CreateCommentRequest>,
) -> ApiResult<Created<Json<CommentResponse>>> {
    let service = CommentService::new(state.service_context());
    let response = service.add_comment(path.post_id, auth.user_id, request).await?;
    Ok(Created(Json(response)))
}

/// Like a comment
///
/// POST /posts/:post_id/comments/:comment_id/like
pub async fn like_comment(
    State(state): State<AppState>,
    auth: AuthUser,
    UuidPath(path): UuidPath<CommentIdPath>,
) -> ApiResult<Json<LikeResponse>> {
    let service = CommentService::new(state.service_context());
    let response = service
        .like_comment(path.post_id, path.comment_id, auth.user_id)
        .await?;
    Ok(Json(response))
}

/// Remove a like from a comment
///
/// DELETE /posts/:post_id/comments/:comment_id/like
pub async fn unlike_comment(
    State(state): State<AppState>,
    auth: AuthUser,
    UuidPath(path): UuidPath<CommentIdPath>,
) -> ApiResult<Json<LikeResponse>> {
    let service = CommentService::new(state.service_context());
    let response = service
        .unlike_comment(path.post_id, path.comment_id, auth.user_id)
        .await?;
    Ok(Json(response))
}

/// Reply to a comment
///
/// POST /posts/:post_id/comments/:comment_id/replies
pub async fn add_reply(
    State(state): State<AppState>,
    auth: AuthUser,
    UuidPath(path): UuidPath<CommentIdPath>,
    ValidatedJson(request): ValidatedJson<CreateReplyRequest>,
) -> ApiResult<Created<Json<ReplyResponse>>> {
    let service = CommentService::new(state.service_context());
    let response = service
        .add_reply(path.post_id, path.comment_id, auth.user_id, request)
        .await?;
    Ok(Created(Json(response)))
}

/// Like a reply
///
/// POST /posts/:post_id/comments/:comment_id/replies/:reply_id/like
pub async fn like_reply(
    State(state): State<AppState>,
    auth: AuthUser,
    UuidPath(path): UuidPath<ReplyIdPath>,
) -> ApiResult<Json<LikeResponse>> {
    let service = CommentService::new(state.service_context());
    let response = service
        .like_reply(path.post_id, path.comment_id, path.reply_id, auth.user_id)
        .await?;
    Ok(Json(response))
}

/// Remove a like from a reply
///
/// DELETE /posts/:post_id/comments/:comment_id/replies/:reply_id/like
pub async fn unlike_reply(
    State(state): State<AppState>,
    auth: AuthUser,
    UuidPath(path): UuidPath<ReplyIdPath>,
) -> ApiResult<Json<LikeResponse>> {
    let service = CommentService::new(state.service_context());
    let response = service
        .unlike_reply(path.post_id, path.comment_id, path.reply_id, auth.user_id)
        .await?;
    Ok(Json(response))
}
