//! Route definitions
//!
//! All API routes organized by domain and mounted under /api/v1.

use axum::{
    routing::{delete, get, patch, post},
    Router,
};

use crate::handlers::{auth, comments, health, leaderboard, password, posts, stats};
use crate::state::AppState;

/// Create the main API router with all routes (excluding health for separate middleware handling)
pub fn create_router() -> Router<AppState> {
    Router::new()
        // API v1 endpoints
        .nest("/api/v1", api_v1_routes())
}

/// Health check routes (exported separately to bypass rate limiting)
pub fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check))
}

/// API v1 routes
fn api_v1_routes() -> Router<AppState> {
    Router::new()
        .merge(auth_routes())
        .merge(password_routes())
        .merge(post_routes())
        .merge(leaderboard_routes())
        .merge(stats_routes())
}

/// Authentication routes
fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/auth/register", post(auth::register))
        .route("/auth/login", post(auth::login))
}

/// Password reset routes
fn password_routes() -> Router<AppState> {
    Router::new()
        .route("/password/request", post(password::request_otp))
        .route("/password/verify", post(password::verify_otp))
        .route("/password/reset", post(password::reset_password))
}

/// Post routes: CRUD, views, likes, comments, replies
fn post_routes() -> Router<AppState> {
    Router::new()
        // Post CRUD
        .route("/posts", post(posts::create_post))
        .route("/posts", get(posts::list_posts))
        .route("/posts/category/:category", get(posts::list_posts_by_category))
        .route("/posts/user/:name", get(posts::list_posts_by_author))
        .route("/posts/:post_id", get(posts::get_post))
        .route("/posts/:post_id", patch(posts::update_post))
        .route("/posts/:post_id", delete(posts::delete_post))
        // Views
        .route("/posts/:post_id/views", post(posts::increment_views))
        .route("/posts/:post_id/views", get(posts::get_views))
        // Post likes
        .route("/posts/:post_id/like", post(posts::like_post))
        .route("/posts/:post_id/like", delete(posts::unlike_post))
        // Comments
        .route("/posts/:post_id/comments", post(comments::add_comment))
        .route(
            "/posts/:post_id/comments/:comment_id/like",
            post(comments::like_comment),
        )
        .route(
            "/posts/:post_id/comments/:comment_id/like",
            delete(comments::unlike_comment),
        )
        // Replies
        .route(
            "/posts/:post_id/comments/:comment_id/replies",
            post(comments::add_reply),
        )
        .route(
            "/posts/:post_id/comments/:comment_id/replies/:reply_id/like",
            post(comments::like_reply),
        )
        .route(
            "/posts/:post_id/comments/:comment_id/replies/:reply_id/like",
            delete(comments::unlike_reply),
        )
}

/// Leaderboard routes
fn leaderboard_routes() -> Router<AppState> {
    Router::new()
        .route("/leaderboard/departments", get(leaderboard::departments))
        .route("/leaderboard/individuals", get(leaderboard::individuals))
        .route("/leaderboard/categories", get(leaderboard::categories))
        .route(
            "/leaderboard/submissionsThisWeek",
            get(leaderboard::submissions_this_week),
        )
}

/// Stats export routes (xlsx downloads)
fn stats_routes() -> Router<AppState> {
    Router::new()
        .route("/stats/getStats", get(stats::get_stats))
        .route(
            "/stats/getStatsByParticipantType",
            get(stats::get_stats_by_participant_type),
        )
        .route("/stats/getUserStats", get(stats::get_user_stats))
        .route("/stats/getEntryStats", get(stats::get_entry_stats))
        .route("/stats/getPostsStats", get(stats::get_posts_stats))
}
