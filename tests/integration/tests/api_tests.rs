//! API Integration Tests
//!
//! These tests require:
//! - Running PostgreSQL instance
//! - Environment variables: DATABASE_URL (JWT_SECRET optional)
//!
//! Run with: cargo test -p integration-tests --test api_tests

use integration_tests::{assert_json, assert_status, check_test_env, fixtures::*, TestServer};
use reqwest::StatusCode;

/// Register a user and return the auth payload
async fn register_user(server: &TestServer) -> (RegisterRequest, AuthResponse) {
    let request = RegisterRequest::unique();
    let response = server
        .post("/api/v1/auth/register", &request)
        .await
        .unwrap();
    let auth: AuthResponse = assert_json(response, StatusCode::CREATED).await.unwrap();
    (request, auth)
}

/// Register a user and create a post authored by them
async fn create_post(server: &TestServer) -> (AuthResponse, PostResponse) {
    let (register_req, auth) = register_user(server).await;
    let post_req = CreatePostRequest::unique_for(&register_req);
    let response = server
        .post_auth("/api/v1/posts", &auth.token, &post_req)
        .await
        .unwrap();
    let post: PostResponse = assert_json(response, StatusCode::CREATED).await.unwrap();
    (auth, post)
}

// ============================================================================
// Health Check Tests
// ============================================================================

#[tokio::test]
async fn test_health_check() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/health").await.expect("Request failed");
    assert_status(response, StatusCode::OK).await.unwrap();
}

#[tokio::test]
async fn test_health_ready() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/health/ready").await.expect("Request failed");
    assert_status(response, StatusCode::OK).await.unwrap();
}

// ============================================================================
// Auth Tests
// ============================================================================

#[tokio::test]
async fn test_register_user() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let request = RegisterRequest::unique();

    let response = server
        .post("/api/v1/auth/register", &request)
        .await
        .unwrap();
    let auth: AuthResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    assert_eq!(auth.user.name, request.name);
    assert_eq!(auth.user.email, request.email.to_lowercase());
    assert_eq!(auth.token_type, "Bearer");
    assert!(auth.expires_in > 0);
    assert!(!auth.token.is_empty());
}

#[tokio::test]
async fn test_register_duplicate_email() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let request = RegisterRequest::unique();

    // First registration
    server
        .post("/api/v1/auth/register", &request)
        .await
        .unwrap();

    // Second registration with same email
    let response = server
        .post("/api/v1/auth/register", &request)
        .await
        .unwrap();
    assert_status(response, StatusCode::CONFLICT).await.unwrap();
}

#[tokio::test]
async fn test_login() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");

    // Register first
    let (register_req, _) = register_user(&server).await;

    // Login
    let login_req = LoginRequest::from_register(&register_req);
    let response = server.post("/api/v1/auth/login", &login_req).await.unwrap();
    let auth: AuthResponse = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(auth.user.name, register_req.name);
    assert!(!auth.token.is_empty());
}

#[tokio::test]
async fn test_login_invalid_credentials() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let login_req = LoginRequest {
        email: "nonexistent@example.com".to_string(),
        password: "wrongpass".to_string(),
    };

    let response = server.post("/api/v1/auth/login", &login_req).await.unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED)
        .await
        .unwrap();
}

// ============================================================================
// Password Reset Tests
// ============================================================================

#[tokio::test]
async fn test_password_request_unknown_email() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let body = serde_json::json!({ "email": "nobody@example.com" });

    let response = server.post("/api/v1/password/request", &body).await.unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();
}

#[tokio::test]
async fn test_password_request_known_email() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (register_req, _) = register_user(&server).await;

    let body = serde_json::json!({ "email": register_req.email });
    let response = server.post("/api/v1/password/request", &body).await.unwrap();
    let msg: MessageResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(msg.message, "OTP sent to email");
}

#[tokio::test]
async fn test_password_verify_invalid_code() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (register_req, _) = register_user(&server).await;

    // Request a code, then verify with the wrong one
    let body = serde_json::json!({ "email": register_req.email });
    server.post("/api/v1/password/request", &body).await.unwrap();

    let body = serde_json::json!({ "email": register_req.email, "otp": "000000" });
    let response = server.post("/api/v1/password/verify", &body).await.unwrap();
    assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();
}

// ============================================================================
// Post Tests
// ============================================================================

#[tokio::test]
async fn test_create_post_requires_auth() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let register_req = RegisterRequest::unique();
    let post_req = CreatePostRequest::unique_for(&register_req);

    let response = server.post("/api/v1/posts", &post_req).await.unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED)
        .await
        .unwrap();
}

#[tokio::test]
async fn test_create_and_get_post() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (auth, post) = create_post(&server).await;

    assert_eq!(post.status, "published");
    assert_eq!(post.likes, 0);

    let response = server
        .get_auth(&format!("/api/v1/posts/{}", post.id), &auth.token)
        .await
        .unwrap();
    let fetched: PostResponse = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(fetched.id, post.id);
    assert_eq!(fetched.title, post.title);
}

#[tokio::test]
async fn test_get_post_not_found() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server
        .get(&format!("/api/v1/posts/{}", uuid::Uuid::new_v4()))
        .await
        .unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();
}

#[tokio::test]
async fn test_update_post() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (auth, post) = create_post(&server).await;

    let update = UpdatePostRequest {
        title: Some("Updated Title".to_string()),
        status: Some("draft".to_string()),
        ..Default::default()
    };
    let response = server
        .patch_auth(&format!("/api/v1/posts/{}", post.id), &auth.token, &update)
        .await
        .unwrap();
    let updated: PostResponse = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(updated.title, "Updated Title");
    assert_eq!(updated.status, "draft");
}

#[tokio::test]
async fn test_delete_post() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (auth, post) = create_post(&server).await;

    let response = server
        .delete_auth(&format!("/api/v1/posts/{}", post.id), &auth.token)
        .await
        .unwrap();
    assert_status(response, StatusCode::NO_CONTENT).await.unwrap();

    let response = server
        .get(&format!("/api/v1/posts/{}", post.id))
        .await
        .unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();
}

#[tokio::test]
async fn test_like_post_twice_rejected() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (auth, post) = create_post(&server).await;
    let path = format!("/api/v1/posts/{}/like", post.id);

    // First like succeeds
    let response = server.post_auth(&path, &auth.token, &()).await.unwrap();
    let like: LikeResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(like.likes, 1);

    // Second like by the same user answers 400; count unchanged
    let response = server.post_auth(&path, &auth.token, &()).await.unwrap();
    assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();

    let response = server
        .get(&format!("/api/v1/posts/{}", post.id))
        .await
        .unwrap();
    let fetched: PostResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(fetched.likes, 1);
}

#[tokio::test]
async fn test_unlike_post() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (auth, post) = create_post(&server).await;
    let path = format!("/api/v1/posts/{}/like", post.id);

    server.post_auth(&path, &auth.token, &()).await.unwrap();

    let response = server.delete_auth(&path, &auth.token).await.unwrap();
    let like: LikeResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(like.likes, 0);

    // Removing a like that is not there answers 400
    let response = server.delete_auth(&path, &auth.token).await.unwrap();
    assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();
}

#[tokio::test]
async fn test_view_counter() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_, post) = create_post(&server).await;
    let path = format!("/api/v1/posts/{}/views", post.id);

    // Views count for anonymous visitors too
    let response = server.post(&path, &()).await.unwrap();
    let views: ViewsResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(views.views, 1);

    let response = server.get(&path).await.unwrap();
    let views: ViewsResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(views.views, 1);
}

// ============================================================================
// Comment Tests
// ============================================================================

#[tokio::test]
async fn test_comment_and_reply() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (auth, post) = create_post(&server).await;

    // Comment on the post
    let comment_req = CreateCommentRequest {
        text: "Great entry!".to_string(),
    };
    let response = server
        .post_auth(
            &format!("/api/v1/posts/{}/comments", post.id),
            &auth.token,
            &comment_req,
        )
        .await
        .unwrap();
    let comment: CommentResponse = assert_json(response, StatusCode::CREATED).await.unwrap();
    assert_eq!(comment.text, "Great entry!");
    assert_eq!(comment.author_name, auth.user.name);

    // Reply to the comment
    let reply_req = CreateReplyRequest {
        content: "Thanks!".to_string(),
    };
    let response = server
        .post_auth(
            &format!(
                "/api/v1/posts/{}/comments/{}/replies",
                post.id, comment.id
            ),
            &auth.token,
            &reply_req,
        )
        .await
        .unwrap();
    let reply: ReplyResponse = assert_json(response, StatusCode::CREATED).await.unwrap();
    assert_eq!(reply.content, "Thanks!");
    assert_eq!(reply.comment_id, comment.id);

    // The post now carries the comment tree
    let response = server
        .get(&format!("/api/v1/posts/{}", post.id))
        .await
        .unwrap();
    let fetched: PostResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(fetched.comments.len(), 1);
    assert_eq!(fetched.comments[0].replies.len(), 1);
}

#[tokio::test]
async fn test_like_comment() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (auth, post) = create_post(&server).await;

    let comment_req = CreateCommentRequest {
        text: "Nice work".to_string(),
    };
    let response = server
        .post_auth(
            &format!("/api/v1/posts/{}/comments", post.id),
            &auth.token,
            &comment_req,
        )
        .await
        .unwrap();
    let comment: CommentResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    let path = format!(
        "/api/v1/posts/{}/comments/{}/like",
        post.id, comment.id
    );
    let response = server.post_auth(&path, &auth.token, &()).await.unwrap();
    let like: LikeResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(like.likes, 1);
    assert_eq!(like.message, "Comment liked");
}

#[tokio::test]
async fn test_comment_operations_check_post_linkage() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (auth, post) = create_post(&server).await;
    let (_, other_post) = create_post(&server).await;

    let comment_req = CreateCommentRequest {
        text: "Belongs to the first post".to_string(),
    };
    let response = server
        .post_auth(
            &format!("/api/v1/posts/{}/comments", post.id),
            &auth.token,
            &comment_req,
        )
        .await
        .unwrap();
    let comment: CommentResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    // Addressing the comment through another post's URL is a 404
    let foreign_like = format!(
        "/api/v1/posts/{}/comments/{}/like",
        other_post.id, comment.id
    );
    let response = server.post_auth(&foreign_like, &auth.token, &()).await.unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();

    let reply_req = CreateReplyRequest {
        content: "Stray reply".to_string(),
    };
    let foreign_reply = format!(
        "/api/v1/posts/{}/comments/{}/replies",
        other_post.id, comment.id
    );
    let response = server
        .post_auth(&foreign_reply, &auth.token, &reply_req)
        .await
        .unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();

    // The genuine path still works
    let path = format!("/api/v1/posts/{}/comments/{}/like", post.id, comment.id);
    let response = server.post_auth(&path, &auth.token, &()).await.unwrap();
    let like: LikeResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(like.likes, 1);
}

#[tokio::test]
async fn test_comment_on_missing_post() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_, auth) = register_user(&server).await;

    let comment_req = CreateCommentRequest {
        text: "Hello".to_string(),
    };
    let response = server
        .post_auth(
            &format!("/api/v1/posts/{}/comments", uuid::Uuid::new_v4()),
            &auth.token,
            &comment_req,
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();
}

// ============================================================================
// Leaderboard Tests
// ============================================================================

#[tokio::test]
async fn test_leaderboard_endpoints() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (auth, post) = create_post(&server).await;

    // Give the post a like so it appears in standings
    server
        .post_auth(
            &format!("/api/v1/posts/{}/like", post.id),
            &auth.token,
            &(),
        )
        .await
        .unwrap();

    let response = server.get("/api/v1/leaderboard/departments").await.unwrap();
    let departments: serde_json::Value = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(departments.as_array().is_some());

    let response = server.get("/api/v1/leaderboard/individuals").await.unwrap();
    let individuals: serde_json::Value = assert_json(response, StatusCode::OK).await.unwrap();
    let individuals = individuals.as_array().cloned().unwrap_or_default();
    assert!(individuals.len() <= 5);

    let response = server.get("/api/v1/leaderboard/categories").await.unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();

    let response = server
        .get("/api/v1/leaderboard/submissionsThisWeek")
        .await
        .unwrap();
    let weekly: serde_json::Value = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(weekly.get("count").and_then(serde_json::Value::as_i64).is_some());
}

// ============================================================================
// Stats Export Tests
// ============================================================================

#[tokio::test]
async fn test_stats_export_downloads_xlsx() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    create_post(&server).await;

    let response = server.get("/api/v1/stats/getStats").await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let content_type = response
        .headers()
        .get("content-type")
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_string();
    assert_eq!(
        content_type,
        "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet"
    );

    let disposition = response
        .headers()
        .get("content-disposition")
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_string();
    assert_eq!(disposition, "attachment; filename=\"stats_export.xlsx\"");

    // xlsx files are zip archives
    let bytes = response.bytes().await.unwrap();
    assert_eq!(&bytes[0..2], b"PK");
}

#[tokio::test]
async fn test_user_stats_export() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    create_post(&server).await;

    let response = server.get("/api/v1/stats/getUserStats").await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let disposition = response
        .headers()
        .get("content-disposition")
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_string();
    assert_eq!(disposition, "attachment; filename=\"user_stats.xlsx\"");
}
