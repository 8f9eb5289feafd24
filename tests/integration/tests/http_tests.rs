//! HTTP tests against a running server
//!
//! The server runs on an ephemeral port over in-memory repositories and a
//! temporary upload directory. Run with:
//! cargo test -p integration-tests --test http_tests

use integration_tests::*;
use portal_core::Position;
use reqwest::{multipart::Form, StatusCode};
use serde_json::{json, Value};

async fn signed_in_admin() -> TestServer {
    let server = TestServer::start().await.expect("Failed to start server");
    seed_admin(&server.store);
    let response = server.login(ADMIN_NAME, ADMIN_PASSWORD).await.unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();
    server
}

// ============================================================================
// Health
// ============================================================================

#[tokio::test]
async fn test_health_check() {
    let server = TestServer::start().await.expect("Failed to start server");

    let body: Value = assert_json(server.get("/health").await.unwrap(), StatusCode::OK)
        .await
        .unwrap();
    assert_eq!(body["status"], "healthy");

    let body: Value = assert_json(server.get("/health/ready").await.unwrap(), StatusCode::OK)
        .await
        .unwrap();
    assert_eq!(body["status"], "ready");
}

// ============================================================================
// Sessions
// ============================================================================

#[tokio::test]
async fn test_login_me_logout() {
    let server = signed_in_admin().await;

    let me: Value = assert_json(server.get("/api/auth/me").await.unwrap(), StatusCode::OK)
        .await
        .unwrap();
    assert_eq!(me["user"]["name"], ADMIN_NAME);
    assert_eq!(me["user"]["role"], "ADMIN");
    assert_eq!(me["mustChangePassword"], false);

    let response = server.post_json("/api/auth/logout", &json!({})).await.unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();

    let code = assert_error(server.get("/api/auth/me").await.unwrap(), StatusCode::UNAUTHORIZED)
        .await
        .unwrap();
    assert_eq!(code, "MISSING_SESSION");
}

#[tokio::test]
async fn test_login_sets_http_only_cookie() {
    let server = TestServer::start().await.expect("Failed to start server");
    seed_admin(&server.store);

    let response = server.login(ADMIN_NAME, ADMIN_PASSWORD).await.unwrap();
    let cookie = response
        .headers()
        .get(reqwest::header::SET_COOKIE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_string();

    assert!(cookie.contains("HttpOnly"), "cookie: {cookie}");
    assert!(cookie.contains("Path=/"), "cookie: {cookie}");
    assert_status(response, StatusCode::OK).await.unwrap();
}

#[tokio::test]
async fn test_login_failures() {
    let server = TestServer::start().await.expect("Failed to start server");
    seed_admin(&server.store);

    let code = assert_error(server.login(ADMIN_NAME, "wrong").await.unwrap(), StatusCode::UNAUTHORIZED)
        .await
        .unwrap();
    assert_eq!(code, "INVALID_CREDENTIALS");

    let response = server.login("Nobody Here", "whatever").await.unwrap();
    assert_error(response, StatusCode::NOT_FOUND).await.unwrap();

    let response = server
        .post_json("/api/auth/login", &json!({ "name": "", "password": "" }))
        .await
        .unwrap();
    assert_error(response, StatusCode::BAD_REQUEST).await.unwrap();
}

#[tokio::test]
async fn test_change_password_over_http() {
    let server = TestServer::start().await.expect("Failed to start server");
    seed_officer(&server.store, "Lee Legacy", "L001", Position::Staff, "Education", None);

    // No session needed; the member id and current password identify the officer
    let response = server
        .post_json(
            "/api/auth/change-password",
            &json!({ "memberId": "L001", "oldPassword": "L001", "newPassword": "brand-new" }),
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();

    let session: Value = assert_json(server.login("Lee Legacy", "brand-new").await.unwrap(), StatusCode::OK)
        .await
        .unwrap();
    assert_eq!(session["mustChangePassword"], false);

    let response = server
        .post_json(
            "/api/auth/change-password",
            &json!({ "memberId": "Z404", "oldPassword": "x", "newPassword": "brand-new" }),
        )
        .await
        .unwrap();
    let code = assert_error(response, StatusCode::NOT_FOUND).await.unwrap();
    assert_eq!(code, "UNKNOWN_OFFICER");

    let response = server
        .post_json(
            "/api/auth/change-password",
            &json!({ "memberId": " ", "oldPassword": "x", "newPassword": "brand-new" }),
        )
        .await
        .unwrap();
    assert_error(response, StatusCode::BAD_REQUEST).await.unwrap();
}

// ============================================================================
// Access control
// ============================================================================

#[tokio::test]
async fn test_admin_routes_require_session() {
    let server = TestServer::start().await.expect("Failed to start server");

    for path in ["/api/admin/dashboard", "/api/admin/officers"] {
        let code = assert_error(server.get(path).await.unwrap(), StatusCode::UNAUTHORIZED)
            .await
            .unwrap();
        assert_eq!(code, "MISSING_SESSION", "path {path}");
    }

    let response = server
        .post_form("/api/admin/events", event_form("Sneaky", "2026-05-01", "Social"))
        .await
        .unwrap();
    assert_error(response, StatusCode::UNAUTHORIZED).await.unwrap();
}

#[tokio::test]
async fn test_staff_cannot_manage_personnel() {
    let server = TestServer::start().await.expect("Failed to start server");
    seed_officer(&server.store, "Sam Staff", "S001", Position::Staff, "Education", Some("staff-pass"));
    assert_status(server.login("Sam Staff", "staff-pass").await.unwrap(), StatusCode::OK)
        .await
        .unwrap();

    let code = assert_error(server.get("/api/admin/officers").await.unwrap(), StatusCode::FORBIDDEN)
        .await
        .unwrap();
    assert_eq!(code, "ACCESS_RESTRICTED");

    let response = server
        .post_form("/api/admin/officers", officer_form("New One", "N001", "Staff", "Education"))
        .await
        .unwrap();
    assert_error(response, StatusCode::FORBIDDEN).await.unwrap();

    // Content sections stay open to staff
    let response = server
        .post_form("/api/admin/news", news_form("Staff post", "Hello", "Sam"))
        .await
        .unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();
}

// ============================================================================
// Content
// ============================================================================

#[tokio::test]
async fn test_event_create_then_public_read() {
    let server = signed_in_admin().await;

    let form = with_image(event_form("Robotics Workshop", "2026-11-20", "Workshop"), "image", "poster.png");
    let created: Value = assert_json(server.post_form("/api/admin/events", form).await.unwrap(), StatusCode::OK)
        .await
        .unwrap();
    assert_eq!(created["success"], true);
    let id = created["id"].as_i64().expect("id is returned");

    let event: Value = assert_json(server.get(&format!("/api/events/{id}")).await.unwrap(), StatusCode::OK)
        .await
        .unwrap();
    assert_eq!(event["title"], "Robotics Workshop");
    assert_eq!(event["description"], "Bring a laptop");
    assert_eq!(event["timeStart"], "09:30");

    let poster = event["poster"].as_str().unwrap().to_string();
    assert!(poster.starts_with("/uploads/events/"), "poster: {poster}");
    let response = server.get(&poster).await.unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();

    let list: Value = assert_json(server.get("/api/events").await.unwrap(), StatusCode::OK)
        .await
        .unwrap();
    assert_eq!(list["total"], 1);
    assert_eq!(list["currentPage"], 1);
}

#[tokio::test]
async fn test_news_update_and_delete() {
    let server = signed_in_admin().await;

    let created: Value = assert_json(
        server.post_form("/api/admin/news", news_form("Draft", "First", "Ria")).await.unwrap(),
        StatusCode::OK,
    )
    .await
    .unwrap();
    let id = created["id"].as_i64().unwrap();

    let response = server
        .put_form(&format!("/api/admin/news/{id}"), news_form("Final", "Second", "Ria"))
        .await
        .unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();

    let item: Value = assert_json(server.get(&format!("/api/news/{id}")).await.unwrap(), StatusCode::OK)
        .await
        .unwrap();
    assert_eq!(item["title"], "Final");
    assert_eq!(item["content"], "Second");

    let response = server.delete(&format!("/api/admin/news/{id}")).await.unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();

    let code = assert_error(server.get(&format!("/api/news/{id}")).await.unwrap(), StatusCode::NOT_FOUND)
        .await
        .unwrap();
    assert_eq!(code, "UNKNOWN_NEWS");
}

#[tokio::test]
async fn test_missing_form_field_is_bad_request() {
    let server = signed_in_admin().await;

    let form = Form::new().text("title", "No date").text("category", "Social");
    let response = server.post_form("/api/admin/events", form).await.unwrap();
    assert_error(response, StatusCode::BAD_REQUEST).await.unwrap();
}

#[tokio::test]
async fn test_unknown_and_invalid_ids() {
    let server = TestServer::start().await.expect("Failed to start server");

    let code = assert_error(server.get("/api/events/9999").await.unwrap(), StatusCode::NOT_FOUND)
        .await
        .unwrap();
    assert_eq!(code, "UNKNOWN_EVENT");

    let code = assert_error(server.get("/api/gallery/abc").await.unwrap(), StatusCode::BAD_REQUEST)
        .await
        .unwrap();
    assert_eq!(code, "INVALID_PATH_PARAMETER");

    let response = server.get("/api/news/0").await.unwrap();
    assert_error(response, StatusCode::BAD_REQUEST).await.unwrap();
}

// ============================================================================
// Personnel
// ============================================================================

#[tokio::test]
async fn test_officer_conflicts_over_http() {
    let server = signed_in_admin().await;

    let response = server
        .post_form("/api/admin/officers", officer_form("Jane Doe", "12345", "Staff", "Education"))
        .await
        .unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();

    let code = assert_error(
        server
            .post_form("/api/admin/officers", officer_form("John Roe", "12345", "Staff", "Education"))
            .await
            .unwrap(),
        StatusCode::CONFLICT,
    )
    .await
    .unwrap();
    assert_eq!(code, "MEMBER_ID_TAKEN");

    let page: Value = assert_json(server.get("/api/admin/officers?q=jane").await.unwrap(), StatusCode::OK)
        .await
        .unwrap();
    assert_eq!(page["total"], 1);
    assert_eq!(page["data"][0]["memberId"], "12345");
}

#[tokio::test]
async fn test_deactivated_officer_leaves_directory() {
    let server = signed_in_admin().await;

    let created: Value = assert_json(
        server
            .post_form("/api/admin/officers", officer_form("Dana Director", "D001", "Director", "Education"))
            .await
            .unwrap(),
        StatusCode::OK,
    )
    .await
    .unwrap();
    let id = created["id"].as_i64().unwrap();

    let directory: Value = assert_json(server.get("/api/officers").await.unwrap(), StatusCode::OK)
        .await
        .unwrap();
    let names: Vec<&str> = directory
        .as_array()
        .unwrap()
        .iter()
        .flat_map(|group| group["officers"].as_array().unwrap())
        .filter_map(|officer| officer["name"].as_str())
        .collect();
    assert!(names.contains(&"Dana Director"));

    let response = server
        .patch_json(&format!("/api/admin/officers/{id}/status"), &json!({ "isActive": false }))
        .await
        .unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();

    let directory: Value = assert_json(server.get("/api/officers").await.unwrap(), StatusCode::OK)
        .await
        .unwrap();
    assert!(!directory.to_string().contains("Dana Director"));
}

// ============================================================================
// Uploads and dashboard
// ============================================================================

#[tokio::test]
async fn test_upload_is_served_back() {
    let server = signed_in_admin().await;

    let form = with_image(Form::new().text("folder", "gallery"), "file", "photo.png");
    let uploaded: Value = assert_json(server.post_form("/api/admin/uploads", form).await.unwrap(), StatusCode::OK)
        .await
        .unwrap();
    let url = uploaded["url"].as_str().unwrap().to_string();
    assert!(url.starts_with("/uploads/gallery/"), "url: {url}");

    let response = server.get(&url).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let bytes = response.bytes().await.unwrap();
    assert_eq!(bytes.as_ref(), png_file("photo.png").bytes.as_slice());

    // An upload without a file is rejected
    let response = server
        .post_form("/api/admin/uploads", Form::new().text("folder", "news"))
        .await
        .unwrap();
    assert_error(response, StatusCode::BAD_REQUEST).await.unwrap();
}

#[tokio::test]
async fn test_dashboard_over_http() {
    let server = signed_in_admin().await;
    assert_status(
        server
            .post_form("/api/admin/events", event_form("Seminar", "2026-05-01", "Education"))
            .await
            .unwrap(),
        StatusCode::OK,
    )
    .await
    .unwrap();

    let stats: Value = assert_json(server.get("/api/admin/dashboard").await.unwrap(), StatusCode::OK)
        .await
        .unwrap();
    assert_eq!(stats["totalMembers"], 1);
    assert_eq!(stats["totalContent"], 1);
    assert_eq!(stats["recentEvents"][0]["title"], "Seminar");
}
