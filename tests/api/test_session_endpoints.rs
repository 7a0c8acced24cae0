// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Login, demo login, logout and session endpoint tests

use axum::http::{Method, StatusCode};
use serde_json::json;

use super::support::{admin_token, send, test_router, ADMIN_USERNAME};

#[tokio::test]
async fn test_health_endpoint() {
    let app = test_router(true);

    let (status, json) = send(&app, Method::GET, "/health", None, None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["status"], "ok");
    assert_eq!(json["version"], clarity_ai::version::VERSION);
}

#[tokio::test]
async fn test_login_with_valid_credentials() {
    let app = test_router(true);

    let token = admin_token(&app).await;
    let (status, json) = send(&app, Method::GET, "/v1/session", Some(&token), None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["loggedIn"], true);
    assert_eq!(json["mode"], "authenticated");
    assert!(json.get("lastAnalysisId").is_none());
}

#[tokio::test]
async fn test_login_with_wrong_password() {
    let app = test_router(true);

    let (status, json) = send(
        &app,
        Method::POST,
        "/v1/login",
        None,
        Some(json!({ "username": ADMIN_USERNAME, "password": "wrong" })),
    )
    .await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(json["message"], "用户名或密码错误");
}

#[tokio::test]
async fn test_login_with_missing_fields() {
    let app = test_router(true);

    let (status, json) = send(
        &app,
        Method::POST,
        "/v1/login",
        None,
        Some(json!({ "username": ADMIN_USERNAME })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["message"], "请输入用户名和密码");
}

#[tokio::test]
async fn test_demo_login() {
    let app = test_router(true);

    let (status, json) = send(&app, Method::POST, "/v1/login/demo", None, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["mode"], "demo");

    let token = json["token"].as_str().unwrap();
    let (_, session) = send(&app, Method::GET, "/v1/session", Some(token), None).await;
    assert_eq!(session["loggedIn"], true);
    assert_eq!(session["mode"], "demo");
}

#[tokio::test]
async fn test_demo_login_disabled() {
    let app = test_router(false);

    let (status, json) = send(&app, Method::POST, "/v1/login/demo", None, None).await;

    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(json["message"], "演示模式未启用");
}

#[tokio::test]
async fn test_logout_ends_session() {
    let app = test_router(true);
    let token = admin_token(&app).await;

    let (status, json) = send(&app, Method::POST, "/v1/logout", Some(&token), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["loggedOut"], true);

    let (_, session) = send(&app, Method::GET, "/v1/session", Some(&token), None).await;
    assert_eq!(session, json!({ "loggedIn": false }));

    let (status, _) = send(
        &app,
        Method::POST,
        "/v1/analyze",
        Some(&token),
        Some(json!({ "url": "https://example.com" })),
    )
    .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    // Second logout finds nothing to close
    let (status, json) = send(&app, Method::POST, "/v1/logout", Some(&token), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["loggedOut"], false);
}

#[tokio::test]
async fn test_logout_without_token() {
    let app = test_router(true);

    let (status, _) = send(&app, Method::POST, "/v1/logout", None, None).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_session_without_token() {
    let app = test_router(true);

    let (status, json) = send(&app, Method::GET, "/v1/session", None, None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json, json!({ "loggedIn": false }));
}

#[tokio::test]
async fn test_unknown_route_returns_json_404() {
    let app = test_router(true);

    let (status, json) = send(&app, Method::GET, "/v1/nothing", None, None).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["errorType"], "not_found");
    assert_eq!(json["message"], "/v1/nothing");
}
