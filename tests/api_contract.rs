//! HTTP contract tests
//!
//! Drives the full router with in-process requests: route paths, request
//! body keys, response shapes, status codes and the Turkish error messages
//! the browser client displays inline.

use std::sync::Arc;

use axum::body::{to_bytes, Body};
use axum::http::{header, Request, StatusCode};
use serde_json::Value;
use takip::auth::StaticCredentials;
use takip::http_server::{AssetState, HttpServer, HttpServerConfig};
use tempfile::TempDir;
use tower::ServiceExt;

// =============================================================================
// Test Utilities
// =============================================================================

fn build_router(dir: &TempDir) -> axum::Router {
    let assets = AssetState::open(dir.path()).unwrap();
    HttpServer::new(
        HttpServerConfig::default(),
        assets,
        Arc::new(StaticCredentials::default()),
        dir.path().to_path_buf(),
        dir.path().join("public"),
    )
    .router()
}

fn json_request(method: &str, uri: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn get_request(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

async fn body_json(response: axum::response::Response) -> Value {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

// =============================================================================
// CRUD round trip
// =============================================================================

#[tokio::test]
async fn test_create_list_update_delete_spindle() {
    let dir = TempDir::new().unwrap();
    let app = build_router(&dir);

    // Create
    let response = app
        .clone()
        .oneshot(json_request(
            "POST",
            "/api/spindle",
            r#"{"referansId":"SP-001","makine":"CNC-4"}"#,
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);
    let created = body_json(response).await;
    assert_eq!(created["id"], "1");
    assert_eq!(created["Referans ID"], "SP-001");
    assert_eq!(created["Takılı Olduğu Makine"], "CNC-4");
    assert_eq!(created["Çalışma Saati"], "");

    // List
    let response = app.clone().oneshot(get_request("/api/spindle")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let listed = body_json(response).await;
    assert_eq!(listed.as_array().unwrap().len(), 1);

    // Update merges over existing fields
    let response = app
        .clone()
        .oneshot(json_request(
            "PUT",
            "/api/spindle/1",
            r#"{"calismaSaati":"150"}"#,
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let updated = body_json(response).await;
    assert_eq!(updated["Çalışma Saati"], "150");
    assert_eq!(updated["Takılı Olduğu Makine"], "CNC-4");

    // Delete
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("DELETE")
                .uri("/api/spindle/1")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["success"], true);

    let response = app.oneshot(get_request("/api/spindle")).await.unwrap();
    let listed = body_json(response).await;
    assert!(listed.as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_list_with_search_term() {
    let dir = TempDir::new().unwrap();
    let app = build_router(&dir);

    for reference in ["ABC-1", "XYZ-2"] {
        let body = format!(r#"{{"referansId":"{}"}}"#, reference);
        app.clone()
            .oneshot(json_request("POST", "/api/yedek", &body))
            .await
            .unwrap();
    }

    let response = app.oneshot(get_request("/api/yedek?search=abc")).await.unwrap();
    let listed = body_json(response).await;
    let rows = listed.as_array().unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0]["Referans ID"], "ABC-1");
}

// =============================================================================
// Failure responses
// =============================================================================

#[tokio::test]
async fn test_create_without_reference_is_rejected() {
    let dir = TempDir::new().unwrap();
    let app = build_router(&dir);

    let response = app
        .oneshot(json_request("POST", "/api/spindle", r#"{"makine":"CNC-4"}"#))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["message"], "Referans ID gerekli");
}

#[tokio::test]
async fn test_update_and_delete_of_missing_id() {
    let dir = TempDir::new().unwrap();
    let app = build_router(&dir);

    let response = app
        .clone()
        .oneshot(json_request("PUT", "/api/yedek/9", r#"{"aciklama":"x"}"#))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_json(response).await["message"], "Kayıt bulunamadı");

    let response = app
        .oneshot(
            Request::builder()
                .method("DELETE")
                .uri("/api/yedek/9")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_malformed_body_is_rejected() {
    let dir = TempDir::new().unwrap();
    let app = build_router(&dir);

    let response = app
        .oneshot(json_request("POST", "/api/spindle", "not json"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["message"], "Hatalı istek");
}

// =============================================================================
// Login gate
// =============================================================================

#[tokio::test]
async fn test_login_accepts_configured_pair() {
    let dir = TempDir::new().unwrap();
    let app = build_router(&dir);

    let response = app
        .oneshot(json_request(
            "POST",
            "/login",
            r#"{"username":"BAKIM","password":"MAXIME"}"#,
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["success"], true);
}

#[tokio::test]
async fn test_login_rejects_wrong_pair() {
    let dir = TempDir::new().unwrap();
    let app = build_router(&dir);

    let response = app
        .oneshot(json_request(
            "POST",
            "/login",
            r#"{"username":"BAKIM","password":"wrong"}"#,
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    let body = body_json(response).await;
    assert_eq!(body["success"], false);
    assert_eq!(body["message"], "Geçersiz bilgiler");
}

#[tokio::test]
async fn test_login_with_malformed_body() {
    let dir = TempDir::new().unwrap();
    let app = build_router(&dir);

    let response = app
        .oneshot(json_request("POST", "/login", "not json"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert_eq!(body["success"], false);
    assert_eq!(body["message"], "Hatalı istek");
}

// =============================================================================
// Export download
// =============================================================================

#[tokio::test]
async fn test_export_download() {
    let dir = TempDir::new().unwrap();
    let app = build_router(&dir);

    app.clone()
        .oneshot(json_request("POST", "/api/spindle", r#"{"referansId":"SP-1"}"#))
        .await
        .unwrap();
    app.clone()
        .oneshot(json_request("POST", "/api/yedek", r#"{"referansId":"Y-1"}"#))
        .await
        .unwrap();

    let response = app.oneshot(get_request("/api/export")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers()[header::CONTENT_DISPOSITION],
        "attachment; filename=\"takip_export.csv\""
    );
    assert!(response.headers()[header::CONTENT_TYPE]
        .to_str()
        .unwrap()
        .starts_with("text/csv"));

    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body = String::from_utf8(bytes.to_vec()).unwrap();
    let lines: Vec<&str> = body.split('\n').collect();
    assert_eq!(lines.len(), 3);
    assert!(lines[0].starts_with("Tablo,id,Referans ID"));
    assert!(lines[1].starts_with("Spindle,1,SP-1"));
    assert!(lines[2].starts_with("Yedek,1,Y-1"));

    // The export output file lands next to the backing files.
    assert!(dir.path().join("takip_export.csv").exists());
}

// =============================================================================
// Health
// =============================================================================

#[tokio::test]
async fn test_health() {
    let dir = TempDir::new().unwrap();
    let app = build_router(&dir);

    let response = app.oneshot(get_request("/health")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["status"], "ok");
}
