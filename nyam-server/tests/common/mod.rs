//! Shared test harness: a full app over a throwaway database, driven
//! in-process through `tower::ServiceExt::oneshot`.

// Each test binary uses a different subset of the harness.
#![allow(dead_code)]

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use http_body_util::BodyExt;
use serde_json::Value;
use tempfile::TempDir;
use tower::ServiceExt;

use nyam_server::{Config, ServerState, api};

pub struct TestApp {
    pub app: Router,
    pub state: ServerState,
    // Kept alive so the database file outlives the test
    _dir: TempDir,
}

pub async fn spawn() -> TestApp {
    let dir = tempfile::tempdir().expect("create temp dir");
    let db_path = dir.path().join("test.db");
    let config = Config::with_overrides(db_path.to_str().expect("utf-8 path"), 0);
    let state = ServerState::initialize(&config)
        .await
        .expect("initialize state");
    let app = api::build_app(&state);
    TestApp {
        app,
        state,
        _dir: dir,
    }
}

impl TestApp {
    pub async fn post_json(&self, path: &str, body: Value) -> (StatusCode, Value) {
        let request = Request::builder()
            .method("POST")
            .uri(path)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .expect("build request");
        self.send(request).await
    }

    pub async fn get(&self, path: &str) -> (StatusCode, Value) {
        let request = Request::builder()
            .uri(path)
            .body(Body::empty())
            .expect("build request");
        self.send(request).await
    }

    /// GET returning the raw body, for HTML pages.
    pub async fn get_text(&self, path: &str) -> (StatusCode, String) {
        let request = Request::builder()
            .uri(path)
            .body(Body::empty())
            .expect("build request");
        let response = self.app.clone().oneshot(request).await.expect("send request");
        let status = response.status();
        let bytes = response
            .into_body()
            .collect()
            .await
            .expect("read body")
            .to_bytes();
        (status, String::from_utf8_lossy(&bytes).into_owned())
    }

    async fn send(&self, request: Request<Body>) -> (StatusCode, Value) {
        let response = self.app.clone().oneshot(request).await.expect("send request");
        let status = response.status();
        let bytes = response
            .into_body()
            .collect()
            .await
            .expect("read body")
            .to_bytes();
        let json = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap_or(Value::Null)
        };
        (status, json)
    }
}

// ── Seeding shortcuts ───────────────────────────────────────────────

pub async fn seed_category(app: &TestApp, name: &str) -> i64 {
    let (status, body) = app
        .post_json("/api/insert-category", serde_json::json!({ "name": name }))
        .await;
    assert_eq!(status, StatusCode::CREATED, "seed category: {body}");
    body["data"]["id"].as_i64().expect("category id")
}

pub async fn seed_product(app: &TestApp, name: &str, price: f64, category_id: i64) -> i64 {
    let (status, body) = app
        .post_json(
            "/api/insert-product",
            serde_json::json!({
                "name": name,
                "price": price,
                "category_id": category_id,
                "available": true,
            }),
        )
        .await;
    assert_eq!(status, StatusCode::CREATED, "seed product: {body}");
    body["data"]["id"].as_i64().expect("product id")
}

pub async fn seed_client(app: &TestApp, name: &str, email: &str) -> i64 {
    let (status, body) = app
        .post_json(
            "/api/insert-client",
            serde_json::json!({
                "name": name,
                "email": email,
                "phone": "612345678",
                "password": "secret123",
            }),
        )
        .await;
    assert_eq!(status, StatusCode::CREATED, "seed client: {body}");
    body["data"]["id"].as_i64().expect("client id")
}
