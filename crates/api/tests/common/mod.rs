#![allow(dead_code)]

use std::path::Path;
use std::sync::Arc;

use axum::body::Body;
use axum::http::{Method, Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use melodex_api::config::ServerConfig;
use melodex_api::router::build_app_router;
use melodex_api::state::AppState;
use melodex_db::{FileStore, StorePaths};
use tempfile::TempDir;
use tower::ServiceExt;

/// Upload limit used by tests, small enough to exceed cheaply.
pub const TEST_MAX_FILE_SIZE: usize = 4096;

/// Build a test `ServerConfig` rooted at `data_dir`.
///
/// Uses `http://localhost:5173` as the only CORS origin and a 30-second
/// request timeout.
pub fn test_config(data_dir: &Path) -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        store: StorePaths::under(data_dir),
        max_file_size: TEST_MAX_FILE_SIZE,
        log_level: "debug".to_string(),
    }
}

/// A router over a fresh store in a temporary directory.
///
/// The directory is removed when the `TestApp` is dropped.
pub struct TestApp {
    pub router: Router,
    pub store: FileStore,
    _data_dir: TempDir,
}

impl TestApp {
    /// A handle to the router for one request.
    pub fn app(&self) -> Router {
        self.router.clone()
    }
}

/// Build the full application router with all middleware layers over an
/// initialized, empty store.
pub async fn build_test_app() -> TestApp {
    let data_dir = tempfile::tempdir().unwrap();
    let config = test_config(data_dir.path());

    let store = melodex_db::open_store(config.store.clone()).await.unwrap();
    melodex_db::initialize(&store).await.unwrap();

    let state = AppState {
        store: store.clone(),
        config: Arc::new(config.clone()),
    };

    TestApp {
        router: build_app_router(state, &config),
        store,
        _data_dir: data_dir,
    }
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

pub async fn send(app: Router, request: Request<Body>) -> Response<Body> {
    app.oneshot(request).await.unwrap()
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
    send(app, request).await
}

pub async fn delete(app: Router, uri: &str) -> Response<Body> {
    let request = Request::builder()
        .method(Method::DELETE)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    send(app, request).await
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    json_request(app, Method::POST, uri, body).await
}

pub async fn put_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    json_request(app, Method::PUT, uri, body).await
}

async fn json_request(
    app: Router,
    method: Method,
    uri: &str,
    body: serde_json::Value,
) -> Response<Body> {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    send(app, request).await
}

/// POST a multipart form with a single `file` field.
const BOUNDARY: &str = "melodex-test-boundary";

pub async fn upload_file(
    app: Router,
    uri: &str,
    field_name: &str,
    file_name: &str,
    content_type: &str,
    data: &[u8],
) -> Response<Body> {
    let mut body = Vec::new();
    body.extend_from_slice(format!("--{BOUNDARY}\r\n").as_bytes());
    body.extend_from_slice(
        format!(
            "Content-Disposition: form-data; name=\"{field_name}\"; filename=\"{file_name}\"\r\n"
        )
        .as_bytes(),
    );
    body.extend_from_slice(format!("Content-Type: {content_type}\r\n\r\n").as_bytes());
    body.extend_from_slice(data);
    body.extend_from_slice(format!("\r\n--{BOUNDARY}--\r\n").as_bytes());

    post_multipart(app, uri, body).await
}

/// Multipart form holding a single plain text field (no filename).
pub async fn post_form_field(app: Router, uri: &str, name: &str, value: &str) -> Response<Body> {
    let body = format!(
        "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"{name}\"\r\n\r\n{value}\r\n--{BOUNDARY}--\r\n"
    );
    post_multipart(app, uri, body.into_bytes()).await
}

async fn post_multipart(app: Router, uri: &str, body: Vec<u8>) -> Response<Body> {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(
            "content-type",
            format!("multipart/form-data; boundary={BOUNDARY}"),
        )
        .body(Body::from(body))
        .unwrap();
    send(app, request).await
}

pub async fn body_bytes(response: Response<Body>) -> Vec<u8> {
    response
        .into_body()
        .collect()
        .await
        .unwrap()
        .to_bytes()
        .to_vec()
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    serde_json::from_slice(&body_bytes(response).await).unwrap()
}

/// Create a track through the API and return its JSON.
pub async fn create_track(app: Router, title: &str, artist: &str) -> serde_json::Value {
    let response = post_json(
        app,
        "/api/tracks",
        serde_json::json!({ "title": title, "artist": artist }),
    )
    .await;
    assert_eq!(response.status(), axum::http::StatusCode::CREATED);
    body_json(response).await
}
