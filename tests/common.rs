#![allow(dead_code)]

use std::net::SocketAddr;
use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Method, Request};
use axum::Router;
use todotron::config::{parse_config, ConfigV1};
use todotron::routes::create_router;
use todotron::state::AppState;
use tokio::net::TcpListener;

pub const TEST_CONFIG: &str = r#"
version: "1.0.0"
logging:
  level: "debug"
  format: "json"
storage:
  type: memory
session:
  mode: token
tasks:
  storage_key: todos
routes:
  login_path: /login
  protected:
    - /todos
server:
  bind_address: 127.0.0.1:0
  cookie_name: session
users:
  - email: ada@example.com
    password: hunter22
  - email: grace@example.com
    password: cobol
"#;

pub fn load_test_config() -> ConfigV1 {
    parse_config(TEST_CONFIG).expect("Failed to parse test config YAML")
}

pub fn build_app(config: ConfigV1) -> Router {
    create_router(AppState::new(Arc::new(config)))
}

/// Serve the stub auth server on an ephemeral port; returns its base URL.
pub async fn spawn_server(config: ConfigV1) -> String {
    let app = build_app(config);
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("failed to bind test listener");
    let addr: SocketAddr = listener.local_addr().expect("no local address");
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("test server failed");
    });
    format!("http://{}", addr)
}

pub fn json_request(method: Method, path: &str, body: serde_json::Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(path)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .expect("failed to build request")
}

pub fn request_with_cookie(method: Method, path: &str, cookie: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder().method(method).uri(path);
    if let Some(cookie) = cookie {
        builder = builder.header(header::COOKIE, cookie);
    }
    builder.body(Body::empty()).expect("failed to build request")
}
