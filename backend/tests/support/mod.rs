//! Shared helpers for the endpoint integration tests.
//!
//! Spawns the real application on an ephemeral port, backed by a throwaway
//! on-disk SQLite database, and speaks plain HTTP/1.1 to it.

use std::net::SocketAddr;
use std::sync::Arc;

use campus_backend::auth::{issue_token, Role};
use campus_backend::build_router;
use campus_backend::config::Config;
use campus_backend::database;
use campus_backend::state::AppState;
use tempfile::TempDir;
use tokio::io::{AsyncReadExt, AsyncWriteExt};

pub const TEST_SECRET: &str = "integration-test-secret";

pub struct TestApp {
    pub addr: SocketAddr,
    _db_dir: TempDir,
}

pub async fn spawn_app() -> TestApp {
    let db_dir = tempfile::tempdir().expect("tempdir");
    let db_path = db_dir.path().join("test.db");
    let database_url = format!("sqlite:{}?mode=rwc", db_path.display());

    let pool = database::init_pool(&database_url).await.expect("init pool");
    database::run_migrations(&pool).await.expect("apply schema");

    let config = Config {
        port: 0,
        database_url,
        jwt_secret: TEST_SECRET.to_string(),
    };
    let state = AppState {
        pool,
        config: Arc::new(config),
    };

    let app = build_router(state);
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind listener");
    let addr = listener.local_addr().expect("local addr");
    tokio::spawn(async move { axum::serve(listener, app).await.expect("serve app") });

    TestApp {
        addr,
        _db_dir: db_dir,
    }
}

pub fn user_token() -> String {
    issue_token("user@example.org", &[Role::User], TEST_SECRET).expect("sign token")
}

pub fn admin_token() -> String {
    issue_token("admin@example.org", &[Role::Admin, Role::User], TEST_SECRET).expect("sign token")
}

/// Sends one request and returns (status, body). The connection is closed
/// after the exchange so the whole response can be read to EOF.
pub async fn send_request(
    addr: SocketAddr,
    method: &str,
    path_and_query: &str,
    token: Option<&str>,
    body: Option<&str>,
) -> (u16, String) {
    let mut stream = tokio::net::TcpStream::connect(addr)
        .await
        .expect("connect server");

    let mut request =
        format!("{method} {path_and_query} HTTP/1.1\r\nHost: {addr}\r\nConnection: close\r\n");
    if let Some(token) = token {
        request.push_str(&format!("Authorization: Bearer {token}\r\n"));
    }
    if let Some(body) = body {
        request.push_str("Content-Type: application/json\r\n");
        request.push_str(&format!("Content-Length: {}\r\n", body.len()));
    }
    request.push_str("\r\n");
    if let Some(body) = body {
        request.push_str(body);
    }

    stream
        .write_all(request.as_bytes())
        .await
        .expect("write request");
    let mut response = String::new();
    stream
        .read_to_string(&mut response)
        .await
        .expect("read response");

    let (head, body) = response
        .split_once("\r\n\r\n")
        .expect("http response separator");
    let status = head
        .lines()
        .next()
        .and_then(|line| line.split_whitespace().nth(1))
        .and_then(|s| s.parse::<u16>().ok())
        .expect("status");

    (status, body.to_string())
}

pub fn parse_json(body: &str) -> serde_json::Value {
    serde_json::from_str(body).expect("body is json")
}
