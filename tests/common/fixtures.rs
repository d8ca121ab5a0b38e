use std::time::Duration;

use geolookup::{ApiClient, Session, SessionDb};
use serde_json::{Value, json};
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{method, path},
};

pub const TEST_TOKEN: &str = "1|test-token";

/// A session backed by an in-memory store, optionally already logged in.
pub async fn create_test_session(token: Option<&str>) -> Session {
    let store = SessionDb::in_memory()
        .await
        .expect("Failed to open in-memory session store");
    let session = Session::load(store).await.expect("Failed to load session");
    if let Some(token) = token {
        session.set(token).await.expect("Failed to store token");
    }
    session
}

/// A stub API server and a client pointed at it.
pub async fn create_test_api() -> (MockServer, ApiClient) {
    let server = MockServer::start().await;
    let api = ApiClient::new(&server.uri(), Duration::from_secs(5))
        .expect("Failed to build API client");
    (server, api)
}

/// Answer CSRF priming with 204, like the real backend.
pub async fn mount_csrf(server: &MockServer) {
    Mock::given(method("GET"))
        .and(path("/sanctum/csrf-cookie"))
        .respond_with(ResponseTemplate::new(204))
        .mount(server)
        .await;
}

/// Answer CSRF priming with 204 and verify on drop that it was hit `times` times.
pub async fn expect_csrf(server: &MockServer, times: u64) {
    Mock::given(method("GET"))
        .and(path("/sanctum/csrf-cookie"))
        .respond_with(ResponseTemplate::new(204))
        .expect(times)
        .mount(server)
        .await;
}

/// Method and path of every request the server saw, in arrival order.
pub async fn request_log(server: &MockServer) -> Vec<String> {
    server
        .received_requests()
        .await
        .unwrap_or_default()
        .iter()
        .map(|request| format!("{} {}", request.method, request.url.path()))
        .collect()
}

/// A lookup result as the server returns it.
pub fn geo_json(ip: &str) -> Value {
    json!({
        "ip": ip,
        "city": "Mountain View",
        "region": "California",
        "country": "US",
        "loc": "37.4056,-122.0775",
        "org": "AS15169 Google LLC",
        "postal": "94043",
        "timezone": "America/Los_Angeles",
        "user_ip": "203.0.113.9",
        "user_city": "Manila",
        "user_region": "Metro Manila",
        "user_country": "PH",
        "user_loc": "14.6042,120.9822",
        "user_org": "AS9299 PLDT",
        "user_postal": "1000",
        "user_timezone": "Asia/Manila"
    })
}

/// A history entry: a lookup result plus server metadata.
pub fn history_json(id: i64, ip: &str) -> Value {
    let mut entry = geo_json(ip);
    entry["id"] = json!(id);
    entry["created_at"] = json!("2024-07-01T12:00:00.000000Z");
    entry["updated_at"] = json!("2024-07-01T12:00:00.000000Z");
    entry
}

pub async fn request_count(server: &MockServer) -> usize {
    server
        .received_requests()
        .await
        .map(|requests| requests.len())
        .unwrap_or_default()
}
