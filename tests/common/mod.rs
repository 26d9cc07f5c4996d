//! Test helpers for Web API integration tests.

use std::sync::Arc;

use axum_test::TestServer;
use serde_json::{json, Value};

use anonboard::web::handlers::AppState;
use anonboard::web::router::{create_health_router, create_router};
use anonboard::Database;

/// Create a test server backed by an in-memory database.
pub async fn create_test_server() -> TestServer {
    let db = Database::open_in_memory()
        .await
        .expect("Failed to create test database");

    let app_state = Arc::new(AppState::new(Arc::new(db)));
    let router = create_router(app_state, &[]).merge(create_health_router());

    TestServer::new(router).expect("Failed to create test server")
}

/// Create a thread and return the creation response body.
pub async fn create_thread(server: &TestServer, board: &str, text: &str, password: &str) -> Value {
    let response = server
        .post(&format!("/api/threads/{board}"))
        .json(&json!({
            "text": text,
            "delete_password": password
        }))
        .await;

    response.json::<Value>()
}

/// Create a reply and return the updated-thread response body.
pub async fn create_reply(
    server: &TestServer,
    board: &str,
    thread_id: &str,
    text: &str,
    password: &str,
) -> Value {
    let response = server
        .post(&format!("/api/replies/{board}"))
        .json(&json!({
            "thread_id": thread_id,
            "text": text,
            "delete_password": password
        }))
        .await;

    response.json::<Value>()
}
