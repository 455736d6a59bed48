//! Test utilities for integration tests
use std::sync::{Arc, RwLock};

use axum::{Router, body::Body};

use activity_board::api::app;
use activity_board::api::{AppState, default_activities};

/// Creates a test application router backed by a fresh in-memory
/// store seeded with the default activities.
pub fn test_app() -> Router {
    let app_state = AppState::new(default_activities());
    app(Arc::new(RwLock::new(app_state)))
}

/// Serve a fresh test app on an ephemeral port and return its base URL.
pub async fn spawn_test_server() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind test listener");
    let addr = listener.local_addr().unwrap();
    let app = test_app();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{}", addr)
}

pub async fn body_to_string(body: Body) -> String {
    let bytes = axum::body::to_bytes(body, usize::MAX).await.unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}
