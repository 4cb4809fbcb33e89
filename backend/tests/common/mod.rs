//! Common test utilities for integration tests
//!
//! Each test application gets its own temporary data directory, so tests
//! are isolated and can run in parallel without touching a shared store.

use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use health_companion_backend::{
    config::{AppConfig, EnhancerConfig},
    routes,
    state::AppState,
    store::UserStore,
};
use std::path::PathBuf;
use tower::ServiceExt;

/// Test application wrapper
pub struct TestApp {
    pub app: Router,
    data_dir: PathBuf,
}

impl TestApp {
    /// Create a test application with the enhancer disabled.
    pub async fn new() -> Self {
        Self::with_enhancer(EnhancerConfig::default()).await
    }

    /// Create a test application with a specific enhancer configuration.
    pub async fn with_enhancer(enhancer: EnhancerConfig) -> Self {
        let data_dir =
            std::env::temp_dir().join(format!("hc-integration-{}", uuid::Uuid::new_v4()));

        let mut config = AppConfig::default();
        config.storage.data_dir = data_dir.clone();
        config.enhancer = enhancer;

        let store = UserStore::open(&data_dir)
            .await
            .expect("Failed to open test store");
        let state = AppState::new(store, config);
        let app = routes::create_router(state);

        Self { app, data_dir }
    }

    /// Make a GET request
    pub async fn get(&self, path: &str) -> (StatusCode, String) {
        let request = Request::builder()
            .method("GET")
            .uri(path)
            .body(Body::empty())
            .unwrap();
        self.send(request).await
    }

    /// Make a POST request with JSON body
    pub async fn post(&self, path: &str, body: &str) -> (StatusCode, String) {
        let request = Request::builder()
            .method("POST")
            .uri(path)
            .header("Content-Type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap();
        self.send(request).await
    }

    /// Make a PATCH request with JSON body
    pub async fn patch(&self, path: &str, body: &str) -> (StatusCode, String) {
        let request = Request::builder()
            .method("PATCH")
            .uri(path)
            .header("Content-Type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap();
        self.send(request).await
    }

    async fn send(&self, request: Request<Body>) -> (StatusCode, String) {
        let response = self.app.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body_str = String::from_utf8(body.to_vec()).unwrap();

        (status, body_str)
    }

    /// Sign up a default user and return their id.
    pub async fn signup_user(&self) -> uuid::Uuid {
        let body = serde_json::json!({
            "email": format!("user_{}@example.com", uuid::Uuid::new_v4()),
            "password": "plain-password",
            "profile": {
                "name": "Test User",
                "age": 30,
                "gender": "other",
                "weight_kg": 70.0,
                "height_cm": 175.0,
                "activity_level": "lightly_active",
                "primary_health_goal": "stay healthy"
            }
        });
        let (status, response) = self.post("/api/v1/auth/signup", &body.to_string()).await;
        assert_eq!(status, StatusCode::OK, "signup failed: {response}");

        let response: serde_json::Value = serde_json::from_str(&response).unwrap();
        response["id"].as_str().unwrap().parse().unwrap()
    }
}

impl Drop for TestApp {
    fn drop(&mut self) {
        std::fs::remove_dir_all(&self.data_dir).ok();
    }
}
