//! Shared test helpers for integration tests.

use axum::Router;
use axum::body::Body;
use http::{Request, StatusCode};
use serde_json::Value;
use tower::ServiceExt;

use tokengate_api::{AppState, build_app};
use tokengate_core::config::AppConfig;

/// Secret used by every test app.
pub const TEST_SECRET: &str = "integration-test-secret";

/// Test application context
pub struct TestApp {
    /// The Axum router for making test requests
    pub router: Router,
}

impl TestApp {
    /// Create a new test application with an empty user store
    pub fn new() -> Self {
        Self::with_secret(TEST_SECRET)
    }

    /// Create a test application signing with `secret`
    pub fn with_secret(secret: &str) -> Self {
        let mut config = AppConfig::default();
        config.auth.jwt_secret = Some(secret.to_string());

        let state = AppState::new(config).expect("Failed to build state");
        Self {
            router: build_app(state),
        }
    }

    /// Register a user and return their token
    pub async fn sign_up(&self, username: &str, email: &str, password: &str) -> String {
        let response = self
            .request(
                "POST",
                "/auth/signin",
                Some(serde_json::json!({
                    "username": username,
                    "email": email,
                    "password": password,
                })),
                None,
            )
            .await;

        assert_eq!(
            response.status,
            StatusCode::OK,
            "Sign-up failed: {:?}",
            response.body
        );
        token_from(&response)
    }

    /// Make an HTTP request to the test app
    pub async fn request(
        &self,
        method: &str,
        path: &str,
        body: Option<Value>,
        token: Option<&str>,
    ) -> TestResponse {
        let mut req = Request::builder().method(method).uri(path);
        if let Some(token) = token {
            req = req.header("Authorization", format!("Bearer {}", token));
        }
        self.send(req, body).await
    }

    /// POST to `path` with a raw Authorization header value
    pub async fn post_with_authorization(&self, path: &str, authorization: &str) -> TestResponse {
        let req = Request::builder()
            .method("POST")
            .uri(path)
            .header("Authorization", authorization);
        self.send(req, None).await
    }

    async fn send(&self, req: http::request::Builder, body: Option<Value>) -> TestResponse {
        let req = match body {
            Some(body) => req.header("Content-Type", "application/json").body(Body::from(
                serde_json::to_string(&body).expect("Failed to serialize body"),
            )),
            None => req.body(Body::empty()),
        }
        .expect("Failed to build request");

        let response = self
            .router
            .clone()
            .oneshot(req)
            .await
            .expect("Failed to send request");

        let status = response.status();
        let body_bytes = axum::body::to_bytes(response.into_body(), 1024 * 1024)
            .await
            .expect("Failed to read body");

        let body: Value = serde_json::from_slice(&body_bytes).unwrap_or(Value::Null);

        TestResponse { status, body }
    }
}

/// Extract the `token` field from a sign-up or login response
pub fn token_from(response: &TestResponse) -> String {
    response
        .body
        .get("token")
        .and_then(|v| v.as_str())
        .expect("No token in response")
        .to_string()
}

/// Response from a test request
#[derive(Debug)]
pub struct TestResponse {
    /// HTTP status code
    pub status: StatusCode,
    /// Parsed JSON body
    pub body: Value,
}
