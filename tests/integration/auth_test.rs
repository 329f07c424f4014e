//! Integration tests for the sign-up, login, and validate flow.

mod helpers;

use http::StatusCode;

#[tokio::test]
async fn test_signin_then_validate() {
    let app = helpers::TestApp::new();
    let token = app.sign_up("alice", "a@x.com", "Str0ng!pw").await;

    let response = app
        .request("POST", "/auth/validate", None, Some(&token))
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["username"], "alice");
    assert_eq!(response.body["email"], "a@x.com");
    assert!(response.body["id"].as_str().is_some());
    assert!(response.body["expiredAt"].as_i64().is_some());
}

#[tokio::test]
async fn test_signin_validation_errors() {
    let app = helpers::TestApp::new();

    let response = app
        .request(
            "POST",
            "/auth/signin",
            Some(serde_json::json!({
                "username": "al",
                "email": "not-an-email",
                "password": "weak",
            })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    let errors = response.body["errors"].as_array().expect("errors array");
    let fields: Vec<&str> = errors
        .iter()
        .filter_map(|e| e["field"].as_str())
        .collect();
    assert!(fields.contains(&"username"));
    assert!(fields.contains(&"email"));
    assert!(fields.contains(&"password"));
    assert!(errors.iter().any(|e| e["field"] == "username"
        && e["message"] == "Username must have at least 3 characters"));
}

#[tokio::test]
async fn test_signin_missing_fields() {
    let app = helpers::TestApp::new();

    let response = app
        .request("POST", "/auth/signin", Some(serde_json::json!({})), None)
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert!(!response.body["errors"].as_array().expect("errors").is_empty());
}

#[tokio::test]
async fn test_signin_duplicate_email() {
    let app = helpers::TestApp::new();
    app.sign_up("alice", "a@x.com", "Str0ng!pw").await;

    let response = app
        .request(
            "POST",
            "/auth/signin",
            Some(serde_json::json!({
                "username": "alice2",
                "email": "a@x.com",
                "password": "Str0ng!pw",
            })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["errors"][0]["field"], "email");
    assert_eq!(response.body["errors"][0]["message"], "Email already in use");
}

#[tokio::test]
async fn test_signin_duplicate_email_reported_with_other_field_errors() {
    let app = helpers::TestApp::new();
    app.sign_up("alice", "a@x.com", "Str0ng!pw").await;

    let response = app
        .request(
            "POST",
            "/auth/signin",
            Some(serde_json::json!({
                "username": "a".repeat(16),
                "email": "a@x.com",
                "password": "weak",
            })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    let errors = response.body["errors"].as_array().expect("errors array");
    let has = |field: &str, message: &str| {
        errors
            .iter()
            .any(|e| e["field"] == field && e["message"] == message)
    };
    assert!(has("email", "Email already in use"));
    assert!(has("username", "Username must be up to 15 characters"));
    assert!(errors.iter().any(|e| e["field"] == "password"));
}

#[tokio::test]
async fn test_login_success() {
    let app = helpers::TestApp::new();
    app.sign_up("bob", "b@x.com", "Sup3r$ecret").await;

    let response = app
        .request(
            "POST",
            "/auth/login",
            Some(serde_json::json!({
                "email": "b@x.com",
                "password": "Sup3r$ecret",
            })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    let token = helpers::token_from(&response);

    let validated = app
        .request("POST", "/auth/validate", None, Some(&token))
        .await;
    assert_eq!(validated.status, StatusCode::OK);
    assert_eq!(validated.body["username"], "bob");
}

#[tokio::test]
async fn test_login_wrong_password_and_unknown_email() {
    let app = helpers::TestApp::new();
    app.sign_up("bob", "b@x.com", "Sup3r$ecret").await;

    for (email, password) in [("b@x.com", "Wr0ng$ecret"), ("nobody@x.com", "Sup3r$ecret")] {
        let response = app
            .request(
                "POST",
                "/auth/login",
                Some(serde_json::json!({ "email": email, "password": password })),
                None,
            )
            .await;

        assert_eq!(response.status, StatusCode::BAD_REQUEST);
        assert_eq!(response.body["error"], "Email or password incorrect");
    }
}

#[tokio::test]
async fn test_validate_rejects_missing_or_garbled_header() {
    let app = helpers::TestApp::new();

    let missing = app.request("POST", "/auth/validate", None, None).await;
    assert_eq!(missing.status, StatusCode::UNAUTHORIZED);

    for header in ["Bearer", "Bearer not-a-token", "Basic a.b.c", "Bearer a.b.c"] {
        let response = app.post_with_authorization("/auth/validate", header).await;
        assert_eq!(response.status, StatusCode::UNAUTHORIZED, "{header}");
        assert_eq!(response.body["error"], "Unauthorized");
    }
}

#[tokio::test]
async fn test_token_from_other_key_rejected() {
    let issuer = helpers::TestApp::with_secret("K1");
    let verifier = helpers::TestApp::with_secret("K2");
    let token = issuer.sign_up("carol", "c@x.com", "Str0ng!pw").await;

    let response = verifier
        .request("POST", "/auth/validate", None, Some(&token))
        .await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(response.body["error"], "Unauthorized");
}

#[tokio::test]
async fn test_health() {
    let app = helpers::TestApp::new();
    let response = app.request("GET", "/health", None, None).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["status"], "ok");
}
