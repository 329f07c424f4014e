//! Integration tests for token expiry and tampering across the HTTP boundary.

mod helpers;

use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use chrono::{Duration, TimeZone, Utc};
use http::StatusCode;

use tokengate_auth::token::{Identity, SigningKey, TokenCodec, TokenError};

fn codec() -> TokenCodec {
    TokenCodec::new(SigningKey::new(helpers::TEST_SECRET).expect("key"))
}

fn alice() -> Identity {
    Identity::new("1", "alice", "a@x.com")
}

#[tokio::test]
async fn test_expired_token_is_unauthorized() {
    let app = helpers::TestApp::new();
    let issued = Utc::now() - Duration::days(40);
    let token = codec().generate_at(&alice(), issued);

    // Authentic but past its expiry.
    assert!(codec().validate(&token));

    let response = app
        .request("POST", "/auth/validate", None, Some(&token))
        .await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(response.body["error"], "Unauthorized");
}

#[tokio::test]
async fn test_externally_issued_token_accepted() {
    let app = helpers::TestApp::new();
    let token = codec().generate(&alice());

    let response = app
        .request("POST", "/auth/validate", None, Some(&token))
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["id"], "1");
}

#[tokio::test]
async fn test_rewritten_claims_rejected() {
    let app = helpers::TestApp::new();
    let token = app.sign_up("mallory", "m@x.com", "Str0ng!pw").await;

    let parts: Vec<&str> = token.split('.').collect();
    let mut claims: serde_json::Value =
        serde_json::from_slice(&URL_SAFE_NO_PAD.decode(parts[1]).expect("b64")).expect("json");
    claims["username"] = serde_json::json!("admin");
    let forged_claims = URL_SAFE_NO_PAD.encode(claims.to_string());
    let forged = format!("{}.{}.{}", parts[0], forged_claims, parts[2]);

    let response = app
        .request("POST", "/auth/validate", None, Some(&forged))
        .await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_signature_case_change_rejected() {
    let app = helpers::TestApp::new();
    let token = app.sign_up("dave", "d@x.com", "Str0ng!pw").await;

    let (body, signature) = token.rsplit_once('.').expect("signature segment");
    let letter = signature
        .find(|c: char| c.is_ascii_lowercase())
        .expect("hex letter in signature");
    let mut upper = signature.to_string();
    upper.replace_range(letter..=letter, &signature[letter..=letter].to_ascii_uppercase());

    for candidate in [
        format!("{body}.{upper}"),
        format!("{body}.{}", signature.to_ascii_uppercase()),
    ] {
        assert!(!codec().validate(&candidate));
        let response = app
            .request("POST", "/auth/validate", None, Some(&candidate))
            .await;
        assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    }
}

#[test]
fn test_month_boundary_scenario() {
    let codec = codec();
    let issued = Utc.with_ymd_and_hms(2024, 1, 31, 9, 0, 0).unwrap();
    let expires = Utc.with_ymd_and_hms(2024, 2, 29, 9, 0, 0).unwrap();
    let token = codec.generate_at(&alice(), issued);

    let claims = codec
        .authenticate_at(&token, expires - Duration::milliseconds(1))
        .expect("valid before expiry");
    assert_eq!(claims.expires_at_epoch_millis(), expires.timestamp_millis());
    assert_eq!(claims.expires_at(), Some(expires));

    assert_eq!(
        codec
            .authenticate_at(&token, expires + Duration::milliseconds(1))
            .expect_err("expired"),
        TokenError::Expired
    );
}

#[test]
fn test_header_and_claims_encodings_are_stable() {
    let issued = Utc.with_ymd_and_hms(2024, 6, 1, 0, 0, 0).unwrap();
    let token = codec().generate_at(&alice(), issued);
    let parts: Vec<&str> = token.split('.').collect();

    let header = URL_SAFE_NO_PAD.decode(parts[0]).expect("b64");
    let claims = URL_SAFE_NO_PAD.decode(parts[1]).expect("b64");
    assert_eq!(header, br#"{"algorithm":"HS512","type":"JWT"}"#);
    assert_eq!(
        String::from_utf8(claims).expect("utf8"),
        r#"{"id":"1","username":"alice","email":"a@x.com","expiredAt":1719792000000}"#
    );
    assert_eq!(parts[2].len(), 128);
}
