//! Integration tests for the federation sign-in flow.
//!
//! These tests verify the credential exchange scenarios:
//! - Token fetch against a mock endpoint
//! - Error mapping for non-success statuses and malformed bodies
//! - Credentials read from the environment

use serial_test::serial;
use wiremock::matchers::{method, path, query_param, query_param_contains};
use wiremock::{Mock, MockServer, ResponseTemplate};

use conrelay::signin::{Credentials, FederationClient, FederationError, DEFAULT_ISSUER};

/// Helper to create temporary credentials without touching the
/// environment.
fn sample_credentials() -> Credentials {
    Credentials {
        access_key_id: "ASIAEXAMPLEKEY".to_string(),
        secret_access_key: "example-secret".to_string(),
        session_token: "example-session-token".to_string(),
        expires: None,
    }
}

#[tokio::test]
async fn test_signin_token_success() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/federation"))
        .and(query_param("Action", "getSigninToken"))
        .and(query_param_contains("Session", "sessionId"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(serde_json::json!({"SigninToken": "FEDERATION_TOKEN"})),
        )
        .mount(&server)
        .await;

    let client = FederationClient::with_base_url(&server.uri());
    let token = client.signin_token(&sample_credentials()).await.unwrap();
    assert_eq!(token, "FEDERATION_TOKEN");

    let login_url = client.console_signin_url(&token, None, DEFAULT_ISSUER);
    assert!(login_url.contains("Action=login"));
    assert!(login_url.contains("SigninToken=FEDERATION_TOKEN"));
    assert!(login_url.contains("Destination=https%3A%2F%2Fconsole.aws.amazon.com%2F"));
}

#[tokio::test]
async fn test_signin_token_error_status() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/federation"))
        .respond_with(ResponseTemplate::new(403))
        .mount(&server)
        .await;

    let client = FederationClient::with_base_url(&server.uri());
    let err = client
        .signin_token(&sample_credentials())
        .await
        .unwrap_err();

    match err {
        FederationError::Status { status } => assert_eq!(status, 403),
        other => panic!("expected status error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_signin_token_malformed_body() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/federation"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>sign in here</html>"))
        .mount(&server)
        .await;

    let client = FederationClient::with_base_url(&server.uri());
    let err = client
        .signin_token(&sample_credentials())
        .await
        .unwrap_err();

    assert!(matches!(err, FederationError::MalformedResponse(_)));
}

#[tokio::test]
async fn test_signin_token_connection_refused() {
    // Nothing listens on this port.
    let client = FederationClient::with_base_url("http://127.0.0.1:9");
    let err = client
        .signin_token(&sample_credentials())
        .await
        .unwrap_err();

    assert!(matches!(err, FederationError::Request(_)));
}

#[test]
#[serial]
fn test_from_env_reads_credentials() {
    std::env::set_var("AWS_ACCESS_KEY_ID", "ASIATEST");
    std::env::set_var("AWS_SECRET_ACCESS_KEY", "test-secret");
    std::env::set_var("AWS_SESSION_TOKEN", "test-token");
    std::env::remove_var("AWS_CREDENTIAL_EXPIRATION");

    let creds = Credentials::from_env().unwrap();
    assert_eq!(creds.access_key_id, "ASIATEST");
    assert_eq!(creds.secret_access_key, "test-secret");
    assert_eq!(creds.session_token, "test-token");
    assert_eq!(creds.expires, None);
}

#[test]
#[serial]
fn test_from_env_parses_expiration() {
    std::env::set_var("AWS_ACCESS_KEY_ID", "ASIATEST");
    std::env::set_var("AWS_SECRET_ACCESS_KEY", "test-secret");
    std::env::set_var("AWS_SESSION_TOKEN", "test-token");
    std::env::set_var("AWS_CREDENTIAL_EXPIRATION", "2026-08-22T10:00:00Z");

    let creds = Credentials::from_env().unwrap();
    let expected = chrono::DateTime::parse_from_rfc3339("2026-08-22T10:00:00Z")
        .unwrap()
        .with_timezone(&chrono::Utc);
    assert_eq!(creds.expires, Some(expected));

    std::env::remove_var("AWS_CREDENTIAL_EXPIRATION");
}

#[test]
#[serial]
fn test_from_env_ignores_bad_expiration() {
    std::env::set_var("AWS_ACCESS_KEY_ID", "ASIATEST");
    std::env::set_var("AWS_SECRET_ACCESS_KEY", "test-secret");
    std::env::set_var("AWS_SESSION_TOKEN", "test-token");
    std::env::set_var("AWS_CREDENTIAL_EXPIRATION", "next tuesday");

    let creds = Credentials::from_env().unwrap();
    assert_eq!(creds.expires, None);

    std::env::remove_var("AWS_CREDENTIAL_EXPIRATION");
}

#[test]
#[serial]
fn test_from_env_missing_session_token() {
    std::env::set_var("AWS_ACCESS_KEY_ID", "ASIATEST");
    std::env::set_var("AWS_SECRET_ACCESS_KEY", "test-secret");
    std::env::remove_var("AWS_SESSION_TOKEN");
    std::env::remove_var("AWS_CREDENTIAL_EXPIRATION");

    let err = Credentials::from_env().unwrap_err();
    match err {
        FederationError::MissingCredential { var } => assert_eq!(var, "AWS_SESSION_TOKEN"),
        other => panic!("expected missing credential, got {:?}", other),
    }
}

#[test]
#[serial]
fn test_from_env_empty_value_counts_as_missing() {
    std::env::set_var("AWS_ACCESS_KEY_ID", "");
    std::env::set_var("AWS_SECRET_ACCESS_KEY", "test-secret");
    std::env::set_var("AWS_SESSION_TOKEN", "test-token");
    std::env::remove_var("AWS_CREDENTIAL_EXPIRATION");

    let err = Credentials::from_env().unwrap_err();
    assert!(matches!(
        err,
        FederationError::MissingCredential {
            var: "AWS_ACCESS_KEY_ID"
        }
    ));
}
