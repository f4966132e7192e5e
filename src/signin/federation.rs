//! Federation sign-in against the AWS sign-in endpoint.
//!
//! Exchanges temporary credentials for a signin token, then builds the
//! login URL that opens a console session from that token.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::signin::{CONSOLE_HOME, SIGNIN_BASE};

/// Default Issuer parameter for federation login URLs.
pub const DEFAULT_ISSUER: &str = "conrelay";

/// Errors from the federation flow.
#[derive(Debug, Error)]
pub enum FederationError {
    /// A required credential environment variable was unset.
    #[error("missing credential environment variable {var}")]
    MissingCredential { var: &'static str },

    /// The session JSON could not be encoded.
    #[error("failed to encode federation session: {0}")]
    Encode(#[from] serde_json::Error),

    /// The HTTP request itself failed.
    #[error("federation request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The endpoint answered with a non-success status.
    #[error("federation endpoint returned status {status}")]
    Status { status: u16 },

    /// The endpoint answered 2xx but the body was not a signin token.
    #[error("malformed federation response: {0}")]
    MalformedResponse(String),
}

/// Temporary AWS credentials for federation.
#[derive(Debug, Clone)]
pub struct Credentials {
    /// AWS access key id
    pub access_key_id: String,
    /// AWS secret access key
    pub secret_access_key: String,
    /// Session token accompanying temporary credentials
    pub session_token: String,
    /// When the credentials expire, if known
    pub expires: Option<DateTime<Utc>>,
}

impl Credentials {
    /// Read credentials from the standard AWS environment variables.
    ///
    /// `AWS_ACCESS_KEY_ID`, `AWS_SECRET_ACCESS_KEY`, and
    /// `AWS_SESSION_TOKEN` are required; federation only works with
    /// temporary credentials, which always carry a session token.
    /// `AWS_CREDENTIAL_EXPIRATION` is picked up when present.
    pub fn from_env() -> Result<Self, FederationError> {
        let access_key_id = require_env("AWS_ACCESS_KEY_ID")?;
        let secret_access_key = require_env("AWS_SECRET_ACCESS_KEY")?;
        let session_token = require_env("AWS_SESSION_TOKEN")?;

        let expires = match std::env::var("AWS_CREDENTIAL_EXPIRATION") {
            Ok(raw) => match DateTime::parse_from_rfc3339(&raw) {
                Ok(parsed) => Some(parsed.with_timezone(&Utc)),
                Err(e) => {
                    tracing::warn!(
                        value = %raw,
                        error = %e,
                        "ignoring unparseable AWS_CREDENTIAL_EXPIRATION"
                    );
                    None
                }
            },
            Err(_) => None,
        };

        Ok(Self {
            access_key_id,
            secret_access_key,
            session_token,
            expires,
        })
    }
}

fn require_env(var: &'static str) -> Result<String, FederationError> {
    std::env::var(var)
        .ok()
        .filter(|value| !value.is_empty())
        .ok_or(FederationError::MissingCredential { var })
}

/// Session document the federation endpoint expects, URL-encoded into
/// the getSigninToken request.
#[derive(Debug, Serialize)]
struct FederationSession<'a> {
    #[serde(rename = "sessionId")]
    session_id: &'a str,
    #[serde(rename = "sessionKey")]
    session_key: &'a str,
    #[serde(rename = "sessionToken")]
    session_token: &'a str,
}

#[derive(Debug, Deserialize)]
struct SigninTokenResponse {
    #[serde(rename = "SigninToken")]
    signin_token: String,
}

/// Client for the federation endpoint.
#[derive(Debug, Clone)]
pub struct FederationClient {
    http: reqwest::Client,
    base_url: String,
}

impl FederationClient {
    /// Create a client against the real sign-in endpoint.
    pub fn new() -> Self {
        Self::with_base_url(SIGNIN_BASE)
    }

    /// Create a client against a different base URL.
    pub fn with_base_url(base_url: &str) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Exchange credentials for a signin token.
    pub async fn signin_token(&self, credentials: &Credentials) -> Result<String, FederationError> {
        let session = serde_json::to_string(&FederationSession {
            session_id: &credentials.access_key_id,
            session_key: &credentials.secret_access_key,
            session_token: &credentials.session_token,
        })?;

        let url = format!(
            "{}/federation?Action=getSigninToken&Session={}",
            self.base_url,
            urlencoding::encode(&session),
        );

        let response = self.http.get(&url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(FederationError::Status {
                status: status.as_u16(),
            });
        }

        let body = response.text().await?;
        let parsed: SigninTokenResponse = serde_json::from_str(&body)
            .map_err(|e| FederationError::MalformedResponse(e.to_string()))?;
        Ok(parsed.signin_token)
    }

    /// Build the login URL that opens a console session from a token.
    ///
    /// `destination` defaults to the console home page.
    pub fn console_signin_url(
        &self,
        signin_token: &str,
        destination: Option<&str>,
        issuer: &str,
    ) -> String {
        let destination = destination.unwrap_or(CONSOLE_HOME);
        format!(
            "{}/federation?Action=login&Destination={}&Issuer={}&SigninToken={}",
            self.base_url,
            urlencoding::encode(destination),
            urlencoding::encode(issuer),
            urlencoding::encode(signin_token),
        )
    }
}

impl Default for FederationClient {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_credentials() -> Credentials {
        Credentials {
            access_key_id: "ASIAEXAMPLE".to_string(),
            secret_access_key: "secret".to_string(),
            session_token: "token".to_string(),
            expires: None,
        }
    }

    #[test]
    fn test_session_json_field_names() {
        let credentials = sample_credentials();
        let session = serde_json::to_string(&FederationSession {
            session_id: &credentials.access_key_id,
            session_key: &credentials.secret_access_key,
            session_token: &credentials.session_token,
        })
        .unwrap();

        assert_eq!(
            session,
            r#"{"sessionId":"ASIAEXAMPLE","sessionKey":"secret","sessionToken":"token"}"#
        );
    }

    #[test]
    fn test_console_signin_url_defaults_to_console_home() {
        let client = FederationClient::new();
        let url = client.console_signin_url("TOKEN", None, DEFAULT_ISSUER);
        assert_eq!(
            url,
            "https://signin.aws.amazon.com/federation?Action=login\
             &Destination=https%3A%2F%2Fconsole.aws.amazon.com%2F\
             &Issuer=conrelay&SigninToken=TOKEN"
        );
    }

    #[test]
    fn test_console_signin_url_with_destination() {
        let client = FederationClient::new();
        let url = client.console_signin_url(
            "TOKEN",
            Some("https://us-west-2.console.aws.amazon.com/ec2/home"),
            "intranet",
        );
        assert!(url.contains("Destination=https%3A%2F%2Fus-west-2.console.aws.amazon.com%2Fec2%2Fhome"));
        assert!(url.contains("Issuer=intranet"));
    }

    #[test]
    fn test_with_base_url_trims_trailing_slash() {
        let client = FederationClient::with_base_url("http://127.0.0.1:8080/");
        let url = client.console_signin_url("T", None, DEFAULT_ISSUER);
        assert!(url.starts_with("http://127.0.0.1:8080/federation?"));
    }
}
