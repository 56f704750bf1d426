//! Request signing for the Yahoo Fantasy Sports API.
//!
//! The crate never performs the OAuth token handshake; callers bring a
//! pre-obtained [`AccessToken`] and the [`RequestSigner`] capability signs
//! and executes individual GET requests with it. [`Consumer`] is the
//! production signer; tests and alternate stacks provide their own.

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use async_trait::async_trait;
use reqwest::header;
use reqwest::Response;

use crate::error::{BoxError, Result};

const USER_AGENT: &str = concat!("yahoo-fantasy/", env!("CARGO_PKG_VERSION"));
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Credential pair identifying an authorized session.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AccessToken {
    pub key: String,
    pub secret: String,
}

impl AccessToken {
    pub fn new(key: impl Into<String>, secret: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            secret: secret.into(),
        }
    }
}

/// Capability that signs a GET request for `url` with `token` and
/// executes it.
///
/// Implementations must put any upstream failure text into the error's
/// `Display` output; the transport classifies failures by message content.
#[async_trait]
pub trait RequestSigner: Send + Sync {
    async fn get(
        &self,
        url: &str,
        params: &[(String, String)],
        token: &AccessToken,
    ) -> std::result::Result<Response, BoxError>;
}

/// OAuth 1.0a consumer signing requests with the PLAINTEXT method.
///
/// Yahoo accepts PLAINTEXT signatures over TLS. Non-success statuses are
/// converted to errors carrying the response body text.
pub struct Consumer {
    key: String,
    secret: String,
    http: reqwest::Client,
}

impl Consumer {
    /// Build a consumer for the given client credentials.
    pub fn new(client_id: impl Into<String>, client_secret: impl Into<String>) -> Result<Self> {
        let http = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(REQUEST_TIMEOUT)
            .build()?;

        Ok(Self {
            key: client_id.into(),
            secret: client_secret.into(),
            http,
        })
    }

    fn authorization(&self, token: &AccessToken) -> String {
        let timestamp = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_secs();
        let signature = format!(
            "{}&{}",
            percent_encode(&self.secret),
            percent_encode(&token.secret)
        );

        format!(
            "OAuth oauth_consumer_key=\"{}\", oauth_nonce=\"{}\", \
             oauth_signature_method=\"PLAINTEXT\", oauth_signature=\"{}\", \
             oauth_timestamp=\"{timestamp}\", oauth_token=\"{}\", oauth_version=\"1.0\"",
            percent_encode(&self.key),
            nonce(),
            percent_encode(&signature),
            percent_encode(&token.key),
        )
    }
}

#[async_trait]
impl RequestSigner for Consumer {
    async fn get(
        &self,
        url: &str,
        params: &[(String, String)],
        token: &AccessToken,
    ) -> std::result::Result<Response, BoxError> {
        let mut request = self
            .http
            .get(url)
            .header(header::AUTHORIZATION, self.authorization(token));
        if !params.is_empty() {
            request = request.query(params);
        }

        let response = request.send().await?;
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        // Yahoo reports credential and permission problems in the body;
        // the message has to keep it for downstream classification.
        let body = response.text().await.unwrap_or_default();
        Err(format!("request failed with status {status}: {body}").into())
    }
}

/// Percent-encode everything outside the RFC 3986 unreserved set.
fn percent_encode(input: &str) -> String {
    let mut encoded = String::with_capacity(input.len());
    for byte in input.bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'.' | b'_' | b'~' => {
                encoded.push(byte as char)
            }
            _ => encoded.push_str(&format!("%{byte:02X}")),
        }
    }
    encoded
}

fn nonce() -> String {
    static COUNTER: AtomicU64 = AtomicU64::new(0);
    let count = COUNTER.fetch_add(1, Ordering::Relaxed);
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .subsec_nanos();
    format!("{nanos:09}{count}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_percent_encode_leaves_unreserved_untouched() {
        assert_eq!(percent_encode("Abc123-._~"), "Abc123-._~");
    }

    #[test]
    fn test_percent_encode_escapes_reserved_and_utf8() {
        assert_eq!(percent_encode("a b&c"), "a%20b%26c");
        assert_eq!(percent_encode("kü"), "k%C3%BC");
        assert_eq!(percent_encode("a/b=c"), "a%2Fb%3Dc");
    }

    #[test]
    fn test_nonce_values_differ() {
        assert_ne!(nonce(), nonce());
    }

    #[test]
    fn test_authorization_header_shape() {
        let consumer = Consumer::new("client-id", "s3cr3t").unwrap();
        let token = AccessToken::new("tok-key", "t0k3n");

        let header = consumer.authorization(&token);

        assert!(header.starts_with("OAuth "));
        assert!(header.contains("oauth_consumer_key=\"client-id\""));
        assert!(header.contains("oauth_signature_method=\"PLAINTEXT\""));
        // Signature is client secret and token secret joined by an
        // encoded ampersand.
        assert!(header.contains("oauth_signature=\"s3cr3t%26t0k3n\""));
        assert!(header.contains("oauth_token=\"tok-key\""));
        assert!(header.contains("oauth_version=\"1.0\""));
    }
}
