//! Signed HTTP transport with bounded retry.
//!
//! Wraps a [`RequestSigner`] capability and classifies each failure at the
//! call site: Yahoo's transient credential rejection is retried up to the
//! attempt budget, a permission failure becomes the shared
//! [`FantasyError::AccessDenied`] sentinel, and anything else surfaces
//! immediately with its message intact.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use log::{debug, warn};
use reqwest::Response;

use crate::error::{BoxError, FantasyError, Result};
use crate::signer::{AccessToken, RequestSigner};

/// Substring Yahoo puts in transient credential rejections.
pub(crate) const CREDENTIAL_REJECTED_MARKER: &str = "consumer_key_unknown";

/// Substring Yahoo puts in permission-failure pages.
pub(crate) const ACCESS_DENIED_MARKER: &str = "You are not allowed to view this page";

/// Attempts allowed per request, the first try included.
pub const MAX_REQUEST_ATTEMPTS: u32 = 5;

/// How a signing failure is handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FailureKind {
    /// Transient rejection of the consumer credential; worth retrying.
    RetryableCredential,
    /// The session lacks permission for the resource; never retried.
    AccessDenied,
    /// Anything else; surfaced as-is, never retried.
    Other,
}

fn classify(err: &BoxError) -> FailureKind {
    let message = err.to_string();
    if message.contains(CREDENTIAL_REJECTED_MARKER) {
        FailureKind::RetryableCredential
    } else if message.contains(ACCESS_DENIED_MARKER) {
        FailureKind::AccessDenied
    } else {
        FailureKind::Other
    }
}

/// GET transport that signs every request with a fixed token.
pub struct SignedTransport {
    signer: Arc<dyn RequestSigner>,
    token: AccessToken,
    attempts: AtomicU64,
}

impl SignedTransport {
    pub fn new(signer: Arc<dyn RequestSigner>, token: AccessToken) -> Self {
        Self {
            signer,
            token,
            attempts: AtomicU64::new(0),
        }
    }

    /// Network attempts made so far, retries included.
    pub fn attempts(&self) -> u64 {
        self.attempts.load(Ordering::Relaxed)
    }

    /// Execute a signed GET against `url`, retrying transient credential
    /// rejections up to [`MAX_REQUEST_ATTEMPTS`] total attempts.
    pub async fn get(&self, url: &str) -> Result<Response> {
        let mut attempt = 0u32;
        loop {
            attempt += 1;
            self.attempts.fetch_add(1, Ordering::Relaxed);

            let err = match self.signer.get(url, &[], &self.token).await {
                Ok(response) => return Ok(response),
                Err(err) => err,
            };

            match classify(&err) {
                FailureKind::RetryableCredential if attempt < MAX_REQUEST_ATTEMPTS => {
                    debug!("credential rejected on attempt {attempt} for {url}; retrying");
                }
                FailureKind::AccessDenied => {
                    warn!("access denied for {url}");
                    return Err(FantasyError::AccessDenied);
                }
                _ => return Err(FantasyError::Signer(err)),
            }
        }
    }
}
