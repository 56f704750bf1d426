//! Content sources: the XML decoder and the cache-aside wrapper.
//!
//! [`ContentSource`] is the seam the orchestrator fetches through.
//! [`XmlSource`] decodes documents straight off the signed transport;
//! [`CachedSource`] decorates any source with a [`ContentCache`], composed
//! by construction.

use std::sync::Arc;
use std::time::SystemTime;

use async_trait::async_trait;
use log::debug;

use crate::cache::ContentCache;
use crate::content::FantasyContent;
use crate::error::{FantasyError, Result};
use crate::transport::SignedTransport;

/// Source of decoded fantasy content, wherever it comes from.
#[async_trait]
pub trait ContentSource: Send + Sync {
    /// Fetch and decode the resource at `url`.
    async fn fetch(&self, url: &str) -> Result<Arc<FantasyContent>>;
}

/// Decodes XML payloads fetched over the signed transport.
pub struct XmlSource {
    transport: SignedTransport,
}

impl XmlSource {
    pub fn new(transport: SignedTransport) -> Self {
        Self { transport }
    }
}

#[async_trait]
impl ContentSource for XmlSource {
    async fn fetch(&self, url: &str) -> Result<Arc<FantasyContent>> {
        let response = self.transport.get(url).await?;
        // Drain the whole body before decoding; dropping the response on
        // any path closes the connection.
        let body = response.text().await.map_err(FantasyError::Read)?;
        let content: FantasyContent = quick_xml::de::from_str(&body)?;
        Ok(Arc::new(content))
    }
}

/// Cache-aside decorator around another source.
///
/// A hit skips the delegate entirely; a miss fetches through it and
/// stores the result under the same timestamp the lookup used. Delegate
/// errors propagate unchanged and never touch the cache.
pub struct CachedSource {
    delegate: Arc<dyn ContentSource>,
    cache: Arc<dyn ContentCache>,
}

impl CachedSource {
    pub fn new(delegate: Arc<dyn ContentSource>, cache: Arc<dyn ContentCache>) -> Self {
        Self { delegate, cache }
    }
}

#[async_trait]
impl ContentSource for CachedSource {
    async fn fetch(&self, url: &str) -> Result<Arc<FantasyContent>> {
        let now = SystemTime::now();
        if let Some(content) = self.cache.get(url, now) {
            debug!("cache hit for {url}");
            return Ok(content);
        }

        let content = self.delegate.fetch(url).await?;
        self.cache.set(url, now, Arc::clone(&content));
        Ok(content)
    }
}
