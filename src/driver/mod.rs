pub mod webdriver;

#[cfg(test)]
pub mod mock;

use async_trait::async_trait;
use std::time::Duration;
use thiserror::Error;
use url::Url;

/// Errors from a single driver operation.
///
/// All of these are recoverable at the visit boundary; none abort the run.
#[derive(Debug, Error)]
pub enum DriverError {
    #[error("navigation to {url} timed out after {timeout_secs}s")]
    NavigationTimeout { url: String, timeout_secs: u64 },

    #[error("browser command failed: {0}")]
    Command(String),
}

/// The browser capability consumed by the harvest core.
///
/// `navigate`, `query`, `computed_styles` and `current_url` are the style
/// sampling operations; `attribute` and `text_content` are the DOM reads
/// the CSS catalog collectors need. Any automation engine implementing
/// these is substitutable without touching the core logic.
#[async_trait]
pub trait PageDriver {
    /// Opaque handle to an element on the current page
    type Handle: Send + Sync;

    /// Load a page, waiting for it up to `timeout`
    async fn navigate(&mut self, url: &Url, timeout: Duration) -> Result<(), DriverError>;

    /// All elements matching a CSS selector, in document order
    async fn query(&mut self, selector: &str) -> Result<Vec<Self::Handle>, DriverError>;

    /// Computed values for the given properties, as (property, value) pairs
    /// in the order requested
    async fn computed_styles(
        &mut self,
        handle: &Self::Handle,
        properties: &[&str],
    ) -> Result<Vec<(String, String)>, DriverError>;

    /// An attribute value, if the element carries that attribute
    async fn attribute(
        &mut self,
        handle: &Self::Handle,
        name: &str,
    ) -> Result<Option<String>, DriverError>;

    /// The element's text content. Unlike rendered text this also sees the
    /// body of non-rendered elements such as `<style>`.
    async fn text_content(&mut self, handle: &Self::Handle) -> Result<String, DriverError>;

    /// URL of the currently loaded page
    async fn current_url(&mut self) -> Result<Url, DriverError>;
}
