//! Window opener trait abstraction.
//!
//! Provides a trait-based abstraction for opening URLs in named browsing
//! contexts, enabling dependency injection and mocking in tests.

use async_trait::async_trait;
use thiserror::Error;

/// Errors from handing a URL to a browsing context.
#[derive(Debug, Clone, Error)]
pub enum OpenError {
    /// The URL could not be handed off to the target context.
    #[error("failed to open {url}: {message}")]
    HandoffFailed {
        /// The URL that failed to open
        url: String,
        /// What went wrong
        message: String,
    },
}

/// Trait for opening URLs in a browsing context.
///
/// `target_name` follows link-target semantics: a name addresses a
/// reusable named context, and the empty string means the current
/// context. Implementations include the system-browser opener for
/// production and a recording opener for tests.
///
/// # Example
///
/// ```ignore
/// use conrelay::traits::WindowOpener;
///
/// async fn open_home<O: WindowOpener>(opener: &O) {
///     let _ = opener.open("https://console.aws.amazon.com/", "awstab").await;
/// }
/// ```
#[async_trait]
pub trait WindowOpener: Send + Sync {
    /// Open `url` in the context named by `target_name`.
    ///
    /// # Arguments
    /// * `url` - The URL to open
    /// * `target_name` - The browsing context name, possibly empty
    ///
    /// # Returns
    /// `Ok(())` once the URL has been handed off, or an error
    async fn open(&self, url: &str, target_name: &str) -> Result<(), OpenError>;
}
