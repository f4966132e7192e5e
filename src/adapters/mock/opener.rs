//! Recording window opener for testing.
//!
//! Records every open in order instead of touching a browser, and can be
//! told to fail specific URLs.

use std::collections::HashSet;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use crate::traits::{OpenError, WindowOpener};

/// A recorded open for verification in tests.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OpenedWindow {
    /// The URL that was opened
    pub url: String,
    /// The browsing context name it was opened in
    pub target: String,
}

/// Window opener that records opens instead of performing them.
///
/// Clones share state, so a test can hand one clone to the code under
/// test and keep another for assertions.
///
/// # Example
///
/// ```ignore
/// use conrelay::adapters::mock::RecordingOpener;
/// use conrelay::traits::WindowOpener;
///
/// let opener = RecordingOpener::new();
/// opener.open("https://example.com/", "awstab").await.unwrap();
///
/// let opened = opener.opened();
/// assert_eq!(opened[0].url, "https://example.com/");
/// assert_eq!(opened[0].target, "awstab");
/// ```
#[derive(Debug, Clone)]
pub struct RecordingOpener {
    opened: Arc<Mutex<Vec<OpenedWindow>>>,
    fail_urls: Arc<Mutex<HashSet<String>>>,
}

impl RecordingOpener {
    /// Create a new recording opener.
    pub fn new() -> Self {
        Self {
            opened: Arc::new(Mutex::new(Vec::new())),
            fail_urls: Arc::new(Mutex::new(HashSet::new())),
        }
    }

    /// Make every subsequent open of `url` fail.
    ///
    /// The open is still recorded before the error is returned, matching
    /// a handoff that was attempted but refused.
    pub fn fail_url(&self, url: &str) {
        self.fail_urls.lock().unwrap().insert(url.to_string());
    }

    /// All recorded opens, in the order they happened.
    pub fn opened(&self) -> Vec<OpenedWindow> {
        self.opened.lock().unwrap().clone()
    }

    /// Number of recorded opens.
    pub fn open_count(&self) -> usize {
        self.opened.lock().unwrap().len()
    }

    /// Forget all recorded opens.
    pub fn clear(&self) {
        self.opened.lock().unwrap().clear();
    }
}

impl Default for RecordingOpener {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl WindowOpener for RecordingOpener {
    async fn open(&self, url: &str, target_name: &str) -> Result<(), OpenError> {
        self.opened.lock().unwrap().push(OpenedWindow {
            url: url.to_string(),
            target: target_name.to_string(),
        });

        if self.fail_urls.lock().unwrap().contains(url) {
            return Err(OpenError::HandoffFailed {
                url: url.to_string(),
                message: "configured to fail".to_string(),
            });
        }
        Ok(())
    }
}
