//! Production window opener backed by the system browser.

use async_trait::async_trait;

use crate::traits::{OpenError, WindowOpener};

/// Opens URLs with the operating system's default browser.
///
/// The browser decides context reuse on its own; `target_name` cannot be
/// addressed through the system handoff, so it is recorded in the logs
/// and each open lands wherever the browser puts it (typically a new
/// tab). Tests that assert on target routing use the recording opener
/// instead.
#[derive(Debug, Clone, Default)]
pub struct SystemOpener;

impl SystemOpener {
    /// Create a new system opener.
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl WindowOpener for SystemOpener {
    async fn open(&self, url: &str, target_name: &str) -> Result<(), OpenError> {
        tracing::debug!(url = %url, window = %target_name, "opening in system browser");

        let url = url.to_string();
        let handoff = tokio::task::spawn_blocking({
            let url = url.clone();
            move || open::that(&url)
        })
        .await;

        match handoff {
            Ok(Ok(())) => Ok(()),
            Ok(Err(e)) => Err(OpenError::HandoffFailed {
                url,
                message: e.to_string(),
            }),
            Err(e) => Err(OpenError::HandoffFailed {
                url,
                message: format!("browser handoff task failed: {}", e),
            }),
        }
    }
}
