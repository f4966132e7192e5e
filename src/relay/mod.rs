//! Fresh-session relay for console sign-in links.
//!
//! Links into the AWS Console only land on the right role if no other
//! session is live in the browser. The relay intercepts clicks on marked
//! console links, signs the browser out first, and then follows the
//! link's own destination into the same browsing context once the
//! sign-out has had time to complete.

use std::sync::Arc;
use std::time::Duration;

use once_cell::sync::Lazy;

use crate::dom::{Document, Selector};
use crate::events::EventDispatcher;
use crate::traits::{Scheduler, WindowOpener};

/// Endpoint that terminates the browser's current console session.
pub const LOGOUT_URL: &str = "https://signin.aws.amazon.com/oauth?Action=logout";

/// Pause between opening the logout URL and following the destination.
///
/// The 99th percentile latency on the logout endpoint is about 500ms;
/// waiting twice that keeps the destination open from racing the
/// sign-out.
pub const RELAY_DELAY: Duration = Duration::from_millis(1000);

/// Selector for links that go through the relay.
pub const MARKER_SELECTOR: &str = "a.aws-console";

static CONSOLE_LINK_SELECTOR: Lazy<Selector> = Lazy::new(|| {
    Selector::parse(MARKER_SELECTOR).expect("marker selector is valid")
});

/// Wires marked console links to the logout-then-follow sequence.
///
/// Arming a document registers one click handler per `a.aws-console`
/// element. Each click stops propagation and starts an independent
/// fire-and-forget chain: the logout URL opens in the link's target
/// right away, and the link's own `href` opens in the same target
/// [`RELAY_DELAY`] later. Chains from rapid clicks overlap freely;
/// nothing is tracked or cancelled, and a failed logout open does not
/// stop the destination open.
pub struct LogoutRelay {
    opener: Arc<dyn WindowOpener>,
    scheduler: Arc<dyn Scheduler>,
}

impl LogoutRelay {
    /// Create a relay over the given opener and scheduler.
    pub fn new(opener: Arc<dyn WindowOpener>, scheduler: Arc<dyn Scheduler>) -> Self {
        Self { opener, scheduler }
    }

    /// Attach the relay to every marked link in `document`.
    ///
    /// Each matching element gets exactly one handler per call. Returns
    /// the number of links armed.
    pub fn arm(&self, document: &Document, dispatcher: &mut EventDispatcher) -> usize {
        let links = document.query_all(&CONSOLE_LINK_SELECTOR);
        for node in &links {
            let opener = Arc::clone(&self.opener);
            let scheduler = Arc::clone(&self.scheduler);
            dispatcher.on_click(
                *node,
                Box::new(move |event| {
                    event.stop_propagation();
                    let href = event.href().to_string();
                    let target = event.target_name().to_string();
                    let task_opener = Arc::clone(&opener);
                    let task_scheduler = Arc::clone(&scheduler);
                    scheduler.defer(Box::pin(async move {
                        if let Err(e) = task_opener.open(LOGOUT_URL, &target).await {
                            tracing::warn!(
                                error = %e,
                                window = %target,
                                "logout open failed, still following destination"
                            );
                        }
                        task_scheduler.schedule_after(
                            RELAY_DELAY,
                            Box::pin(async move {
                                if let Err(e) = task_opener.open(&href, &target).await {
                                    tracing::warn!(
                                        error = %e,
                                        url = %href,
                                        window = %target,
                                        "destination open failed"
                                    );
                                }
                            }),
                        );
                    }));
                }),
            );
        }
        tracing::debug!(count = links.len(), "armed console links");
        links.len()
    }
}
