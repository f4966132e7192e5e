//! Click event payload.

use crate::dom::NodeId;

/// A click on an element, as seen by registered handlers.
///
/// The event snapshots the clicked element's `href` and `target` at
/// dispatch time so handlers read consistent values even if the
/// document is rebuilt afterwards. `element` always names the node
/// originally clicked, including while the event bubbles through
/// ancestors.
#[derive(Debug, Clone)]
pub struct ClickEvent {
    element: NodeId,
    href: String,
    target_name: String,
    propagation_stopped: bool,
}

impl ClickEvent {
    pub(crate) fn new(element: NodeId, href: String, target_name: String) -> Self {
        Self {
            element,
            href,
            target_name,
            propagation_stopped: false,
        }
    }

    /// The node that was clicked.
    pub fn element(&self) -> NodeId {
        self.element
    }

    /// The clicked element's `href` attribute.
    pub fn href(&self) -> &str {
        &self.href
    }

    /// The clicked element's `target` attribute. May be empty.
    pub fn target_name(&self) -> &str {
        &self.target_name
    }

    /// Stop the event from reaching handlers on ancestor elements.
    ///
    /// Remaining handlers on the clicked element itself still run.
    pub fn stop_propagation(&mut self) {
        self.propagation_stopped = true;
    }

    /// Whether a handler has stopped propagation.
    pub fn propagation_stopped(&self) -> bool {
        self.propagation_stopped
    }
}
