//! Per-element click registration and dispatch.
//!
//! Handlers are bound to individual nodes, and a click on a node runs
//! that node's handlers before bubbling to its ancestors. This mirrors
//! how the page wires one listener per console link rather than a
//! single delegated listener at the root.

use std::collections::HashMap;

use crate::dom::{Document, NodeId};
use crate::events::ClickEvent;

/// A click handler bound to a single element.
pub type ClickHandler = Box<dyn FnMut(&mut ClickEvent) + Send>;

/// Registry of click handlers keyed by node.
#[derive(Default)]
pub struct EventDispatcher {
    listeners: HashMap<NodeId, Vec<ClickHandler>>,
}

impl EventDispatcher {
    /// Create an empty dispatcher.
    pub fn new() -> Self {
        Self {
            listeners: HashMap::new(),
        }
    }

    /// Register a click handler on a node.
    ///
    /// Handlers on the same node run in registration order.
    pub fn on_click(&mut self, node: NodeId, handler: ClickHandler) {
        self.listeners.entry(node).or_default().push(handler);
    }

    /// Number of handlers registered on a node.
    pub fn listener_count(&self, node: NodeId) -> usize {
        self.listeners.get(&node).map_or(0, |h| h.len())
    }

    /// Total number of handlers across all nodes.
    pub fn total_listeners(&self) -> usize {
        self.listeners.values().map(|h| h.len()).sum()
    }

    /// Whether no handlers are registered at all.
    pub fn is_empty(&self) -> bool {
        self.listeners.is_empty()
    }

    /// Dispatch a click on `node`, bubbling toward the document root.
    ///
    /// The event's `href` and `target` are snapshotted from the clicked
    /// element. All handlers on the clicked node run; then each ancestor's
    /// handlers run in turn unless a handler has called
    /// [`ClickEvent::stop_propagation`]. Clicking a node with no handlers
    /// anywhere on its ancestor chain is a no-op.
    pub fn click(&mut self, document: &Document, node: NodeId) -> ClickEvent {
        let element = document.element(node);
        let mut event = ClickEvent::new(
            node,
            element.href().to_string(),
            element.target().to_string(),
        );

        let mut current = Some(node);
        while let Some(id) = current {
            if let Some(handlers) = self.listeners.get_mut(&id) {
                for handler in handlers.iter_mut() {
                    handler(&mut event);
                }
            }
            // stop_propagation halts bubbling between elements, not
            // between handlers on the same element.
            if event.propagation_stopped() {
                break;
            }
            current = document.parent(id);
        }

        event
    }
}

impl std::fmt::Debug for EventDispatcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EventDispatcher")
            .field("nodes", &self.listeners.len())
            .field("listeners", &self.total_listeners())
            .finish()
    }
}
