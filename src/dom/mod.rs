//! In-memory page model.
//!
//! A [`Document`] is an arena of elements with parent/child links, built
//! by the page renderer and handed to the relay for click wiring. It is
//! deliberately small: enough tree to attach listeners per element and
//! to bubble clicks toward the root, nothing more.

mod element;
mod selector;

pub use element::Element;
pub use selector::{Selector, SelectorError};

/// Handle to an element inside a [`Document`].
///
/// Ids are only meaningful for the document that issued them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(usize);

#[derive(Debug)]
struct Node {
    element: Element,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
}

/// An element tree with a fixed `body` root.
#[derive(Debug)]
pub struct Document {
    nodes: Vec<Node>,
}

impl Document {
    /// Create a document containing only the `body` root.
    pub fn new() -> Self {
        Self {
            nodes: vec![Node {
                element: Element::new("body"),
                parent: None,
                children: Vec::new(),
            }],
        }
    }

    /// The root element's id.
    pub fn root(&self) -> NodeId {
        NodeId(0)
    }

    /// Append an element as the last child of `parent`.
    pub fn append(&mut self, parent: NodeId, element: Element) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(Node {
            element,
            parent: Some(parent),
            children: Vec::new(),
        });
        self.nodes[parent.0].children.push(id);
        id
    }

    /// Borrow the element for a node.
    pub fn element(&self, id: NodeId) -> &Element {
        &self.nodes[id.0].element
    }

    /// The parent of a node, or `None` for the root.
    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.nodes[id.0].parent
    }

    /// The node's children in insertion order.
    pub fn children(&self, id: NodeId) -> &[NodeId] {
        &self.nodes[id.0].children
    }

    /// Find every element matching `selector`, in document order.
    ///
    /// Document order is a depth-first walk from the root, visiting each
    /// node before its children.
    pub fn query_all(&self, selector: &Selector) -> Vec<NodeId> {
        let mut matches = Vec::new();
        let mut stack = vec![self.root()];
        while let Some(id) = stack.pop() {
            if selector.matches(self.element(id)) {
                matches.push(id);
            }
            // Push in reverse so the first child is visited first.
            for child in self.children(id).iter().rev() {
                stack.push(*child);
            }
        }
        matches
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_document_has_body_root() {
        let doc = Document::new();
        assert_eq!(doc.element(doc.root()).tag(), "body");
        assert_eq!(doc.parent(doc.root()), None);
        assert!(doc.children(doc.root()).is_empty());
    }

    #[test]
    fn test_append_links_parent_and_children() {
        let mut doc = Document::new();
        let table = doc.append(doc.root(), Element::new("table"));
        let row = doc.append(table, Element::new("tr"));

        assert_eq!(doc.parent(table), Some(doc.root()));
        assert_eq!(doc.parent(row), Some(table));
        assert_eq!(doc.children(doc.root()), &[table]);
        assert_eq!(doc.children(table), &[row]);
    }

    #[test]
    fn test_query_all_document_order() {
        let mut doc = Document::new();
        let table = doc.append(doc.root(), Element::new("table"));
        let row_a = doc.append(table, Element::new("tr"));
        let link_a = doc.append(row_a, Element::new("a").with_class("aws-console"));
        let row_b = doc.append(table, Element::new("tr"));
        let link_b = doc.append(row_b, Element::new("a").with_class("aws-console"));
        // A link outside any table, appended last.
        let link_c = doc.append(doc.root(), Element::new("a").with_class("aws-console"));

        let sel = Selector::parse("a.aws-console").unwrap();
        assert_eq!(doc.query_all(&sel), vec![link_a, link_b, link_c]);
    }

    #[test]
    fn test_query_all_skips_unmarked() {
        let mut doc = Document::new();
        doc.append(doc.root(), Element::new("a"));
        let marked = doc.append(doc.root(), Element::new("a").with_class("aws-console"));
        doc.append(doc.root(), Element::new("div").with_class("aws-console"));

        let sel = Selector::parse("a.aws-console").unwrap();
        assert_eq!(doc.query_all(&sel), vec![marked]);
    }

    #[test]
    fn test_query_all_empty_document() {
        let doc = Document::new();
        let sel = Selector::parse("a.aws-console").unwrap();
        assert!(doc.query_all(&sel).is_empty());
    }
}
