//! Element type for the in-memory page model.
//!
//! Elements carry a tag name, a class list, attributes, and text content.
//! They are plain data; tree shape lives in [`crate::dom::Document`].

/// A single element in a page tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    tag: String,
    classes: Vec<String>,
    attributes: Vec<(String, String)>,
    text: String,
}

impl Element {
    /// Create an element with the given tag name and no classes or attributes.
    pub fn new(tag: &str) -> Self {
        Self {
            tag: tag.to_string(),
            classes: Vec::new(),
            attributes: Vec::new(),
            text: String::new(),
        }
    }

    /// Add a class to the element's class list.
    pub fn with_class(mut self, class: &str) -> Self {
        self.classes.push(class.to_string());
        self
    }

    /// Set an attribute on the element.
    ///
    /// Setting the same attribute twice replaces the earlier value.
    pub fn with_attr(mut self, name: &str, value: &str) -> Self {
        if let Some(existing) = self.attributes.iter_mut().find(|(n, _)| n == name) {
            existing.1 = value.to_string();
        } else {
            self.attributes.push((name.to_string(), value.to_string()));
        }
        self
    }

    /// Set the element's text content.
    pub fn with_text(mut self, text: &str) -> Self {
        self.text = text.to_string();
        self
    }

    /// The element's tag name.
    pub fn tag(&self) -> &str {
        &self.tag
    }

    /// Check whether the element carries the given class.
    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    /// Look up an attribute by name.
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    /// The element's `href` attribute, or the empty string when unset.
    pub fn href(&self) -> &str {
        self.attr("href").unwrap_or("")
    }

    /// The element's `target` attribute, or the empty string when unset.
    ///
    /// An empty target is meaningful to window openers (the current
    /// browsing context), so absence and `target=""` read the same.
    pub fn target(&self) -> &str {
        self.attr("target").unwrap_or("")
    }

    /// The element's text content.
    pub fn text(&self) -> &str {
        &self.text
    }
}
