//! Tag and class selectors for querying a document.
//!
//! Supports the `tag.class` form used to find marked console links,
//! e.g. `a.aws-console`. Combinators and other CSS features are out
//! of scope.

use thiserror::Error;

use crate::dom::Element;

/// Errors from parsing a selector string.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SelectorError {
    /// The selector string was empty.
    #[error("empty selector")]
    Empty,

    /// A `.` was not followed by a class name.
    #[error("empty class name in selector: {0}")]
    EmptyClass(String),

    /// The selector contained a character outside the `tag.class` grammar.
    #[error("unsupported character {1:?} in selector: {0}")]
    UnsupportedChar(String, char),
}

/// A parsed selector matching elements by tag name and class list.
///
/// The grammar is `[tag]('.'class)*`. A missing tag matches any tag;
/// every listed class must be present on the element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selector {
    tag: Option<String>,
    classes: Vec<String>,
}

impl Selector {
    /// Parse a selector string.
    pub fn parse(input: &str) -> Result<Self, SelectorError> {
        if input.is_empty() {
            return Err(SelectorError::Empty);
        }

        for ch in input.chars() {
            if !ch.is_ascii_alphanumeric() && ch != '.' && ch != '-' && ch != '_' {
                return Err(SelectorError::UnsupportedChar(input.to_string(), ch));
            }
        }

        let mut parts = input.split('.');
        // First segment is the tag; empty means "any tag" (selector began with '.').
        let tag = match parts.next() {
            Some("") | None => None,
            Some(t) => Some(t.to_string()),
        };

        let mut classes = Vec::new();
        for part in parts {
            if part.is_empty() {
                return Err(SelectorError::EmptyClass(input.to_string()));
            }
            classes.push(part.to_string());
        }

        if tag.is_none() && classes.is_empty() {
            return Err(SelectorError::Empty);
        }

        Ok(Self { tag, classes })
    }

    /// Check whether an element matches this selector.
    pub fn matches(&self, element: &Element) -> bool {
        if let Some(tag) = &self.tag {
            if element.tag() != tag {
                return false;
            }
        }
        self.classes.iter().all(|class| element.has_class(class))
    }
}

impl std::fmt::Display for Selector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if let Some(tag) = &self.tag {
            write!(f, "{}", tag)?;
        }
        for class in &self.classes {
            write!(f, ".{}", class)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_tag_and_class() {
        let sel = Selector::parse("a.aws-console").unwrap();
        assert!(sel.matches(&Element::new("a").with_class("aws-console")));
        assert!(!sel.matches(&Element::new("a")));
        assert!(!sel.matches(&Element::new("div").with_class("aws-console")));
    }

    #[test]
    fn test_parse_tag_only() {
        let sel = Selector::parse("td").unwrap();
        assert!(sel.matches(&Element::new("td")));
        assert!(sel.matches(&Element::new("td").with_class("anything")));
        assert!(!sel.matches(&Element::new("tr")));
    }

    #[test]
    fn test_parse_class_only() {
        let sel = Selector::parse(".aws-console").unwrap();
        assert!(sel.matches(&Element::new("a").with_class("aws-console")));
        assert!(sel.matches(&Element::new("button").with_class("aws-console")));
        assert!(!sel.matches(&Element::new("a")));
    }

    #[test]
    fn test_parse_multiple_classes() {
        let sel = Selector::parse("a.aws-console.wide").unwrap();
        assert!(sel.matches(
            &Element::new("a").with_class("aws-console").with_class("wide")
        ));
        assert!(!sel.matches(&Element::new("a").with_class("aws-console")));
    }

    #[test]
    fn test_extra_classes_still_match() {
        let sel = Selector::parse("a.aws-console").unwrap();
        let el = Element::new("a")
            .with_class("nav")
            .with_class("aws-console")
            .with_class("wide");
        assert!(sel.matches(&el));
    }

    #[test]
    fn test_parse_empty() {
        assert_eq!(Selector::parse(""), Err(SelectorError::Empty));
    }

    #[test]
    fn test_parse_empty_class() {
        assert_eq!(
            Selector::parse("a."),
            Err(SelectorError::EmptyClass("a.".to_string()))
        );
        assert_eq!(
            Selector::parse("a..x"),
            Err(SelectorError::EmptyClass("a..x".to_string()))
        );
    }

    #[test]
    fn test_parse_unsupported_char() {
        assert_eq!(
            Selector::parse("a > b"),
            Err(SelectorError::UnsupportedChar("a > b".to_string(), ' '))
        );
        assert_eq!(
            Selector::parse("a#id"),
            Err(SelectorError::UnsupportedChar("a#id".to_string(), '#'))
        );
    }

    #[test]
    fn test_display_round_trip() {
        for input in ["a.aws-console", "td", ".aws-console", "a.x.y"] {
            let sel = Selector::parse(input).unwrap();
            assert_eq!(format!("{}", sel), input);
        }
    }
}
