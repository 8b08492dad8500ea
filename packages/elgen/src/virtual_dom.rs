//! An in-memory document for targets without a browser, and for tests.

use crate::{Document, DocumentConfig, Error, Result, Value};
use rustc_hash::FxHashMap;
use std::cell::Cell;
use std::rc::Rc;

/// A unique identifier for an element allocated by a [`VirtualDocument`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ElementId(pub usize);

/// A document that keeps nothing but a counter: elements are handed out and never attached anywhere.
///
/// Clones share the same counter, so ids stay unique across every handle to one document.
#[derive(Clone, Debug, Default)]
pub struct VirtualDocument {
    inner: Rc<DocumentState>,
}

#[derive(Debug, Default)]
struct DocumentState {
    config: DocumentConfig,
    next_id: Cell<usize>,
}

impl VirtualDocument {
    /// Create a document that accepts any syntactically valid tag name.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a document with the given configuration.
    pub fn with_config(config: DocumentConfig) -> Self {
        Self {
            inner: Rc::new(DocumentState {
                config,
                next_id: Cell::new(0),
            }),
        }
    }

    /// How many elements this document has allocated so far.
    pub fn created(&self) -> usize {
        self.inner.next_id.get()
    }

    fn validate_tag(&self, tag: &str) -> Result<String> {
        let invalid = |reason: &str| Error::InvalidElementType {
            tag: tag.to_string(),
            reason: reason.to_string(),
        };

        let mut chars = tag.chars();
        match chars.next() {
            None => return Err(invalid("tag name is empty")),
            Some(c) if !c.is_ascii_alphabetic() => {
                return Err(invalid("tag name must start with an ASCII letter"))
            }
            Some(_) => {}
        }
        if let Some(c) = chars.find(|c| !(c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.'))) {
            return Err(invalid(&format!("tag name contains invalid character {c:?}")));
        }

        let tag = tag.to_ascii_lowercase();
        if self.inner.config.strict_tags && !self.inner.config.is_known(&tag) {
            return Err(invalid("not a known HTML element"));
        }
        Ok(tag)
    }
}

impl Document for VirtualDocument {
    type Element = VirtualElement;

    fn create_element(&self, tag: &str) -> Result<VirtualElement> {
        let tag = match self.validate_tag(tag) {
            Ok(tag) => tag,
            Err(err) => {
                tracing::warn!("virtual document rejected element type: {err}");
                return Err(err);
            }
        };

        let id = ElementId(self.inner.next_id.get());
        self.inner.next_id.set(id.0 + 1);
        tracing::trace!(tag = %tag, id = id.0, "created virtual element");

        Ok(VirtualElement {
            id,
            tag,
            properties: FxHashMap::default(),
            text_content: String::new(),
        })
    }

    fn set_property(&self, element: &mut VirtualElement, name: &str, value: &Value) -> Result<()> {
        element.properties.insert(name.to_string(), value.clone());
        Ok(())
    }

    fn set_text_content(&self, element: &mut VirtualElement, text: &str) {
        element.text_content.clear();
        element.text_content.push_str(text);
    }
}

/// An element allocated by a [`VirtualDocument`].
#[derive(Clone, Debug, PartialEq)]
pub struct VirtualElement {
    id: ElementId,
    tag: String,
    properties: FxHashMap<String, Value>,
    text_content: String,
}

impl VirtualElement {
    /// The id the document assigned to this element.
    pub fn id(&self) -> ElementId {
        self.id
    }

    /// The lowercase tag name.
    pub fn tag(&self) -> &str {
        &self.tag
    }

    /// The current value of a property.
    pub fn property(&self, name: &str) -> Option<&Value> {
        self.properties.get(name)
    }

    /// Every property that has been assigned, in no particular order.
    pub fn properties(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.properties.iter().map(|(name, value)| (name.as_str(), value))
    }

    /// The text content of the element.
    pub fn text_content(&self) -> &str {
        &self.text_content
    }

    /// Compare everything but the id: two separately created elements with the same configuration are "the same element".
    pub fn same_as(&self, other: &Self) -> bool {
        self.tag == other.tag
            && self.properties == other.properties
            && self.text_content == other.text_content
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tag_names_are_checked() {
        let doc = VirtualDocument::new();
        assert!(doc.create_element("div").is_ok());
        assert!(doc.create_element("my-widget").is_ok());
        assert!(doc.create_element("").is_err());
        assert!(doc.create_element("1div").is_err());
        assert!(doc.create_element("di v").is_err());
        assert_eq!(doc.created(), 2);
    }

    #[test]
    fn tags_are_lowercased() {
        let doc = VirtualDocument::new();
        assert_eq!(doc.create_element("DIV").unwrap().tag(), "div");
    }

    #[test]
    fn strict_mode_only_takes_known_tags() {
        let mut cfg = DocumentConfig::default();
        cfg.strict_tags(true).extra_tag("Widget");
        let doc = VirtualDocument::with_config(cfg);
        assert!(doc.create_element("span").is_ok());
        assert!(doc.create_element("widget").is_ok());
        assert!(doc.create_element("x-card").is_ok());
        assert!(matches!(
            doc.create_element("blink"),
            Err(Error::InvalidElementType { .. })
        ));
    }

    #[test]
    fn clones_share_the_id_counter() {
        let doc = VirtualDocument::new();
        let other = doc.clone();
        let a = doc.create_element("p").unwrap();
        let b = other.create_element("p").unwrap();
        assert_ne!(a.id(), b.id());
        assert_eq!(doc.created(), 2);
    }
}
