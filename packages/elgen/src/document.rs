use crate::{Result, Value};

/// The host capability that allocates elements and lets us configure them.
///
/// Implementations are handles: cloning one must not copy the document, only the reference to it.
/// Element creation goes through here and nothing else, so the host decides which tag names exist.
pub trait Document {
    /// The element type this document allocates.
    type Element;

    /// Allocate a new, unattached element of the given type.
    fn create_element(&self, tag: &str) -> Result<Self::Element>;

    /// Assign `value` to the property `name` on `element`, replacing any previous value.
    fn set_property(&self, element: &mut Self::Element, name: &str, value: &Value) -> Result<()>;

    /// Replace the text content of `element`.
    fn set_text_content(&self, element: &mut Self::Element, text: &str);
}

impl<D: Document + ?Sized> Document for &D {
    type Element = D::Element;

    fn create_element(&self, tag: &str) -> Result<Self::Element> {
        (**self).create_element(tag)
    }

    fn set_property(&self, element: &mut Self::Element, name: &str, value: &Value) -> Result<()> {
        (**self).set_property(element, name, value)
    }

    fn set_text_content(&self, element: &mut Self::Element, text: &str) {
        (**self).set_text_content(element, text)
    }
}
