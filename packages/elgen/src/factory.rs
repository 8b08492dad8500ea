use crate::{Document, InterpolationPolicy, PropertyMap, Result, TaggedText};
use std::borrow::Cow;

/// Create an [`ElementFactory`] for `tag` on `document`.
///
/// ```rust
/// use elgen::{make_element_factory, TaggedText, VirtualDocument};
///
/// let div = make_element_factory(VirtualDocument::new(), "div");
/// let el = div
///     .props(None)
///     .build(TaggedText::new(["Hello, ", "!"], ["World"]))
///     .unwrap();
/// assert_eq!(el.text_content(), "Hello, World!");
/// ```
pub fn make_element_factory<D: Document + Clone>(
    document: D,
    tag: impl Into<Cow<'static, str>>,
) -> ElementFactory<D> {
    ElementFactory::new(document, tag)
}

/// Makes elements of one type. Supply properties with [`props`](Self::props) to get a
/// [`PendingElement`], then give that some tagged text.
#[derive(Clone, Debug)]
pub struct ElementFactory<D> {
    document: D,
    tag: Cow<'static, str>,
    policy: InterpolationPolicy,
}

impl<D: Document + Clone> ElementFactory<D> {
    /// Create a factory for `tag`. The name is only checked by the document once an element is built.
    pub fn new(document: D, tag: impl Into<Cow<'static, str>>) -> Self {
        Self {
            document,
            tag: tag.into(),
            policy: InterpolationPolicy::default(),
        }
    }

    /// Set how mismatched tagged text is handled by elements from this factory.
    pub fn policy(mut self, policy: InterpolationPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// The tag name this factory builds.
    pub fn tag(&self) -> &str {
        &self.tag
    }

    /// Attach an optional property map, getting back something that builds elements from tagged text.
    pub fn props(&self, props: impl Into<Option<PropertyMap>>) -> PendingElement<D> {
        PendingElement {
            document: self.document.clone(),
            tag: self.tag.clone(),
            props: props.into(),
            policy: self.policy,
        }
    }

    /// Build an element with no properties.
    pub fn build(&self, text: impl Into<TaggedText>) -> Result<D::Element> {
        self.props(None).build(text)
    }
}

/// A factory with its properties attached, waiting for tagged text.
///
/// Building never consumes the pending element; every call allocates a brand new element.
#[derive(Clone, Debug)]
pub struct PendingElement<D> {
    document: D,
    tag: Cow<'static, str>,
    props: Option<PropertyMap>,
    policy: InterpolationPolicy,
}

impl<D: Document> PendingElement<D> {
    /// The tag name this pending element will build.
    pub fn tag(&self) -> &str {
        &self.tag
    }

    /// The properties that will be applied, if any.
    pub fn properties(&self) -> Option<&PropertyMap> {
        self.props.as_ref()
    }

    /// Create the element, apply the properties in order, then set its text content.
    pub fn build(&self, text: impl Into<TaggedText>) -> Result<D::Element> {
        let mut element = self.document.create_element(&self.tag)?;

        if let Some(props) = &self.props {
            for (name, value) in props.iter() {
                tracing::trace!(tag = %self.tag, property = name, "applying property");
                self.document.set_property(&mut element, name, value)?;
            }
        }

        let content = text.into().concat(self.policy)?;
        self.document.set_text_content(&mut element, &content);
        Ok(element)
    }

    /// Turn this into a plain closure from tagged text to element.
    pub fn into_fn(self) -> impl Fn(TaggedText) -> Result<D::Element> {
        move |text: TaggedText| self.build(text)
    }
}
