use crate::{Document, ElementFactory, Error, PendingElement, PropertyMap, Result, TaggedText};
use std::borrow::Cow;

/// Create an [`ElementGenerator`] for `tag` on `document`.
pub fn make_element_generator<D: Document + Clone>(
    document: D,
    tag: impl Into<Cow<'static, str>>,
) -> ElementGenerator<D> {
    ElementGenerator::new(document, tag)
}

/// The two ways a generator can be called.
///
/// The mode is picked from the type of the argument, never from its contents.
#[derive(Clone, Debug, PartialEq)]
pub enum GeneratorArgs {
    /// Build an element right away, with no properties.
    Tag(TaggedText),

    /// Attach properties and return a [`PendingElement`] that still needs tagged text.
    Props(PropertyMap),
}

impl From<TaggedText> for GeneratorArgs {
    fn from(text: TaggedText) -> Self {
        GeneratorArgs::Tag(text)
    }
}

impl From<PropertyMap> for GeneratorArgs {
    fn from(props: PropertyMap) -> Self {
        GeneratorArgs::Props(props)
    }
}

/// What a call to [`ElementGenerator::call`] produced.
#[derive(Debug)]
pub enum Generated<D: Document> {
    /// The call was given tagged text.
    Element(D::Element),

    /// The call was given properties.
    Pending(PendingElement<D>),
}

impl<D: Document> Generated<D> {
    /// The element, or [`Error::PendingElement`] if the call only attached properties.
    pub fn into_element(self) -> Result<D::Element> {
        match self {
            Generated::Element(element) => Ok(element),
            Generated::Pending(pending) => Err(Error::PendingElement {
                tag: pending.tag().to_string(),
            }),
        }
    }

    /// The pending element, if the call attached properties.
    pub fn into_pending(self) -> Option<PendingElement<D>> {
        match self {
            Generated::Pending(pending) => Some(pending),
            Generated::Element(_) => None,
        }
    }
}

/// One handle for both call shapes: tagged text straight away, or properties first.
///
/// ```rust
/// use elgen::{make_element_generator, props, text, VirtualDocument};
///
/// let span = make_element_generator(VirtualDocument::new(), "span");
///
/// let plain = span.as_tag(text!("plain")).unwrap();
/// assert_eq!(plain.text_content(), "plain");
///
/// let score = 42;
/// let big = span
///     .with_props(props! { "className" => "big" })
///     .build(text!("Score: {score}"))
///     .unwrap();
/// assert_eq!(big.text_content(), "Score: 42");
/// ```
#[derive(Clone, Debug)]
pub struct ElementGenerator<D> {
    factory: ElementFactory<D>,
}

impl<D: Document + Clone> ElementGenerator<D> {
    /// Create a generator for `tag`.
    pub fn new(document: D, tag: impl Into<Cow<'static, str>>) -> Self {
        Self {
            factory: ElementFactory::new(document, tag),
        }
    }

    /// Wrap an existing factory, keeping its interpolation policy.
    pub fn from_factory(factory: ElementFactory<D>) -> Self {
        Self { factory }
    }

    /// The tag name this generator builds.
    pub fn tag(&self) -> &str {
        self.factory.tag()
    }

    /// Build an element from tagged text, without properties.
    pub fn as_tag(&self, text: impl Into<TaggedText>) -> Result<D::Element> {
        self.factory.build(text)
    }

    /// Attach properties; the returned pending element builds once it gets tagged text.
    pub fn with_props(&self, props: PropertyMap) -> PendingElement<D> {
        self.factory.props(props)
    }

    /// Dispatch on the kind of argument.
    pub fn call(&self, args: impl Into<GeneratorArgs>) -> Result<Generated<D>> {
        match args.into() {
            GeneratorArgs::Tag(text) => self.as_tag(text).map(Generated::Element),
            GeneratorArgs::Props(props) => Ok(Generated::Pending(self.with_props(props))),
        }
    }
}
