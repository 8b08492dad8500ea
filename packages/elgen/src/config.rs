use rustc_hash::FxHashSet;

/// Configuration for the [`VirtualDocument`](crate::VirtualDocument).
///
/// # Example
///
/// ```rust
/// use elgen::{DocumentConfig, VirtualDocument};
///
/// let mut cfg = DocumentConfig::default();
/// cfg.strict_tags(true).extra_tag("my_widget");
/// let document = VirtualDocument::with_config(cfg);
/// ```
#[derive(Clone, Debug, Default)]
pub struct DocumentConfig {
    pub(crate) strict_tags: bool,
    pub(crate) extra_tags: FxHashSet<String>,
}

impl DocumentConfig {
    /// Only accept known HTML tags, registered extra tags, and custom element names (names containing a `-`).
    ///
    /// Without this, any syntactically valid element name is accepted.
    pub fn strict_tags(&mut self, strict: bool) -> &mut Self {
        self.strict_tags = strict;
        self
    }

    /// Register an additional tag name that strict mode should accept.
    pub fn extra_tag(&mut self, tag: impl Into<String>) -> &mut Self {
        self.extra_tags.insert(tag.into().to_ascii_lowercase());
        self
    }

    pub(crate) fn is_known(&self, tag: &str) -> bool {
        crate::tags::KNOWN_TAGS.contains(&tag) || self.extra_tags.contains(tag) || tag.contains('-')
    }
}
