/// A convenience alias for results produced while building elements.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Everything that can go wrong between picking a tag name and getting an element back.
///
/// Errors are reported to the immediate caller. Nothing here is transient, so nothing is retried.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The tagged text had no literal segments to reduce over.
    #[error("tagged text has no literal segments")]
    EmptyTaggedText,

    /// The number of interpolated values was not exactly one less than the number of literal segments.
    #[error("tagged text has {strings} literal segments but {values} interpolated values (expected {})", .strings.saturating_sub(1))]
    MismatchedInterpolation {
        /// Number of literal segments.
        strings: usize,
        /// Number of interpolated values.
        values: usize,
    },

    /// The host document refused to create an element with this tag name.
    #[error("invalid element type `{tag}`: {reason}")]
    InvalidElementType {
        /// The rejected tag name.
        tag: String,
        /// Why the document rejected it.
        reason: String,
    },

    /// The host document refused to assign a property on an element.
    #[error("failed to set property `{name}`: {reason}")]
    InvalidProperty {
        /// The property that could not be set.
        name: String,
        /// Why the document rejected it.
        reason: String,
    },

    /// A generator was called with a property map where an element was expected.
    ///
    /// The call produced a [`PendingElement`](crate::PendingElement) that still needs its tagged text.
    #[error("generator for `{tag}` was given properties, not tagged text; the element is still pending")]
    PendingElement {
        /// The tag the pending element will build.
        tag: String,
    },
}
