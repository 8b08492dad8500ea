//! Tagged text: literal segments with interpolated values between them.
//!
//! A tagged text of `n + 1` literal segments carries `n` values and concatenates to
//! `s0 + v0 + s1 + v1 + ... + v(n-1) + sn`.

use crate::{Error, Result, Value};
use std::borrow::Cow;

/// How to treat a tagged text whose value count does not match its literal segments.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum InterpolationPolicy {
    /// Reject the text with [`Error::MismatchedInterpolation`].
    #[default]
    Strict,

    /// Drop surplus values and render each missing value as [`UNDEFINED`].
    ///
    /// This mirrors what a host script would produce when it shifts values off a list as it walks the
    /// literals.
    Lenient,
}

/// The token rendered in place of a missing value under [`InterpolationPolicy::Lenient`].
pub const UNDEFINED: &str = "undefined";

/// Literal segments plus the values spliced between them.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TaggedText {
    strings: Vec<Cow<'static, str>>,
    values: Vec<Value>,
}

impl TaggedText {
    /// Pair up literal segments and values. The shape is checked when the text is concatenated, not here.
    pub fn new<S, V>(
        strings: impl IntoIterator<Item = S>,
        values: impl IntoIterator<Item = V>,
    ) -> Self
    where
        S: Into<Cow<'static, str>>,
        V: Into<Value>,
    {
        Self {
            strings: strings.into_iter().map(Into::into).collect(),
            values: values.into_iter().map(Into::into).collect(),
        }
    }

    /// A tagged text made of a single literal and no values.
    pub fn literal(text: impl Into<Cow<'static, str>>) -> Self {
        Self {
            strings: vec![text.into()],
            values: Vec::new(),
        }
    }

    /// Append literal text. Adjacent literals merge into one segment.
    pub fn push_str(&mut self, text: &str) {
        let ends_on_literal = self.strings.len() > self.values.len();
        match self.strings.last_mut() {
            Some(last) if ends_on_literal => last.to_mut().push_str(text),
            _ => self.strings.push(Cow::Owned(text.to_string())),
        }
    }

    /// Append an interpolated value, keeping the text well formed.
    ///
    /// An empty literal is inserted in front of the value when needed, and one after it so the text
    /// always ends on a literal.
    pub fn push_value(&mut self, value: impl Into<Value>) {
        if self.strings.len() <= self.values.len() {
            self.strings.push(Cow::Borrowed(""));
        }
        self.values.push(value.into());
        self.strings.push(Cow::Borrowed(""));
    }

    /// The literal segments, in order.
    pub fn strings(&self) -> &[Cow<'static, str>] {
        &self.strings
    }

    /// The interpolated values, in order.
    pub fn values(&self) -> &[Value] {
        &self.values
    }

    /// Check that there is exactly one more literal segment than there are values.
    pub fn validate(&self) -> Result<()> {
        if self.strings.is_empty() {
            return Err(Error::EmptyTaggedText);
        }
        if self.values.len() + 1 != self.strings.len() {
            return Err(Error::MismatchedInterpolation {
                strings: self.strings.len(),
                values: self.values.len(),
            });
        }
        Ok(())
    }

    /// Concatenate the literals and values into a single string.
    pub fn concat(&self, policy: InterpolationPolicy) -> Result<String> {
        let Some((first, rest)) = self.strings.split_first() else {
            tracing::debug!("rejecting tagged text with no literal segments");
            return Err(Error::EmptyTaggedText);
        };

        if policy == InterpolationPolicy::Strict {
            if let Err(err) = self.validate() {
                tracing::debug!("rejecting tagged text: {err}");
                return Err(err);
            }
        } else if self.values.len() != rest.len() {
            tracing::debug!(
                strings = self.strings.len(),
                values = self.values.len(),
                "interpolation count mismatch, falling back to lenient concatenation"
            );
        }

        let mut out = first.to_string();
        let mut values = self.values.iter();
        for literal in rest {
            match values.next() {
                Some(value) => out.push_str(&value.to_string()),
                None => out.push_str(UNDEFINED),
            }
            out.push_str(literal);
        }
        Ok(out)
    }
}

impl From<&'static str> for TaggedText {
    fn from(text: &'static str) -> Self {
        Self::literal(text)
    }
}

impl From<String> for TaggedText {
    fn from(text: String) -> Self {
        Self::literal(text)
    }
}
