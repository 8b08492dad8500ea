use std::borrow::Cow;
use std::fmt::{Display, Formatter};

/// A value that can be assigned to an element property or spliced into tagged text.
///
/// Conversion to text happens through [`Display`] and is raw: nothing is escaped.
#[derive(Clone, Debug, PartialEq)]
#[allow(missing_docs)]
pub enum Value {
    Text(Cow<'static, str>),
    Float(f64),
    Int(i64),
    Uint(u64),
    Bool(bool),
}

/// Convert a borrowed value into a [`Value`] without giving it up.
///
/// This is what the [`text!`](crate::text) macro calls on each interpolated expression, so
/// interpolating a `String` does not move it.
pub trait ToValue {
    /// Produce an owned [`Value`].
    fn to_value(&self) -> Value;
}

impl<T: Clone + Into<Value>> ToValue for T {
    fn to_value(&self) -> Value {
        self.clone().into()
    }
}

impl Display for Value {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Value::Text(a) => write!(f, "{a}"),
            Value::Float(a) => write!(f, "{a}"),
            Value::Int(a) => write!(f, "{a}"),
            Value::Uint(a) => write!(f, "{a}"),
            Value::Bool(a) => write!(f, "{a}"),
        }
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::Text(Cow::Owned(value.to_string()))
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::Text(Cow::Owned(value))
    }
}

impl From<&String> for Value {
    fn from(value: &String) -> Self {
        Value::Text(Cow::Owned(value.clone()))
    }
}

impl From<Cow<'static, str>> for Value {
    fn from(value: Cow<'static, str>) -> Self {
        Value::Text(value)
    }
}

impl From<char> for Value {
    fn from(value: char) -> Self {
        Value::Text(Cow::Owned(value.to_string()))
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Bool(value)
    }
}

macro_rules! from_number {
    ($variant:ident($target:ty): $($ty:ty),*) => {
        $(
            impl From<$ty> for Value {
                fn from(value: $ty) -> Self {
                    Value::$variant(value as $target)
                }
            }
        )*
    };
}

from_number!(Int(i64): i8, i16, i32, i64, isize);
from_number!(Uint(u64): u8, u16, u32, u64, usize);
from_number!(Float(f64): f32, f64);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_is_raw() {
        assert_eq!(Value::from("<b>").to_string(), "<b>");
        assert_eq!(Value::from(42).to_string(), "42");
        assert_eq!(Value::from(1.5).to_string(), "1.5");
        assert_eq!(Value::from(false).to_string(), "false");
    }
}
