use crate::Value;
use std::borrow::Cow;

/// An ordered set of properties to assign onto a freshly created element.
///
/// Entries are applied in insertion order. Duplicate names are kept, so when the map is applied the
/// last entry for a name is the one that sticks.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PropertyMap {
    entries: Vec<(Cow<'static, str>, Value)>,
}

impl PropertyMap {
    /// Create an empty property map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a property, returning the map for chaining.
    pub fn with(mut self, name: impl Into<Cow<'static, str>>, value: impl Into<Value>) -> Self {
        self.insert(name, value);
        self
    }

    /// Append a property.
    pub fn insert(&mut self, name: impl Into<Cow<'static, str>>, value: impl Into<Value>) {
        self.entries.push((name.into(), value.into()));
    }

    /// The value that will end up on the element for `name`, if any.
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.entries
            .iter()
            .rev()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value)
    }

    /// Iterate over the entries in application order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.entries.iter().map(|(name, value)| (name.as_ref(), value))
    }

    /// Number of entries, duplicates included.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the map has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K, V> FromIterator<(K, V)> for PropertyMap
where
    K: Into<Cow<'static, str>>,
    V: Into<Value>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = Self::new();
        map.extend(iter);
        map
    }
}

impl<K, V> Extend<(K, V)> for PropertyMap
where
    K: Into<Cow<'static, str>>,
    V: Into<Value>,
{
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (name, value) in iter {
            self.insert(name, value);
        }
    }
}

impl IntoIterator for PropertyMap {
    type Item = (Cow<'static, str>, Value);
    type IntoIter = std::vec::IntoIter<Self::Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

/// Build a [`PropertyMap`] from `name => value` pairs.
///
/// ```rust
/// use elgen::props;
///
/// let props = props! { "className" => "big", "hidden" => false };
/// assert_eq!(props.len(), 2);
/// ```
#[macro_export]
macro_rules! props {
    () => {
        $crate::PropertyMap::new()
    };
    ($($name:expr => $value:expr),+ $(,)?) => {{
        let mut map = $crate::PropertyMap::new();
        $(map.insert($name, $value);)+
        map
    }};
}
