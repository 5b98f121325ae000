//! Loosely typed shortcode attributes as they arrive from the host.

use std::collections::BTreeMap;

/// A single raw attribute value. Hosts hand us whatever the author typed, or
/// whatever a block editor serialized, so every shape is representable.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
pub enum AttrValue {
    #[default]
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(String),
}

impl AttrValue {
    pub fn as_str(&self) -> Option<&str> {
        match self {
            AttrValue::Str(s) => Some(s.as_str()),
            _ => None,
        }
    }

    /// `Null` or an empty string: the author did not really supply a value.
    pub fn is_blank(&self) -> bool {
        match self {
            AttrValue::Null => true,
            AttrValue::Str(s) => s.is_empty(),
            _ => false,
        }
    }
}

impl From<&str> for AttrValue {
    fn from(value: &str) -> Self {
        AttrValue::Str(value.to_string())
    }
}

impl From<String> for AttrValue {
    fn from(value: String) -> Self {
        AttrValue::Str(value)
    }
}

impl From<bool> for AttrValue {
    fn from(value: bool) -> Self {
        AttrValue::Bool(value)
    }
}

impl From<i64> for AttrValue {
    fn from(value: i64) -> Self {
        AttrValue::Int(value)
    }
}

impl From<i32> for AttrValue {
    fn from(value: i32) -> Self {
        AttrValue::Int(i64::from(value))
    }
}

impl From<u32> for AttrValue {
    fn from(value: u32) -> Self {
        AttrValue::Int(i64::from(value))
    }
}

impl From<f64> for AttrValue {
    fn from(value: f64) -> Self {
        AttrValue::Float(value)
    }
}

impl<T: Into<AttrValue>> From<Option<T>> for AttrValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(AttrValue::Null, Into::into)
    }
}

/// Attribute bag keyed by lowercased attribute name.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct RawAttributes {
    values: BTreeMap<String, AttrValue>,
}

impl RawAttributes {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a value, replacing any earlier one under the same key.
    pub fn insert(&mut self, key: &str, value: impl Into<AttrValue>) {
        self.values.insert(key.to_ascii_lowercase(), value.into());
    }

    pub fn with(mut self, key: &str, value: impl Into<AttrValue>) -> Self {
        self.insert(key, value);
        self
    }

    pub fn get(&self, key: &str) -> Option<&AttrValue> {
        self.values.get(&key.to_ascii_lowercase())
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &AttrValue)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl<K, V> FromIterator<(K, V)> for RawAttributes
where
    K: AsRef<str>,
    V: Into<AttrValue>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut attrs = RawAttributes::new();
        for (key, value) in iter {
            attrs.insert(key.as_ref(), value);
        }
        attrs
    }
}

#[cfg(test)]
mod tests {
    use super::{AttrValue, RawAttributes};

    #[test]
    fn keys_are_case_insensitive() {
        let attrs = RawAttributes::new().with("Layout", "carousel");
        assert_eq!(attrs.get("layout"), Some(&AttrValue::from("carousel")));
        assert!(attrs.contains_key("LAYOUT"));
    }

    #[test]
    fn later_insert_wins() {
        let attrs: RawAttributes =
            [("count", "3"), ("COUNT", "5")].into_iter().collect();
        assert_eq!(attrs.len(), 1);
        assert_eq!(attrs.get("count"), Some(&AttrValue::from("5")));
    }

    #[test]
    fn blank_covers_null_and_empty_string_only() {
        assert!(AttrValue::Null.is_blank());
        assert!(AttrValue::from("").is_blank());
        assert!(!AttrValue::from(" ").is_blank());
        assert!(!AttrValue::from(0).is_blank());
        assert!(!AttrValue::from(false).is_blank());
    }
}
