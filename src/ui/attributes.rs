//! Pass-through attributes.
//!
//! Components model their known props as typed fields. Anything else the
//! caller wants on the underlying element (`data-*`, `aria-*`, `name`,
//! `autocomplete`, `form`, ...) travels in an [`Attributes`] bag and is spread
//! onto the primitive unmodified.

use std::borrow::Cow;

use leptos::tachys::html::attribute::any_attribute::{AnyAttribute, IntoAnyAttribute};
use leptos::tachys::html::attribute::custom::custom_attribute;

/// Ordered bag of opaque attributes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Attributes {
    entries: Vec<(Cow<'static, str>, String)>,
}

impl Attributes {
    /// Empty bag.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder form of [`Attributes::insert`].
    #[must_use]
    pub fn with(mut self, name: impl Into<Cow<'static, str>>, value: impl Into<String>) -> Self {
        self.insert(name, value);
        self
    }

    /// Set an attribute. An existing entry with the same name keeps its
    /// position and takes the new value.
    pub fn insert(&mut self, name: impl Into<Cow<'static, str>>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(existing, _)| *existing == name) {
            Some((_, slot)) => *slot = value,
            None => self.entries.push((name, value)),
        }
    }

    /// Value of `name`, if present.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(existing, _)| existing == name)
            .map(|(_, value)| value.as_str())
    }

    /// Remove `name` from the bag and return its value.
    pub fn remove(&mut self, name: &str) -> Option<String> {
        let index = self.entries.iter().position(|(existing, _)| existing == name)?;
        Some(self.entries.remove(index).1)
    }

    /// Remove every entry named in `names`; returns the names that were present.
    pub fn strip(&mut self, names: &[&str]) -> Vec<String> {
        let mut removed = Vec::new();
        self.entries.retain(|(name, _)| {
            let reserved = names.contains(&&**name);
            if reserved {
                removed.push(name.to_string());
            }
            !reserved
        });
        removed
    }

    /// Whether `name` is present.
    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate `(name, value)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|(name, value)| (&**name, value.as_str()))
    }

    /// Convert the bag into attributes that can be spread onto an element.
    pub fn into_any_attrs(self) -> Vec<AnyAttribute> {
        self.entries
            .into_iter()
            .map(|(name, value)| custom_attribute(name, value).into_any_attr())
            .collect()
    }
}

impl<K, V> FromIterator<(K, V)> for Attributes
where
    K: Into<Cow<'static, str>>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut attrs = Self::new();
        for (name, value) in iter {
            attrs.insert(name, value);
        }
        attrs
    }
}

impl<K, V, const N: usize> From<[(K, V); N]> for Attributes
where
    K: Into<Cow<'static, str>>,
    V: Into<String>,
{
    fn from(pairs: [(K, V); N]) -> Self {
        pairs.into_iter().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_keeps_order_and_replaces_in_place() {
        let mut attrs = Attributes::new()
            .with("data-testid", "submit")
            .with("aria-label", "Send");
        attrs.insert("data-testid", "send");

        let pairs: Vec<_> = attrs.iter().collect();
        assert_eq!(pairs, vec![("data-testid", "send"), ("aria-label", "Send")]);
    }

    #[test]
    fn test_remove() {
        let mut attrs = Attributes::from([("type", "submit"), ("name", "go")]);
        assert_eq!(attrs.remove("type").as_deref(), Some("submit"));
        assert_eq!(attrs.remove("type"), None);
        assert_eq!(attrs.len(), 1);
        assert_eq!(attrs.get("name"), Some("go"));
    }

    #[test]
    fn test_strip_reports_removed_names() {
        let mut attrs = Attributes::from([("class", "x"), ("name", "email"), ("id", "y")]);
        let removed = attrs.strip(&["class", "id", "disabled"]);
        assert_eq!(removed, vec!["class".to_string(), "id".to_string()]);
        assert!(attrs.contains("name"));
        assert_eq!(attrs.len(), 1);
    }

    #[test]
    fn test_owned_names() {
        let name = format!("data-{}", "row");
        let attrs: Attributes = vec![(name, "3")].into_iter().collect();
        assert_eq!(attrs.get("data-row"), Some("3"));
        assert!(!attrs.is_empty());
    }
}
