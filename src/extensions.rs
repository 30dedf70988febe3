//! Specification extension support.
//!
//! Every node in the document tree carries an [`Extensions`] map holding the
//! `x-` prefixed fields of the corresponding JSON object. Keys are stored
//! *without* the prefix; the prefix is stripped on parse and restored on
//! write, so extension data survives a round trip untouched.

use std::ops::{Deref, DerefMut};

use indexmap::IndexMap;
use serde_json::{Map, Value};

const EXTENSION_PREFIX: &str = "x-";

crate::builder! {
    ExtensionsBuilder;

    /// Additional `x-` prefixed fields of an OpenAPI object.
    #[derive(Debug, Default, Clone, PartialEq)]
    pub struct Extensions {
        extensions: IndexMap<String, Value>,
    }
}

impl Extensions {
    /// Insert an extension value, stripping a leading `x-` from the key if
    /// present.
    pub fn insert<K: Into<String>>(&mut self, key: K, value: Value) {
        let key = key.into();
        let key = key
            .strip_prefix(EXTENSION_PREFIX)
            .map(str::to_string)
            .unwrap_or(key);
        self.extensions.insert(key, value);
    }

    /// Collect the `x-` prefixed entries of a JSON object.
    pub(crate) fn from_object(object: &Map<String, Value>) -> Self {
        object
            .iter()
            .filter(|(key, _)| key.starts_with(EXTENSION_PREFIX))
            .map(|(key, value)| (key.clone(), value.clone()))
            .collect()
    }

    /// Emit every entry into `object` with the `x-` prefix restored.
    pub(crate) fn write_into(&self, object: &mut Map<String, Value>) {
        for (key, value) in &self.extensions {
            object.insert(format!("{EXTENSION_PREFIX}{key}"), value.clone());
        }
    }
}

impl Deref for Extensions {
    type Target = IndexMap<String, Value>;

    fn deref(&self) -> &Self::Target {
        &self.extensions
    }
}

impl DerefMut for Extensions {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.extensions
    }
}

impl<K: Into<String>> FromIterator<(K, Value)> for Extensions {
    fn from_iter<T: IntoIterator<Item = (K, Value)>>(iter: T) -> Self {
        let mut extensions = Extensions::default();
        for (key, value) in iter {
            extensions.insert(key, value);
        }
        extensions
    }
}

impl ExtensionsBuilder {
    /// Add an extension entry; a leading `x-` in the key is stripped.
    pub fn add<K: Into<String>>(mut self, key: K, value: Value) -> Self {
        let key = key.into();
        let key = key
            .strip_prefix(EXTENSION_PREFIX)
            .map(str::to_string)
            .unwrap_or(key);
        self.extensions.insert(key, value);
        self
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn insert_strips_prefix() {
        let mut extensions = Extensions::default();
        extensions.insert("x-request-id", json!("abc"));
        extensions.insert("plain", json!(1));

        assert_eq!(extensions.get("request-id"), Some(&json!("abc")));
        assert_eq!(extensions.get("plain"), Some(&json!(1)));
        assert!(extensions.get("x-request-id").is_none());
    }

    #[test]
    fn object_boundary_round_trips() {
        let mut object = Map::new();
        object.insert("title".to_string(), json!("ignored"));
        object.insert("x-audience".to_string(), json!("internal"));
        object.insert("x-rate-limit".to_string(), json!(100));

        let extensions = Extensions::from_object(&object);
        assert_eq!(extensions.len(), 2);
        assert_eq!(extensions.get("audience"), Some(&json!("internal")));

        let mut output = Map::new();
        extensions.write_into(&mut output);
        assert_eq!(output.get("x-audience"), Some(&json!("internal")));
        assert_eq!(output.get("x-rate-limit"), Some(&json!(100)));
        assert!(!output.contains_key("title"));
    }

    #[test]
    fn builder_collects_entries() {
        let extensions = ExtensionsBuilder::new()
            .add("x-one", json!(1))
            .add("two", json!(2))
            .build();

        assert_eq!(extensions.len(), 2);
        assert_eq!(extensions.get("one"), Some(&json!(1)));
        assert!(extensions.get("x-one").is_none());
        assert_eq!(extensions.get("two"), Some(&json!(2)));
    }
}
