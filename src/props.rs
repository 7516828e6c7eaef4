//! Key/value properties files.
//!
//! Both the icon-set registry and each set's `icons.props` use the Java
//! properties format. Parsing is done by `java-properties`; this module only
//! picks the text encoding and keeps keys in file order.

use crate::error::PropsError;
use encoding_rs::{Encoding, UTF_8, WINDOWS_1252};
use java_properties::PropertiesIter;
use std::collections::HashMap;

/// An ordered string-to-string mapping loaded from a properties file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Properties {
    values: HashMap<String, String>,
    /// Keys in order of first insertion
    order: Vec<String>,
}

impl Properties {
    /// Create an empty property set
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse properties from raw bytes.
    ///
    /// Content that is valid UTF-8 is read as UTF-8, anything else as
    /// ISO-8859-1 (the historical encoding of properties files).
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, PropsError> {
        let encoding: &'static Encoding = if std::str::from_utf8(bytes).is_ok() {
            UTF_8
        } else {
            WINDOWS_1252
        };

        let mut props = Self::new();
        PropertiesIter::new_with_encoding(bytes, encoding).read_into(|k, v| {
            props.set(k, v);
        })?;
        Ok(props)
    }

    /// Parse properties from text.
    pub fn parse(text: &str) -> Result<Self, PropsError> {
        Self::from_bytes(text.as_bytes())
    }

    /// Get the value for a key
    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    /// Check if a key is present
    pub fn contains_key(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    /// Insert or overwrite a value, returning the previous one.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) -> Option<String> {
        let key = key.into();
        let previous = self.values.insert(key.clone(), value.into());
        if previous.is_none() {
            self.order.push(key);
        }
        previous
    }

    /// Iterate over entries in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.order
            .iter()
            .map(|k| (k.as_str(), self.values[k].as_str()))
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Check if there are no entries
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Properties {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut props = Self::new();
        for (k, v) in iter {
            props.set(k, v);
        }
        props
    }
}
