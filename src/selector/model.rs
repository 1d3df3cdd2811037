//! Selector type and parsing.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{LabelError, Result};

/// Selector value (or key) meaning "any value is acceptable".
pub const WILDCARD: &str = "*";

/// Declarative label constraint: label key -> acceptable values.
///
/// Keys are kept sorted, so two selectors built from the same pairs in a
/// different order are equal and evaluate identically.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Selector(BTreeMap<String, Vec<String>>);

impl Selector {
    /// Empty selector; matches every resource.
    #[must_use]
    pub const fn new() -> Self {
        Self(BTreeMap::new())
    }

    /// Selector that matches every resource, even one with no labels.
    #[must_use]
    pub fn match_all() -> Self {
        Self::new().with(WILDCARD, [WILDCARD])
    }

    /// Add an acceptable value for `key`. Duplicate values are ignored.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let values = self.0.entry(key.into()).or_default();
        let value = value.into();
        if !values.contains(&value) {
            values.push(value);
        }
    }

    /// Add acceptable values for `key` (builder pattern)
    #[must_use]
    pub fn with<I, S>(mut self, key: impl Into<String>, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let entry = self.0.entry(key.into()).or_default();
        for value in values {
            let value = value.into();
            if !entry.contains(&value) {
                entry.push(value);
            }
        }
        self
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of constrained keys
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<&[String]> {
        self.0.get(key).map(Vec::as_slice)
    }

    /// Keys and their acceptable values, sorted by key.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_slice()))
    }

    /// Parse `key=value` pairs separated by commas, e.g.
    /// `env=prod,env=staging,region=*`. Repeated keys accumulate values.
    ///
    /// A comma inside a key or value is written `\,`, e.g.
    /// `env=^a{1\,3}$`. Any other backslash is kept as is.
    /// An empty or blank string yields the empty selector.
    ///
    /// # Errors
    /// Returns `LabelError::InvalidSelector` for a pair without `=` or with
    /// an empty key.
    pub fn parse(input: &str) -> Result<Self> {
        let mut selector = Self::new();
        for item in split_pairs(input) {
            let item = item.trim();
            if item.is_empty() {
                continue;
            }
            let (key, value) = item.split_once('=').ok_or_else(|| {
                LabelError::InvalidSelector(format!("expected key=value, got {item:?}"))
            })?;
            let key = key.trim();
            if key.is_empty() {
                return Err(LabelError::InvalidSelector(format!(
                    "empty label key in {item:?}"
                )));
            }
            selector.insert(key, value.trim());
        }
        Ok(selector)
    }

    /// Check the selector's structure.
    ///
    /// # Errors
    /// Returns `LabelError::InvalidSelector` for an empty key, a key without
    /// acceptable values, or a `*` key with values other than `*`.
    pub fn validate(&self) -> Result<()> {
        for (key, values) in &self.0 {
            if key.is_empty() {
                return Err(LabelError::InvalidSelector("empty label key".to_string()));
            }
            if values.is_empty() {
                return Err(LabelError::InvalidSelector(format!(
                    "no acceptable values for key {key:?}"
                )));
            }
            if key == WILDCARD && values.iter().any(|v| v != WILDCARD) {
                return Err(LabelError::InvalidSelector(format!(
                    "selector *:{values:?} is not supported, only *:* may be used with the wildcard key"
                )));
            }
        }
        Ok(())
    }

    /// Whether this selector contains the `*: *` entry.
    #[must_use]
    pub fn is_match_all(&self) -> bool {
        self.get(WILDCARD)
            .is_some_and(|values| !values.is_empty() && values.iter().all(|v| v == WILDCARD))
    }
}

impl From<BTreeMap<String, Vec<String>>> for Selector {
    fn from(map: BTreeMap<String, Vec<String>>) -> Self {
        Self(map)
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Selector {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut selector = Self::new();
        for (key, value) in iter {
            selector.insert(key, value);
        }
        selector
    }
}

impl fmt::Display for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (key, values) in &self.0 {
            for value in values {
                if !first {
                    write!(f, ",")?;
                }
                write!(f, "{}={}", escape(key), escape(value))?;
                first = false;
            }
        }
        Ok(())
    }
}

/// Split on commas not preceded by a backslash, unescaping `\,`.
fn split_pairs(input: &str) -> Vec<String> {
    let mut pairs = Vec::new();
    let mut current = String::new();
    let mut chars = input.chars().peekable();
    while let Some(c) = chars.next() {
        match c {
            '\\' if chars.peek() == Some(&',') => {
                current.push(',');
                chars.next();
            }
            ',' => pairs.push(std::mem::take(&mut current)),
            _ => current.push(c),
        }
    }
    pairs.push(current);
    pairs
}

fn escape(raw: &str) -> String {
    raw.replace(',', "\\,")
}
