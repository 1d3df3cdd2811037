//! Resources that can be filtered by label selectors.

use serde::{Deserialize, Serialize};

use crate::labels::{LabelMap, combine_labels};

/// Anything exposing an effective label set.
pub trait Resource {
    /// Name used in logs and diagnostics
    fn name(&self) -> &str;

    /// Effective labels the selector is evaluated against
    fn all_labels(&self) -> LabelMap;
}

impl<R: Resource + ?Sized> Resource for &R {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn all_labels(&self) -> LabelMap {
        (**self).all_labels()
    }
}

/// A discovered database instance.
///
/// Static labels come from discovery metadata (cloud tags, config). Dynamic
/// labels hold the latest results of periodically evaluated label commands
/// and take precedence over static labels with the same key.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Database {
    pub name: String,
    #[serde(default)]
    pub protocol: String,
    #[serde(default)]
    pub uri: String,
    #[serde(default)]
    pub labels: LabelMap,
    #[serde(default)]
    pub dynamic_labels: LabelMap,
}

impl Database {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Add a static label (builder pattern)
    #[must_use]
    pub fn with_label(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.labels.insert(key.into(), value.into());
        self
    }

    /// Add a dynamic label (builder pattern)
    #[must_use]
    pub fn with_dynamic_label(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.dynamic_labels.insert(key.into(), value.into());
        self
    }
}

impl Resource for Database {
    fn name(&self) -> &str {
        &self.name
    }

    fn all_labels(&self) -> LabelMap {
        combine_labels(&self.labels, &self.dynamic_labels)
    }
}
