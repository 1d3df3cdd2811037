//! Shared label-set utilities.
//!
//! Labels are plain strings compared by equality. A [`LabelSet`] holds label
//! names with uniqueness enforced; a [`LabelMap`] holds the key/value labels
//! attached to a resource.

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

use serde::{Deserialize, Serialize};

/// Label applied to change requests opened from a backport branch.
pub const BACKPORT: &str = "backport";

/// Label applied to change requests touching documentation.
pub const DOCUMENTATION: &str = "documentation";

/// Label applied to change requests touching the Helm chart.
pub const HELM: &str = "helm";

/// Key/value labels of a resource. Keys are unique and iterate sorted.
pub type LabelMap = BTreeMap<String, String>;

/// Deduplicated set of label names.
///
/// Backed by an ordered set, so iteration and serialization are sorted and
/// stable across runs.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LabelSet(BTreeSet<String>);

impl LabelSet {
    #[must_use]
    pub const fn new() -> Self {
        Self(BTreeSet::new())
    }

    /// Insert a label. Returns `false` if it was already present.
    pub fn insert(&mut self, label: impl Into<String>) -> bool {
        self.0.insert(label.into())
    }

    #[must_use]
    pub fn contains(&self, label: &str) -> bool {
        self.0.contains(label)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    /// Labels as a sorted vector.
    #[must_use]
    pub fn into_sorted_vec(self) -> Vec<String> {
        self.0.into_iter().collect()
    }
}

impl<S: Into<String>> FromIterator<S> for LabelSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self(iter.into_iter().map(Into::into).collect())
    }
}

impl<S: Into<String>> Extend<S> for LabelSet {
    fn extend<I: IntoIterator<Item = S>>(&mut self, iter: I) {
        self.0.extend(iter.into_iter().map(Into::into));
    }
}

impl IntoIterator for LabelSet {
    type Item = String;
    type IntoIter = std::collections::btree_set::IntoIter<String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a LabelSet {
    type Item = &'a String;
    type IntoIter = std::collections::btree_set::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl fmt::Display for LabelSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (i, label) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{label}")?;
        }
        write!(f, "}}")
    }
}

/// Overlay `overrides` on top of `base`. Keys present in both take the
/// override value.
#[must_use]
pub fn combine_labels(base: &LabelMap, overrides: &LabelMap) -> LabelMap {
    let mut combined = base.clone();
    for (key, value) in overrides {
        combined.insert(key.clone(), value.clone());
    }
    combined
}

/// Build a [`LabelMap`] from `(key, value)` pairs.
pub fn label_map<K, V, I>(pairs: I) -> LabelMap
where
    K: Into<String>,
    V: Into<String>,
    I: IntoIterator<Item = (K, V)>,
{
    pairs
        .into_iter()
        .map(|(k, v)| (k.into(), v.into()))
        .collect()
}
