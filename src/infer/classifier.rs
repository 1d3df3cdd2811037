//! Path classifiers used by file-based rules.
//!
//! A classifier is a stateless predicate over a changed file path. Rules hold
//! a classifier instead of hardcoding string comparisons so the policy can be
//! configured without touching the rule.

use glob::Pattern;

use crate::config::DocsConfig;
use crate::error::{LabelError, Result};

/// Trait for changed-file classifiers.
pub trait PathClassifier: Send + Sync {
    /// Returns `true` if the path belongs to this classifier's domain.
    fn matches(&self, path: &str) -> bool;

    /// Returns the name of this classifier for debugging.
    fn name(&self) -> &'static str;
}

/// Classifier for documentation files.
///
/// A path is documentation when its first segment is a documentation
/// directory, its extension is a documentation extension (case-insensitive),
/// or it matches one of the extra glob patterns.
#[derive(Debug, Clone)]
pub struct DocsClassifier {
    directories: Vec<String>,
    extensions: Vec<String>,
    patterns: Vec<Pattern>,
}

impl DocsClassifier {
    /// Build a classifier from config. Fails on an invalid glob pattern.
    pub fn from_config(config: &DocsConfig) -> Result<Self> {
        let patterns = config
            .patterns
            .iter()
            .map(|raw| {
                Pattern::new(raw).map_err(|err| {
                    LabelError::Config(format!("invalid docs pattern {raw:?}: {err}"))
                })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            directories: config
                .directories
                .iter()
                .map(|dir| dir.trim_matches('/').to_string())
                .filter(|dir| !dir.is_empty())
                .collect(),
            extensions: config
                .extensions
                .iter()
                .map(|ext| ext.trim_start_matches('.').to_ascii_lowercase())
                .filter(|ext| !ext.is_empty())
                .collect(),
            patterns,
        })
    }

    fn in_docs_directory(&self, path: &str) -> bool {
        path.split_once('/')
            .is_some_and(|(first, _)| self.directories.iter().any(|dir| dir == first))
    }

    fn has_docs_extension(&self, path: &str) -> bool {
        let file_name = path.rsplit('/').next().unwrap_or(path);
        file_name
            .rsplit_once('.')
            .filter(|(stem, _)| !stem.is_empty())
            .is_some_and(|(_, ext)| {
                let ext = ext.to_ascii_lowercase();
                self.extensions.iter().any(|known| *known == ext)
            })
    }
}

impl Default for DocsClassifier {
    fn default() -> Self {
        Self {
            directories: vec!["docs".to_string(), "rfd".to_string()],
            extensions: vec!["md".to_string(), "mdx".to_string()],
            patterns: Vec::new(),
        }
    }
}

impl PathClassifier for DocsClassifier {
    fn matches(&self, path: &str) -> bool {
        let path = path.strip_prefix("./").unwrap_or(path);
        if path.is_empty() {
            return false;
        }
        self.in_docs_directory(path)
            || self.has_docs_extension(path)
            || self.patterns.iter().any(|pattern| pattern.matches(path))
    }

    fn name(&self) -> &'static str {
        "DocsClassifier"
    }
}

/// Classifier for paths under a literal prefix.
#[derive(Debug, Clone)]
pub struct PrefixClassifier {
    pub(crate) prefix: String,
}

impl PrefixClassifier {
    /// Fails on an empty prefix, which would accept every path.
    pub fn new(prefix: impl Into<String>) -> Result<Self> {
        let prefix = prefix.into();
        if prefix.is_empty() {
            return Err(LabelError::Config(
                "path prefix must not be empty".to_string(),
            ));
        }
        Ok(Self { prefix })
    }

    #[must_use]
    pub fn prefix(&self) -> &str {
        &self.prefix
    }
}

impl PathClassifier for PrefixClassifier {
    fn matches(&self, path: &str) -> bool {
        path.starts_with(&self.prefix)
    }

    fn name(&self) -> &'static str {
        "PrefixClassifier"
    }
}
