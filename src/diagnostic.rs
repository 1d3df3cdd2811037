//! Diagnostic records for non-fatal conditions.
//!
//! Filtering never aborts on a single resource. Instead, each resource that
//! is dropped produces a [`Diagnostic`] the caller can inspect or print.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Severity level for diagnostics
#[derive(Debug, Clone, Copy, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Expected outcome worth recording (resource did not match)
    Info,
    /// Evaluation failed; the resource was dropped
    Warning,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Info => write!(f, "info"),
            Self::Warning => write!(f, "warning"),
        }
    }
}

/// A diagnostic about one resource.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagnostic {
    /// Name of the resource the diagnostic refers to
    pub subject: String,
    /// Position of the resource in the input batch
    pub index: usize,
    pub severity: Severity,
    pub message: String,
}

impl Diagnostic {
    pub fn new(
        subject: impl Into<String>,
        index: usize,
        severity: Severity,
        message: impl Into<String>,
    ) -> Self {
        Self {
            subject: subject.into(),
            index,
            severity,
            message: message.into(),
        }
    }

    pub fn info(subject: impl Into<String>, index: usize, message: impl Into<String>) -> Self {
        Self::new(subject, index, Severity::Info, message)
    }

    pub fn warning(subject: impl Into<String>, index: usize, message: impl Into<String>) -> Self {
        Self::new(subject, index, Severity::Warning, message)
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}: {}", self.severity, self.subject, self.message)
    }
}
