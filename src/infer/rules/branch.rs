//! Rules driven by the branch name.

use tracing::debug;

use crate::error::{LabelError, Result};
use crate::infer::evidence::Evidence;
use crate::infer::rule::{LabelRule, RuleHit};
use crate::labels::BACKPORT;

/// Default prefix of backport branches.
pub const DEFAULT_BACKPORT_PREFIX: &str = "branch/";

/// Rule that labels change requests opened from a backport branch.
///
/// The branch name is untrusted; it is only compared against the prefix.
#[derive(Debug, Clone)]
pub struct BackportRule {
    prefix: String,
}

impl BackportRule {
    /// Fails on an empty prefix, which would label every change request.
    pub fn new(prefix: impl Into<String>) -> Result<Self> {
        let prefix = prefix.into();
        if prefix.is_empty() {
            return Err(LabelError::Config(
                "backport prefix must not be empty".to_string(),
            ));
        }
        Ok(Self { prefix })
    }
}

impl Default for BackportRule {
    fn default() -> Self {
        Self {
            prefix: DEFAULT_BACKPORT_PREFIX.to_string(),
        }
    }
}

impl LabelRule for BackportRule {
    fn id(&self) -> &'static str {
        "backport-branch"
    }

    fn description(&self) -> &'static str {
        "Branch name starts with the backport prefix"
    }

    fn label(&self) -> &'static str {
        BACKPORT
    }

    fn evaluate(&self, evidence: &Evidence) -> Option<RuleHit> {
        if !evidence.branch().has_prefix(&self.prefix) {
            return None;
        }
        debug!(prefix = %self.prefix, "found backport branch");
        Some(RuleHit::new(
            self.id(),
            self.label(),
            format!("branch starts with {:?}", self.prefix),
        ))
    }
}
