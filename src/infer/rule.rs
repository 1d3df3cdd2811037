//! Label rule trait.

use serde::Serialize;

use super::evidence::Evidence;

/// A rule that contributes one label when its predicate holds for the
/// evidence.
///
/// Rules should be stateless and reusable. They must not fail: a rule that
/// cannot determine anything simply returns `None`.
pub trait LabelRule: Send + Sync {
    /// Unique identifier for this rule (e.g., "backport-branch")
    fn id(&self) -> &str;

    /// Human-readable description of what this rule checks
    fn description(&self) -> &str;

    /// The label this rule contributes
    fn label(&self) -> &str;

    /// Evaluate the rule against the evidence
    fn evaluate(&self, evidence: &Evidence) -> Option<RuleHit>;
}

/// A boxed label rule for dynamic dispatch
pub type BoxedRule = Box<dyn LabelRule>;

/// Record of a rule firing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RuleHit {
    pub rule_id: String,
    pub label: String,
    /// Why the rule fired, e.g. the first matching file
    pub reason: String,
}

impl RuleHit {
    pub fn new(
        rule_id: impl Into<String>,
        label: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        Self {
            rule_id: rule_id.into(),
            label: label.into(),
            reason: reason.into(),
        }
    }
}
