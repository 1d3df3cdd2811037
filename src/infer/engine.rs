//! Inference engine for running label rules against evidence.

use tracing::debug;

use crate::config::InferenceConfig;
use crate::error::Result;
use crate::labels::LabelSet;

use super::evidence::Evidence;
use super::rule::{BoxedRule, RuleHit};
use super::rules::{configured_rules, default_rules};

/// Result of inference with the rule hits that produced it
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InferenceReport {
    /// Deduplicated labels
    pub labels: LabelSet,
    /// One entry per rule that fired, in registration order
    pub hits: Vec<RuleHit>,
}

/// The inference engine that manages and runs rules
pub struct LabelEngine {
    rules: Vec<BoxedRule>,
    config: InferenceConfig,
}

impl LabelEngine {
    /// Create an engine with no rules registered
    #[must_use]
    pub const fn new(config: InferenceConfig) -> Self {
        Self {
            rules: Vec::new(),
            config,
        }
    }

    /// Create an engine with the built-in rules and default settings
    #[must_use]
    pub fn with_defaults() -> Self {
        let mut engine = Self::new(InferenceConfig::default());
        for rule in default_rules() {
            engine.register(rule);
        }
        engine
    }

    /// Create an engine with the built-in rules configured from `config`.
    ///
    /// # Errors
    /// Returns `LabelError::Config` for an empty prefix or an invalid
    /// documentation pattern.
    pub fn from_config(config: InferenceConfig) -> Result<Self> {
        let rules = configured_rules(&config)?;
        Ok(Self { rules, config })
    }

    /// Register a label rule
    pub fn register(&mut self, rule: BoxedRule) {
        self.rules.push(rule);
    }

    /// Register a label rule (builder pattern)
    #[must_use]
    pub fn with_rule(mut self, rule: BoxedRule) -> Self {
        self.register(rule);
        self
    }

    /// Get registered rules
    #[must_use]
    pub fn rules(&self) -> &[BoxedRule] {
        &self.rules
    }

    #[must_use]
    pub const fn config(&self) -> &InferenceConfig {
        &self.config
    }

    /// Infer the labels a change request deserves.
    ///
    /// Never fails; rules that find nothing contribute nothing.
    #[must_use]
    pub fn infer(&self, evidence: &Evidence) -> LabelSet {
        self.explain(evidence).labels
    }

    /// Infer labels and report which rules fired.
    #[must_use]
    pub fn explain(&self, evidence: &Evidence) -> InferenceReport {
        let mut report = InferenceReport::default();

        for rule in &self.rules {
            if self.config.is_rule_disabled(rule.id()) {
                continue;
            }
            if let Some(hit) = rule.evaluate(evidence) {
                debug!(rule = %hit.rule_id, label = %hit.label, "rule fired");
                report.labels.insert(hit.label.clone());
                report.hits.push(hit);
            }
        }

        report
    }
}

impl Default for LabelEngine {
    fn default() -> Self {
        Self::with_defaults()
    }
}
