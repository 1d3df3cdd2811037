//! Rules driven by the list of changed files.
//!
//! Each rule fires at most once per change request, on the first file its
//! classifier accepts.

use tracing::debug;

use crate::error::Result;
use crate::infer::classifier::{DocsClassifier, PathClassifier, PrefixClassifier};
use crate::infer::evidence::Evidence;
use crate::infer::rule::{LabelRule, RuleHit};
use crate::labels::{DOCUMENTATION, HELM};

/// Default location of the Helm chart.
pub const DEFAULT_CHART_PREFIX: &str = "examples/chart/";

fn first_match<'a>(evidence: &'a Evidence, classifier: &dyn PathClassifier) -> Option<&'a str> {
    evidence
        .files()
        .iter()
        .map(String::as_str)
        .find(|path| classifier.matches(path))
}

/// Rule that labels change requests touching documentation.
#[derive(Debug, Clone, Default)]
pub struct DocumentationRule {
    classifier: DocsClassifier,
}

impl DocumentationRule {
    #[must_use]
    pub const fn new(classifier: DocsClassifier) -> Self {
        Self { classifier }
    }
}

impl LabelRule for DocumentationRule {
    fn id(&self) -> &'static str {
        "documentation-files"
    }

    fn description(&self) -> &'static str {
        "A changed file is documentation"
    }

    fn label(&self) -> &'static str {
        DOCUMENTATION
    }

    fn evaluate(&self, evidence: &Evidence) -> Option<RuleHit> {
        let path = first_match(evidence, &self.classifier)?;
        debug!(file = path, "found documentation");
        Some(RuleHit::new(
            self.id(),
            self.label(),
            format!("documentation file {path}"),
        ))
    }
}

/// Rule that labels change requests touching the Helm chart.
#[derive(Debug, Clone)]
pub struct HelmChartRule {
    classifier: PrefixClassifier,
}

impl HelmChartRule {
    /// Fails on an empty prefix.
    pub fn new(prefix: impl Into<String>) -> Result<Self> {
        Ok(Self {
            classifier: PrefixClassifier::new(prefix)?,
        })
    }
}

impl Default for HelmChartRule {
    fn default() -> Self {
        Self {
            classifier: PrefixClassifier {
                prefix: DEFAULT_CHART_PREFIX.to_string(),
            },
        }
    }
}

impl LabelRule for HelmChartRule {
    fn id(&self) -> &'static str {
        "helm-chart-files"
    }

    fn description(&self) -> &'static str {
        "A changed file lives under the Helm chart directory"
    }

    fn label(&self) -> &'static str {
        HELM
    }

    fn evaluate(&self, evidence: &Evidence) -> Option<RuleHit> {
        let path = first_match(evidence, &self.classifier)?;
        debug!(file = path, prefix = self.classifier.prefix(), "found Helm chart");
        Some(RuleHit::new(
            self.id(),
            self.label(),
            format!("chart file {path}"),
        ))
    }
}
