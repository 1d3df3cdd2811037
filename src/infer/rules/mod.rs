//! Built-in label rules.
//!
//! - **Branch rules** (`branch`): labels derived from the branch name
//! - **File rules** (`files`): labels derived from the changed file paths
//!
//! # Usage
//!
//! ```
//! use labelkit::infer::rules::default_rules;
//! use labelkit::infer::LabelEngine;
//!
//! let mut engine = LabelEngine::new(Default::default());
//! for rule in default_rules() {
//!     engine.register(rule);
//! }
//! ```

pub mod branch;
pub mod files;

use crate::config::InferenceConfig;
use crate::error::Result;
use crate::infer::classifier::DocsClassifier;
use crate::infer::rule::BoxedRule;

pub use branch::{BackportRule, DEFAULT_BACKPORT_PREFIX};
pub use files::{DEFAULT_CHART_PREFIX, DocumentationRule, HelmChartRule};

/// Returns the built-in rules with their default settings.
#[must_use]
pub fn default_rules() -> Vec<BoxedRule> {
    vec![
        Box::new(BackportRule::default()),
        Box::new(DocumentationRule::default()),
        Box::new(HelmChartRule::default()),
    ]
}

/// Returns the built-in rules configured from `config`.
pub fn configured_rules(config: &InferenceConfig) -> Result<Vec<BoxedRule>> {
    Ok(vec![
        Box::new(BackportRule::new(config.backport_prefix.clone())?),
        Box::new(DocumentationRule::new(DocsClassifier::from_config(
            &config.docs,
        )?)),
        Box::new(HelmChartRule::new(config.chart_prefix.clone())?),
    ])
}
