//! Label inference for change requests.
//!
//! This module derives classification labels from evidence about a change
//! request (branch name, changed files):
//!
//! - `LabelRule` trait for implementing independent label rules
//! - `LabelEngine` for running rules and deduplicating their labels
//! - `PathClassifier` implementations used by file-based rules
//!
//! # Example
//!
//! ```
//! use labelkit::infer::{Evidence, LabelEngine};
//!
//! let engine = LabelEngine::with_defaults();
//! let evidence = Evidence::new("branch/v15", ["docs/faq.mdx", "examples/chart/values.yaml"]);
//!
//! let labels = engine.infer(&evidence);
//! assert_eq!(labels.into_sorted_vec(), vec!["backport", "documentation", "helm"]);
//! ```

pub mod classifier;
pub mod engine;
pub mod evidence;
pub mod rule;
pub mod rules;

pub use classifier::{DocsClassifier, PathClassifier, PrefixClassifier};
pub use engine::{InferenceReport, LabelEngine};
pub use evidence::{Evidence, UntrustedBranch};
pub use rule::{BoxedRule, LabelRule, RuleHit};
