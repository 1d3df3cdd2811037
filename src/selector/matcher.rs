//! Selector evaluation against a resource's labels.
//!
//! Matching rules, applied in order:
//!
//! 1. An empty selector matches everything.
//! 2. A selector containing `*: *` matches everything, including resources
//!    with no labels.
//! 3. Otherwise every key must be satisfied (keys checked in sorted order,
//!    stopping at the first miss). A key is satisfied when the resource has
//!    it and its value is accepted. A missing key is never satisfied, not even
//!    by the `*` value.
//!
//! A value is accepted when the acceptable values contain `*`, contain the
//! value literally, or contain a pattern matching it. Patterns are either
//! regular expressions written as `^...$`, or globs where `*` matches any run
//! of characters. Patterns are compiled only when evaluation reaches them, so
//! a malformed pattern fails only the resources that need it.

use std::sync::OnceLock;

use regex::Regex;

use crate::error::{LabelError, Result};
use crate::labels::LabelMap;

use super::model::{Selector, WILDCARD};

/// Result of a successful evaluation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Match {
    pub matched: bool,
    /// Human-readable explanation, e.g. which key was missing
    pub reason: String,
}

impl Match {
    fn yes(reason: impl Into<String>) -> Self {
        Self {
            matched: true,
            reason: reason.into(),
        }
    }

    fn no(reason: impl Into<String>) -> Self {
        Self {
            matched: false,
            reason: reason.into(),
        }
    }
}

/// Tri-state outcome of matching one resource.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MatchOutcome {
    Matched,
    NotMatched { reason: String },
    /// The selector is malformed for this resource
    Failed { reason: String },
}

impl MatchOutcome {
    /// Evaluate `selector` against `labels`, folding errors into
    /// [`MatchOutcome::Failed`].
    #[must_use]
    pub fn evaluate(selector: &Selector, labels: &LabelMap) -> Self {
        SelectorMatcher::new(selector).evaluate(labels)
    }

    #[must_use]
    pub const fn is_matched(&self) -> bool {
        matches!(self, Self::Matched)
    }

    #[must_use]
    pub const fn is_failed(&self) -> bool {
        matches!(self, Self::Failed { .. })
    }
}

type CompiledPattern = std::result::Result<Regex, String>;

/// A selector prepared for evaluation against many label sets.
///
/// Each pattern value is compiled at most once, the first time a resource
/// needs it, and the result (including a compile error) is reused for every
/// later resource. Safe to share across threads.
pub struct SelectorMatcher<'a> {
    selector: &'a Selector,
    /// One slot per selector value, in selector iteration order
    patterns: Vec<Vec<OnceLock<CompiledPattern>>>,
}

impl<'a> SelectorMatcher<'a> {
    #[must_use]
    pub fn new(selector: &'a Selector) -> Self {
        let patterns = selector
            .iter()
            .map(|(_, values)| values.iter().map(|_| OnceLock::new()).collect())
            .collect();
        Self { selector, patterns }
    }

    #[must_use]
    pub const fn selector(&self) -> &Selector {
        self.selector
    }

    /// Evaluate against one resource's effective labels.
    ///
    /// # Errors
    /// Returns `LabelError::InvalidSelector` when the selector is structurally
    /// invalid or a pattern needed for this resource does not compile.
    pub fn matches(&self, labels: &LabelMap) -> Result<Match> {
        self.selector.validate()?;

        if self.selector.is_empty() {
            return Ok(Match::yes("matched, empty selector"));
        }
        if self.selector.is_match_all() {
            return Ok(Match::yes("matched, wildcard selector"));
        }

        for ((key, values), slots) in self.selector.iter().zip(&self.patterns) {
            let Some(actual) = labels.get(key) else {
                return Ok(Match::no(format!("no key match: '{key}'")));
            };
            if !value_matches(key, values, slots, actual)? {
                return Ok(Match::no(format!(
                    "no value match: got '{actual}' want: {values:?}"
                )));
            }
        }

        Ok(Match::yes("matched"))
    }

    /// [`Self::matches`] folded into a [`MatchOutcome`].
    #[must_use]
    pub fn evaluate(&self, labels: &LabelMap) -> MatchOutcome {
        match self.matches(labels) {
            Ok(m) if m.matched => MatchOutcome::Matched,
            Ok(m) => MatchOutcome::NotMatched { reason: m.reason },
            Err(err) => MatchOutcome::Failed {
                reason: err.to_string(),
            },
        }
    }

    /// Number of patterns compiled so far.
    #[must_use]
    pub fn compiled_patterns(&self) -> usize {
        self.patterns
            .iter()
            .flatten()
            .filter(|slot| slot.get().is_some())
            .count()
    }
}

/// Evaluate `selector` against a resource's effective labels.
///
/// Prefer [`SelectorMatcher`] when evaluating many resources.
///
/// # Errors
/// Returns `LabelError::InvalidSelector` when the selector is structurally
/// invalid or a pattern needed for this resource does not compile.
pub fn match_labels(selector: &Selector, labels: &LabelMap) -> Result<Match> {
    SelectorMatcher::new(selector).matches(labels)
}

fn value_matches(
    key: &str,
    values: &[String],
    slots: &[OnceLock<CompiledPattern>],
    actual: &str,
) -> Result<bool> {
    if values.iter().any(|v| v == WILDCARD || v == actual) {
        return Ok(true);
    }
    for (value, slot) in values.iter().zip(slots) {
        if !is_pattern(value) {
            continue;
        }
        match slot.get_or_init(|| compile_pattern(key, value)) {
            Ok(regex) if regex.is_match(actual) => return Ok(true),
            Ok(_) => {}
            Err(message) => return Err(LabelError::InvalidSelector(message.clone())),
        }
    }
    Ok(false)
}

fn is_pattern(value: &str) -> bool {
    is_regex(value) || value.contains('*')
}

fn is_regex(value: &str) -> bool {
    value.len() >= 2 && value.starts_with('^') && value.ends_with('$')
}

fn compile_pattern(key: &str, value: &str) -> CompiledPattern {
    let expr = if is_regex(value) {
        value.to_string()
    } else {
        let parts: Vec<String> = value.split('*').map(regex::escape).collect();
        format!("^{}$", parts.join(".*"))
    };
    Regex::new(&expr).map_err(|err| format!("key {key:?}: invalid pattern {value:?}: {err}"))
}
