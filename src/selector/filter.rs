//! Filtering resource collections by selector.
//!
//! Each resource is evaluated independently. Non-matching resources and
//! resources whose evaluation fails are dropped; the batch always completes
//! and the matched resources keep their input order.

use rayon::prelude::*;
use tracing::{debug, warn};

use crate::diagnostic::{Diagnostic, Severity};

use super::matcher::{MatchOutcome, SelectorMatcher};
use super::model::Selector;
use super::resource::Resource;

/// Matched resources plus a diagnostic for every dropped resource.
#[derive(Debug, Clone)]
pub struct FilterReport<R> {
    /// Matched resources in input order
    pub matched: Vec<R>,
    /// One entry per dropped resource, in input order
    pub diagnostics: Vec<Diagnostic>,
}

impl<R> FilterReport<R> {
    const fn new() -> Self {
        Self {
            matched: Vec::new(),
            diagnostics: Vec::new(),
        }
    }

    /// Resources whose evaluation failed
    pub fn failures(&self) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics
            .iter()
            .filter(|d| d.severity == Severity::Warning)
    }

    #[must_use]
    pub fn failure_count(&self) -> usize {
        self.failures().count()
    }

    fn record(&mut self, index: usize, resource: R, outcome: MatchOutcome)
    where
        R: Resource,
    {
        match outcome {
            MatchOutcome::Matched => self.matched.push(resource),
            MatchOutcome::NotMatched { reason } => {
                debug!(resource = resource.name(), %reason, "resource doesn't match selector");
                self.diagnostics
                    .push(Diagnostic::info(resource.name(), index, reason));
            }
            MatchOutcome::Failed { reason } => {
                warn!(resource = resource.name(), error = %reason, "failed to match resource against selector");
                self.diagnostics
                    .push(Diagnostic::warning(resource.name(), index, reason));
            }
        }
    }
}

/// Keep the resources matching `selector`, preserving input order.
pub fn filter_by_labels<R, I>(selector: &Selector, resources: I) -> Vec<R>
where
    R: Resource,
    I: IntoIterator<Item = R>,
{
    filter_with_report(selector, resources).matched
}

/// Like [`filter_by_labels`], also returning a diagnostic per dropped
/// resource.
pub fn filter_with_report<R, I>(selector: &Selector, resources: I) -> FilterReport<R>
where
    R: Resource,
    I: IntoIterator<Item = R>,
{
    let matcher = SelectorMatcher::new(selector);
    let mut report = FilterReport::new();
    for (index, resource) in resources.into_iter().enumerate() {
        let outcome = matcher.evaluate(&resource.all_labels());
        report.record(index, resource, outcome);
    }
    report
}

/// Parallel [`filter_with_report`]. Evaluation runs on the rayon pool and
/// shares one [`SelectorMatcher`]; the result is identical to the sequential
/// filter.
pub fn par_filter_with_report<R>(selector: &Selector, resources: Vec<R>) -> FilterReport<R>
where
    R: Resource + Sync,
{
    let matcher = SelectorMatcher::new(selector);
    let outcomes: Vec<MatchOutcome> = resources
        .par_iter()
        .map(|resource| matcher.evaluate(&resource.all_labels()))
        .collect();

    let mut report = FilterReport::new();
    for (index, (resource, outcome)) in resources.into_iter().zip(outcomes).enumerate() {
        report.record(index, resource, outcome);
    }
    report
}

/// Parallel [`filter_by_labels`].
pub fn par_filter_by_labels<R>(selector: &Selector, resources: Vec<R>) -> Vec<R>
where
    R: Resource + Sync,
{
    par_filter_with_report(selector, resources).matched
}
