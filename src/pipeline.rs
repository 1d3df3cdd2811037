//! Collaborator interfaces and the flows that connect them to the core.
//!
//! Network clients for code hosts and resource discovery live outside this
//! crate. They plug in through [`MetadataSource`], [`LabelSink`] and
//! [`ResourceSource`]; their errors propagate to the caller unchanged.

use std::fmt;

use tracing::{debug, info};

use crate::error::Result;
use crate::infer::{Evidence, LabelEngine};
use crate::labels::LabelSet;
use crate::selector::{Resource, Selector, filter_by_labels};

/// Identifies one change request on a code host.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ChangeRequest {
    pub organization: String,
    pub repository: String,
    pub number: u64,
}

impl ChangeRequest {
    pub fn new(organization: impl Into<String>, repository: impl Into<String>, number: u64) -> Self {
        Self {
            organization: organization.into(),
            repository: repository.into(),
            number,
        }
    }
}

impl fmt::Display for ChangeRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}#{}", self.organization, self.repository, self.number)
    }
}

/// Source of change-request evidence (branch name and changed files).
pub trait MetadataSource {
    /// # Errors
    /// Implementations report fetch failures, typically as
    /// `LabelError::Upstream`.
    fn fetch_evidence(&self, request: &ChangeRequest) -> Result<Evidence>;
}

/// Applies labels to a change request. Implementations must be idempotent.
pub trait LabelSink {
    /// # Errors
    /// Implementations report apply failures, typically as
    /// `LabelError::Upstream`.
    fn add_labels(&self, request: &ChangeRequest, labels: &LabelSet) -> Result<()>;
}

/// Enumerates discovered resources.
pub trait ResourceSource {
    type Resource: Resource;

    /// # Errors
    /// Implementations report discovery failures, typically as
    /// `LabelError::Upstream`.
    fn discover(&self) -> Result<Vec<Self::Resource>>;
}

/// Infer labels for a change request and apply them.
///
/// Returns the applied labels. Nothing is applied when the evidence cannot
/// be fetched, and the sink is not called when no label was inferred.
///
/// # Errors
/// Propagates errors from `source` and `sink`.
pub fn label_change_request(
    engine: &LabelEngine,
    source: &dyn MetadataSource,
    sink: &dyn LabelSink,
    request: &ChangeRequest,
) -> Result<LabelSet> {
    let evidence = source.fetch_evidence(request)?;
    let labels = engine.infer(&evidence);

    if labels.is_empty() {
        debug!(%request, "no labels inferred");
        return Ok(labels);
    }

    sink.add_labels(request, &labels)?;
    info!(%request, %labels, "applied labels");
    Ok(labels)
}

/// Discover resources and keep those matching `selector`.
///
/// # Errors
/// Propagates discovery errors. Per-resource match failures only drop the
/// affected resource.
pub fn discover_matching<S: ResourceSource>(
    source: &S,
    selector: &Selector,
) -> Result<Vec<S::Resource>> {
    let resources = source.discover()?;
    let total = resources.len();
    let matched = filter_by_labels(selector, resources);
    debug!(total, matched = matched.len(), %selector, "filtered discovered resources");
    Ok(matched)
}
