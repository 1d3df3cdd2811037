//! Evidence about a single change request.

use std::fmt;

/// Branch name as reported by the code host.
///
/// The branch name is chosen by whoever opened the change request and must be
/// treated as attacker-controlled. It is never a path, a command argument, or
/// a trusted identifier. The only operations offered are literal prefix and
/// equality comparisons; there is deliberately no `&str` accessor.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct UntrustedBranch(String);

impl UntrustedBranch {
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    /// Literal, byte-wise prefix comparison.
    #[must_use]
    pub fn has_prefix(&self, prefix: &str) -> bool {
        self.0.starts_with(prefix)
    }

    /// Literal equality.
    #[must_use]
    pub fn is(&self, name: &str) -> bool {
        self.0 == name
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

// Debug escapes control characters, so the value is safe to put in logs.
impl fmt::Debug for UntrustedBranch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "UntrustedBranch({:?})", self.0)
    }
}

impl From<&str> for UntrustedBranch {
    fn from(raw: &str) -> Self {
        Self::new(raw)
    }
}

impl From<String> for UntrustedBranch {
    fn from(raw: String) -> Self {
        Self(raw)
    }
}

/// Facts about one change request used to infer labels.
///
/// Read-only input: rules receive `&Evidence` and never modify it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Evidence {
    branch: UntrustedBranch,
    files: Vec<String>,
}

impl Evidence {
    pub fn new<I, S>(branch: impl Into<UntrustedBranch>, files: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            branch: branch.into(),
            files: files.into_iter().map(Into::into).collect(),
        }
    }

    /// Evidence with only a branch name and no changed files.
    pub fn from_branch(branch: impl Into<UntrustedBranch>) -> Self {
        Self {
            branch: branch.into(),
            files: Vec::new(),
        }
    }

    /// Add a changed file (builder pattern)
    #[must_use]
    pub fn with_file(mut self, path: impl Into<String>) -> Self {
        self.files.push(path.into());
        self
    }

    #[must_use]
    pub const fn branch(&self) -> &UntrustedBranch {
        &self.branch
    }

    /// Changed file paths in the order the code host listed them.
    #[must_use]
    pub fn files(&self) -> &[String] {
        &self.files
    }
}
