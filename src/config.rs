use std::collections::{BTreeMap, BTreeSet, HashSet};
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{LabelError, Result};
use crate::infer::rules::{DEFAULT_BACKPORT_PREFIX, DEFAULT_CHART_PREFIX};
use crate::selector::Selector;

/// File name of the per-project config, looked up in the project root.
pub const PROJECT_CONFIG_FILE: &str = ".labelkit.toml";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub inference: InferenceConfig,
    #[serde(default)]
    pub selector: SelectorConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

impl Config {
    /// Load config layers: defaults, then either the explicit file
    /// (argument or `LABELKIT_CONFIG`) or the global file followed by the
    /// project file, then env overrides.
    pub fn load(explicit_path: Option<&Path>, project_root: &Path) -> Result<Self> {
        let mut config = Self::default();

        let explicit = explicit_path
            .map(PathBuf::from)
            .or_else(|| std::env::var("LABELKIT_CONFIG").ok().map(PathBuf::from));

        if let Some(path) = explicit {
            let patch = Self::load_patch(&path)?.ok_or_else(|| {
                LabelError::Config(format!("config file {} not found", path.display()))
            })?;
            config.merge_patch(patch);
        } else {
            if let Some(global) = Self::load_global()? {
                config.merge_patch(global);
            }
            if let Some(project) = Self::load_project(project_root)? {
                config.merge_patch(project);
            }
        }

        config.apply_env_overrides();

        Ok(config)
    }

    /// Parse a config document. Absent fields keep their defaults.
    pub fn from_toml(raw: &str) -> Result<Self> {
        let patch: ConfigPatch =
            toml::from_str(raw).map_err(|err| LabelError::Config(format!("parse config: {err}")))?;
        let mut config = Self::default();
        config.merge_patch(patch);
        Ok(config)
    }

    fn load_global() -> Result<Option<ConfigPatch>> {
        let Some(dir) = dirs::config_dir() else {
            debug!("no config directory; skipping global config");
            return Ok(None);
        };
        Self::load_patch(&dir.join("labelkit/config.toml"))
    }

    fn load_project(project_root: &Path) -> Result<Option<ConfigPatch>> {
        Self::load_patch(&project_root.join(PROJECT_CONFIG_FILE))
    }

    fn load_patch(path: &Path) -> Result<Option<ConfigPatch>> {
        if !path.exists() {
            return Ok(None);
        }

        let raw = std::fs::read_to_string(path)
            .map_err(|err| LabelError::Config(format!("read config {}: {err}", path.display())))?;
        let patch = toml::from_str(&raw)
            .map_err(|err| LabelError::Config(format!("parse config {}: {err}", path.display())))?;
        debug!(path = %path.display(), "loaded config");
        Ok(Some(patch))
    }

    fn merge_patch(&mut self, patch: ConfigPatch) {
        if let Some(patch) = patch.inference {
            self.inference.merge(patch);
        }
        if let Some(patch) = patch.selector {
            self.selector.merge(patch);
        }
        if let Some(patch) = patch.output {
            self.output.merge(patch);
        }
    }

    fn apply_env_overrides(&mut self) {
        if let Some(value) = env_string("LABELKIT_BACKPORT_PREFIX") {
            self.inference.backport_prefix = value;
        }
        if let Some(value) = env_string("LABELKIT_CHART_PREFIX") {
            self.inference.chart_prefix = value;
        }
        if let Some(values) = env_list("LABELKIT_DOCS_DIRECTORIES") {
            self.inference.docs.directories = values;
        }
        if let Some(values) = env_list("LABELKIT_DOCS_EXTENSIONS") {
            self.inference.docs.extensions = values;
        }
        if let Some(values) = env_list("LABELKIT_DOCS_PATTERNS") {
            self.inference.docs.patterns = values;
        }
        if let Some(values) = env_list("LABELKIT_DISABLED_RULES") {
            self.inference.disabled_rules.extend(values);
        }
        if let Some(value) = robot_from_env() {
            self.output.robot = value;
        }
    }
}

/// Settings for the label inference engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct InferenceConfig {
    pub backport_prefix: String,
    pub chart_prefix: String,
    pub docs: DocsConfig,
    /// Rule IDs to skip
    pub disabled_rules: BTreeSet<String>,
}

impl Default for InferenceConfig {
    fn default() -> Self {
        Self {
            backport_prefix: DEFAULT_BACKPORT_PREFIX.to_string(),
            chart_prefix: DEFAULT_CHART_PREFIX.to_string(),
            docs: DocsConfig::default(),
            disabled_rules: BTreeSet::new(),
        }
    }
}

impl InferenceConfig {
    /// Disable a rule
    #[must_use]
    pub fn disable_rule(mut self, rule_id: impl Into<String>) -> Self {
        self.disabled_rules.insert(rule_id.into());
        self
    }

    #[must_use]
    pub fn is_rule_disabled(&self, rule_id: &str) -> bool {
        self.disabled_rules.contains(rule_id)
    }

    fn merge(&mut self, patch: InferencePatch) {
        if let Some(value) = patch.backport_prefix {
            self.backport_prefix = value;
        }
        if let Some(value) = patch.chart_prefix {
            self.chart_prefix = value;
        }
        if let Some(patch) = patch.docs {
            self.docs.merge(patch);
        }
        if let Some(values) = patch.disabled_rules {
            self.disabled_rules.extend(values);
        }
    }
}

/// Documentation classifier policy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DocsConfig {
    /// Top-level directories holding documentation
    pub directories: Vec<String>,
    /// File extensions of documentation, without the dot
    pub extensions: Vec<String>,
    /// Extra glob patterns
    pub patterns: Vec<String>,
}

impl Default for DocsConfig {
    fn default() -> Self {
        Self {
            directories: vec!["docs".to_string(), "rfd".to_string()],
            extensions: vec!["md".to_string(), "mdx".to_string()],
            patterns: Vec::new(),
        }
    }
}

impl DocsConfig {
    fn merge(&mut self, patch: DocsPatch) {
        if let Some(values) = patch.directories {
            self.directories = dedup(values);
        }
        if let Some(values) = patch.extensions {
            self.extensions = dedup(values);
        }
        if let Some(values) = patch.patterns {
            self.patterns = dedup(values);
        }
    }
}

/// Default selector used when none is given on the command line.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectorConfig {
    #[serde(default)]
    pub labels: BTreeMap<String, Vec<String>>,
}

impl SelectorConfig {
    #[must_use]
    pub fn selector(&self) -> Selector {
        Selector::from(self.labels.clone())
    }

    fn merge(&mut self, patch: SelectorPatch) {
        if let Some(labels) = patch.labels {
            self.labels = labels;
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Emit JSON instead of human-readable output
    #[serde(default)]
    pub robot: bool,
}

impl OutputConfig {
    fn merge(&mut self, patch: OutputPatch) {
        if let Some(value) = patch.robot {
            self.robot = value;
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
struct ConfigPatch {
    pub inference: Option<InferencePatch>,
    pub selector: Option<SelectorPatch>,
    pub output: Option<OutputPatch>,
}

#[derive(Debug, Clone, Default, Deserialize)]
struct InferencePatch {
    pub backport_prefix: Option<String>,
    pub chart_prefix: Option<String>,
    pub docs: Option<DocsPatch>,
    pub disabled_rules: Option<Vec<String>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
struct DocsPatch {
    pub directories: Option<Vec<String>>,
    pub extensions: Option<Vec<String>>,
    pub patterns: Option<Vec<String>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
struct SelectorPatch {
    pub labels: Option<BTreeMap<String, Vec<String>>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
struct OutputPatch {
    pub robot: Option<bool>,
}

fn dedup(values: Vec<String>) -> Vec<String> {
    let mut seen = HashSet::new();
    values
        .into_iter()
        .filter(|value| seen.insert(value.clone()))
        .collect()
}

/// Robot mode requested through `LABELKIT_ROBOT`, if set.
#[must_use]
pub fn robot_from_env() -> Option<bool> {
    env_bool("LABELKIT_ROBOT")
}

fn env_string(key: &str) -> Option<String> {
    std::env::var(key).ok()
}

fn env_bool(key: &str) -> Option<bool> {
    std::env::var(key).ok().map(|value| {
        matches!(
            value.to_lowercase().as_str(),
            "1" | "true" | "yes" | "on"
        )
    })
}

fn env_list(key: &str) -> Option<Vec<String>> {
    std::env::var(key).ok().map(|value| {
        value
            .split(',')
            .map(str::trim)
            .filter(|entry| !entry.is_empty())
            .map(ToString::to_string)
            .collect()
    })
}
