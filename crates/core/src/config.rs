//! Configuration module for breadcrumb extraction
//!
//! This module provides the extraction settings and the layered
//! resolution logic: a global default configuration with optional
//! glob-matched per-document overrides, read fresh for every
//! invocation so live settings changes take effect immediately.

use globset::{Glob, GlobMatcher};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use thiserror::Error;

/// Default breadcrumb pattern: capture the whole trimmed line.
pub const DEFAULT_PATTERN: &str = r"^\s*(?P<name>.*\S)";

/// Default separator between breadcrumbs.
pub const DEFAULT_SEPARATOR: &str = " › ";

/// Configuration errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid glob pattern: {0}")]
    InvalidGlob(String),

    #[error("Invalid breadcrumb pattern: {0}")]
    InvalidPattern(#[from] regex::Error),

    #[error("Breadcrumb pattern has no `name` capture group: {0}")]
    MissingNameGroup(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Settings file error: {0}")]
    ParseError(#[from] serde_json::Error),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

/// Settings for one breadcrumb computation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrailConfig {
    /// Columns per tab stop; must be at least 1.
    pub tab_size: usize,

    /// Regex applied to each ancestor line; the breadcrumb text is the
    /// `name` capture group.
    pub pattern: String,

    /// Separator placed between breadcrumbs when joining the trail.
    pub separator: String,

    /// Maximum characters kept per breadcrumb.
    pub fragment_length_limit: usize,

    /// Character budget for the whole joined trail.
    pub total_length_limit: usize,

    /// Whether an embedding host should publish the trail to its
    /// status display.
    pub statusbar: bool,
}

impl Default for TrailConfig {
    fn default() -> Self {
        Self {
            tab_size: 8,
            pattern: DEFAULT_PATTERN.to_string(),
            separator: DEFAULT_SEPARATOR.to_string(),
            fragment_length_limit: 100,
            total_length_limit: 200,
            statusbar: true,
        }
    }
}

impl TrailConfig {
    /// Set tab size (builder pattern)
    pub fn with_tab_size(mut self, tab_size: usize) -> Self {
        self.tab_size = tab_size;
        self
    }

    /// Set breadcrumb pattern (builder pattern)
    pub fn with_pattern(mut self, pattern: impl Into<String>) -> Self {
        self.pattern = pattern.into();
        self
    }

    /// Set separator (builder pattern)
    pub fn with_separator(mut self, separator: impl Into<String>) -> Self {
        self.separator = separator.into();
        self
    }

    /// Set per-breadcrumb length limit (builder pattern)
    pub fn with_fragment_length_limit(mut self, limit: usize) -> Self {
        self.fragment_length_limit = limit;
        self
    }

    /// Set total trail length limit (builder pattern)
    pub fn with_total_length_limit(mut self, limit: usize) -> Self {
        self.total_length_limit = limit;
        self
    }

    /// Compile the breadcrumb pattern, checking for the `name` group.
    pub fn compile_pattern(&self) -> Result<Regex, ConfigError> {
        let regex = Regex::new(&self.pattern)?;
        let has_name = regex
            .capture_names()
            .any(|n| n == Some("name"));
        if !has_name {
            return Err(ConfigError::MissingNameGroup(self.pattern.clone()));
        }
        Ok(regex)
    }

    /// Validate the configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.tab_size == 0 {
            return Err(ConfigError::InvalidConfig(
                "tab_size must be at least 1".to_string(),
            ));
        }
        self.compile_pattern()?;
        Ok(())
    }
}

/// Partial configuration; unset fields fall through to the layer below.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ConfigOverride {
    pub tab_size: Option<usize>,
    pub pattern: Option<String>,
    pub separator: Option<String>,
    pub fragment_length_limit: Option<usize>,
    pub total_length_limit: Option<usize>,
    pub statusbar: Option<bool>,
}

impl ConfigOverride {
    /// Apply the set fields of this override on top of `base`.
    pub fn apply(&self, base: &mut TrailConfig) {
        if let Some(tab_size) = self.tab_size {
            base.tab_size = tab_size;
        }
        if let Some(ref pattern) = self.pattern {
            base.pattern = pattern.clone();
        }
        if let Some(ref separator) = self.separator {
            base.separator = separator.clone();
        }
        if let Some(limit) = self.fragment_length_limit {
            base.fragment_length_limit = limit;
        }
        if let Some(limit) = self.total_length_limit {
            base.total_length_limit = limit;
        }
        if let Some(statusbar) = self.statusbar {
            base.statusbar = statusbar;
        }
    }
}

/// On-disk settings file shape.
#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(default)]
struct SettingsFile {
    #[serde(flatten)]
    defaults: TrailConfig,

    /// Per-document overrides keyed by glob pattern.
    overrides: BTreeMap<String, ConfigOverride>,
}

/// Layered configuration provider: global defaults plus glob-matched
/// per-document overrides.
#[derive(Debug)]
pub struct Settings {
    defaults: TrailConfig,
    overrides: Vec<(GlobMatcher, ConfigOverride)>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            defaults: TrailConfig::default(),
            overrides: Vec::new(),
        }
    }
}

impl Settings {
    /// Build settings with explicit defaults and no overrides.
    pub fn with_defaults(defaults: TrailConfig) -> Self {
        Self {
            defaults,
            overrides: Vec::new(),
        }
    }

    /// Load settings from a JSON file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    /// Parse settings from JSON text.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let file: SettingsFile = serde_json::from_str(json)?;
        file.defaults.validate()?;

        let mut overrides = Vec::with_capacity(file.overrides.len());
        for (glob, config) in file.overrides {
            let matcher = Glob::new(&glob)
                .map_err(|e| ConfigError::InvalidGlob(e.to_string()))?
                .compile_matcher();
            overrides.push((matcher, config));
        }

        Ok(Self {
            defaults: file.defaults,
            overrides,
        })
    }

    /// Global defaults without any per-document override applied.
    pub fn defaults(&self) -> &TrailConfig {
        &self.defaults
    }

    /// Resolve the effective configuration for a document, applying
    /// every override whose glob matches the path in file order.
    pub fn config_for(&self, path: Option<&Path>) -> TrailConfig {
        let mut config = self.defaults.clone();
        if let Some(path) = path {
            for (matcher, over) in &self.overrides {
                if matcher.is_match(path) {
                    over.apply(&mut config);
                }
            }
        }
        config
    }
}
