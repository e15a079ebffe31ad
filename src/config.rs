//! Configuration management for docsig.
//!
//! This module provides the [`Config`] struct which controls what counts as a
//! declaration, how it is reflowed and which files are visited.
//! Configuration can be loaded from:
//! - TOML files (`docsig.toml`)
//! - CLI arguments (which override file settings)
//!
//! Config files are auto-discovered in the user's home directory and in every
//! ancestor of the starting directory, least specific first.

use std::path::{Path, PathBuf};

use anyhow::Context;
use serde::Deserialize;

use crate::Result;

/// Config file names to search for (in order of priority, later overrides earlier)
const CONFIG_FILE_NAMES: &[&str] = &["docsig.toml"];

/// Main configuration struct for docsig
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Prefix marking a declaration line (default: `"function "`)
    pub trigger: String,

    /// Spaces before each parameter of a reflowed declaration (default: 4)
    pub indent: usize,

    /// Tokens deleted from reflowed declarations (default: `["struct "]`)
    pub strip: Vec<String>,

    /// Substring a file name must contain to be visited (default: `".md"`)
    pub name_pattern: String,

    /// Glob patterns for files/directories to skip
    pub exclude: Vec<String>,

    /// Honour `<!-- docsig: off/on -->` regions (default: false)
    pub directives: bool,
}

/// Partial configuration for TOML parsing
///
/// All fields are `Option<T>` so we can distinguish between
/// "explicitly set" and "not specified" when merging configs.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct PartialConfig {
    pub trigger: Option<String>,
    pub indent: Option<usize>,
    pub strip: Option<Vec<String>>,
    pub name_pattern: Option<String>,
    pub exclude: Option<Vec<String>>,
    pub directives: Option<bool>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            trigger: "function ".to_string(),
            indent: 4,
            strip: vec!["struct ".to_string()],
            name_pattern: ".md".to_string(),
            exclude: Vec::new(),
            directives: false,
        }
    }
}

impl Config {
    /// Maximum reasonable indent size
    const MAX_INDENT: usize = 16;

    /// Validate configuration values
    ///
    /// Returns an error message if validation fails, None if valid.
    #[must_use]
    pub fn validate(&self) -> Option<String> {
        if self.trigger.is_empty() {
            return Some("trigger must not be empty".to_string());
        }
        if self.indent == 0 {
            return Some("indent must be at least 1".to_string());
        }
        if self.indent > Self::MAX_INDENT {
            return Some(format!(
                "indent {} exceeds maximum of {}",
                self.indent,
                Self::MAX_INDENT
            ));
        }
        if self.strip.iter().any(String::is_empty) {
            return Some("strip tokens must not be empty".to_string());
        }
        if self.name_pattern.is_empty() {
            return Some("name_pattern must not be empty".to_string());
        }
        None
    }

    /// Load configuration from a TOML file
    pub fn from_toml_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config {}", path.display()))?;
        let mut config = Self::default();
        config
            .apply_toml(&contents)
            .with_context(|| format!("failed to parse config {}", path.display()))?;
        Ok(config)
    }

    /// Merge TOML text on top of this config
    fn apply_toml(&mut self, contents: &str) -> Result<()> {
        let partial: PartialConfig = toml::from_str(contents)?;
        self.apply_partial(partial);
        Ok(())
    }

    /// Apply a partial config, only overriding fields that are explicitly set
    fn apply_partial(&mut self, partial: PartialConfig) {
        if let Some(v) = partial.trigger {
            self.trigger = v;
        }
        if let Some(v) = partial.indent {
            self.indent = v;
        }
        if let Some(v) = partial.strip {
            self.strip = v;
        }
        if let Some(v) = partial.name_pattern {
            self.name_pattern = v;
        }
        if let Some(v) = partial.exclude {
            self.exclude = v;
        }
        if let Some(v) = partial.directives {
            self.directives = v;
        }
    }

    /// Discover config files for a starting directory
    ///
    /// Returns the home directory config (if any) followed by configs found
    /// walking from the filesystem root down to `start_dir`, so that later
    /// entries are more specific.
    #[must_use]
    pub fn discover_config_files(start_dir: &Path) -> Vec<PathBuf> {
        let mut config_files = Vec::new();

        if let Some(home) = dirs::home_dir() {
            for config_name in CONFIG_FILE_NAMES {
                let home_config = home.join(config_name);
                if home_config.is_file() {
                    config_files.push(home_config);
                }
            }
        }

        let mut ancestors: Vec<&Path> = start_dir.ancestors().collect();
        ancestors.reverse();

        for ancestor in ancestors {
            for config_name in CONFIG_FILE_NAMES {
                let config_path = ancestor.join(config_name);
                if config_path.is_file() && !config_files.contains(&config_path) {
                    config_files.push(config_path);
                }
            }
        }

        config_files
    }

    /// Load and merge configuration from discovered config files
    ///
    /// Later files override earlier ones (only explicitly set values).
    /// Unreadable or malformed files are skipped with a warning.
    #[must_use]
    pub fn from_discovered_files(start_dir: &Path) -> Self {
        let mut config = Self::default();
        for path in Self::discover_config_files(start_dir) {
            log::debug!("Loading config file {}", path.display());
            match std::fs::read_to_string(&path) {
                Ok(contents) => {
                    if let Err(e) = config.apply_toml(&contents) {
                        log::warn!("Ignoring {}: {e}", path.display());
                    }
                }
                Err(e) => log::warn!("Failed to read {}: {e}", path.display()),
            }
        }
        config
    }
}
