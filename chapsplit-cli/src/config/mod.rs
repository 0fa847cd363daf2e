//! Configuration module

use crate::error::CliError;
use crate::output::OutputFormat;
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// CLI configuration file structure
#[derive(Debug, Deserialize, Serialize, Default, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct CliConfig {
    /// Split settings
    #[serde(default)]
    pub split: SplitSection,

    /// Report settings
    #[serde(default)]
    pub output: OutputSection,
}

/// `[split]` section; unset keys fall back to the library defaults
#[derive(Debug, Deserialize, Serialize, Default, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct SplitSection {
    /// Directory receiving chapter files
    pub output_dir: Option<PathBuf>,

    /// Maximum sanitized title length
    pub max_title_len: Option<usize>,

    /// Manifest file name
    pub manifest_name: Option<String>,

    /// Filename component for titles with no usable characters
    pub placeholder: Option<String>,
}

/// `[output]` section
#[derive(Debug, Deserialize, Serialize, Default, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct OutputSection {
    /// Report format printed after the split
    pub format: Option<OutputFormat>,
}

impl CliConfig {
    /// Load a TOML configuration file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            CliError::ConfigError(format!("cannot read {}: {e}", path.display()))
        })?;
        Self::parse(&content)
            .map_err(|e| CliError::ConfigError(format!("{}: {e}", path.display())).into())
    }

    /// Parse configuration from TOML text
    pub fn parse(content: &str) -> std::result::Result<Self, toml::de::Error> {
        toml::from_str(content)
    }
}
