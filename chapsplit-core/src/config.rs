//! Split configuration

use crate::domain::sanitize;
use crate::error::{Result, SplitError};
use std::path::{Path, PathBuf};

/// Default configuration values
pub mod defaults {
    /// Directory chapter files are written to
    pub const OUTPUT_DIR: &str = "chapters";

    /// Maximum sanitized title length in characters
    pub const MAX_TITLE_LEN: usize = crate::domain::DEFAULT_MAX_LENGTH;

    /// File name of the manifest inside the output directory
    pub const MANIFEST_NAME: &str = "chapter_list.txt";

    /// Filename component used when a title sanitizes to nothing
    pub const PLACEHOLDER: &str = "untitled";
}

/// Settings for one split run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SplitConfig {
    pub(crate) output_dir: PathBuf,
    pub(crate) max_title_len: usize,
    pub(crate) manifest_name: String,
    pub(crate) placeholder: String,
}

impl Default for SplitConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from(defaults::OUTPUT_DIR),
            max_title_len: defaults::MAX_TITLE_LEN,
            manifest_name: defaults::MANIFEST_NAME.to_string(),
            placeholder: defaults::PLACEHOLDER.to_string(),
        }
    }
}

impl SplitConfig {
    /// Create a configuration builder
    pub fn builder() -> SplitConfigBuilder {
        SplitConfigBuilder::default()
    }

    /// Directory receiving chapter files and the manifest
    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// Maximum sanitized title length
    pub fn max_title_len(&self) -> usize {
        self.max_title_len
    }

    /// Manifest file name
    pub fn manifest_name(&self) -> &str {
        &self.manifest_name
    }

    /// Placeholder for titles that sanitize to nothing
    pub fn placeholder(&self) -> &str {
        &self.placeholder
    }

    /// Full path of the manifest file
    pub fn manifest_path(&self) -> PathBuf {
        self.output_dir.join(&self.manifest_name)
    }

    pub(crate) fn validate(&self) -> Result<()> {
        if self.placeholder.is_empty() {
            return Err(SplitError::Configuration(
                "placeholder must not be empty".into(),
            ));
        }

        // The placeholder goes into a file name as is
        if sanitize(&self.placeholder, usize::MAX) != self.placeholder {
            return Err(SplitError::Configuration(format!(
                "placeholder '{}' contains characters not allowed in file names",
                self.placeholder
            )));
        }

        let name = self.manifest_name.as_str();
        if name.is_empty() || name == "." || name == ".." || name.contains(['/', '\\']) {
            return Err(SplitError::Configuration(format!(
                "manifest name '{name}' must be a plain file name"
            )));
        }

        Ok(())
    }
}

/// Fluent builder for [`SplitConfig`]
#[derive(Debug, Default)]
pub struct SplitConfigBuilder {
    output_dir: Option<PathBuf>,
    max_title_len: Option<usize>,
    manifest_name: Option<String>,
    placeholder: Option<String>,
}

impl SplitConfigBuilder {
    /// Create a new builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the output directory
    pub fn output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.output_dir = Some(dir.into());
        self
    }

    /// Set the maximum sanitized title length
    pub fn max_title_len(mut self, len: usize) -> Self {
        self.max_title_len = Some(len);
        self
    }

    /// Set the manifest file name
    pub fn manifest_name(mut self, name: impl Into<String>) -> Self {
        self.manifest_name = Some(name.into());
        self
    }

    /// Set the placeholder used for empty sanitized titles
    pub fn placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = Some(placeholder.into());
        self
    }

    /// Build and validate the configuration
    pub fn build(self) -> Result<SplitConfig> {
        let mut config = SplitConfig::default();

        if let Some(dir) = self.output_dir {
            config.output_dir = dir;
        }
        if let Some(len) = self.max_title_len {
            config.max_title_len = len;
        }
        if let Some(name) = self.manifest_name {
            config.manifest_name = name;
        }
        if let Some(placeholder) = self.placeholder {
            config.placeholder = placeholder;
        }

        config.validate()?;
        Ok(config)
    }
}
