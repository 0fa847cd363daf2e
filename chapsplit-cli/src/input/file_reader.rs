//! Input file checks

use crate::error::CliError;
use anyhow::{Context, Result};
use chapsplit_core::Input;
use std::fs;
use std::io;
use std::path::Path;

/// Path argument that selects standard input
pub const STDIN_PATH: &str = "-";

/// Validates input paths before handing them to the splitter
pub struct FileReader;

impl FileReader {
    /// Whether `path` is the `-` placeholder for standard input
    pub fn is_stdin(path: &Path) -> bool {
        path.as_os_str() == STDIN_PATH
    }

    /// Wrap `path` as an input, reading standard input for `-`.
    ///
    /// Anything else must be a readable regular file.
    pub fn open(path: &Path) -> Result<Input> {
        if Self::is_stdin(path) {
            log::debug!("reading input from standard input");
            return Ok(Input::from_reader(io::stdin()));
        }
        if !path.is_file() {
            return Err(CliError::FileNotFound(path.display().to_string()).into());
        }
        log::debug!("input {}: {} bytes", path.display(), Self::file_size(path)?);
        Ok(Input::from_file(path))
    }

    /// Get file size in bytes
    pub fn file_size(path: &Path) -> Result<u64> {
        let metadata = fs::metadata(path)
            .with_context(|| format!("Failed to get metadata for: {}", path.display()))?;

        Ok(metadata.len())
    }
}
