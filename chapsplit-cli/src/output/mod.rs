//! Report output module

use anyhow::Result;
use chapsplit_core::SplitReport;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Trait for split report formatters
pub trait OutputFormatter {
    /// Record one chapter file (written, or planned in a dry run)
    fn format_chapter(&mut self, path: &Path) -> Result<()>;

    /// Emit the summary and flush
    fn finish(&mut self, report: &SplitReport, manifest: Option<&Path>) -> Result<()>;
}

/// Supported report formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable summary
    #[default]
    Text,
    /// JSON document with the full report
    Json,
}

pub mod json;
pub mod text;

pub use json::JsonFormatter;
pub use text::TextFormatter;
