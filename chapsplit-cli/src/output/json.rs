//! JSON report formatter

use super::OutputFormatter;
use anyhow::Result;
use chapsplit_core::SplitReport;
use serde::Serialize;
use std::io::Write;
use std::path::{Path, PathBuf};

/// JSON formatter - collects chapter files and writes one document at the end
pub struct JsonFormatter<W: Write> {
    writer: W,
    chapter_files: Vec<PathBuf>,
}

/// Data structure for JSON output
#[derive(Debug, Serialize)]
pub struct ReportData<'a> {
    /// Chapter files, in chapter order
    pub chapter_files: &'a [PathBuf],
    /// Manifest path; absent in a dry run
    pub manifest: Option<&'a Path>,
    /// Whether raw and segmented counts agree
    pub consistent: bool,
    /// Count comparison and title pairs
    #[serde(flatten)]
    pub report: &'a SplitReport,
}

impl<W: Write> JsonFormatter<W> {
    /// Create a new JSON formatter
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            chapter_files: Vec::new(),
        }
    }

    /// Give back the underlying writer
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> OutputFormatter for JsonFormatter<W> {
    fn format_chapter(&mut self, path: &Path) -> Result<()> {
        self.chapter_files.push(path.to_path_buf());
        Ok(())
    }

    fn finish(&mut self, report: &SplitReport, manifest: Option<&Path>) -> Result<()> {
        let data = ReportData {
            chapter_files: &self.chapter_files,
            manifest,
            consistent: report.is_consistent(),
            report,
        };
        serde_json::to_writer_pretty(&mut self.writer, &data)?;
        writeln!(self.writer)?;
        self.writer.flush()?;
        Ok(())
    }
}
