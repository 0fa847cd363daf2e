//! Plain text report formatter

use super::OutputFormatter;
use anyhow::Result;
use chapsplit_core::SplitReport;
use std::io::{self, Write};
use std::path::Path;

/// Plain text formatter - one chapter file per line, then a summary
pub struct TextFormatter<W: Write> {
    writer: W,
}

impl<W: Write> TextFormatter<W> {
    /// Create a new text formatter
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Give back the underlying writer
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl TextFormatter<io::Stdout> {
    /// Create a formatter that writes to stdout
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> OutputFormatter for TextFormatter<W> {
    fn format_chapter(&mut self, path: &Path) -> Result<()> {
        writeln!(self.writer, "{}", path.display())?;
        Ok(())
    }

    fn finish(&mut self, report: &SplitReport, manifest: Option<&Path>) -> Result<()> {
        if let Some(manifest) = manifest {
            writeln!(self.writer, "{}", manifest.display())?;
        }
        writeln!(
            self.writer,
            "{} chapters split, {} raw titles listed",
            report.segmented_count, report.raw_count
        )?;

        if report.is_empty() {
            writeln!(
                self.writer,
                "warning: no chapter markers found in the translated text"
            )?;
        } else if !report.is_consistent() {
            writeln!(
                self.writer,
                "warning: chapter count mismatch ({} raw vs {} split)",
                report.raw_count, report.segmented_count
            )?;
        }

        self.writer.flush()?;
        Ok(())
    }
}
