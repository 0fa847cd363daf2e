//! End-to-end split pipeline

use super::manifest::{ManifestWriter, WrittenSplit};
use super::report::SplitReport;
use crate::config::SplitConfig;
use crate::domain::{extract_raw_titles, segment_document, Segmentation};
use crate::error::Result;
use crate::input::Input;
use log::{info, warn};
use std::path::{Path, PathBuf};

/// Both inputs read and analysed, nothing written yet
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreparedSplit {
    /// Titles from the preprocessed table of contents
    pub raw_titles: Vec<String>,
    /// Chapters and preamble of the translated text
    pub segmentation: Segmentation,
}

impl PreparedSplit {
    /// Cross-check raw titles against segmented chapters
    pub fn report(&self) -> SplitReport {
        SplitReport::new(
            &self.raw_titles,
            &self.segmentation.chapters,
            self.segmentation.preamble.len(),
        )
    }
}

/// Result of a completed split
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SplitOutcome {
    /// Count comparison and title pairs
    pub report: SplitReport,
    /// Files written
    pub written: WrittenSplit,
}

/// Runs raw title extraction, segmentation and persistence with one config
#[derive(Debug, Clone, Default)]
pub struct Splitter {
    config: SplitConfig,
}

impl Splitter {
    /// Create a splitter with `config`
    pub fn new(config: SplitConfig) -> Self {
        Self { config }
    }

    /// The configuration in use
    pub fn config(&self) -> &SplitConfig {
        &self.config
    }

    /// Read both inputs in full, then extract titles and segment.
    ///
    /// Both inputs are decoded before any processing, so a missing or
    /// undecodable file fails the run before anything else happens.
    pub fn prepare(&self, preprocessed: Input, translated: Input) -> Result<PreparedSplit> {
        let preprocessed = preprocessed.into_lines()?;
        let translated = translated.into_lines()?;

        let raw_titles = extract_raw_titles(&preprocessed);
        let segmentation = segment_document(translated);

        let prepared = PreparedSplit {
            raw_titles,
            segmentation,
        };
        log_findings(&prepared.report());
        Ok(prepared)
    }

    /// Chapter file paths a write would produce
    pub fn plan(&self, prepared: &PreparedSplit) -> Vec<PathBuf> {
        ManifestWriter::new(&self.config).plan(&prepared.segmentation.chapters)
    }

    /// Persist a prepared split, calling `on_chapter` after each chapter file
    pub fn write<F>(&self, prepared: &PreparedSplit, on_chapter: F) -> Result<WrittenSplit>
    where
        F: FnMut(&Path),
    {
        ManifestWriter::new(&self.config).write_with_progress(
            &prepared.raw_titles,
            &prepared.segmentation.chapters,
            on_chapter,
        )
    }

    /// Read, segment and write in one go
    pub fn split(&self, preprocessed: Input, translated: Input) -> Result<SplitOutcome> {
        let prepared = self.prepare(preprocessed, translated)?;
        let written = self.write(&prepared, |_| {})?;
        Ok(SplitOutcome {
            report: prepared.report(),
            written,
        })
    }
}

fn log_findings(report: &SplitReport) {
    info!(
        "{} raw titles, {} chapters segmented",
        report.raw_count, report.segmented_count
    );

    if report.preamble_lines > 0 {
        info!(
            "{} lines before the first chapter marker are not part of any chapter",
            report.preamble_lines
        );
    }

    if report.is_empty() {
        warn!("no chapter markers found in the translated text; only the manifest will be written");
    } else if !report.is_consistent() {
        warn!(
            "chapter count mismatch: {} raw titles vs {} segmented chapters",
            report.raw_count, report.segmented_count
        );
    }
}
