//! Cross-check between raw titles and segmented chapters

use crate::domain::ChapterUnit;
use serde::Serialize;

/// One row of the side-by-side comparison
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TitlePair {
    /// 1-based row number
    pub position: usize,
    /// Title from the preprocessed table of contents, if that many were listed
    pub raw: Option<String>,
    /// Title of the segmented chapter, if that many were split out
    pub segmented: Option<String>,
}

/// Outcome of a split, comparing both independently derived chapter counts
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SplitReport {
    /// Titles found before the first marker of the preprocessed text
    pub raw_count: usize,
    /// Chapters segmented from the translated text
    pub segmented_count: usize,
    /// Translated lines before the first marker, left out of every chapter
    pub preamble_lines: usize,
    /// Raw and segmented titles side by side, padded to the longer list
    pub pairs: Vec<TitlePair>,
}

impl SplitReport {
    /// Build a report
    pub fn new(raw_titles: &[String], chapters: &[ChapterUnit], preamble_lines: usize) -> Self {
        let rows = raw_titles.len().max(chapters.len());
        let pairs = (0..rows)
            .map(|i| TitlePair {
                position: i + 1,
                raw: raw_titles.get(i).cloned(),
                segmented: chapters.get(i).map(|c| c.title.clone()),
            })
            .collect();

        Self {
            raw_count: raw_titles.len(),
            segmented_count: chapters.len(),
            preamble_lines,
            pairs,
        }
    }

    /// Whether both sides agree on the number of chapters
    pub fn is_consistent(&self) -> bool {
        self.raw_count == self.segmented_count
    }

    /// Whether no chapter was found in the translated text
    pub fn is_empty(&self) -> bool {
        self.segmented_count == 0
    }
}
