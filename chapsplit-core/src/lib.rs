//! Marker-based chapter splitting for translated documents
//!
//! A translated text is cut into chapters at lines opening with the `〇`
//! marker glyph. The titles listed before the first marker of the
//! untranslated (preprocessed) source are harvested separately, so a human
//! can compare both lists in the manifest written next to the chapter files.
//!
//! # Architecture
//!
//! - **Domain layer**: pure rules (marker recognition, filename
//!   sanitization, title harvesting, segmentation)
//! - **Application layer**: reading inputs, writing chapter files and the
//!   manifest, cross-checking chapter counts
//!
//! # Example
//!
//! ```rust
//! use chapsplit_core::{Input, Splitter};
//!
//! let preprocessed = "TOC\nChapter One\nChapter Two\n〇 Chapter One\n本文\n〇 Chapter Two\n本文\n";
//! let translated = "〇 Chapter One\nSome text.\n〇 Chapter Two\nMore text.\n";
//!
//! let prepared = Splitter::default()
//!     .prepare(Input::from_text(preprocessed), Input::from_text(translated))
//!     .unwrap();
//!
//! assert_eq!(prepared.raw_titles, vec!["Chapter One", "Chapter Two"]);
//! assert_eq!(prepared.segmentation.chapters.len(), 2);
//! assert!(prepared.report().is_consistent());
//! ```

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod input;

pub use application::{
    chapter_file_name, write_split, Manifest, ManifestWriter, PreparedSplit, SplitOutcome,
    SplitReport, Splitter, TitlePair, WrittenSplit, DISCLAIMER,
};
pub use config::{SplitConfig, SplitConfigBuilder};
pub use domain::{
    extract_raw_titles, is_chapter_marker, sanitize, segment, segment_document, ChapterUnit,
    Segmentation, Segmenter, MARKER_GLYPH,
};
pub use error::{Result, SplitError};
pub use input::{split_lines, Input, Line};
