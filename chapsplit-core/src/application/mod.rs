//! Orchestration: reading inputs, persisting chapters, reporting

pub mod manifest;
pub mod report;
pub mod splitter;

pub use manifest::{
    chapter_file_name, write_split, Manifest, ManifestWriter, WrittenSplit, DISCLAIMER,
};
pub use report::{SplitReport, TitlePair};
pub use splitter::{PreparedSplit, SplitOutcome, Splitter};
