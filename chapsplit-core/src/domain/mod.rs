//! Pure chapter-splitting rules: no I/O happens in this module.

pub mod marker;
pub mod sanitize;
pub mod segmenter;
pub mod toc;

pub use marker::{is_chapter_marker, MARKER_GLYPH};
pub use sanitize::{sanitize, DEFAULT_MAX_LENGTH};
pub use segmenter::{segment, segment_document, ChapterUnit, Segmentation, Segmenter};
pub use toc::extract_raw_titles;
