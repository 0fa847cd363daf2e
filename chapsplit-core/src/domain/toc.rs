//! Table-of-contents harvesting from the preprocessed source

use super::marker::is_chapter_marker;

/// Heading line that introduces the table of contents, compared case-insensitively
const TOC_HEADING: &str = "toc";

/// Collect the titles listed before the first chapter marker.
///
/// The scan stops at the first line that [`is_chapter_marker`] accepts, the
/// same rule the segmenter uses. Before that, every non-blank line is taken
/// as a title (trimmed), except a bare `TOC` heading. This is a best-effort
/// listing for a human to compare against, not a strict parser.
pub fn extract_raw_titles<S: AsRef<str>>(lines: &[S]) -> Vec<String> {
    lines
        .iter()
        .map(|line| line.as_ref())
        .take_while(|line| !is_chapter_marker(line))
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.eq_ignore_ascii_case(TOC_HEADING))
        .map(str::to_string)
        .collect()
}
