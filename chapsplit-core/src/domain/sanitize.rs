//! Chapter title to filename fragment conversion

use super::marker::MARKER_GLYPH;

/// Default maximum length of a sanitized title, in characters
pub const DEFAULT_MAX_LENGTH: usize = 50;

/// Turn a chapter title into a filename-safe fragment.
///
/// Steps, in order:
/// 1. drop every marker glyph and trim surrounding whitespace
/// 2. keep only alphanumerics (any script), space, `_` and `-`
/// 3. replace each run of whitespace with a single `_`
/// 4. cut to `max_length` characters
/// 5. strip trailing `_`
///
/// The result can be empty; callers pick their own placeholder for that case.
pub fn sanitize(title: &str, max_length: usize) -> String {
    let without_marker: String = title.chars().filter(|&c| c != MARKER_GLYPH).collect();

    let mut collapsed = String::with_capacity(without_marker.len());
    let mut in_whitespace = false;
    for c in without_marker
        .trim()
        .chars()
        .filter(|&c| c.is_alphanumeric() || matches!(c, ' ' | '_' | '-'))
    {
        if c.is_whitespace() {
            if !in_whitespace {
                collapsed.push('_');
                in_whitespace = true;
            }
        } else {
            collapsed.push(c);
            in_whitespace = false;
        }
    }

    let truncated: String = collapsed.chars().take(max_length).collect();
    truncated.trim_end_matches('_').to_string()
}
