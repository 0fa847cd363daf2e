//! Chapter marker recognition
//!
//! A chapter starts on a line that opens with the marker glyph `〇` (U+3007)
//! and reads as a heading: optional whitespace, then a Latin letter or a Han,
//! Hiragana or Katakana character. The glyph also turns up as a numeral or
//! decoration inside ordinary text (`〇 — 〇`, `〇123`), so a bare glyph is
//! never enough on its own.

use regex::Regex;
use std::sync::OnceLock;

/// The glyph that opens a chapter heading
pub const MARKER_GLYPH: char = '〇';

static MARKER_PATTERN: OnceLock<Regex> = OnceLock::new();

fn marker_pattern() -> &'static Regex {
    MARKER_PATTERN.get_or_init(|| {
        Regex::new(r"^〇\s*[A-Za-z\p{Han}\p{Hiragana}\p{Katakana}]")
            .expect("chapter marker pattern is valid")
    })
}

/// Whether `line` opens a new chapter.
///
/// The line is tested as given, without trimming; leading whitespace means
/// the line is not a marker.
pub fn is_chapter_marker(line: &str) -> bool {
    line.starts_with(MARKER_GLYPH) && marker_pattern().is_match(line)
}
