//! Chapter segmentation of the translated text
//!
//! Segmentation is a single forward fold over the lines. The fold state is
//! either waiting for the first marker or buffering an open chapter; a marker
//! line closes the open chapter (if any) and starts the next one.

use super::marker::is_chapter_marker;
use crate::input::Line;
use log::debug;

/// One closed chapter
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChapterUnit {
    /// 1-based position in the document
    pub sequence: usize,
    /// First line of the chapter, trimmed
    pub title: String,
    /// All lines of the chapter, starting with its marker line
    pub lines: Vec<Line>,
}

impl ChapterUnit {
    fn close(sequence: usize, lines: Vec<Line>) -> Self {
        let title = lines
            .first()
            .map(|line| line.trim().to_string())
            .unwrap_or_default();
        Self {
            sequence,
            title,
            lines,
        }
    }

    /// Chapter text exactly as it appeared in the input
    pub fn content(&self) -> String {
        self.lines.concat()
    }

    /// `NN. title` as listed in the manifest
    pub fn listing_entry(&self) -> String {
        format!("{:02}. {}", self.sequence, self.title)
    }
}

/// Result of a segmentation pass
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Segmentation {
    /// Lines before the first marker; not part of any chapter
    pub preamble: Vec<Line>,
    /// Closed chapters in document order
    pub chapters: Vec<ChapterUnit>,
}

impl Segmentation {
    /// Whether no marker was found at all
    pub fn is_empty(&self) -> bool {
        self.chapters.is_empty()
    }

    /// Preamble followed by every chapter's lines, in order
    pub fn reassemble(&self) -> String {
        let mut text = self.preamble.concat();
        for chapter in &self.chapters {
            text.push_str(&chapter.content());
        }
        text
    }
}

#[derive(Debug)]
enum State {
    NoOpenChapter,
    ChapterOpen(Vec<Line>),
}

/// Fold state for one segmentation pass.
///
/// Feed lines with [`Segmenter::push`] and close the pass with
/// [`Segmenter::finish`]. Each segmenter owns its own buffers, so separate
/// passes never share state.
#[derive(Debug)]
pub struct Segmenter {
    state: State,
    preamble: Vec<Line>,
    closed: Vec<ChapterUnit>,
}

impl Default for Segmenter {
    fn default() -> Self {
        Self::new()
    }
}

impl Segmenter {
    /// Start a pass with no chapter open
    pub fn new() -> Self {
        Self {
            state: State::NoOpenChapter,
            preamble: Vec::new(),
            closed: Vec::new(),
        }
    }

    /// Consume one line
    pub fn push(mut self, line: Line) -> Self {
        let marker = is_chapter_marker(&line);
        let state = std::mem::replace(&mut self.state, State::NoOpenChapter);
        self.state = match (state, marker) {
            (State::ChapterOpen(buffer), true) => {
                self.emit(buffer);
                State::ChapterOpen(vec![line])
            }
            (State::NoOpenChapter, true) => State::ChapterOpen(vec![line]),
            (State::ChapterOpen(mut buffer), false) => {
                buffer.push(line);
                State::ChapterOpen(buffer)
            }
            (State::NoOpenChapter, false) => {
                self.preamble.push(line);
                State::NoOpenChapter
            }
        };
        self
    }

    /// Flush the open chapter, if any, and return the result
    pub fn finish(mut self) -> Segmentation {
        if let State::ChapterOpen(buffer) = std::mem::replace(&mut self.state, State::NoOpenChapter)
        {
            self.emit(buffer);
        }
        Segmentation {
            preamble: self.preamble,
            chapters: self.closed,
        }
    }

    fn emit(&mut self, buffer: Vec<Line>) {
        let chapter = ChapterUnit::close(self.closed.len() + 1, buffer);
        debug!(
            "chapter {:02}: {:?} ({} lines)",
            chapter.sequence,
            chapter.title,
            chapter.lines.len()
        );
        self.closed.push(chapter);
    }
}

/// Segment `lines` into chapters, keeping the discarded preamble
pub fn segment_document<I>(lines: I) -> Segmentation
where
    I: IntoIterator,
    I::Item: Into<Line>,
{
    lines
        .into_iter()
        .map(Into::into)
        .fold(Segmenter::new(), Segmenter::push)
        .finish()
}

/// Segment `lines` into chapters.
///
/// Lines before the first marker are dropped. No marker at all gives an
/// empty vector, which is a valid outcome.
pub fn segment<I>(lines: I) -> Vec<ChapterUnit>
where
    I: IntoIterator,
    I::Item: Into<Line>,
{
    segment_document(lines).chapters
}
