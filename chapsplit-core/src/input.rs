//! Input sources and line splitting

use crate::error::{Result, SplitError};
use std::io::Read;
use std::path::{Path, PathBuf};

/// A single line of decoded text, including its terminator if it had one.
pub type Line = String;

/// Name reported for an input drained from a reader
const STREAM_ORIGIN: &str = "<stdin>";

/// Where a document comes from
pub enum Input {
    /// Text already in memory
    Text(String),
    /// File on disk, decoded as UTF-8
    File(PathBuf),
    /// Stream such as standard input, read to the end before decoding
    Reader(Box<dyn Read + Send>),
}

impl std::fmt::Debug for Input {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Input::Text(text) => write!(f, "Input::Text({} bytes)", text.len()),
            Input::File(path) => write!(f, "Input::File({})", path.display()),
            Input::Reader(_) => write!(f, "Input::Reader"),
        }
    }
}

impl Input {
    /// Document held in memory
    pub fn from_text(text: impl Into<String>) -> Self {
        Input::Text(text.into())
    }

    /// Document stored at `path`
    pub fn from_file(path: impl AsRef<Path>) -> Self {
        Input::File(path.as_ref().to_path_buf())
    }

    /// Document streamed from `reader`, usually standard input
    pub fn from_reader(reader: impl Read + Send + 'static) -> Self {
        Input::Reader(Box::new(reader))
    }

    /// Read the whole input and decode it as UTF-8.
    ///
    /// No fallback encoding is attempted.
    pub fn into_text(self) -> Result<String> {
        let (origin, bytes) = match self {
            Input::Text(text) => return Ok(text),
            Input::File(path) => {
                let bytes = std::fs::read(&path).map_err(|source| SplitError::InputNotFound {
                    path: path.clone(),
                    source,
                })?;
                (path.display().to_string(), bytes)
            }
            Input::Reader(mut reader) => {
                let mut bytes = Vec::new();
                reader
                    .read_to_end(&mut bytes)
                    .map_err(|source| SplitError::InputNotFound {
                        path: PathBuf::from(STREAM_ORIGIN),
                        source,
                    })?;
                (STREAM_ORIGIN.to_string(), bytes)
            }
        };

        String::from_utf8(bytes).map_err(|e| SplitError::Encoding {
            origin,
            source: e.utf8_error(),
        })
    }

    /// Read the whole input and split it into lines
    pub fn into_lines(self) -> Result<Vec<Line>> {
        self.into_text().map(|text| split_lines(&text))
    }
}

/// Split text into lines, keeping each line's terminator.
///
/// A line ends at `\n`, `\r\n`, or a lone `\r`. Concatenating the result
/// gives back `text` exactly, and a trailing fragment without a terminator
/// is kept as the last line.
pub fn split_lines(text: &str) -> Vec<Line> {
    let bytes = text.as_bytes();
    let mut lines = Vec::new();
    let mut start = 0;

    for (i, &byte) in bytes.iter().enumerate() {
        let line_ends = match byte {
            b'\n' => true,
            b'\r' => bytes.get(i + 1) != Some(&b'\n'),
            _ => false,
        };
        if line_ends {
            // Both terminators are ASCII, so `i + 1` is a char boundary
            lines.push(text[start..=i].to_string());
            start = i + 1;
        }
    }
    if start < text.len() {
        lines.push(text[start..].to_string());
    }

    lines
}
