//! Read access to document text.

use crate::error::{Result, TfdocError};
use crate::types::{Position, WordRange};
use regex::Regex;
use std::path::{Path, PathBuf};

/// Line-oriented read access to a text document.
///
/// Implementors only need to hand out lines; word lookup is derived from
/// them.
pub trait Document {
    /// Number of lines in the document.
    fn line_count(&self) -> usize;

    /// Text of a line without its line terminator.
    fn line_text(&self, line: usize) -> Option<&str>;

    /// The range of the `pattern` match on the position's line that contains
    /// the position. A position right after the last character of a match
    /// still selects it.
    fn word_range_at(&self, position: Position, pattern: &Regex) -> Option<WordRange> {
        let text = self.line_text(position.line)?;

        pattern
            .find_iter(text)
            .map(|m| WordRange {
                line: position.line,
                start: char_index(text, m.start()),
                end: char_index(text, m.end()),
            })
            .find(|range| range.touches(position.character))
    }

    /// Text covered by a word range.
    fn text_in(&self, range: &WordRange) -> Option<&str> {
        let text = self.line_text(range.line)?;
        let start = byte_offset(text, range.start)?;
        let end = byte_offset(text, range.end)?;
        text.get(start..end)
    }
}

/// Byte offset of the `character`-th char, or the line length when the
/// character sits at the very end of the line.
fn byte_offset(text: &str, character: usize) -> Option<usize> {
    text.char_indices()
        .map(|(offset, _)| offset)
        .chain(std::iter::once(text.len()))
        .nth(character)
}

fn char_index(text: &str, byte: usize) -> usize {
    text[..byte].chars().count()
}

/// An in-memory snapshot of a document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextDocument {
    path: Option<PathBuf>,
    lines: Vec<String>,
}

impl TextDocument {
    /// Create a document from text. `\n` and `\r\n` both end a line.
    #[must_use]
    pub fn new(content: &str) -> Self {
        let lines = content
            .split('\n')
            .map(|line| line.strip_suffix('\r').unwrap_or(line).to_string())
            .collect();
        Self { path: None, lines }
    }

    /// Read a document from disk.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read.
    pub fn open(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| TfdocError::io(path, e, file!(), line!()))?;
        tracing::debug!(path = %path.display(), bytes = content.len(), "Loaded document");

        let mut document = Self::new(&content);
        document.path = Some(path.to_path_buf());
        Ok(document)
    }

    /// The file this document was read from, if any.
    #[must_use]
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Clamp a position into the document, the way editors validate a
    /// position before using it.
    #[must_use]
    pub fn validate_position(&self, position: Position) -> Position {
        let last_line = self.lines.len().saturating_sub(1);
        let line = position.line.min(last_line);
        let length = self.lines.get(line).map_or(0, |text| text.chars().count());
        Position::new(line, position.character.min(length))
    }
}

impl Document for TextDocument {
    fn line_count(&self) -> usize {
        self.lines.len()
    }

    fn line_text(&self, line: usize) -> Option<&str> {
        self.lines.get(line).map(String::as_str)
    }
}
