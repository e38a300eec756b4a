//! HL source text with its cleaned and raw line views.
//!
//! Validation walks the cleaned view (trimmed, blank lines dropped). The raw
//! view is kept for the conditional indentation rule and for diagnostics.

use std::fs;
use std::path::Path;

use crate::error::LoadError;
use crate::span::Span;

/// A non-blank, trimmed line and where it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceLine {
    pub text: String,
    /// Index of the originating line in the raw text (0-based)
    pub raw_index: usize,
    /// Byte offset of `text` within the raw text
    pub offset: usize,
}

impl SourceLine {
    pub fn span(&self) -> Span {
        Span::on_line(self.raw_index + 1, self.offset, self.text.len())
    }
}

/// A loaded HL source unit.
#[derive(Debug, Clone)]
pub struct SourceFile {
    name: String,
    raw: String,
    raw_lines: Vec<(usize, usize)>,
    lines: Vec<SourceLine>,
}

impl SourceFile {
    pub fn new(name: impl Into<String>, text: impl Into<String>) -> Self {
        let raw = text.into();
        let mut raw_lines = Vec::new();
        let mut lines = Vec::new();

        for (raw_index, (start, end)) in line_bounds(&raw).into_iter().enumerate() {
            raw_lines.push((start, end));

            let content = &raw[start..end];
            let trimmed = content.trim();
            if !trimmed.is_empty() {
                let leading = content.len() - content.trim_start().len();
                lines.push(SourceLine {
                    text: trimmed.to_string(),
                    raw_index,
                    offset: start + leading,
                });
            }
        }

        Self {
            name: name.into(),
            raw,
            raw_lines,
            lines,
        }
    }

    /// Read a source file from disk.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, LoadError> {
        let path = path.as_ref();
        let display = path.display().to_string();
        let text = fs::read_to_string(path).map_err(|e| LoadError::from_read(&display, e))?;
        Ok(Self::new(display, text))
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn raw_text(&self) -> &str {
        &self.raw
    }

    /// The cleaned lines.
    pub fn lines(&self) -> &[SourceLine] {
        &self.lines
    }

    pub fn line(&self, index: usize) -> Option<&SourceLine> {
        self.lines.get(index)
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// The untrimmed raw line at `raw_index`, without its line terminator.
    pub fn raw_line(&self, raw_index: usize) -> Option<&str> {
        self.raw_lines
            .get(raw_index)
            .map(|&(start, end)| &self.raw[start..end])
    }

    /// The raw line directly below cleaned line `index`, blank or not.
    pub fn raw_line_after(&self, index: usize) -> Option<&str> {
        let line = self.lines.get(index)?;
        self.raw_line(line.raw_index + 1)
    }

    /// Cleaned lines joined with `\n`.
    pub fn cleaned_text(&self) -> String {
        self.lines
            .iter()
            .map(|line| line.text.as_str())
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// Byte ranges of each line's content. `\r\n`, `\n` and a lone `\r` all
/// end a line; a terminator at the very end does not open another one.
fn line_bounds(raw: &str) -> Vec<(usize, usize)> {
    let bytes = raw.as_bytes();
    let mut bounds = Vec::new();
    let mut start = 0;
    let mut i = 0;
    while i < bytes.len() {
        match bytes[i] {
            b'\n' => {
                bounds.push((start, i));
                i += 1;
                start = i;
            }
            b'\r' => {
                bounds.push((start, i));
                i += if bytes.get(i + 1) == Some(&b'\n') { 2 } else { 1 };
                start = i;
            }
            _ => i += 1,
        }
    }
    if start < bytes.len() {
        bounds.push((start, bytes.len()));
    }
    bounds
}
