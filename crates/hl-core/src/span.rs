//! Source spans for diagnostics.

use serde::{Deserialize, Serialize};

/// Represents a position in the source text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Position {
    /// Line number (1-indexed)
    pub line: usize,
    /// Column number (1-indexed, in characters)
    pub column: usize,
    /// Byte offset from the start of the text
    pub offset: usize,
}

impl Position {
    pub fn new(line: usize, column: usize, offset: usize) -> Self {
        Self {
            line,
            column,
            offset,
        }
    }
}

/// Represents a span in the source text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Span {
    pub start: Position,
    pub end: Position,
}

impl Span {
    /// A span covering `len` bytes of a single line.
    pub fn on_line(line: usize, offset: usize, len: usize) -> Self {
        Self {
            start: Position::new(line, 1, offset),
            end: Position::new(line, len + 1, offset + len),
        }
    }

    /// Length of the span in bytes.
    pub fn len(&self) -> usize {
        self.end.offset.saturating_sub(self.start.offset)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl From<Span> for miette::SourceSpan {
    fn from(span: Span) -> Self {
        (span.start.offset, span.len()).into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_on_line() {
        let span = Span::on_line(3, 20, 5);
        assert_eq!(span.start.line, 3);
        assert_eq!(span.end.offset, 25);
        assert!(!span.is_empty());
    }
}
