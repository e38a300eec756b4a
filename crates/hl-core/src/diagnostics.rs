//! Structured diagnostics for reporting a check result.

use std::fmt;

use miette::{LabeledSpan, NamedSource, SourceCode};
use serde::{Deserialize, Serialize};

use crate::error::{ErrorKind, LoadError, ValidationError};
use crate::source::SourceFile;
use crate::span::Span;

/// A diagnostic message with source location.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagnostic {
    /// Error code (e.g., "E001")
    pub code: String,
    pub kind: ErrorKind,
    /// Human-readable message
    pub message: String,
    /// Source file path
    pub file: String,
    /// Source span
    pub span: Span,
    /// Optional context (source line)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context: Option<String>,
    /// Optional help text
    #[serde(skip_serializing_if = "Option::is_none")]
    pub help: Option<String>,
}

impl Diagnostic {
    pub fn from_validation(error: &ValidationError, source: &SourceFile) -> Self {
        let span = error.span();
        let context = source
            .raw_line(span.start.line.saturating_sub(1))
            .map(|line| line.to_string());
        Self {
            code: error.kind().code().to_string(),
            kind: error.kind(),
            message: error.to_string(),
            file: source.name().to_string(),
            span,
            context,
            help: miette::Diagnostic::help(error).map(|h| h.to_string()),
        }
    }

    /// Only meaningful for a missing source; other load errors have no kind.
    pub fn from_load(error: &LoadError, path: &str) -> Option<Self> {
        let kind = error.kind()?;
        Some(Self {
            code: kind.code().to_string(),
            kind,
            message: error.to_string(),
            file: path.to_string(),
            span: Span::default(),
            context: None,
            help: None,
        })
    }
}

/// JSON output format for a check result.
#[derive(Debug, Serialize, Deserialize)]
pub struct DiagnosticsOutput {
    pub version: String,
    pub status: String,
    pub verdict: String,
    pub errors: Vec<Diagnostic>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub artifacts: Option<ArtifactsSummary>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ArtifactsSummary {
    pub no_spaces: String,
    pub reserved_symbols: Vec<String>,
}

/// A validation error paired with its source text, rendered by `miette`
/// with the offending line labelled.
#[derive(Debug)]
pub struct SourceReport {
    error: ValidationError,
    source: NamedSource<String>,
}

impl SourceReport {
    pub fn new(error: ValidationError, source: &SourceFile) -> Self {
        Self {
            error,
            source: NamedSource::new(source.name(), source.raw_text().to_string()),
        }
    }
}

impl fmt::Display for SourceReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.error, f)
    }
}

impl std::error::Error for SourceReport {}

impl miette::Diagnostic for SourceReport {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        miette::Diagnostic::code(&self.error)
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        miette::Diagnostic::help(&self.error)
    }

    fn source_code(&self) -> Option<&dyn SourceCode> {
        Some(&self.source)
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        let label = LabeledSpan::new_with_span(
            Some(self.error.kind().code().to_string()),
            self.error.span(),
        );
        Some(Box::new(std::iter::once(label)))
    }
}
