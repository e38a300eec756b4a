//! Error types for loading and validating HL sources.

use std::io;

use miette::Diagnostic;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::span::Span;
use crate::symbols::TypeName;

/// The error taxonomy, independent of the data each error carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    Redeclaration,
    UndeclaredVariable,
    TypeMismatch,
    MissingBody,
    MissingIndentation,
    UnrecognizedStatement,
    SourceNotFound,
}

impl ErrorKind {
    /// Stable error code (e.g., "E003").
    pub fn code(&self) -> &'static str {
        match self {
            ErrorKind::Redeclaration => "E001",
            ErrorKind::UndeclaredVariable => "E002",
            ErrorKind::TypeMismatch => "E003",
            ErrorKind::MissingBody => "E004",
            ErrorKind::MissingIndentation => "E005",
            ErrorKind::UnrecognizedStatement => "E006",
            ErrorKind::SourceNotFound => "E007",
        }
    }
}

/// A validation failure. The first one encountered aborts the run.
#[derive(Debug, Clone, PartialEq, Eq, Error, Diagnostic)]
pub enum ValidationError {
    #[error("variable '{name}' is already declared")]
    #[diagnostic(
        code(hl::redeclaration),
        help("a variable may be declared only once")
    )]
    Redeclaration { name: String, span: Span },

    #[error("variable '{name}' is used before it is declared")]
    #[diagnostic(
        code(hl::undeclared_variable),
        help("declare the variable first, e.g. `name : integer ;`")
    )]
    UndeclaredVariable { name: String, span: Span },

    #[error("cannot assign '{literal}' to '{name}' of type {declared}")]
    #[diagnostic(
        code(hl::type_mismatch),
        help("integer variables only accept literals without a fractional part")
    )]
    TypeMismatch {
        name: String,
        declared: TypeName,
        literal: String,
        span: Span,
    },

    #[error("conditional has no body line")]
    #[diagnostic(
        code(hl::missing_body),
        help("put a single indented statement on the line after `If (...)`")
    )]
    MissingBody { span: Span },

    #[error("conditional body is not indented")]
    #[diagnostic(
        code(hl::missing_indentation),
        help("start the body line with a space or a tab")
    )]
    MissingIndentation { span: Span },

    #[error("unrecognized statement '{text}'")]
    #[diagnostic(
        code(hl::unrecognized_statement),
        help("expected a declaration, assignment, output statement or conditional")
    )]
    UnrecognizedStatement { text: String, span: Span },
}

impl ValidationError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ValidationError::Redeclaration { .. } => ErrorKind::Redeclaration,
            ValidationError::UndeclaredVariable { .. } => ErrorKind::UndeclaredVariable,
            ValidationError::TypeMismatch { .. } => ErrorKind::TypeMismatch,
            ValidationError::MissingBody { .. } => ErrorKind::MissingBody,
            ValidationError::MissingIndentation { .. } => ErrorKind::MissingIndentation,
            ValidationError::UnrecognizedStatement { .. } => ErrorKind::UnrecognizedStatement,
        }
    }

    /// Location of the offending line in the raw source.
    pub fn span(&self) -> Span {
        match self {
            ValidationError::Redeclaration { span, .. }
            | ValidationError::UndeclaredVariable { span, .. }
            | ValidationError::TypeMismatch { span, .. }
            | ValidationError::MissingBody { span }
            | ValidationError::MissingIndentation { span }
            | ValidationError::UnrecognizedStatement { span, .. } => *span,
        }
    }
}

/// Failures that happen outside validation: reading the source, reading
/// configuration, or writing artifacts.
#[derive(Debug, Error, Diagnostic)]
pub enum LoadError {
    #[error("Source file '{path}' not found.")]
    #[diagnostic(code(hl::source_not_found))]
    SourceNotFound { path: String },

    #[error("failed to read '{path}': {source}")]
    #[diagnostic(code(hl::io))]
    Io {
        path: String,
        #[source]
        source: io::Error,
    },

    #[error("failed to parse config file '{path}': {message}")]
    #[diagnostic(code(hl::config))]
    Config { path: String, message: String },

    #[error("failed to write artifact '{name}': {source}")]
    #[diagnostic(code(hl::artifact_write))]
    ArtifactWrite {
        name: String,
        #[source]
        source: io::Error,
    },
}

impl LoadError {
    /// Classify an I/O failure while reading `path`.
    pub fn from_read(path: impl Into<String>, source: io::Error) -> Self {
        let path = path.into();
        if source.kind() == io::ErrorKind::NotFound {
            LoadError::SourceNotFound { path }
        } else {
            LoadError::Io { path, source }
        }
    }

    /// Only a missing source maps onto the validation taxonomy.
    pub fn kind(&self) -> Option<ErrorKind> {
        match self {
            LoadError::SourceNotFound { .. } => Some(ErrorKind::SourceNotFound),
            _ => None,
        }
    }
}
