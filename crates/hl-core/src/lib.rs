//! HL Core Library
//!
//! This crate checks programs written in HL, a small line-oriented language
//! of declarations, assignments, output statements and one-line
//! conditionals. It derives token artifacts from the source and validates
//! it in a single pass; nothing is ever executed.

pub mod artifacts;
pub mod config;
pub mod diagnostics;
pub mod error;
pub mod grammar;
pub mod interpreter;
pub mod lexer;
pub mod references;
pub mod source;
pub mod span;
pub mod symbols;
pub mod validator;

pub use artifacts::{ArtifactSink, Artifacts, DirectorySink, MemorySink};
pub use config::HlConfig;
pub use diagnostics::{Diagnostic, DiagnosticsOutput, SourceReport};
pub use error::{ErrorKind, LoadError, ValidationError};
pub use grammar::Statement;
pub use interpreter::{CheckReport, Interpreter, Verdict, FAILURE_MESSAGE, SUCCESS_MESSAGE};
pub use lexer::{Lexer, Token, TokenKind};
pub use source::{SourceFile, SourceLine};
pub use span::Span;
pub use symbols::{SymbolTable, TypeName};
pub use validator::{validate, Validator};
