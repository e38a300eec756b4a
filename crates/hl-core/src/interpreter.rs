//! Runs a full check of one HL source: artifacts first, then validation.

use std::path::Path;

use log::info;
use serde::Serialize;

use crate::artifacts::{ArtifactSink, Artifacts, DirectorySink};
use crate::config::HlConfig;
use crate::diagnostics::{ArtifactsSummary, Diagnostic, DiagnosticsOutput, SourceReport};
use crate::error::{LoadError, ValidationError};
use crate::source::SourceFile;
use crate::symbols::SymbolTable;
use crate::validator::Validator;

/// Printed when validation succeeds.
pub const SUCCESS_MESSAGE: &str = "NO ERROR(S) FOUND";
/// Printed when validation fails.
pub const FAILURE_MESSAGE: &str = "ERROR";

/// The binary outcome of a check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Verdict {
    NoErrors,
    Error,
}

impl Verdict {
    pub fn message(&self) -> &'static str {
        match self {
            Verdict::NoErrors => SUCCESS_MESSAGE,
            Verdict::Error => FAILURE_MESSAGE,
        }
    }
}

/// Result of checking one source.
#[derive(Debug)]
pub struct CheckReport {
    pub source: SourceFile,
    pub artifacts: Artifacts,
    pub result: Result<SymbolTable, ValidationError>,
}

impl CheckReport {
    pub fn verdict(&self) -> Verdict {
        match self.result {
            Ok(_) => Verdict::NoErrors,
            Err(_) => Verdict::Error,
        }
    }

    pub fn is_valid(&self) -> bool {
        self.result.is_ok()
    }

    pub fn verdict_message(&self) -> &'static str {
        self.verdict().message()
    }

    pub fn error(&self) -> Option<&ValidationError> {
        self.result.as_ref().err()
    }

    /// Declared variables, when validation succeeded.
    pub fn symbols(&self) -> Option<&SymbolTable> {
        self.result.as_ref().ok()
    }

    pub fn diagnostic(&self) -> Option<Diagnostic> {
        self.error()
            .map(|e| Diagnostic::from_validation(e, &self.source))
    }

    /// A `miette` report for the validation error, if any.
    pub fn source_report(&self) -> Option<SourceReport> {
        self.error()
            .map(|e| SourceReport::new(e.clone(), &self.source))
    }

    pub fn to_output(&self) -> DiagnosticsOutput {
        DiagnosticsOutput {
            version: "1.0".to_string(),
            status: if self.is_valid() { "ok" } else { "error" }.to_string(),
            verdict: self.verdict_message().to_string(),
            errors: self.diagnostic().into_iter().collect(),
            artifacts: Some(ArtifactsSummary {
                no_spaces: self.artifacts.no_spaces.clone(),
                reserved_symbols: self.artifacts.reserved_symbols.clone(),
            }),
        }
    }
}

/// The HL checker.
#[derive(Debug, Clone, Default)]
pub struct Interpreter {
    config: HlConfig,
}

impl Interpreter {
    pub fn new(config: HlConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &HlConfig {
        &self.config
    }

    /// Load `path`, write its artifacts to the configured directory, and
    /// validate it.
    pub fn check_file(&self, path: impl AsRef<Path>) -> Result<CheckReport, LoadError> {
        self.check_loaded(SourceFile::load(path)?)
    }

    /// Check an already loaded source, writing artifacts to the configured
    /// directory.
    pub fn check_loaded(&self, source: SourceFile) -> Result<CheckReport, LoadError> {
        let mut sink = DirectorySink::new(&self.config.artifacts.output_dir);
        self.check_source(source, &mut sink)
    }

    /// Write the artifacts of `source` to `sink`, then validate it.
    ///
    /// Artifacts are written even when validation fails.
    pub fn check_source(
        &self,
        source: SourceFile,
        sink: &mut dyn ArtifactSink,
    ) -> Result<CheckReport, LoadError> {
        let artifacts = Artifacts::from_source(&source);
        if self.config.artifacts.enabled {
            artifacts.write(&self.config.artifacts, sink)?;
        }

        let result = Validator::new().validate(&source);
        info!(
            "{}: {}",
            source.name(),
            match &result {
                Ok(_) => SUCCESS_MESSAGE,
                Err(_) => FAILURE_MESSAGE,
            }
        );

        Ok(CheckReport {
            source,
            artifacts,
            result,
        })
    }
}
