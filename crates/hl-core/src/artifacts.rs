//! Derived text artifacts and the sinks they are written to.

use std::collections::BTreeMap;
use std::fs;
use std::path::PathBuf;

use log::info;
use serde::Serialize;

use crate::config::ArtifactConfig;
use crate::error::LoadError;
use crate::lexer::reserved_and_symbols;
use crate::source::SourceFile;

/// The two artifacts derived from a source, independent of validation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Artifacts {
    /// Cleaned lines with every whitespace character removed, concatenated
    pub no_spaces: String,
    /// Distinct reserved words and symbols, sorted
    pub reserved_symbols: Vec<String>,
}

impl Artifacts {
    pub fn from_source(source: &SourceFile) -> Self {
        let no_spaces = source
            .lines()
            .iter()
            .flat_map(|line| line.text.chars())
            .filter(|c| !c.is_whitespace())
            .collect();
        let reserved_symbols = reserved_and_symbols(&source.cleaned_text())
            .into_iter()
            .collect();
        Self {
            no_spaces,
            reserved_symbols,
        }
    }

    /// One token per line, each line terminated by `\n`.
    pub fn render_reserved_symbols(&self) -> String {
        self.reserved_symbols
            .iter()
            .map(|token| format!("{}\n", token))
            .collect()
    }

    /// Write both artifacts to `sink` under the configured names.
    pub fn write(&self, config: &ArtifactConfig, sink: &mut dyn ArtifactSink) -> Result<(), LoadError> {
        sink.write(&config.no_spaces, &self.no_spaces)?;
        sink.write(&config.reserved_symbols, &self.render_reserved_symbols())?;
        Ok(())
    }
}

/// Destination for named text artifacts.
pub trait ArtifactSink {
    fn write(&mut self, name: &str, contents: &str) -> Result<(), LoadError>;
}

/// Writes artifacts as files in a directory.
#[derive(Debug, Clone)]
pub struct DirectorySink {
    dir: PathBuf,
}

impl DirectorySink {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }
}

impl ArtifactSink for DirectorySink {
    fn write(&mut self, name: &str, contents: &str) -> Result<(), LoadError> {
        let path = self.dir.join(name);
        fs::write(&path, contents).map_err(|e| LoadError::ArtifactWrite {
            name: path.display().to_string(),
            source: e,
        })?;
        info!("wrote {} ({} bytes)", path.display(), contents.len());
        Ok(())
    }
}

/// Keeps artifacts in memory.
#[derive(Debug, Clone, Default)]
pub struct MemorySink {
    files: BTreeMap<String, String>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.files.get(name).map(String::as_str)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.files.keys().map(String::as_str)
    }
}

impl ArtifactSink for MemorySink {
    fn write(&mut self, name: &str, contents: &str) -> Result<(), LoadError> {
        self.files.insert(name.to_string(), contents.to_string());
        Ok(())
    }
}
