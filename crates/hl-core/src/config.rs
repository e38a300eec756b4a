//! Configuration loaded from `hl.toml`.

use std::fs;
use std::path::{Path, PathBuf};

use log::debug;
use serde::{Deserialize, Serialize};

use crate::error::LoadError;

/// File name looked up next to the source file.
pub const CONFIG_FILE_NAME: &str = "hl.toml";

/// Configuration file structure for hl.toml
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct HlConfig {
    #[serde(default)]
    pub artifacts: ArtifactConfig,
}

/// Where and under which names the derived artifacts are written.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct ArtifactConfig {
    /// Write artifacts at all
    pub enabled: bool,
    /// Directory the artifact files are written to
    pub output_dir: PathBuf,
    /// Source text with all whitespace removed
    pub no_spaces: String,
    /// Sorted reserved words and symbols, one per line
    pub reserved_symbols: String,
}

impl Default for ArtifactConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            output_dir: PathBuf::from("."),
            no_spaces: "NOSPACES.TXT".to_string(),
            reserved_symbols: "RES_SYM.TXT".to_string(),
        }
    }
}

impl HlConfig {
    /// Parse a config file. A missing file yields the defaults.
    pub fn load(config_path: &Path) -> Result<Self, LoadError> {
        if !config_path.exists() {
            return Ok(Self::default());
        }

        let display = config_path.display().to_string();
        let content = fs::read_to_string(config_path).map_err(|e| LoadError::Io {
            path: display.clone(),
            source: e,
        })?;
        let config = Self::from_toml(&content).map_err(|message| LoadError::Config {
            path: display.clone(),
            message,
        })?;
        debug!("loaded config from {}", display);
        Ok(config)
    }

    pub fn from_toml(content: &str) -> Result<Self, String> {
        toml::from_str(content).map_err(|e| e.to_string())
    }

    /// Load `hl.toml` from the directory containing `source_path`.
    pub fn discover(source_path: &Path) -> Result<Self, LoadError> {
        let dir = source_path
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .unwrap_or_else(|| Path::new("."));
        Self::load(&dir.join(CONFIG_FILE_NAME))
    }
}
