use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::WriteError;
use crate::paths;

/// Configuration for firstline, read from `config.toml`
///
/// All sections are optional; a missing file means defaults.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub output: OutputSection,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputSection {
    /// Folder for the combined file (default: `~/Desktop`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub directory: Option<PathBuf>,
    /// Name of the combined file
    #[serde(default = "default_file_name")]
    pub file_name: String,
}

fn default_file_name() -> String {
    paths::OUTPUT_FILE_NAME.to_string()
}

impl Default for OutputSection {
    fn default() -> Self {
        Self {
            directory: None,
            file_name: default_file_name(),
        }
    }
}

impl Config {
    /// Load configuration
    ///
    /// Looks at `explicit` first, then `$FIRSTLINE_CONFIG`, then the user
    /// config file. Only the user config file may be absent.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::load_from(path);
        }
        if let Some(path) = std::env::var_os(paths::CONFIG_ENV) {
            return Self::load_from(Path::new(&path));
        }
        match paths::config_path() {
            Some(path) if path.exists() => Self::load_from(&path),
            _ => Ok(Self::default()),
        }
    }

    /// Load configuration from a specific file
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config {}", path.display()))?;
        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config {}", path.display()))?;
        tracing::debug!(path = %path.display(), "loaded config");
        Ok(config)
    }

    /// Resolve the combined output file
    pub fn output_path(&self) -> Result<PathBuf, WriteError> {
        let directory = match &self.output.directory {
            Some(dir) => dir.clone(),
            None => paths::desktop_dir().ok_or(WriteError::NoHomeDir)?,
        };
        Ok(directory.join(&self.output.file_name))
    }
}
