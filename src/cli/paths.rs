//! Default paths and persistent user configuration

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

use crate::batch::DEFAULT_SEPARATOR;
use crate::hierarchy::Mode;

/// Report file name used when no output path is configured
pub const DEFAULT_REPORT_NAME: &str = "syllabified.txt";

/// Get the configuration directory for sonority
pub fn config_dir() -> Result<PathBuf> {
    let base = dirs::data_local_dir().context("Could not determine local data directory")?;
    Ok(base.join("sonority"))
}

/// Get the default user config path
pub fn default_config_path() -> Result<PathBuf> {
    let dir = config_dir()?;
    std::fs::create_dir_all(&dir)
        .with_context(|| format!("Failed to create directory: {}", dir.display()))?;
    Ok(dir.join("config.json"))
}

/// Get the config file path with optional override
pub fn config_file_path_with_override(custom_path: Option<&Path>) -> Result<PathBuf> {
    match custom_path {
        Some(path) => {
            validate_config_path(path)?;
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                std::fs::create_dir_all(parent)
                    .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
            }
            Ok(path.to_path_buf())
        }
        None => default_config_path(),
    }
}

/// Validate that a config file path has .json extension
pub fn validate_config_path(path: &Path) -> Result<()> {
    match path.extension().and_then(|s| s.to_str()) {
        Some("json") => Ok(()),
        Some(ext) => Err(anyhow::anyhow!(
            "Config file must have .json extension, got .{}. Please use a .json file.",
            ext
        )),
        None => Err(anyhow::anyhow!(
            "Config file must have .json extension. Please add .json to the filename."
        )),
    }
}

/// User configuration stored in config file
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct PersistentConfig {
    /// Default sonority hierarchy
    pub mode: Option<Mode>,
    /// Default custom table file (overrides the built-in table for `mode`)
    pub table_path: Option<PathBuf>,
    /// Default syllable separator
    pub separator: Option<String>,
    /// Default report path for the `file` command
    pub output_path: Option<PathBuf>,
}

impl PersistentConfig {
    /// Load configuration from the default location
    pub fn load() -> Result<Self> {
        Self::load_from(None)
    }

    /// Load configuration from custom path
    pub fn load_from(custom_path: Option<&Path>) -> Result<Self> {
        let path = config_file_path_with_override(custom_path)?;
        if !path.exists() {
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        serde_json::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    /// Save configuration to the default location
    pub fn save(&self) -> Result<()> {
        self.save_to(None)
    }

    /// Save configuration to custom path
    pub fn save_to(&self, custom_path: Option<&Path>) -> Result<()> {
        let path = config_file_path_with_override(custom_path)?;
        let contents = serde_json::to_string_pretty(self)?;
        std::fs::write(&path, contents)
            .with_context(|| format!("Failed to write config file: {}", path.display()))
    }

    /// Merge with command-line options (CLI options take precedence)
    pub fn merge_with_cli(
        &self,
        mode: Option<Mode>,
        table_path: Option<PathBuf>,
        separator: Option<String>,
        output_path: Option<PathBuf>,
    ) -> Self {
        Self {
            mode: mode.or(self.mode),
            table_path: table_path.or_else(|| self.table_path.clone()),
            separator: separator.or_else(|| self.separator.clone()),
            output_path: output_path.or_else(|| self.output_path.clone()),
        }
    }

    /// Effective hierarchy
    pub fn mode(&self) -> Mode {
        self.mode.unwrap_or_default()
    }

    /// Effective separator
    pub fn separator(&self) -> &str {
        self.separator.as_deref().unwrap_or(DEFAULT_SEPARATOR)
    }

    /// Effective report path
    pub fn output_path(&self) -> PathBuf {
        self.output_path
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_REPORT_NAME))
    }
}

impl Default for PersistentConfig {
    fn default() -> Self {
        Self {
            mode: Some(Mode::Standard),
            table_path: None,
            separator: Some(DEFAULT_SEPARATOR.to_string()),
            output_path: None,
        }
    }
}
