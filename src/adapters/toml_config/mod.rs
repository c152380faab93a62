// TOML config adapter - Loads PipelineConfig from TOML or YAML files

use std::path::{Path, PathBuf};

use tracing::info;

use crate::domain::errors::*;
use crate::domain::model::PipelineConfig;

/// Files searched, in order, when no explicit config path is given
pub const DEFAULT_CONFIG_PATHS: [&str; 2] = ["mixreel.toml", "config/mixreel.toml"];

/// File-backed configuration source
pub struct TomlConfigAdapter {
    search_paths: Vec<PathBuf>,
}

impl TomlConfigAdapter {
    /// Create new config adapter with the default search list
    pub fn new() -> Self {
        Self {
            search_paths: DEFAULT_CONFIG_PATHS.iter().map(PathBuf::from).collect(),
        }
    }

    pub fn with_search_paths(search_paths: Vec<PathBuf>) -> Self {
        Self { search_paths }
    }

    /// Pick the config file to read; an explicit path must exist
    pub fn locate(&self, explicit: Option<&Path>) -> Result<Option<PathBuf>, DomainError> {
        if let Some(path) = explicit {
            if !path.is_file() {
                return Err(DomainError::ConfigError(format!(
                    "Config file does not exist: {}",
                    path.display()
                )));
            }
            return Ok(Some(path.to_path_buf()));
        }
        Ok(self.search_paths.iter().find(|p| p.is_file()).cloned())
    }

    /// Load configuration, falling back to defaults when no file is found
    pub fn load(&self, explicit: Option<&Path>) -> Result<PipelineConfig, DomainError> {
        match self.locate(explicit)? {
            Some(path) => {
                info!("Loading configuration from: {}", path.display());
                Self::load_file(&path)
            }
            None => {
                info!("No config file found, using defaults");
                Ok(PipelineConfig::default())
            }
        }
    }

    /// Parse one file; `.yaml`/`.yml` go through serde_yaml, everything else is TOML
    pub fn load_file(path: &Path) -> Result<PipelineConfig, DomainError> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| DomainError::ConfigError(format!("Failed to read config file: {}", e)))?;

        let is_yaml = matches!(
            path.extension().and_then(|e| e.to_str()),
            Some("yaml") | Some("yml")
        );
        if is_yaml {
            Self::from_yaml_str(&content)
        } else {
            Self::from_toml_str(&content)
        }
    }

    pub fn from_toml_str(content: &str) -> Result<PipelineConfig, DomainError> {
        toml::from_str(content)
            .map_err(|e| DomainError::ConfigError(format!("Failed to parse TOML config: {}", e)))
    }

    pub fn from_yaml_str(content: &str) -> Result<PipelineConfig, DomainError> {
        serde_yaml::from_str(content)
            .map_err(|e| DomainError::ConfigError(format!("Failed to parse YAML config: {}", e)))
    }

    /// Serialize config to TOML string
    pub fn to_toml_string(config: &PipelineConfig) -> Result<String, DomainError> {
        toml::to_string_pretty(config)
            .map_err(|e| DomainError::ConfigError(format!("Failed to serialize config: {}", e)))
    }
}

impl Default for TomlConfigAdapter {
    fn default() -> Self {
        Self::new()
    }
}
