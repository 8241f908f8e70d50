use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::ConfigError;

/// Root configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub tree: TreeConfig,
    pub display: DisplayConfig,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TreeConfig {
    /// JSON resource tree to load instead of the bundled one
    pub source: Option<PathBuf>,
    /// Resource focused when the picker starts
    pub initial_focus: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// List elements under each resource in text output
    pub show_elements: bool,
    /// Maximum element nesting shown
    pub max_depth: usize,
    /// Color scheme: auto, none
    pub color_scheme: String,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            show_elements: false,
            max_depth: 3,
            color_scheme: "auto".to_string(),
        }
    }
}

impl Config {
    /// Load configuration from `path`, or from the default location.
    ///
    /// An explicit path must exist. A missing default file yields the
    /// default configuration.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let (path, required) = match path {
            Some(p) => (p.to_path_buf(), true),
            None => match Self::default_path() {
                Some(p) => (p, false),
                None => return Ok(Self::default()),
            },
        };

        if !required && !path.exists() {
            tracing::debug!(path = %path.display(), "No config file, using defaults");
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(&path).map_err(|source| ConfigError::ReadError {
            path: path.clone(),
            source,
        })?;

        let config: Config =
            toml::from_str(&content).map_err(|source| ConfigError::ParseError {
                path: path.clone(),
                source,
            })?;

        config.validate()?;
        Ok(config)
    }

    /// `$XDG_CONFIG_HOME/element-tree/config.toml` or the platform equivalent.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("element-tree").join("config.toml"))
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.display.max_depth == 0 {
            return Err(ConfigError::Invalid(
                "display.max_depth must be at least 1".to_string(),
            ));
        }
        match self.display.color_scheme.as_str() {
            "auto" | "none" => Ok(()),
            other => Err(ConfigError::Invalid(format!(
                "display.color_scheme must be 'auto' or 'none', got '{}'",
                other
            ))),
        }
    }

    /// Focus from config, with empty strings treated as unset.
    pub fn initial_focus(&self) -> Option<&str> {
        self.tree
            .initial_focus
            .as_deref()
            .filter(|focus| !focus.is_empty())
    }
}
