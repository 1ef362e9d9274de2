use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::ConfigError;
use crate::tree::{Exclusions, GlyphPolicy};

/// Directory name under the user's config dir
pub const APP_NAME: &str = "folder-structure";

/// Root configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub exclude: ExcludeConfig,
    pub output: OutputConfig,
    pub render: RenderConfig,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ExcludeConfig {
    /// Folder names omitted together with their subtree
    pub skip_entirely: Vec<String>,
    /// Folder names listed without their contents
    pub skip_contents: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Directory for generated files (default: Desktop, then current dir)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub directory: Option<PathBuf>,
    /// Appended to the root folder name to build the file name
    pub file_suffix: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Glyph policy: legacy, precise
    pub glyphs: GlyphPolicy,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            directory: None,
            file_suffix: "_structure.txt".to_string(),
        }
    }
}

impl Config {
    /// Load configuration from `path`, or from the default location.
    ///
    /// An explicit path must exist. A missing default file yields defaults.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let path = match path {
            Some(p) => p.to_path_buf(),
            None => match Self::default_path() {
                Some(p) if p.is_file() => p,
                _ => {
                    tracing::debug!("No config file found, using defaults");
                    return Ok(Self::default());
                }
            },
        };

        let content = fs::read_to_string(&path).map_err(|source| ConfigError::ReadError {
            path: path.clone(),
            source,
        })?;

        let config: Config =
            toml::from_str(&content).map_err(|source| ConfigError::ParseError {
                path: path.clone(),
                source,
            })?;

        config.validate()?;
        tracing::debug!(path = %path.display(), "Loaded config file");

        Ok(config)
    }

    /// `<config_dir>/folder-structure/config.toml`
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(APP_NAME).join("config.toml"))
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let names = self
            .exclude
            .skip_entirely
            .iter()
            .chain(&self.exclude.skip_contents);

        for name in names {
            if name.trim().is_empty() {
                return Err(ConfigError::Invalid(
                    "exclusion names must not be empty".to_string(),
                ));
            }
            if name.contains('/') || name.contains('\\') {
                return Err(ConfigError::Invalid(format!(
                    "exclusion '{}' must be a folder name, not a path",
                    name
                )));
            }
        }

        if self.output.file_suffix.is_empty() {
            return Err(ConfigError::Invalid(
                "output.file_suffix must not be empty".to_string(),
            ));
        }

        Ok(())
    }

    /// Exclusions configured in the file
    pub fn exclusions(&self) -> Exclusions {
        Exclusions::new()
            .with_skip_entirely(self.exclude.skip_entirely.iter().map(|s| s.trim()))
            .with_skip_contents(self.exclude.skip_contents.iter().map(|s| s.trim()))
    }
}
