use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

static DEFAULT_CONFIG: &str = include_str!("default_config.toml");

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file at {config_path}: {source}")]
    ConfigReadError {
        config_path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file at {config_path}: {source}")]
    ConfigParseError {
        config_path: PathBuf,
        source: toml::de::Error,
    },
}

#[derive(Debug, Clone, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct Config {
    pub answer: AnswerConfig,
    pub images: ImageConfig,
    pub output: OutputConfig,
}

/// How answer text is turned into HTML
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum ConversionMode {
    /// Links, bold, headings and lists.
    #[default]
    Markup,
    /// Links and lists only.
    Links,
    /// Newlines become `<br />`, nothing else changes.
    LineBreaks,
    /// Bare URLs become image tags.
    Images,
}

#[derive(Debug, Clone, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct AnswerConfig {
    pub mode: ConversionMode,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct ImageConfig {
    /// Class attribute for appended images; empty omits the attribute.
    pub class: String,
    pub alt: String,
    pub self_closing: bool,
}

impl Default for ImageConfig {
    fn default() -> Self {
        Self {
            class: "img-thumbnail".to_string(),
            alt: "Image".to_string(),
            self_closing: true,
        }
    }
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct OutputConfig {
    pub directory: PathBuf,
    pub prefix: String,
    pub extension: String,
    pub id_length: usize,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            directory: PathBuf::from("."),
            prefix: "accordion_".to_string(),
            extension: "txt".to_string(),
            id_length: 4,
        }
    }
}

impl Config {
    /// Defaults bundled with the binary (checked by the build script).
    pub fn compiled_default() -> Self {
        toml::from_str(DEFAULT_CONFIG).expect("bundled default_config.toml does not match Config")
    }

    /// Load config from a TOML file. Returns `Ok(None)` if the file does not exist.
    pub fn load_from_path<P: AsRef<Path>>(config_path: P) -> Result<Option<Self>, ConfigError> {
        let config_path = config_path.as_ref();
        if !config_path.exists() {
            return Ok(None);
        }

        let content =
            fs::read_to_string(config_path).map_err(|source| ConfigError::ConfigReadError {
                config_path: config_path.to_path_buf(),
                source,
            })?;

        let config = toml::from_str(&content).map_err(|source| ConfigError::ConfigParseError {
            config_path: config_path.to_path_buf(),
            source,
        })?;

        Ok(Some(config))
    }

    /// Path checked when no config is given explicitly.
    pub fn default_path() -> PathBuf {
        PathBuf::from("accordion.toml")
    }
}
