//! Settings for rendering asides: which Markdown extensions the converter
//! enables and whether undefined template variables are an error.
//!
//! Read from `~/.config/aside-block/config.toml`, or from the file named by
//! `$ASIDE_BLOCK_CONFIG`. A missing file means defaults.

use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use thiserror::Error;

/// Environment variable that overrides the config file location.
pub const CONFIG_ENV: &str = "ASIDE_BLOCK_CONFIG";

const DEFAULT_CONFIG_PATH: &str = "~/.config/aside-block/config.toml";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read aside config {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("invalid aside config {path}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
}

/// Markdown extensions enabled on the converter. Everything is off by
/// default, which gives plain CommonMark.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MarkdownConfig {
    pub tables: bool,
    pub footnotes: bool,
    pub strikethrough: bool,
    pub tasklists: bool,
    pub smart_punctuation: bool,
    pub heading_attributes: bool,
}

#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Fail rendering on undefined variables instead of emitting nothing.
    pub strict_variables: bool,
    pub markdown: MarkdownConfig,
}

impl FromStr for Config {
    type Err = toml::de::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        toml::from_str(s)
    }
}

impl Config {
    /// Reads `path`. `Ok(None)` when the file does not exist.
    pub fn load_from_path<P: AsRef<Path>>(path: P) -> Result<Option<Self>, ConfigError> {
        let path = path.as_ref();
        let content = match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(err) if err.kind() == ErrorKind::NotFound => return Ok(None),
            Err(source) => {
                return Err(ConfigError::Read {
                    path: path.to_path_buf(),
                    source,
                });
            }
        };

        content.parse::<Self>().map(Some).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn load() -> Result<Option<Self>, ConfigError> {
        Self::load_from_path(Self::config_path())
    }

    /// Like [`Config::load`], with defaults standing in for a missing file.
    pub fn load_or_default() -> Result<Self, ConfigError> {
        Ok(Self::load()?.unwrap_or_default())
    }

    pub fn save_to_path<P: AsRef<Path>>(&self, path: P) -> anyhow::Result<()> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("creating config directory {}", parent.display()))?;
        }
        let content = toml::to_string_pretty(self).context("serializing aside config")?;
        std::fs::write(path, content)
            .with_context(|| format!("writing aside config {}", path.display()))
    }

    pub fn save(&self) -> anyhow::Result<()> {
        self.save_to_path(Self::config_path())
    }

    pub fn config_path() -> PathBuf {
        resolve_config_path(std::env::var(CONFIG_ENV).ok().as_deref())
    }
}

/// Picks the override when given, else the default location, expanding `~`
/// and `$VARS`. An override that fails to expand is used verbatim.
fn resolve_config_path(override_path: Option<&str>) -> PathBuf {
    match override_path.filter(|p| !p.is_empty()) {
        Some(raw) => shellexpand::full(raw)
            .map(|expanded| PathBuf::from(expanded.as_ref()))
            .unwrap_or_else(|_| PathBuf::from(raw)),
        None => PathBuf::from(shellexpand::tilde(DEFAULT_CONFIG_PATH).as_ref()),
    }
}
