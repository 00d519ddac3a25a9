//! Packer configuration via `sesame.toml`
//!
//! The only choice a deployment makes is how string keys find their
//! boundary. Tokens issued under one string strategy cannot be read back under
//! another, so this is a deploy-time setting: edit the file and restart.

use serde::{Deserialize, Serialize};
use std::io;
use std::path::Path;
use thiserror::Error;

use crate::string::{StringStrategy, DEFAULT_ANCHOR_SUFFIX_LEN};

/// Config file name
pub const CONFIG_FILE_NAME: &str = "sesame.toml";

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Config file could not be read
    #[error("Failed to read config file '{path}': {source}")]
    Read {
        /// Path that was read
        path: String,
        /// Underlying I/O error
        #[source]
        source: io::Error,
    },

    /// Config file could not be written
    #[error("Failed to write config file '{path}': {source}")]
    Write {
        /// Path that was written
        path: String,
        /// Underlying I/O error
        #[source]
        source: io::Error,
    },

    /// Config content is not valid TOML for this schema
    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    /// Config could not be rendered as TOML
    #[error("Failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),

    /// Unrecognized string strategy name
    #[error(
        "Invalid string strategy '{0}' in sesame.toml. Expected \"greedy\", \"anchored\", or \"prefixed\"."
    )]
    InvalidStrategy(String),
}

/// Packer configuration loaded from `sesame.toml`.
///
/// # Example
///
/// ```toml
/// string_strategy = "anchored"
/// anchor_suffix_len = 16
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PackerConfig {
    /// String strategy: `"greedy"`, `"anchored"`, or `"prefixed"`.
    #[serde(default = "default_strategy_str")]
    pub string_strategy: String,
    /// Suffix length assumed by the anchored strategy.
    #[serde(default = "default_anchor_suffix_len")]
    pub anchor_suffix_len: usize,
}

fn default_strategy_str() -> String {
    StringStrategy::Greedy.name().to_string()
}

fn default_anchor_suffix_len() -> usize {
    DEFAULT_ANCHOR_SUFFIX_LEN
}

impl Default for PackerConfig {
    fn default() -> Self {
        Self {
            string_strategy: default_strategy_str(),
            anchor_suffix_len: default_anchor_suffix_len(),
        }
    }
}

impl PackerConfig {
    /// Parse the strategy string into a `StringStrategy`.
    ///
    /// # Errors
    ///
    /// Returns an error if the name is not a known strategy.
    pub fn string_strategy(&self) -> Result<StringStrategy, ConfigError> {
        StringStrategy::from_name(&self.string_strategy, self.anchor_suffix_len)
            .ok_or_else(|| ConfigError::InvalidStrategy(self.string_strategy.clone()))
    }

    /// Parse config from TOML text, validating the strategy eagerly.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: PackerConfig = toml::from_str(content)?;
        config.string_strategy()?;
        Ok(config)
    }

    /// Read and parse config from a file path.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_toml_str(&content)
    }

    /// Returns the default config file content with comments.
    pub fn default_toml() -> &'static str {
        r#"# Sesame packer configuration
#
# How string primary keys find the end of their payload inside a token:
#   "greedy"   = longest valid UTF-8 prefix of the token (default)
#   "anchored" = longest valid UTF-8 prefix, excluding the last
#                anchor_suffix_len bytes
#   "prefixed" = length-prefixed payload; tokens are NOT readable by the
#                other two strategies
string_strategy = "greedy"

# Suffix length assumed by the anchored strategy (default: 16)
anchor_suffix_len = 16
"#
    }

    /// Write the default config file if it does not already exist.
    pub fn write_default_if_missing(path: &Path) -> Result<(), ConfigError> {
        if !path.exists() {
            std::fs::write(path, Self::default_toml()).map_err(|source| ConfigError::Write {
                path: path.display().to_string(),
                source,
            })?;
        }
        Ok(())
    }

    /// Serialize this config to TOML and write it to the given path.
    pub fn write_to_file(&self, path: &Path) -> Result<(), ConfigError> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content).map_err(|source| ConfigError::Write {
            path: path.display().to_string(),
            source,
        })
    }
}
