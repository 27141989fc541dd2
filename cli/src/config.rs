//! `bigi.toml` configuration.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};

pub const DEFAULT_CONFIG_FILE: &str = "bigi.toml";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Radix for BigInt results
    pub radix: u32,
    pub format: OutputFormat,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            radix: 10,
            format: OutputFormat::Text,
        }
    }
}

impl Config {
    pub fn from_toml(text: &str) -> Result<Self> {
        let config: Config = toml::from_str(text).context("Invalid configuration")?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if !(2..=36).contains(&self.radix) {
            bail!("radix must be between 2 and 36, got {}", self.radix);
        }
        Ok(())
    }

    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        Self::from_toml(&text).with_context(|| format!("In config file {}", path.display()))
    }

    /// Load `explicit` if given (it must exist), else `bigi.toml` in `dir`
    /// if present, else the defaults. Also returns the file that was read.
    pub fn resolve(explicit: Option<&Path>, dir: &Path) -> Result<(Self, Option<PathBuf>)> {
        if let Some(path) = explicit {
            return Ok((Self::load(path)?, Some(path.to_path_buf())));
        }
        let fallback = dir.join(DEFAULT_CONFIG_FILE);
        if fallback.is_file() {
            return Ok((Self::load(&fallback)?, Some(fallback)));
        }
        Ok((Self::default(), None))
    }
}

/// Effective settings after command-line overrides.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Settings {
    pub radix: u32,
    pub format: OutputFormat,
}

impl Settings {
    pub fn new(config: &Config, json: bool) -> Self {
        Self {
            radix: config.radix,
            format: if json { OutputFormat::Json } else { config.format },
        }
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self::new(&Config::default(), false)
    }
}
