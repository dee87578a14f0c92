use crate::error::{ConfigError, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

/// Opaque key/value bag passed through unexamined to every provider.
pub type Properties = BTreeMap<String, String>;

/// Root configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub clean: CleanConfig,
    /// Provider properties; recognized keys are provider-specific.
    pub properties: Properties,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CleanConfig {
    /// Target directory of compiled class files
    pub target: Option<PathBuf>,
    /// Auxiliary search path entries consulted in addition to the target
    pub classpath: Vec<PathBuf>,
}

impl Config {
    /// Load configuration from the given path, or from the default location.
    ///
    /// An explicit path must exist and parse; a missing file at the default
    /// location just yields the defaults.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::read(path),
            None => match Self::default_path() {
                Some(path) if path.exists() => Self::read(&path),
                _ => Ok(Self::default()),
            },
        }
    }

    fn read(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path).map_err(|source| ConfigError::ReadError {
            path: path.to_path_buf(),
            source,
        })?;
        let config = toml::from_str(&contents).map_err(|source| ConfigError::ParseError {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(config)
    }

    /// Default config file location: `<config dir>/classweave/config.toml`.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("classweave").join("config.toml"))
    }
}
