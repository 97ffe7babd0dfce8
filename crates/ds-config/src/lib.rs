//! # ds-config
//!
//! Layered configuration loading for dumpstructs using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Command-line overrides (options the user actually passed)
//! 2. An explicitly named TOML file (`--config`)
//! 3. Built-in defaults (`path = "."`, `exclude = ""`)
//!
//! No file is read unless one is named, and no environment variable feeds
//! into the scan settings.
//!
//! # Usage
//!
//! ```no_run
//! use ds_config::{DumpConfig, Overrides};
//!
//! let overrides = Overrides {
//!     exclude: Some("_test\\.go$".to_string()),
//!     ..Overrides::default()
//! };
//! let config = DumpConfig::load(None, &overrides).expect("config");
//! let exclude = config.exclude_pattern().expect("valid pattern");
//! assert!(exclude.is_some_and(|re| re.is_match("pkg/a_test.go")));
//! ```

mod error;

pub use error::ConfigError;

use figment::{
    Figment,
    providers::{Format, Serialized, Toml},
};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Default traversal root.
fn default_path() -> PathBuf {
    PathBuf::from(".")
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct DumpConfig {
    /// Root directory to traverse for Go files.
    #[serde(default = "default_path")]
    pub path: PathBuf,

    /// Regex of paths to skip entirely. Empty disables exclusion.
    #[serde(default)]
    pub exclude: String,
}

impl Default for DumpConfig {
    fn default() -> Self {
        Self {
            path: default_path(),
            exclude: String::new(),
        }
    }
}

/// Settings given on the command line. Unset fields leave lower layers alone.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Overrides {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<PathBuf>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exclude: Option<String>,
}

impl DumpConfig {
    /// Load configuration from defaults, an optional TOML file, and overrides.
    ///
    /// A file that is named must exist.
    ///
    /// # Errors
    /// Returns [`ConfigError::InvalidValue`] when the named file does not
    /// exist and [`ConfigError::Figment`] when it is malformed.
    pub fn load(config_file: Option<&Path>, overrides: &Overrides) -> Result<Self, ConfigError> {
        if let Some(path) = config_file
            && !path.is_file()
        {
            return Err(ConfigError::InvalidValue {
                field: "config".to_string(),
                reason: format!("no such file: {}", path.display()),
            });
        }
        Self::figment(config_file, overrides)
            .extract()
            .map_err(ConfigError::from)
    }

    /// Build the figment provider chain.
    ///
    /// This is public so tests can inspect the figment directly or add
    /// additional providers on top.
    pub fn figment(config_file: Option<&Path>, overrides: &Overrides) -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        if let Some(path) = config_file {
            figment = figment.merge(Toml::file(path));
        }

        figment.merge(Serialized::defaults(overrides))
    }

    /// Compile the exclude pattern. `None` when exclusion is disabled.
    ///
    /// # Errors
    /// Returns [`ConfigError::InvalidValue`] when the pattern does not compile.
    pub fn exclude_pattern(&self) -> Result<Option<Regex>, ConfigError> {
        if self.exclude.is_empty() {
            return Ok(None);
        }
        Regex::new(&self.exclude)
            .map(Some)
            .map_err(|error| ConfigError::InvalidValue {
                field: "exclude".to_string(),
                reason: error.to_string(),
            })
    }
}
