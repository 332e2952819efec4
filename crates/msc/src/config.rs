//! Configuration types for MSC option resolution.
//!
//! A document only carries the options its source sets. [`AppConfig`]
//! supplies the values used for the rest. All types implement
//! [`serde::Deserialize`] and are normally loaded from a TOML file with
//! [`load_config`].
//!
//! # Example
//!
//! ```
//! # use msc::config::AppConfig;
//! let config = AppConfig::from_toml_str("[defaults]\nhscale = 1.5\n").unwrap();
//! assert_eq!(config.defaults().hscale(), 1.5);
//! assert!(!config.defaults().word_wrap_arcs());
//! ```

use std::{
    fs,
    path::{Path, PathBuf},
};

use log::{debug, info};
use serde::Deserialize;
use thiserror::Error;

use crate::MscError;

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to parse TOML configuration: {0}")]
    Parse(String),

    #[error("Missing configuration file: {0}")]
    MissingFile(PathBuf),

    #[error("Validation error: {0}")]
    Validation(String),
}

/// Top-level application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Fallback option values.
    #[serde(default)]
    defaults: OptionDefaults,
}

impl AppConfig {
    /// Creates a new [`AppConfig`] with the given option defaults.
    pub fn new(defaults: OptionDefaults) -> Self {
        Self { defaults }
    }

    /// Parse and validate a configuration from TOML text.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] for malformed TOML and
    /// [`ConfigError::Validation`] for out-of-range values.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: AppConfig =
            toml::from_str(content).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.defaults.validate()?;
        Ok(config)
    }

    /// Returns the option defaults.
    pub fn defaults(&self) -> &OptionDefaults {
        &self.defaults
    }
}

/// Values used for options a document does not set.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct OptionDefaults {
    /// Horizontal scale factor.
    hscale: f32,

    /// Chart width in pixels; `None` lets layout size the chart from its entities.
    width: Option<f32>,

    /// Vertical drop of arcs across their span.
    arc_gradient: f32,

    /// Word-wrap arc labels.
    word_wrap_arcs: bool,
}

impl Default for OptionDefaults {
    fn default() -> Self {
        Self {
            hscale: 1.0,
            width: None,
            arc_gradient: 0.0,
            word_wrap_arcs: false,
        }
    }
}

impl OptionDefaults {
    /// Creates option defaults.
    pub fn new(hscale: f32, width: Option<f32>, arc_gradient: f32, word_wrap_arcs: bool) -> Self {
        Self {
            hscale,
            width,
            arc_gradient,
            word_wrap_arcs,
        }
    }

    pub fn hscale(&self) -> f32 {
        self.hscale
    }

    pub fn width(&self) -> Option<f32> {
        self.width
    }

    pub fn arc_gradient(&self) -> f32 {
        self.arc_gradient
    }

    pub fn word_wrap_arcs(&self) -> bool {
        self.word_wrap_arcs
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if !(self.hscale.is_finite() && self.hscale > 0.0) {
            return Err(ConfigError::Validation(format!(
                "defaults.hscale must be a positive number, got {}",
                self.hscale
            )));
        }
        if let Some(width) = self.width.filter(|w| !(w.is_finite() && *w > 0.0)) {
            return Err(ConfigError::Validation(format!(
                "defaults.width must be a positive number, got {width}"
            )));
        }
        Ok(())
    }
}

/// Load configuration from a TOML file, or the default configuration when no
/// path is given.
///
/// # Errors
///
/// Returns error if:
/// - The file doesn't exist
/// - The file cannot be read
/// - TOML parsing or validation fails
pub fn load_config(path: Option<impl AsRef<Path>>) -> Result<AppConfig, MscError> {
    let Some(path) = path else {
        debug!("No configuration file given, using default configuration");
        return Ok(AppConfig::default());
    };
    let path = path.as_ref();
    info!(path = path.display().to_string(); "Loading configuration");

    if !path.exists() {
        return Err(ConfigError::MissingFile(path.to_path_buf()).into());
    }

    let content = fs::read_to_string(path)?;
    Ok(AppConfig::from_toml_str(&content)?)
}
