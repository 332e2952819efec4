//! Error types for MSC operations.
//!
//! This module provides the main error type [`MscError`] which wraps the
//! error conditions of loading configuration and resolving options.

use std::io;

use thiserror::Error;

use msc_core::error::OptionError;

use crate::config::ConfigError;

/// The main error type for MSC operations.
#[derive(Debug, Error)]
pub enum MscError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Option error: {0}")]
    InvalidOption(#[from] OptionError),
}
