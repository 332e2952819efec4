//! Error types for the MSC intermediate representation.
//!
//! Lookups in this crate return [`Option`]; absence is a normal outcome.
//! The types here cover the few conditions a caller must be told about:
//! option values that cannot be coerced, and drawing backends that fail to
//! flush their output.

use thiserror::Error;

use crate::option::OptType;

/// Failure to coerce a document option into a typed value.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OptionError {
    #[error(
        "unrecognised boolean value `{value}` for option `{option}`; valid values are \
         'true', 'false', 'yes', 'no', 'on', 'off', '1' and '0'"
    )]
    UnrecognisedBoolean { option: OptType, value: String },
}

/// Failure reported by a [`DrawBackend`](crate::draw::DrawBackend).
#[derive(Debug, Error)]
pub enum DrawError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Backend error: {0}")]
    Backend(String),
}
