//! errors.rs - Custom error types for the rut-core library.
//!
//! The three core operations (`clean`, `format`, `validate`) are total and never
//! return an error. This enum covers the fallible edges around them: loading
//! configuration, strict parsing of filter actions and attaching a model binding.
//!
//! License: MIT OR APACHE 2.0

use thiserror::Error;

/// This enum represents all possible error types in the `rut-core` library.
///
/// Marked `#[non_exhaustive]` so new variants can be added without breaking
/// downstream `match` statements.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum RutError {
    #[error("Unknown filter action '{0}' (expected 'clean', 'format' or 'validate')")]
    UnknownAction(String),

    #[error("Unknown output format '{0}' (expected 'plain', 'json' or 'table')")]
    UnknownOutputFormat(String),

    #[error("The RUT binding must be attached to INPUT elements only, got '{0}'")]
    UnsupportedElement(String),

    #[error("Failed to parse configuration: {0}")]
    ConfigParse(#[from] serde_yml::Error),

    #[error("Failed to serialize report: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("An unexpected I/O error occurred: {0}")]
    Io(#[from] std::io::Error),
}
