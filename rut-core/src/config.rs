//! Configuration management for `rut-core`.
//!
//! Batch front ends (the `rut` CLI, import jobs) read a small YAML file that picks
//! the default action, the output shape, and how strictly invalid values are
//! treated. Values given on a command line are layered on top with
//! [`merge_config`].
//!
//! License: MIT OR Apache-2.0

use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;
use std::str::FromStr;

use crate::errors::RutError;
use crate::filter::RutAction;

/// How batch results are rendered.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// One human-readable line per value.
    #[default]
    Plain,
    /// A pretty-printed JSON array.
    Json,
    /// A bordered table.
    Table,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            OutputFormat::Plain => "plain",
            OutputFormat::Json => "json",
            OutputFormat::Table => "table",
        };
        f.write_str(name)
    }
}

impl FromStr for OutputFormat {
    type Err = RutError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "plain" => Ok(OutputFormat::Plain),
            "json" => Ok(OutputFormat::Json),
            "table" => Ok(OutputFormat::Table),
            other => Err(RutError::UnknownOutputFormat(other.to_string())),
        }
    }
}

/// Top-level configuration for batch processing.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct RutConfig {
    /// Action used by `filter` when no action is named.
    pub default_action: RutAction,
    /// If true, a batch containing an invalid RUT exits with a failure status.
    pub fail_on_invalid: bool,
    /// If true, blank input lines are not processed.
    pub skip_blank_lines: bool,
    /// Rendering of batch results.
    pub output: OutputFormat,
}

impl Default for RutConfig {
    fn default() -> Self {
        Self {
            default_action: RutAction::Format,
            fail_on_invalid: false,
            skip_blank_lines: true,
            output: OutputFormat::Plain,
        }
    }
}

impl RutConfig {
    /// Parses a YAML document. An empty document yields the defaults.
    pub fn from_yaml_str(yaml: &str) -> Result<Self, RutError> {
        if yaml.trim().is_empty() {
            debug!("Empty configuration document, using defaults.");
            return Ok(Self::default());
        }
        Ok(serde_yml::from_str(yaml)?)
    }

    /// Loads configuration from a YAML file.
    ///
    /// A file that cannot be read yields [`RutError::Io`], malformed YAML yields
    /// [`RutError::ConfigParse`]. Callers attach the path when reporting.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, RutError> {
        let path = path.as_ref();
        info!("Loading configuration from: {}", path.display());
        let text = std::fs::read_to_string(path)?;
        let config = Self::from_yaml_str(&text)?;

        debug!("Loaded configuration: {:?}", config);
        Ok(config)
    }
}

/// Values supplied on the command line; `None` leaves the file value in place.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigOverrides {
    pub default_action: Option<RutAction>,
    pub fail_on_invalid: Option<bool>,
    pub skip_blank_lines: Option<bool>,
    pub output: Option<OutputFormat>,
}

/// Layers command-line overrides on top of a loaded (or default) configuration.
pub fn merge_config(base: RutConfig, overrides: &ConfigOverrides) -> RutConfig {
    let mut merged = base;

    if let Some(action) = overrides.default_action {
        debug!("Overriding default action with: {}", action);
        merged.default_action = action;
    }
    if let Some(fail) = overrides.fail_on_invalid {
        debug!("Overriding fail_on_invalid with: {}", fail);
        merged.fail_on_invalid = fail;
    }
    if let Some(skip) = overrides.skip_blank_lines {
        debug!("Overriding skip_blank_lines with: {}", skip);
        merged.skip_blank_lines = skip;
    }
    if let Some(output) = overrides.output {
        debug!("Overriding output format with: {}", output);
        merged.output = output;
    }

    merged
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = RutConfig::default();
        assert_eq!(config.default_action, RutAction::Format);
        assert!(!config.fail_on_invalid);
        assert!(config.skip_blank_lines);
        assert_eq!(config.output, OutputFormat::Plain);
    }

    #[test]
    fn test_partial_yaml_keeps_defaults() {
        let config = RutConfig::from_yaml_str("fail_on_invalid: true\n").unwrap();
        assert!(config.fail_on_invalid);
        assert!(config.skip_blank_lines);
        assert_eq!(RutConfig::from_yaml_str("  \n").unwrap(), RutConfig::default());
    }

    #[test]
    fn test_unknown_action_is_a_parse_error() {
        let err = RutConfig::from_yaml_str("default_action: shout\n").unwrap_err();
        assert!(matches!(err, RutError::ConfigParse(_)));
    }

    #[test]
    fn test_merge_only_touches_given_fields() {
        let base = RutConfig {
            output: OutputFormat::Json,
            ..RutConfig::default()
        };
        let overrides = ConfigOverrides {
            fail_on_invalid: Some(true),
            ..ConfigOverrides::default()
        };
        let merged = merge_config(base, &overrides);
        assert!(merged.fail_on_invalid);
        assert_eq!(merged.output, OutputFormat::Json);
    }

    #[test]
    fn test_output_format_from_str() {
        assert_eq!("TABLE".parse::<OutputFormat>().unwrap(), OutputFormat::Table);
        assert!(matches!("xml".parse::<OutputFormat>(), Err(RutError::UnknownOutputFormat(_))));
    }
}
