// rut-core/src/filter.rs
//! Single-entry display filter that dispatches to the core operations by name.
//!
//! Templates and command lines name an action as a string. [`RutAction::from_name`]
//! resolves it leniently (anything unknown formats), while the `FromStr` impl is
//! strict and reports unknown names as [`RutError::UnknownAction`].
//!
//! License: MIT OR APACHE 2.0

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::RutError;
use crate::formatter::format;
use crate::input::RawInput;
use crate::sanitizers::cleaner::clean;
use crate::validators::validate;

/// The operation a filter call dispatches to.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RutAction {
    Validate,
    Clean,
    #[default]
    Format,
}

impl RutAction {
    /// Resolves an action name, falling back to [`RutAction::Format`] for a missing
    /// or unrecognized name.
    pub fn from_name(name: Option<&str>) -> Self {
        match name {
            Some("validate") => RutAction::Validate,
            Some("clean") => RutAction::Clean,
            _ => RutAction::Format,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            RutAction::Validate => "validate",
            RutAction::Clean => "clean",
            RutAction::Format => "format",
        }
    }

    /// Runs this action on `value`.
    pub fn apply(self, value: impl RawInput) -> FilterOutput {
        match self {
            RutAction::Validate => FilterOutput::Valid(validate(value)),
            RutAction::Clean => FilterOutput::Text(clean(value)),
            RutAction::Format => FilterOutput::Text(format(value)),
        }
    }
}

impl FromStr for RutAction {
    type Err = RutError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "validate" => Ok(RutAction::Validate),
            "clean" => Ok(RutAction::Clean),
            "format" => Ok(RutAction::Format),
            other => Err(RutError::UnknownAction(other.to_string())),
        }
    }
}

impl fmt::Display for RutAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result of a filter call: text for `clean`/`format`, a flag for `validate`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum FilterOutput {
    Text(String),
    Valid(bool),
}

impl FilterOutput {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            FilterOutput::Text(text) => Some(text),
            FilterOutput::Valid(_) => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            FilterOutput::Valid(valid) => Some(*valid),
            FilterOutput::Text(_) => None,
        }
    }
}

impl fmt::Display for FilterOutput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FilterOutput::Text(text) => f.write_str(text),
            FilterOutput::Valid(valid) => write!(f, "{}", valid),
        }
    }
}

/// Applies the named action to `value`; `None` or an unknown name formats.
///
/// ```
/// use rut_core::{filter, FilterOutput};
///
/// assert_eq!(filter(222222222, None), FilterOutput::Text("22.222.222-2".into()));
/// assert_eq!(filter(222222222, Some("validate")), FilterOutput::Valid(true));
/// ```
pub fn filter(value: impl RawInput, action: Option<&str>) -> FilterOutput {
    RutAction::from_name(action).apply(value)
}
