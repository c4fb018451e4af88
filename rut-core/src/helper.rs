// rut-core/src/helper.rs
//! A named, copyable handle over the core operations.
//!
//! Useful where a value has to be injected (a struct field, a trait object's
//! dependency) rather than a set of free functions being called directly.

use crate::filter::{FilterOutput, RutAction};
use crate::input::RawInput;

/// Stateless handle exposing `clean`, `format`, `validate` and `filter`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RutHelper;

/// Shared instance of [`RutHelper`].
pub const RUT_HELPER: RutHelper = RutHelper;

impl RutHelper {
    pub fn clean(&self, value: impl RawInput) -> String {
        crate::sanitizers::cleaner::clean(value)
    }

    pub fn format(&self, value: impl RawInput) -> String {
        crate::formatter::format(value)
    }

    pub fn validate(&self, value: impl RawInput) -> bool {
        crate::validators::validate(value)
    }

    pub fn filter(&self, value: impl RawInput, action: Option<&str>) -> FilterOutput {
        RutAction::from_name(action).apply(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_helper_matches_free_functions() {
        let raw = "7hf23775lwk052dgfdm1";
        assert_eq!(RUT_HELPER.clean(raw), crate::clean(raw));
        assert_eq!(RUT_HELPER.format(raw), crate::format(raw));
        assert_eq!(RUT_HELPER.validate(raw), crate::validate(raw));
        assert_eq!(RUT_HELPER.filter(222222222, Some("validate")), FilterOutput::Valid(true));
    }
}
