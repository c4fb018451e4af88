// rut-core/src/binding.rs
//! Two-way binding of a RUT to an editable text field.
//!
//! The form layer is not known to this crate. It is injected as a
//! [`ModelController`], the callbacks a binding needs to mark the field valid or
//! invalid and to push a reformatted value back into the view. A
//! [`RutModelBinding`] wires the core operations into the two directions of the
//! binding:
//!
//! * **parse** (view -> model): validate, write the formatted text back to the
//!   view, re-render, and store the cleaned value in the model.
//! * **format** (model -> view): display the model value formatted.
//!
//! License: MIT OR APACHE 2.0

use log::{debug, warn};

use crate::errors::RutError;
use crate::formatter::format;
use crate::input::RawInput;
use crate::sanitizers::cleaner::clean;
use crate::validators::validate;

/// Validity key reported to the controller.
pub const VALIDITY_KEY: &str = "rut";

/// Element tag the binding may be attached to.
pub const SUPPORTED_ELEMENT: &str = "INPUT";

/// Callbacks into the form layer that owns the edited field.
pub trait ModelController {
    /// Marks the bound value as valid or invalid under `key`.
    fn set_validity(&mut self, key: &str, valid: bool);

    /// Replaces the text currently shown in the field.
    fn set_view_value(&mut self, text: &str);

    /// Asks the form layer to redraw the field.
    fn render(&mut self);
}

/// Binds the core operations to one editable field.
#[derive(Debug)]
pub struct RutModelBinding<C> {
    controller: C,
}

impl<C: ModelController> RutModelBinding<C> {
    /// Attaches a binding to the element identified by `element_tag`.
    ///
    /// Only text inputs can be bound; any other tag yields
    /// [`RutError::UnsupportedElement`].
    pub fn attach(element_tag: &str, controller: C) -> Result<Self, RutError> {
        if !element_tag.eq_ignore_ascii_case(SUPPORTED_ELEMENT) {
            warn!("Refusing to bind RUT handling to a '{}' element", element_tag);
            return Err(RutError::UnsupportedElement(element_tag.to_string()));
        }

        debug!("RUT binding attached to {} element", SUPPORTED_ELEMENT);
        Ok(Self { controller })
    }

    /// Handles text edited in the view and returns the value to store in the model.
    pub fn on_parse(&mut self, raw_text: &str) -> String {
        let valid = validate(raw_text);
        self.controller.set_validity(VALIDITY_KEY, valid);
        self.controller.set_view_value(&format(raw_text));
        self.controller.render();

        let cleaned = clean(raw_text);
        debug!("Parsed view value into model value (valid: {}, {} chars)", valid, cleaned.len());
        cleaned
    }

    /// Renders a model value for display.
    pub fn on_format(&self, model_value: impl RawInput) -> String {
        format(model_value)
    }

    pub fn controller(&self) -> &C {
        &self.controller
    }

    pub fn controller_mut(&mut self) -> &mut C {
        &mut self.controller
    }

    pub fn into_controller(self) -> C {
        self.controller
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Default)]
    struct RecordingController {
        validity: Vec<(String, bool)>,
        view: Option<String>,
        renders: usize,
    }

    impl ModelController for RecordingController {
        fn set_validity(&mut self, key: &str, valid: bool) {
            self.validity.push((key.to_string(), valid));
        }

        fn set_view_value(&mut self, text: &str) {
            self.view = Some(text.to_string());
        }

        fn render(&mut self) {
            self.renders += 1;
        }
    }

    #[test]
    fn test_attach_rejects_non_input_elements() {
        let err = RutModelBinding::attach("DIV", RecordingController::default()).unwrap_err();
        assert!(matches!(err, RutError::UnsupportedElement(ref tag) if tag == "DIV"));
        assert!(RutModelBinding::attach("input", RecordingController::default()).is_ok());
    }

    #[test]
    fn test_on_parse_updates_view_and_validity() {
        let mut binding = RutModelBinding::attach("INPUT", RecordingController::default()).unwrap();

        let model = binding.on_parse("22222222-2");
        assert_eq!(model, "222222222");

        let controller = binding.controller();
        assert_eq!(controller.validity, vec![("rut".to_string(), true)]);
        assert_eq!(controller.view.as_deref(), Some("22.222.222-2"));
        assert_eq!(controller.renders, 1);
    }

    #[test]
    fn test_on_parse_flags_invalid_values() {
        let mut binding = RutModelBinding::attach("INPUT", RecordingController::default()).unwrap();
        binding.on_parse("22222222-5");
        let controller = binding.into_controller();
        assert_eq!(controller.validity, vec![("rut".to_string(), false)]);
    }

    #[test]
    fn test_on_format_handles_missing_model() {
        let binding = RutModelBinding::attach("INPUT", RecordingController::default()).unwrap();
        assert_eq!(binding.on_format(None::<String>), "");
        assert_eq!(binding.on_format("123456785"), "12.345.678-5");
    }
}
