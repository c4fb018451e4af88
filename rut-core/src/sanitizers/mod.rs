//! Input sanitization for RUT values.
//!
//! This module is responsible for reducing raw, user-entered text to the characters
//! that can be part of a RUT: the decimal digits of the body and one trailing check
//! character. Everything downstream (`formatter`, `validators`, `scanner`) works on
//! the output of this module and never on raw input.

pub mod cleaner;
