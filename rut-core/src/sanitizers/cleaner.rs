// rut-core/src/sanitizers/cleaner.rs
//! The `clean` operation and the [`CleanedRut`] value it produces.
//!
//! Cleaning is positional: the last character of the input is the candidate check
//! character and is inspected *before* anything is stripped. It survives only if it
//! is a digit or `k`/`K`. Every other character is reduced to its ASCII digits, so a
//! `k` in the middle of the input is noise, not a check character.
//!
//! License: MIT OR APACHE 2.0

use std::borrow::Cow;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::input::RawInput;

/// Returns `true` for characters that may appear in the check position.
pub fn is_check_char(c: char) -> bool {
    c.is_ascii_digit() || c == 'k' || c == 'K'
}

/// Strips everything but the body digits and the trailing check character.
///
/// Never fails: empty input, `None`, or input without a single usable character
/// all produce an empty string. The case of a trailing `k` is preserved.
///
/// ```
/// use rut_core::clean;
///
/// assert_eq!(clean("12.345.678-5"), "123456785");
/// assert_eq!(clean("7.654.321-K"), "7654321K");
/// assert_eq!(clean("abc"), "");
/// ```
pub fn clean(value: impl RawInput) -> String {
    let text = value.to_raw_text();
    let mut chars = text.chars();
    let check = chars.next_back().filter(|c| is_check_char(*c));

    let mut cleaned: String = chars.filter(char::is_ascii_digit).collect();
    if let Some(check) = check {
        cleaned.push(check);
    }
    cleaned
}

/// A cleaned RUT split into its numeric body and check character.
///
/// The split is always taken on the cleaned string: its last character is the check
/// character and the rest is the body. An empty cleaned string has an empty body
/// and no check character.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CleanedRut {
    body: String,
    check: Option<char>,
}

impl CleanedRut {
    /// Cleans `value` and splits the result.
    pub fn parse(value: impl RawInput) -> Self {
        Self::from_cleaned(clean(value))
    }

    /// Splits a string that already went through [`clean`].
    pub(crate) fn from_cleaned(mut cleaned: String) -> Self {
        let check = cleaned.pop();
        Self { body: cleaned, check }
    }

    /// The digits before the check character.
    pub fn body(&self) -> &str {
        &self.body
    }

    /// The trailing check character, if the cleaned value was not empty.
    pub fn check(&self) -> Option<char> {
        self.check
    }

    pub fn is_empty(&self) -> bool {
        self.check.is_none()
    }

    /// Length of the cleaned string (body plus check character).
    pub fn len(&self) -> usize {
        self.body.len() + usize::from(self.check.is_some())
    }
}

impl fmt::Display for CleanedRut {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.body)?;
        if let Some(check) = self.check {
            write!(f, "{}", check)?;
        }
        Ok(())
    }
}

impl RawInput for CleanedRut {
    fn to_raw_text(&self) -> Cow<'_, str> {
        Cow::Owned(self.to_string())
    }
}
