// rut-core/src/formatter.rs
//! Display formatting of RUT values (`12.345.678-5`).
//!
//! License: MIT OR APACHE 2.0

use crate::input::RawInput;
use crate::sanitizers::cleaner::{clean, CleanedRut};

/// Cleaned values shorter than this are returned without punctuation.
///
/// Two characters would be a single body digit and its check character, which
/// has nothing to group and reads better unseparated while a user is typing.
pub const MIN_FORMAT_LEN: usize = 3;

/// Formats a value as `D.DDD.DDD-C`.
///
/// The value is cleaned first. Short values (see [`MIN_FORMAT_LEN`]) come back as
/// the cleaned string.
///
/// ```
/// use rut_core::format;
///
/// assert_eq!(format(222222222), "22.222.222-2");
/// assert_eq!(format("7hf23775lwk052dgfdm1"), "723.775.052-1");
/// assert_eq!(format("1-9"), "19");
/// ```
pub fn format(value: impl RawInput) -> String {
    let cleaned = clean(value);
    if cleaned.len() < MIN_FORMAT_LEN {
        return cleaned;
    }

    let rut = CleanedRut::from_cleaned(cleaned);
    let mut formatted = group_thousands(rut.body());
    if let Some(check) = rut.check() {
        formatted.push('-');
        formatted.push(check);
    }
    formatted
}

/// Inserts a `.` every three characters, counting from the right.
pub fn group_thousands(digits: &str) -> String {
    let len = digits.chars().count();
    let mut grouped = String::with_capacity(len + len / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(c);
    }
    grouped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_groups_from_the_right() {
        assert_eq!(format(222222222), "22.222.222-2");
        assert_eq!(format("7hf23775lwk052dgfdm1"), "723.775.052-1");
        assert_eq!(format("1000005k"), "1.000.005-k");
        assert_eq!(format("123"), "12-3");
    }

    #[test]
    fn test_format_leaves_short_values_alone() {
        assert_eq!(format(""), "");
        assert_eq!(format("5"), "5");
        assert_eq!(format("1-9"), "19");
        assert_eq!(format(None::<&str>), "");
    }

    #[test]
    fn test_format_reformats_formatted_input() {
        assert_eq!(format("22.222.222-2"), "22.222.222-2");
        assert_eq!(format("10.000.013-K"), "10.000.013-K");
    }

    #[test]
    fn test_group_thousands() {
        assert_eq!(group_thousands(""), "");
        assert_eq!(group_thousands("1"), "1");
        assert_eq!(group_thousands("123"), "123");
        assert_eq!(group_thousands("1234"), "1.234");
        assert_eq!(group_thousands("123456"), "123.456");
        assert_eq!(group_thousands("1234567890"), "1.234.567.890");
    }
}
