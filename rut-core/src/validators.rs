// File: rut-core/src/validators.rs
//! Programmatic validation of the RUT check character.
//!
//! A RUT carries a trailing check character derived from its body with a weighted
//! modulo-11 sum. Weights run 9, 8, 7, 6, 5, 4 from the least significant digit and
//! repeat every six digits. The running sum starts at 1 and is reduced modulo 11 at
//! every step; a final sum of 0 maps to `k`, any other sum `s` to the digit `s - 1`.
//!
//! License: MIT OR APACHE 2.0

use crate::input::RawInput;
use crate::sanitizers::cleaner::CleanedRut;

/// Number of distinct weights before the sequence repeats.
const WEIGHT_CYCLE: usize = 6;

/// Computes the expected check character for a RUT body.
///
/// # Arguments
///
/// * `body` - The body digits, most significant first. An empty body is allowed.
///
/// # Returns
///
/// `Some('0'..='9')` or `Some('k')`, or `None` if `body` contains anything other than
/// ASCII digits.
pub fn check_char(body: &str) -> Option<char> {
    let mut sum: u32 = 1;

    for (position, c) in body.chars().rev().enumerate() {
        let Some(digit) = c.to_digit(10) else { return None; };
        let weight = 9 - (position % WEIGHT_CYCLE) as u32;
        sum = (sum + digit * weight) % 11;
    }

    if sum == 0 {
        Some('k')
    } else {
        char::from_digit(sum - 1, 10)
    }
}

/// Validates the check character of a RUT.
///
/// The value is cleaned first. A value that cleans to nothing is considered valid;
/// callers that require a RUT to be present must check for that separately. Any
/// non-empty cleaned value runs the full checksum, however short it is. A non-numeric
/// check character is compared as `k`, so `K` and `k` are equivalent.
///
/// # Arguments
///
/// * `value` - Any raw input: formatted, unformatted, numeric, or noisy.
///
/// # Returns
///
/// `true` if the check character matches the body (or the value is empty), `false`
/// otherwise.
pub fn validate(value: impl RawInput) -> bool {
    let rut = CleanedRut::parse(value);
    let Some(check) = rut.check() else { return true; };

    let supplied = if check.is_ascii_digit() { check } else { 'k' };
    check_char(rut.body()) == Some(supplied)
}
