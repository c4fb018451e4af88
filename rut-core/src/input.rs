//! Coercion of arbitrary caller values into text.
//!
//! Callers hand RUTs over in whatever shape they have them: a string typed into
//! a form, an integer coming out of a database column, or nothing at all. The
//! [`RawInput`] trait gives all of these a textual representation so the
//! sanitizer can treat them uniformly.
//!
//! License: MIT OR APACHE 2.0

use std::borrow::Cow;

/// A value that can be coerced into the text a RUT is read from.
///
/// `None` coerces to the empty string, which every core operation accepts.
/// Numbers use Rust's `Display`, so floats never use exponent notation
/// (`1e21_f64` gives `"1000000000000000000000"`, not `"1e+21"`).
pub trait RawInput {
    /// Returns the textual representation of this value.
    fn to_raw_text(&self) -> Cow<'_, str>;
}

impl RawInput for str {
    fn to_raw_text(&self) -> Cow<'_, str> {
        Cow::Borrowed(self)
    }
}

impl RawInput for String {
    fn to_raw_text(&self) -> Cow<'_, str> {
        Cow::Borrowed(self.as_str())
    }
}

impl RawInput for Cow<'_, str> {
    fn to_raw_text(&self) -> Cow<'_, str> {
        Cow::Borrowed(self.as_ref())
    }
}

impl RawInput for char {
    fn to_raw_text(&self) -> Cow<'_, str> {
        Cow::Owned(self.to_string())
    }
}

impl<T: RawInput + ?Sized> RawInput for &T {
    fn to_raw_text(&self) -> Cow<'_, str> {
        (**self).to_raw_text()
    }
}

impl<T: RawInput> RawInput for Option<T> {
    fn to_raw_text(&self) -> Cow<'_, str> {
        match self {
            Some(value) => value.to_raw_text(),
            None => Cow::Borrowed(""),
        }
    }
}

macro_rules! impl_raw_input_via_display {
    ($($ty:ty),* $(,)?) => {
        $(
            impl RawInput for $ty {
                fn to_raw_text(&self) -> Cow<'_, str> {
                    Cow::Owned(self.to_string())
                }
            }
        )*
    };
}

impl_raw_input_via_display!(u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize, f32, f64);
