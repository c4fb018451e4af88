// rut-core/src/lib.rs
//! # RUT Core Library
//!
//! `rut-core` cleans, formats and validates Chilean national identification numbers
//! (RUT): a numeric body followed by a check character (`0`-`9` or `k`) computed with
//! a weighted modulo-11 sum.
//!
//! The three core operations are pure and total. They accept any [`RawInput`]
//! (strings, integers, `Option`s) and never fail:
//!
//! * [`clean`]: keeps the body digits and one trailing check character.
//! * [`format`]: renders `12.345.678-5`.
//! * [`validate`]: recomputes the check character and compares. A value that
//!   cleans to nothing is valid.
//!
//! ## Modules
//!
//! * `sanitizers`: the `clean` operation and the split [`CleanedRut`] value.
//! * `formatter`: thousands grouping and the dash before the check character.
//! * `validators`: the modulo-11 check character.
//! * `filter`: a single entry point dispatching on an action name.
//! * `helper`: the [`RutHelper`] handle over the core operations.
//! * `binding`: wires the core operations into an editable form field through an
//!   injected [`ModelController`].
//! * `scanner`: finds and validates RUTs inside free text.
//! * `report`: per-value reports and batch summaries.
//! * `config`: YAML configuration for batch front ends.
//! * `errors`: the [`RutError`] type for the fallible edges.
//!
//! ## Usage Example
//!
//! ```rust
//! use rut_core::{clean, format, validate};
//!
//! assert_eq!(clean("12.345.678-5"), "123456785");
//! assert_eq!(format(222222222), "22.222.222-2");
//! assert!(validate("22.222.222-2"));
//! assert!(!validate(222222225));
//! ```
//!
//! ---
//! License: MIT OR Apache-2.0

pub mod binding;
pub mod config;
pub mod errors;
pub mod filter;
pub mod formatter;
pub mod helper;
pub mod input;
pub mod report;
pub mod sanitizers;
pub mod scanner;
pub mod validators;

/// Re-exports the three core operations and their building blocks.
pub use sanitizers::cleaner::{clean, is_check_char, CleanedRut};
pub use formatter::{format, group_thousands, MIN_FORMAT_LEN};
pub use validators::{check_char, validate};
pub use input::RawInput;

/// Re-exports the custom error type for clear error reporting.
pub use errors::RutError;

/// Re-exports the adapter layer: filter dispatch, named handle and form binding.
pub use filter::{filter, FilterOutput, RutAction};
pub use helper::{RutHelper, RUT_HELPER};
pub use binding::{ModelController, RutModelBinding, VALIDITY_KEY};

/// Re-exports batch tooling.
pub use scanner::{scan, scan_valid, RutMatch};
pub use report::{reports_to_json, ReportSummary, RutReport};
pub use config::{merge_config, ConfigOverrides, OutputFormat, RutConfig};
