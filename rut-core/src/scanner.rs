// rut-core/src/scanner.rs
//! Finds RUT-shaped tokens in free text and validates each one.
//!
//! Candidates are located with a regular expression, then every candidate goes
//! through the programmatic check-character validation. Both valid and invalid
//! candidates are reported so callers can flag typos as well as real RUTs.
//!
//! License: MIT OR APACHE 2.0

use log::debug;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::formatter::format;
use crate::sanitizers::cleaner::clean;
use crate::validators::validate;

/// Dotted form (`12.345.678-5`), compact dashed form (`12345678-5`) or bare
/// digits (`123456785`), captured in group 1. Compact forms need at least seven
/// body digits so short numbers in running text are not picked up. The trailing
/// guard rejects a token followed by a word character or a dash, so a longer
/// token is never cut short into a different candidate.
const RUT_CANDIDATE_PATTERN: &str = concat!(
    r"(\b[0-9]{1,3}(?:\.[0-9]{3})+-[0-9kK]",
    r"|\b[0-9]{7,9}-[0-9kK]",
    r"|\b[0-9]{8,10})",
    r"(?:[^-\w]|$)",
);

static RUT_CANDIDATE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(RUT_CANDIDATE_PATTERN).expect("RUT candidate pattern must compile")
});

/// A RUT-shaped token found in a larger text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RutMatch {
    /// The token exactly as it appears in the text.
    pub raw: String,
    /// Byte offset of the first character of the token.
    pub start: usize,
    /// Byte offset one past the last character of the token.
    pub end: usize,
    pub cleaned: String,
    pub formatted: String,
    pub valid: bool,
}

/// Returns every RUT-shaped token in `text`, in order of appearance.
pub fn scan(text: &str) -> Vec<RutMatch> {
    let matches: Vec<RutMatch> = RUT_CANDIDATE
        .captures_iter(text)
        .filter_map(|caps| caps.get(1))
        .map(|m| {
            let raw = m.as_str();
            RutMatch {
                raw: raw.to_string(),
                start: m.start(),
                end: m.end(),
                cleaned: clean(raw),
                formatted: format(raw),
                valid: validate(raw),
            }
        })
        .collect();

    debug!(
        "Scanned {} bytes: {} candidate(s), {} valid",
        text.len(),
        matches.len(),
        matches.iter().filter(|m| m.valid).count()
    );
    matches
}

/// Like [`scan`], keeping only tokens whose check character is correct.
pub fn scan_valid(text: &str) -> Vec<RutMatch> {
    scan(text).into_iter().filter(|m| m.valid).collect()
}
