// rut-core/src/report.rs
//! Per-value reports and run summaries for batch checking.

use serde::{Deserialize, Serialize};

use crate::errors::RutError;
use crate::formatter::format;
use crate::sanitizers::cleaner::clean;
use crate::validators::validate;

/// Everything the core operations say about one input value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RutReport {
    pub input: String,
    pub cleaned: String,
    pub formatted: String,
    pub valid: bool,
}

impl RutReport {
    pub fn from_input(input: &str) -> Self {
        Self {
            input: input.to_string(),
            cleaned: clean(input),
            formatted: format(input),
            valid: validate(input),
        }
    }
}

/// Counts over a batch of reports.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportSummary {
    pub total: usize,
    pub valid: usize,
    pub invalid: usize,
}

impl ReportSummary {
    pub fn from_reports(reports: &[RutReport]) -> Self {
        let valid = reports.iter().filter(|r| r.valid).count();
        Self {
            total: reports.len(),
            valid,
            invalid: reports.len() - valid,
        }
    }
}

/// Serializes reports as a pretty-printed JSON array.
pub fn reports_to_json(reports: &[RutReport]) -> Result<String, RutError> {
    Ok(serde_json::to_string_pretty(reports)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_from_input() {
        let report = RutReport::from_input("7hf23775lwk052dgfdm1");
        assert_eq!(report.cleaned, "7237750521");
        assert_eq!(report.formatted, "723.775.052-1");
        assert!(report.valid);
    }

    #[test]
    fn test_summary_counts() {
        let reports: Vec<RutReport> = ["22222222-2", "22222222-5", "12.345.678-5"]
            .iter()
            .map(|raw| RutReport::from_input(raw))
            .collect();
        let summary = ReportSummary::from_reports(&reports);
        assert_eq!(summary, ReportSummary { total: 3, valid: 2, invalid: 1 });
    }

    #[test]
    fn test_reports_to_json() {
        let json = reports_to_json(&[RutReport::from_input("22222222-2")]).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed[0]["formatted"], "22.222.222-2");
        assert_eq!(parsed[0]["valid"], true);
    }
}
