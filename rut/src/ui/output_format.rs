//! Helpers for writing status messages and results to a terminal or a pipe.

use std::io::{self, Write};

use comfy_table::{presets::UTF8_FULL, ContentArrangement, Table};
use rut_core::{ReportSummary, RutMatch, RutReport};

use crate::ui::theme::{paint, ThemeEntry};

pub fn print_info_message<W: Write>(writer: &mut W, message: &str, supports_color: bool) -> io::Result<()> {
    writeln!(writer, "{}", paint(ThemeEntry::Info, message, supports_color))
}

pub fn print_warn_message<W: Write>(writer: &mut W, message: &str, supports_color: bool) -> io::Result<()> {
    writeln!(writer, "{}", paint(ThemeEntry::Warn, &format!("Warning: {}", message), supports_color))
}

pub fn print_error_message<W: Write>(writer: &mut W, message: &str, supports_color: bool) -> io::Result<()> {
    writeln!(writer, "{}", paint(ThemeEntry::Error, &format!("Error: {}", message), supports_color))
}

/// `valid` / `invalid`, colored when supported.
pub fn validity_label(valid: bool, supports_color: bool) -> String {
    if valid {
        paint(ThemeEntry::Valid, "valid", supports_color)
    } else {
        paint(ThemeEntry::Invalid, "invalid", supports_color)
    }
}

/// One line per report: `input -> formatted (valid)`.
pub fn print_report_line<W: Write>(writer: &mut W, report: &RutReport, supports_color: bool) -> io::Result<()> {
    writeln!(
        writer,
        "{} -> {} ({})",
        report.input,
        report.formatted,
        validity_label(report.valid, supports_color)
    )
}

/// Prints the totals block that follows a batch.
pub fn print_summary<W: Write>(summary: &ReportSummary, writer: &mut W, supports_color: bool) -> io::Result<()> {
    writeln!(writer, "{}", paint(ThemeEntry::Header, "--- RUT Summary ---", supports_color))?;
    writeln!(writer, "{} {}", paint(ThemeEntry::SummaryLabel, "Checked:", supports_color), summary.total)?;
    writeln!(writer, "{} {}", paint(ThemeEntry::SummaryLabel, "Valid:  ", supports_color), summary.valid)?;
    writeln!(writer, "{} {}", paint(ThemeEntry::SummaryLabel, "Invalid:", supports_color), summary.invalid)?;
    Ok(())
}

/// Builds a table of per-value reports.
pub fn reports_table(reports: &[RutReport]) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec!["Input", "Cleaned", "Formatted", "Valid"]);

    for report in reports {
        table.add_row(vec![
            report.input.clone(),
            report.cleaned.clone(),
            report.formatted.clone(),
            report.valid.to_string(),
        ]);
    }
    table
}

/// Builds a table of RUTs found by a scan.
pub fn matches_table(matches: &[RutMatch]) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec!["Offset", "Found", "Formatted", "Valid"]);

    for m in matches {
        table.add_row(vec![
            format!("{}..{}", m.start, m.end),
            m.raw.clone(),
            m.formatted.clone(),
            m.valid.to_string(),
        ]);
    }
    table
}
