//! Batch runners for the per-value commands (`clean`, `format`, `validate`,
//! `filter`, `check`).

use anyhow::{Context, Result};
use log::{debug, info};
use std::io::Write;

use rut_core::{reports_to_json, OutputFormat, ReportSummary, RutAction, RutReport};

use crate::commands::RunOutcome;
use crate::ui::output_format;

/// Resolves a `filter --action` name, falling back to `default_action` when no
/// name is given. The flag is true when an unrecognized name fell back to `format`.
pub fn resolve_filter_action(name: Option<&str>, default_action: RutAction) -> (RutAction, bool) {
    match name {
        None => (default_action, false),
        Some(name) => {
            let action = RutAction::from_name(Some(name));
            (action, action.as_str() != name)
        }
    }
}

/// Applies `action` to every value and writes one result per line.
///
/// `validate` prints `true`/`false`; invalid values are counted in the outcome.
pub fn run_action<W: Write>(action: RutAction, values: &[String], writer: &mut W) -> Result<RunOutcome> {
    info!("Running '{}' on {} value(s).", action, values.len());

    let mut outcome = RunOutcome::default();
    for value in values {
        let output = action.apply(value.as_str());
        if output.as_bool() == Some(false) {
            outcome.invalid += 1;
        }
        outcome.processed += 1;
        writeln!(writer, "{}", output).context("Failed to write output")?;
    }

    debug!("'{}' finished: {:?}", action, outcome);
    Ok(outcome)
}

/// Options for [`run_check`].
#[derive(Debug, Clone, Copy)]
pub struct CheckOptions {
    pub output: OutputFormat,
    pub show_summary: bool,
    pub stdout_supports_color: bool,
    pub stderr_supports_color: bool,
}

/// Builds a report per value and renders it; plain output is followed by a
/// summary on the status stream.
pub fn run_check<W: Write, S: Write>(
    values: &[String],
    opts: &CheckOptions,
    writer: &mut W,
    status: &mut S,
) -> Result<RunOutcome> {
    info!("Checking {} value(s).", values.len());

    let reports: Vec<RutReport> = values.iter().map(|v| RutReport::from_input(v)).collect();
    let summary = ReportSummary::from_reports(&reports);

    match opts.output {
        OutputFormat::Plain => {
            for report in &reports {
                output_format::print_report_line(writer, report, opts.stdout_supports_color)?;
            }
            if opts.show_summary {
                output_format::print_summary(&summary, status, opts.stderr_supports_color)?;
            }
        }
        OutputFormat::Json => {
            let json = reports_to_json(&reports).context("Failed to serialize reports")?;
            writeln!(writer, "{}", json)?;
        }
        OutputFormat::Table => {
            writeln!(writer, "{}", output_format::reports_table(&reports))?;
        }
    }

    Ok(RunOutcome {
        processed: summary.total,
        invalid: summary.invalid,
    })
}
