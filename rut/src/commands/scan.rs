//! The `scan` command: find RUTs in free text.

use anyhow::{Context, Result};
use log::info;
use std::io::Write;

use rut_core::{scan, OutputFormat, RutMatch};

use crate::commands::RunOutcome;
use crate::ui::output_format;

/// Options for [`run_scan`].
#[derive(Debug, Clone, Copy)]
pub struct ScanOptions {
    pub only_valid: bool,
    pub output: OutputFormat,
    pub supports_color: bool,
}

/// Scans `text` and renders the RUTs found.
///
/// Invalid RUTs are counted in the outcome even when `only_valid` hides them.
pub fn run_scan<W: Write>(text: &str, opts: &ScanOptions, writer: &mut W) -> Result<RunOutcome> {
    let found = scan(text);
    let outcome = RunOutcome {
        processed: found.len(),
        invalid: found.iter().filter(|m| !m.valid).count(),
    };
    info!("Scan found {} RUT(s), {} invalid.", outcome.processed, outcome.invalid);

    let shown: Vec<RutMatch> = if opts.only_valid {
        found.into_iter().filter(|m| m.valid).collect()
    } else {
        found
    };

    match opts.output {
        OutputFormat::Plain => {
            for m in &shown {
                writeln!(
                    writer,
                    "{}..{}\t{}\t{}",
                    m.start,
                    m.end,
                    m.formatted,
                    output_format::validity_label(m.valid, opts.supports_color)
                )?;
            }
        }
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&shown).context("Failed to serialize scan results")?;
            writeln!(writer, "{}", json)?;
        }
        OutputFormat::Table => {
            writeln!(writer, "{}", output_format::matches_table(&shown))?;
        }
    }

    Ok(outcome)
}
