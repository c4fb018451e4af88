// rut/src/main.rs
//! rut entry point.
//!
//! Parses arguments, initializes logging, layers the command-line flags over the
//! configuration file, and dispatches to the selected command.

use anyhow::{Context, Result};
use clap::Parser;
use is_terminal::IsTerminal;
use log::debug;
use std::io;
use std::process::ExitCode;

use rut::cli::{Cli, Commands, InputArgs};
use rut::commands::batch::{resolve_filter_action, run_action, run_check, CheckOptions};
use rut::commands::input::{collect_values, read_source_text};
use rut::commands::scan::{run_scan, ScanOptions};
use rut::logger;
use rut::ui::output_format;
use rut_core::{merge_config, ConfigOverrides, RutAction, RutConfig};

/// Exit status when a value fails validation under `--fail-on-invalid`.
const EXIT_INVALID: u8 = 1;
/// Exit status for usage, I/O, and configuration errors.
const EXIT_ERROR: u8 = 2;

fn main() -> ExitCode {
    let args = Cli::parse();
    logger::init_logger(logger::level_from_flags(args.quiet, args.debug));

    match run(args) {
        Ok(code) => code,
        Err(e) => {
            let stderr_supports_color = io::stderr().is_terminal();
            let _ = output_format::print_error_message(&mut io::stderr(), &format!("{:#}", e), stderr_supports_color);
            ExitCode::from(EXIT_ERROR)
        }
    }
}

fn run(args: Cli) -> Result<ExitCode> {
    let base = match &args.config {
        Some(path) => RutConfig::load_from_file(path)
            .with_context(|| format!("Failed to load config file {}", path.display()))?,
        None => RutConfig::default(),
    };
    let config = merge_config(base, &overrides_for(&args.command));
    debug!("Effective configuration: {:?}", config);

    let quiet = args.quiet;
    let stdout = io::stdout();
    let mut writer = stdout.lock();

    let outcome = match &args.command {
        Commands::Clean(input) => {
            let values = collect_values(input, config.skip_blank_lines, quiet)?;
            run_action(RutAction::Clean, &values, &mut writer)?
        }
        Commands::Format(input) => {
            let values = collect_values(input, config.skip_blank_lines, quiet)?;
            run_action(RutAction::Format, &values, &mut writer)?
        }
        Commands::Validate(cmd) => {
            let values = collect_values(&cmd.input, config.skip_blank_lines, quiet)?;
            run_action(RutAction::Validate, &values, &mut writer)?
        }
        Commands::Filter(cmd) => {
            let (action, fell_back) = resolve_filter_action(cmd.action.as_deref(), config.default_action);
            if fell_back && !quiet {
                let message = format!(
                    "Unknown action '{}', falling back to '{}'",
                    cmd.action.as_deref().unwrap_or_default(),
                    action
                );
                output_format::print_warn_message(&mut io::stderr(), &message, io::stderr().is_terminal())?;
            }
            let values = collect_values(&cmd.input, config.skip_blank_lines, quiet)?;
            run_action(action, &values, &mut writer)?
        }
        Commands::Check(cmd) => {
            let values = collect_values(&cmd.input, config.skip_blank_lines, quiet)?;
            let opts = CheckOptions {
                output: config.output,
                show_summary: !cmd.no_summary && !quiet,
                stdout_supports_color: io::stdout().is_terminal(),
                stderr_supports_color: io::stderr().is_terminal(),
            };
            run_check(&values, &opts, &mut writer, &mut io::stderr())?
        }
        Commands::Scan(cmd) => {
            let text = read_source_text(cmd.input_file.as_deref(), quiet)?;
            let opts = ScanOptions {
                only_valid: cmd.only_valid,
                output: config.output,
                supports_color: io::stdout().is_terminal(),
            };
            run_scan(&text, &opts, &mut writer)?
        }
    };

    if outcome.should_fail(config.fail_on_invalid) {
        debug!("{} invalid value(s) with fail_on_invalid set", outcome.invalid);
        return Ok(ExitCode::from(EXIT_INVALID));
    }
    Ok(ExitCode::SUCCESS)
}

/// Turns the flags of the selected command into configuration overrides.
/// Flags that were not given leave the configuration file's value in place.
fn overrides_for(command: &Commands) -> ConfigOverrides {
    fn blank_override(input: &InputArgs) -> Option<bool> {
        input.keep_blank.then_some(false)
    }

    match command {
        Commands::Clean(input) | Commands::Format(input) => ConfigOverrides {
            skip_blank_lines: blank_override(input),
            ..ConfigOverrides::default()
        },
        Commands::Validate(cmd) => ConfigOverrides {
            skip_blank_lines: blank_override(&cmd.input),
            fail_on_invalid: cmd.fail_on_invalid.then_some(true),
            ..ConfigOverrides::default()
        },
        Commands::Filter(cmd) => ConfigOverrides {
            skip_blank_lines: blank_override(&cmd.input),
            ..ConfigOverrides::default()
        },
        Commands::Check(cmd) => ConfigOverrides {
            skip_blank_lines: blank_override(&cmd.input),
            fail_on_invalid: cmd.fail_on_invalid.then_some(true),
            output: cmd.output.map(Into::into),
            ..ConfigOverrides::default()
        },
        Commands::Scan(cmd) => ConfigOverrides {
            fail_on_invalid: cmd.fail_on_invalid.then_some(true),
            output: cmd.output.map(Into::into),
            ..ConfigOverrides::default()
        },
    }
}
