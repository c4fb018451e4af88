//! Reading values and text from arguments, files, or stdin.

use anyhow::{Context, Result};
use is_terminal::IsTerminal;
use log::debug;
use std::fs;
use std::io::{self, Read};
use std::path::Path;

use crate::cli::InputArgs;
use crate::ui::output_format;

/// Reads the whole input file, or stdin when no file is given.
pub fn read_source_text(input_file: Option<&Path>, quiet: bool) -> Result<String> {
    if let Some(path) = input_file {
        debug!("Reading input from file: {}", path.display());
        return fs::read_to_string(path)
            .with_context(|| format!("Failed to read input file: {}", path.display()));
    }

    let stdin = io::stdin();
    if stdin.is_terminal() && !quiet {
        let stderr_supports_color = io::stderr().is_terminal();
        let _ = output_format::print_info_message(
            &mut io::stderr(),
            "Reading from stdin, one value per line (Ctrl-D to finish)...",
            stderr_supports_color,
        );
    }

    let mut text = String::new();
    stdin
        .lock()
        .read_to_string(&mut text)
        .context("Failed to read from stdin")?;
    debug!("Read {} bytes from stdin", text.len());
    Ok(text)
}

/// Splits text into values, one per line, dropping a trailing `\r`.
pub fn split_values(text: &str, skip_blank_lines: bool) -> Vec<String> {
    text.lines()
        .map(|line| line.trim_end_matches('\r'))
        .filter(|line| !(skip_blank_lines && line.trim().is_empty()))
        .map(str::to_string)
        .collect()
}

/// Positional values if any were given, otherwise lines of the file or stdin.
pub fn collect_values(args: &InputArgs, skip_blank_lines: bool, quiet: bool) -> Result<Vec<String>> {
    if !args.values.is_empty() {
        return Ok(args.values.clone());
    }
    let text = read_source_text(args.input_file.as_deref(), quiet)?;
    Ok(split_values(&text, skip_blank_lines))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_split_values_skips_blank_lines() {
        let values = split_values("12.345.678-5\r\n\n  \n22222222-2\n", true);
        assert_eq!(values, vec!["12.345.678-5", "22222222-2"]);
    }

    #[test]
    fn test_split_values_can_keep_blank_lines() {
        let values = split_values("1\n\n2\n", false);
        assert_eq!(values, vec!["1", "", "2"]);
    }

    #[test]
    fn test_positional_values_win_over_file() -> Result<()> {
        let mut file = NamedTempFile::new()?;
        writeln!(file, "from-file")?;
        let args = InputArgs {
            values: vec!["arg".to_string()],
            input_file: Some(file.path().to_path_buf()),
            keep_blank: false,
        };
        assert_eq!(collect_values(&args, true, true)?, vec!["arg"]);
        Ok(())
    }

    #[test]
    fn test_values_from_file() -> Result<()> {
        let mut file = NamedTempFile::new()?;
        writeln!(file, "22222222-2")?;
        writeln!(file)?;
        writeln!(file, "1-9")?;
        let args = InputArgs {
            input_file: Some(file.path().to_path_buf()),
            ..InputArgs::default()
        };
        assert_eq!(collect_values(&args, true, true)?, vec!["22222222-2", "1-9"]);
        Ok(())
    }

    #[test]
    fn test_missing_file_is_reported() {
        let err = read_source_text(Some(Path::new("/no/such/rut-input.txt")), true).unwrap_err();
        assert!(err.to_string().contains("Failed to read input file"));
    }
}
