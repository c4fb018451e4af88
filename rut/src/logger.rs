// rut/src/logger.rs
//! Logging setup for the `rut` CLI.
//!
//! All log output goes to stderr so stdout stays usable in pipelines.

use env_logger::{Builder, Env, Target};
use log::LevelFilter;

/// Initializes the global logger.
///
/// With `Some(level)` that level is used for every module. With `None` the level
/// comes from `RUST_LOG`, defaulting to `warn`. Calling this more than once is
/// harmless; later calls are ignored.
pub fn init_logger(level: Option<LevelFilter>) {
    let mut builder = Builder::from_env(Env::default().default_filter_or("warn"));
    if let Some(level) = level {
        builder.filter_level(level);
    }
    builder.target(Target::Stderr).format_timestamp(None);

    let _ = builder.try_init();
}

/// Picks the level implied by the `--quiet` and `--debug` flags.
pub fn level_from_flags(quiet: bool, debug: bool) -> Option<LevelFilter> {
    if quiet {
        Some(LevelFilter::Off)
    } else if debug {
        Some(LevelFilter::Debug)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quiet_wins_over_debug() {
        assert_eq!(level_from_flags(true, true), Some(LevelFilter::Off));
        assert_eq!(level_from_flags(false, true), Some(LevelFilter::Debug));
        assert_eq!(level_from_flags(false, false), None);
    }

    #[test]
    fn test_init_logger_twice_does_not_panic() {
        init_logger(Some(LevelFilter::Debug));
        init_logger(None);
    }
}
