//! Command implementations for the `rut` CLI.

pub mod batch;
pub mod input;
pub mod scan;

/// Counts gathered while running a command.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunOutcome {
    pub processed: usize,
    pub invalid: usize,
}

impl RunOutcome {
    /// Whether the run should end with a failure status.
    pub fn should_fail(&self, fail_on_invalid: bool) -> bool {
        fail_on_invalid && self.invalid > 0
    }
}
