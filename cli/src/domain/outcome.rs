//! Exit-code bookkeeping for a sequence of actions.

use std::process::ExitStatus;

use crate::domain::action::Action;

/// Exit code used for any failure that has no external status to forward.
pub const EXIT_FAILURE: i32 = 1;
/// Shell convention for a program that could not be found.
pub const EXIT_NOT_FOUND: i32 = 127;

/// Result of running a single action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActionOutcome {
    pub action: Action,
    pub exit_code: i32,
}

impl ActionOutcome {
    #[must_use]
    pub fn new(action: Action, exit_code: i32) -> Self {
        Self { action, exit_code }
    }

    #[must_use]
    pub fn success(action: Action) -> Self {
        Self::new(action, 0)
    }

    #[must_use]
    pub fn failure(action: Action) -> Self {
        Self::new(action, EXIT_FAILURE)
    }

    #[must_use]
    pub fn is_success(&self) -> bool {
        self.exit_code == 0
    }
}

/// Translate a child's exit status into a shell-style exit code.
///
/// A child killed by signal `N` maps to `128 + N`.
#[must_use]
pub fn exit_code_of(status: ExitStatus) -> i32 {
    if let Some(code) = status.code() {
        return code;
    }
    #[cfg(unix)]
    {
        use std::os::unix::process::ExitStatusExt;
        if let Some(signal) = status.signal() {
            return 128 + signal;
        }
    }
    EXIT_FAILURE
}

/// Exit code of the whole run: that of the last action, or 0 when none ran.
#[must_use]
pub fn final_exit_code(outcomes: &[ActionOutcome]) -> i32 {
    outcomes.last().map_or(0, |o| o.exit_code)
}

/// Clamp an exit code into the `u8` range the OS can report.
#[must_use]
pub fn clamp_exit_code(code: i32) -> u8 {
    u8::try_from(code).unwrap_or(1)
}
