//! Service-manager operations on the configured unit: restart and journal follow.
//!
//! Imports only from `crate::domain` and `crate::application::ports`.

use std::process::ExitStatus;

use anyhow::Result;

use crate::application::ports::{CommandRunner, ProgressReporter};
use crate::domain::{ServiceConfig, exit_code_of};

/// Command line that restarts the unit.
#[must_use]
pub fn restart_command(cfg: &ServiceConfig) -> Vec<String> {
    with_sudo(cfg, ["systemctl", "restart", cfg.unit.as_str()])
}

/// Command line that follows the unit's journal.
#[must_use]
pub fn follow_command(cfg: &ServiceConfig) -> Vec<String> {
    with_sudo(cfg, ["journalctl", "-u", cfg.unit.as_str(), "-f"])
}

fn with_sudo<const N: usize>(cfg: &ServiceConfig, argv: [&str; N]) -> Vec<String> {
    cfg.sudo
        .then_some("sudo")
        .into_iter()
        .chain(argv)
        .map(ToString::to_string)
        .collect()
}

/// Outcome of a unit operation that may have been skipped by a dry run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnitRun {
    /// The command ran and exited with this status.
    Ran(ExitStatus),
    /// Dry run: the command was only reported.
    Skipped,
}

impl UnitRun {
    /// Shell-style exit code; a skipped command counts as success.
    #[must_use]
    pub fn exit_code(self) -> i32 {
        match self {
            Self::Ran(status) => exit_code_of(status),
            Self::Skipped => 0,
        }
    }
}

/// Restart the unit through `systemctl`.
///
/// # Errors
///
/// Returns an error if `systemctl` cannot be started.
pub async fn restart(
    runner: &impl CommandRunner,
    cfg: &ServiceConfig,
    reporter: &impl ProgressReporter,
    dry_run: bool,
) -> Result<UnitRun> {
    let argv = restart_command(cfg);
    if dry_run {
        reporter.step(&format!("would run: {}", argv.join(" ")));
        return Ok(UnitRun::Skipped);
    }

    reporter.step(&format!("Restarting {}...", cfg.unit));
    let status = run_argv(runner, &argv, false).await?;
    if status.success() {
        reporter.success(&format!("{} restarted", cfg.unit));
    } else {
        reporter.warn(&format!("systemctl restart {} failed ({status})", cfg.unit));
    }
    Ok(UnitRun::Ran(status))
}

/// Follow the unit's journal until `journalctl` exits or is interrupted.
///
/// # Errors
///
/// Returns an error if `journalctl` cannot be started.
pub async fn monitor(
    runner: &impl CommandRunner,
    cfg: &ServiceConfig,
    reporter: &impl ProgressReporter,
    dry_run: bool,
) -> Result<UnitRun> {
    let argv = follow_command(cfg);
    if dry_run {
        reporter.step(&format!("would run: {}", argv.join(" ")));
        return Ok(UnitRun::Skipped);
    }

    reporter.step(&format!("Following {} logs (Ctrl-C to stop)", cfg.unit));
    let status = run_argv(runner, &argv, true).await?;
    Ok(UnitRun::Ran(status))
}

async fn run_argv(
    runner: &impl CommandRunner,
    argv: &[String],
    until_exit: bool,
) -> Result<ExitStatus> {
    let Some((program, rest)) = argv.split_first() else {
        anyhow::bail!("empty command line");
    };
    let args: Vec<&str> = rest.iter().map(String::as_str).collect();
    tracing::info!(command = %argv.join(" "), "running");
    let status = if until_exit {
        runner.run_until_exit(program, &args).await?
    } else {
        runner.run_status(program, &args).await?
    };
    tracing::debug!(%status, program = %program, "exited");
    Ok(status)
}
