//! Infrastructure implementation of the `CommandRunner` port.
//!
//! `TokioCommandRunner` is the production implementation: children inherit
//! the terminal so `systemctl` prompts and `journalctl` output reach the
//! operator unchanged.

use std::io::ErrorKind;
use std::process::ExitStatus;
use std::time::Duration;

use anyhow::{Context, Result};
use tokio::process::{Child, Command};

use crate::application::ports::CommandRunner;
use crate::domain::CommandError;

/// How long a followed child gets to exit on its own after Ctrl-C.
pub const INTERRUPT_GRACE: Duration = Duration::from_secs(2);

/// Production `CommandRunner` backed by `tokio::process`.
#[derive(Debug, Clone, Copy)]
pub struct TokioCommandRunner {
    grace: Duration,
}

impl TokioCommandRunner {
    #[must_use]
    pub fn new(grace: Duration) -> Self {
        Self { grace }
    }

    fn spawn(program: &str, args: &[&str]) -> Result<Child> {
        Command::new(program)
            .args(args)
            .kill_on_drop(true)
            .spawn()
            .map_err(|e| {
                if e.kind() == ErrorKind::NotFound {
                    CommandError::NotFound {
                        program: program.to_string(),
                    }
                    .into()
                } else {
                    anyhow::Error::new(e).context(format!("failed to spawn {program}"))
                }
            })
    }
}

impl Default for TokioCommandRunner {
    fn default() -> Self {
        Self::new(INTERRUPT_GRACE)
    }
}

impl CommandRunner for TokioCommandRunner {
    async fn run_status(&self, program: &str, args: &[&str]) -> Result<ExitStatus> {
        let mut child = Self::spawn(program, args)?;
        child
            .wait()
            .await
            .with_context(|| format!("waiting for {program}"))
    }

    async fn run_until_exit(&self, program: &str, args: &[&str]) -> Result<ExitStatus> {
        let mut child = Self::spawn(program, args)?;
        wait_or_interrupt(&mut child, program, tokio::signal::ctrl_c(), self.grace).await
    }
}

/// Wait for `child`, or for `interrupt` followed by at most `grace`.
///
/// Ctrl-C reaches the child through the terminal's process group. Listening
/// for it here keeps this process alive long enough to collect the child's
/// status. A child still running once `grace` has passed is killed.
async fn wait_or_interrupt(
    child: &mut Child,
    program: &str,
    interrupt: impl Future<Output = std::io::Result<()>>,
    grace: Duration,
) -> Result<ExitStatus> {
    tokio::select! {
        status = child.wait() => status.with_context(|| format!("waiting for {program}")),
        interrupted = interrupt => {
            interrupted.context("listening for Ctrl-C")?;
            tracing::debug!(program, "interrupt received, waiting for child");
            if let Ok(status) = tokio::time::timeout(grace, child.wait()).await {
                return status.with_context(|| format!("waiting for {program}"));
            }
            tracing::warn!(program, "child ignored interrupt, killing it");
            child.kill().await.with_context(|| format!("killing {program}"))?;
            child.wait().await.with_context(|| format!("waiting for {program}"))
        }
    }
}
