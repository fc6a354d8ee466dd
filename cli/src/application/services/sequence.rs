//! Runs the selected actions one after another.
//!
//! A failing action never stops the ones after it: restart and monitor are
//! attempted whatever deploy did. The exit code of the run is that of the
//! last action.

use anyhow::Error;

use crate::application::ports::{CommandRunner, DeployFs, ProgressReporter};
use crate::application::services::deploy;
use crate::application::services::unit::{self, UnitRun};
use crate::domain::outcome::{EXIT_FAILURE, EXIT_NOT_FOUND};
use crate::domain::{Action, ActionOutcome, CommandError, DevConfig};

/// Everything an action needs, borrowed for the length of a run.
pub struct Sequence<'a, R, F, P> {
    pub config: &'a DevConfig,
    pub runner: &'a R,
    pub fs: &'a F,
    pub reporter: &'a P,
    pub dry_run: bool,
}

impl<R, F, P> Sequence<'_, R, F, P>
where
    R: CommandRunner,
    F: DeployFs,
    P: ProgressReporter,
{
    /// Run `actions` in order, returning one outcome per action.
    pub async fn run(&self, actions: &[Action]) -> Vec<ActionOutcome> {
        let mut outcomes = Vec::with_capacity(actions.len());
        for &action in actions {
            let outcome = self.run_action(action).await;
            tracing::debug!(%action, exit_code = outcome.exit_code, "action finished");
            outcomes.push(outcome);
        }
        outcomes
    }

    /// Run a single action and translate its result into an exit code.
    pub async fn run_action(&self, action: Action) -> ActionOutcome {
        let result = match action {
            Action::Deploy => {
                deploy::deploy(self.fs, self.config, self.reporter, self.dry_run).map(|()| 0)
            }
            Action::Restart => {
                unit::restart(self.runner, &self.config.service, self.reporter, self.dry_run)
                    .await
                    .map(UnitRun::exit_code)
            }
            Action::Monitor => {
                unit::monitor(self.runner, &self.config.service, self.reporter, self.dry_run)
                    .await
                    .map(UnitRun::exit_code)
            }
        };

        match result {
            Ok(code) => ActionOutcome::new(action, code),
            Err(e) => {
                self.reporter.error(&format!("{action}: {e:#}"));
                ActionOutcome::new(action, error_exit_code(&e))
            }
        }
    }
}

fn error_exit_code(err: &Error) -> i32 {
    match err.downcast_ref::<CommandError>() {
        Some(CommandError::NotFound { .. }) => EXIT_NOT_FOUND,
        None => EXIT_FAILURE,
    }
}
