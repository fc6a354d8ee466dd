//! Application context — unified state for one invocation.
//!
//! `AppContext` bundles the resolved configuration with the production
//! implementations of every port, so the action sequence is wired in one
//! place.

use anyhow::{Context, Result};

use crate::application::ports::ConfigStore;
use crate::domain::{ConfigOverrides, DevConfig};
use crate::infra::command_runner::TokioCommandRunner;
use crate::infra::fs::LocalFs;
use crate::output::OutputContext;

/// Flags passed from the top-level CLI to `AppContext::new`.
pub struct AppFlags {
    /// Disable ANSI color output.
    pub no_color: bool,
    /// Suppress non-error output.
    pub quiet: bool,
    /// Report actions instead of performing them.
    pub dry_run: bool,
}

/// Unified application context for a single run.
pub struct AppContext {
    /// Terminal output context (colors, quiet mode).
    pub output: OutputContext,
    /// Configuration after file loading, overrides and validation.
    pub config: DevConfig,
    /// Process runner used by restart and monitor.
    pub runner: TokioCommandRunner,
    /// Filesystem used by deploy.
    pub fs: LocalFs,
    /// When `true`, actions are reported and not performed.
    pub dry_run: bool,
}

impl AppContext {
    /// Construct an `AppContext` from CLI flags and the configuration store.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration cannot be loaded or is invalid.
    pub fn new(
        flags: &AppFlags,
        overrides: ConfigOverrides,
        store: &impl ConfigStore,
    ) -> Result<Self> {
        let config = store
            .load()?
            .with_overrides(overrides)
            .context("invalid configuration")?;

        Ok(Self {
            output: OutputContext::new(flags.no_color, flags.quiet),
            config,
            runner: TokioCommandRunner::default(),
            fs: LocalFs,
            dry_run: flags.dry_run,
        })
    }
}
