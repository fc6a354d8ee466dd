//! Port trait definitions for the Application layer.
//!
//! Ports are the interfaces (contracts) that infrastructure must fulfill.
//! This file imports only from `crate::domain` — never from `crate::infra`
//! or `crate::output`.

use std::path::{Path, PathBuf};
use std::process::ExitStatus;

use anyhow::Result;

use crate::domain::DevConfig;

// ── Command Runner Port ───────────────────────────────────────────────────────

/// Abstracts process execution so infrastructure can be swapped or mocked.
#[allow(async_fn_in_trait)]
pub trait CommandRunner {
    /// Run a program with inherited stdio and return its exit status.
    ///
    /// # Errors
    ///
    /// Returns an error if the process cannot be spawned. A program missing
    /// from `PATH` is reported as [`crate::domain::CommandError::NotFound`].
    async fn run_status(&self, program: &str, args: &[&str]) -> Result<ExitStatus>;

    /// Run a long-lived program with inherited stdio until it exits.
    ///
    /// An operator interrupt must not terminate the caller before the child:
    /// implementations wait for the child and return its status.
    ///
    /// # Errors
    ///
    /// Same as [`CommandRunner::run_status`].
    async fn run_until_exit(&self, program: &str, args: &[&str]) -> Result<ExitStatus>;
}

// ── Progress Reporting Port ───────────────────────────────────────────────────

/// Abstracts progress reporting so services can emit events without
/// depending on the Presentation layer. Sync trait — no async needed.
pub trait ProgressReporter {
    /// Emit an in-progress step message.
    fn step(&self, message: &str);
    /// Emit a transient update for one item of a longer step.
    ///
    /// The next `step`, `success`, `warn` or `error` ends the update run.
    fn progress(&self, message: &str) {
        self.step(message);
    }
    /// Emit a success message.
    fn success(&self, message: &str);
    /// Emit a warning message.
    fn warn(&self, message: &str);
    /// Emit an error message. Never suppressed.
    fn error(&self, message: &str);
}

// ── Filesystem Port ───────────────────────────────────────────────────────────

/// Filesystem operations needed by deploy.
pub trait DeployFs {
    /// Returns `true` if `path` exists and is a directory.
    fn is_dir(&self, path: &Path) -> bool;

    /// List the regular files directly inside `dir`.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory cannot be read.
    fn list_files(&self, dir: &Path) -> Result<Vec<PathBuf>>;

    /// Copy `from` to `to`, overwriting `to`. Returns the bytes copied.
    ///
    /// # Errors
    ///
    /// Returns an error if the copy fails.
    fn copy(&self, from: &Path, to: &Path) -> Result<u64>;
}

// ── Config Port ───────────────────────────────────────────────────────────────

/// Abstracts where configuration is read from.
pub trait ConfigStore {
    /// Load configuration, falling back to defaults when no file exists.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    fn load(&self) -> Result<DevConfig>;

    /// Path of the configuration file.
    ///
    /// # Errors
    ///
    /// Returns an error if no configuration directory can be determined.
    fn path(&self) -> Result<PathBuf>;
}
