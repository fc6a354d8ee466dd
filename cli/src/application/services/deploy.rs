//! Deploy use-case: copy matching source files into the target directory.
//!
//! Imports only from `crate::domain` and `crate::application::ports`.

use std::path::PathBuf;

use anyhow::{Context, Result};

use crate::application::ports::{DeployFs, ProgressReporter};
use crate::domain::{DeployError, DevConfig};

/// A single file copy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CopyStep {
    pub from: PathBuf,
    pub to: PathBuf,
}

/// Ordered copies making up one deploy, sorted by source path.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CopyPlan {
    pub steps: Vec<CopyStep>,
}

impl CopyPlan {
    #[must_use]
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }
}

/// Work out what a deploy would copy.
///
/// Returns `Ok(None)` when the target directory is absent: deploy is a no-op
/// on machines without the service installed.
///
/// # Errors
///
/// Returns an error if the source directory cannot be read or holds no
/// matching files.
pub fn plan_deploy(fs: &impl DeployFs, cfg: &DevConfig) -> Result<Option<CopyPlan>> {
    let deploy = &cfg.deploy;
    if !fs.is_dir(&deploy.target_dir) {
        return Ok(None);
    }

    let mut steps: Vec<CopyStep> = fs
        .list_files(&deploy.source_dir)
        .with_context(|| format!("reading source directory {}", deploy.source_dir.display()))?
        .into_iter()
        .filter_map(|from| {
            let name = from.file_name()?.to_owned();
            cfg.matches_source(&name).then(|| CopyStep {
                to: deploy.target_dir.join(&name),
                from,
            })
        })
        .collect();

    if steps.is_empty() {
        return Err(DeployError::NoSources {
            dir: deploy.source_dir.clone(),
            extensions: deploy.extensions.join(", "),
        }
        .into());
    }

    steps.sort_by(|a, b| a.from.cmp(&b.from));
    Ok(Some(CopyPlan { steps }))
}

/// Copy every file in `plan`, stopping at the first failure.
///
/// Returns the number of bytes copied.
///
/// # Errors
///
/// Returns [`DeployError::CopyFailed`] (with the I/O cause attached) for the
/// first file that cannot be copied.
pub fn execute_plan(
    fs: &impl DeployFs,
    plan: &CopyPlan,
    reporter: &impl ProgressReporter,
) -> Result<u64> {
    let mut total = 0;
    for step in &plan.steps {
        reporter.progress(&format!("{} → {}", step.from.display(), step.to.display()));
        let bytes = fs.copy(&step.from, &step.to).map_err(|e| {
            e.context(DeployError::CopyFailed {
                from: step.from.clone(),
                to: step.to.clone(),
            })
        })?;
        tracing::debug!(from = %step.from.display(), to = %step.to.display(), bytes, "copied");
        total += bytes;
    }
    Ok(total)
}

/// Run a deploy.
///
/// With `dry_run` set the plan is reported and nothing is copied.
///
/// # Errors
///
/// Returns an error if planning or copying fails.
pub fn deploy(
    fs: &impl DeployFs,
    cfg: &DevConfig,
    reporter: &impl ProgressReporter,
    dry_run: bool,
) -> Result<()> {
    let target = cfg.deploy.target_dir.display();
    let Some(plan) = plan_deploy(fs, cfg)? else {
        tracing::warn!(target_dir = %target, "target directory missing, deploy skipped");
        reporter.warn(&format!("{target} not found, skipping deploy"));
        return Ok(());
    };

    if dry_run {
        for step in &plan.steps {
            reporter.step(&format!(
                "would copy {} → {}",
                step.from.display(),
                step.to.display()
            ));
        }
        return Ok(());
    }

    let bytes = execute_plan(fs, &plan, reporter)?;
    tracing::info!(files = plan.len(), bytes, target_dir = %target, "deploy finished");
    reporter.success(&format!("Deployed {} file(s) to {target}", plan.len()));
    Ok(())
}
