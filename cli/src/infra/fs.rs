//! Filesystem infrastructure — implements `DeployFs` on top of `std::fs`.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::application::ports::DeployFs;

/// Production filesystem implementation of `DeployFs`.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalFs;

impl DeployFs for LocalFs {
    fn is_dir(&self, path: &Path) -> bool {
        path.is_dir()
    }

    fn list_files(&self, dir: &Path) -> Result<Vec<PathBuf>> {
        let mut files = Vec::new();
        for entry in
            std::fs::read_dir(dir).with_context(|| format!("listing {}", dir.display()))?
        {
            let entry = entry.with_context(|| format!("listing {}", dir.display()))?;
            // Follows symlinks, like `cp` does for its sources.
            if entry.path().is_file() {
                files.push(entry.path());
            }
        }
        Ok(files)
    }

    fn copy(&self, from: &Path, to: &Path) -> Result<u64> {
        std::fs::copy(from, to)
            .with_context(|| format!("copying {} to {}", from.display(), to.display()))
    }
}
