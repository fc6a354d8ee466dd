//! Domain types and validators for startracker-dev configuration.
//!
//! Pure functions only — no I/O, no async, no filesystem access.

use std::ffi::OsStr;
use std::path::{Path, PathBuf};

use anyhow::Result;
use serde::{Deserialize, Serialize};

use crate::domain::error::ConfigError;

// ── Constants ────────────────────────────────────────────────────────────────

/// Installed data root of the star tracker daemon.
pub const DEFAULT_TARGET_DIR: &str = "/usr/share/oresat-star-tracker";
/// Source checkout directory, relative to the working directory.
pub const DEFAULT_SOURCE_DIR: &str = "startracker";
/// File extensions copied by a deploy.
pub const DEFAULT_EXTENSIONS: &[&str] = &["py"];
/// systemd unit running the star tracker daemon.
pub const DEFAULT_UNIT: &str = "oresat-star-tracker";

// ── Config schema ────────────────────────────────────────────────────────────

/// Top-level configuration, optionally loaded from `config.yaml`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct DevConfig {
    /// Deploy settings.
    pub deploy: DeployConfig,
    /// Service manager settings.
    pub service: ServiceConfig,
}

/// Where deploy copies from and to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DeployConfig {
    /// Directory files are copied into. Deploy is skipped when it is absent.
    pub target_dir: PathBuf,
    /// Directory holding the files to copy.
    pub source_dir: PathBuf,
    /// Extensions (without the dot) selecting which files are copied.
    pub extensions: Vec<String>,
}

impl Default for DeployConfig {
    fn default() -> Self {
        Self {
            target_dir: PathBuf::from(DEFAULT_TARGET_DIR),
            source_dir: PathBuf::from(DEFAULT_SOURCE_DIR),
            extensions: DEFAULT_EXTENSIONS.iter().map(ToString::to_string).collect(),
        }
    }
}

/// Which unit to restart and follow.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServiceConfig {
    /// systemd unit name.
    pub unit: String,
    /// Prefix `systemctl` and `journalctl` with `sudo`.
    pub sudo: bool,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            unit: DEFAULT_UNIT.to_string(),
            sudo: false,
        }
    }
}

/// Values given on the command line that take precedence over the file.
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub target_dir: Option<PathBuf>,
    pub source_dir: Option<PathBuf>,
    pub unit: Option<String>,
}

impl DevConfig {
    /// Apply command-line overrides and validate the result.
    ///
    /// # Errors
    ///
    /// Returns an error if the resulting configuration is invalid.
    pub fn with_overrides(mut self, overrides: ConfigOverrides) -> Result<Self> {
        if let Some(dir) = overrides.target_dir {
            self.deploy.target_dir = dir;
        }
        if let Some(dir) = overrides.source_dir {
            self.deploy.source_dir = dir;
        }
        if let Some(unit) = overrides.unit {
            self.service.unit = unit;
        }
        self.validate()?;
        Ok(self)
    }

    /// Check every field that can make an action misbehave.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] describing the first invalid field.
    pub fn validate(&self) -> Result<()> {
        validate_unit_name(&self.service.unit)?;
        if self.deploy.extensions.is_empty() {
            return Err(ConfigError::NoExtensions.into());
        }
        if let Some(ext) = self
            .deploy
            .extensions
            .iter()
            .find(|e| e.is_empty() || e.contains(['/', '.']))
        {
            return Err(ConfigError::InvalidExtension(ext.clone()).into());
        }
        Ok(())
    }

    /// Returns `true` when `name` ends in one of the configured extensions.
    ///
    /// Hidden files never match, the same as a shell `*.py` glob.
    #[must_use]
    pub fn matches_source(&self, name: &OsStr) -> bool {
        if name.as_encoded_bytes().starts_with(b".") {
            return false;
        }
        Path::new(name)
            .extension()
            .is_some_and(|ext| self.deploy.extensions.iter().any(|e| ext == OsStr::new(e)))
    }
}

// ── Validators ───────────────────────────────────────────────────────────────

/// Validates a systemd unit name.
///
/// # Errors
///
/// Returns an error if the name is empty or contains characters systemd
/// rejects in unit names.
pub fn validate_unit_name(unit: &str) -> Result<()> {
    let valid_char = |c: char| c.is_ascii_alphanumeric() || ":-_.\\@".contains(c);
    if unit.is_empty() || unit.starts_with('-') || !unit.chars().all(valid_char) {
        return Err(ConfigError::InvalidUnit(unit.to_string()).into());
    }
    Ok(())
}
