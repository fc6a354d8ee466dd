//! Domain layer — pure types, validation, and exit-code rules.
//!
//! This module has zero imports from `crate::infra`, `crate::application`,
//! `tokio`, `std::fs`, or `std::net`.
//! All functions are synchronous and take data in, returning data out.

pub mod action;
pub mod config;
pub mod error;
pub mod outcome;

pub use action::{Action, order_actions};
pub use config::{
    ConfigOverrides, DeployConfig, DevConfig, ServiceConfig, validate_unit_name,
};
pub use error::{CommandError, ConfigError, DeployError};
pub use outcome::{ActionOutcome, exit_code_of, final_exit_code};
