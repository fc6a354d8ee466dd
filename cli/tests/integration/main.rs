//! Integration tests for startracker-dev
//!
//! These tests spawn the actual binary and test end-to-end behavior.
//! Restart and monitor are only exercised through `--dry-run`.

mod sequence_command;
