//! Unit tests for startracker-dev
//!
//! These tests use mocked process execution and run fast without touching
//! systemd or the installed service.

mod deploy_service;
mod sequence_service;
