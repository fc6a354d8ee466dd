//! Action sequencing with a scripted runner.

#![allow(clippy::expect_used)]

use startracker_dev::application::services::sequence::Sequence;
use startracker_dev::domain::{Action, DevConfig, final_exit_code};
use startracker_dev::infra::fs::LocalFs;

use crate::helpers::{ScriptedRunner, Transcript};

fn config_with_missing_source() -> (tempfile::TempDir, DevConfig) {
    let target = tempfile::tempdir().expect("tempdir");
    let mut cfg = DevConfig::default();
    cfg.deploy.target_dir = target.path().to_path_buf();
    cfg.deploy.source_dir = target.path().join("no-such-source");
    (target, cfg)
}

#[tokio::test]
async fn actions_run_in_given_order() {
    let (_target, cfg) = config_with_missing_source();
    let runner = ScriptedRunner::new(&[0, 0]);
    let transcript = Transcript::default();
    let sequence = Sequence {
        config: &cfg,
        runner: &runner,
        fs: &LocalFs,
        reporter: &transcript,
        dry_run: false,
    };

    sequence.run(&[Action::Monitor, Action::Restart]).await;

    assert_eq!(
        runner.calls(),
        vec![
            "journalctl -u oresat-star-tracker -f",
            "systemctl restart oresat-star-tracker",
        ]
    );
}

#[tokio::test]
async fn failed_deploy_does_not_stop_restart_or_monitor() {
    let (_target, cfg) = config_with_missing_source();
    let runner = ScriptedRunner::new(&[0, 0]);
    let transcript = Transcript::default();
    let sequence = Sequence {
        config: &cfg,
        runner: &runner,
        fs: &LocalFs,
        reporter: &transcript,
        dry_run: false,
    };

    let outcomes = sequence
        .run(&[Action::Deploy, Action::Restart, Action::Monitor])
        .await;

    assert_eq!(outcomes[0].exit_code, 1);
    assert_eq!(runner.calls().len(), 2);
    assert!(transcript.contains("error: deploy:"));
    assert_eq!(final_exit_code(&outcomes), 0);
}

#[tokio::test]
async fn exit_code_comes_from_last_action() {
    let (_target, cfg) = config_with_missing_source();
    let runner = ScriptedRunner::new(&[4]);
    let transcript = Transcript::default();
    let sequence = Sequence {
        config: &cfg,
        runner: &runner,
        fs: &LocalFs,
        reporter: &transcript,
        dry_run: false,
    };

    let outcomes = sequence.run(&[Action::Deploy, Action::Restart]).await;
    assert_eq!(final_exit_code(&outcomes), 4);

    let runner = ScriptedRunner::new(&[0]);
    let sequence = Sequence {
        runner: &runner,
        ..sequence
    };
    let outcomes = sequence.run(&[Action::Restart, Action::Deploy]).await;
    assert_eq!(final_exit_code(&outcomes), 1);
}

#[tokio::test]
async fn sudo_prefix_applies_to_every_unit_command() {
    let (_target, mut cfg) = config_with_missing_source();
    cfg.service.sudo = true;
    let runner = ScriptedRunner::new(&[0, 0]);
    let transcript = Transcript::default();
    let sequence = Sequence {
        config: &cfg,
        runner: &runner,
        fs: &LocalFs,
        reporter: &transcript,
        dry_run: false,
    };

    sequence.run(&[Action::Restart, Action::Monitor]).await;

    assert!(runner.calls().iter().all(|c| c.starts_with("sudo ")));
}
