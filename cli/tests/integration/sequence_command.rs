//! Ordering and exit-code propagation across combined flags.

#![allow(clippy::expect_used)]

use predicates::prelude::*;

use crate::cli_tests::startracker_dev;

fn stdout_of(args: &[&str]) -> String {
    let home = tempfile::tempdir().expect("tempdir");
    let output = startracker_dev(&home)
        .args(args)
        .output()
        .expect("run binary");
    String::from_utf8(output.stdout).expect("utf-8")
}

#[test]
fn test_combined_flags_run_in_given_order() {
    let out = stdout_of(&["--dry-run", "-lr"]);
    let journal = out.find("journalctl -u oresat-star-tracker -f").expect("monitor");
    let restart = out.find("systemctl restart oresat-star-tracker").expect("restart");
    assert!(journal < restart, "monitor must come first:\n{out}");
}

#[test]
fn test_separate_flags_run_in_given_order() {
    let out = stdout_of(&["-r", "-l", "--dry-run"]);
    let journal = out.find("journalctl").expect("monitor");
    let restart = out.find("systemctl").expect("restart");
    assert!(restart < journal, "restart must come first:\n{out}");
}

#[test]
fn test_restart_attempted_after_failed_deploy() {
    let home = tempfile::tempdir().expect("tempdir");
    let target = tempfile::tempdir().expect("tempdir");

    startracker_dev(&home)
        .arg("--target")
        .arg(target.path())
        .arg("--source")
        .arg(home.path().join("no-such-source"))
        .args(["-pr", "--dry-run"])
        .assert()
        .success()
        .stderr(predicate::str::contains("deploy:"))
        .stdout(predicate::str::contains(
            "would run: systemctl restart oresat-star-tracker",
        ));
}

#[test]
fn test_exit_code_is_from_last_action() {
    let home = tempfile::tempdir().expect("tempdir");
    let target = tempfile::tempdir().expect("tempdir");

    startracker_dev(&home)
        .arg("--target")
        .arg(target.path())
        .arg("--source")
        .arg(home.path().join("no-such-source"))
        .args(["-rp", "--dry-run"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("would run: systemctl restart"));
}

#[test]
fn test_quiet_dry_run_prints_nothing() {
    startracker_dev(&tempfile::tempdir().expect("tempdir"))
        .args(["-rlq", "--dry-run"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
}
