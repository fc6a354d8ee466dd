//! Deploy against a real temporary filesystem.

#![allow(clippy::expect_used)]

use std::fs;
use std::path::Path;

use startracker_dev::application::services::deploy::{deploy, plan_deploy};
use startracker_dev::domain::DevConfig;
use startracker_dev::infra::fs::LocalFs;
use tempfile::TempDir;

use crate::helpers::Transcript;

fn config(target: &Path, source: &Path) -> DevConfig {
    let mut cfg = DevConfig::default();
    cfg.deploy.target_dir = target.to_path_buf();
    cfg.deploy.source_dir = source.to_path_buf();
    cfg
}

fn source_tree() -> TempDir {
    let dir = tempfile::tempdir().expect("tempdir");
    fs::write(dir.path().join("startracker.py"), "print('solve')\n").expect("write");
    fs::write(dir.path().join("camera.py"), "print('capture')\n").expect("write");
    fs::write(dir.path().join("beast.so"), [0u8; 4]).expect("write");
    dir
}

#[test]
fn deploy_copies_python_sources_only() {
    let source = source_tree();
    let target = tempfile::tempdir().expect("tempdir");
    let transcript = Transcript::default();

    deploy(&LocalFs, &config(target.path(), source.path()), &transcript, false).expect("deploy");

    assert_eq!(
        fs::read_to_string(target.path().join("startracker.py")).expect("copied"),
        "print('solve')\n"
    );
    assert!(target.path().join("camera.py").is_file());
    assert!(!target.path().join("beast.so").exists());
    assert!(transcript.contains("Deployed 2 file(s)"));
}

#[test]
fn deploy_is_noop_when_target_missing() {
    let source = source_tree();
    let root = tempfile::tempdir().expect("tempdir");
    let target = root.path().join("not-installed");
    let transcript = Transcript::default();

    deploy(&LocalFs, &config(&target, source.path()), &transcript, false).expect("deploy");

    assert!(!target.exists(), "deploy must not create the target");
    assert!(transcript.contains("skipping deploy"));
}

#[test]
fn deploy_overwrites_previous_version() {
    let source = source_tree();
    let target = tempfile::tempdir().expect("tempdir");
    fs::write(target.path().join("startracker.py"), "old").expect("write");

    deploy(&LocalFs, &config(target.path(), source.path()), &Transcript::default(), false)
        .expect("deploy");

    assert_eq!(
        fs::read_to_string(target.path().join("startracker.py")).expect("read"),
        "print('solve')\n"
    );
}

#[test]
fn dry_run_leaves_target_untouched() {
    let source = source_tree();
    let target = tempfile::tempdir().expect("tempdir");
    let transcript = Transcript::default();

    deploy(&LocalFs, &config(target.path(), source.path()), &transcript, true).expect("deploy");

    assert_eq!(fs::read_dir(target.path()).expect("list").count(), 0);
    assert_eq!(transcript.lines().len(), 2);
    assert!(transcript.lines().iter().all(|l| l.starts_with("step: would copy")));
}

#[test]
fn plan_is_sorted_by_file_name() {
    let source = source_tree();
    let target = tempfile::tempdir().expect("tempdir");

    let plan = plan_deploy(&LocalFs, &config(target.path(), source.path()))
        .expect("plan")
        .expect("target exists");
    let names: Vec<_> = plan
        .steps
        .iter()
        .map(|s| s.to.file_name().expect("name").to_string_lossy().into_owned())
        .collect();
    assert_eq!(names, vec!["camera.py", "startracker.py"]);
}

#[test]
fn empty_source_directory_is_an_error() {
    let source = tempfile::tempdir().expect("tempdir");
    let target = tempfile::tempdir().expect("tempdir");

    let err = deploy(
        &LocalFs,
        &config(target.path(), source.path()),
        &Transcript::default(),
        false,
    )
    .expect_err("nothing to copy");
    assert!(err.to_string().contains("No matching source files"));
}

#[cfg(unix)]
#[test]
fn plan_keeps_non_utf8_names_and_skips_hidden_files() {
    use std::ffi::OsStr;
    use std::os::unix::ffi::OsStrExt;

    let source = tempfile::tempdir().expect("tempdir");
    let target = tempfile::tempdir().expect("tempdir");
    let latin1 = OsStr::from_bytes(b"caf\xe9.py");
    fs::write(source.path().join(latin1), "").expect("write");
    fs::write(source.path().join(".hidden.py"), "").expect("write");
    fs::write(source.path().join("a.py"), "").expect("write");

    let plan = plan_deploy(&LocalFs, &config(target.path(), source.path()))
        .expect("plan")
        .expect("target exists");
    let names: Vec<_> = plan
        .steps
        .iter()
        .map(|s| s.from.file_name().expect("name").to_owned())
        .collect();
    assert_eq!(names, vec![OsStr::new("a.py").to_owned(), latin1.to_owned()]);
}
