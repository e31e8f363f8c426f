//! Behavioral specs for `gitlab-ci-fmt`.

#![cfg(unix)]

use crate::prelude::*;

#[test]
fn unchanged_file_is_left_alone() {
    let dir = pipelines(&["unordered.yml"]);
    let path = dir.path().join("unordered.yml");
    let before = std::fs::read_to_string(&path).unwrap();
    let bin = FakeBin::new().script("yq", YQ_IDENTITY);

    fmt_cmd()
        .arg(&path)
        .env("PATH", bin.path_env())
        .assert()
        .success()
        .stdout(predicates::str::is_empty());

    assert_eq!(std::fs::read_to_string(&path).unwrap(), before);
}

#[test]
fn missing_yq_fails_preflight() {
    let dir = pipelines(&["unordered.yml"]);
    let bin = FakeBin::new();

    fmt_cmd()
        .arg(dir.path().join("unordered.yml"))
        .env("PATH", bin.isolated_path_env())
        .assert()
        .code(1)
        .stderr(predicates::str::contains("yq check failed"));
}

#[test]
fn incompatible_yq_is_rejected_before_touching_files() {
    let dir = pipelines(&["unordered.yml"]);
    let path = dir.path().join("unordered.yml");
    let before = std::fs::read_to_string(&path).unwrap();
    let bin = FakeBin::new().script("yq", "echo 'yq 3.2.3'");

    fmt_cmd()
        .arg(&path)
        .env("PATH", bin.path_env())
        .assert()
        .code(1)
        .stderr(predicates::str::contains("not compatible"));

    assert_eq!(std::fs::read_to_string(&path).unwrap(), before);
    assert_eq!(bin.calls(), vec!["yq --version".to_string()]);
}

#[test]
fn yq_failure_is_reported() {
    let dir = pipelines(&["unordered.yml"]);
    let bin = FakeBin::new().script(
        "yq",
        r#"if [ "$1" = "--version" ]; then
  echo "yq (https://github.com/mikefarah/yq/) version v4.44.3"
  exit 0
fi
echo "Error: bad expression" >&2
exit 1"#,
    );

    fmt_cmd()
        .arg(dir.path().join("unordered.yml"))
        .env("PATH", bin.path_env())
        .assert()
        .code(1)
        .stderr(predicates::str::contains("Error: bad expression"));
}

#[test]
fn missing_file_is_reported() {
    let dir = tempfile::tempdir().unwrap();
    let bin = FakeBin::new().script("yq", YQ_IDENTITY);

    fmt_cmd()
        .arg(dir.path().join("missing.yml"))
        .env("PATH", bin.path_env())
        .assert()
        .code(1)
        .stderr(predicates::str::contains("missing.yml"));
}

/// Runs against the real yq when one is installed.
#[test]
fn real_yq_orders_keys_and_is_idempotent() {
    use gitlab_ci_tools::{SystemRunner, preflight};

    if preflight::check_tool(&SystemRunner, &preflight::Tool::yq()).is_err() {
        return;
    }

    let dir = pipelines(&["unordered.yml"]);
    let path = dir.path().join("unordered.yml");

    fmt_cmd().arg(&path).assert().success();
    let once = std::fs::read_to_string(&path).unwrap();

    let top: Vec<_> = once
        .lines()
        .filter(|line| !line.starts_with([' ', '-']) && line.ends_with(':'))
        .collect();
    assert_eq!(top, vec!["workflow:", "stages:", "include:", "build:", ".template:"]);

    let build = &once[once.find("build:\n").unwrap()..];
    let stage = build.find("stage:").unwrap();
    let image = build.find("image:").unwrap();
    let script = build.find("script:").unwrap();
    let custom = build.find("custom_key:").unwrap();
    assert!(stage < image && image < script && script < custom, "{once}");

    fmt_cmd().arg(&path).assert().success();
    assert_eq!(std::fs::read_to_string(&path).unwrap(), once);
}
