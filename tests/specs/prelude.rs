//! Test helpers for behavioral specifications.
//!
//! Provides a small DSL for running the three binaries with fake delegate
//! tools (`yq`, `shellcheck`, `pass`) placed on `PATH`.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(dead_code)]

pub use assert_cmd::prelude::*;
pub use predicates;
pub use predicates::prelude::{Predicate, PredicateBooleanExt};
use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::process::Command;
use tempfile::TempDir;

/// Environment variables that would change tool behavior between machines.
const SCRUBBED_ENV: &[&str] = &["DEBUG", "GITLAB_CI_LOG", "GCL_PERSONAL_ACCESS_TOKEN"];

/// Strip variables that would change tool behavior between machines.
fn scrubbed(mut cmd: Command) -> Command {
    for var in SCRUBBED_ENV {
        cmd.env_remove(var);
    }
    cmd
}

/// Returns a Command configured to run `gitlab-ci-fmt`.
pub fn fmt_cmd() -> Command {
    scrubbed(Command::new(assert_cmd::cargo::cargo_bin!("gitlab-ci-fmt")))
}

/// Returns a Command configured to run `gitlab-ci-lint`.
pub fn lint_cmd() -> Command {
    scrubbed(Command::new(assert_cmd::cargo::cargo_bin!("gitlab-ci-lint")))
}

/// Returns a Command configured to run `gitlab-ci-shellcheck`.
pub fn shellcheck_cmd() -> Command {
    scrubbed(Command::new(assert_cmd::cargo::cargo_bin!(
        "gitlab-ci-shellcheck"
    )))
}

/// Path to a fixture under `tests/fixtures`.
pub fn fixture(name: &str) -> PathBuf {
    let manifest_dir =
        std::env::var("CARGO_MANIFEST_DIR").expect("CARGO_MANIFEST_DIR should be set");
    PathBuf::from(manifest_dir)
        .parent()
        .expect("parent should exist")
        .parent()
        .expect("grandparent should exist")
        .join("tests")
        .join("fixtures")
        .join(name)
}

/// Copy pipeline fixtures into a fresh temp directory.
pub fn pipelines(names: &[&str]) -> TempDir {
    let dir = TempDir::new().unwrap();
    for name in names {
        std::fs::copy(fixture("pipelines").join(name), dir.path().join(name)).unwrap();
    }
    dir
}

/// Directory of fake executables plus a shared invocation log.
pub struct FakeBin {
    dir: TempDir,
}

impl FakeBin {
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().unwrap(),
        }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// File every fake appends its arguments to.
    pub fn log(&self) -> PathBuf {
        self.dir.path().join("calls.log")
    }

    /// Logged invocations, one line per call.
    pub fn calls(&self) -> Vec<String> {
        std::fs::read_to_string(self.log())
            .unwrap_or_default()
            .lines()
            .map(str::to_string)
            .collect()
    }

    /// Install an executable `/bin/sh` script that logs `name $*` first.
    #[cfg(unix)]
    pub fn script(self, name: &str, body: &str) -> Self {
        use std::os::unix::fs::PermissionsExt;

        let path = self.dir.path().join(name);
        let contents = format!(
            "#!/bin/sh\necho \"{name} $*\" >> '{}'\n{body}\n",
            self.log().display()
        );
        std::fs::write(&path, contents).unwrap();
        std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o755)).unwrap();
        self
    }

    /// `PATH` with this directory first, followed by the inherited `PATH`.
    pub fn path_env(&self) -> OsString {
        let inherited = std::env::var_os("PATH").unwrap_or_default();
        let mut dirs = vec![self.dir.path().to_path_buf()];
        dirs.extend(std::env::split_paths(&inherited));
        std::env::join_paths(dirs).unwrap()
    }

    /// `PATH` holding only this directory.
    pub fn isolated_path_env(&self) -> OsString {
        self.dir.path().as_os_str().to_os_string()
    }
}

/// Fake mikefarah/yq v4 whose queries echo stdin unchanged.
pub const YQ_IDENTITY: &str = r#"if [ "$1" = "--version" ]; then
  echo "yq (https://github.com/mikefarah/yq/) version v4.44.3"
  exit 0
fi
cat"#;

/// Fake shellcheck that finds no issues.
pub const SHELLCHECK_CLEAN: &str = r#"if [ "$1" = "--version" ]; then
  echo "version: 0.9.0"
fi
exit 0"#;

/// Fake shellcheck that reports one issue per file and exits 1.
pub const SHELLCHECK_NOISY: &str = r#"if [ "$1" = "--version" ]; then
  echo "version: 0.9.0"
  exit 0
fi
shift 3
for f in "$@"; do
  printf '\nIn %s line 1:\n%s\n     ^-- SC2086 (info): Double quote to prevent globbing.\n' "$f" "$(head -n 1 "$f")"
done
exit 1"#;
