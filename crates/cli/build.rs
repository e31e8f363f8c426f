// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Build script that generates env var name constants for `env.rs`.

// Build scripts should panic on failure; there is no meaningful recovery.
#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use std::env;
use std::fs;
use std::path::Path;

fn main() {
    let out_dir = env::var("OUT_DIR").expect("OUT_DIR not set");
    let dest = Path::new(&out_dir).join("env_names.rs");

    let contents = r#"
/// Environment variable: enables debug/verbose output unless `false`, `no` or `0`.
pub const DEBUG: &str = "DEBUG";
/// Environment variable: GitLab personal access token for the lint client.
pub const GCL_PERSONAL_ACCESS_TOKEN: &str = "GCL_PERSONAL_ACCESS_TOKEN";
/// Environment variable: configures tracing log filter.
pub const GITLAB_CI_LOG: &str = "GITLAB_CI_LOG";
"#;

    fs::write(dest, contents).expect("failed to write env_names.rs");
    println!("cargo:rerun-if-changed=build.rs");
}
