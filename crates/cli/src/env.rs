// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Environment variable names and lookups shared by all tools.

/// Environment variable names (generated by `build.rs`).
pub mod names {
    include!(concat!(env!("OUT_DIR"), "/env_names.rs"));
}

/// Values of `DEBUG` that leave debug output disabled.
const DEBUG_OFF: &[&str] = &["", "false", "no", "0"];

/// Whether a `DEBUG` value turns debug output on.
pub fn debug_value_enabled(value: &str) -> bool {
    let value = value.trim();
    !DEBUG_OFF.iter().any(|off| value.eq_ignore_ascii_case(off))
}

/// Whether the `DEBUG` environment variable turns debug output on.
pub fn debug_enabled() -> bool {
    std::env::var(names::DEBUG).is_ok_and(|v| debug_value_enabled(&v))
}

/// The tracing filter directive from `GITLAB_CI_LOG`, if set and non-empty.
pub fn log_filter() -> Option<String> {
    std::env::var(names::GITLAB_CI_LOG)
        .ok()
        .filter(|v| !v.trim().is_empty())
}

#[cfg(test)]
#[path = "env_tests.rs"]
mod tests;
