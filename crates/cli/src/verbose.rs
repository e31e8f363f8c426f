// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Verbosity resolution for diagnostic output.
//!
//! Enabled explicitly with `--verbose`, or through the `DEBUG` environment
//! variable (any value except empty, `false`, `no` or `0`).

/// Whether debug diagnostics are enabled for this run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Verbosity {
    enabled: bool,
}

impl Verbosity {
    pub fn new(enabled: bool) -> Self {
        Self { enabled }
    }

    /// Combine the `--verbose` flag with the `DEBUG` environment variable.
    pub fn resolve(flag: bool) -> Self {
        Self::new(flag || crate::env::debug_enabled())
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Default tracing directive for this verbosity.
    pub fn directive(&self) -> &'static str {
        if self.enabled { "debug" } else { "warn" }
    }
}

#[cfg(test)]
#[path = "verbose_tests.rs"]
mod tests;
