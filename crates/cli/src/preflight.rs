// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Capability preflight for external tools.
//!
//! Runs `<program> --version` before any file is touched. A tool that is
//! missing, fails, or reports an unsupported version aborts the run.

use regex::Regex;

use crate::command::{CommandError, CommandRunner, Invocation, run_checked};

/// Expected `yq --version` output: mikefarah/yq, major version 4.
pub const YQ_VERSION_PATTERN: &str =
    r"^yq \(https://github\.com/mikefarah/yq/\) version v4\.(0|[1-9]\d*)\.(0|[1-9]\d*)";

/// An external tool and the version it must report.
#[derive(Debug, Clone)]
pub struct Tool {
    pub program: &'static str,
    pub version: Option<Regex>,
}

impl Tool {
    /// mikefarah/yq v4.
    pub fn yq() -> Self {
        Self {
            program: "yq",
            version: Regex::new(YQ_VERSION_PATTERN).ok(),
        }
    }

    /// Any shellcheck on `PATH`.
    pub fn shellcheck() -> Self {
        Self {
            program: "shellcheck",
            version: None,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum PreflightError {
    #[error(transparent)]
    Command(#[from] CommandError),

    #[error("`{program}` version is not compatible: {found:?}")]
    IncompatibleVersion { program: String, found: String },
}

/// Verify `tool` can be run and reports a compatible version.
pub fn check_tool(runner: &dyn CommandRunner, tool: &Tool) -> Result<(), PreflightError> {
    let captured = run_checked(runner, &Invocation::new(tool.program).arg("--version"))?;
    let found = captured.stdout.trim();
    tracing::debug!("{} version: {}", tool.program, found);

    if let Some(pattern) = &tool.version
        && !pattern.is_match(found)
    {
        return Err(PreflightError::IncompatibleVersion {
            program: tool.program.to_string(),
            found: found.to_string(),
        });
    }
    Ok(())
}

#[cfg(test)]
#[path = "preflight_tests.rs"]
mod tests;
