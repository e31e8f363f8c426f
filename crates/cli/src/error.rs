// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Process exit codes shared by all tools.
//!
//! Each tool defines its own error enum next to its entry point; every
//! error maps to [`ExitCode::Failure`].

/// Exit codes per CLI contract
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitCode {
    /// Run completed (including "nothing to check")
    Success = 0,
    /// Any failure
    Failure = 1,
}

impl ExitCode {
    pub fn code(self) -> i32 {
        self as i32
    }
}

/// Exit code for a `clap` parse error: help and version output are not
/// failures, everything else is.
pub fn usage_exit_code(err: &clap::Error) -> ExitCode {
    use clap::error::ErrorKind;

    match err.kind() {
        ErrorKind::DisplayHelp
        | ErrorKind::DisplayVersion
        | ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand => ExitCode::Success,
        _ => ExitCode::Failure,
    }
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
