// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! CLI argument parsing with clap derive.

use std::fmt;
use std::path::PathBuf;

use clap::Parser;

/// Format gitlab-ci files.
#[derive(Parser, Debug)]
#[command(name = "gitlab-ci-fmt")]
#[command(version, about, long_about = None)]
pub struct FmtArgs {
    /// Files to format
    #[arg(value_name = "FILE", required = true)]
    pub files: Vec<PathBuf>,

    /// Enable verbose output
    #[arg(long, short = 'v')]
    pub verbose: bool,
}

/// Lint gitlab-ci files.
#[derive(Parser, Debug)]
#[command(name = "gitlab-ci-lint")]
#[command(version, about, long_about = None)]
pub struct LintArgs {
    /// Files to lint
    #[arg(value_name = "FILE", required = true)]
    pub files: Vec<PathBuf>,

    /// GitLab personal access token
    #[arg(
        short = 't',
        long = "token",
        env = "GCL_PERSONAL_ACCESS_TOKEN",
        hide_env_values = true
    )]
    pub token: Option<String>,
}

/// ShellCheck scripts embedded in gitlab-ci files.
#[derive(Parser, Debug)]
#[command(name = "gitlab-ci-shellcheck")]
#[command(version, about, long_about = None)]
pub struct ShellcheckArgs {
    /// Files to check
    #[arg(value_name = "FILE", default_value = ".gitlab-ci.yml")]
    pub files: Vec<PathBuf>,

    /// Minimum severity of errors to consider
    #[arg(short = 'S', long, value_enum, default_value_t = Severity::Warning)]
    pub severity: Severity,

    /// Use color
    #[arg(short = 'C', long, value_enum, default_value_t = ColorMode::Always)]
    pub color: ColorMode,

    /// Enable verbose output
    #[arg(long, short = 'v')]
    pub verbose: bool,
}

/// Shellcheck severity threshold.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum Severity {
    Error,
    #[default]
    Warning,
    Info,
    Style,
}

impl Severity {
    pub fn as_str(self) -> &'static str {
        match self {
            Severity::Error => "error",
            Severity::Warning => "warning",
            Severity::Info => "info",
            Severity::Style => "style",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Shellcheck color mode.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum ColorMode {
    Auto,
    #[default]
    Always,
    Never,
}

impl ColorMode {
    pub fn as_str(self) -> &'static str {
        match self {
            ColorMode::Auto => "auto",
            ColorMode::Always => "always",
            ColorMode::Never => "never",
        }
    }
}

impl fmt::Display for ColorMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
