// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Pipeline lint client.
//!
//! Resolves the GitLab project from the `origin` remote, resolves a token,
//! then submits each file to the project's CI lint endpoint.

pub mod gitlab;
pub mod remote;
pub mod token;

use std::io::Write;
use std::path::{Path, PathBuf};

use crate::cli::LintArgs;
use crate::command::CommandRunner;
use crate::context::Context;
use crate::error::ExitCode;
use crate::git::{self, GitError};

use gitlab::{Client, Project};
use remote::RemoteError;

#[derive(Debug, thiserror::Error)]
pub enum LintError {
    #[error(transparent)]
    Git(#[from] GitError),

    #[error("unable to get GitLab host: {0}")]
    InvalidRemote(#[from] RemoteError),

    #[error(
        "GitLab token not provided; use the {} environment variable, -t/--token, or `pass insert {key}`",
        crate::env::names::GCL_PERSONAL_ACCESS_TOKEN
    )]
    MissingToken { key: String },

    #[error("failed to authenticate with '{host}': {message}")]
    Authentication { host: String, message: String },

    #[error("GET request to '{host}' failed: {message}")]
    NotFound { host: String, message: String },

    #[error("request to '{host}' failed with status {status}: {message}")]
    Api {
        host: String,
        status: u16,
        message: String,
    },

    #[error("request to '{host}' failed: {source}")]
    Request {
        host: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("failed to read file '{}': {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("linting of file '{}' failed: {message}", .path.display())]
    LintFailed { path: PathBuf, message: String },
}

/// Lint one file's content against `project`.
pub fn lint_file(project: &Project<'_>, path: &Path) -> Result<(), LintError> {
    let content = std::fs::read_to_string(path).map_err(|source| LintError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let report = project.lint(&content)?;
    for warning in &report.warnings {
        tracing::debug!("{}: {}", path.display(), warning);
    }
    if !report.valid {
        return Err(LintError::LintFailed {
            path: path.to_path_buf(),
            message: report.errors.join(", "),
        });
    }
    Ok(())
}

/// Lint every file in order, stopping at the first failure.
pub fn lint_files(project: &Project<'_>, files: &[PathBuf]) -> Result<(), LintError> {
    for file in files {
        tracing::debug!("linting file: {} (project {})", file.display(), project.path());
        lint_file(project, file)?;
    }
    Ok(())
}

/// Entry point for `gitlab-ci-lint`.
///
/// `cwd` is where the repository lookup starts.
pub fn run<E: Write>(
    ctx: &mut Context<E>,
    runner: &dyn CommandRunner,
    args: &LintArgs,
    cwd: &Path,
) -> Result<ExitCode, LintError> {
    tracing::debug!(
        "files: {:?}, token given: {} (verbose: {})",
        args.files,
        args.token.is_some(),
        ctx.verbosity.is_enabled()
    );

    let origin = git::origin_url(cwd)?;
    let remote = remote::parse_remote(&origin)?;
    tracing::debug!("GitLab host {} project {}", remote.host_url, remote.path);

    let token = token::resolve_token(runner, args.token.as_deref(), &remote.host_url)?;
    let client = Client::new(&remote.host_url, &token)?;
    let project = client.project(&remote.path);

    lint_files(&project, &args.files)?;
    Ok(ExitCode::Success)
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
