// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Pipeline formatter.
//!
//! Key reordering and the equivalence check are delegated to `yq`; this
//! module sequences the queries and decides whether to write the file back.

pub mod query;

use std::io::Write;
use std::path::{Path, PathBuf};

use crate::cli::FmtArgs;
use crate::command::{CommandError, CommandRunner, Invocation, run_checked};
use crate::context::Context;
use crate::error::ExitCode;
use crate::preflight::{self, PreflightError, Tool};

#[derive(Debug, thiserror::Error)]
pub enum FmtError {
    #[error("yq check failed: {0}")]
    Preflight(#[from] PreflightError),

    #[error("failed to access '{}': {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to access '{}': {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Delegate(#[from] CommandError),

    #[error("source and destination are not equivalent")]
    Malformed,

    #[error("failed to format file '{}': {source}", .path.display())]
    File {
        path: PathBuf,
        #[source]
        source: Box<FmtError>,
    },
}

fn yq(query: &str, input: &str) -> Invocation {
    Invocation::new("yq").arg(query).stdin(input)
}

/// Canonical form of a document: keys sorted at every depth.
pub fn sort_keys(runner: &dyn CommandRunner, yml: &str) -> Result<String, CommandError> {
    let inv = Invocation::new("yq").args(["-P", query::SORT_KEYS]).stdin(yml);
    Ok(run_checked(runner, &inv)?.stdout)
}

/// Whether two documents hold the same data once keys are sorted.
pub fn equivalent(runner: &dyn CommandRunner, src: &str, dst: &str) -> Result<bool, CommandError> {
    Ok(sort_keys(runner, src)? == sort_keys(runner, dst)?)
}

/// Reorder top-level and job keys of a pipeline document.
///
/// The result is discarded with [`FmtError::Malformed`] unless it is
/// equivalent to the input.
pub fn format_pipeline(runner: &dyn CommandRunner, yml: &str) -> Result<String, FmtError> {
    let result = run_checked(runner, &yq(&query::order_top_keys(), yml))?.stdout;
    let result = run_checked(runner, &yq(&query::order_job_keys(), &result))?.stdout;

    if !equivalent(runner, yml, &result)? {
        return Err(FmtError::Malformed);
    }
    Ok(result)
}

/// Format one file in place. Returns whether the file changed.
pub fn format_file(runner: &dyn CommandRunner, path: &Path) -> Result<bool, FmtError> {
    let source = std::fs::read_to_string(path).map_err(|source| FmtError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let result = format_pipeline(runner, &source).map_err(|err| FmtError::File {
        path: path.to_path_buf(),
        source: Box::new(err),
    })?;
    tracing::debug!("formatting result:\n{}", result);

    if result == source {
        return Ok(false);
    }
    std::fs::write(path, &result).map_err(|source| FmtError::Write {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(true)
}

/// Entry point for `gitlab-ci-fmt`.
pub fn run<E: Write>(
    ctx: &mut Context<E>,
    runner: &dyn CommandRunner,
    args: &FmtArgs,
) -> Result<ExitCode, FmtError> {
    tracing::debug!("args: {:?} (verbose: {})", args, ctx.verbosity.is_enabled());

    preflight::check_tool(runner, &Tool::yq())?;

    for file in &args.files {
        tracing::debug!("formatting file: {}", file.display());
        if format_file(runner, file)? {
            tracing::debug!("rewrote {}", file.display());
        }
    }
    Ok(ExitCode::Success)
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
