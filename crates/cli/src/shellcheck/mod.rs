// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! ShellCheck for scripts embedded in pipeline files.
//!
//! Scripts of every input file are extracted into temporary files, linted
//! with a single `shellcheck` invocation, and the diagnostics are rewritten
//! to name `{file}@{job}.{stage}` instead of the temporary paths.

pub mod document;
pub mod extract;

use std::io::Write;
use std::path::{Path, PathBuf};

use crate::cli::ShellcheckArgs;
use crate::command::{CommandError, CommandRunner, Invocation, run_captured};
use crate::context::Context;
use crate::error::ExitCode;
use crate::preflight::{self, PreflightError, Tool};

use extract::FragmentRegistry;

#[derive(Debug, thiserror::Error)]
pub enum ShellcheckError {
    #[error("shellcheck check failed: {0}")]
    Preflight(#[from] PreflightError),

    #[error("failed to access '{}': {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to load yaml file '{}': {message}", .path.display())]
    Parse { path: PathBuf, message: String },

    #[error("object type of '{}' is '{found}', expected 'mapping'", .path.display())]
    Shape { path: PathBuf, found: &'static str },

    #[error("failed to create temporary directory: {0}")]
    TempDir(#[source] std::io::Error),

    #[error("failed to write script of '{}': {source}", .path.display())]
    WriteFragment {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Delegate(#[from] CommandError),

    #[error("failed to write diagnostics: {0}")]
    Output(#[source] std::io::Error),
}

/// Extract every script stage of `path` into `registry`.
pub fn extract_file(registry: &mut FragmentRegistry, path: &Path) -> Result<(), ShellcheckError> {
    let text = std::fs::read_to_string(path).map_err(|source| ShellcheckError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let doc = document::parse(&text).map_err(|err| ShellcheckError::Parse {
        path: path.to_path_buf(),
        message: err.to_string().replace('\n', " "),
    })?;
    tracing::trace!("yaml data: {:?}", doc);

    let stages = extract::script_stages(&doc).map_err(|err| ShellcheckError::Shape {
        path: path.to_path_buf(),
        found: err.found,
    })?;

    for stage in &stages {
        registry
            .add(path, stage)
            .map_err(|source| ShellcheckError::WriteFragment {
                path: path.to_path_buf(),
                source,
            })?;
    }
    Ok(())
}

/// The single linter invocation covering every fragment.
pub fn shellcheck_invocation(args: &ShellcheckArgs, registry: &FragmentRegistry) -> Invocation {
    Invocation::new("shellcheck")
        .arg(format!("-C{}", args.color))
        .arg(format!("--severity={}", args.severity))
        .arg("--")
        .args(registry.paths())
}

/// Entry point for `gitlab-ci-shellcheck`.
pub fn run<E: Write>(
    ctx: &mut Context<E>,
    runner: &dyn CommandRunner,
    args: &ShellcheckArgs,
) -> Result<ExitCode, ShellcheckError> {
    tracing::debug!("args: {:?} (verbose: {})", args, ctx.verbosity.is_enabled());

    preflight::check_tool(runner, &Tool::shellcheck())?;

    let mut registry = FragmentRegistry::new().map_err(ShellcheckError::TempDir)?;
    for file in &args.files {
        extract_file(&mut registry, file)?;
    }

    if registry.is_empty() {
        tracing::debug!("no scripts to check");
        return Ok(ExitCode::Success);
    }

    tracing::debug!(
        "checking {} scripts in {}",
        registry.len(),
        registry.dir().display()
    );
    let captured = run_captured(runner, &shellcheck_invocation(args, &registry))?;
    let message = registry.remap(&captured.combined());

    if captured.success() {
        return Ok(ExitCode::Success);
    }
    ctx.emit(&message).map_err(ShellcheckError::Output)?;
    Ok(ExitCode::Failure)
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
