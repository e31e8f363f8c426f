// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! gitlab-ci-lint entry point.

use clap::Parser;

use gitlab_ci_tools::error::usage_exit_code;
use gitlab_ci_tools::{Context, ExitCode, LintArgs, SystemRunner, Verbosity, lint, logging};

const PROG: &str = "gitlab-ci-lint";

fn main() {
    let exit_code = match run() {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{PROG}: {e}");
            ExitCode::Failure
        }
    };

    std::process::exit(exit_code.code());
}

fn run() -> anyhow::Result<ExitCode> {
    let args = match LintArgs::try_parse() {
        Ok(args) => args,
        Err(e) => {
            e.print()?;
            return Ok(usage_exit_code(&e));
        }
    };

    // No --verbose flag; DEBUG alone controls diagnostics.
    let verbosity = Verbosity::resolve(false);
    logging::init(verbosity);

    let cwd = std::env::current_dir()?;
    let mut ctx = Context::stderr(verbosity);
    Ok(lint::run(&mut ctx, &SystemRunner, &args, &cwd)?)
}
