// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! gitlab-ci-fmt entry point.

use clap::Parser;

use gitlab_ci_tools::error::usage_exit_code;
use gitlab_ci_tools::{Context, ExitCode, FmtArgs, SystemRunner, Verbosity, fmt, logging};

const PROG: &str = "gitlab-ci-fmt";

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
    let args = match FmtArgs::try_parse() {
        Ok(args) => args,
        Err(e) => {
            e.print()?;
            return Ok(usage_exit_code(&e));
        }
    };

    let verbosity = Verbosity::resolve(args.verbose);
    logging::init(verbosity);

    let mut ctx = Context::stderr(verbosity);
    Ok(fmt::run(&mut ctx, &SystemRunner, &args)?)
}
