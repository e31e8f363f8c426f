// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Subprocess invocation for delegate tools.
//!
//! Every external program (`yq`, `shellcheck`, `pass`) goes through the
//! [`CommandRunner`] trait so tools can be exercised without the real
//! binaries installed.

use std::fmt;
use std::io::{self, Write};
use std::process::{Command, Stdio};

/// A program, its arguments, and optional text piped to stdin.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub program: String,
    pub args: Vec<String>,
    pub stdin: Option<String>,
}

impl Invocation {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
            stdin: None,
        }
    }

    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }

    pub fn stdin(mut self, input: impl Into<String>) -> Self {
        self.stdin = Some(input.into());
        self
    }
}

impl fmt::Display for Invocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.program)?;
        for arg in &self.args {
            write!(f, " {arg:?}")?;
        }
        Ok(())
    }
}

/// Captured result of a finished process.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Captured {
    /// Exit code, `None` when terminated by a signal.
    pub code: Option<i32>,
    pub stdout: String,
    pub stderr: String,
}

impl Captured {
    pub fn success(&self) -> bool {
        self.code == Some(0)
    }

    /// Stderr followed by stdout, the order diagnostics are shown in.
    pub fn combined(&self) -> String {
        let mut text = String::with_capacity(self.stderr.len() + self.stdout.len());
        text.push_str(&self.stderr);
        text.push_str(&self.stdout);
        text
    }
}

/// Failure of a delegate command.
#[derive(Debug, thiserror::Error)]
pub enum CommandError {
    /// The program could not be started (usually not on `PATH`).
    #[error("failed to run `{program}`: {source}")]
    Spawn {
        program: String,
        #[source]
        source: io::Error,
    },

    /// The program ran and exited non-zero.
    #[error("`{program}` failed{}: {stderr:?}", exit_suffix(.code))]
    Failed {
        program: String,
        code: Option<i32>,
        stderr: String,
    },
}

fn exit_suffix(code: &Option<i32>) -> String {
    match code {
        Some(code) => format!(" with exit code {code}"),
        None => " (terminated by signal)".to_string(),
    }
}

/// Executes invocations and captures their output.
pub trait CommandRunner {
    fn run(&self, invocation: &Invocation) -> io::Result<Captured>;
}

/// Runner backed by `std::process::Command`.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemRunner;

impl CommandRunner for SystemRunner {
    fn run(&self, invocation: &Invocation) -> io::Result<Captured> {
        let mut cmd = Command::new(&invocation.program);
        cmd.args(&invocation.args);
        cmd.stdout(Stdio::piped());
        cmd.stderr(Stdio::piped());
        cmd.stdin(if invocation.stdin.is_some() {
            Stdio::piped()
        } else {
            Stdio::null()
        });

        let mut child = cmd.spawn()?;
        let pipe = child.stdin.take();

        // Feed stdin while the pipes drain so neither side blocks.
        let output = std::thread::scope(|scope| {
            let writer = pipe
                .zip(invocation.stdin.as_deref())
                .map(|(pipe, input)| scope.spawn(move || feed(pipe, input)));

            let output = child.wait_with_output()?;
            if let Some(writer) = writer {
                writer
                    .join()
                    .map_err(|_| io::Error::other("stdin writer panicked"))??;
            }
            Ok::<_, io::Error>(output)
        })?;

        Ok(Captured {
            code: output.status.code(),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        })
    }
}

/// Write `input` to a child's stdin and close it.
///
/// A child that exits before reading everything reports through its exit
/// status and stderr, so a broken pipe is ignored.
fn feed(mut pipe: impl Write, input: &str) -> io::Result<()> {
    match pipe.write_all(input.as_bytes()) {
        Err(err) if err.kind() == io::ErrorKind::BrokenPipe => Ok(()),
        result => result,
    }
}

/// Run an invocation and capture its output regardless of exit status.
///
/// Only a failure to start the program is an error.
pub fn run_captured(
    runner: &dyn CommandRunner,
    invocation: &Invocation,
) -> Result<Captured, CommandError> {
    tracing::debug!("running command: {}", invocation);
    runner.run(invocation).map_err(|source| CommandError::Spawn {
        program: invocation.program.clone(),
        source,
    })
}

/// Run an invocation, treating a non-zero exit as [`CommandError::Failed`].
pub fn run_checked(
    runner: &dyn CommandRunner,
    invocation: &Invocation,
) -> Result<Captured, CommandError> {
    let captured = run_captured(runner, invocation)?;
    if captured.success() {
        Ok(captured)
    } else {
        Err(CommandError::Failed {
            program: invocation.program.clone(),
            code: captured.code,
            stderr: captured.stderr.trim().to_string(),
        })
    }
}

#[cfg(test)]
#[path = "command_tests.rs"]
mod tests;
