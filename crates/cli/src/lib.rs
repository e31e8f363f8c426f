pub mod cli;
pub mod command;
pub mod context;
pub mod env;
pub mod error;
pub mod fmt;
pub mod git;
pub mod lint;
pub mod logging;
pub mod preflight;
pub mod shellcheck;
pub mod verbose;

pub use cli::{ColorMode, FmtArgs, LintArgs, Severity, ShellcheckArgs};
pub use command::{Captured, CommandError, CommandRunner, Invocation, SystemRunner};
pub use context::Context;
pub use error::ExitCode;
pub use fmt::FmtError;
pub use lint::LintError;
pub use shellcheck::ShellcheckError;
pub use verbose::Verbosity;

#[cfg(test)]
pub mod test_utils;
