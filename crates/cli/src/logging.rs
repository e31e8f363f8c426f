// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Tracing subscriber setup shared by the binaries.

use tracing_subscriber::{EnvFilter, fmt};

use crate::verbose::Verbosity;

/// Install the global subscriber.
///
/// `GITLAB_CI_LOG` takes precedence; otherwise the verbosity picks between
/// `debug` and `warn`.
pub fn init(verbosity: Verbosity) {
    let filter = crate::env::log_filter()
        .and_then(|directive| EnvFilter::try_new(directive).ok())
        .unwrap_or_else(|| EnvFilter::new(verbosity.directive()));

    let _ = fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
