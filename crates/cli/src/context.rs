// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Per-run context handed to each tool entry point.

use std::io::{self, Write};

use crate::verbose::Verbosity;

/// Verbosity plus the sink that receives user-facing diagnostics.
pub struct Context<E: Write = io::Stderr> {
    pub verbosity: Verbosity,
    pub err: E,
}

impl Context<io::Stderr> {
    /// Context writing diagnostics to the process stderr.
    pub fn stderr(verbosity: Verbosity) -> Self {
        Self::new(verbosity, io::stderr())
    }
}

impl<E: Write> Context<E> {
    pub fn new(verbosity: Verbosity, err: E) -> Self {
        Self { verbosity, err }
    }

    /// Write diagnostic text verbatim to the sink.
    pub fn emit(&mut self, text: &str) -> io::Result<()> {
        self.err.write_all(text.as_bytes())?;
        self.err.flush()
    }
}
