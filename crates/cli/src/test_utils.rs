//! Shared unit test utilities.
//!
//! Provides a scripted [`CommandRunner`] and filesystem helpers.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use std::cell::RefCell;
use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::command::{Captured, CommandRunner, Invocation};

type Responder = Box<dyn Fn(&Invocation) -> Captured>;

impl Captured {
    /// Successful exit with the given stdout.
    pub fn ok(stdout: &str) -> Self {
        Self {
            code: Some(0),
            stdout: stdout.to_string(),
            stderr: String::new(),
        }
    }

    /// Failed exit with the given stderr.
    pub fn failed(code: i32, stderr: &str) -> Self {
        Self {
            code: Some(code),
            stdout: String::new(),
            stderr: stderr.to_string(),
        }
    }
}

/// Runner that answers per program and records every invocation.
///
/// Programs without a responder behave as if missing from `PATH`.
#[derive(Default)]
pub struct FakeRunner {
    responders: HashMap<String, Responder>,
    calls: RefCell<Vec<Invocation>>,
}

impl FakeRunner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Always answer `program` with `captured`.
    pub fn respond(self, program: &str, captured: Captured) -> Self {
        self.respond_with(program, move |_| captured.clone())
    }

    /// Answer `program` by calling `f` with the invocation.
    pub fn respond_with(
        mut self,
        program: &str,
        f: impl Fn(&Invocation) -> Captured + 'static,
    ) -> Self {
        self.responders.insert(program.to_string(), Box::new(f));
        self
    }

    /// Every invocation seen so far, in order.
    pub fn calls(&self) -> Vec<Invocation> {
        self.calls.borrow().clone()
    }

    /// Invocations of a single program.
    pub fn calls_to(&self, program: &str) -> Vec<Invocation> {
        self.calls()
            .into_iter()
            .filter(|inv| inv.program == program)
            .collect()
    }
}

impl CommandRunner for FakeRunner {
    fn run(&self, invocation: &Invocation) -> io::Result<Captured> {
        self.calls.borrow_mut().push(invocation.clone());
        match self.responders.get(&invocation.program) {
            Some(responder) => Ok(responder(invocation)),
            None => Err(io::Error::new(
                io::ErrorKind::NotFound,
                format!("{} not found", invocation.program),
            )),
        }
    }
}

/// Write `content` to `name` under `root` and return the full path.
pub fn write_file(root: &Path, name: &str, content: &str) -> PathBuf {
    let path = root.join(name);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(&path, content).unwrap();
    path
}
