// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Script extraction and diagnostic remapping.
//!
//! Each script stage of each job becomes one file in a private temporary
//! directory, named by a random UUID. The registry remembers which
//! `{file}@{job}.{stage}` each path stands for so linter output can be
//! rewritten to point at the pipeline instead of the temporary file.

use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use tempfile::TempDir;
use uuid::Uuid;

use super::document::Node;

/// Job keys holding shell command lines.
pub const SCRIPT_STAGES: &[&str] = &["before_script", "script", "after_script"];

/// One script stage of one job.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Stage {
    pub job: String,
    pub stage: String,
    pub script: String,
}

/// The document's top level is not a mapping.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotAMapping {
    pub found: &'static str,
}

/// Collect every script stage of every mapping-valued top-level entry.
///
/// Entries whose value is not a mapping are not jobs and are skipped.
pub fn script_stages(doc: &Node) -> Result<Vec<Stage>, NotAMapping> {
    let entries = doc.as_mapping().ok_or(NotAMapping { found: doc.kind() })?;

    let mut stages = Vec::new();
    for (job, value) in entries {
        let Some(keys) = value.as_mapping() else {
            continue;
        };
        for (stage, script) in keys {
            if SCRIPT_STAGES.contains(&stage.as_str()) {
                stages.push(Stage {
                    job: job.clone(),
                    stage: stage.clone(),
                    script: script_text(script),
                });
            }
        }
    }
    Ok(stages)
}

/// Join a stage's command lines with newlines.
///
/// Nested sequences are flattened, a lone scalar is a one-line script,
/// and null entries contribute nothing.
pub fn script_text(node: &Node) -> String {
    let mut lines = Vec::new();
    collect_lines(node, &mut lines);
    lines.join("\n")
}

fn collect_lines<'a>(node: &'a Node, lines: &mut Vec<&'a str>) {
    match node {
        Node::Null => {}
        Node::Scalar(line) => lines.push(line),
        Node::Sequence(items) => {
            for item in items {
                collect_lines(item, lines);
            }
        }
        Node::Mapping(_) => {
            tracing::debug!("ignoring mapping inside script");
        }
    }
}

/// A script written to disk and the pipeline location it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fragment {
    pub path: PathBuf,
    pub label: String,
}

impl Fragment {
    /// The path exactly as passed to the linter.
    pub fn path_text(&self) -> String {
        self.path.display().to_string()
    }
}

/// Temporary directory of fragments plus the path -> label mapping.
///
/// The directory and every fragment are removed when the registry drops.
pub struct FragmentRegistry {
    dir: TempDir,
    fragments: Vec<Fragment>,
}

impl FragmentRegistry {
    pub fn new() -> io::Result<Self> {
        let dir = tempfile::Builder::new()
            .prefix("gitlab-ci-shellcheck-")
            .tempdir()?;
        tracing::debug!("temporary directory: {}", dir.path().display());
        Ok(Self {
            dir,
            fragments: Vec::new(),
        })
    }

    pub fn dir(&self) -> &Path {
        self.dir.path()
    }

    pub fn is_empty(&self) -> bool {
        self.fragments.is_empty()
    }

    pub fn len(&self) -> usize {
        self.fragments.len()
    }

    /// Linter arguments, in registration order.
    pub fn paths(&self) -> Vec<String> {
        self.fragments.iter().map(Fragment::path_text).collect()
    }

    /// Write `stage` of `source` to a fresh file and register it.
    pub fn add(&mut self, source: &Path, stage: &Stage) -> io::Result<&Fragment> {
        let path = self.dir.path().join(Uuid::new_v4().to_string());
        let mut file = OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&path)?;
        file.write_all(stage.script.as_bytes())?;
        file.flush()?;

        let label = format!("{}@{}.{}", source.display(), stage.job, stage.stage);
        tracing::debug!("fragment {} => {}", path.display(), label);
        tracing::trace!("script:\n{}", stage.script);

        let index = self.fragments.len();
        self.fragments.push(Fragment { path, label });
        Ok(&self.fragments[index])
    }

    /// Replace every fragment path in `text` with its label.
    pub fn remap(&self, text: &str) -> String {
        self.fragments
            .iter()
            .fold(text.to_string(), |acc, fragment| {
                acc.replace(&fragment.path_text(), &fragment.label)
            })
    }
}

#[cfg(test)]
#[path = "extract_tests.rs"]
mod tests;
