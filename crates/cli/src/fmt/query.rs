// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! yq expressions used by the formatter.

/// Top-level keys that lead the document, in this order.
pub const TOP_LEVEL_KEYS: &[&str] = &["workflow", "stages", "variables", "include", "default"];

/// Job keys that lead each job mapping, in this order.
pub const JOB_KEYS: &[&str] = &[
    "extends",
    "stage",
    "tags",
    "image",
    "services",
    "only",
    "except",
    "rules",
    "when",
    "dependencies",
    "secrets",
    "needs",
    "artifacts",
    "coverage",
    "dast_configuration",
    "pages",
    "environment",
    "release",
    "trigger",
    "retry",
    "timeout",
    "parallel",
    "allow_failure",
    "interruptible",
    "resource_group",
    "variables",
    "inherit",
    "cache",
    "before_script",
    "script",
    "after_script",
];

/// Deep key sort used to compare documents.
pub const SORT_KEYS: &str = "sort_keys(..)";

/// `pick` the preferred keys first, then every remaining key once.
fn pick_preferred(keys: &[&str]) -> String {
    let list = keys
        .iter()
        .map(|key| format!("{key:?}"))
        .collect::<Vec<_>>()
        .join(", ");
    format!("pick(([{list}] + keys) | unique)")
}

/// Reorder the document's top-level keys.
pub fn order_top_keys() -> String {
    format!(". |= {}", pick_preferred(TOP_LEVEL_KEYS))
}

/// Reorder the keys of every mapping-valued top-level entry.
pub fn order_job_keys() -> String {
    format!(
        r#".[] |= (select(tag == "!!map") | {})"#,
        pick_preferred(JOB_KEYS)
    )
}

#[cfg(test)]
#[path = "query_tests.rs"]
mod tests;
